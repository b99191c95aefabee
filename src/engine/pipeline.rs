// ==========================================
// 采购明细汇总 - 流水线编排
// ==========================================
// 流程: 加载 → 行排除 → 字段派生 → (品目,年度)判定 → 品目汇总 → 排序
// 单线程同步执行, 各阶段之间按值传递, 不共享可变状态
// ==========================================

use crate::domain::record::RawRecord;
use crate::domain::summary::{PipelineStats, SummaryReport};
use crate::domain::types::{ColumnMapping, Thresholds};
use crate::engine::cleaner::{Cleaner, ExclusionRules};
use crate::engine::enricher::Enricher;
use crate::engine::error::{EnrichmentResult, PipelineError};
use crate::engine::qualifier::Qualifier;
use crate::engine::summarizer::Summarizer;
use crate::importer::loader::ProcurementLoader;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument};

pub struct ProcurementPipeline {
    loader: ProcurementLoader,
    cleaner: Cleaner,
    enricher: Enricher,
}

impl ProcurementPipeline {
    /// 创建流水线
    ///
    /// # 参数
    /// - loader: 明细加载器
    /// - rules: 排除规则
    /// - columns: 列名映射（用于错误信息）
    pub fn new(loader: ProcurementLoader, rules: ExclusionRules, columns: ColumnMapping) -> Self {
        Self {
            loader,
            cleaner: Cleaner::new(rules),
            enricher: Enricher::new(columns),
        }
    }

    /// 从文件执行完整流水线
    #[instrument(
        skip(self, file_path, thresholds),
        fields(path = %file_path.as_ref().display(), thresholds = %thresholds)
    )]
    pub fn run<P: AsRef<Path>>(
        &self,
        file_path: P,
        thresholds: &Thresholds,
    ) -> Result<SummaryReport, PipelineError> {
        let start_time = Instant::now();

        debug!("步骤 1: 加载明细");
        let records = self.loader.load(file_path.as_ref())?;

        let report = self.run_records(&records, thresholds)?;

        info!(
            items = report.items.len(),
            excluded = report.stats.total_excluded(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "抽出完成"
        );
        Ok(report)
    }

    /// 对已加载的明细执行清洗之后的各阶段
    pub fn run_records(
        &self,
        records: &[RawRecord],
        thresholds: &Thresholds,
    ) -> EnrichmentResult<SummaryReport> {
        let mut stats = PipelineStats {
            rows_loaded: records.len(),
            ..Default::default()
        };

        debug!("步骤 2: 行排除");
        let cleaned = self.cleaner.clean(records);
        stats.excluded_by_supplier = cleaned.excluded_by_supplier;
        stats.excluded_by_marker = cleaned.excluded_by_marker;

        debug!("步骤 3: 字段派生");
        let enriched = self.enricher.enrich(&cleaned.kept)?;
        stats.excluded_by_item = enriched.excluded_by_item;
        stats.excluded_by_date = enriched.excluded_by_date;
        stats.excluded_by_numeric = enriched.excluded_by_numeric;
        stats.rows_enriched = enriched.records.len();

        debug!("步骤 4: 对象品目判定");
        let qualification = Qualifier::qualify(&enriched.records, thresholds);
        stats.qualifying_groups = qualification.groups.len();
        stats.qualifying_items = qualification.items.len();

        debug!("步骤 5: 品目汇总");
        let items = Summarizer::summarize(&enriched.records, &qualification.items);

        Ok(SummaryReport {
            thresholds: *thresholds,
            items,
            stats,
        })
    }
}
