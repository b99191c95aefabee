// ==========================================
// 采购明细汇总 - 核心库
// ==========================================
// 功能: 读取采购明细 CSV, 按品目/会计年度判定对象品目,
//       按合计发注金额降序汇总, 可导出 Excel
// 流程: 加载 → 行排除 → 字段派生 → 判定 → 汇总 → 格式化
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "ja");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 外部数据
pub mod importer;

// 引擎层 - 聚合规则
pub mod engine;

// 报表层 - 显示与导出
pub mod report;

// 配置层
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 对外入口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{
    fiscal_year, ColumnMapping, EnrichedRecord, ItemSummary, PipelineStats, RawRecord,
    SummaryReport, Thresholds, YearGroup,
};

pub use engine::{EnrichmentError, ExclusionRules, PipelineError, ProcurementPipeline};

pub use importer::{IngestError, ProcurementLoader};

pub use report::{ExcelExporter, ExportError};

pub use config::PipelineConfig;

pub use api::{ApiError, RunOutcome, SummaryApi};

// ==========================================
// 常量定义
// ==========================================

// 版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 名称
pub const APP_NAME: &str = "コストダウン対象品目 抽出ツール";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
