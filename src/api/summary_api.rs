// ==========================================
// 采购明细汇总 - 抽出 API
// ==========================================
// 职责: 供 CLI / 其他嵌入方调用的入口
// 输出: (成功与否, 消息或结果)
// ==========================================

use crate::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::config::PipelineConfig;
use crate::domain::summary::SummaryReport;
use crate::domain::types::Thresholds;
use crate::engine::pipeline::ProcurementPipeline;
use crate::i18n;
use crate::importer::discovery::resolve_input_file;
use crate::importer::loader::ProcurementLoader;
use crate::report::excel_exporter::ExcelExporter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, warn};

/// 一次调用的结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutcome {
    /// 抽出是否成功（导出失败不影响）
    pub success: bool,

    /// 面向用户的消息（已本地化）
    pub message: String,

    /// 抽出结果
    pub report: Option<SummaryReport>,

    /// 导出文件路径
    pub export_path: Option<PathBuf>,

    /// 抽出失败原因
    pub error: Option<ErrorResponse>,

    /// 导出失败原因
    pub export_error: Option<ErrorResponse>,
}

pub struct SummaryApi {
    config: PipelineConfig,
    pipeline: ProcurementPipeline,
    exporter: ExcelExporter,
}

impl SummaryApi {
    /// 根据配置创建
    pub fn new(config: PipelineConfig) -> ApiResult<Self> {
        let loader = ProcurementLoader::with_encoding(&config.encoding, config.columns.clone())?;
        let pipeline =
            ProcurementPipeline::new(loader, config.exclusion_rules(), config.columns.clone());
        let exporter = ExcelExporter::new(&config.output_dir, &config.locale);

        Ok(Self {
            config,
            pipeline,
            exporter,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// 确定输入文件: 显式指定优先, 否则在输入目录中定位唯一 CSV
    pub fn resolve_input(&self, explicit: Option<&Path>) -> ApiResult<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Ok(resolve_input_file(&self.config.input_dir)?),
        }
    }

    /// 抽出对象品目
    pub fn extract(&self, file_path: &Path, thresholds: &Thresholds) -> ApiResult<SummaryReport> {
        Ok(self.pipeline.run(file_path, thresholds)?)
    }

    /// 导出 Excel
    pub fn export(&self, report: &SummaryReport) -> ApiResult<PathBuf> {
        Ok(self.exporter.export(report)?)
    }

    /// 完整调用: 校验阈值 → 定位输入 → 抽出 → （可选）导出
    pub fn run(
        &self,
        input: Option<&Path>,
        min_order_count: u32,
        min_quantity: u32,
        min_supplier_count: u32,
        export: bool,
    ) -> RunOutcome {
        let locale = self.config.locale.as_str();

        let extracted = Thresholds::new(min_order_count, min_quantity, min_supplier_count)
            .map_err(ApiError::from)
            .and_then(|thresholds| {
                let path = self.resolve_input(input)?;
                self.extract(&path, &thresholds)
            });

        let report = match extracted {
            Ok(report) => report,
            Err(err) => {
                error!(code = err.code(), error = %err, "抽出失败");
                return RunOutcome {
                    success: false,
                    message: i18n::t_with_args(
                        "error.occurred",
                        locale,
                        &[("message", &err.to_string())],
                    ),
                    report: None,
                    export_path: None,
                    error: Some(ErrorResponse::from(&err)),
                    export_error: None,
                };
            }
        };

        let mut lines = vec![i18n::t_with_args(
            "summary.extracted",
            locale,
            &[("count", &report.len().to_string())],
        )];
        let stats = &report.stats;
        if stats.total_excluded() > 0 {
            lines.push(i18n::t_with_args(
                "summary.excluded",
                locale,
                &[
                    ("count", &stats.total_excluded().to_string()),
                    ("supplier", &stats.excluded_by_supplier.to_string()),
                    ("marker", &stats.excluded_by_marker.to_string()),
                    ("item", &stats.excluded_by_item.to_string()),
                    ("date", &stats.excluded_by_date.to_string()),
                    ("numeric", &stats.excluded_by_numeric.to_string()),
                ],
            ));
        }

        let mut export_path = None;
        let mut export_error = None;
        if export {
            match self.export(&report) {
                Ok(path) => {
                    lines.push(i18n::t_with_args(
                        "export.saved",
                        locale,
                        &[("path", &path.display().to_string())],
                    ));
                    export_path = Some(path);
                }
                Err(err) => {
                    warn!(code = err.code(), error = %err, "导出失败, 抽出结果仍然有效");
                    lines.push(i18n::t_with_args(
                        "error.occurred",
                        locale,
                        &[("message", &err.to_string())],
                    ));
                    export_error = Some(ErrorResponse::from(&err));
                }
            }
        }

        RunOutcome {
            success: true,
            message: lines.join("\n"),
            report: Some(report),
            export_path,
            error: None,
            export_error,
        }
    }
}
