// ==========================================
// 采购明细汇总 - 领域模型层
// ==========================================
// 职责: 定义明细行、汇总结果、阈值等领域类型
// 红线: 不含文件读写逻辑,不含聚合逻辑
// ==========================================

pub mod record;
pub mod summary;
pub mod types;

// 重导出核心类型
pub use record::{EnrichedRecord, RawRecord};
pub use summary::{ItemSummary, PipelineStats, SummaryReport, YearGroup};
pub use types::{fiscal_year, ColumnMapping, ThresholdError, Thresholds};
