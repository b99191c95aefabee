// ==========================================
// 采购明细汇总 - 引擎层
// ==========================================
// 职责: 行排除 / 字段派生 / 对象品目判定 / 品目汇总
// 红线: 纯计算, 不做文件读写
// ==========================================

pub mod cleaner;
pub mod enricher;
pub mod error;
pub mod pipeline;
pub mod qualifier;
pub mod summarizer;

// 重导出核心类型
pub use cleaner::{CleanOutcome, Cleaner, ExclusionRules};
pub use enricher::{EnrichOutcome, Enricher};
pub use error::{EnrichmentError, EnrichmentResult, PipelineError};
pub use pipeline::ProcurementPipeline;
pub use qualifier::{Qualification, Qualifier};
pub use summarizer::Summarizer;
