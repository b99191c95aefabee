// ==========================================
// 采购明细汇总 - API 层
// ==========================================
// 职责: 对外入口, 错误统一转换
// ==========================================

pub mod error;
pub mod summary_api;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use summary_api::{RunOutcome, SummaryApi};
