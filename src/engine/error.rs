// ==========================================
// 采购明细汇总 - 引擎层错误类型
// ==========================================

use thiserror::Error;

/// 派生阶段错误
///
/// 单行解析失败只会被排除, 整列均无法解析才视为系统性失败
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnrichmentError {
    #[error("日期列无法解析 (列 {column}): 全部 {rows} 行均无有效日期")]
    NoParsableDates { column: String, rows: usize },

    #[error("数值列无法解析 (列 {column}): 全部 {rows} 行均非数值")]
    NonNumericColumn { column: String, rows: usize },
}

/// Result 类型别名
pub type EnrichmentResult<T> = Result<T, EnrichmentError>;

/// 流水线错误（任一阶段失败即中止, 不返回部分结果）
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Ingest(#[from] crate::importer::error::IngestError),

    #[error(transparent)]
    Enrichment(#[from] EnrichmentError),
}
