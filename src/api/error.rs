// ==========================================
// 采购明细汇总 - API层错误类型
// ==========================================
// 职责: 汇总各层错误, 转换为单条可读消息 + 稳定错误代码
// ==========================================

use crate::config::ConfigError;
use crate::domain::types::ThresholdError;
use crate::engine::error::{EnrichmentError, PipelineError};
use crate::importer::error::IngestError;
use crate::report::error::ExportError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("读取失败: {0}")]
    Ingest(#[from] IngestError),

    #[error("数据派生失败: {0}")]
    Enrichment(#[from] EnrichmentError),

    #[error("导出失败: {0}")]
    Export(#[from] ExportError),
}

impl From<ThresholdError> for ApiError {
    fn from(err: ThresholdError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Ingest(e) => ApiError::Ingest(e),
            PipelineError::Enrichment(e) => ApiError::Enrichment(e),
        }
    }
}

impl ApiError {
    /// 错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::Config(_) => "CONFIG_ERROR",
            ApiError::Ingest(_) => "INGEST_ERROR",
            ApiError::Enrichment(_) => "ENRICHMENT_ERROR",
            ApiError::Export(_) => "EXPORT_ERROR",
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

/// 错误响应（供嵌入方序列化）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}
