// ==========================================
// 采购明细汇总 - 导出错误类型
// ==========================================

use thiserror::Error;

/// Excel 导出错误（仅影响导出步骤, 抽出结果仍然有效）
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("输出目录创建失败 ({path}): {message}")]
    CreateDirError { path: String, message: String },

    #[error("Excel 写入失败: {0}")]
    WorkbookError(String),

    #[error("文件写入失败 ({path}): {message}")]
    WriteError { path: String, message: String },
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ExportError::WorkbookError(err.to_string())
    }
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
