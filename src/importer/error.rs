// ==========================================
// 采购明细汇总 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入（读取/解析/列校验）错误类型
#[derive(Error, Debug)]
pub enum IngestError {
    // ===== 文件定位错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("输入目录中未找到 CSV 文件: {0}")]
    NoInputFile(String),

    #[error("输入目录中存在多个 CSV 文件（请显式指定）: {dir} → [{}]", .files.join(", "))]
    AmbiguousInput { dir: String, files: Vec<String> },

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    // ===== 文件读取错误 =====
    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("不支持的字符编码: {0}")]
    UnknownEncoding(String),

    #[error("字符解码失败 (编码 {encoding}): {path}")]
    DecodeError { encoding: String, path: String },

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 数据内容错误 =====
    #[error("输入文件无数据行: {0}")]
    EmptyInput(String),

    #[error("缺少必需列: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        IngestError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        IngestError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for IngestError {
    fn from(err: calamine::Error) -> Self {
        IngestError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type IngestResult<T> = Result<T, IngestError>;
