// ==========================================
// 采购明细汇总 - 导入层
// ==========================================
// 职责: 外部文件读取, 生成 RawRecord
// 支持: CSV (CP932/UTF-8), Excel
// ==========================================

// 模块声明
pub mod discovery;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod loader;

// 重导出核心类型
pub use discovery::resolve_input_file;
pub use error::{IngestError, IngestResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ExcelParser, FileParser, RawRow, RawTable, UniversalFileParser};
pub use loader::ProcurementLoader;
