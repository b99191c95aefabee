// ==========================================
// 采购明细汇总 - 报表层
// ==========================================
// 职责: 终端显示格式化 / Excel 导出
// ==========================================

pub mod error;
pub mod excel_exporter;
pub mod format;

pub use error::{ExportError, ExportResult};
pub use excel_exporter::{export_file_name, ExcelExporter};
pub use format::{format_thousands, render_table};
