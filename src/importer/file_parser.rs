// ==========================================
// 采购明细汇总 - 文件解析器实现
// ==========================================
// 阶段 0: 文件读取与解析
// 支持: CSV (.csv, 含 CP932 等旧编码) / Excel (.xlsx/.xls)
// ==========================================

use crate::importer::error::{IngestError, IngestResult};
use calamine::{open_workbook_auto, Data, DataType, Reader};
use csv::ReaderBuilder;
use encoding_rs::Encoding;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// 数据行（列名 → 单元格文本）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    /// 表头之后的数据行序号, 从 1 开始, 被跳过的空白行也占号
    pub row_number: usize,
    pub values: HashMap<String, String>,
}

/// 解析后的原始表（表头已清洗）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

// ==========================================
// FileParser Trait
// ==========================================
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始表
    ///
    /// # 返回
    /// - Ok(RawTable): 表头 + 行（列名 → 单元格文本）
    /// - Err: 文件不存在 / 格式不支持 / 解码或解析失败
    fn parse_to_raw_table(&self, file_path: &Path) -> IngestResult<RawTable>;
}

/// 清洗表头: 去除首尾空白与所有双引号
pub fn clean_header(header: &str) -> String {
    header.trim().replace('"', "").trim().to_string()
}

/// 根据编码标签查找编码（cp932 映射为 windows-31j）
pub fn resolve_encoding(label: &str) -> IngestResult<&'static Encoding> {
    let normalized = label.trim().to_ascii_lowercase();
    let lookup = match normalized.as_str() {
        "cp932" | "windows-932" | "ms-932" => "windows-31j",
        other => other,
    };

    Encoding::for_label(lookup.as_bytes())
        .ok_or_else(|| IngestError::UnknownEncoding(label.to_string()))
}

fn ensure_exists(path: &Path) -> IngestResult<()> {
    if !path.exists() {
        return Err(IngestError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser {
    encoding: &'static Encoding,
}

impl CsvParser {
    pub fn new(encoding: &'static Encoding) -> Self {
        Self { encoding }
    }

    /// 按编码标签创建（如 "cp932" / "utf-8"）
    pub fn with_encoding_label(label: &str) -> IngestResult<Self> {
        Ok(Self::new(resolve_encoding(label)?))
    }

    /// 解码文件字节（带 BOM 时以 BOM 为准）
    fn decode(&self, bytes: &[u8], path: &Path) -> IngestResult<String> {
        let (text, actual, had_errors) = self.encoding.decode(bytes);
        if had_errors {
            return Err(IngestError::DecodeError {
                encoding: actual.name().to_string(),
                path: path.display().to_string(),
            });
        }
        Ok(text.into_owned())
    }
}

impl FileParser for CsvParser {
    fn parse_to_raw_table(&self, file_path: &Path) -> IngestResult<RawTable> {
        let path = file_path;
        ensure_exists(path)?;

        // 检查扩展名
        if let Some(ext) = path.extension() {
            if !ext.eq_ignore_ascii_case("csv") {
                return Err(IngestError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let bytes = std::fs::read(path)?;
        let text = self.decode(&bytes, path)?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(clean_header).collect();

        let mut rows = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(RawRow {
                row_number: idx + 1,
                values: row_map,
            });
        }

        debug!(
            encoding = self.encoding.name(),
            columns = headers.len(),
            rows = rows.len(),
            "CSV 解析完成"
        );

        Ok(RawTable { headers, rows })
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_raw_table(&self, file_path: &Path) -> IngestResult<RawTable> {
        let path = file_path;
        ensure_exists(path)?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "xlsx" && ext != "xls" {
            return Err(IngestError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(path)?;

        // 读取第一个 sheet
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| IngestError::ExcelParseError("Excel 文件无工作表".to_string()))?;
        let range = workbook.worksheet_range(&sheet_name)?;

        // 提取表头（第一行）
        let mut sheet_rows = range.rows();
        let header_row = match sheet_rows.next() {
            Some(row) => row,
            None => return Ok(RawTable::default()),
        };
        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| clean_header(&cell.to_string()))
            .collect();

        let mut rows = Vec::new();
        for (idx, data_row) in sheet_rows.enumerate() {
            let mut row_map = HashMap::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), cell_text(cell));
                }
            }

            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(RawRow {
                row_number: idx + 1,
                values: row_map,
            });
        }

        debug!(sheet = %sheet_name, rows = rows.len(), "Excel 解析完成");

        Ok(RawTable { headers, rows })
    }
}

/// 单元格 → 文本; 日期单元格输出为 %Y-%m-%d, 而非序列值
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_date()
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| cell.to_string()),
        _ => cell.to_string().trim().to_string(),
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser {
    csv: CsvParser,
}

impl UniversalFileParser {
    pub fn new(csv: CsvParser) -> Self {
        Self { csv }
    }
}

impl FileParser for UniversalFileParser {
    fn parse_to_raw_table(&self, file_path: &Path) -> IngestResult<RawTable> {
        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => self.csv.parse_to_raw_table(file_path),
            "xlsx" | "xls" => ExcelParser.parse_to_raw_table(file_path),
            _ => Err(IngestError::UnsupportedFormat(ext)),
        }
    }
}
