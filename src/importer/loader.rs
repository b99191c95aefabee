// ==========================================
// 采购明细汇总 - 明细加载器
// ==========================================
// 流程: 解析 → 必需列校验 → 空文件校验 → 字段映射
// ==========================================

use crate::domain::record::RawRecord;
use crate::domain::types::ColumnMapping;
use crate::importer::error::{IngestError, IngestResult};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::{CsvParser, FileParser, UniversalFileParser};
use std::path::Path;
use tracing::{info, instrument};

pub struct ProcurementLoader {
    file_parser: Box<dyn FileParser>,
    field_mapper: FieldMapper,
}

impl ProcurementLoader {
    /// 创建加载器
    ///
    /// # 参数
    /// - file_parser: 文件解析器
    /// - columns: 源文件列名映射
    pub fn new(file_parser: Box<dyn FileParser>, columns: ColumnMapping) -> Self {
        Self {
            file_parser,
            field_mapper: FieldMapper::new(columns),
        }
    }

    /// 按编码标签创建（CSV / Excel 自动识别）
    pub fn with_encoding(encoding_label: &str, columns: ColumnMapping) -> IngestResult<Self> {
        let csv = CsvParser::with_encoding_label(encoding_label)?;
        Ok(Self::new(Box::new(UniversalFileParser::new(csv)), columns))
    }

    /// 加载明细
    ///
    /// # 返回
    /// - Ok(Vec<RawRecord>): 至少一行
    /// - Err(IngestError): 文件缺失/不可读/不可解析/缺列/无数据
    #[instrument(skip(self, file_path), fields(path = %file_path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(&self, file_path: P) -> IngestResult<Vec<RawRecord>> {
        let path = file_path.as_ref();
        let table = self.file_parser.parse_to_raw_table(path)?;

        self.field_mapper.check_required_columns(&table.headers)?;

        if table.rows.is_empty() {
            return Err(IngestError::EmptyInput(path.display().to_string()));
        }

        let records: Vec<RawRecord> = table
            .rows
            .iter()
            .map(|row| self.field_mapper.map_to_raw_record(&row.values, row.row_number))
            .collect();

        info!(rows = records.len(), "明细加载完成");
        Ok(records)
    }
}
