// ==========================================
// 采购明细汇总 - 字段映射器实现
// ==========================================
// 职责: 源列名 → 标准字段映射 + 必需列校验
// ==========================================

use crate::domain::record::RawRecord;
use crate::domain::types::ColumnMapping;
use crate::importer::error::{IngestError, IngestResult};
use std::collections::HashMap;

pub struct FieldMapper {
    columns: ColumnMapping,
}

impl FieldMapper {
    pub fn new(columns: ColumnMapping) -> Self {
        Self { columns }
    }

    /// 校验表头是否包含全部必需列
    ///
    /// # 返回
    /// - Err(MissingColumns): 列出所有缺失列（按必需列顺序）
    pub fn check_required_columns(&self, headers: &[String]) -> IngestResult<()> {
        let missing: Vec<String> = self
            .columns
            .required()
            .iter()
            .filter(|name| !headers.iter().any(|h| h == *name))
            .map(|name| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(IngestError::MissingColumns(missing))
        }
    }

    /// 映射单行（缺失单元格视为空字符串）
    pub fn map_to_raw_record(&self, row: &HashMap<String, String>, row_number: usize) -> RawRecord {
        RawRecord {
            supplier_id: self.get_string(row, &self.columns.supplier_id),
            item_description: self.get_string(row, &self.columns.item_description),
            delivery_date: self.get_string(row, &self.columns.delivery_date),
            quantity: self.get_string(row, &self.columns.quantity),
            unit_cost: self.get_string(row, &self.columns.unit_cost),
            row_number,
        }
    }

    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> String {
        row.get(key).map(|v| v.trim().to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_check_required_columns_ok() {
        let mapper = FieldMapper::new(ColumnMapping::default());
        let result = mapper.check_required_columns(&headers(&[
            "購入先", "品目説明", "納期", "発注", "品目原価", "備考",
        ]));
        assert!(result.is_ok());
    }

    #[test]
    fn test_check_required_columns_lists_all_missing() {
        let mapper = FieldMapper::new(ColumnMapping::default());
        let err = mapper
            .check_required_columns(&headers(&["購入先", "納期", "発注"]))
            .unwrap_err();

        match err {
            IngestError::MissingColumns(missing) => {
                assert_eq!(missing, vec!["品目説明", "品目原価"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_map_to_raw_record_trims_and_defaults() {
        let mut row = HashMap::new();
        row.insert("購入先".to_string(), " 10001AB ".to_string());
        row.insert("品目説明".to_string(), "ボルト M8".to_string());
        row.insert("発注".to_string(), "10".to_string());

        let mapper = FieldMapper::new(ColumnMapping::default());
        let record = mapper.map_to_raw_record(&row, 7);

        assert_eq!(record.supplier_id, "10001AB");
        assert_eq!(record.item_description, "ボルト M8");
        assert_eq!(record.quantity, "10");
        assert_eq!(record.delivery_date, "");
        assert_eq!(record.unit_cost, "");
        assert_eq!(record.row_number, 7);
    }
}
