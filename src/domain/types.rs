// ==========================================
// 采购明细汇总 - 领域类型定义
// ==========================================
// 职责: 抽出阈值 / 列名映射 / 会计年度规则
// ==========================================

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ==========================================
// 会计年度 (Fiscal Year)
// ==========================================
// 10月开始: 10~12月归当年, 1~9月归上一年
pub const FISCAL_YEAR_START_MONTH: u32 = 10;

/// 计算交货日所属会计年度
///
/// # 示例
/// - 2023-09-30 → 2022
/// - 2023-10-01 → 2023
pub fn fiscal_year(date: NaiveDate) -> i32 {
    if date.month() >= FISCAL_YEAR_START_MONTH {
        date.year()
    } else {
        date.year() - 1
    }
}

// ==========================================
// 抽出阈值 (Thresholds)
// ==========================================
// 三个阈值均为正整数, 判定边界为 >=
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// 最小发注次数（年）
    pub min_order_count: u32,
    /// 最小发注数量（年）
    pub min_quantity: u32,
    /// 最小仕入先数（年）
    pub min_supplier_count: u32,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("阈值必须为正整数: {name}={value}")]
pub struct ThresholdError {
    pub name: &'static str,
    pub value: u32,
}

impl Thresholds {
    /// 创建阈值（任一为 0 则报错）
    pub fn new(
        min_order_count: u32,
        min_quantity: u32,
        min_supplier_count: u32,
    ) -> Result<Self, ThresholdError> {
        let checks = [
            ("min_order_count", min_order_count),
            ("min_quantity", min_quantity),
            ("min_supplier_count", min_supplier_count),
        ];
        if let Some((name, value)) = checks.into_iter().find(|(_, v)| *v == 0) {
            return Err(ThresholdError { name, value });
        }

        Ok(Self {
            min_order_count,
            min_quantity,
            min_supplier_count,
        })
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_order_count: 3,
            min_quantity: 100,
            min_supplier_count: 2,
        }
    }
}

impl fmt::Display for Thresholds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "count>={} qty>={} suppliers>={}",
            self.min_order_count, self.min_quantity, self.min_supplier_count
        )
    }
}

// ==========================================
// 列名映射 (Column Mapping)
// ==========================================
// 源文件列名（默认为日文导出表头）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub supplier_id: String,
    pub item_description: String,
    pub delivery_date: String,
    pub quantity: String,
    pub unit_cost: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            supplier_id: "購入先".to_string(),
            item_description: "品目説明".to_string(),
            delivery_date: "納期".to_string(),
            quantity: "発注".to_string(),
            unit_cost: "品目原価".to_string(),
        }
    }
}

impl ColumnMapping {
    /// 必需列（按固定顺序）
    pub fn required(&self) -> [&str; 5] {
        [
            self.supplier_id.as_str(),
            self.item_description.as_str(),
            self.delivery_date.as_str(),
            self.quantity.as_str(),
            self.unit_cost.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fiscal_year_boundary() {
        let sep = NaiveDate::from_ymd_opt(2023, 9, 30).unwrap();
        let oct = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap();
        assert_eq!(fiscal_year(sep), 2022);
        assert_eq!(fiscal_year(oct), 2023);
    }

    #[test]
    fn test_fiscal_year_calendar_edges() {
        let jan = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let dec = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(fiscal_year(jan), 2023);
        assert_eq!(fiscal_year(dec), 2023);
    }

    #[test]
    fn test_thresholds_reject_zero() {
        assert!(Thresholds::new(3, 100, 2).is_ok());

        let err = Thresholds::new(3, 0, 2).unwrap_err();
        assert_eq!(err.name, "min_quantity");
        assert!(Thresholds::new(0, 1, 1).is_err());
        assert!(Thresholds::new(1, 1, 0).is_err());
    }

    #[test]
    fn test_default_columns_required_order() {
        let columns = ColumnMapping::default();
        assert_eq!(
            columns.required(),
            ["購入先", "品目説明", "納期", "発注", "品目原価"]
        );
    }
}
