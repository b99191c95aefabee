// ==========================================
// 采购明细汇总 - 字段派生
// ==========================================
// 派生: delivery_date 解析 / fiscal_year / line_total
// 规则:
// - 日期无法解析的行 → 排除（不报错）
// - 数量或单价缺失/非数值的行 → 排除（不按 0 处理）
// - 某一必需列在全部行上均无法解析 → EnrichmentError
// ==========================================

use crate::domain::record::{EnrichedRecord, RawRecord};
use crate::domain::types::{fiscal_year, ColumnMapping};
use crate::engine::error::{EnrichmentError, EnrichmentResult};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::{info, trace, warn};

/// 支持的日期格式
const DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%Y-%m-%d", "%Y%m%d", "%Y.%m.%d"];

/// 支持的日期时间格式（取日期部分）
const DATETIME_FORMATS: &[&str] = &[
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y.%m.%d %H:%M:%S",
];

/// 解析交货日期
pub fn parse_delivery_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// 解析数值（允许千分位逗号, 拒绝 NaN/inf）
pub fn parse_number(value: &str) -> Option<f64> {
    let cleaned: String = value.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 派生结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichOutcome {
    pub records: Vec<EnrichedRecord>,
    pub excluded_by_item: usize,
    pub excluded_by_date: usize,
    pub excluded_by_numeric: usize,
}

pub struct Enricher {
    columns: ColumnMapping,
}

impl Enricher {
    pub fn new(columns: ColumnMapping) -> Self {
        Self { columns }
    }

    /// 派生全部行
    ///
    /// # 返回
    /// - Ok(EnrichOutcome): 成功派生的行 + 各类排除计数
    /// - Err(EnrichmentError): 日期/数量/单价某列整体无法解析
    pub fn enrich(&self, records: &[RawRecord]) -> EnrichmentResult<EnrichOutcome> {
        let mut outcome = EnrichOutcome::default();
        let mut any_date = false;
        let mut any_quantity = false;
        let mut any_unit_cost = false;

        for record in records {
            let date = parse_delivery_date(&record.delivery_date);
            let quantity = parse_number(&record.quantity);
            let unit_cost = parse_number(&record.unit_cost);

            any_date |= date.is_some();
            any_quantity |= quantity.is_some();
            any_unit_cost |= unit_cost.is_some();

            // 品目说明为空的行不属于任何品目
            if record.item_description.is_empty() {
                trace!(row = record.row_number, "品目说明为空");
                outcome.excluded_by_item += 1;
                continue;
            }

            let Some(delivery_date) = date else {
                trace!(row = record.row_number, value = %record.delivery_date, "日期无法解析");
                outcome.excluded_by_date += 1;
                continue;
            };

            let (Some(quantity), Some(unit_cost)) = (quantity, unit_cost) else {
                trace!(
                    row = record.row_number,
                    quantity = %record.quantity,
                    unit_cost = %record.unit_cost,
                    "数量/单价无法解析"
                );
                outcome.excluded_by_numeric += 1;
                continue;
            };

            outcome.records.push(EnrichedRecord {
                supplier_id: record.supplier_id.clone(),
                item_description: record.item_description.clone(),
                delivery_date,
                quantity,
                unit_cost,
                fiscal_year: fiscal_year(delivery_date),
                line_total: quantity * unit_cost,
                row_number: record.row_number,
            });
        }

        if !records.is_empty() {
            self.check_systemic(records.len(), any_date, any_quantity, any_unit_cost)?;
        }

        if outcome.excluded_by_item + outcome.excluded_by_date + outcome.excluded_by_numeric > 0 {
            warn!(
                excluded_by_item = outcome.excluded_by_item,
                excluded_by_date = outcome.excluded_by_date,
                excluded_by_numeric = outcome.excluded_by_numeric,
                "部分行因品目/日期/数值无效被排除"
            );
        }
        info!(rows = outcome.records.len(), "字段派生完成");

        Ok(outcome)
    }

    fn check_systemic(
        &self,
        rows: usize,
        any_date: bool,
        any_quantity: bool,
        any_unit_cost: bool,
    ) -> EnrichmentResult<()> {
        if !any_date {
            return Err(EnrichmentError::NoParsableDates {
                column: self.columns.delivery_date.clone(),
                rows,
            });
        }
        if !any_quantity {
            return Err(EnrichmentError::NonNumericColumn {
                column: self.columns.quantity.clone(),
                rows,
            });
        }
        if !any_unit_cost {
            return Err(EnrichmentError::NonNumericColumn {
                column: self.columns.unit_cost.clone(),
                rows,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date: &str, quantity: &str, unit_cost: &str) -> RawRecord {
        raw_item("Widget", date, quantity, unit_cost)
    }

    fn raw_item(item: &str, date: &str, quantity: &str, unit_cost: &str) -> RawRecord {
        RawRecord {
            supplier_id: "S1".to_string(),
            item_description: item.to_string(),
            delivery_date: date.to_string(),
            quantity: quantity.to_string(),
            unit_cost: unit_cost.to_string(),
            row_number: 1,
        }
    }

    #[test]
    fn test_parse_delivery_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2023, 10, 5).unwrap();
        assert_eq!(parse_delivery_date("2023/10/05"), Some(expected));
        assert_eq!(parse_delivery_date("2023-10-05"), Some(expected));
        assert_eq!(parse_delivery_date("20231005"), Some(expected));
        assert_eq!(parse_delivery_date("2023/10/5"), Some(expected));
        assert_eq!(parse_delivery_date("2023/10/05 0:00:00"), Some(expected));
        assert_eq!(parse_delivery_date("2023-10-05 13:45"), Some(expected));
        assert_eq!(parse_delivery_date("未定"), None);
        assert_eq!(parse_delivery_date("2023/02/30"), None);
        assert_eq!(parse_delivery_date(""), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("1,200"), Some(1200.0));
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number("-3"), Some(-3.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn test_enrich_derives_fiscal_year_and_line_total() {
        let enricher = Enricher::new(ColumnMapping::default());
        let outcome = enricher
            .enrich(&[raw("2023/09/30", "10", "2.5"), raw("2023/10/01", "4", "100")])
            .unwrap();

        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[0].fiscal_year, 2022);
        assert_eq!(outcome.records[0].line_total, 25.0);
        assert_eq!(outcome.records[1].fiscal_year, 2023);
        assert_eq!(outcome.records[1].line_total, 400.0);
    }

    #[test]
    fn test_enrich_drops_bad_rows() {
        let enricher = Enricher::new(ColumnMapping::default());
        let outcome = enricher
            .enrich(&[
                raw("2023/10/01", "1", "1"),
                raw("not a date", "1", "1"),
                raw("2023/10/01", "", "1"),
                raw("2023/10/01", "1", "n/a"),
            ])
            .unwrap();

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.excluded_by_date, 1);
        assert_eq!(outcome.excluded_by_numeric, 2);
    }

    #[test]
    fn test_enrich_drops_blank_item_rows() {
        let enricher = Enricher::new(ColumnMapping::default());
        let outcome = enricher
            .enrich(&[
                raw_item("Widget", "2023/10/01", "1", "1"),
                raw_item("", "2023/10/01", "5", "5"),
                raw_item("", "bad", "5", "5"),
            ])
            .unwrap();

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].item_description, "Widget");
        assert_eq!(outcome.excluded_by_item, 2);
        assert_eq!(outcome.excluded_by_date, 0);
    }

    #[test]
    fn test_enrich_systemic_date_failure() {
        let enricher = Enricher::new(ColumnMapping::default());
        let err = enricher
            .enrich(&[raw("x", "1", "1"), raw("y", "2", "2")])
            .unwrap_err();

        assert_eq!(
            err,
            EnrichmentError::NoParsableDates {
                column: "納期".to_string(),
                rows: 2
            }
        );
    }

    #[test]
    fn test_enrich_systemic_numeric_failure() {
        let enricher = Enricher::new(ColumnMapping::default());
        let err = enricher
            .enrich(&[raw("2023/10/01", "1", "?"), raw("2023/10/02", "2", "-")])
            .unwrap_err();

        assert!(matches!(
            err,
            EnrichmentError::NonNumericColumn { ref column, .. } if column == "品目原価"
        ));
    }

    #[test]
    fn test_enrich_empty_input_is_ok() {
        let enricher = Enricher::new(ColumnMapping::default());
        let outcome = enricher.enrich(&[]).unwrap();
        assert!(outcome.records.is_empty());
    }
}
