// ==========================================
// 采购明细汇总 - 品目汇总
// ==========================================
// 输入: 对象品目的全部行（所有年度, 不仅限合格年度）
// 输出: 按品目汇总, 合计发注金额降序, 金额相同时品目说明升序
// ==========================================

use crate::domain::record::EnrichedRecord;
use crate::domain::summary::ItemSummary;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::info;

#[derive(Default)]
struct ItemAccumulator<'a> {
    suppliers: HashSet<&'a str>,
    order_count: usize,
    total_quantity: f64,
    total_amount: f64,
}

pub struct Summarizer;

impl Summarizer {
    /// 汇总对象品目
    ///
    /// # 参数
    /// - records: 派生后的全部行
    /// - items: 对象品目集合
    pub fn summarize(records: &[EnrichedRecord], items: &BTreeSet<String>) -> Vec<ItemSummary> {
        let mut acc_by_item: BTreeMap<&str, ItemAccumulator> = BTreeMap::new();

        for record in records
            .iter()
            .filter(|r| items.contains(&r.item_description))
        {
            let acc = acc_by_item
                .entry(record.item_description.as_str())
                .or_default();
            if !record.supplier_id.is_empty() {
                acc.suppliers.insert(record.supplier_id.as_str());
            }
            acc.order_count += 1;
            acc.total_quantity += record.quantity;
            acc.total_amount += record.line_total;
        }

        let mut summaries: Vec<ItemSummary> = acc_by_item
            .into_iter()
            .map(|(item, acc)| ItemSummary {
                item_description: item.to_string(),
                distinct_supplier_count: acc.suppliers.len(),
                total_order_count: acc.order_count,
                total_quantity: acc.total_quantity,
                total_amount: acc.total_amount,
            })
            .collect();

        summaries.sort_by(compare_summaries);

        info!(items = summaries.len(), "品目汇总完成");
        summaries
    }
}

/// 排序规则: total_amount 降序 → item_description 升序
pub fn compare_summaries(a: &ItemSummary, b: &ItemSummary) -> Ordering {
    b.total_amount
        .total_cmp(&a.total_amount)
        .then_with(|| a.item_description.cmp(&b.item_description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec(item: &str, supplier: &str, fiscal_year: i32, qty: f64, cost: f64) -> EnrichedRecord {
        EnrichedRecord {
            supplier_id: supplier.to_string(),
            item_description: item.to_string(),
            delivery_date: NaiveDate::from_ymd_opt(fiscal_year, 10, 1).unwrap(),
            quantity: qty,
            unit_cost: cost,
            fiscal_year,
            line_total: qty * cost,
            row_number: 0,
        }
    }

    fn items(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_summarize_includes_all_years_of_item() {
        let records = vec![
            rec("A", "S1", 2022, 10.0, 2.0),
            rec("A", "S2", 2023, 5.0, 4.0),
            rec("B", "S1", 2023, 100.0, 1.0),
        ];

        let summary = Summarizer::summarize(&records, &items(&["A"]));

        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].item_description, "A");
        assert_eq!(summary[0].total_order_count, 2);
        assert_eq!(summary[0].total_quantity, 15.0);
        assert_eq!(summary[0].total_amount, 40.0);
        assert_eq!(summary[0].distinct_supplier_count, 2);
    }

    #[test]
    fn test_summarize_sorted_by_amount_desc_then_name() {
        let records = vec![
            rec("C", "S1", 2023, 1.0, 10.0),
            rec("B", "S1", 2023, 1.0, 50.0),
            rec("A", "S1", 2023, 1.0, 10.0),
        ];

        let summary = Summarizer::summarize(&records, &items(&["A", "B", "C"]));
        let order: Vec<&str> = summary.iter().map(|s| s.item_description.as_str()).collect();

        assert_eq!(order, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_summarize_skips_blank_supplier_in_count() {
        let records = vec![
            rec("A", "S1", 2023, 1.0, 10.0),
            rec("A", "", 2023, 2.0, 10.0),
        ];

        let summary = Summarizer::summarize(&records, &items(&["A"]));

        assert_eq!(summary[0].distinct_supplier_count, 1);
        assert_eq!(summary[0].total_order_count, 2);
        assert_eq!(summary[0].total_amount, 30.0);
    }

    #[test]
    fn test_summarize_empty_item_set() {
        let records = vec![rec("A", "S1", 2023, 1.0, 1.0)];
        assert!(Summarizer::summarize(&records, &BTreeSet::new()).is_empty());
    }
}
