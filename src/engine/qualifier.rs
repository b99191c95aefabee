// ==========================================
// 采购明细汇总 - 对象品目判定
// ==========================================
// 1. 按 (品目说明, 会计年度) 分组: 发注次数 / 发注数量 / 仕入先数
// 2. 三个阈值全部满足（>=）的分组为合格分组
// 3. 出现在任一合格分组中的品目 = 对象品目
// ==========================================

use crate::domain::record::EnrichedRecord;
use crate::domain::summary::YearGroup;
use crate::domain::types::Thresholds;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::{debug, info};

/// 判定结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Qualification {
    /// 对象品目（去重）
    pub items: BTreeSet<String>,
    /// 合格的 (品目, 年度) 分组
    pub groups: Vec<YearGroup>,
}

#[derive(Default)]
struct GroupAccumulator<'a> {
    order_count: usize,
    total_quantity: f64,
    suppliers: HashSet<&'a str>,
}

pub struct Qualifier;

impl Qualifier {
    /// 按 (品目, 年度) 聚合
    ///
    /// 结果按品目、年度升序
    pub fn group_by_year(records: &[EnrichedRecord]) -> Vec<YearGroup> {
        let mut groups: BTreeMap<(&str, i32), GroupAccumulator> = BTreeMap::new();

        for record in records {
            let acc = groups
                .entry((record.item_description.as_str(), record.fiscal_year))
                .or_default();
            acc.order_count += 1;
            acc.total_quantity += record.quantity;
            // 仕入先为空的行计入次数与数量, 不计入仕入先数
            if !record.supplier_id.is_empty() {
                acc.suppliers.insert(record.supplier_id.as_str());
            }
        }

        groups
            .into_iter()
            .map(|((item, year), acc)| YearGroup {
                item_description: item.to_string(),
                fiscal_year: year,
                order_count: acc.order_count,
                total_quantity: acc.total_quantity,
                distinct_supplier_count: acc.suppliers.len(),
            })
            .collect()
    }

    /// 判定对象品目
    pub fn qualify(records: &[EnrichedRecord], thresholds: &Thresholds) -> Qualification {
        let all_groups = Self::group_by_year(records);
        let total_groups = all_groups.len();

        let groups: Vec<YearGroup> = all_groups
            .into_iter()
            .filter(|g| g.qualifies(thresholds))
            .collect();

        for group in &groups {
            debug!(
                item = %group.item_description,
                fiscal_year = group.fiscal_year,
                order_count = group.order_count,
                total_quantity = group.total_quantity,
                suppliers = group.distinct_supplier_count,
                "合格分组"
            );
        }

        let items: BTreeSet<String> = groups
            .iter()
            .map(|g| g.item_description.clone())
            .collect();

        info!(
            %thresholds,
            total_groups,
            qualifying_groups = groups.len(),
            qualifying_items = items.len(),
            "对象品目判定完成"
        );

        Qualification { items, groups }
    }
}
