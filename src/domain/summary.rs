// ==========================================
// 采购明细汇总 - 汇总结果
// ==========================================

use crate::domain::types::Thresholds;
use serde::{Deserialize, Serialize};

/// (品目, 会计年度) 维度的资格判定指标
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearGroup {
    pub item_description: String,
    pub fiscal_year: i32,
    pub order_count: usize,
    pub total_quantity: f64,
    pub distinct_supplier_count: usize,
}

impl YearGroup {
    /// 三个条件同时满足（边界包含）
    pub fn qualifies(&self, thresholds: &Thresholds) -> bool {
        self.order_count >= thresholds.min_order_count as usize
            && self.total_quantity >= f64::from(thresholds.min_quantity)
            && self.distinct_supplier_count >= thresholds.min_supplier_count as usize
    }
}

/// 品目维度的最终汇总行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub item_description: String,
    pub distinct_supplier_count: usize,
    pub total_order_count: usize,
    pub total_quantity: f64,
    pub total_amount: f64,
}

/// 各阶段行数统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStats {
    pub rows_loaded: usize,
    pub excluded_by_supplier: usize,
    pub excluded_by_marker: usize,
    /// 品目说明为空
    pub excluded_by_item: usize,
    pub excluded_by_date: usize,
    pub excluded_by_numeric: usize,
    pub rows_enriched: usize,
    pub qualifying_groups: usize,
    pub qualifying_items: usize,
}

impl PipelineStats {
    /// 被排除的总行数
    pub fn total_excluded(&self) -> usize {
        self.excluded_by_supplier
            + self.excluded_by_marker
            + self.excluded_by_item
            + self.excluded_by_date
            + self.excluded_by_numeric
    }
}

/// 一次抽出的完整结果（按合计发注金额降序）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub thresholds: Thresholds,
    pub items: Vec<ItemSummary>,
    pub stats: PipelineStats,
}

impl SummaryReport {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
