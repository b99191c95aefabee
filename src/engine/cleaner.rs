// ==========================================
// 采购明细汇总 - 行排除（清洗）
// ==========================================
// 规则 1: 购入先 ∈ 排除名单 → 排除
// 规则 2: 品目说明包含运费标记（如「送料」）→ 排除
// ==========================================

use crate::domain::record::RawRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{info, trace};

/// 默认排除的购入先
pub const DEFAULT_EXCLUDED_SUPPLIERS: &[&str] = &["10258XD", "14264XH", "13007XI"];

/// 默认运费行标记
pub const DEFAULT_FREIGHT_MARKER: &str = "送料";

/// 排除规则（来自配置, 不硬编码在清洗逻辑中）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionRules {
    pub excluded_suppliers: BTreeSet<String>,
    /// 为空时不做子串过滤
    pub freight_marker: String,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self {
            excluded_suppliers: DEFAULT_EXCLUDED_SUPPLIERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            freight_marker: DEFAULT_FREIGHT_MARKER.to_string(),
        }
    }
}

/// 清洗结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanOutcome {
    pub kept: Vec<RawRecord>,
    pub excluded_by_supplier: usize,
    pub excluded_by_marker: usize,
}

pub struct Cleaner {
    rules: ExclusionRules,
}

impl Cleaner {
    pub fn new(rules: ExclusionRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ExclusionRules {
        &self.rules
    }

    fn is_excluded_supplier(&self, record: &RawRecord) -> bool {
        self.rules
            .excluded_suppliers
            .contains(record.supplier_id.trim())
    }

    fn is_freight_line(&self, record: &RawRecord) -> bool {
        !self.rules.freight_marker.is_empty()
            && record.item_description.contains(&self.rules.freight_marker)
    }

    /// 过滤明细（输入不被修改, 返回新的行集合）
    pub fn clean(&self, records: &[RawRecord]) -> CleanOutcome {
        let mut outcome = CleanOutcome::default();

        for record in records {
            if self.is_excluded_supplier(record) {
                trace!(row = record.row_number, supplier = %record.supplier_id, "排除名单购入先");
                outcome.excluded_by_supplier += 1;
                continue;
            }
            if self.is_freight_line(record) {
                trace!(row = record.row_number, item = %record.item_description, "运费行");
                outcome.excluded_by_marker += 1;
                continue;
            }
            outcome.kept.push(record.clone());
        }

        info!(
            kept = outcome.kept.len(),
            excluded_by_supplier = outcome.excluded_by_supplier,
            excluded_by_marker = outcome.excluded_by_marker,
            "行排除完成"
        );
        outcome
    }
}
