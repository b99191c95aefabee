// ==========================================
// 采购明细汇总 - 明细行实体
// ==========================================
// RawRecord: 字段映射后的原始行（均为字符串）
// EnrichedRecord: 派生会计年度与发注金额后的行
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 原始采购明细行
///
/// 数值/日期在派生阶段才解析, 解析失败的行被排除而不是报错
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub supplier_id: String,
    pub item_description: String,
    pub delivery_date: String,
    pub quantity: String,
    pub unit_cost: String,

    // 元信息（表头之后的数据行序号, 从 1 开始, 含被跳过的空白行）
    pub row_number: usize,
}

/// 派生后的采购明细行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub supplier_id: String,
    pub item_description: String,
    pub delivery_date: NaiveDate,
    pub quantity: f64,
    pub unit_cost: f64,

    // 派生字段
    pub fiscal_year: i32,
    pub line_total: f64,

    pub row_number: usize,
}
