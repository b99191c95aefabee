// ==========================================
// 采购明细汇总 - 显示格式化
// ==========================================
// 仅用于终端显示: 千分位 + 0 位小数
// 导出文件保留原始数值, 不使用这里的字符串
// ==========================================

use crate::domain::summary::ItemSummary;
use crate::i18n;
use num_format::{Locale, ToFormattedString};
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};

/// 千分位格式（四舍五入到整数）
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    rounded.to_formatted_string(&Locale::en)
}

/// 单行显示值（列顺序与 i18n::column_labels 一致）
pub fn display_row(item: &ItemSummary) -> [String; 5] {
    [
        item.item_description.clone(),
        item.distinct_supplier_count.to_string(),
        item.total_order_count.to_string(),
        format_thousands(item.total_quantity),
        format_thousands(item.total_amount),
    ]
}

/// 渲染汇总表（Markdown 风格, 数值列右对齐）
pub fn render_table(items: &[ItemSummary], locale: &str) -> String {
    let mut builder = Builder::default();
    builder.push_record(i18n::column_labels(locale));
    for item in items {
        builder.push_record(display_row(item));
    }

    let mut table = builder.build();
    table
        .with(Style::markdown())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, qty: f64, amount: f64) -> ItemSummary {
        ItemSummary {
            item_description: name.to_string(),
            distinct_supplier_count: 3,
            total_order_count: 5,
            total_quantity: qty,
            total_amount: amount,
        }
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1234567.0), "1,234,567");
        assert_eq!(format_thousands(1234.5), "1,235");
        assert_eq!(format_thousands(-98765.4), "-98,765");
    }

    #[test]
    fn test_display_row() {
        let row = display_row(&item("Widget A", 12000.0, 3456789.0));
        assert_eq!(row, ["Widget A", "3", "5", "12,000", "3,456,789"]);
    }

    #[test]
    fn test_render_table_contains_headers_and_values() {
        let text = render_table(&[item("Widget A", 200.0, 15000.0)], "en");

        assert!(text.contains("Item description"));
        assert!(text.contains("Total amount"));
        assert!(text.contains("Widget A"));
        assert!(text.contains("15,000"));
    }
}
