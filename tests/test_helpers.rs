// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 生成测试用采购明细 CSV、构造配置
// ==========================================

#![allow(dead_code)]

use chrono::{Datelike, NaiveDate};
use procurement_summary::config::PipelineConfig;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 标准表头（与默认列名映射一致）
pub const HEADER: &str = "購入先,品目説明,納期,発注,品目原価";

/// 一行明细
pub struct Row<'a> {
    pub supplier: &'a str,
    pub item: &'a str,
    pub date: &'a str,
    pub quantity: &'a str,
    pub unit_cost: &'a str,
}

pub fn row<'a>(
    supplier: &'a str,
    item: &'a str,
    date: &'a str,
    quantity: &'a str,
    unit_cost: &'a str,
) -> Row<'a> {
    Row {
        supplier,
        item,
        date,
        quantity,
        unit_cost,
    }
}

/// 拼接 CSV 文本
pub fn csv_text(rows: &[Row]) -> String {
    let mut text = String::from(HEADER);
    text.push('\n');
    for r in rows {
        text.push_str(&format!(
            "{},{},{},{},{}\n",
            r.supplier, r.item, r.date, r.quantity, r.unit_cost
        ));
    }
    text
}

/// 以 CP932 写入 CSV
pub fn write_cp932_csv(dir: &Path, name: &str, rows: &[Row]) -> PathBuf {
    let text = csv_text(rows);
    let (bytes, _, had_errors) = encoding_rs::SHIFT_JIS.encode(&text);
    assert!(!had_errors, "测试数据包含 CP932 无法表示的字符");

    let path = dir.join(name);
    std::fs::write(&path, &bytes).unwrap();
    path
}

/// 写入 xlsx: 納期为日期单元格, 数量/单价为数值单元格
pub fn write_xlsx(dir: &Path, name: &str, rows: &[Row]) -> PathBuf {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy/mm/dd");
    let worksheet = workbook.add_worksheet();

    for (col, label) in HEADER.split(',').enumerate() {
        worksheet.write_string(0, col as u16, label).unwrap();
    }
    for (idx, r) in rows.iter().enumerate() {
        let row = idx as u32 + 1;
        let date = NaiveDate::parse_from_str(r.date, "%Y/%m/%d").unwrap();
        let date =
            ExcelDateTime::from_ymd(date.year() as u16, date.month() as u8, date.day() as u8)
                .unwrap();

        worksheet.write_string(row, 0, r.supplier).unwrap();
        worksheet.write_string(row, 1, r.item).unwrap();
        worksheet
            .write_datetime_with_format(row, 2, &date, &date_format)
            .unwrap();
        worksheet
            .write_number(row, 3, r.quantity.parse::<f64>().unwrap())
            .unwrap();
        worksheet
            .write_number(row, 4, r.unit_cost.parse::<f64>().unwrap())
            .unwrap();
    }

    let path = dir.join(name);
    workbook.save(&path).unwrap();
    path
}

/// 测试工作区: data/ 与 output/ 目录
pub struct Workspace {
    pub root: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        std::fs::create_dir_all(root.path().join("data")).unwrap();
        Self { root }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.path().join("data")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.path().join("output")
    }

    /// 指向本工作区的默认配置
    pub fn config(&self) -> PipelineConfig {
        PipelineConfig {
            input_dir: self.data_dir(),
            output_dir: self.output_dir(),
            ..Default::default()
        }
    }
}

/// 「Widget A」场景: FY2023 内 5 次发注, 数量合计 200, 3 个仕入先
pub fn widget_a_rows() -> Vec<Row<'static>> {
    vec![
        row("S1", "Widget A", "2023/10/02", "40", "100"),
        row("S2", "Widget A", "2023/11/15", "40", "110"),
        row("S3", "Widget A", "2024/01/10", "40", "90"),
        row("S1", "Widget A", "2024/03/05", "40", "100"),
        row("S2", "Widget A", "2024/09/30", "40", "105"),
    ]
}
