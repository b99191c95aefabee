// ==========================================
// 采购明细汇总 - Excel 导出
// ==========================================
// 职责: 汇总表 → .xlsx
// 规则:
// - 数值列写入原始数值, 千分位仅作为单元格显示格式
// - 先写入同目录临时文件, 完成后原子替换为目标文件
// - 输出目录不存在时自动创建
// ==========================================

use crate::domain::summary::SummaryReport;
use crate::domain::types::Thresholds;
use crate::i18n;
use crate::report::error::{ExportError, ExportResult};
use rust_xlsxwriter::{Format, Workbook};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{info, instrument};

/// 千分位显示格式
const NUMBER_FORMAT: &str = "#,##0";

/// 列宽
const COLUMN_WIDTHS: [f64; 5] = [40.0, 12.0, 14.0, 16.0, 18.0];

/// 按阈值生成导出文件名
pub fn export_file_name(thresholds: &Thresholds, locale: &str) -> String {
    i18n::t_with_args(
        "export.file_name",
        locale,
        &[
            ("count", &thresholds.min_order_count.to_string()),
            ("qty", &thresholds.min_quantity.to_string()),
            ("suppliers", &thresholds.min_supplier_count.to_string()),
        ],
    )
}

pub struct ExcelExporter {
    output_dir: PathBuf,
    locale: String,
}

impl ExcelExporter {
    /// 创建导出器
    ///
    /// # 参数
    /// - output_dir: 输出目录
    /// - locale: 列名/Sheet 名/文件名使用的语言
    pub fn new(output_dir: impl Into<PathBuf>, locale: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            locale: locale.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// 导出汇总表
    ///
    /// # 返回
    /// - Ok(PathBuf): 导出文件路径（同名文件会被覆盖）
    /// - Err(ExportError): 目录创建 / 写入失败
    #[instrument(skip(self, report), fields(items = report.items.len()))]
    pub fn export(&self, report: &SummaryReport) -> ExportResult<PathBuf> {
        std::fs::create_dir_all(&self.output_dir).map_err(|e| ExportError::CreateDirError {
            path: self.output_dir.display().to_string(),
            message: e.to_string(),
        })?;

        let target = self
            .output_dir
            .join(export_file_name(&report.thresholds, &self.locale));

        let mut workbook = self.build_workbook(report)?;

        let write_err = |e: std::io::Error| ExportError::WriteError {
            path: target.display().to_string(),
            message: e.to_string(),
        };

        let mut temp_file = NamedTempFile::new_in(&self.output_dir).map_err(write_err)?;
        workbook.save_to_writer(temp_file.as_file_mut())?;
        temp_file.as_file().sync_all().map_err(write_err)?;
        temp_file
            .persist(&target)
            .map_err(|e| write_err(e.error))?;

        info!(path = %target.display(), "Excel 导出完成");
        Ok(target)
    }

    fn build_workbook(&self, report: &SummaryReport) -> ExportResult<Workbook> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let number_format = Format::new().set_num_format(NUMBER_FORMAT);

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(i18n::t("export.sheet_name", &self.locale))?;

        // 表头
        for (col, label) in i18n::column_labels(&self.locale).iter().enumerate() {
            let col = col as u16;
            worksheet.write_string_with_format(0, col, label, &header_format)?;
            worksheet.set_column_width(col, COLUMN_WIDTHS[col as usize])?;
        }

        // 数据行
        for (idx, item) in report.items.iter().enumerate() {
            let row = idx as u32 + 1;
            worksheet.write_string(row, 0, &item.item_description)?;
            worksheet.write_number(row, 1, item.distinct_supplier_count as f64)?;
            worksheet.write_number(row, 2, item.total_order_count as f64)?;
            worksheet.write_number_with_format(row, 3, item.total_quantity, &number_format)?;
            worksheet.write_number_with_format(row, 4, item.total_amount, &number_format)?;
        }

        worksheet.set_freeze_panes(1, 0)?;

        Ok(workbook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::summary::{ItemSummary, PipelineStats};
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use tempfile::TempDir;

    fn report() -> SummaryReport {
        SummaryReport {
            thresholds: Thresholds::new(3, 100, 2).unwrap(),
            items: vec![ItemSummary {
                item_description: "Widget A".to_string(),
                distinct_supplier_count: 3,
                total_order_count: 5,
                total_quantity: 1234.0,
                total_amount: 5678901.5,
            }],
            stats: PipelineStats::default(),
        }
    }

    #[test]
    fn test_export_file_name() {
        let thresholds = Thresholds::new(3, 100, 2).unwrap();
        assert_eq!(
            export_file_name(&thresholds, "ja"),
            "対象一覧_回数3_数量100_仕入先2.xlsx"
        );
        assert_eq!(
            export_file_name(&thresholds, "en"),
            "summary_count3_qty100_suppliers2.xlsx"
        );
    }

    #[test]
    fn test_export_creates_dir_and_writes_numbers() {
        let dir = TempDir::new().unwrap();
        let output_dir = dir.path().join("nested").join("output");
        let exporter = ExcelExporter::new(&output_dir, "en");

        let path = exporter.export(&report()).unwrap();
        assert!(path.exists());
        assert_eq!(path.parent().unwrap(), output_dir.as_path());

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let range = workbook.worksheet_range("Summary").unwrap();

        assert_eq!(
            range.get_value((0, 0)),
            Some(&Data::String("Item description".to_string()))
        );
        assert_eq!(range.get_value((1, 3)), Some(&Data::Float(1234.0)));
        assert_eq!(range.get_value((1, 4)), Some(&Data::Float(5678901.5)));

        // 临时文件不残留
        let entries = std::fs::read_dir(&output_dir).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let exporter = ExcelExporter::new(dir.path(), "ja");

        let first = exporter.export(&report()).unwrap();
        let second = exporter.export(&report()).unwrap();

        assert_eq!(first, second);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
