use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, Table};
use std::path::PathBuf;

/// 单个 collection 的转换结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSummary {
    /// Collection 名称（源子目录名）
    pub name: String,

    /// 输出文件路径
    pub output_path: PathBuf,

    /// 写入的记录数
    pub records: usize,

    /// 因解析失败被跳过的文件（仅 skip_invalid 时）
    pub skipped: Vec<PathBuf>,
}

/// 一次批量转换的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub collections: Vec<CollectionSummary>,
}

impl ConversionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, summary: CollectionSummary) {
        self.collections.push(summary);
    }

    pub fn total_records(&self) -> usize {
        self.collections.iter().map(|c| c.records).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.collections.iter().map(|c| c.skipped.len()).sum()
    }

    /// 按名称查找
    pub fn get(&self, name: &str) -> Option<&CollectionSummary> {
        self.collections.iter().find(|c| c.name == name)
    }
}

/// 打印转换摘要
pub struct ReportPrinter {
    color: bool,
}

impl ReportPrinter {
    pub fn new(color: bool) -> Self {
        if !color {
            colored::control::set_override(false);
        }
        Self { color }
    }

    pub fn render(&self, report: &ConversionReport) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["Collection", "Records", "Skipped", "Output"]);

        if !self.color {
            table.force_no_tty();
        }

        for summary in &report.collections {
            let skipped = summary.skipped.len();
            let skipped_cell = if skipped > 0 {
                Cell::new(skipped).fg(Color::Yellow)
            } else {
                Cell::new(skipped)
            };

            table.add_row(vec![
                Cell::new(&summary.name),
                Cell::new(summary.records).fg(Color::Green),
                skipped_cell,
                Cell::new(summary.output_path.display()).add_attribute(Attribute::Dim),
            ]);
        }

        let mut output = table.to_string();
        output.push('\n');

        let totals = format!(
            "{} collections, {} records",
            report.collections.len(),
            report.total_records()
        );
        output.push_str(&totals.bold().to_string());

        let skipped = report.total_skipped();
        if skipped > 0 {
            output.push_str(&format!(", {}", format!("{} skipped", skipped).yellow()));
            for path in report.collections.iter().flat_map(|c| &c.skipped) {
                output.push_str(&format!("\n  {} {}", "⊘".dimmed(), path.display()));
            }
        }

        output
    }

    pub fn print(&self, report: &ConversionReport) {
        println!("{}", self.render(report));
    }
}

impl Default for ReportPrinter {
    fn default() -> Self {
        Self::new(true)
    }
}
