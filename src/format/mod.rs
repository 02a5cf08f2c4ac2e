//! Output formatting for items (table, JSON, markdown, CSV).

use crate::config::OutputFormat;
use crate::mercari::Item;

/// Width of the separator drawn above each item in table output.
const SEPARATOR_WIDTH: usize = 100;

/// Formats items for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a single item.
    pub fn format_item(&self, item: &Item) -> String {
        match self.format {
            OutputFormat::Json => self.json_single(item),
            OutputFormat::Table => self.table_single(item),
            OutputFormat::Markdown => self.markdown_items(std::slice::from_ref(item)),
            OutputFormat::Csv => self.csv_items(std::slice::from_ref(item)),
        }
    }

    /// Formats multiple items.
    pub fn format_items(&self, items: &[Item]) -> String {
        if items.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                _ => "No items found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_items(items),
            OutputFormat::Table => self.table_items(items),
            OutputFormat::Markdown => self.markdown_items(items),
            OutputFormat::Csv => self.csv_items(items),
        }
    }

    // JSON formatting

    fn json_single(&self, item: &Item) -> String {
        serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string())
    }

    fn json_items(&self, items: &[Item]) -> String {
        serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_single(&self, item: &Item) -> String {
        [
            "-".repeat(SEPARATOR_WIDTH),
            format!("Name:       {}", item.name),
            format!("Price:      {}", item.price),
            format!("OnSale:     {}", item.on_sale),
            format!("PageURL:    {}", item.page_url),
            format!("ImageURL:   {}", item.image_url),
        ]
        .join("\n")
    }

    fn table_items(&self, items: &[Item]) -> String {
        items.iter().map(|item| self.table_single(item)).collect::<Vec<_>>().join("\n")
    }

    // Markdown formatting

    fn markdown_items(&self, items: &[Item]) -> String {
        let mut lines = Vec::new();

        lines.push("| Name | Price | On Sale | Link |".to_string());
        lines.push("|------|-------|---------|------|".to_string());

        for item in items {
            let name = if item.name.chars().count() > 40 {
                format!("{}...", item.name.chars().take(37).collect::<String>())
            } else {
                item.name.clone()
            };
            let name = name.replace('|', "\\|");
            let on_sale = if item.on_sale { "✓" } else { "SOLD" };

            lines.push(format!(
                "| {} | ¥{} | {} | [View]({}) |",
                name, item.price, on_sale, item.page_url
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} items found*", items.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "name,price,on_sale,page_url,image_url".to_string()
    }

    fn csv_items(&self, items: &[Item]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for item in items {
            lines.push(format!(
                "{},{},{},{},{}",
                Self::csv_escape(&item.name),
                item.price,
                item.on_sale,
                Self::csv_escape(&item.page_url),
                Self::csv_escape(&item.image_url)
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}
