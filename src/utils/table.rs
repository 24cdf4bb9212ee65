//! Fixed-width, right-aligned table rendering for console reports.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator: String,
    /// Dashes printed under the header; 0 disables the rule.
    pub rule_width: usize,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: " | ".to_string(),
            rule_width: 0,
        }
    }

    pub fn with_rule(mut self, width: usize) -> Self {
        self.rule_width = width;
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        let headers: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        self.push_line(&mut out, &headers);

        if self.rule_width > 0 {
            out.push_str(&"-".repeat(self.rule_width));
            out.push('\n');
        }

        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            self.push_line(&mut out, &cells);
        }

        out
    }

    fn push_line(&self, out: &mut String, cells: &[&str]) {
        let rendered: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| pad(cells.get(i).copied().unwrap_or(""), col.width))
            .collect();
        out.push_str(&rendered.join(&self.separator));
        out.push('\n');
    }
}

/// Right-align by display width, so accented and wide characters line up.
/// Values wider than the column are left as they are, never cut.
pub fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(value));
    format!("{}{}", " ".repeat(fill), value)
}
