use snapwork_core::WindowSpec;

pub struct TableFormatter {
    index_width: usize,
    title_width: usize,
    process_width: usize,
    monitor_width: usize,
    desktop_width: usize,
    bounds_width: usize,
}

impl TableFormatter {
    pub fn new(windows: &[WindowSpec]) -> Self {
        let index_width = windows.len().saturating_sub(1).to_string().len().max(1);
        let title_width = column_width(windows.iter().map(|w| w.title.as_str()), "Title", 40);
        let process_width =
            column_width(windows.iter().map(|w| w.process_path.as_str()), "Process", 50);
        let monitor_width =
            column_width(windows.iter().map(|w| w.monitor_id.as_str()), "Monitor", 20);
        // Desktop ids are hyphenated GUIDs
        let desktop_width = if windows.iter().any(|w| w.desktop_id.is_some()) {
            36
        } else {
            "Desktop".len()
        };
        let bounds_width = windows
            .iter()
            .map(|w| format_bounds(w).len())
            .max()
            .unwrap_or(0)
            .max("Bounds".len());

        Self {
            index_width,
            title_width,
            process_width,
            monitor_width,
            desktop_width,
            bounds_width,
        }
    }

    pub fn print_table(&self, windows: &[WindowSpec]) {
        println!("{}", self.border('┌', '┬', '┐'));
        println!(
            "{}",
            self.row(["#", "Title", "Process", "Monitor", "Desktop", "Bounds"])
        );
        println!("{}", self.border('├', '┼', '┤'));
        for (index, window) in windows.iter().enumerate() {
            println!(
                "{}",
                self.row([
                    &index.to_string(),
                    &window.title,
                    &window.process_path,
                    &window.monitor_id,
                    window.desktop_id.as_deref().unwrap_or("-"),
                    &format_bounds(window),
                ])
            );
        }
        println!("{}", self.border('└', '┴', '┘'));
    }

    fn widths(&self) -> [usize; 6] {
        [
            self.index_width,
            self.title_width,
            self.process_width,
            self.monitor_width,
            self.desktop_width,
            self.bounds_width,
        ]
    }

    fn row(&self, cells: [&str; 6]) -> String {
        let cells: Vec<String> = cells
            .iter()
            .zip(self.widths())
            .map(|(cell, width)| truncate(cell, width))
            .collect();
        format!("│ {} │", cells.join(" │ "))
    }

    fn border(&self, left: char, middle: char, right: char) -> String {
        let segments: Vec<String> = self
            .widths()
            .iter()
            .map(|width| "─".repeat(width + 2))
            .collect();
        format!("{}{}{}", left, segments.join(middle.to_string().as_str()), right)
    }
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str, max: usize) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(header.len(), max)
}

fn format_bounds(window: &WindowSpec) -> String {
    format!(
        "({}, {}) {}x{}",
        window.x, window.y, window.width, window.height
    )
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Counts characters, not bytes, so multi-byte titles are cut safely.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
