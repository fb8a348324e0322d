use crate::models::calendar::{CalendarCell, CalendarGrid};
use crate::models::recurrence::Weekday;

/// Terminal rendering: a title line, a weekday header, then one line per
/// week. Marked days are shown as `[dd]`.
pub fn to_text(grid: &CalendarGrid) -> String {
    let mut lines = Vec::with_capacity(grid.week_count() + 2);
    lines.push(grid.title());

    let header: String = Weekday::all()
        .iter()
        .map(|day| format!(" {} ", &day.short_label()[..2]))
        .collect();
    lines.push(header.trim_end().to_string());

    for week in grid.weeks() {
        let row: String = week.iter().map(format_cell).collect();
        lines.push(row.trim_end().to_string());
    }

    lines.join("\n")
}

fn format_cell(cell: &CalendarCell) -> String {
    match cell {
        CalendarCell::Empty => "    ".to_string(),
        CalendarCell::Plain(day) => format!(" {:>2} ", day),
        CalendarCell::Marked(day) => format!("[{:>2}]", day),
    }
}
