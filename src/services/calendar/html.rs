use crate::models::calendar::{CalendarCell, CalendarGrid};

const TABLE_STYLE: &str = "<style>\n\
table {width: 100%; border-collapse: collapse; text-align: center;}\n\
th {background-color: #4CAF50; color: white; padding: 10px;}\n\
td {padding: 10px;}\n\
td.marked {background-color: lightgreen; border: 1px solid #4CAF50; border-radius: 50%; text-align: center;}\n\
td.empty {background-color: #f9f9f9;}\n\
</style>\n";

/// HTML table with the given column headers, Monday first.
pub fn to_html<S: AsRef<str>>(grid: &CalendarGrid, headers: &[S]) -> String {
    let mut html = String::from(TABLE_STYLE);
    html.push_str("<table>\n");
    html.push_str(&format!("<caption>{}</caption>\n", escape_text(&grid.title())));

    html.push_str("<thead>\n<tr>");
    for header in headers {
        html.push_str(&format!("<th>{}</th>", escape_text(header.as_ref())));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for week in grid.weeks() {
        html.push_str("<tr>");
        for cell in week {
            append_cell(&mut html, cell);
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n");
    html
}

fn append_cell(buffer: &mut String, cell: &CalendarCell) {
    match cell {
        CalendarCell::Empty => buffer.push_str("<td class='empty'></td>"),
        CalendarCell::Plain(day) => buffer.push_str(&format!("<td>{}</td>", day)),
        CalendarCell::Marked(day) => {
            buffer.push_str(&format!("<td class='marked'>{}</td>", day))
        }
    }
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::recurrence::Weekday;
    use crate::services::calendar::render;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn grid_with_marks() -> CalendarGrid {
        let marked = BTreeSet::from([NaiveDate::from_ymd_opt(2024, 2, 14).unwrap()]);
        render(&marked, 2024, 2).unwrap()
    }

    #[test]
    fn test_html_cell_classes() {
        let headers: Vec<&str> = Weekday::all().iter().map(|day| day.short_label()).collect();
        let html = to_html(&grid_with_marks(), &headers);
        assert!(html.contains("<caption>February 2024</caption>"));
        assert!(html.contains("<th>Mon</th>"));
        assert!(html.contains("<td class='marked'>14</td>"));
        assert!(html.contains("<td>15</td>"));
        // Three leading and three trailing empty cells
        assert_eq!(html.matches("<td class='empty'></td>").count(), 6);
        assert_eq!(html.matches("<tr>").count(), 1 + 5);
    }

    #[test]
    fn test_html_custom_headers_are_escaped() {
        let headers = ["Seg", "Ter", "Qua", "Qui", "Sex", "Sáb", "<Dom>"];
        let html = to_html(&grid_with_marks(), &headers);
        assert!(html.contains("<th>Seg</th>"));
        assert!(html.contains("<th>Sáb</th>"));
        assert!(html.contains("<th>&lt;Dom&gt;</th>"));
    }
}
