///! Text rendering of a search report

use std::fmt::Write;

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::module::registry::{SearchReport, TableRow};

/// Bordered grid, one rule between every row, no header
pub fn render_table(rows: &[TableRow]) -> String {
    let mut builder = Builder::default();
    for row in rows {
        builder.push_record([row.key.clone(), row.value.clone()]);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

/// Render the title, basic info lines, then the rows as a table or `key: value` lines.
pub fn render_report(report: &SearchReport, pretty: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", report.title);
    for line in &report.basic_info {
        let _ = writeln!(out, "{}", line);
    }

    if pretty {
        let table = if report.tables.is_empty() {
            String::new()
        } else {
            render_table(&report.tables)
        };
        let _ = writeln!(out, "{}", table);
    } else {
        for row in &report.tables {
            let _ = writeln!(out, "{}: {}", row.key, row.value);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> SearchReport {
        SearchReport {
            title: "W1AW".to_string(),
            basic_info: vec![
                "HIRAM PERCY MAXIM MEMORIAL STATION".to_string(),
                "225 MAIN ST, NEWINGTON, CT 06111".to_string(),
            ],
            tables: vec![
                TableRow::new("Class", "CLUB"),
                TableRow::new("Grid square", "FN31pr"),
            ],
        }
    }

    #[test]
    fn test_plain_output() {
        let out = render_report(&sample_report(), false);
        assert_eq!(
            out,
            "W1AW\n\
             HIRAM PERCY MAXIM MEMORIAL STATION\n\
             225 MAIN ST, NEWINGTON, CT 06111\n\
             Class: CLUB\n\
             Grid square: FN31pr\n"
        );
    }

    #[test]
    fn test_pretty_output() {
        let out = render_report(&sample_report(), true);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "W1AW");
        assert_eq!(lines[2], "225 MAIN ST, NEWINGTON, CT 06111");
        assert!(lines[3].starts_with('┌'));
        assert!(out.contains("│ Class       │ CLUB   │"));
        assert!(out.contains("│ Grid square │ FN31pr │"));
        assert!(lines.last().unwrap().starts_with('└'));
        assert!(!out.contains("Class: CLUB"));
    }

    #[test]
    fn test_pretty_keeps_row_order() {
        let out = render_table(&sample_report().tables);
        let class = out.find("Class").unwrap();
        let grid = out.find("Grid square").unwrap();
        assert!(class < grid);
    }

    #[test]
    fn test_no_rows() {
        let report = SearchReport {
            title: "N0CALL".to_string(),
            basic_info: vec![],
            tables: vec![],
        };
        assert_eq!(render_report(&report, true), "N0CALL\n\n");
        assert_eq!(render_report(&report, false), "N0CALL\n");
    }
}
