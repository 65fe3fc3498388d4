///! Splits raw detail lines into basic info lines and `key: value` rows

use regex::Regex;
use std::sync::LazyLock;

use super::types::TableRow;

static TAB_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\t+").expect("tab run regex"));

/// A colon followed by whitespace somewhere on the first line
static KEY_VALUE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^.*:\s+").expect("key/value regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailLine {
    Info(String),
    Row(TableRow),
}

pub fn strip_tabs(text: &str) -> String {
    TAB_RUN.replace_all(text, "").into_owned()
}

/// Classify one raw detail line. Whitespace-only lines yield `None`.
///
/// Rows split at the first colon; the value is trimmed, the key is kept as is.
pub fn classify_line(raw: &str) -> Option<DetailLine> {
    if raw.trim().is_empty() {
        return None;
    }

    let line = strip_tabs(raw).trim().to_string();

    if KEY_VALUE.is_match(&line) {
        if let Some((key, value)) = line.split_once(':') {
            return Some(DetailLine::Row(TableRow::new(key, value.trim())));
        }
    }

    Some(DetailLine::Info(line))
}

/// Classify all detail lines, keeping page order within each group.
pub fn classify_details<S: AsRef<str>>(details: &[S]) -> (Vec<String>, Vec<TableRow>) {
    let mut basic_info = Vec::new();
    let mut tables = Vec::new();

    for raw in details {
        match classify_line(raw.as_ref()) {
            Some(DetailLine::Info(line)) => basic_info.push(line),
            Some(DetailLine::Row(row)) => tables.push(row),
            None => {}
        }
    }

    (basic_info, tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_value_line() {
        assert_eq!(
            classify_line("Name: John Doe"),
            Some(DetailLine::Row(TableRow::new("Name", "John Doe")))
        );
    }

    #[test]
    fn test_whitespace_line_skipped() {
        assert_eq!(classify_line("   "), None);
        assert_eq!(classify_line("\n\t\t\n"), None);
    }

    #[test]
    fn test_plain_line_is_info() {
        assert_eq!(
            classify_line("Some note"),
            Some(DetailLine::Info("Some note".to_string()))
        );
    }

    #[test]
    fn test_colon_without_space_is_info() {
        assert_eq!(
            classify_line("https://example.org"),
            Some(DetailLine::Info("https://example.org".to_string()))
        );
    }

    #[test]
    fn test_tabs_removed_and_trimmed() {
        assert_eq!(
            classify_line("\n\t\tClass: \t\tEXTRA  \n"),
            Some(DetailLine::Row(TableRow::new("Class", "EXTRA")))
        );
        assert_eq!(
            classify_line("\t225 MAIN\tST\t"),
            Some(DetailLine::Info("225 MAINST".to_string()))
        );
    }

    #[test]
    fn test_split_at_first_colon_only() {
        assert_eq!(
            classify_line("Updated: 12:30 UTC"),
            Some(DetailLine::Row(TableRow::new("Updated", "12:30 UTC")))
        );
    }

    #[test]
    fn test_classify_details_keeps_order() {
        let details = [
            "  ",
            "JOHN DOE",
            "1 ELM ST, BOSTON, MA",
            "Class: Extra",
            "\n",
            "Expires: 01/01/2030",
        ];
        let (basic_info, tables) = classify_details(&details);
        assert_eq!(basic_info, vec!["JOHN DOE", "1 ELM ST, BOSTON, MA"]);
        assert_eq!(
            tables,
            vec![
                TableRow::new("Class", "Extra"),
                TableRow::new("Expires", "01/01/2030"),
            ]
        );
    }
}
