///! Data types for registry lookups

/// Form payload sent to the registry search endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallsignQuery {
    callsign: String,
}

impl CallsignQuery {
    pub const METHOD_FIELD: &'static str = "_method";
    pub const TERMS_FIELD: &'static str = "data[Search][terms]";

    pub fn new(callsign: impl Into<String>) -> Self {
        Self {
            callsign: callsign.into(),
        }
    }

    pub fn callsign(&self) -> &str {
        &self.callsign
    }

    /// Form fields in submission order
    pub fn payload(&self) -> [(&'static str, &str); 2] {
        [
            (Self::METHOD_FIELD, "POST"),
            (Self::TERMS_FIELD, self.callsign.as_str()),
        ]
    }
}

/// Title and raw detail lines pulled out of the result page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryPage {
    pub title: String,
    /// Text nodes in document order, whitespace-only entries included
    pub details: Vec<String>,
}

/// One `key: value` row of the result table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub key: String,
    pub value: String,
}

impl TableRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Everything printed for one call sign
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub title: String,
    pub basic_info: Vec<String>,
    /// Rows in page order; the grid square row, when present, is last
    pub tables: Vec<TableRow>,
}

impl SearchReport {
    pub fn grid_square(&self) -> Option<&str> {
        self.tables
            .iter()
            .rev()
            .find(|row| row.key == crate::module::grid::GRID_SQUARE_KEY)
            .map(|row| row.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload() {
        for callsign in ["W1AW", "", "not a callsign"] {
            let query = CallsignQuery::new(callsign);
            assert_eq!(
                query.payload(),
                [("_method", "POST"), ("data[Search][terms]", callsign)]
            );
        }
    }
}
