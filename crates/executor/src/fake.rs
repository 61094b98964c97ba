//! Deterministic sample-data backend.
//!
//! Synthesizes one page of rows from the column definitions so demos and
//! integration tests can exercise the full connector contract without a
//! script evaluator. Row `i` maps each column name to
//! `"<column label> <i>"`.

use relata_core::{Context, FakeReportConfig, Row};

use crate::connector::{ConnectorState, ReportConnector};
use crate::error::ExecuteError;

/// Total rows synthesized when the definition does not say.
pub const DEFAULT_ROW_COUNT: usize = 100;

/// Connector producing generated placeholder rows.
#[derive(Debug)]
pub struct FakeConnector {
    state: ConnectorState,
    row_count: usize,
    rows: Vec<Row>,
}

impl Default for FakeConnector {
    fn default() -> Self {
        FakeConnector {
            state: ConnectorState::default(),
            row_count: DEFAULT_ROW_COUNT,
            rows: Vec::new(),
        }
    }
}

impl FakeConnector {
    /// Copy the relevant definition fields into a fresh connector.
    pub fn new(config: &FakeReportConfig) -> Self {
        FakeConnector {
            state: ConnectorState::from_common(&config.common),
            row_count: config.row_count.unwrap_or(DEFAULT_ROW_COUNT),
            rows: Vec::new(),
        }
    }

    /// Total rows available across all pages.
    pub fn row_count(&self) -> usize {
        self.row_count
    }
}

impl ReportConnector for FakeConnector {
    fn state(&self) -> &ConnectorState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ConnectorState {
        &mut self.state
    }

    fn rows(&self) -> &[Row] {
        &self.rows
    }

    fn execute(&mut self, _extra: &Context) -> Result<(), ExecuteError> {
        self.rows.clear();
        let start = self.state.page() * self.state.page_limit();
        let end = (start + self.state.page_limit()).min(self.row_count);
        for i in start..end {
            let mut row = Row::new();
            for column in self.state.columns() {
                row.insert(
                    column.name.clone(),
                    format!("{} {}", column.display_label(), i).into(),
                );
            }
            self.rows.push(row);
        }
        tracing::debug!(
            rows = self.rows.len(),
            page = self.state.page(),
            "sample rows generated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relata_core::{ColumnDef, ReportCommon};
    use serde_json::json;

    fn fake(columns: &[&str], page_limit: usize, row_count: usize) -> FakeConnector {
        FakeConnector::new(&FakeReportConfig {
            common: ReportCommon {
                columns: columns.iter().map(|c| ColumnDef::new(*c)).collect(),
                page_limit: Some(page_limit),
                ..ReportCommon::default()
            },
            row_count: Some(row_count),
        })
    }

    #[test]
    fn test_generates_full_page() {
        let mut conn = fake(&["id", "day"], 3, 100);
        conn.run(&Context::new());
        assert!(conn.state.errors().is_empty());
        assert_eq!(conn.rows().len(), 3);
        assert_eq!(conn.rows()[0]["id"], json!("id 0"));
        assert_eq!(conn.rows()[0]["day"], json!("day 0"));
    }

    #[test]
    fn test_pages_do_not_overlap() {
        let mut conn = fake(&["id"], 3, 100);
        conn.state.set_page(1);
        conn.run(&Context::new());
        assert_eq!(conn.rows()[0]["id"], json!("id 3"));
        assert_eq!(conn.rows()[2]["id"], json!("id 5"));
    }

    #[test]
    fn test_last_page_is_truncated() {
        let mut conn = fake(&["id"], 3, 5);
        conn.state.set_page(1);
        conn.run(&Context::new());
        assert_eq!(conn.rows().len(), 2);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let mut conn = fake(&["id"], 3, 5);
        conn.state.set_page(7);
        conn.run(&Context::new());
        assert!(conn.rows().is_empty());
        assert!(conn.state.errors().is_empty());
    }

    #[test]
    fn test_label_used_when_present() {
        let mut conn = FakeConnector::new(&FakeReportConfig {
            common: ReportCommon {
                columns: vec![ColumnDef {
                    name: "id".to_string(),
                    label: Some("Identifier".to_string()),
                    format: None,
                }],
                page_limit: Some(1),
                ..ReportCommon::default()
            },
            row_count: Some(1),
        });
        conn.run(&Context::new());
        assert_eq!(conn.rows()[0]["id"], json!("Identifier 0"));
    }

    #[test]
    fn test_default_row_count() {
        let conn = FakeConnector::new(&FakeReportConfig::default());
        assert_eq!(conn.row_count(), DEFAULT_ROW_COUNT);
    }
}
