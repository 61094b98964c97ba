//! Script-backed report execution.
//!
//! The script writer constructs the result by hand. Bindings exposed to the
//! script:
//!
//! - `rows` — array the script appends string-keyed records to
//! - `columns` — the column definitions
//! - `page`, `page_limit` — pagination, as integers
//! - `params` — the parameter descriptors
//! - `extra` — caller-supplied context values
//!
//! Keep `page` and `page_limit` in mind, refer to the parameters, and push
//! new records into `rows`. Records appended before an evaluation fault stay
//! visible; the fault itself lands on the connector's error list.

use rhai::serde::{from_dynamic, to_dynamic};
use rhai::{Array, Dynamic, Engine, Scope};
use serde::Serialize;

use relata_core::{Context, Row, ScriptedReportConfig};

use crate::connector::{ConnectorState, ReportConnector};
use crate::error::ExecuteError;

/// Connector evaluating an embedded script to produce rows.
#[derive(Debug, Default)]
pub struct ScriptedConnector {
    state: ConnectorState,
    script: String,
    rows: Vec<Row>,
}

impl ScriptedConnector {
    /// Copy the relevant definition fields into a fresh connector.
    pub fn new(config: &ScriptedReportConfig) -> Self {
        ScriptedConnector {
            state: ConnectorState::from_common(&config.common),
            script: config.script.clone(),
            rows: Vec::new(),
        }
    }

    /// The script body this connector evaluates.
    pub fn script(&self) -> &str {
        &self.script
    }
}

impl ReportConnector for ScriptedConnector {
    fn state(&self) -> &ConnectorState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ConnectorState {
        &mut self.state
    }

    fn rows(&self) -> &[Row] {
        &self.rows
    }

    fn execute(&mut self, extra: &Context) -> Result<(), ExecuteError> {
        self.rows.clear();

        let engine = Engine::new();
        let mut scope = Scope::new();
        scope.push("rows", Array::new());
        scope.push_constant_dynamic("columns", bindable("columns", self.state.columns())?);
        scope.push_constant("page", self.state.page() as i64);
        scope.push_constant("page_limit", self.state.page_limit() as i64);
        scope.push_constant_dynamic("params", bindable("params", self.state.params())?);
        scope.push_constant_dynamic("extra", bindable("extra", extra)?);

        let outcome = engine.run_with_scope(&mut scope, &self.script);

        // Harvest the sink whether or not evaluation succeeded; records
        // appended before a fault remain visible.
        let mut discarded = 0usize;
        if let Some(sink) = scope.get_value::<Array>("rows") {
            for entry in sink {
                match from_dynamic::<Row>(&entry) {
                    Ok(row) => self.rows.push(row),
                    Err(_) => discarded += 1,
                }
            }
        }

        outcome.map_err(|fault| ExecuteError::Script {
            message: fault.to_string(),
        })?;
        if discarded > 0 {
            return Err(ExecuteError::MalformedRows { discarded });
        }
        tracing::debug!(rows = self.rows.len(), "script completed");
        Ok(())
    }
}

fn bindable<T: Serialize>(name: &'static str, value: T) -> Result<Dynamic, ExecuteError> {
    to_dynamic(value).map_err(|err| ExecuteError::Bind {
        name,
        message: err.to_string(),
    })
}
