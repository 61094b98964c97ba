//! Connector state and the execution contract.
//!
//! Every backend owns a [`ConnectorState`] copied out of its definition and
//! satisfies the [`ReportConnector`] contract. The provided
//! [`run`](ReportConnector::run) method is the execution state machine:
//! validate required parameters, then either record the aggregate validation
//! error or invoke the backend routine, recording any fault it returns.

use relata_core::{ColumnDef, Context, ParamSet, ReportCommon, ReportConfig, Row};

use crate::error::ExecuteError;
use crate::fake::FakeConnector;
use crate::scripted::ScriptedConnector;

/// Page size used when the definition does not override it.
pub const DEFAULT_PAGE_LIMIT: usize = 20;

/// Execution state shared by every backend kind.
///
/// Construction copies what it needs out of the definition; the definition
/// itself is never mutated by a connector, so binding caller input targets
/// [`params_mut`](Self::params_mut) (or the definition before construction).
/// Errors are append-only across runs — callers reusing an instance must
/// [`clear_errors`](Self::clear_errors) between independent runs.
#[derive(Debug, Clone)]
pub struct ConnectorState {
    page: usize,
    page_limit: usize,
    columns: Vec<ColumnDef>,
    params: ParamSet,
    errors: Vec<String>,
}

impl Default for ConnectorState {
    /// Degenerate state with no backing definition: empty columns and
    /// parameters, page 0, page limit 20.
    fn default() -> Self {
        ConnectorState {
            page: 0,
            page_limit: DEFAULT_PAGE_LIMIT,
            columns: Vec::new(),
            params: ParamSet::new(),
            errors: Vec::new(),
        }
    }
}

impl ConnectorState {
    /// Copy the relevant definition fields into a fresh state.
    pub fn from_common(common: &ReportCommon) -> Self {
        ConnectorState {
            page: 0,
            page_limit: common.page_limit.unwrap_or(DEFAULT_PAGE_LIMIT),
            columns: common.columns.clone(),
            params: common.params.clone(),
            errors: Vec::new(),
        }
    }

    /// Zero-based page to produce results for.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Maximum number of rows on a page.
    pub fn page_limit(&self) -> usize {
        self.page_limit
    }

    pub fn set_page_limit(&mut self, page_limit: usize) {
        self.page_limit = page_limit;
    }

    /// Column definitions copied from the definition.
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Parameters copied from the definition.
    pub fn params(&self) -> &ParamSet {
        &self.params
    }

    /// Mutable parameter access, used to bind caller input before a run.
    pub fn params_mut(&mut self) -> &mut ParamSet {
        &mut self.params
    }

    /// Errors recorded so far. Must be manually cleared.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Reset the error list to empty.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }
}

/// Contract every report backend satisfies.
///
/// Backends populate rows however suits them — computed up front, cached, or
/// synthesized on read — and report faults through their `execute` result.
pub trait ReportConnector {
    fn state(&self) -> &ConnectorState;

    fn state_mut(&mut self) -> &mut ConnectorState;

    /// Rows produced by the most recent run.
    fn rows(&self) -> &[Row];

    /// Backend-specific execution. Only called once validation has passed.
    fn execute(&mut self, extra: &Context) -> Result<(), ExecuteError>;

    /// Run the report: validate, then execute.
    ///
    /// Required parameters with a blank resolved value abort the run with a
    /// single aggregate error listing their names in set order; the backend
    /// is not invoked. A backend fault is recorded on the error list. This
    /// method never returns an error to its caller.
    fn run(&mut self, extra: &Context) {
        let missing: Vec<String> = self
            .state()
            .params()
            .iter()
            .filter(|p| p.required() && p.is_blank())
            .map(|p| p.name().to_string())
            .collect();
        if !missing.is_empty() {
            tracing::debug!(count = missing.len(), "required parameters unresolved; skipping execution");
            let message = format!(
                "Some required parameters weren't filled in: {}.",
                missing.join(", ")
            );
            self.state_mut().push_error(message);
            return;
        }
        if let Err(fault) = self.execute(extra) {
            tracing::warn!(%fault, "report execution failed");
            self.state_mut().push_error(fault.to_string());
        }
    }
}

/// The executable unit bound to one report definition.
///
/// A closed variant over backend kinds; [`Connector::from_config`] maps each
/// definition kind to its matching backend one-to-one.
#[derive(Debug)]
pub enum Connector {
    Scripted(ScriptedConnector),
    Fake(FakeConnector),
}

impl Connector {
    /// Build the connector matching the definition's backend kind.
    pub fn from_config(config: &ReportConfig) -> Connector {
        match config {
            ReportConfig::Scripted(cfg) => Connector::Scripted(ScriptedConnector::new(cfg)),
            ReportConfig::Fake(cfg) => Connector::Fake(FakeConnector::new(cfg)),
        }
    }
}

impl ReportConnector for Connector {
    fn state(&self) -> &ConnectorState {
        match self {
            Connector::Scripted(c) => c.state(),
            Connector::Fake(c) => c.state(),
        }
    }

    fn state_mut(&mut self) -> &mut ConnectorState {
        match self {
            Connector::Scripted(c) => c.state_mut(),
            Connector::Fake(c) => c.state_mut(),
        }
    }

    fn rows(&self) -> &[Row] {
        match self {
            Connector::Scripted(c) => c.rows(),
            Connector::Fake(c) => c.rows(),
        }
    }

    fn execute(&mut self, extra: &Context) -> Result<(), ExecuteError> {
        match self {
            Connector::Scripted(c) => c.execute(extra),
            Connector::Fake(c) => c.execute(extra),
        }
    }
}
