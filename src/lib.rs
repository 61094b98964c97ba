//! Relata — a pluggable report-execution engine.
//!
//! Given a declarative report definition (columns, parameters,
//! backend-specific settings) and a set of runtime inputs, Relata validates
//! the parameters, dispatches to a backend-specific execution strategy, and
//! exposes a paginated row set plus any execution errors. It is meant to sit
//! under a middleware layer that serves report results to a presentation
//! client.
//!
//! # Example
//!
//! ```
//! use relata::{Connector, Context, ReportConfig, ReportConnector};
//!
//! let definition: ReportConfig = serde_json::from_str(r#"{
//!     "type": "fake",
//!     "columns": [{"name": "id"}],
//!     "page_limit": 5
//! }"#)?;
//!
//! let mut report = Connector::from_config(&definition);
//! report.run(&Context::new());
//!
//! assert!(report.state().errors().is_empty());
//! assert_eq!(report.rows().len(), 5);
//! # Ok::<(), serde_json::Error>(())
//! ```

// ============================================================================
// Definition model
// ============================================================================

pub use relata_core::{ColumnDef, Context, ParamError, Row};
pub use relata_core::{FakeReportConfig, ReportCommon, ReportConfig, ScriptedReportConfig};
pub use relata_core::{
    BooleanParam, ChoiceParam, DateParam, DateTimeParam, MultiChoiceParam, NumericParam,
    ParamConfig, ParamSet, TextParam,
};

// ============================================================================
// Execution layer
// ============================================================================

pub use relata_executor::{
    Connector, ConnectorState, ExecuteError, FakeConnector, ReportConnector, ScriptedConnector,
    DEFAULT_PAGE_LIMIT,
};
