//! Connector execution layer for Relata.
//!
//! A connector is the executable unit bound to one report definition: it owns
//! pagination state, a copy of the definition's columns and parameters, and
//! the error list for the current run. [`ReportConnector::run`] validates
//! required parameters, then hands control to the backend-specific execution
//! routine; every failure is recorded on the error list, never thrown.
//!
//! Backends are a closed set: the [`Connector`] enum dispatches each
//! definition kind to its implementation, and [`Connector::from_config`] is
//! the one-to-one factory from definition to executable.

pub mod connector;
pub mod fake;
pub mod scripted;

mod error;

pub use connector::{Connector, ConnectorState, ReportConnector, DEFAULT_PAGE_LIMIT};
pub use error::ExecuteError;
pub use fake::FakeConnector;
pub use scripted::ScriptedConnector;
