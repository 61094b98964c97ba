//! Core report definition model for Relata.
//!
//! This crate holds the leaf types of the engine:
//! - [`ParamConfig`] / [`ParamSet`]: named, typed, possibly-required report
//!   parameters with a preparation pass for dynamic option lists
//! - [`ColumnDef`]: column definitions, carried for the presentation layer
//! - [`ReportConfig`]: the deserialized declarative definition of one report,
//!   tagged by backend kind
//!
//! The execution layer (`relata-executor`) builds connectors from these
//! definitions; nothing here executes anything.

pub mod column;
pub mod config;
pub mod error;
pub mod param;

pub use column::ColumnDef;
pub use config::{FakeReportConfig, ReportCommon, ReportConfig, ScriptedReportConfig};
pub use error::ParamError;
pub use param::{
    BooleanParam, ChoiceParam, DateParam, DateTimeParam, MultiChoiceParam, NumericParam,
    ParamConfig, ParamSet, TextParam,
};

use std::collections::HashMap;

/// Caller-supplied execution context: middleware-provided values such as the
/// logged-in user, permissions, or lookup data for option lists. Passed
/// verbatim into parameter preparation and backend execution; no schema is
/// imposed on it.
pub type Context = HashMap<String, serde_json::Value>;

/// One result row: a string-keyed mapping to arbitrary values. Keys normally
/// line up with the declared column names, but the core does not enforce it.
pub type Row = serde_json::Map<String, serde_json::Value>;
