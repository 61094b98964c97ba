//! Report configurations.
//!
//! A configuration is the deserialized declarative definition of one report:
//! fields shared by every backend (columns, parameters, pagination override,
//! presentation passthrough) plus backend-specific settings selected by the
//! `type` tag. The execution layer copies what it needs out of a
//! configuration at connector construction and never mutates it afterwards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::column::ColumnDef;
use crate::param::ParamSet;
use crate::Context;

/// Fields shared by every backend kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportCommon {
    /// Report identifier, e.g. the containing directory of the definition.
    #[serde(default)]
    pub report_id: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
    #[serde(default)]
    pub params: ParamSet,
    /// Overrides the page size; connectors default to 20 when absent.
    #[serde(default)]
    pub page_limit: Option<usize>,
    /// Options passed through unchanged to the presentation layer.
    #[serde(default)]
    pub extra_options: HashMap<String, String>,
}

/// A report definition, tagged by backend kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ReportConfig {
    Scripted(ScriptedReportConfig),
    Fake(FakeReportConfig),
}

/// Definition executed by the embedded script evaluator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptedReportConfig {
    #[serde(flatten)]
    pub common: ReportCommon,
    /// Script body; see the scripted connector for the bindings it sees.
    pub script: String,
}

/// Definition producing deterministic sample rows, for demos and tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FakeReportConfig {
    #[serde(flatten)]
    pub common: ReportCommon,
    /// Total synthesized rows across all pages. Defaults to 100.
    #[serde(default)]
    pub row_count: Option<usize>,
}

impl ReportConfig {
    pub fn common(&self) -> &ReportCommon {
        match self {
            ReportConfig::Scripted(c) => &c.common,
            ReportConfig::Fake(c) => &c.common,
        }
    }

    pub fn common_mut(&mut self) -> &mut ReportCommon {
        match self {
            ReportConfig::Scripted(c) => &mut c.common,
            ReportConfig::Fake(c) => &mut c.common,
        }
    }

    /// Run every parameter's preparation hook, in set order.
    ///
    /// Populates choice option lists before the definition is presented or
    /// executed. Never fails; see [`crate::ParamConfig::prepare`].
    pub fn prepare_parameters(&mut self, extra: &Context) {
        self.common_mut().params.prepare(extra);
    }
}
