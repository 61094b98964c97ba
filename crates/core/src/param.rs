//! Parameter descriptors and ordered parameter sets.
//!
//! A report definition carries a list of named, typed, possibly-required
//! parameters. The `type` tag selects the concrete kind, and with it the
//! runtime type of the value; an unset value is always `None`, never a
//! sentinel. Choice-style kinds can have their option list populated from the
//! caller's context before the parameter is presented or validated (see
//! [`ParamConfig::prepare`]).

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::ParamError;
use crate::Context;

/// A single report parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ParamConfig {
    Text(TextParam),
    Numeric(NumericParam),
    Boolean(BooleanParam),
    Date(DateParam),
    DateTime(DateTimeParam),
    Choice(ChoiceParam),
    MultiChoice(MultiChoiceParam),
}

/// Free-form text parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextParam {
    pub name: String,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub value: Option<String>,
}

/// Numeric parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericParam {
    pub name: String,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub value: Option<f64>,
}

/// Boolean parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BooleanParam {
    pub name: String,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub value: Option<bool>,
}

/// Calendar-date parameter (no time component).
///
/// Date and date-time exist as separate kinds because the presentation layer
/// renders different widgets for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateParam {
    pub name: String,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub value: Option<NaiveDate>,
}

/// Date-and-time parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateTimeParam {
    pub name: String,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub value: Option<NaiveDateTime>,
}

/// Single selection out of an option list.
///
/// `options` may be declared statically in the definition or reloaded during
/// the preparation pass from the context entry named by `options_from`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoiceParam {
    pub name: String,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
    /// Context key holding an array of strings to use as options.
    #[serde(default)]
    pub options_from: Option<String>,
}

/// Multiple selections out of an option list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiChoiceParam {
    pub name: String,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub value: Option<Vec<String>>,
    #[serde(default)]
    pub options: Vec<String>,
    /// Context key holding an array of strings to use as options.
    #[serde(default)]
    pub options_from: Option<String>,
}

impl ParamConfig {
    pub fn name(&self) -> &str {
        match self {
            ParamConfig::Text(p) => &p.name,
            ParamConfig::Numeric(p) => &p.name,
            ParamConfig::Boolean(p) => &p.name,
            ParamConfig::Date(p) => &p.name,
            ParamConfig::DateTime(p) => &p.name,
            ParamConfig::Choice(p) => &p.name,
            ParamConfig::MultiChoice(p) => &p.name,
        }
    }

    pub fn required(&self) -> bool {
        match self {
            ParamConfig::Text(p) => p.required,
            ParamConfig::Numeric(p) => p.required,
            ParamConfig::Boolean(p) => p.required,
            ParamConfig::Date(p) => p.required,
            ParamConfig::DateTime(p) => p.required,
            ParamConfig::Choice(p) => p.required,
            ParamConfig::MultiChoice(p) => p.required,
        }
    }

    pub fn help(&self) -> Option<&str> {
        match self {
            ParamConfig::Text(p) => p.help.as_deref(),
            ParamConfig::Numeric(p) => p.help.as_deref(),
            ParamConfig::Boolean(p) => p.help.as_deref(),
            ParamConfig::Date(p) => p.help.as_deref(),
            ParamConfig::DateTime(p) => p.help.as_deref(),
            ParamConfig::Choice(p) => p.help.as_deref(),
            ParamConfig::MultiChoice(p) => p.help.as_deref(),
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        match self {
            ParamConfig::Text(p) => p.placeholder.as_deref(),
            ParamConfig::Numeric(p) => p.placeholder.as_deref(),
            ParamConfig::Boolean(p) => p.placeholder.as_deref(),
            ParamConfig::Date(p) => p.placeholder.as_deref(),
            ParamConfig::DateTime(p) => p.placeholder.as_deref(),
            ParamConfig::Choice(p) => p.placeholder.as_deref(),
            ParamConfig::MultiChoice(p) => p.placeholder.as_deref(),
        }
    }

    /// Stringified current value; `None` when unset.
    ///
    /// Every kind renders its own value, so checking for a missing input
    /// never relies on runtime introspection. Multi-choice joins its
    /// selections with `", "`.
    pub fn resolve_value(&self) -> Option<String> {
        match self {
            ParamConfig::Text(p) => p.value.clone(),
            ParamConfig::Numeric(p) => p.value.map(|v| v.to_string()),
            ParamConfig::Boolean(p) => p.value.map(|v| v.to_string()),
            ParamConfig::Date(p) => p.value.map(|v| v.to_string()),
            ParamConfig::DateTime(p) => p.value.map(|v| v.to_string()),
            ParamConfig::Choice(p) => p.value.clone(),
            ParamConfig::MultiChoice(p) => p.value.as_ref().map(|v| v.join(", ")),
        }
    }

    /// True when the resolved value is unset or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.resolve_value().map_or(true, |v| v.trim().is_empty())
    }

    /// Preparation pass, invoked once per parameter in set order before the
    /// parameter is presented or validated.
    ///
    /// Choice kinds carrying an `options_from` key reload their option list
    /// from the context entry under that key, which must be an array of
    /// strings. Lookup or shape failures degrade to an empty option list;
    /// this hook never fails. All other kinds are untouched.
    pub fn prepare(&mut self, extra: &Context) {
        match self {
            ParamConfig::Choice(p) => {
                if let Some(key) = p.options_from.as_deref() {
                    p.options = options_from_context(&p.name, key, extra);
                }
            }
            ParamConfig::MultiChoice(p) => {
                if let Some(key) = p.options_from.as_deref() {
                    p.options = options_from_context(&p.name, key, extra);
                }
            }
            _ => {}
        }
    }
}

fn options_from_context(param: &str, key: &str, extra: &Context) -> Vec<String> {
    let entries = match extra.get(key).and_then(|v| v.as_array()) {
        Some(entries) => entries,
        None => {
            tracing::warn!(param, key, "option source missing or not an array; options cleared");
            return Vec::new();
        }
    };
    let options: Option<Vec<String>> = entries
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect();
    options.unwrap_or_else(|| {
        tracing::warn!(param, key, "option source has non-string entries; options cleared");
        Vec::new()
    })
}

/// Ordered, name-unique collection of parameters.
///
/// Insertion order is preserved and meaningful — it matches the presentation
/// order. Duplicate names are rejected at construction, including during
/// deserialization, so a malformed definition fails loudly instead of
/// silently shadowing a parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ParamConfig>", into = "Vec<ParamConfig>")]
pub struct ParamSet {
    params: Vec<ParamConfig>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, rejecting duplicate names.
    pub fn push(&mut self, param: ParamConfig) -> Result<(), ParamError> {
        if self.get(param.name()).is_some() {
            return Err(ParamError::DuplicateName(param.name().to_string()));
        }
        self.params.push(param);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ParamConfig> {
        self.params.iter().find(|p| p.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ParamConfig> {
        self.params.iter_mut().find(|p| p.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParamConfig> {
        self.params.iter()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Run every parameter's preparation hook, in set order.
    pub fn prepare(&mut self, extra: &Context) {
        for param in &mut self.params {
            param.prepare(extra);
        }
    }
}

impl TryFrom<Vec<ParamConfig>> for ParamSet {
    type Error = ParamError;

    fn try_from(params: Vec<ParamConfig>) -> Result<Self, Self::Error> {
        let mut set = ParamSet::new();
        for param in params {
            set.push(param)?;
        }
        Ok(set)
    }
}

impl From<ParamSet> for Vec<ParamConfig> {
    fn from(set: ParamSet) -> Self {
        set.params
    }
}

impl<'a> IntoIterator for &'a ParamSet {
    type Item = &'a ParamConfig;
    type IntoIter = std::slice::Iter<'a, ParamConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}
