//! Name-based model selection.
//!
//! Drivers pick a model by name (from a run configuration, a CLI flag, ...) and get back a
//! `Box<dyn WeightingModel>`, so the ranking loop never names a concrete formula.

use crate::model::WeightingModel;
use crate::{Dhgb2, Error, SerSimple};
use std::fmt;
use std::str::FromStr;

/// The weighting models this crate provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum ModelKind {
    /// [`Dhgb2`].
    Dhgb2,
    /// [`SerSimple`].
    SerSimple,
}

impl ModelKind {
    /// Every model, in listing order.
    pub fn all() -> &'static [ModelKind] {
        &[ModelKind::Dhgb2, ModelKind::SerSimple]
    }

    /// The name the model reports through [`WeightingModel::info`].
    pub fn name(self) -> &'static str {
        match self {
            ModelKind::Dhgb2 => Dhgb2::NAME,
            ModelKind::SerSimple => SerSimple::NAME,
        }
    }

    /// Build a model with the default parameter.
    pub fn build(self) -> Box<dyn WeightingModel> {
        match self {
            ModelKind::Dhgb2 => Box::new(Dhgb2::default()),
            ModelKind::SerSimple => Box::new(SerSimple::default()),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelKind {
    type Err = Error;

    /// Case-insensitive; `_` and `-` separators are ignored (`ser_simple`, `SER-SIMPLE`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        match key.as_str() {
            "DHGB2" => Ok(ModelKind::Dhgb2),
            "SERSIMPLE" => Ok(ModelKind::SerSimple),
            _ => Err(Error::UnknownModel(s.to_string())),
        }
    }
}

impl TryFrom<String> for ModelKind {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ModelKind> for String {
    fn from(kind: ModelKind) -> Self {
        kind.name().to_string()
    }
}

/// A model choice plus an optional parameter override.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelConfig {
    /// Which formula.
    pub model: ModelKind,
    /// Parameter override; the model default applies when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub parameter: Option<f64>,
}

impl ModelConfig {
    /// Config for `model` with its default parameter.
    pub fn new(model: ModelKind) -> Self {
        Self {
            model,
            parameter: None,
        }
    }

    /// Override the parameter.
    pub fn with_parameter(mut self, parameter: f64) -> Self {
        self.parameter = Some(parameter);
        self
    }

    /// Instantiate the configured model with empty statistics.
    pub fn build(&self) -> Box<dyn WeightingModel> {
        let mut model = self.model.build();
        if let Some(p) = self.parameter {
            model.set_parameter(p);
        }
        log::trace!("built {} (parameter={})", model.info(), model.parameter());
        model
    }
}

impl FromStr for ModelConfig {
    type Err = Error;

    /// `NAME` or `NAME(parameter)`, e.g. `SERSIMPLE` or `dhgb2(0.4)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(open) = s.find('(') else {
            return Ok(Self::new(s.parse()?));
        };
        let inner = s[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| Error::InvalidConfig(format!("missing `)` in {s:?}")))?;
        let parameter: f64 = inner
            .trim()
            .parse()
            .map_err(|e| Error::InvalidConfig(format!("parameter {:?}: {e}", inner.trim())))?;
        Ok(Self::new(s[..open].parse()?).with_parameter(parameter))
    }
}
