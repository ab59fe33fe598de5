// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Case and scenario data model, plus TOML/JSON fixture loading.
//!
//! A [`Case`] is one (input, expected) pair; a [`Scenario`] is an ordered
//! list of cases sharing a single params value. Suites are plain slices of
//! scenarios. Fixtures can live in code or in TOML/JSON files loaded with
//! [`Scenario::load`] / [`load_suite`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading scenario fixture files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One (input, expected) pair, tested as a unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Case<I, O> {
    /// Input handed to the run function
    pub input: I,
    /// Expected output, compared in serialized form
    pub expected: O,
}

impl<I, O> Case<I, O> {
    pub fn new(input: I, expected: O) -> Self {
        Self { input, expected }
    }
}

impl<I, O> From<(I, O)> for Case<I, O> {
    fn from((input, expected): (I, O)) -> Self {
        Self { input, expected }
    }
}

/// Ordered list of cases sharing one params value.
///
/// `P` defaults to `()` for unparameterized scenarios; fixture files may
/// omit `params` whenever `P: Default`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    deny_unknown_fields,
    bound(
        deserialize = "I: Deserialize<'de>, O: Deserialize<'de>, P: Deserialize<'de> + Default"
    )
)]
pub struct Scenario<I, O, P = ()> {
    /// Opaque configuration threaded into every run call, unchanged
    #[serde(default)]
    pub params: P,
    /// Cases executed strictly in order
    #[serde(default)]
    pub cases: Vec<Case<I, O>>,
}

/// Case whose expected side is a golden-file path.
pub type FileCase<I> = Case<I, PathBuf>;

/// Scenario of file cases.
pub type FileScenario<I, P = ()> = Scenario<I, PathBuf, P>;

impl<I, O> Scenario<I, O> {
    /// Scenario with no params.
    pub fn new(cases: Vec<Case<I, O>>) -> Self {
        Self { params: (), cases }
    }
}

impl<I, O> From<Vec<(I, O)>> for Scenario<I, O> {
    fn from(pairs: Vec<(I, O)>) -> Self {
        Self::new(pairs.into_iter().map(Case::from).collect())
    }
}

impl<I, O, P> Scenario<I, O, P> {
    /// Scenario whose cases all share `params`.
    pub fn with_params(params: P, cases: Vec<Case<I, O>>) -> Self {
        Self { params, cases }
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl<I, O, P> Scenario<I, O, P>
where
    I: DeserializeOwned,
    O: DeserializeOwned,
    P: DeserializeOwned + Default,
{
    /// Load a scenario from a TOML or JSON file, chosen by extension.
    ///
    /// Files ending in `.json` parse as JSON; everything else parses as
    /// TOML, where cases are an array-of-tables named `cases`.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        if is_json(path) {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(toml::from_str(&content)?)
        }
    }
}

#[derive(Deserialize)]
#[serde(
    deny_unknown_fields,
    bound(
        deserialize = "I: Deserialize<'de>, O: Deserialize<'de>, P: Deserialize<'de> + Default"
    )
)]
struct SuiteFile<I, O, P> {
    #[serde(default)]
    scenarios: Vec<Scenario<I, O, P>>,
}

/// Load a whole suite from a TOML or JSON file, chosen by extension.
///
/// Both formats wrap the list in a `scenarios` key, so a TOML suite is a
/// sequence of `[[scenarios]]` tables.
pub fn load_suite<I, O, P>(path: &Path) -> Result<Vec<Scenario<I, O, P>>, LoadError>
where
    I: DeserializeOwned,
    O: DeserializeOwned,
    P: DeserializeOwned + Default,
{
    let content = std::fs::read_to_string(path)?;
    let file: SuiteFile<I, O, P> = if is_json(path) {
        serde_json::from_str(&content)?
    } else {
        toml::from_str(&content)?
    };
    Ok(file.scenarios)
}

/// Convert plain (input, expected) pairs into cases.
pub fn cases<I, O>(pairs: impl IntoIterator<Item = (I, O)>) -> Vec<Case<I, O>> {
    pairs.into_iter().map(Case::from).collect()
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
