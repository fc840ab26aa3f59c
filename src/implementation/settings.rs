// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the configuration of the diagram compilations:
//! the maximum width of a layer, the cutset strategy and the filters that
//! are turned on.

use derive_builder::{Builder, UninitializedFieldError};

use crate::CutsetType;

/// The errors that can be raised when building some `Settings`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The maximum width of the layers must be at least one
    #[error("the maximum width of a layer must be at least 1 (got {0})")]
    InvalidWidth(usize),
    /// A field has no value and no default
    #[error("missing value for the setting `{0}`")]
    UninitializedField(&'static str),
}
impl From<UninitializedFieldError> for SettingsError {
    fn from(e: UninitializedFieldError) -> Self {
        Self::UninitializedField(e.field_name())
    }
}

/// This is how you configure the compilation of the decision diagrams
/// e.g. if you want to bound the width of the layers or turn some of
/// the pruning filters on.
///
/// # Example
/// ```
/// # use ddbb::*;
/// let settings = SettingsBuilder::default()
///     .width(10)
///     .cutset(CutsetType::Frontier)
///     .use_rub(true)
///     .use_cache(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(10, settings.width);
/// assert!(settings.restrict);
/// assert!(!settings.use_dominance);
///
/// assert!(SettingsBuilder::default().width(0).build().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
#[builder(build_fn(validate = "Self::validate", error = "SettingsError"))]
pub struct Settings {
    /// The maximum number of nodes in a layer. `usize::MAX` (default) means
    /// the layers are unbounded.
    #[builder(default="usize::MAX")]
    pub width: usize,
    /// The kind of cutset extracted from the inexact relaxed diagrams
    #[builder(default="CutsetType::LastExactLayer")]
    pub cutset: CutsetType,
    /// Prune the nodes using the rough upper bound of their state
    #[builder(default="false")]
    pub use_rub: bool,
    /// Prune the cutset nodes using the local bounds computed bottom-up
    #[builder(default="false")]
    pub use_locb: bool,
    /// Prune the nodes using the thresholds cached by earlier compilations
    #[builder(default="false")]
    pub use_cache: bool,
    /// Prune the nodes that are dominated by a previously reached state
    #[builder(default="false")]
    pub use_dominance: bool,
    /// Tighten the rough upper bound with the aggregate bound of the model
    #[builder(default="false")]
    pub use_aggregate_bound: bool,
    /// Rank the nodes of restricted layers by score before value
    #[builder(default="false")]
    pub use_aggregate_score: bool,
    /// Compile a restricted diagram before the relaxed one
    #[builder(default="true")]
    pub restrict: bool,
}

impl SettingsBuilder {
    fn validate(&self) -> Result<(), SettingsError> {
        match self.width {
            Some(0) => Err(SettingsError::InvalidWidth(0)),
            _       => Ok(()),
        }
    }
}

impl Default for Settings {
    /// Unbounded width, last exact layer cutset, no filter and restriction on.
    fn default() -> Self {
        Settings {
            width: usize::MAX,
            cutset: CutsetType::LastExactLayer,
            use_rub: false,
            use_locb: false,
            use_cache: false,
            use_dominance: false,
            use_aggregate_bound: false,
            use_aggregate_score: false,
            restrict: true,
        }
    }
}

impl Settings {
    /// Returns the same settings with every pruning filter turned on
    pub fn with_all_filters(self) -> Self {
        Settings {
            use_rub: true,
            use_locb: true,
            use_cache: true,
            use_dominance: true,
            ..self
        }
    }
}
