// Copyright 2026 the Bulletviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart validation errors.
//!
//! Every failure is a synchronous, typed validation error raised at the call
//! site that triggered it (construction or a later property mutation).
//! Nothing is retried or recovered internally; callers match on variants, not
//! message text.

use thiserror::Error;

/// Errors raised by chart construction, property mutation, or reconciliation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// Fewer than two positional arguments (expected series + actual value)
    /// after stripping an optional leading viewport.
    #[error("expected a data series and an actual value, got {got} positional argument(s)")]
    InsufficientArguments {
        /// Number of positional arguments supplied.
        got: usize,
    },

    /// The actual value must stay a scalar; raised both at assignment and on
    /// every reconciliation pass.
    #[error("actual data must be a single scalar value, got {got} elements")]
    ActualDataNonScalar {
        /// Number of elements supplied.
        got: usize,
    },

    /// The category label must be a single string, not a list.
    #[error("category must be a single string label")]
    InvalidCategory,

    /// Axis limits must be a strictly increasing `(low, high)` pair.
    #[error("limits must be strictly increasing, got ({0}, {1})")]
    InvalidLimits(f64, f64),

    /// The face color must resolve to exactly one color.
    #[error("face color must be a single color, got {got} rows")]
    FaceColorNonScalar {
        /// Number of color rows supplied.
        got: usize,
    },

    /// Legend display names must match the comparative-bar count. Only
    /// checked while the legend is shown, at reconcile time, because the
    /// series length can change after the names are set.
    #[error("legend needs one display name per comparative bar, got {names} name(s) for {bars} bar(s)")]
    DisplayNameCountMismatch {
        /// Number of display names supplied.
        names: usize,
        /// Number of comparative bars.
        bars: usize,
    },

    /// An option name that no property recognizes.
    #[error("unrecognized option `{0}`")]
    UnknownOption(String),

    /// An option value of the wrong shape or type.
    #[error("option `{name}` expects {expected}")]
    OptionType {
        /// The option name.
        name: &'static str,
        /// Human-readable description of the expected value shape.
        expected: &'static str,
    },

    /// A name/value run where a name slot held a non-string argument.
    #[error("expected an option name at argument position {0}")]
    ExpectedOptionName(usize),
}
