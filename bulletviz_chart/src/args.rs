// Copyright 2026 the Bulletviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dynamic construction arguments.
//!
//! [`crate::BulletChart::from_args`] accepts a loosely typed argument list in
//! the host-framework convention: an optional leading viewport, positional
//! `(expectedSeries, actualValue[, categoryLabel])`, then an even-length run
//! of name/value pairs. This module parses and validates that shape; typed
//! callers use [`crate::BulletChart::new`] and the setters instead.

use kurbo::Rect;

use crate::error::ChartError;

/// A loosely typed construction argument.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgValue {
    /// The plot rectangle allotted by a parent container. Only meaningful as
    /// the first argument.
    Viewport(Rect),
    /// A single number.
    Scalar(f64),
    /// A numeric series.
    Series(Vec<f64>),
    /// A single string (a category label, an option name, or an enumerated
    /// option value).
    Text(String),
    /// A list of strings (legend display names).
    TextList(Vec<String>),
    /// One or more RGB rows with channels in `[0, 1]`.
    ColorRows(Vec<[f64; 3]>),
    /// A boolean switch.
    Switch(bool),
}

/// The normalized result of parsing a dynamic argument list.
#[derive(Debug, Default)]
pub(crate) struct ParsedArgs {
    pub(crate) viewport: Option<Rect>,
    pub(crate) expected: Vec<f64>,
    pub(crate) actual: Vec<f64>,
    pub(crate) category: Option<String>,
    pub(crate) options: Vec<(String, ArgValue)>,
}

pub(crate) fn parse_args(args: Vec<ArgValue>) -> Result<ParsedArgs, ChartError> {
    let mut args = args.into_iter().peekable();

    let viewport = match args.peek() {
        Some(ArgValue::Viewport(rect)) => {
            let rect = *rect;
            args.next();
            Some(rect)
        }
        _ => None,
    };

    let rest: Vec<ArgValue> = args.collect();
    if rest.len() < 2 {
        return Err(ChartError::InsufficientArguments { got: rest.len() });
    }
    let mut rest = rest.into_iter();

    let expected = match rest.next() {
        Some(ArgValue::Series(values)) => values,
        Some(ArgValue::Scalar(value)) => vec![value],
        _ => {
            return Err(ChartError::OptionType {
                name: "ExpectedData",
                expected: "a numeric series",
            });
        }
    };

    let actual = match rest.next() {
        Some(ArgValue::Scalar(value)) => vec![value],
        Some(ArgValue::Series(values)) => values,
        _ => {
            return Err(ChartError::OptionType {
                name: "ActualData",
                expected: "a numeric scalar",
            });
        }
    };
    if actual.len() != 1 {
        return Err(ChartError::ActualDataNonScalar { got: actual.len() });
    }

    let mut rest: Vec<ArgValue> = rest.collect();

    // An odd remainder means the next argument is the category label,
    // consumed positionally rather than as an option name.
    let category = if rest.len() % 2 == 1 {
        match rest.remove(0) {
            ArgValue::Text(label) => Some(label),
            _ => return Err(ChartError::InvalidCategory),
        }
    } else {
        None
    };

    let mut options = Vec::new();
    let mut it = rest.into_iter().enumerate();
    while let Some((pos, name)) = it.next() {
        let ArgValue::Text(name) = name else {
            return Err(ChartError::ExpectedOptionName(pos));
        };
        // The remainder has even length, so a value always follows.
        let (_, value) = it.next().expect("name/value run has even length");
        options.push((name, value));
    }

    Ok(ParsedArgs {
        viewport,
        expected,
        actual,
        category,
        options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> ArgValue {
        ArgValue::Series(values.to_vec())
    }

    #[test]
    fn fewer_than_two_positional_arguments_is_an_error() {
        let err = parse_args(vec![series(&[60.0, 80.0])]).unwrap_err();
        assert_eq!(err, ChartError::InsufficientArguments { got: 1 });

        // A leading viewport does not count as a positional argument.
        let err = parse_args(vec![
            ArgValue::Viewport(Rect::new(0.0, 0.0, 100.0, 100.0)),
            series(&[60.0, 80.0]),
        ])
        .unwrap_err();
        assert_eq!(err, ChartError::InsufficientArguments { got: 1 });
    }

    #[test]
    fn non_scalar_actual_data_is_rejected_at_parse_time() {
        let err = parse_args(vec![series(&[60.0]), series(&[1.0, 2.0])]).unwrap_err();
        assert_eq!(err, ChartError::ActualDataNonScalar { got: 2 });
    }

    #[test]
    fn odd_remainder_is_consumed_as_the_category_label() {
        let parsed = parse_args(vec![
            series(&[60.0, 80.0]),
            ArgValue::Scalar(72.0),
            ArgValue::Text("Revenue".into()),
        ])
        .expect("valid arguments");
        assert_eq!(parsed.category.as_deref(), Some("Revenue"));
        assert!(parsed.options.is_empty());
    }

    #[test]
    fn odd_remainder_that_is_not_text_is_an_invalid_category() {
        let err = parse_args(vec![
            series(&[60.0, 80.0]),
            ArgValue::Scalar(72.0),
            ArgValue::TextList(vec!["a".into(), "b".into()]),
        ])
        .unwrap_err();
        assert_eq!(err, ChartError::InvalidCategory);
    }

    #[test]
    fn name_value_pairs_survive_after_the_category() {
        let parsed = parse_args(vec![
            series(&[60.0, 80.0]),
            ArgValue::Scalar(72.0),
            ArgValue::Text("Revenue".into()),
            ArgValue::Text("Grid".into()),
            ArgValue::Switch(false),
        ])
        .expect("valid arguments");
        assert_eq!(parsed.category.as_deref(), Some("Revenue"));
        assert_eq!(
            parsed.options,
            vec![(String::from("Grid"), ArgValue::Switch(false))]
        );
    }

    #[test]
    fn a_non_text_name_slot_is_rejected() {
        let err = parse_args(vec![
            series(&[60.0, 80.0]),
            ArgValue::Scalar(72.0),
            ArgValue::Switch(true),
            ArgValue::Switch(false),
        ])
        .unwrap_err();
        assert_eq!(err, ChartError::ExpectedOptionName(0));
    }
}
