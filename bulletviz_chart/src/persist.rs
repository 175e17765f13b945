// Copyright 2026 the Bulletviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Save/load state for axis-limit overrides.
//!
//! Only manually pinned axis limits survive a save/reload cycle; every other
//! aspect of the chart is reconstructed from its properties. Capture happens
//! lazily on request ([`crate::BulletChart::persisted_state`]) and a loaded
//! record is applied once at setup
//! ([`crate::BulletChart::apply_persisted_state`]).

use serde::{Deserialize, Serialize};

/// Axis-limit overrides captured for a save/reload cycle.
///
/// Each field is present only when that axis was in manual-limit mode at
/// capture time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedLimits {
    /// Manual X-axis range, if pinned.
    #[serde(rename = "XLim", default, skip_serializing_if = "Option::is_none")]
    pub x_lim: Option<(f64, f64)>,
    /// Manual Y-axis range, if pinned.
    #[serde(rename = "YLim", default, skip_serializing_if = "Option::is_none")]
    pub y_lim: Option<(f64, f64)>,
}

impl PersistedLimits {
    /// Returns `true` when no axis override is present.
    pub fn is_empty(&self) -> bool {
        self.x_lim.is_none() && self.y_lim.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip_is_lossless() {
        let state = PersistedLimits {
            x_lim: None,
            y_lim: Some((0.0, 10.0)),
        };
        let json = serde_json::to_string(&state).expect("serialize");
        assert_eq!(json, r#"{"YLim":[0.0,10.0]}"#);
        let back: PersistedLimits = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, state);
    }

    #[test]
    fn absent_fields_deserialize_as_none() {
        let state: PersistedLimits = serde_json::from_str("{}").expect("deserialize");
        assert!(state.is_empty());
    }
}
