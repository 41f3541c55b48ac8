use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::viewport::DEFAULT_MOBILE_BREAKPOINT;

/// Matches the slide-out duration of the mobile panel.
const DEFAULT_SETTLE_DELAY_MS: u64 = 300;
const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 250;
const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;
const DEFAULT_SWIPE_EDGE_ZONE: f32 = 50.0;
const DEFAULT_PRESS_FEEDBACK_MS: u64 = 150;
const DEFAULT_REVEAL_THRESHOLD: f32 = 0.1;
const DEFAULT_REVEAL_BOTTOM_MARGIN: f32 = 50.0;

/// Tunables for the sidebar controller and its helpers.
///
/// Every field has a default, so partial JSON documents deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Widest viewport that still uses the mobile layout.
    pub mobile_breakpoint: f32,
    /// Wait between starting a mobile close and finalizing it.
    pub settle_delay_ms: u64,
    /// Quiet window applied to viewport resize events.
    pub resize_debounce_ms: u64,
    /// Minimum horizontal travel, exclusive, for a touch to count as a swipe.
    pub swipe_threshold: f32,
    /// Distance from the left edge an opening swipe must start within.
    pub swipe_edge_zone: f32,
    /// How long an activated navigation entry stays pressed.
    pub press_feedback_ms: u64,
    /// Visible fraction of a content card that triggers its reveal.
    pub reveal_threshold: f32,
    /// Amount the observed viewport's bottom edge is pulled in.
    pub reveal_bottom_margin: f32,
}

impl ControllerConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn press_feedback(&self) -> Duration {
        Duration::from_millis(self.press_feedback_ms)
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            swipe_edge_zone: DEFAULT_SWIPE_EDGE_ZONE,
            press_feedback_ms: DEFAULT_PRESS_FEEDBACK_MS,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_bottom_margin: DEFAULT_REVEAL_BOTTOM_MARGIN,
        }
    }
}
