// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for lightbox activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Viewer actions triggered from the keyboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Close the lightbox.
    Close,

    /// Toggle between fit and zoomed-in levels.
    ToggleZoom,

    /// Navigate to the next slide.
    NavigateNext,

    /// Navigate to the previous slide.
    NavigatePrevious,

    /// Pan the current slide.
    Pan {
        /// Horizontal pan delta in logical pixels.
        dx: f32,
        /// Vertical pan delta in logical pixels.
        dy: f32,
    },
}

/// Lightbox lifecycle transitions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleTransition {
    /// Focus trap activated and key listener registered.
    Opened,
    /// Active slide switched and visibility markers resynced.
    SlideChanged,
    /// Focus trap released and key listener removed.
    Closed,
}

/// Recovered conditions that did not stop the lightbox.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "warning", rename_all = "snake_case")]
pub enum WarningEvent {
    /// The focus restore target was dropped or detached before close.
    StaleFocusTarget,
    /// Background elements were dropped before their marker could be restored.
    StaleBackgroundElements {
        /// Number of elements skipped.
        count: usize,
    },
    /// A `bind` arrived while the trap was already active.
    RedundantBind,
    /// A `destroy` arrived while the trap was inactive.
    RedundantDestroy,
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock).
    pub timestamp: Instant,
    /// The type and data of the event.
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// Lifecycle transition of the lightbox.
    Lifecycle {
        /// The transition that happened.
        transition: LifecycleTransition,
    },

    /// Keyboard-triggered viewer action.
    UserAction {
        /// The action invoked on the viewer.
        action: UserAction,
    },

    /// Recovered, non-fatal condition.
    Warning {
        /// What was recovered from.
        warning: WarningEvent,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_event_new_creates_with_current_timestamp() {
        let before = Instant::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::Lifecycle {
            transition: LifecycleTransition::Opened,
        });
        let after = Instant::now();

        assert!(event.timestamp >= before);
        assert!(event.timestamp <= after);
    }

    #[test]
    fn event_kind_serializes_with_type_tag() {
        #[derive(Serialize)]
        struct Wrapper {
            event: DiagnosticEventKind,
        }

        let wrapper = Wrapper {
            event: DiagnosticEventKind::UserAction {
                action: UserAction::NavigateNext,
            },
        };
        let text = toml::to_string(&wrapper).expect("serialize");
        assert!(text.contains("type = \"user_action\""));
        assert!(text.contains("navigate_next"));
    }
}
