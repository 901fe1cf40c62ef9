// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! Type-safe wrappers for UI values, always within valid ranges.

// =============================================================================
// Pan Step Bounds
// =============================================================================

/// Keyboard pan step bounds in logical pixels.
pub mod pan_step_bounds {
    /// Minimum pan distance per keypress.
    pub const MIN_PX: f32 = 1.0;
    /// Maximum pan distance per keypress.
    pub const MAX_PX: f32 = 1000.0;
    /// Default pan distance per keypress.
    pub const DEFAULT_PX: f32 = 80.0;
}

// =============================================================================
// PanStep
// =============================================================================

/// Distance a zoomed slide pans for one arrow keypress.
///
/// The magnitude is fixed per keypress; key repeat is left to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanStep(f32);

impl PanStep {
    /// Creates a new pan step, clamping the value to the valid range.
    ///
    /// Non-finite input falls back to the default step.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if !px.is_finite() {
            return Self::default();
        }
        Self(px.clamp(pan_step_bounds::MIN_PX, pan_step_bounds::MAX_PX))
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Signed pan delta for a keypress.
    ///
    /// Arrow keys move the viewport, not the content: a forward key
    /// (right/down) shifts the pan coordinate by `-step`.
    #[must_use]
    pub fn delta(self, is_forward: bool) -> f32 {
        if is_forward {
            -self.0
        } else {
            self.0
        }
    }
}

impl Default for PanStep {
    fn default() -> Self {
        Self(pan_step_bounds::DEFAULT_PX)
    }
}
