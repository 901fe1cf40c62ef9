// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Keyboard**: Escape/arrow toggles and the arrow-key pan step
//! - **Diagnostics**: Event buffer capacity

use crate::domain::diagnostics::buffer_capacity_bounds;
use crate::domain::ui::pan_step_bounds;

// ==========================================================================
// Keyboard Defaults
// ==========================================================================

/// Escape closes the lightbox by default.
pub const DEFAULT_ESC_KEY: bool = true;

/// Arrow keys navigate between slides by default.
pub const DEFAULT_ARROW_KEYS: bool = true;

/// Default pan distance per arrow keypress (logical pixels).
pub const DEFAULT_PAN_STEP_PX: f32 = pan_step_bounds::DEFAULT_PX;

/// Minimum pan distance per arrow keypress.
pub const MIN_PAN_STEP_PX: f32 = pan_step_bounds::MIN_PX;

/// Maximum pan distance per arrow keypress.
pub const MAX_PAN_STEP_PX: f32 = pan_step_bounds::MAX_PX;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::MIN;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::MAX;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_PAN_STEP_PX > 0.0);
    assert!(MAX_PAN_STEP_PX > MIN_PAN_STEP_PX);
    assert!(DEFAULT_PAN_STEP_PX >= MIN_PAN_STEP_PX);
    assert!(DEFAULT_PAN_STEP_PX <= MAX_PAN_STEP_PX);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_defaults_are_valid() {
        assert!(DEFAULT_ESC_KEY);
        assert!(DEFAULT_ARROW_KEYS);
        assert_eq!(DEFAULT_PAN_STEP_PX, 80.0);
    }

    #[test]
    fn diagnostics_defaults_are_valid() {
        assert_eq!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, 256);
        assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
        assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
    }
}
