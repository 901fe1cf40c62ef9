// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcut resolution.
//!
//! [`resolve`] turns one key event plus a viewer snapshot into at most one
//! [`ResolvedAction`]. It has no side effects: the caller suppresses the
//! default browser/OS handling and invokes the action.
//!
//! | Key        | Code | Effect                                              |
//! |------------|------|-----------------------------------------------------|
//! | Escape     | 27   | close (if enabled)                                  |
//! | Z          | 90   | toggle zoom                                         |
//! | Left/Right | 37/39| previous/next slide, else pan horizontally if zoomed|
//! | Up/Down    | 38/40| pan vertically if zoomed                            |

use crate::config::Config;
use crate::domain::ui::PanStep;
use crate::ui::lightbox::host::ViewerState;
use iced::keyboard::Modifiers;

// =============================================================================
// Key Codes
// =============================================================================

/// DOM-style legacy key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const ESCAPE: Self = Self(27);
    pub const ARROW_LEFT: Self = Self(37);
    pub const ARROW_UP: Self = Self(38);
    pub const ARROW_RIGHT: Self = Self(39);
    pub const ARROW_DOWN: Self = Self(40);
    pub const Z: Self = Self(90);
}

/// A raw key-down event as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyEvent {
    /// Legacy key code.
    pub code: KeyCode,
    /// Modifier keys held during the press.
    pub modifiers: Modifiers,
    /// The event targets an editable field (text input, content-editable).
    pub target_editable: bool,
    /// An earlier listener already handled the event.
    pub handled: bool,
}

impl KeyEvent {
    /// Creates an unmodified, unhandled key event.
    #[must_use]
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
            target_editable: false,
            handled: false,
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn in_editable_target(mut self) -> Self {
        self.target_editable = true;
        self
    }

    #[must_use]
    pub fn mark_handled(mut self) -> Self {
        self.handled = true;
        self
    }

    /// Whether the event must be left to the host's native handling.
    ///
    /// Control, Alt and Meta/Logo combinations are platform shortcuts
    /// (e.g. Cmd+Left goes back in history), and editable targets own
    /// their arrow keys. Shift alone is not special.
    #[must_use]
    pub fn is_special_key(&self) -> bool {
        self.target_editable
            || self.modifiers.control()
            || self.modifiers.alt()
            || self.modifiers.logo()
    }
}

// =============================================================================
// Key Action Mapping
// =============================================================================

/// Pan/navigation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Action bound directly to a key, independent of the axis rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectAction {
    Close,
    ToggleZoom,
}

/// What a mapped key means before viewer state is considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBinding {
    Direct(DirectAction),
    Directional { axis: Axis, is_forward: bool },
}

const KEY_ACTION_MAPPING: [(KeyCode, KeyBinding); 6] = [
    (KeyCode::ESCAPE, KeyBinding::Direct(DirectAction::Close)),
    (KeyCode::Z, KeyBinding::Direct(DirectAction::ToggleZoom)),
    (
        KeyCode::ARROW_LEFT,
        KeyBinding::Directional {
            axis: Axis::X,
            is_forward: false,
        },
    ),
    (
        KeyCode::ARROW_UP,
        KeyBinding::Directional {
            axis: Axis::Y,
            is_forward: false,
        },
    ),
    (
        KeyCode::ARROW_RIGHT,
        KeyBinding::Directional {
            axis: Axis::X,
            is_forward: true,
        },
    ),
    (
        KeyCode::ARROW_DOWN,
        KeyBinding::Directional {
            axis: Axis::Y,
            is_forward: true,
        },
    ),
];

/// Looks up the binding of a key code.
#[must_use]
pub fn binding_for(code: KeyCode) -> Option<KeyBinding> {
    KEY_ACTION_MAPPING
        .iter()
        .find(|(mapped, _)| *mapped == code)
        .map(|(_, binding)| *binding)
}

// =============================================================================
// Options
// =============================================================================

/// Keyboard configuration flags read from the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardOptions {
    /// Escape closes the lightbox.
    pub esc_key: bool,
    /// Left/right arrows switch slides when there is more than one.
    pub arrow_keys: bool,
    /// Pan distance per arrow keypress.
    pub pan_step: PanStep,
}

impl Default for KeyboardOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for KeyboardOptions {
    fn from(config: &Config) -> Self {
        let keyboard = &config.keyboard;
        Self {
            esc_key: keyboard.esc_key.unwrap_or(crate::config::DEFAULT_ESC_KEY),
            arrow_keys: keyboard
                .arrow_keys
                .unwrap_or(crate::config::DEFAULT_ARROW_KEYS),
            pan_step: keyboard.pan_step_px.map(PanStep::new).unwrap_or_default(),
        }
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// A semantic viewer action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedAction {
    Close,
    ToggleZoom,
    Next,
    Prev,
    /// Shift the pan coordinate on `axis` by `delta` pixels.
    Pan { axis: Axis, delta: f32 },
}

/// Outcome of resolving one key event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Action to invoke on the viewer.
    pub action: Option<ResolvedAction>,
    /// The caller must suppress the host's default handling of the key.
    pub prevent_default: bool,
}

impl Resolution {
    /// No action, default handling left alone.
    pub const NONE: Self = Self {
        action: None,
        prevent_default: false,
    };

    fn action(action: ResolvedAction) -> Self {
        Self {
            action: Some(action),
            prevent_default: true,
        }
    }

    /// Whether nothing happens at all.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.action.is_none() && !self.prevent_default
    }
}

/// Resolves a key event against the current viewer state.
///
/// Precedence: an already-handled event wins over everything, then special
/// keys, then the mapping. For arrows, slide navigation wins over panning.
#[must_use]
pub fn resolve(event: &KeyEvent, state: &ViewerState, options: &KeyboardOptions) -> Resolution {
    if event.handled || event.is_special_key() {
        return Resolution::NONE;
    }

    match binding_for(event.code) {
        None => Resolution::NONE,
        Some(KeyBinding::Direct(DirectAction::Close)) => {
            if options.esc_key {
                Resolution::action(ResolvedAction::Close)
            } else {
                Resolution::NONE
            }
        }
        Some(KeyBinding::Direct(DirectAction::ToggleZoom)) => {
            Resolution::action(ResolvedAction::ToggleZoom)
        }
        Some(KeyBinding::Directional { axis, is_forward }) => {
            resolve_directional(axis, is_forward, state, options)
        }
    }
}

fn resolve_directional(
    axis: Axis,
    is_forward: bool,
    state: &ViewerState,
    options: &KeyboardOptions,
) -> Resolution {
    let action = if options.arrow_keys && axis == Axis::X && state.item_count > 1 {
        Some(if is_forward {
            ResolvedAction::Next
        } else {
            ResolvedAction::Prev
        })
    } else if state
        .current_slide
        .is_some_and(|slide| slide.is_zoomed_beyond_fit())
    {
        Some(ResolvedAction::Pan {
            axis,
            delta: options.pan_step.delta(is_forward),
        })
    } else {
        None
    };

    // Arrow keys always suppress page scrolling, even without an action.
    Resolution {
        action,
        prevent_default: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::lightbox::host::SlideState;
    use iced::Vector;

    fn gallery(item_count: usize) -> ViewerState {
        ViewerState {
            current_slide: Some(SlideState {
                zoom_level: 1.0,
                fit_zoom_level: 1.0,
                pan: Vector::new(0.0, 0.0),
            }),
            item_count,
        }
    }

    fn zoomed(item_count: usize) -> ViewerState {
        ViewerState {
            current_slide: Some(SlideState {
                zoom_level: 2.0,
                fit_zoom_level: 1.0,
                pan: Vector::new(0.0, 0.0),
            }),
            item_count,
        }
    }

    const ALL_MAPPED: [KeyCode; 6] = [
        KeyCode::ESCAPE,
        KeyCode::Z,
        KeyCode::ARROW_LEFT,
        KeyCode::ARROW_UP,
        KeyCode::ARROW_RIGHT,
        KeyCode::ARROW_DOWN,
    ];

    #[test]
    fn right_arrow_with_several_items_navigates_next() {
        let resolution = resolve(
            &KeyEvent::new(KeyCode::ARROW_RIGHT),
            &gallery(3),
            &KeyboardOptions::default(),
        );
        assert_eq!(resolution.action, Some(ResolvedAction::Next));
        assert!(resolution.prevent_default);
    }

    #[test]
    fn left_arrow_with_several_items_navigates_prev() {
        let resolution = resolve(
            &KeyEvent::new(KeyCode::ARROW_LEFT),
            &gallery(2),
            &KeyboardOptions::default(),
        );
        assert_eq!(resolution.action, Some(ResolvedAction::Prev));
    }

    #[test]
    fn down_arrow_on_zoomed_single_item_pans_up() {
        let resolution = resolve(
            &KeyEvent::new(KeyCode::ARROW_DOWN),
            &zoomed(1),
            &KeyboardOptions::default(),
        );
        assert_eq!(
            resolution.action,
            Some(ResolvedAction::Pan {
                axis: Axis::Y,
                delta: -80.0
            })
        );
        assert!(resolution.prevent_default);
    }

    #[test]
    fn up_arrow_on_zoomed_slide_pans_with_positive_delta() {
        let resolution = resolve(
            &KeyEvent::new(KeyCode::ARROW_UP),
            &zoomed(3),
            &KeyboardOptions::default(),
        );
        assert_eq!(
            resolution.action,
            Some(ResolvedAction::Pan {
                axis: Axis::Y,
                delta: 80.0
            })
        );
    }

    #[test]
    fn horizontal_navigation_wins_over_panning() {
        let resolution = resolve(
            &KeyEvent::new(KeyCode::ARROW_RIGHT),
            &zoomed(3),
            &KeyboardOptions::default(),
        );
        assert_eq!(resolution.action, Some(ResolvedAction::Next));
    }

    #[test]
    fn disabled_arrow_keys_fall_back_to_horizontal_pan() {
        let options = KeyboardOptions {
            arrow_keys: false,
            ..KeyboardOptions::default()
        };
        let resolution = resolve(&KeyEvent::new(KeyCode::ARROW_LEFT), &zoomed(3), &options);
        assert_eq!(
            resolution.action,
            Some(ResolvedAction::Pan {
                axis: Axis::X,
                delta: 80.0
            })
        );
    }

    #[test]
    fn configured_pan_step_is_used() {
        let options = KeyboardOptions {
            pan_step: PanStep::new(25.0),
            ..KeyboardOptions::default()
        };
        let resolution = resolve(&KeyEvent::new(KeyCode::ARROW_DOWN), &zoomed(1), &options);
        assert_eq!(
            resolution.action,
            Some(ResolvedAction::Pan {
                axis: Axis::Y,
                delta: -25.0
            })
        );
    }

    #[test]
    fn arrow_without_effect_still_prevents_scroll() {
        let resolution = resolve(
            &KeyEvent::new(KeyCode::ARROW_UP),
            &gallery(1),
            &KeyboardOptions::default(),
        );
        assert_eq!(resolution.action, None);
        assert!(resolution.prevent_default);
    }

    #[test]
    fn arrow_without_current_slide_does_not_pan() {
        let state = ViewerState {
            current_slide: None,
            item_count: 1,
        };
        let resolution = resolve(
            &KeyEvent::new(KeyCode::ARROW_RIGHT),
            &state,
            &KeyboardOptions::default(),
        );
        assert_eq!(resolution.action, None);
        assert!(resolution.prevent_default);
    }

    #[test]
    fn escape_closes_when_enabled() {
        let resolution = resolve(
            &KeyEvent::new(KeyCode::ESCAPE),
            &gallery(1),
            &KeyboardOptions::default(),
        );
        assert_eq!(resolution.action, Some(ResolvedAction::Close));
        assert!(resolution.prevent_default);
    }

    #[test]
    fn escape_is_ignored_when_disabled() {
        let options = KeyboardOptions {
            esc_key: false,
            ..KeyboardOptions::default()
        };
        let resolution = resolve(&KeyEvent::new(KeyCode::ESCAPE), &gallery(1), &options);
        assert!(resolution.is_none());
    }

    #[test]
    fn z_toggles_zoom_regardless_of_state() {
        let disabled = KeyboardOptions {
            esc_key: false,
            arrow_keys: false,
            pan_step: PanStep::new(1.0),
        };
        for state in [gallery(1), zoomed(5), ViewerState::default()] {
            for options in [KeyboardOptions::default(), disabled] {
                let resolution = resolve(&KeyEvent::new(KeyCode::Z), &state, &options);
                assert_eq!(resolution.action, Some(ResolvedAction::ToggleZoom));
                assert!(resolution.prevent_default);
            }
        }
    }

    #[test]
    fn unmapped_keys_resolve_to_nothing() {
        for code in (0..=255).map(KeyCode).filter(|c| !ALL_MAPPED.contains(c)) {
            let resolution = resolve(&KeyEvent::new(code), &zoomed(3), &KeyboardOptions::default());
            assert!(resolution.is_none(), "key {code:?} should be ignored");
        }
    }

    #[test]
    fn handled_events_resolve_to_nothing() {
        for code in ALL_MAPPED {
            let event = KeyEvent::new(code).mark_handled();
            let resolution = resolve(&event, &zoomed(3), &KeyboardOptions::default());
            assert!(resolution.is_none(), "handled key {code:?} should be ignored");
        }
    }

    #[test]
    fn special_keys_resolve_to_nothing() {
        let special = [Modifiers::CTRL, Modifiers::ALT, Modifiers::LOGO];
        for code in ALL_MAPPED {
            for modifiers in special {
                let event = KeyEvent::new(code).with_modifiers(modifiers);
                let resolution = resolve(&event, &zoomed(3), &KeyboardOptions::default());
                assert!(resolution.is_none(), "{modifiers:?}+{code:?} should be ignored");
            }
            let editable = KeyEvent::new(code).in_editable_target();
            assert!(resolve(&editable, &zoomed(3), &KeyboardOptions::default()).is_none());
        }
    }

    #[test]
    fn shift_alone_is_not_special() {
        let event = KeyEvent::new(KeyCode::ARROW_RIGHT).with_modifiers(Modifiers::SHIFT);
        assert!(!event.is_special_key());
        let resolution = resolve(&event, &gallery(3), &KeyboardOptions::default());
        assert_eq!(resolution.action, Some(ResolvedAction::Next));
    }

    #[test]
    fn mapping_binds_either_direct_action_or_axis() {
        assert_eq!(
            binding_for(KeyCode::ESCAPE),
            Some(KeyBinding::Direct(DirectAction::Close))
        );
        assert_eq!(
            binding_for(KeyCode::ARROW_DOWN),
            Some(KeyBinding::Directional {
                axis: Axis::Y,
                is_forward: true
            })
        );
        assert_eq!(binding_for(KeyCode(13)), None);
    }

    #[test]
    fn keyboard_options_follow_config() {
        let mut config = Config::default();
        config.keyboard.esc_key = Some(false);
        config.keyboard.pan_step_px = Some(120.0);
        config.keyboard.arrow_keys = None;

        let options = KeyboardOptions::from(&config);
        assert!(!options.esc_key);
        assert!(options.arrow_keys);
        assert_eq!(options.pan_step.value(), 120.0);
    }
}
