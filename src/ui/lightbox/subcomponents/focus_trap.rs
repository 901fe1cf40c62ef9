// SPDX-License-Identifier: MPL-2.0
//! Focus trap sub-component.
//!
//! Owns focus containment for one lightbox instance:
//!
//! ```text
//! Inactive ──Bind──▶ Active { trap, listener } ──Destroy──▶ Inactive
//! ```
//!
//! On `Bind` a trap scoped to the overlay container is created and
//! activated, and exactly one document key listener is registered. On
//! `Destroy` the trap is deactivated, the listener removed, and focus goes
//! back to the [`FocusRestoreTarget`] if that element still exists.

use crate::ui::lightbox::host::{Document, FocusTrap, Focusable, ListenerId};
use std::fmt;
use std::rc::{Rc, Weak};

// =============================================================================
// Trap Options
// =============================================================================

/// Where focus lands when the trap activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialFocus {
    /// The trap container itself.
    Container,
    /// The first tabbable descendant.
    FirstTabbable,
}

/// Options handed to [`Document::create_focus_trap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrapOptions {
    /// Escape releases the trap.
    pub escape_deactivates: bool,
    /// Deactivation moves focus back to the element focused before activation.
    pub return_focus_on_deactivate: bool,
    pub initial_focus: InitialFocus,
}

impl TrapOptions {
    /// Options used by the lightbox.
    ///
    /// Escape belongs to the key resolver and focus is restored explicitly on
    /// destroy, so the trap does neither itself.
    #[must_use]
    pub fn lightbox() -> Self {
        Self {
            escape_deactivates: false,
            return_focus_on_deactivate: false,
            initial_focus: InitialFocus::Container,
        }
    }
}

// =============================================================================
// Focus Restore Target
// =============================================================================

/// Weak slot for the element that regains focus when the lightbox closes.
///
/// The slot never keeps the element alive. Reading it does not clear it.
#[derive(Clone, Default)]
pub struct FocusRestoreTarget(Option<Weak<dyn Focusable>>);

impl FocusRestoreTarget {
    /// Creates a slot pointing at `element`.
    #[must_use]
    pub fn to(element: &Rc<dyn Focusable>) -> Self {
        Self(Some(Rc::downgrade(element)))
    }

    /// Points the slot at `element`.
    pub fn set(&mut self, element: &Rc<dyn Focusable>) {
        self.0 = Some(Rc::downgrade(element));
    }

    /// Returns the element if it is still alive and attached to the document.
    #[must_use]
    pub fn get(&self) -> Option<Rc<dyn Focusable>> {
        self.0
            .as_ref()
            .and_then(Weak::upgrade)
            .filter(|element| element.is_connected())
    }

    /// Whether a target was ever set.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Focuses the target. Returns `false` (and does nothing) when it is gone.
    pub fn restore(&self) -> bool {
        match self.get() {
            Some(element) => {
                element.focus();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for FocusRestoreTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.0 {
            None => "unset",
            Some(weak) if weak.strong_count() == 0 => "dropped",
            Some(_) => "set",
        };
        f.debug_tuple("FocusRestoreTarget").field(&state).finish()
    }
}

// =============================================================================
// State Machine
// =============================================================================

/// Focus containment state.
pub enum TrapState<T> {
    Inactive,
    Active { trap: T, listener: ListenerId },
}

impl<T> Default for TrapState<T> {
    fn default() -> Self {
        Self::Inactive
    }
}

impl<T> fmt::Debug for TrapState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inactive => f.write_str("Inactive"),
            Self::Active { listener, .. } => {
                f.debug_struct("Active").field("listener", listener).finish()
            }
        }
    }
}

/// Messages for the focus trap sub-component.
#[derive(Clone)]
pub enum Message {
    /// The overlay container exists.
    Bind {
        container: Rc<dyn Focusable>,
        restore_target: FocusRestoreTarget,
    },
    /// The overlay is being torn down.
    Destroy,
}

/// Effects produced by focus trap transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Transition ignored (bind while active, destroy while inactive).
    None,
    /// Trap active, key listener registered.
    Activated { listener: ListenerId },
    /// Trap released. `focus_restored` is false when the target was stale.
    Deactivated { focus_restored: bool },
}

/// Focus trap sub-component state.
pub struct State<T> {
    trap: TrapState<T>,
    restore_target: FocusRestoreTarget,
}

impl<T> Default for State<T> {
    fn default() -> Self {
        Self {
            trap: TrapState::Inactive,
            restore_target: FocusRestoreTarget::default(),
        }
    }
}

impl<T> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("trap", &self.trap)
            .field("restore_target", &self.restore_target)
            .finish()
    }
}

impl<T: FocusTrap> State<T> {
    /// Handle a focus trap message.
    pub fn handle<D>(&mut self, msg: Message, document: &mut D) -> Effect
    where
        D: Document<Trap = T>,
    {
        match msg {
            Message::Bind {
                container,
                restore_target,
            } => {
                if self.is_active() {
                    return Effect::None;
                }

                let mut trap = document.create_focus_trap(container, TrapOptions::lightbox());
                trap.activate();
                let listener = document.add_key_listener();

                self.restore_target = restore_target;
                self.trap = TrapState::Active { trap, listener };
                Effect::Activated { listener }
            }
            Message::Destroy => match std::mem::take(&mut self.trap) {
                TrapState::Inactive => Effect::None,
                TrapState::Active {
                    mut trap,
                    listener,
                } => {
                    trap.deactivate();
                    document.remove_key_listener(listener);
                    let focus_restored = self.restore_target.restore();
                    Effect::Deactivated { focus_restored }
                }
            },
        }
    }

    /// Whether focus is currently contained.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.trap, TrapState::Active { .. })
    }

    /// The registered key listener while active.
    #[must_use]
    pub fn listener(&self) -> Option<ListenerId> {
        match &self.trap {
            TrapState::Active { listener, .. } => Some(*listener),
            TrapState::Inactive => None,
        }
    }

    /// The restore target captured at the last bind.
    #[must_use]
    pub fn restore_target(&self) -> &FocusRestoreTarget {
        &self.restore_target
    }
}
