// SPDX-License-Identifier: MPL-2.0
//! Lightbox controller orchestrating the keyboard, focus and visibility
//! sub-components.
//!
//! The host forwards its lifecycle bus to [`Lightbox::handle`] and every
//! document key-down to [`Lightbox::on_key_down`]. Both are synchronous and
//! process events in delivery order.

use super::host::{AssistiveNode, Document, Focusable, Viewer};
use super::subcomponents::focus_trap::{self, FocusRestoreTarget};
use super::subcomponents::key_actions::{self, Axis, KeyEvent, Resolution, ResolvedAction};
use super::subcomponents::visibility::{self, BackgroundInertness, SlideVisibilityMap};
use crate::config::Config;
use crate::diagnostics::{
    BufferCapacity, DiagnosticEvent, DiagnosticEventKind, DiagnosticsLog, LifecycleTransition,
    UserAction, WarningEvent,
};
use std::rc::{Rc, Weak};

/// Per-instance open configuration.
#[derive(Clone, Default)]
pub struct OpenOptions {
    /// Element focused again when the lightbox closes, usually the thumbnail
    /// that opened it.
    pub restore_focus_to: FocusRestoreTarget,
    /// Page elements hidden from assistive technology while open.
    pub background: Vec<Weak<dyn AssistiveNode>>,
}

impl OpenOptions {
    #[must_use]
    pub fn restore_focus_to(mut self, element: &Rc<dyn Focusable>) -> Self {
        self.restore_focus_to.set(element);
        self
    }

    #[must_use]
    pub fn hide_background(mut self, element: &Rc<dyn AssistiveNode>) -> Self {
        self.background.push(Rc::downgrade(element));
        self
    }
}

/// Events emitted by the viewer lifecycle bus.
#[derive(Clone)]
pub enum LifecycleEvent {
    /// The overlay container exists.
    Bind { container: Rc<dyn Focusable> },
    /// The active slide changed.
    Change,
    /// The overlay is being torn down.
    Destroy,
}

/// Effects reported back to the host after a lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// Trap active; initial slide markers assigned.
    Opened { visibility: SlideVisibilityMap },
    /// Slide markers reassigned.
    SlideChanged { visibility: SlideVisibilityMap },
    /// Trap released.
    Closed { focus_restored: bool },
}

/// Lightbox input and accessibility controller.
pub struct Lightbox<D: Document> {
    focus_trap: focus_trap::State<D::Trap>,
    background: BackgroundInertness,
    options: OpenOptions,
    diagnostics: DiagnosticsLog,
}

impl<D: Document> Lightbox<D> {
    #[must_use]
    pub fn new(options: OpenOptions) -> Self {
        Self::with_capacity(options, BufferCapacity::default())
    }

    #[must_use]
    pub fn with_capacity(options: OpenOptions, capacity: BufferCapacity) -> Self {
        Self {
            focus_trap: focus_trap::State::default(),
            background: BackgroundInertness::default(),
            options,
            diagnostics: DiagnosticsLog::new(capacity),
        }
    }

    /// Builds a controller sized from the `[diagnostics]` settings.
    #[must_use]
    pub fn from_config(config: &Config, options: OpenOptions) -> Self {
        let capacity = config
            .diagnostics
            .buffer_capacity
            .map(BufferCapacity::new)
            .unwrap_or_default();
        Self::with_capacity(options, capacity)
    }

    /// Sets the element that regains focus on close.
    ///
    /// Must be called before `Bind`; the target is captured when the trap
    /// activates.
    pub fn set_focus_restore_target(&mut self, element: &Rc<dyn Focusable>) {
        self.options.restore_focus_to.set(element);
    }

    #[must_use]
    pub fn focus_restore_target(&self) -> &FocusRestoreTarget {
        &self.options.restore_focus_to
    }

    /// Whether the focus trap is active and keys are being handled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.focus_trap.is_active()
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsLog {
        &self.diagnostics
    }

    /// Handle a lifecycle event from the viewer.
    pub fn handle<V: Viewer>(&mut self, event: LifecycleEvent, viewer: &V, document: &mut D) -> Effect {
        match event {
            LifecycleEvent::Bind { container } => {
                let effect = self.focus_trap.handle(
                    focus_trap::Message::Bind {
                        container,
                        restore_target: self.options.restore_focus_to.clone(),
                    },
                    document,
                );
                let focus_trap::Effect::Activated { listener } = effect else {
                    tracing::debug!("lightbox bind ignored: focus trap already active");
                    self.record_warning(WarningEvent::RedundantBind);
                    return Effect::None;
                };

                self.background.hide(&self.options.background);
                let visibility = visibility::sync(&viewer.slide_holders());
                tracing::debug!(listener = listener.0, slides = visibility.len(), "lightbox opened");
                self.record(DiagnosticEventKind::Lifecycle {
                    transition: LifecycleTransition::Opened,
                });
                Effect::Opened { visibility }
            }
            LifecycleEvent::Change => {
                if !self.is_active() {
                    return Effect::None;
                }
                let visibility = visibility::sync(&viewer.slide_holders());
                tracing::debug!(visible = ?visibility.visible_holders().collect::<Vec<_>>(), "lightbox slide changed");
                self.record(DiagnosticEventKind::Lifecycle {
                    transition: LifecycleTransition::SlideChanged,
                });
                Effect::SlideChanged { visibility }
            }
            LifecycleEvent::Destroy => {
                let effect = self.focus_trap.handle(focus_trap::Message::Destroy, document);
                let focus_trap::Effect::Deactivated { focus_restored } = effect else {
                    tracing::debug!("lightbox destroy ignored: focus trap not active");
                    self.record_warning(WarningEvent::RedundantDestroy);
                    return Effect::None;
                };

                let stale = self.background.restore();
                if stale > 0 {
                    tracing::warn!(count = stale, "background elements dropped while lightbox was open");
                    self.record_warning(WarningEvent::StaleBackgroundElements { count: stale });
                }
                if !focus_restored && self.options.restore_focus_to.is_set() {
                    tracing::warn!("focus restore target is gone; focus left where the trap released it");
                    self.record_warning(WarningEvent::StaleFocusTarget);
                }
                tracing::debug!(focus_restored, "lightbox closed");
                self.record(DiagnosticEventKind::Lifecycle {
                    transition: LifecycleTransition::Closed,
                });
                Effect::Closed { focus_restored }
            }
        }
    }

    /// Handle a document key-down event.
    ///
    /// The viewer's pre-dispatch hook runs first; the resolved action is then
    /// invoked on the viewer. The returned [`Resolution`] tells the host
    /// whether to suppress the key's default handling. Inert while inactive.
    pub fn on_key_down<V: Viewer>(&mut self, event: KeyEvent, viewer: &mut V) -> Resolution {
        if !self.is_active() {
            return Resolution::NONE;
        }

        let event = if event.handled || viewer.dispatch_key_down(&event) {
            event.mark_handled()
        } else {
            event
        };

        let state = viewer.state();
        let resolution = key_actions::resolve(&event, &state, &viewer.options());

        match resolution.action {
            Some(action) => {
                tracing::debug!(?action, code = event.code.0, "lightbox key action");
                let pan = state.current_slide.map(|slide| slide.pan);
                self.record(DiagnosticEventKind::UserAction {
                    action: user_action(action),
                });
                match action {
                    ResolvedAction::Close => viewer.close(),
                    ResolvedAction::ToggleZoom => viewer.toggle_zoom(),
                    ResolvedAction::Next => viewer.next(),
                    ResolvedAction::Prev => viewer.prev(),
                    ResolvedAction::Pan { axis, delta } => {
                        if let Some(mut pan) = pan {
                            match axis {
                                Axis::X => pan.x += delta,
                                Axis::Y => pan.y += delta,
                            }
                            viewer.pan_to(pan.x, pan.y);
                        }
                    }
                }
            }
            None => tracing::trace!(code = event.code.0, handled = event.handled, "lightbox key ignored"),
        }

        resolution
    }

    fn record(&mut self, kind: DiagnosticEventKind) {
        self.diagnostics.push(DiagnosticEvent::new(kind));
    }

    fn record_warning(&mut self, warning: WarningEvent) {
        self.record(DiagnosticEventKind::Warning { warning });
    }
}

fn user_action(action: ResolvedAction) -> UserAction {
    match action {
        ResolvedAction::Close => UserAction::Close,
        ResolvedAction::ToggleZoom => UserAction::ToggleZoom,
        ResolvedAction::Next => UserAction::NavigateNext,
        ResolvedAction::Prev => UserAction::NavigatePrevious,
        ResolvedAction::Pan {
            axis: Axis::X,
            delta,
        } => UserAction::Pan { dx: delta, dy: 0.0 },
        ResolvedAction::Pan {
            axis: Axis::Y,
            delta,
        } => UserAction::Pan { dx: 0.0, dy: delta },
    }
}
