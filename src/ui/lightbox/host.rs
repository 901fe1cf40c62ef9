// SPDX-License-Identifier: MPL-2.0
//! Host collaborator traits.
//!
//! The lightbox never touches a real document or renderer. The host viewer,
//! its document and its elements are reached only through these traits.
//! Elements are shared handles, so their methods take `&self`.

use super::subcomponents::focus_trap::TrapOptions;
use super::subcomponents::key_actions::{KeyEvent, KeyboardOptions};
use iced::Vector;
use std::rc::Rc;

/// An element that can receive keyboard focus.
pub trait Focusable {
    /// Moves keyboard focus to this element.
    fn focus(&self);

    /// Whether the element is still attached to the document.
    fn is_connected(&self) -> bool;
}

/// An element carrying an assistive-technology "hidden" marker.
pub trait AssistiveNode {
    /// Sets (`true`) or clears (`false`) the hidden marker.
    fn set_assistive_hidden(&self, hidden: bool);
}

/// The container element of one gallery item.
pub trait SlideHolder: AssistiveNode {
    /// Whether the slide held by this container is the active one.
    fn is_active(&self) -> bool;
}

/// A focus trap created by the [`Document`].
pub trait FocusTrap {
    /// Starts containing focus within the trap's container.
    fn activate(&mut self);

    /// Releases focus containment.
    fn deactivate(&mut self);
}

/// Identifier of a registered document-level key listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Document-level services used while the lightbox is open.
pub trait Document {
    /// Concrete trap type produced by this document.
    type Trap: FocusTrap;

    /// Builds a focus trap scoped to `container`. The trap is not active yet.
    fn create_focus_trap(&mut self, container: Rc<dyn Focusable>, options: TrapOptions)
        -> Self::Trap;

    /// Registers the lightbox key listener on the document.
    fn add_key_listener(&mut self) -> ListenerId;

    /// Unregisters a listener returned by [`Document::add_key_listener`].
    fn remove_key_listener(&mut self, id: ListenerId);
}

/// Zoom and pan of the current slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideState {
    /// Current zoom factor.
    pub zoom_level: f32,
    /// Zoom factor at which the slide exactly fits the viewport.
    pub fit_zoom_level: f32,
    /// Current pan offset.
    pub pan: Vector,
}

impl SlideState {
    /// Whether the slide is zoomed in past its fit level and can be panned.
    #[must_use]
    pub fn is_zoomed_beyond_fit(&self) -> bool {
        self.zoom_level > self.fit_zoom_level
    }
}

/// Read-only snapshot of the viewer, taken for each key event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewerState {
    /// The current slide, if one is loaded.
    pub current_slide: Option<SlideState>,
    /// Total number of gallery items.
    pub item_count: usize,
}

/// The lightbox viewer, as seen by the controller.
pub trait Viewer {
    /// Pre-dispatch hook: offers the key event to externally registered
    /// listeners. Returns `true` if one of them handled it.
    fn dispatch_key_down(&mut self, event: &KeyEvent) -> bool;

    /// Current zoom/pan and item count.
    fn state(&self) -> ViewerState;

    /// Keyboard configuration flags.
    fn options(&self) -> KeyboardOptions;

    /// Currently mounted slide holders.
    fn slide_holders(&self) -> Vec<&dyn SlideHolder>;

    fn close(&mut self);

    fn toggle_zoom(&mut self);

    fn next(&mut self);

    fn prev(&mut self);

    fn pan_to(&mut self, x: f32, y: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoomed_beyond_fit_requires_strictly_greater_zoom() {
        let mut slide = SlideState {
            zoom_level: 1.0,
            fit_zoom_level: 1.0,
            pan: Vector::new(0.0, 0.0),
        };
        assert!(!slide.is_zoomed_beyond_fit());

        slide.zoom_level = 2.0;
        assert!(slide.is_zoomed_beyond_fit());

        slide.zoom_level = 0.5;
        assert!(!slide.is_zoomed_beyond_fit());
    }

    #[test]
    fn default_viewer_state_is_empty() {
        let state = ViewerState::default();
        assert!(state.current_slide.is_none());
        assert_eq!(state.item_count, 0);
    }
}
