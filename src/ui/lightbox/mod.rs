// SPDX-License-Identifier: MPL-2.0
//! Full-screen lightbox input and accessibility controller.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator, driven by lifecycle events)
//!     ├── key_actions  - Key event → viewer action (pure)
//!     ├── focus_trap   - Inactive/Active focus containment + focus restore
//!     └── visibility   - Assistive-tech markers for slides and background
//! host.rs           - Traits implemented by the host viewer and document
//! subscription.rs   - Iced keyboard events → KeyEvent
//! ```

pub mod component;
pub mod host;
pub mod subcomponents;
pub mod subscription;

pub use component::{Effect, LifecycleEvent, Lightbox, OpenOptions};
pub use host::{
    AssistiveNode, Document, FocusTrap, Focusable, ListenerId, SlideHolder, SlideState, Viewer,
    ViewerState,
};
pub use subcomponents::focus_trap::{FocusRestoreTarget, InitialFocus, TrapOptions};
pub use subcomponents::key_actions::{
    resolve, Axis, KeyCode, KeyEvent, KeyboardOptions, Resolution, ResolvedAction,
};
pub use subcomponents::visibility::SlideVisibilityMap;
