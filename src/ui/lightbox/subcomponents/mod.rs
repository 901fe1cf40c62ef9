// SPDX-License-Identifier: MPL-2.0
//! Nested sub-components of the lightbox controller.
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── key_actions - KeyActionMapping + resolve()
//!     ├── focus_trap  - FocusTrapController state machine
//!     └── visibility  - Slide and background assistive-tech markers
//! ```

pub mod focus_trap;
pub mod key_actions;
pub mod visibility;
