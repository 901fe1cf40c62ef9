// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one owns a `State`, reacts to a `Message` in `handle()`, and reports an
//! `Effect` back to its parent.
//!
//! - [`lightbox`] - Keyboard, focus-trap and accessibility controller of the
//!   full-screen lightbox

pub mod lightbox;
