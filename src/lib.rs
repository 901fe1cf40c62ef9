// SPDX-License-Identifier: MPL-2.0
//! `lightbox_a11y` is the input and accessibility controller of a full-screen
//! media lightbox.
//!
//! It turns raw keyboard events into viewer actions, keeps keyboard focus
//! inside the overlay while it is open, gives focus back to the element that
//! opened it, and keeps assistive-technology visibility in sync with the
//! active slide.
//!
//! The host viewer, document and elements are reached through the traits in
//! [`ui::lightbox::host`]; [`ui::lightbox::Lightbox`] is the entry point.

#![doc(html_root_url = "https://docs.rs/lightbox_a11y/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
