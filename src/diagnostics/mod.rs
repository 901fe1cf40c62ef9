// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for lightbox activity.
//!
//! Lifecycle transitions, keyboard-triggered actions and recovered warnings
//! are kept in a memory-bounded ring buffer so a host can inspect what the
//! lightbox did when something went wrong.
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped lightbox event
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds

mod buffer;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, LifecycleTransition, UserAction, WarningEvent,
};

/// Bounded log of lightbox diagnostic events.
pub type DiagnosticsLog = CircularBuffer<DiagnosticEvent>;
