// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`ui`]: UI value objects ([`PanStep`](ui::newtypes::PanStep))

pub mod diagnostics;
pub mod ui;
