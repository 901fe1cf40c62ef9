// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by unit tests.
//!
//! Float assertions come from `approx`; host fakes live next to the code
//! that drives them.

pub use approx::assert_abs_diff_eq;
