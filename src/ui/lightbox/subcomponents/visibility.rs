// SPDX-License-Identifier: MPL-2.0
//! Assistive-technology visibility.
//!
//! Only the active slide holder is exposed to screen readers; every other
//! mounted holder is marked hidden. While the lightbox is open the host page
//! behind it (page root, route announcer, ...) is hidden as well.

use crate::ui::lightbox::host::{AssistiveNode, SlideHolder};
use std::rc::Weak;

/// Marker assigned to one slide holder during a sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideVisibility {
    /// Position of the holder in the viewer's holder list.
    pub holder: usize,
    pub hidden: bool,
}

/// Markers assigned by one [`sync`] call. Derived, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideVisibilityMap {
    entries: Vec<SlideVisibility>,
}

impl SlideVisibilityMap {
    pub fn iter(&self) -> impl Iterator<Item = &SlideVisibility> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Holders left visible to assistive technology.
    pub fn visible_holders(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries
            .iter()
            .filter(|entry| !entry.hidden)
            .map(|entry| entry.holder)
    }

    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.hidden).count()
    }
}

/// Exposes the active slide holder and hides all others.
pub fn sync(holders: &[&dyn SlideHolder]) -> SlideVisibilityMap {
    let entries = holders
        .iter()
        .enumerate()
        .map(|(index, holder)| {
            let hidden = !holder.is_active();
            holder.set_assistive_hidden(hidden);
            SlideVisibility {
                holder: index,
                hidden,
            }
        })
        .collect();
    SlideVisibilityMap { entries }
}

/// Background elements hidden while the lightbox is open.
#[derive(Default)]
pub struct BackgroundInertness {
    hidden: Vec<Weak<dyn AssistiveNode>>,
}

impl BackgroundInertness {
    /// Hides `elements`. Elements already dropped are skipped.
    pub fn hide(&mut self, elements: &[Weak<dyn AssistiveNode>]) {
        for weak in elements {
            if let Some(element) = weak.upgrade() {
                element.set_assistive_hidden(true);
                self.hidden.push(weak.clone());
            }
        }
    }

    /// Removes the marker from every element hidden by [`hide`](Self::hide).
    ///
    /// Returns how many elements had been dropped in the meantime.
    pub fn restore(&mut self) -> usize {
        let mut stale = 0;
        for weak in self.hidden.drain(..) {
            match weak.upgrade() {
                Some(element) => element.set_assistive_hidden(false),
                None => stale += 1,
            }
        }
        stale
    }

    #[must_use]
    pub fn is_hiding(&self) -> bool {
        !self.hidden.is_empty()
    }
}
