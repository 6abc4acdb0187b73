//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// Typed key into an [`Options`] map. The key carries its value type statically and
/// the value returned when the option is unset.
pub struct OptionKey<T: 'static> {
    name: &'static str,
    default: T,
}

impl<T: 'static> OptionKey<T> {
    /// Declares a key. Keys are usually `const` items, see [`opt`].
    pub const fn new(name: &'static str, default: T) -> Self { Self { name, default } }

    /// Name the value is stored under.
    pub fn name(&self) -> &'static str { self.name }

    /// Value returned when the option is unset.
    pub fn default_value(&self) -> &T { &self.default }
}

impl<T: 'static> fmt::Debug for OptionKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "OptionKey({})", self.name) }
}

/// Per-call widget options. Reads of unset keys, or of keys stored with a different
/// type, yield the key's default.
#[derive(Default)]
pub struct Options {
    values: HashMap<&'static str, Box<dyn Any>>,
}

impl Options {
    /// Creates an empty option set.
    pub fn new() -> Self { Self::default() }

    /// Builder form of [`Options::set`].
    pub fn with<T: 'static>(mut self, key: &OptionKey<T>, value: T) -> Self {
        self.set(key, value);
        self
    }

    /// Stores `value` under `key`.
    pub fn set<T: 'static>(&mut self, key: &OptionKey<T>, value: T) { self.values.insert(key.name, Box::new(value)); }

    /// Reads `key`, falling back to its default.
    pub fn get<T: Clone + 'static>(&self, key: &OptionKey<T>) -> T {
        self.values.get(key.name).and_then(|v| v.downcast_ref::<T>()).cloned().unwrap_or_else(|| key.default.clone())
    }

    /// Returns `true` when `key` is set with its own type.
    pub fn has<T: 'static>(&self, key: &OptionKey<T>) -> bool { self.values.get(key.name).is_some_and(|v| v.is::<T>()) }

    /// Removes `key`.
    pub fn remove<T: 'static>(&mut self, key: &OptionKey<T>) { self.values.remove(key.name); }

    /// Number of keys set.
    pub fn len(&self) -> usize { self.values.len() }

    /// Returns `true` when no key is set.
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

/// Built-in option keys understood by the layout engine and the widgets.
pub mod opt {
    use super::OptionKey;
    use crate::{Align, Id};

    /// Replaces the identifier derived from the widget label.
    pub const ID: OptionKey<Option<Id>> = OptionKey::new("id", None);
    /// Fixed width of the widget or layout.
    pub const WIDTH: OptionKey<Option<i32>> = OptionKey::new("width", None);
    /// Fixed height of the widget or layout.
    pub const HEIGHT: OptionKey<Option<i32>> = OptionKey::new("height", None);
    /// Draws the widget but ignores input.
    pub const DISABLED: OptionKey<bool> = OptionKey::new("disabled", false);
    /// Requests keyboard focus for the widget.
    pub const FOCUS: OptionKey<bool> = OptionKey::new("focus", false);
    /// Gap between the items of a layout, on either axis.
    pub const GAP: OptionKey<Option<i32>> = OptionKey::new("gap", None);
    /// Gap between the items of a horizontal layout.
    pub const GAP_X: OptionKey<Option<i32>> = OptionKey::new("gap_x", None);
    /// Gap between the items of a vertical layout.
    pub const GAP_Y: OptionKey<Option<i32>> = OptionKey::new("gap_y", None);
    /// Inner padding of a layout.
    pub const PADDING: OptionKey<Option<i32>> = OptionKey::new("padding", None);
    /// Cross-axis alignment of the items of a layout.
    pub const ALIGN: OptionKey<Option<Align>> = OptionKey::new("align", None);
    /// Lower bound of a slider.
    pub const MIN: OptionKey<f32> = OptionKey::new("min", 0.0);
    /// Upper bound of a slider.
    pub const MAX: OptionKey<f32> = OptionKey::new("max", 1.0);
    /// Slider step, `0` for continuous values.
    pub const STEP: OptionKey<f32> = OptionKey::new("step", 0.0);
    /// Shows the scrollbar of a scroll area when the content overflows.
    pub const SHOW_SCROLLBAR: OptionKey<bool> = OptionKey::new("show_scrollbar", true);
    /// Case-insensitive filter applied to list items.
    pub const SEARCH: OptionKey<Option<String>> = OptionKey::new("search", None);
    /// Programmatic scroll target of a scroll area.
    pub const SCROLL_TO: OptionKey<Option<f32>> = OptionKey::new("scroll_to", None);
    /// Keeps a scroll area pinned to the bottom while it is already there.
    pub const STICK_TO_BOTTOM: OptionKey<bool> = OptionKey::new("stick_to_bottom", false);
    /// Grid size panels snap to when released.
    pub const SNAP_GRID: OptionKey<Option<i32>> = OptionKey::new("snap_grid", None);
    /// Snaps released panels to nearby screen edges.
    pub const SNAP_EDGES: OptionKey<bool> = OptionKey::new("snap_edges", false);
    /// Adds a resize grip to panels.
    pub const RESIZABLE: OptionKey<bool> = OptionKey::new("resizable", false);
    /// Title shown instead of the label.
    pub const TITLE: OptionKey<Option<String>> = OptionKey::new("title", None);
    /// Seconds a toast stays visible.
    pub const DURATION: OptionKey<f32> = OptionKey::new("duration", 3.0);
    /// Hint shown by empty text inputs.
    pub const PLACEHOLDER: OptionKey<Option<String>> = OptionKey::new("placeholder", None);
    /// Height of list and table rows.
    pub const ROW_HEIGHT: OptionKey<Option<i32>> = OptionKey::new("row_height", None);
}
