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
#![warn(missing_docs)]
//! `flowui` is an immediate-mode GUI core. Every frame the application describes its
//! interface through widget calls; the crate lays the widgets out with a flex-like
//! layout stack, routes input to the rectangles it computed, keeps per-widget state
//! keyed by stable identifiers and emits a backend neutral [`DrawList`].
//!
//! Rendering backends, windowing adapters and font rasterizers are collaborators that
//! plug in through the [`Renderer`] and [`Font`] traits and the [`InputSnapshot`] type.

mod animation;
mod context;
mod draw_list;
mod font;
mod idmngr;
mod input;
mod layout;
mod options;
mod registry;
mod renderer;
mod scope;
mod scrollbar;
mod state;
mod widgets;

#[cfg(test)]
mod testing;

pub use animation::*;
pub use context::{Context, ControlState, FrameError};
pub use draw_list::*;
pub use font::*;
pub use idmngr::IdManager;
pub use input::*;
pub use layout::{Align, Direction};
pub use options::*;
pub use registry::*;
pub use renderer::*;
pub use scope::Scope;
pub use state::StateStore;
pub use widgets::*;

pub use rs_math3d::{Color4b, Dimensioni, Recti, Vec2f, Vec2i, color4b};

use bitflags::*;

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, Debug)]
/// Stable widget identifier.
///
/// Identifiers are derived by hashing a label into the identifier of the enclosing
/// scope, so the same call path produces the same value every frame.
pub struct Id(u64);

impl Id {
    /// Identifier of the root scope. Labels hashed directly under the root produce
    /// the same value as [`Id::from_str`].
    pub const ROOT: Id = Id(FNV_OFFSET_BASIS);

    /// Creates an ID from a caller-supplied numeric value.
    pub const fn new(value: u64) -> Self { Self(value) }

    /// Creates a stable ID from a string label using FNV-1a hashing.
    pub fn from_str(label: &str) -> Self { Self::ROOT.child(label) }

    /// Hashes `label` into this identifier, producing the identifier of a child.
    pub fn child(self, label: &str) -> Self { Self(fnv_extend(self.0, label.as_bytes())) }

    /// Hashes a numeric discriminator into this identifier (row indices, occurrence counters).
    pub fn child_index(self, index: u32) -> Self { Self(fnv_extend(self.0, &index.to_le_bytes())) }

    /// Returns the raw numeric value wrapped by this ID.
    pub fn raw(self) -> u64 { self.0 }
}

fn fnv_extend(mut hash: u64, bytes: &[u8]) -> u64 {
    for byte in bytes {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, Debug)]
/// Opaque handle to a texture owned by the rendering backend. `0` means untextured.
pub struct TextureId(u32);

impl TextureId {
    /// Handle used by untextured geometry.
    pub const NONE: TextureId = TextureId(0);

    /// Wraps a backend texture handle.
    pub const fn new(raw: u32) -> Self { Self(raw) }

    /// Returns the raw backend handle.
    pub fn raw(self) -> u32 { self.0 }

    /// Returns `true` for the untextured handle.
    pub fn is_none(self) -> bool { self.0 == 0 }
}

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[repr(u32)]
/// Identifiers for each of the built-in style colors.
pub enum ControlColor {
    /// Default text color.
    Text = 0,
    /// Outline/border color.
    Border = 1,
    /// Floating panel background color.
    WindowBG = 2,
    /// Panel title background color.
    TitleBG = 3,
    /// Panel title text color.
    TitleText = 4,
    /// Background of scroll areas and tables.
    PanelBG = 5,
    /// Default button color.
    Button = 6,
    /// Button color while the pointer hovers the widget.
    ButtonHover = 7,
    /// Button color while the widget is focused.
    ButtonFocus = 8,
    /// Default base color of input widgets.
    Base = 9,
    /// Base color while the pointer hovers the widget.
    BaseHover = 10,
    /// Base color for focused widgets.
    BaseFocus = 11,
    /// Base frame of scrollbars.
    ScrollBase = 12,
    /// Thumb of scrollbars.
    ScrollThumb = 13,
    /// Selected rows and selected text.
    Selection = 14,
    /// Number of color entries in [`Style::colors`].
    Max = 15,
}

impl ControlColor {
    /// Promotes the enum to the hover variant when relevant.
    pub fn hover(&mut self) {
        *self = match self {
            Self::Base => Self::BaseHover,
            Self::Button => Self::ButtonHover,
            _ => *self,
        }
    }

    /// Promotes the enum to the focused variant when relevant.
    pub fn focus(&mut self) {
        *self = match self {
            Self::Base | Self::BaseHover => Self::BaseFocus,
            Self::Button | Self::ButtonHover => Self::ButtonFocus,
            _ => *self,
        }
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// State bits returned by widgets to describe their interaction outcome.
    pub struct ResourceState : u32 {
        /// Indicates that the widget's data changed.
        const CHANGE = 4;
        /// Indicates that the widget was submitted (e.g. button clicked).
        const SUBMIT = 2;
        /// Indicates that the widget is currently active.
        const ACTIVE = 1;
        /// Indicates no interaction.
        const NONE = 0;
    }
}

impl ResourceState {
    /// Returns `true` if the widget changed its bound value.
    pub fn is_changed(&self) -> bool { self.intersects(Self::CHANGE) }
    /// Returns `true` if the widget signaled submission.
    pub fn is_submitted(&self) -> bool { self.intersects(Self::SUBMIT) }
    /// Returns `true` if the widget is active.
    pub fn is_active(&self) -> bool { self.intersects(Self::ACTIVE) }
    /// Returns `true` if the state contains no flags.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
}

#[derive(Default, Copy, Clone, Eq, PartialEq, Debug)]
#[repr(C)]
/// Simple RGBA color stored with 8-bit components.
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Returns the color with its alpha scaled by `factor` (clamped to `[0, 1]`).
    pub fn fade(self, factor: f32) -> Self {
        let factor = if factor.is_finite() { factor.clamp(0.0, 1.0) } else { 0.0 };
        Self { a: (self.a as f32 * factor).round() as u8, ..self }
    }

    /// Converts to the packed vertex color.
    pub fn to_color4b(self) -> Color4b { color4b(self.r, self.g, self.b, self.a) }
}

#[derive(Copy, Clone)]
/// Visual and metric configuration shared by every widget.
pub struct Style {
    /// Default width of items whose width is not driven by the layout.
    pub default_cell_width: i32,
    /// Inner padding applied inside widgets.
    pub padding: i32,
    /// Default gap between items of a layout.
    pub spacing: i32,
    /// Height of panel title bars.
    pub title_height: i32,
    /// Width of scrollbars.
    pub scrollbar_size: i32,
    /// Minimum scrollbar thumb length.
    pub thumb_size: i32,
    /// Pixels scrolled per wheel notch.
    pub scroll_step: i32,
    /// Rate constant of [`Smooth`] animations, per second.
    pub smoothing_rate: f32,
    /// Pixels of a floating panel that must stay on screen.
    pub min_visible: i32,
    /// Distance within which panels snap to the screen edges.
    pub snap_margin: i32,
    /// Palette indexed by [`ControlColor`].
    pub colors: [Color; ControlColor::Max as usize],
}

impl Style {
    /// Returns the palette entry for `color`.
    pub fn color(&self, color: ControlColor) -> Color { self.colors[color as usize] }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            default_cell_width: 68,
            padding: 5,
            spacing: 4,
            title_height: 24,
            scrollbar_size: 12,
            thumb_size: 8,
            scroll_step: 30,
            smoothing_rate: DEFAULT_RATE,
            min_visible: 50,
            snap_margin: 16,
            colors: [
                Color { r: 230, g: 230, b: 230, a: 255 },
                Color { r: 25, g: 25, b: 25, a: 255 },
                Color { r: 50, g: 50, b: 50, a: 255 },
                Color { r: 25, g: 25, b: 25, a: 255 },
                Color { r: 240, g: 240, b: 240, a: 255 },
                Color { r: 0, g: 0, b: 0, a: 0 },
                Color { r: 75, g: 75, b: 75, a: 255 },
                Color { r: 95, g: 95, b: 95, a: 255 },
                Color { r: 115, g: 115, b: 115, a: 255 },
                Color { r: 30, g: 30, b: 30, a: 255 },
                Color { r: 35, g: 35, b: 35, a: 255 },
                Color { r: 40, g: 40, b: 40, a: 255 },
                Color { r: 43, g: 43, b: 43, a: 255 },
                Color { r: 30, g: 30, b: 30, a: 255 },
                Color { r: 60, g: 90, b: 140, a: 255 },
            ],
        }
    }
}

/// Convenience constructor for [`Vec2i`].
pub fn vec2(x: i32, y: i32) -> Vec2i { Vec2i { x, y } }

/// Convenience constructor for [`Recti`].
pub fn rect(x: i32, y: i32, w: i32, h: i32) -> Recti { Recti { x, y, width: w, height: h } }

/// Convenience constructor for [`Color`].
pub fn color(r: u8, g: u8, b: u8, a: u8) -> Color { Color { r, g, b, a } }

/// Expands (or shrinks) a rectangle uniformly on all sides.
pub fn expand_rect(r: Recti, n: i32) -> Recti { rect(r.x - n, r.y - n, r.width + n * 2, r.height + n * 2) }

/// Returns `true` when `r` covers no pixels.
pub fn is_empty_rect(r: &Recti) -> bool { r.width <= 0 || r.height <= 0 }

/// Returns `true` when `p` lies inside `r` (right and bottom edges excluded).
pub fn rect_contains(r: &Recti, p: Vec2i) -> bool { p.x >= r.x && p.x < r.x + r.width && p.y >= r.y && p.y < r.y + r.height }

/// Intersection of two rectangles; disjoint rectangles yield an empty rectangle at `a`'s origin.
pub fn intersect_rect(a: &Recti, b: &Recti) -> Recti {
    let x0 = a.x.max(b.x);
    let y0 = a.y.max(b.y);
    let x1 = (a.x + a.width).min(b.x + b.width);
    let y1 = (a.y + a.height).min(b.y + b.height);
    if x1 <= x0 || y1 <= y0 {
        return rect(a.x, a.y, 0, 0);
    }
    rect(x0, y0, x1 - x0, y1 - y0)
}

/// Returns `true` when both rectangles have the same origin and extent.
pub fn same_rect(a: &Recti, b: &Recti) -> bool { a.x == b.x && a.y == b.y && a.width == b.width && a.height == b.height }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_ids_depend_on_the_parent() {
        let a = Id::from_str("panel").child("ok");
        let b = Id::from_str("dialog").child("ok");
        assert_ne!(a, b);
        assert_eq!(Id::ROOT.child("panel"), Id::from_str("panel"));
    }

    #[test]
    fn intersect_rect_handles_disjoint_inputs() {
        let r = intersect_rect(&rect(0, 0, 10, 10), &rect(5, 5, 10, 10));
        assert!(same_rect(&r, &rect(5, 5, 5, 5)));
        assert!(is_empty_rect(&intersect_rect(&rect(0, 0, 10, 10), &rect(20, 20, 5, 5))));
    }

    #[test]
    fn fade_scales_alpha() {
        let c = color(10, 20, 30, 200);
        assert_eq!(c.fade(0.5).a, 100);
        assert_eq!(c.fade(2.0).a, 200);
        assert_eq!(c.fade(f32::NAN).a, 0);
    }
}
