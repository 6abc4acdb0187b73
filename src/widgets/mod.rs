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
mod basic;
pub(crate) mod centered;
mod dropdown;
mod list;
pub(crate) mod panel;
pub(crate) mod scroll;
mod slider;
pub(crate) mod table;
mod text_edit;
mod text_input;
mod toast;

pub use centered::CenteredState;
pub use dropdown::DropdownState;
pub use list::ListState;
pub use panel::{PanelDrag, PanelState, clamp_panel_position, snap_to_edges, snap_to_grid};
pub use scroll::ScrollState;
pub use slider::SliderState;
pub use table::{ColumnWidth, TableColumn};
pub use text_edit::*;
pub use toast::ToastState;

use crate::{Context, ControlColor, ControlState};

/// Picks the palette entry for a widget background from its interaction state.
fn fill_color(control: &ControlState, base: ControlColor) -> ControlColor {
    let mut color = base;
    if control.focused {
        color.focus();
    } else if control.hovered {
        color.hover();
    }
    color
}

impl Context {
    /// Width of a label-sized widget: the text plus horizontal padding, at least the
    /// style's default cell width.
    pub(crate) fn natural_width(&self, text: &str) -> i32 { (self.text_width(text) + 2 * self.style().padding).max(self.style().default_cell_width) }
}
