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
use crate::*;

/// Persistent state of a list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ListState {
    /// The list takes arrow keys. Set by clicking a row, cleared by clicking elsewhere.
    pub active: bool,
}

fn matches(item: &str, needle: &str) -> bool { needle.is_empty() || item.to_lowercase().contains(needle) }

impl Context {
    /// Scrollable list of `items` with a single selection.
    ///
    /// `opt::SEARCH` filters the rows case-insensitively, `opt::ROW_HEIGHT` overrides
    /// the row height and `opt::HEIGHT` the height of the visible area. Up/down move
    /// the selection once a row has been clicked, scrolling it into view. Returns
    /// [`ResourceState::CHANGE`] when the selection changed.
    pub fn list<S: AsRef<str>>(&mut self, label: &str, items: &[S], selected: &mut Option<usize>, opts: &Options) -> ResourceState {
        let id = self.widget_id(label, opts);
        let scroll_id = id.child("!scroll");
        let mut state = self.store_mut().get(id, ListState::default());
        let before = *selected;

        let needle = opts.get(&opt::SEARCH).unwrap_or_default().to_lowercase();
        let rows: Vec<usize> = (0..items.len()).filter(|&i| matches(items[i].as_ref(), &needle)).collect();
        let row_height = opts.get(&opt::ROW_HEIGHT).unwrap_or_else(|| self.widget_height()).max(1);

        let mut reveal = None;
        if state.active && !rows.is_empty() {
            let current = selected.and_then(|s| rows.iter().position(|&r| r == s));
            let last = rows.len() - 1;
            let next = if self.input().key_pressed(KeyCode::DOWN) {
                Some(current.map_or(0, |p| (p + 1).min(last)))
            } else if self.input().key_pressed(KeyCode::UP) {
                Some(current.map_or(0, |p| p.saturating_sub(1)))
            } else {
                None
            };
            if let Some(pos) = next {
                *selected = Some(rows[pos]);
                reveal = Some(pos);
            }
        }

        let mut scroll_to = None;
        if let Some(pos) = reveal {
            let scroll = self.store().peek::<ScrollState>(scroll_id).copied().unwrap_or_default();
            let (top, view) = (pos as i32 * row_height, scroll.visible.height);
            let offset = scroll.offset.target() as i32;
            if top < offset {
                scroll_to = Some(top as f32);
            } else if top + row_height > offset + view {
                scroll_to = Some((top + row_height - view) as f32);
            }
        }

        let scroll_opts = Options::new()
            .with(&opt::ID, Some(scroll_id))
            .with(&opt::WIDTH, opts.get(&opt::WIDTH))
            .with(&opt::HEIGHT, opts.get(&opt::HEIGHT))
            .with(&opt::GAP, Some(0))
            .with(&opt::SHOW_SCROLLBAR, opts.get(&opt::SHOW_SCROLLBAR))
            .with(&opt::SCROLL_TO, scroll_to);
        let row_opts = Options::new().with(&opt::HEIGHT, Some(row_height));

        let mut clicked = None;
        let mut ui = self.begin_scroll_area(label, &scroll_opts);
        for &index in &rows {
            let text = items[index].as_ref();
            let natural = vec2(ui.natural_width(text), row_height);
            let r = ui.item_rect(&row_opts, natural);
            let row_id = ui.ids.get_id_u32(index as u32);
            let control = ui.update_control(row_id, r, &Options::new(), false);
            if control.clicked {
                clicked = Some(index);
            }
            if *selected == Some(index) {
                let fill = ui.style().color(ControlColor::Selection);
                ui.draw_rect(r, fill);
            } else if control.hovered {
                let fill = ui.style().color(ControlColor::ButtonHover);
                ui.draw_rect(r, fill);
            }
            ui.draw_control_text(text, r, ControlColor::Text, Align::Start);
        }
        let visible = ui.end();

        if let Some(index) = clicked {
            *selected = Some(index);
            state.active = true;
        } else if !self.input().pressed_buttons().is_none() && !rect_contains(&visible, self.input().mouse_pos()) {
            state.active = false;
        }
        self.store_mut().set(id, state);

        if *selected != before { ResourceState::CHANGE } else { ResourceState::NONE }
    }
}
