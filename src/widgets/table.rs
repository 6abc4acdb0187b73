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
use crate::scope::ScopeEnd;
use crate::*;

/// Width rule of a table column.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ColumnWidth {
    /// Exact width in pixels.
    Fixed(i32),
    /// Share of the width left after fixed columns.
    Weight(f32),
}

/// Column description of a table.
#[derive(Clone, Debug, PartialEq)]
pub struct TableColumn {
    /// Header text.
    pub header: String,
    /// Width rule.
    pub width: ColumnWidth,
}

impl TableColumn {
    /// Column of exactly `width` pixels.
    pub fn fixed(header: &str, width: i32) -> Self { Self { header: header.to_string(), width: ColumnWidth::Fixed(width) } }

    /// Column taking `weight` shares of the flexible width.
    pub fn weighted(header: &str, weight: f32) -> Self { Self { header: header.to_string(), width: ColumnWidth::Weight(weight) } }
}

/// Column widths of the open table and the row/cell cursor.
pub(crate) struct TableLayout {
    widths: Vec<i32>,
    row: usize,
    cell: usize,
}

pub(crate) struct RowFrame {
    mark: DrawMark,
    odd: bool,
}

/// Splits `total` between the columns. Fixed columns get their width, the rest is
/// shared by weight; the last weighted column absorbs rounding.
fn resolve_widths(columns: &[TableColumn], total: i32) -> Vec<i32> {
    let fixed: i32 = columns.iter().map(|c| if let ColumnWidth::Fixed(w) = c.width { w.max(0) } else { 0 }).sum();
    let weights: f32 = columns.iter().map(|c| if let ColumnWidth::Weight(w) = c.width { w.max(0.0) } else { 0.0 }).sum();
    let flexible = (total - fixed).max(0);
    let last_weighted = columns.iter().rposition(|c| matches!(c.width, ColumnWidth::Weight(_)));

    let mut given = 0;
    let mut widths = Vec::with_capacity(columns.len());
    for (i, column) in columns.iter().enumerate() {
        let w = match column.width {
            ColumnWidth::Fixed(w) => w.max(0),
            ColumnWidth::Weight(_) if Some(i) == last_weighted => flexible - given,
            ColumnWidth::Weight(w) if weights > 0.0 => {
                let share = (flexible as f32 * w.max(0.0) / weights).floor() as i32;
                given += share;
                share
            }
            ColumnWidth::Weight(_) => 0,
        };
        widths.push(w);
    }
    widths
}

impl Context {
    /// Opens a table with a header row. Rows are opened with
    /// [`Context::begin_table_row`] and cells with [`Context::begin_table_cell`].
    pub fn begin_table(&mut self, label: &str, columns: &[TableColumn], opts: &Options) -> Scope<'_> {
        self.push_id(label);
        self.push_layout(Direction::Vertical, &opts.clone_layout().with(&opt::GAP, Some(0)));
        let widths = resolve_widths(columns, self.remaining().x);

        let height = self.widget_height();
        let header = self.allocate(vec2(widths.iter().sum(), height));
        self.draw_frame(header, ControlColor::TitleBG);
        let mut x = header.x;
        for (column, w) in columns.iter().zip(&widths) {
            self.draw_control_text(&column.header, rect(x, header.y, *w, height), ControlColor::TitleText, Align::Start);
            x += w;
        }

        self.tables.push(TableLayout { widths, row: 0, cell: 0 });
        Scope::new(self, ScopeEnd::Table)
    }

    /// Opens the next row of the innermost table. Odd rows get a background band.
    pub fn begin_table_row(&mut self) -> Scope<'_> {
        let row = match self.tables.last_mut() {
            Some(table) => {
                table.cell = 0;
                table.row
            }
            None => {
                log::error!("begin_table_row called outside of a table");
                0
            }
        };
        self.ids.push_id(self.ids.current_scope().child_index(row as u32));
        let mark = self.draw_list_mut().mark();
        self.push_layout(Direction::Horizontal, &Options::new().with(&opt::GAP, Some(0)));
        Scope::new(self, ScopeEnd::TableRow(RowFrame { mark, odd: row % 2 == 1 }))
    }

    /// Opens the next cell of the current row as a vertical layout of the column width.
    pub fn begin_table_cell(&mut self) -> Scope<'_> {
        let width = match self.tables.last_mut() {
            Some(table) => {
                let width = table.widths.get(table.cell).copied();
                table.cell += 1;
                width
            }
            None => None,
        };
        if width.is_none() {
            log::warn!("table cell without a matching column, using the remaining width");
        }
        let width = width.unwrap_or_else(|| self.remaining().x);
        let pad = self.vertical_pad();
        self.push_layout(Direction::Vertical, &Options::new().with(&opt::WIDTH, Some(width)).with(&opt::PADDING, Some(pad)));
        Scope::new(self, ScopeEnd::Layout)
    }

    /// Runs `f` inside a table. Returns the table bounds.
    pub fn table<F: FnOnce(&mut Context)>(&mut self, label: &str, columns: &[TableColumn], opts: &Options, f: F) -> Recti {
        let mut scope = self.begin_table(label, columns, opts);
        f(&mut scope);
        scope.end()
    }

    /// Runs `f` inside a table row. Returns the row bounds.
    pub fn table_row<F: FnOnce(&mut Context)>(&mut self, f: F) -> Recti {
        let mut scope = self.begin_table_row();
        f(&mut scope);
        scope.end()
    }

    /// Runs `f` inside the next table cell. Returns the cell bounds.
    pub fn table_cell<F: FnOnce(&mut Context)>(&mut self, f: F) -> Recti {
        let mut scope = self.begin_table_cell();
        f(&mut scope);
        scope.end()
    }
}

impl Options {
    /// Copy of the layout related options (padding, alignment and width).
    fn clone_layout(&self) -> Options {
        Options::new()
            .with(&opt::PADDING, self.get(&opt::PADDING))
            .with(&opt::ALIGN, self.get(&opt::ALIGN))
            .with(&opt::WIDTH, self.get(&opt::WIDTH))
    }
}

pub(crate) fn end_table(ctx: &mut Context) -> Recti {
    ctx.tables.pop();
    let bounds = ctx.pop_layout();
    ctx.pop_id();
    bounds
}

pub(crate) fn end_table_row(ctx: &mut Context, frame: RowFrame) -> Recti {
    let bounds = ctx.pop_layout();
    if frame.odd {
        let band = ctx.style().color(ControlColor::Base);
        ctx.draw_list_mut().insert_rect_at(frame.mark, bounds, band);
    }
    if let Some(table) = ctx.tables.last_mut() {
        table.row += 1;
    }
    ctx.pop_id();
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::run;

    fn columns() -> Vec<TableColumn> { vec![TableColumn::fixed("Id", 100), TableColumn::weighted("Name", 1.0), TableColumn::weighted("Path", 3.0)] }

    #[test]
    fn widths_split_fixed_then_weighted() {
        assert_eq!(resolve_widths(&columns(), 500), vec![100, 100, 300]);
        assert_eq!(resolve_widths(&columns(), 50), vec![100, 0, 0]);
        let thirds = [TableColumn::weighted("a", 1.0), TableColumn::weighted("b", 1.0), TableColumn::weighted("c", 1.0)];
        assert_eq!(resolve_widths(&thirds, 100), vec![33, 33, 34]);
    }

    #[test]
    fn cells_follow_the_columns() {
        let mut ctx = Context::new();
        let opts = Options::new().with(&opt::WIDTH, Some(400));
        let header = ctx.widget_height();
        run(&mut ctx, InputSnapshot::default(), |ctx| {
            let mut cells = Vec::new();
            let bounds = ctx.table("files", &columns(), &opts, |ui| {
                for _ in 0..2 {
                    ui.table_row(|ui| {
                        for _ in 0..3 {
                            cells.push(ui.table_cell(|ui| {
                                ui.allocate(vec2(10, 20));
                            }));
                        }
                    });
                }
            });
            let row_height = 20 + 2 * ctx.vertical_pad();
            assert_eq!(cells[1].x, 100);
            assert_eq!(cells[2].x, 175);
            assert_eq!(cells[2].width, 225);
            assert_eq!(cells[3].y, header + row_height);
            assert_eq!(bounds.height, header + 2 * row_height);
            assert_eq!(ctx.layout_depth(), 0);
        });
    }

    #[test]
    fn odd_rows_get_a_band_behind_their_content() {
        let mut ctx = Context::new();
        let opts = Options::new().with(&opt::WIDTH, Some(200));
        let mut rows = Vec::new();
        let mut marker = Recti::default();
        ctx.begin(InputSnapshot::default(), crate::testing::display(), 0.016);
        ctx.table("t", &[TableColumn::weighted("a", 1.0)], &opts, |ui| {
            for i in 0..2 {
                rows.push(ui.table_row(|ui| {
                    ui.table_cell(|ui| {
                        let r = ui.allocate(vec2(10, 10));
                        ui.draw_rect(r, color(1, 2, 3, 255));
                        if i == 1 {
                            marker = r;
                        }
                    });
                }));
            }
        });
        let list = ctx.end().unwrap();
        let at = |x: i32, y: i32| list.vertices().iter().position(|v| v.position().x == x as f32 && v.position().y == y as f32);
        let band = at(rows[1].x, rows[1].y).unwrap();
        let content = at(marker.x, marker.y).unwrap();
        assert!(band < content);
    }
}
