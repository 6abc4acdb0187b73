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
use crate::{Direction, Recti, Vec2i};

/// Track and thumb of one scrollbar.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ScrollbarGeometry {
    pub track: Recti,
    pub thumb: Recti,
}

fn axis_len(axis: Direction, r: &Recti) -> i32 {
    match axis {
        Direction::Vertical => r.height,
        Direction::Horizontal => r.width,
    }
}

/// Track rectangle placed along the far edge of `visible`, inside it.
pub(crate) fn scrollbar_track(axis: Direction, visible: Recti, scrollbar_size: i32) -> Recti {
    let mut track = visible;
    match axis {
        Direction::Vertical => {
            track.x = visible.x + visible.width - scrollbar_size;
            track.width = scrollbar_size;
        }
        Direction::Horizontal => {
            track.y = visible.y + visible.height - scrollbar_size;
            track.height = scrollbar_size;
        }
    }
    track
}

pub(crate) fn max_scroll(content_len: i32, view_len: i32) -> i32 { (content_len - view_len).max(0) }

/// Converts a pointer movement along the track into a scroll movement so the thumb
/// stays under the pointer.
pub(crate) fn drag_to_scroll(axis: Direction, delta: Vec2i, geometry: &ScrollbarGeometry, content_len: i32, view_len: i32) -> f32 {
    let travel = axis_len(axis, &geometry.track) - axis_len(axis, &geometry.thumb);
    if travel <= 0 {
        return 0.0;
    }
    let axis_delta = match axis {
        Direction::Vertical => delta.y,
        Direction::Horizontal => delta.x,
    };
    axis_delta as f32 * max_scroll(content_len, view_len) as f32 / travel as f32
}

/// Thumb length is `track * view / content`, at least `thumb_size`; its offset along the
/// track is proportional to `scroll / max_scroll`.
pub(crate) fn scrollbar_geometry(axis: Direction, track: Recti, view_len: i32, content_len: i32, scroll: f32, thumb_size: i32) -> ScrollbarGeometry {
    let mut thumb = track;
    let track_len = axis_len(axis, &track);
    if track_len <= 0 || content_len <= 0 || view_len <= 0 {
        return ScrollbarGeometry { track, thumb };
    }

    let thumb_len = (track_len as i64 * view_len as i64 / content_len as i64) as i32;
    let thumb_len = thumb_len.max(thumb_size).min(track_len);
    let max = max_scroll(content_len, view_len);
    let offset = if max > 0 {
        let t = (scroll / max as f32).clamp(0.0, 1.0);
        ((track_len - thumb_len) as f32 * t).round() as i32
    } else {
        0
    };

    match axis {
        Direction::Vertical => {
            thumb.height = thumb_len;
            thumb.y += offset;
        }
        Direction::Horizontal => {
            thumb.width = thumb_len;
            thumb.x += offset;
        }
    }
    ScrollbarGeometry { track, thumb }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rect, vec2};

    #[test]
    fn thumb_scales_with_visible_fraction() {
        let track = scrollbar_track(Direction::Vertical, rect(0, 0, 100, 200), 10);
        assert_eq!((track.x, track.width, track.height), (90, 10, 200));
        let g = scrollbar_geometry(Direction::Vertical, track, 200, 800, 0.0, 8);
        assert_eq!(g.thumb.height, 50);
        assert_eq!(g.thumb.y, 0);
        let g = scrollbar_geometry(Direction::Vertical, track, 200, 800, 600.0, 8);
        assert_eq!(g.thumb.y, 150);
        let g = scrollbar_geometry(Direction::Vertical, track, 200, 800, 300.0, 8);
        assert_eq!(g.thumb.y, 75);
    }

    #[test]
    fn thumb_respects_minimum_size() {
        let track = rect(0, 0, 10, 100);
        let g = scrollbar_geometry(Direction::Vertical, track, 10, 100_000, 0.0, 8);
        assert_eq!(g.thumb.height, 8);
    }

    #[test]
    fn dragging_the_thumb_maps_to_scroll_range() {
        let track = rect(0, 0, 10, 200);
        let g = scrollbar_geometry(Direction::Vertical, track, 200, 800, 0.0, 8);
        let scroll = drag_to_scroll(Direction::Vertical, vec2(0, 150), &g, 800, 200);
        assert_eq!(scroll, 600.0);
        assert_eq!(drag_to_scroll(Direction::Horizontal, vec2(5, 5), &g, 800, 200), 0.0);
    }
}
