//! Input normalisation: keyboard keys and pointer taps become `InputEvent`s.
//!
//! Render code registers rectangular click targets each frame; the pointer
//! handler converts DOM pixels to terminal cells and hit-tests them here.

use ratzilla::ratatui::layout::Rect;

/// All input events, normalised from keyboard, mouse and touch.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key(char),
    /// A tap on a registered target, identified by its action ID.
    Click(u16),
}

#[derive(Debug, Clone)]
pub struct ClickTarget {
    /// Hit region in terminal cell coordinates.
    pub rect: Rect,
    pub action_id: u16,
}

/// Shared between the draw loop (which registers targets) and the pointer
/// handler (which resolves them).
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Register a full-width, one-row target at `row` if it lies inside `area`.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.targets.push(ClickTarget {
                rect: Rect::new(area.x, row, area.width, 1),
                action_id,
            });
        }
    }

    /// Hit-test a cell. When targets overlap the last registered one wins,
    /// matching draw order.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            if col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height {
                Some(t.action_id)
            } else {
                None
            }
        })
    }
}

/// Cell rect of a span inside a centre-aligned single line.
///
/// `inner` is the text area (inside any borders), `line_width` the whole
/// line's display width, `span_offset`/`span_width` the span's position within
/// the line. Centre offset follows ratatui's `Alignment::Center`. One column
/// of slack is added on each side for touch input, clipped to `inner`.
pub fn centered_span_rect(inner: Rect, line_width: u16, span_offset: u16, span_width: u16) -> Rect {
    let line_x = inner.x + (inner.width / 2).saturating_sub(line_width / 2);
    let left = (line_x + span_offset).saturating_sub(1).max(inner.x);
    let right = (line_x + span_offset + span_width + 1).min(inner.x + inner.width);
    Rect::new(left, inner.y, right.saturating_sub(left), inner.height.min(1))
}

/// Screens narrower than this stack the panels vertically.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 60
}

/// Convert a pixel Y offset (relative to the grid's top edge) to a row.
/// `None` when outside the grid or when the grid has no size yet.
pub fn pixel_y_to_row(click_y: f64, grid_height: f64, terminal_rows: u16) -> Option<u16> {
    pixel_to_cell(click_y, grid_height, terminal_rows)
}

/// Convert a pixel X offset (relative to the grid's left edge) to a column.
pub fn pixel_x_to_col(click_x: f64, grid_width: f64, terminal_cols: u16) -> Option<u16> {
    pixel_to_cell(click_x, grid_width, terminal_cols)
}

fn pixel_to_cell(offset: f64, extent: f64, cells: u16) -> Option<u16> {
    if extent <= 0.0 || cells == 0 || offset < 0.0 {
        return None;
    }
    let cell = (offset / (extent / cells as f64)) as u16;
    if cell >= cells {
        None
    } else {
        Some(cell)
    }
}
