//! Clickable list builder: rendered lines paired with the actions they trigger.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::text::Line;
use ratzilla::ratatui::widgets::{Paragraph, Wrap};

use crate::input::ClickState;

/// Collects [`Line`]s and remembers which of them are clickable, so click
/// targets follow their line when lines are inserted above them.
///
/// ```ignore
/// let mut cl = ClickableList::new();
/// cl.push(Line::from("Shop"));
/// cl.push_clickable(Line::from(" [1] Auto clicker"), BUY_UPGRADE_BASE);
/// cl.register_targets(area, &mut cs, 1, 1, 0);
/// f.render_widget(Paragraph::new(cl.into_lines()).block(block), area);
/// ```
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)`
    actions: Vec<(u16, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        self.actions.push((self.lines.len() as u16, action_id));
        self.lines.push(line);
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register a row target for every visual row of every clickable line.
    ///
    /// `top_offset`/`bottom_offset` are the border rows around the content.
    /// `inner_width` is the wrap width of a `Wrap { trim: false }` paragraph;
    /// pass `0` when the paragraph does not wrap, so each line is exactly one
    /// row. Wrapped heights come from ratatui's own word wrapper.
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        inner_width: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);

        let mut starts: Vec<u16> = Vec::with_capacity(self.lines.len());
        let mut heights: Vec<u16> = Vec::with_capacity(self.lines.len());
        let mut cumulative: u16 = 0;
        for line in &self.lines {
            starts.push(cumulative);
            let h = visual_height(line, inner_width);
            heights.push(h);
            cumulative += h;
        }

        for &(line_idx, action_id) in &self.actions {
            let li = line_idx as usize;
            for r in 0..heights[li] {
                let row = content_y + starts[li] + r;
                if row >= content_end {
                    break;
                }
                cs.add_row_target(area, row, action_id);
            }
        }
    }
}

/// Rows `line` occupies when wrapped at `width`. Never less than one.
fn visual_height(line: &Line<'_>, width: u16) -> u16 {
    if width == 0 || line.width() <= width as usize {
        return 1;
    }
    Paragraph::new(line.clone())
        .wrap(Wrap { trim: false })
        .line_count(width)
        .max(1) as u16
}
