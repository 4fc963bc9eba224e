//! Bar chart of the sequence, colored by position marker.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::sequence::{Bar, MarkerSet};
use crate::tui::theme::Theme;

/// Eighth-block glyphs for the partial top cell of a bar.
const PARTIAL: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];
const FULL: char = '█';

/// Assign each terminal column to a bar index (`None` for gaps).
///
/// Wide slots get a one-column gap between bars. When there are more bars
/// than columns, each column samples the bar under it.
pub fn layout_columns(count: usize, width: u16) -> Vec<Option<usize>> {
    let width = width as usize;
    if count == 0 || width == 0 {
        return vec![None; width];
    }

    let slot = width / count;
    if slot == 0 {
        return (0..width).map(|x| Some(x * count / width)).collect();
    }

    let bar_width = if slot >= 3 { slot - 1 } else { slot };
    (0..width)
        .map(|x| {
            let idx = x / slot;
            if idx >= count || x % slot >= bar_width {
                None
            } else {
                Some(idx)
            }
        })
        .collect()
}

/// Bar height in eighths of a cell. Non-zero heights stay visible.
pub fn height_in_eighths(height: f64, rows: u16) -> usize {
    let eighths = (height.clamp(0.0, 1.0) * rows as f64 * 8.0).round() as usize;
    if height > 0.0 {
        eighths.max(1)
    } else {
        0
    }
}

/// Glyph for the cell `row` rows above the bottom of a bar `eighths` tall.
pub fn glyph_at(eighths: usize, row: usize) -> char {
    let full = eighths / 8;
    if row < full {
        FULL
    } else if row == full {
        PARTIAL[eighths % 8]
    } else {
        ' '
    }
}

/// Widget drawing one vertical bar per sequence position.
pub struct BarsWidget<'a> {
    bars: &'a [Bar],
    markers: &'a [MarkerSet],
    theme: &'a Theme,
}

impl<'a> BarsWidget<'a> {
    pub fn new(bars: &'a [Bar], markers: &'a [MarkerSet], theme: &'a Theme) -> Self {
        Self {
            bars,
            markers,
            theme,
        }
    }
}

impl Widget for BarsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let columns = layout_columns(self.bars.len(), area.width);
        for (offset, column) in columns.into_iter().enumerate() {
            let Some(idx) = column else { continue };
            let Some(bar) = self.bars.get(idx) else {
                continue;
            };

            let marker = self.markers.get(idx).and_then(MarkerSet::dominant);
            let color = self.theme.marker_color(marker);
            let eighths = height_in_eighths(bar.height, area.height);
            let x = area.x + offset as u16;

            for row in 0..area.height {
                let glyph = glyph_at(eighths, row as usize);
                if glyph == ' ' {
                    break;
                }
                let y = area.bottom() - 1 - row;
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(glyph).set_fg(color);
                }
            }
        }
    }
}
