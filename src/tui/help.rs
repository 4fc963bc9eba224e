//! Help overlay listing the keyboard shortcuts.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::theme::{current_theme, Theme};
use super::ui::centered_rect;
use crate::sequence::Marker;

/// (key, description) pairs shown in the help overlay.
pub const HELP_KEYS: &[(&str, &str)] = &[
    ("space / enter", "Start sorting"),
    ("c", "Cancel the running sort"),
    ("g", "Generate a new array"),
    ("r", "Reset (new array, same size)"),
    ("a / A", "Next / previous algorithm"),
    ("1-5", "Bubble, selection, insertion, merge, quick"),
    ("+ / -", "Faster / slower"),
    ("] / [", "More / fewer bars"),
    ("?", "Toggle this help"),
    ("q / esc", "Quit"),
];

pub fn build_help_text(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    for (key, desc) in HELP_KEYS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<16}", key), theme.accent_bold_style()),
            Span::styled(desc.to_string(), theme.text_style()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(build_legend(theme));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Settings are locked while a sort is running.",
        theme.text_secondary_style(),
    )));
    lines
}

/// Bar colors, one swatch per marker.
fn build_legend(theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled(format!("  {:<16}", "colors"), theme.accent_bold_style())];
    for marker in Marker::ALL {
        spans.push(Span::styled("█ ", Style::default().fg(theme.marker_color(Some(marker)))));
        spans.push(Span::styled(format!("{}  ", marker.name()), theme.text_style()));
    }
    spans.push(Span::styled("█ ", Style::default().fg(theme.marker_color(None))));
    spans.push(Span::styled("unsorted", theme.text_style()));
    Line::from(spans)
}

/// Render the help modal overlay.
pub fn render_help_modal(frame: &mut Frame, area: Rect) {
    let theme = current_theme();
    let modal_area = centered_rect(60, 70, area);

    frame.render_widget(Clear, modal_area);

    let help = Paragraph::new(build_help_text(&theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, modal_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_text_lists_every_key() {
        let lines = build_help_text(&Theme::standard());
        // blank + keys + blank + legend + blank + note
        assert_eq!(lines.len(), HELP_KEYS.len() + 5);
        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(text.contains("Cancel the running sort"));
    }

    #[test]
    fn legend_names_each_marker_in_its_color() {
        let theme = Theme::standard();
        let legend = build_legend(&theme);
        let text: String = legend.spans.iter().map(|s| s.content.as_ref()).collect();
        for marker in Marker::ALL {
            assert!(text.contains(marker.name()));
        }
        let pivot_swatch = legend
            .spans
            .iter()
            .position(|s| s.content.starts_with("pivot"))
            .map(|i| &legend.spans[i - 1])
            .unwrap();
        assert_eq!(pivot_swatch.style.fg, Some(theme.bar_pivot));
    }
}
