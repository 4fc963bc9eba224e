//! Text panels: algorithm description and the statistics line.

use ratatui::text::{Line, Span};

use crate::algorithms::AlgorithmInfo;
use crate::engine::{RunState, Settings};
use crate::tui::theme::Theme;
use crate::tui::view::ViewState;

/// Name, description and complexity table for the selected algorithm.
pub fn build_info_lines(info: &AlgorithmInfo, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(info.name, theme.accent_bold_style())),
        Line::from(Span::styled(info.description, theme.text_style())),
        Line::from(vec![
            Span::styled("Time  ", theme.text_secondary_style()),
            Span::styled(
                format!(
                    "best {} · average {} · worst {}",
                    info.time.best, info.time.average, info.time.worst
                ),
                theme.text_style(),
            ),
            Span::styled("   Space  ", theme.text_secondary_style()),
            Span::styled(info.space, theme.text_style()),
        ]),
    ]
}

/// Counters plus the current configuration, on one line.
pub fn build_stats_line(view: &ViewState, settings: &Settings, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(16);
    let mut field = |label: &str, value: String| {
        spans.push(Span::styled(format!("{}: ", label), theme.text_secondary_style()));
        spans.push(Span::styled(value, theme.text_style()));
        spans.push(Span::raw("   "));
    };

    field("Comparisons", view.stats.comparisons.to_string());
    field("Swaps", view.stats.swaps.to_string());
    field("Time", format!("{} ms", view.elapsed_ms()));
    field("Size", view.bars.len().to_string());
    field(
        "Speed",
        format!(
            "{} ({} ms)",
            settings.speed.get(),
            settings.speed.delay().as_millis()
        ),
    );

    let (label, style) = match view.run_state {
        RunState::Running => ("● sorting", theme.accent_style()),
        RunState::Idle => ("○ idle", theme.text_secondary_style()),
    };
    spans.push(Span::styled(label, style));

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Algorithm;
    use crate::engine::SortEvent;
    use crate::sequence::StatsSnapshot;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn info_lines_include_complexities() {
        let theme = Theme::standard();
        let lines = build_info_lines(Algorithm::Quick.info(), &theme);
        assert_eq!(lines.len(), 3);
        assert_eq!(line_text(&lines[0]), "Quick Sort");
        let complexity = line_text(&lines[2]);
        assert!(complexity.contains("worst O(n²)"));
        assert!(complexity.contains("O(log n)"));
    }

    #[test]
    fn stats_line_shows_counters_and_delay() {
        let theme = Theme::standard();
        let mut view = ViewState::new();
        view.apply(SortEvent::Stats(StatsSnapshot {
            comparisons: 6,
            swaps: 4,
            steps: 10,
            elapsed_ms: 100,
        }));
        let text = line_text(&build_stats_line(&view, &Settings::default(), &theme));

        assert!(text.contains("Comparisons: 6"));
        assert!(text.contains("Swaps: 4"));
        assert!(text.contains("Time: 100 ms"));
        assert!(text.contains("Speed: 5 (60 ms)"));
        assert!(text.contains("idle"));
    }
}
