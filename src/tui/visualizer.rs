//! Interactive sorting visualizer.
//!
//! `Visualizer` holds the controller, the event receiver and the view mirror;
//! it is independent of the terminal so it can be driven headless in tests.
//! `run` wires it to a real terminal through `App`.

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::app::App;
use super::help::render_help_modal;
use super::status_footer::{render_footer, render_status_line};
use super::theme::{current_theme, Theme};
use super::ui::build_layout;
use super::view::ViewState;
use super::widgets::{build_info_lines, build_stats_line, BarsWidget};
use crate::algorithms::Algorithm;
use crate::engine::{
    ChannelObserver, Pacer, PlaybackController, RunReport, Settings, SleepPacer, SortEvent,
};
use crate::error::SortError;

/// Bars added or removed by `[` and `]`.
const SIZE_STEP: usize = 5;

const FOOTER_KEYS: &[(&str, &str)] = &[
    ("space", "sort"),
    ("c", "cancel"),
    ("g", "new array"),
    ("a", "algorithm"),
    ("+/-", "speed"),
    ("[/]", "size"),
    ("?", "help"),
    ("q", "quit"),
];

/// User intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Cancel,
    Generate,
    Reset,
    NextAlgorithm,
    PreviousAlgorithm,
    SelectAlgorithm(Algorithm),
    Faster,
    Slower,
    Grow,
    Shrink,
    ToggleHelp,
    CloseHelp,
    Quit,
    None,
}

/// Map a key press to an action. While help is shown any key closes it.
pub fn key_action(key: KeyEvent, help_visible: bool) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    if help_visible {
        return Action::CloseHelp;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char(' ') | KeyCode::Enter => Action::Start,
        KeyCode::Char('c') => Action::Cancel,
        KeyCode::Char('g') => Action::Generate,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('a') | KeyCode::Tab => Action::NextAlgorithm,
        KeyCode::Char('A') | KeyCode::BackTab => Action::PreviousAlgorithm,
        KeyCode::Char(c @ '1'..='5') => {
            Action::SelectAlgorithm(Algorithm::ALL[(c as u8 - b'1') as usize])
        }
        KeyCode::Char('+') | KeyCode::Char('=') => Action::Faster,
        KeyCode::Char('-') | KeyCode::Char('_') => Action::Slower,
        KeyCode::Char(']') => Action::Grow,
        KeyCode::Char('[') => Action::Shrink,
        KeyCode::Char('?') => Action::ToggleHelp,
        _ => Action::None,
    }
}

/// Outcome shown on the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ready,
    Sorting(Algorithm),
    Done(String),
    Cancelled,
    Failed(String),
}

impl Status {
    fn from_run(result: Result<RunReport, SortError>) -> Self {
        match result {
            Ok(report) => Status::Done(format!(
                "Sorted {} bars with {}: {} comparisons, {} swaps in {} ms",
                report.len,
                report.algorithm.info().name,
                report.stats.comparisons,
                report.stats.swaps,
                report.stats.elapsed_ms
            )),
            Err(SortError::Cancelled) => Status::Cancelled,
            Err(err) => Status::Failed(err.to_string()),
        }
    }

    pub fn text(&self) -> String {
        match self {
            Status::Ready => "Ready. Press space to sort.".to_string(),
            Status::Sorting(alg) => format!("Sorting with {}...", alg.info().name),
            Status::Done(msg) => msg.clone(),
            Status::Cancelled => "Sort cancelled.".to_string(),
            Status::Failed(msg) => format!("Sort failed: {}", msg),
        }
    }

    fn style(&self, theme: &Theme) -> Style {
        match self {
            Status::Done(_) => theme.success_style(),
            Status::Failed(_) => theme.error_style(),
            Status::Sorting(_) => theme.accent_style(),
            Status::Ready | Status::Cancelled => theme.text_secondary_style(),
        }
    }
}

pub struct Visualizer {
    controller: PlaybackController,
    events: Receiver<SortEvent>,
    view: ViewState,
    status: Status,
    show_help: bool,
    quit: bool,
}

impl Visualizer {
    pub fn new(settings: Settings, pacer: Arc<dyn Pacer>) -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let controller =
            PlaybackController::new(settings, pacer, Arc::new(ChannelObserver::new(tx)))?;
        let mut visualizer = Self {
            controller,
            events: rx,
            view: ViewState::new(),
            status: Status::Ready,
            show_help: false,
            quit: false,
        };
        visualizer.pump();
        Ok(visualizer)
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply queued executor events and collect a finished run.
    pub fn pump(&mut self) {
        self.drain_events();
        if let Some(result) = self.controller.poll() {
            self.status = Status::from_run(result);
            self.drain_events();
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.view.apply(event);
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        let settings = self.controller.settings().clone();
        let result = match action {
            Action::Start => self.controller.start().map(|()| {
                self.status = Status::Sorting(settings.algorithm);
            }),
            Action::Cancel => {
                self.controller.cancel();
                Ok(())
            }
            Action::Generate | Action::Reset => self.controller.reset().map(|()| {
                self.status = Status::Ready;
            }),
            Action::NextAlgorithm => self.controller.set_algorithm(settings.algorithm.next()),
            Action::PreviousAlgorithm => self
                .controller
                .set_algorithm(settings.algorithm.previous()),
            Action::SelectAlgorithm(algorithm) => self.controller.set_algorithm(algorithm),
            Action::Faster => self.controller.set_speed(settings.speed.faster().get()),
            Action::Slower => self.controller.set_speed(settings.speed.slower().get()),
            Action::Grow => {
                let size = (settings.size + SIZE_STEP).min(settings.size_limits.max);
                self.controller.generate(size)
            }
            Action::Shrink => {
                let size = settings
                    .size
                    .saturating_sub(SIZE_STEP)
                    .max(settings.size_limits.min);
                self.controller.generate(size)
            }
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                Ok(())
            }
            Action::CloseHelp => {
                self.show_help = false;
                Ok(())
            }
            Action::Quit => {
                self.controller.cancel();
                self.quit = true;
                Ok(())
            }
            Action::None => Ok(()),
        };

        match result {
            Ok(()) => {}
            Err(err) if err.is_rejection() => {
                tracing::debug!(?action, error = %err, "action ignored");
            }
            Err(err) => self.status = Status::Failed(err.to_string()),
        }
        self.drain_events();
    }

    pub fn render(&self, frame: &mut Frame) {
        let theme = current_theme();
        let settings = self.controller.settings();
        let layout = build_layout(frame.area());

        let info = Paragraph::new(build_info_lines(settings.algorithm.info(), &theme))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.text_secondary_style()),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(info, layout.info);

        let bars_block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.text_secondary_style())
            .title(format!(
                " {} · {} bars ",
                settings.algorithm.info().name,
                self.view.bars.len()
            ));
        let inner = bars_block.inner(layout.bars);
        frame.render_widget(bars_block, layout.bars);
        frame.render_widget(BarsWidget::new(&self.view.bars, &self.view.markers, &theme), inner);

        frame.render_widget(
            Paragraph::new(build_stats_line(&self.view, settings, &theme)),
            layout.stats,
        );
        render_status_line(
            frame,
            layout.status,
            &self.status.text(),
            self.status.style(&theme),
        );
        render_footer(frame, layout.footer, FOOTER_KEYS);

        if self.show_help {
            render_help_modal(frame, frame.area());
        }
    }
}

/// Run the visualizer on the current terminal until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run(settings: Settings) -> Result<()> {
    let mut visualizer = Visualizer::new(settings, Arc::new(SleepPacer::new()))?;
    let mut app = App::new(Duration::from_millis(16))?;

    while !visualizer.should_quit() {
        visualizer.pump();
        app.draw(|frame| visualizer.render(frame))?;

        if let Some(Event::Key(key)) = app.next_event()? {
            if key.kind == KeyEventKind::Press {
                let action = key_action(key, visualizer.show_help());
                visualizer.handle_action(action);
            }
        }
    }

    Ok(())
}
