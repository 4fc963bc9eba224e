//! Headless run command
//!
//! Sorts one sequence (or the same sequence with every algorithm) without a
//! terminal UI and prints the statistics as a table or JSON.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use rayon::prelude::*;

use sortviz::cli::RunArgs;
use sortviz::engine::{InstantPacer, NoopObserver, Pacer, SleepPacer};
use sortviz::tui::current_theme;
use sortviz::{Algorithm, PlaybackController, RunReport, Settings, SortError};

use super::resolve_settings;

const POLL_INTERVAL: Duration = Duration::from_millis(5);

#[cfg(not(tarpaulin_include))]
pub fn handle(config_path: Option<&Path>, args: &RunArgs) -> Result<()> {
    let settings = resolve_settings(config_path, &args.sequence)?;
    let input = match &args.values {
        Some(values) => values.clone(),
        None => generate_input(&settings)?,
    };
    if input.is_empty() {
        println!("Nothing to sort");
        return Ok(());
    }

    let algorithms = if args.all {
        Algorithm::ALL.to_vec()
    } else {
        vec![settings.algorithm]
    };

    let interrupted = Arc::new(AtomicBool::new(false));
    if args.realtime {
        let flag = Arc::clone(&interrupted);
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
            .context("Failed to install Ctrl-C handler")?;
    }

    tracing::info!(
        algorithms = algorithms.len(),
        len = input.len(),
        realtime = args.realtime,
        "headless run"
    );

    let results: Vec<(Algorithm, Result<RunReport, SortError>)> = algorithms
        .par_iter()
        .map(|&algorithm| {
            let result = run_one(&settings, algorithm, &input, args.realtime, &interrupted);
            (algorithm, result)
        })
        .collect();

    let theme = current_theme();
    let mut reports = Vec::with_capacity(results.len());
    let mut failed = 0;
    for (algorithm, result) in results {
        match result {
            Ok(report) => reports.push(report),
            Err(err) => {
                failed += 1;
                let message = format!("{}: {}", algorithm.info().name, err);
                eprintln!("{}", theme.error_text(&message));
            }
        }
    }
    if failed > 0 {
        bail!("{} of {} runs failed", failed, algorithms.len());
    }

    if args.json {
        let json = if args.all {
            serde_json::to_string_pretty(&reports)?
        } else {
            serde_json::to_string_pretty(&reports[0])?
        };
        println!("{}", json);
        return Ok(());
    }

    println!("{}", theme.primary_text(&format_table(&reports)));
    if let [report] = reports.as_slice() {
        println!(
            "{} {}",
            theme.secondary_text("Sorted:"),
            theme.success_text(&format_values(&report.sorted))
        );
    }
    Ok(())
}

/// Random input drawn the same way the visualizer draws it.
fn generate_input(settings: &Settings) -> Result<Vec<u32>> {
    let controller = PlaybackController::new(
        settings.clone(),
        Arc::new(InstantPacer::new()),
        Arc::new(NoopObserver),
    )?;
    Ok(controller.values().map(<[u32]>::to_vec).unwrap_or_default())
}

/// Sort `input` with `algorithm` on its own controller.
fn run_one(
    settings: &Settings,
    algorithm: Algorithm,
    input: &[u32],
    realtime: bool,
    interrupted: &AtomicBool,
) -> Result<RunReport, SortError> {
    let pacer: Arc<dyn Pacer> = if realtime {
        Arc::new(SleepPacer::new())
    } else {
        Arc::new(InstantPacer::new())
    };
    let settings = Settings {
        algorithm,
        ..settings.clone()
    };
    let mut controller = PlaybackController::new(settings, pacer, Arc::new(NoopObserver))?;
    controller.load(input.to_vec())?;
    controller.start()?;

    loop {
        if let Some(result) = controller.poll() {
            return result;
        }
        if interrupted.load(Ordering::SeqCst) {
            controller.cancel();
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Fixed-width statistics table, one row per report.
pub fn format_table(reports: &[RunReport]) -> String {
    let mut lines = vec![format!(
        "{:<16} {:>6} {:>12} {:>8} {:>8} {:>10}",
        "Algorithm", "Size", "Comparisons", "Swaps", "Steps", "Time (ms)"
    )];
    for report in reports {
        lines.push(format!(
            "{:<16} {:>6} {:>12} {:>8} {:>8} {:>10}",
            report.algorithm.info().name,
            report.len,
            report.stats.comparisons,
            report.stats.swaps,
            report.stats.steps,
            report.stats.elapsed_ms
        ));
    }
    lines.join("\n")
}

fn format_values(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortviz::sequence::StatsSnapshot;

    fn report(algorithm: Algorithm, comparisons: u64, swaps: u64) -> RunReport {
        RunReport {
            algorithm,
            len: 4,
            stats: StatsSnapshot {
                comparisons,
                swaps,
                steps: comparisons + swaps,
                elapsed_ms: 0,
            },
            sorted: vec![1, 3, 5, 8],
        }
    }

    #[test]
    fn table_has_header_and_one_row_per_report() {
        let table = format_table(&[
            report(Algorithm::Bubble, 6, 4),
            report(Algorithm::Merge, 5, 0),
        ]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Algorithm"));
        assert!(lines[1].starts_with("Bubble Sort"));
        assert!(lines[2].starts_with("Merge Sort"));
        assert!(lines[1].contains(" 6 "));
    }

    #[test]
    fn run_one_sorts_explicit_values() {
        let settings = Settings {
            seed: Some(1),
            ..Settings::default()
        };
        let interrupted = AtomicBool::new(false);
        let report =
            run_one(&settings, Algorithm::Bubble, &[5, 3, 8, 1], false, &interrupted).unwrap();
        assert_eq!(report.sorted, vec![1, 3, 5, 8]);
        assert_eq!(report.stats.comparisons, 6);
        assert_eq!(report.stats.swaps, 4);
    }

    #[test]
    fn values_are_comma_joined() {
        assert_eq!(format_values(&[1, 2, 3]), "1, 2, 3");
        assert_eq!(format_values(&[]), "");
    }
}
