//! Algorithm description command

use sortviz::algorithms::AlgorithmInfo;
use sortviz::tui::current_theme;
use sortviz::Algorithm;

/// Describe `algorithm`, or every algorithm when `None`.
#[cfg(not(tarpaulin_include))]
pub fn handle(algorithm: Option<Algorithm>) {
    let theme = current_theme();
    let selected: Vec<Algorithm> = match algorithm {
        Some(algorithm) => vec![algorithm],
        None => Algorithm::ALL.to_vec(),
    };

    for (i, algorithm) in selected.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let info = algorithm.info();
        println!(
            "{} {}",
            theme.accent_text(info.name),
            theme.secondary_text(&format!("({})", algorithm.key()))
        );
        println!("{}", format_details(info));
    }
}

/// Description and complexity table, without the title line.
pub fn format_details(info: &AlgorithmInfo) -> String {
    format!(
        "{}\n\nTime complexity\n  Best:    {}\n  Average: {}\n  Worst:   {}\nSpace complexity: {}",
        info.description, info.time.best, info.time.average, info.time.worst, info.space
    )
}
