use std::path::{Path, PathBuf};

use console::Style;
use retina_core::pipeline::{Mode, ProcessOutput, SessionConfig};

use crate::commands::process::Written;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

/// How a single frame came out of the processor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutcomeKind {
    Processed,
    Degraded,
    NoSignal,
}

impl OutcomeKind {
    pub fn of<T>(output: &ProcessOutput<T>) -> Self {
        if output.is_no_signal() {
            Self::NoSignal
        } else if output.is_degraded() {
            Self::Degraded
        } else {
            Self::Processed
        }
    }
}

#[derive(Debug, Default)]
pub struct BatchTally {
    pub processed: usize,
    pub degraded: usize,
    pub failed: usize,
}

impl BatchTally {
    pub fn record(&mut self, outcome: OutcomeKind) {
        match outcome {
            OutcomeKind::Processed => self.processed += 1,
            OutcomeKind::Degraded => self.degraded += 1,
            OutcomeKind::NoSignal => self.failed += 1,
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!(
        "  {}",
        s.title.apply_to("\u{2550}".repeat(title.chars().count()))
    );
    println!();
}

pub fn print_process_summary(
    session: &SessionConfig,
    input: &Path,
    output: &Path,
    written: &Written,
) {
    let s = Styles::new();
    print_title(&s, "Retina");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Mode"),
        s.method.apply_to(session.mode)
    );
    println!();

    println!("  {}", s.header.apply_to("Parameters"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Sigma E"),
        s.value.apply_to(format!("{:.2}", session.params.sigma_excitatory))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Sigma I"),
        s.value.apply_to(format!("{:.2}", session.params.sigma_inhibitory))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Gain"),
        s.value.apply_to(format!("{:.2}", session.params.gain))
    );
    println!();

    match written.outcome {
        OutcomeKind::Processed => println!(
            "  {:<14}{}",
            s.label.apply_to("Result"),
            s.method.apply_to("processed")
        ),
        _ => println!(
            "  {:<14}{}",
            s.label.apply_to("Result"),
            s.disabled.apply_to("fallback frame (see warnings)")
        ),
    }
    print_histogram_line(&s, written.histogram.as_ref());
    println!();
}

fn print_histogram_line(s: &Styles, histogram: Option<&PathBuf>) {
    match histogram {
        Some(path) => println!(
            "  {:<14}{}",
            s.label.apply_to("Histogram"),
            s.path.apply_to(path.display())
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Histogram"),
            s.disabled.apply_to("none")
        ),
    }
}

pub fn print_batch_summary(tally: &BatchTally, output_dir: &Path) {
    let s = Styles::new();
    print_title(&s, "Retina Batch");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output_dir.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Processed"),
        s.value.apply_to(tally.processed)
    );
    if tally.degraded > 0 {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Fallback"),
            s.disabled.apply_to(tally.degraded)
        );
    }
    if tally.failed > 0 {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Failed"),
            s.disabled.apply_to(tally.failed)
        );
    }
    println!();
}

pub fn print_modes(modes: &[Mode], default: Mode) {
    let s = Styles::new();
    print_title(&s, "Filter Modes");

    for mode in modes {
        let marker = if *mode == default { " (default)" } else { "" };
        println!(
            "  {:<4}{}{}",
            s.label.apply_to(mode.index()),
            s.method.apply_to(mode),
            s.disabled.apply_to(marker)
        );
    }
    println!();
}
