use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

pub struct ProgressReporter {
    term: Term,
    expanded: AtomicUsize,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            expanded: AtomicUsize::new(0),
            current_bar: None,
        }
    }

    pub fn create_spinner(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid")
                .tick_strings(SPINNER_FRAMES),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_walk(&mut self) {
        let _ = self.term.clear_line();
        eprintln!("{} Walking installed packages...", style("🔍").cyan());
        if self.term.is_term() {
            self.current_bar = Some(self.create_spinner("Reading root package.json..."));
        }
    }

    pub fn expanding_package(&self, name: &str) {
        let count = self.expanded.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("[{count}] Expanding: {name}..."));
        }
    }

    pub fn packages_expanded(&self) -> usize {
        self.expanded.load(Ordering::Relaxed)
    }

    pub fn finish_walk(&mut self, count: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        debug!("Expanded {} nodes", self.packages_expanded());
        let _ = self.term.clear_line();
        eprintln!(
            "{} Walk complete: found {} {}",
            style("✓").green(),
            style(count).yellow().bold(),
            pluralize("package", count)
        );
    }
}
