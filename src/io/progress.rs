//! Batch progress display over layout jobs

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static JOB_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar advancing once per finished job
pub struct ProgressManager {
    bar: ProgressBar,
    failed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a hidden progress manager; call `initialize` to show it
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            failed: 0,
        }
    }

    /// Show a bar for the given number of jobs
    pub fn initialize(&mut self, job_count: usize) {
        let bar = ProgressBar::new(job_count as u64);
        bar.set_style(JOB_STYLE.clone());
        self.bar = bar;
        self.failed = 0;
    }

    /// Display the job currently being processed
    pub fn start_job(&self, name: &str) {
        self.bar.set_message(name.to_string());
    }

    /// Advance past a finished job
    pub fn complete_job(&mut self, succeeded: bool) {
        if !succeeded {
            self.failed += 1;
        }
        self.bar.inc(1);
    }

    /// Number of jobs reported as failed
    pub const fn failed(&self) -> usize {
        self.failed
    }

    /// Number of jobs processed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Close the bar with a final message
    pub fn finish(&self) {
        if self.failed == 0 {
            self.bar.finish_with_message("all jobs done");
        } else {
            self.bar.finish_with_message(format!("{} jobs failed", self.failed));
        }
    }
}
