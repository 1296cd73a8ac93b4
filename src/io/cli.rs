//! Command-line interface for batch layout of floors and walls

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;

use crate::io::configuration::{
    DEFAULT_OUTPUT_DIR, DEFAULT_RENDER_SCALE, IMAGE_EXTENSION, SHEET_EXTENSION,
};
use crate::io::error::{LayoutError, Result};
use crate::io::image::PngSink;
use crate::io::job::{Job, JobFile};
use crate::io::progress::ProgressManager;
use crate::io::report::{Summary, emit_report};
use crate::io::sink::MemorySheet;
use crate::layout::opening::OpeningTest;

#[derive(Parser)]
#[command(name = "tilegrout")]
#[command(
    author,
    version,
    about = "Model tile and grout layouts and estimate grout material"
)]
/// Command-line arguments for the layout tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// JSON job file describing the surfaces to model (built-in jobs when omitted)
    #[arg(value_name = "JOB_FILE")]
    pub jobs: Option<PathBuf>,

    /// Directory receiving sheets and rendered images
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Rendering scale in pixels per millimetre
    #[arg(short, long, default_value_t = DEFAULT_RENDER_SCALE)]
    pub scale: f64,

    /// Treat cells overlapping the opening as opening, not only those whose far corner is inside
    #[arg(long)]
    pub overlap: bool,

    /// Skip PNG rendering
    #[arg(long)]
    pub no_render: bool,

    /// Suppress progress output and informational logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// Opening membership rule selected on the command line
    pub const fn opening_test(&self) -> OpeningTest {
        if self.overlap {
            OpeningTest::Overlap
        } else {
            OpeningTest::TrailingCorner
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if images should be rendered
    pub const fn should_render(&self) -> bool {
        !self.no_render
    }

    /// Log level for the crate's own messages
    pub const fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else if self.quiet {
            log::LevelFilter::Warn
        } else {
            log::LevelFilter::Info
        }
    }
}

/// Runs every job of a batch and writes its outputs
pub struct JobRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl JobRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Load the jobs selected on the command line
    ///
    /// # Errors
    ///
    /// Returns an error if the job file cannot be read or parsed
    pub fn load_jobs(&self) -> Result<JobFile> {
        self.cli
            .jobs
            .as_deref()
            .map_or_else(|| Ok(JobFile::builtin()), JobFile::load)
    }

    /// Process every job, continuing past individual failures
    ///
    /// # Errors
    ///
    /// Returns an error if the jobs cannot be loaded, the output directory
    /// cannot be created, or any job failed
    pub fn run(&mut self) -> Result<()> {
        let file = self.load_jobs()?;
        if file.jobs.is_empty() {
            log::warn!("no jobs to process");
            return Ok(());
        }

        std::fs::create_dir_all(&self.cli.output_dir).map_err(|e| LayoutError::FileSystem {
            path: self.cli.output_dir.clone(),
            operation: "create output directory",
            source: e,
        })?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(file.jobs.len());
        }

        let mut failed = 0;
        for job in &file.jobs {
            if let Some(ref pm) = self.progress_manager {
                pm.start_job(&job.name);
            }

            let start_time = Instant::now();
            let outcome = self.run_job(job);
            match &outcome {
                Ok(summary) => log_summary(job, summary, start_time),
                Err(error) => {
                    failed += 1;
                    log::warn!("{}: {error} (code {})", job.name, error.code());
                }
            }

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_job(outcome.is_ok());
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        if failed > 0 {
            return Err(LayoutError::JobsFailed {
                failed,
                total: file.jobs.len(),
            });
        }
        Ok(())
    }

    /// Lay out a single job and write its sheet and image
    ///
    /// # Errors
    ///
    /// Returns validation and layout errors, or `SinkUnavailable` if an
    /// output cannot be written
    pub fn run_job(&self, job: &Job) -> Result<Summary> {
        let result = job.layout(self.cli.opening_test())?;
        log::debug!("{}: {} opening cells", job.name, result.opening_cell_count());

        let mut sheet = MemorySheet::new(&job.name);
        emit_report(&mut sheet, &job.name, &result)?;
        sheet.write_tsv(&self.output_path(job, SHEET_EXTENSION))?;

        if self.cli.should_render() {
            let path = self.output_path(job, IMAGE_EXTENSION);
            let mut png = PngSink::new(&path, job.palette.clone(), self.cli.scale);
            emit_report(&mut png, &job.name, &result)?;
        }

        Ok(Summary::from_result(&result))
    }

    /// Output file for a job with the given extension
    pub fn output_path(&self, job: &Job, extension: &str) -> PathBuf {
        output_path(&self.cli.output_dir, job, extension)
    }
}

fn output_path(directory: &Path, job: &Job, extension: &str) -> PathBuf {
    directory.join(format!("{}.{extension}", job.file_stem()))
}

fn log_summary(job: &Job, summary: &Summary, start_time: Instant) {
    let opening = job.opening.map_or_else(
        || "no opening".to_string(),
        |o| format!("opening {}x{}", o.width, o.height),
    );
    log::info!(
        "{} ({}x{}, {opening}) modelled in {:.1?}",
        job.name,
        job.surface.width,
        job.surface.length,
        start_time.elapsed()
    );
    for (line, _, _) in summary.lines() {
        log::info!("  {line}");
    }
}
