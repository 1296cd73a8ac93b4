/// Command-line parsing and batch job execution
pub mod cli;
/// Layout constants and output defaults
pub mod configuration;
/// Error taxonomy shared by the whole crate
pub mod error;
/// PNG rendering sink
pub mod image;
/// Job descriptions, fills and JSON job files
pub mod job;
/// Progress display over job batches
pub mod progress;
/// Summary figures and report emission into sinks
pub mod report;
/// Grid sink contract and in-memory sheet
pub mod sink;

pub use error::{LayoutError, Result};
pub use sink::{GridSink, MemorySheet, SheetValue};
