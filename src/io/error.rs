//! Error types for layout computation, sinks and job handling

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for all layout operations
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A length, size, thickness or density is zero, negative or not finite
    #[error("Invalid dimension '{field}' = {value}: must be a positive finite number")]
    InvalidDimension {
        /// Name of the offending input field
        field: &'static str,
        /// Provided value
        value: f64,
    },

    /// Opening rectangle is not contained in the surface
    #[error("Opening out of bounds: '{field}' = {value} exceeds limit {limit}")]
    OpeningOutOfBounds {
        /// Offending opening coordinate or edge
        field: &'static str,
        /// Provided or derived value
        value: f64,
        /// Bound the value has to respect
        limit: f64,
    },

    /// Axis would be split into more bands than the grid allows
    #[error("Axis of {extent} mm needs up to {bands} bands (limit {limit})")]
    GridTooLarge {
        /// Axis extent being planned
        extent: f64,
        /// Estimated band count
        bands: usize,
        /// Maximum band count per axis
        limit: usize,
    },

    /// Grid would hold more cells than the layout allows
    #[error("Grid of {columns}x{rows} bands has {cells} cells (limit {limit})")]
    TooManyCells {
        /// Column band count
        columns: usize,
        /// Row band count
        rows: usize,
        /// Total cell count
        cells: usize,
        /// Maximum cell count per grid
        limit: usize,
    },

    /// A required fill colour was not supplied
    #[error("Missing {kind} fill")]
    MissingFill {
        /// Cell kind lacking a fill
        kind: &'static str,
    },

    /// Fill colour token could not be parsed
    #[error("Invalid fill '{value}': {reason}")]
    InvalidFill {
        /// Provided token
        value: String,
        /// Explanation of why the token is invalid
        reason: String,
    },

    /// Grid sink cannot accept output
    ///
    /// Raised after the layout is fully computed; the layout result itself is
    /// unaffected and can be written to another sink.
    #[error("Sink '{sink}' unavailable: {source}")]
    SinkUnavailable {
        /// Sink description, usually the target path
        sink: String,
        /// Underlying failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Job file could not be parsed
    #[error("Invalid job file '{}': {source}", path.display())]
    JobFile {
        /// Path to the job file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Some jobs of a batch failed
    #[error("{failed} of {total} jobs failed")]
    JobsFailed {
        /// Number of failed jobs
        failed: usize,
        /// Number of jobs in the batch
        total: usize,
    },
}

impl LayoutError {
    /// Numeric status code for the failure class
    ///
    /// 2 surface, 3 tile, 4 grout, 5 fill, 6 opening size, 7 opening bounds;
    /// everything that prevents the sheet from being produced maps to 1.
    pub fn code(&self) -> u8 {
        match self {
            Self::InvalidDimension { field, .. } => match field.split('.').next() {
                Some("surface") => 2,
                Some("tile") => 3,
                Some("grout") => 4,
                Some("opening") => 6,
                _ => 1,
            },
            Self::MissingFill { .. } | Self::InvalidFill { .. } => 5,
            Self::OpeningOutOfBounds { .. } => 7,
            Self::GridTooLarge { .. }
            | Self::TooManyCells { .. }
            | Self::SinkUnavailable { .. }
            | Self::JobFile { .. }
            | Self::FileSystem { .. }
            | Self::JobsFailed { .. } => 1,
        }
    }
}

/// Convenience type alias for layout results
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Create an invalid dimension error
pub const fn invalid_dimension(field: &'static str, value: f64) -> LayoutError {
    LayoutError::InvalidDimension { field, value }
}

/// Create an opening containment error
pub const fn opening_out_of_bounds(field: &'static str, value: f64, limit: f64) -> LayoutError {
    LayoutError::OpeningOutOfBounds {
        field,
        value,
        limit,
    }
}

/// Wrap any sink failure
pub fn sink_unavailable(
    sink: &impl ToString,
    source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> LayoutError {
    LayoutError::SinkUnavailable {
        sink: sink.to_string(),
        source: source.into(),
    }
}
