//! Layout constants and runtime configuration defaults

// Unit conversions for reporting; layout math stays in millimetres
/// Square millimetres per square metre
pub const MM2_PER_M2: f64 = 1_000_000.0;
/// Cubic millimetres per litre
pub const MM3_PER_LITRE: f64 = 1_000_000.0;

// Safety limits to prevent excessive memory allocation
/// Maximum number of bands planned along one axis
pub const MAX_BANDS_PER_AXIS: usize = 10_000;
/// Maximum number of cells in one grid, both axes combined
///
/// The classified cell matrix holds one entry per cell, so this bounds its
/// memory to a few tens of megabytes.
pub const MAX_GRID_CELLS: usize = 4_000_000;

// Band fitting
/// Relative tolerance, as a fraction of the axis extent, when fitting tiles
pub const BAND_TOLERANCE: f64 = 1e-9;

// Fill colours for sheets and images
/// Default tile fill
pub const DEFAULT_TILE_FILL: &str = "808080";
/// Default grout fill
pub const DEFAULT_GROUT_FILL: &str = "FFFFFF";
/// Fill for window openings in the built-in jobs
pub const WINDOW_FILL: &str = "03a1fc";
/// Fill for door openings in the built-in jobs
pub const DOOR_FILL: &str = "99534e";

// Output settings
/// Directory receiving sheets and images
pub const DEFAULT_OUTPUT_DIR: &str = "layouts";
/// Rendering scale in pixels per millimetre
pub const DEFAULT_RENDER_SCALE: f64 = 0.25;
/// Largest rendered image side in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;
/// Extension of sheet exports
pub const SHEET_EXTENSION: &str = "tsv";
/// Extension of rendered images
pub const IMAGE_EXTENSION: &str = "png";

// Summary block placement below the grid (1-based sheet columns)
/// Rows between the last grid row and the summary title
pub const SUMMARY_ROW_OFFSET: usize = 2;
/// Column holding the numeric tile count
pub const TILE_COUNT_COLUMN: usize = 6;
/// Column holding the tile area in square metres
pub const TILE_AREA_COLUMN: usize = 8;
/// Column holding the grout area in square metres
pub const GROUT_AREA_COLUMN: usize = 10;
/// Column holding the grout volume in litres
pub const GROUT_VOLUME_COLUMN: usize = 12;
/// Column holding the grout mass in kilograms
pub const GROUT_MASS_COLUMN: usize = 14;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
