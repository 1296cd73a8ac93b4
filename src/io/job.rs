//! Layout jobs, fill colours and JSON job files

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::dimensions::{Grout, Opening, Surface, Tile, validate_inputs};
use crate::io::configuration::{DEFAULT_GROUT_FILL, DEFAULT_TILE_FILL, DOOR_FILL, WINDOW_FILL};
use crate::io::error::{LayoutError, Result};
use crate::layout::aggregate::{LayoutResult, layout_with};
use crate::layout::classify::CellClass;
use crate::layout::opening::OpeningTest;

/// RGBA fill colour
///
/// Parsed from `RRGGBB` or `RRGGBBAA` hex, with an optional leading `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fill(pub [u8; 4]);

impl Fill {
    /// Parse a hex colour token
    ///
    /// # Errors
    ///
    /// Returns `InvalidFill` if the token is not 6 or 8 hex digits
    pub fn from_hex(token: &str) -> Result<Self> {
        let digits = token.trim().trim_start_matches('#');
        if !matches!(digits.len(), 6 | 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(LayoutError::InvalidFill {
                value: token.to_string(),
                reason: "expected 6 or 8 hex digits".to_string(),
            });
        }

        let mut rgba = [0, 0, 0, u8::MAX];
        for (channel, slot) in rgba.iter_mut().enumerate().take(digits.len() / 2) {
            let pair = digits.get(channel * 2..channel * 2 + 2).unwrap_or_default();
            *slot = u8::from_str_radix(pair, 16).map_err(|e| LayoutError::InvalidFill {
                value: token.to_string(),
                reason: e.to_string(),
            })?;
        }

        Ok(Self(rgba))
    }
}

impl FromStr for Fill {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Fill {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Fill> for String {
    fn from(fill: Fill) -> Self {
        fill.to_string()
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        if a == u8::MAX {
            write!(f, "{r:02X}{g:02X}{b:02X}")
        } else {
            write!(f, "{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

/// Fill tokens handed to sinks, one per cell class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Tile fill
    pub tile: Fill,
    /// Grout fill
    pub grout: Fill,
    /// Opening fill, required when the job has an opening
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening: Option<Fill>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            tile: Fill::from_hex(DEFAULT_TILE_FILL).unwrap_or(Fill([128, 128, 128, 255])),
            grout: Fill::from_hex(DEFAULT_GROUT_FILL).unwrap_or(Fill([255, 255, 255, 255])),
            opening: None,
        }
    }
}

impl Palette {
    /// Default palette with an opening fill
    pub fn with_opening(opening: Fill) -> Self {
        Self {
            opening: Some(opening),
            ..Self::default()
        }
    }

    /// Fill for a cell class
    ///
    /// # Errors
    ///
    /// Returns `MissingFill` for opening cells when no opening fill is set
    pub fn fill_for(&self, class: CellClass) -> Result<Fill> {
        match class {
            CellClass::Tile => Ok(self.tile),
            CellClass::Grout => Ok(self.grout),
            CellClass::Opening => self
                .opening
                .ok_or(LayoutError::MissingFill { kind: "opening" }),
        }
    }
}

/// One surface to lay out, with the fills used for its output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Sheet title and output file stem
    pub name: String,
    /// Surface being tiled
    pub surface: Surface,
    /// Tile size
    pub tile: Tile,
    /// Grout joints
    pub grout: Grout,
    /// Optional window or door
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening: Option<Opening>,
    /// Fills for each cell class
    #[serde(default)]
    pub palette: Palette,
}

impl Job {
    /// Check dimensions and fills before any layout work
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` for non-positive inputs, or `MissingFill`
    /// when the job has an opening but no opening fill
    pub fn validate(&self) -> Result<()> {
        validate_inputs(&self.surface, &self.tile, &self.grout)?;
        if self.opening.is_some() && self.palette.opening.is_none() {
            return Err(LayoutError::MissingFill { kind: "opening" });
        }
        Ok(())
    }

    /// Validate the job and compute its layout
    ///
    /// # Errors
    ///
    /// Returns any validation or layout error
    pub fn layout(&self, test: OpeningTest) -> Result<LayoutResult> {
        self.validate()?;
        layout_with(
            &self.surface,
            &self.tile,
            &self.grout,
            self.opening.as_ref(),
            test,
        )
    }

    /// File stem safe to use inside an output directory
    pub fn file_stem(&self) -> String {
        let stem: String = self
            .name
            .trim()
            .chars()
            .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
            .collect();
        if stem.is_empty() {
            "layout".to_string()
        } else {
            stem
        }
    }
}

/// Batch of jobs loaded from JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobFile {
    /// Jobs in processing order
    pub jobs: Vec<Job>,
}

impl JobFile {
    /// Parse a job file from JSON text
    ///
    /// # Errors
    ///
    /// Returns `JobFile` if the text is not a valid job description
    pub fn from_json(text: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| LayoutError::JobFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load a job file from disk
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be read, or `JobFile` if it is
    /// not a valid job description
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| LayoutError::FileSystem {
            path: path.to_path_buf(),
            operation: "read job file",
            source: e,
        })?;
        let file = Self::from_json(&text, path)?;
        log::debug!("loaded {} jobs from {}", file.jobs.len(), path.display());
        Ok(file)
    }

    /// The floor and wall jobs modelled when no job file is given
    pub fn builtin() -> Self {
        let window = Fill::from_hex(WINDOW_FILL).unwrap_or(Fill([3, 161, 252, 255]));
        let door = Fill::from_hex(DOOR_FILL).unwrap_or(Fill([153, 83, 78, 255]));

        Self {
            jobs: vec![
                Job {
                    name: "floor".to_string(),
                    surface: Surface::new(4000.0, 4300.0),
                    tile: Tile::new(185.0, 598.0),
                    grout: Grout::new(3.0, 8.0, 1.52),
                    opening: None,
                    palette: Palette::default(),
                },
                Job {
                    name: "wall with window".to_string(),
                    surface: Surface::new(4300.0, 2500.0),
                    tile: Tile::new(200.0, 200.0),
                    grout: Grout::new(3.0, 6.5, 1.52),
                    opening: Some(Opening::new(800.0, 1018.0, 2100.0, 1200.0)),
                    palette: Palette::with_opening(window),
                },
                Job {
                    name: "wall 2".to_string(),
                    surface: Surface::new(4000.0, 2500.0),
                    tile: Tile::new(200.0, 200.0),
                    grout: Grout::new(3.0, 6.5, 1.64),
                    opening: None,
                    palette: Palette::default(),
                },
                Job {
                    name: "wall with door".to_string(),
                    surface: Surface::new(4300.0, 2500.0),
                    tile: Tile::new(200.0, 200.0),
                    grout: Grout::new(3.0, 6.5, 1.52),
                    opening: Some(Opening::new(800.0, 0.0, 800.0, 2000.0)),
                    palette: Palette::with_opening(door),
                },
                Job {
                    name: "wall 4".to_string(),
                    surface: Surface::new(4000.0, 2500.0),
                    tile: Tile::new(200.0, 200.0),
                    grout: Grout::new(3.0, 6.5, 1.52),
                    opening: None,
                    palette: Palette::default(),
                },
            ],
        }
    }
}
