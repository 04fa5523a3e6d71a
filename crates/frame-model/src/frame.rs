//! Thermal frame type and parsing.
//!
//! A frame is one 8x8 snapshot of dimensionless intensity readings, stored
//! row-major. Frames are immutable once built; the only way to obtain one
//! is through a length-checked constructor, so downstream algorithms never
//! see a malformed grid.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::{GridPos, ROW_LENGTH, SIZE};

/// Errors raised while building or parsing a frame.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("Invalid frame length: expected {expected} readings, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid reading {token:?} at position {position}")]
    InvalidReading { position: usize, token: String },

    #[error("Non-finite reading {value} at index {index}")]
    NonFiniteReading { index: usize, value: f64 },

    #[error("Cell ({column}, {row}) is outside the 8x8 grid")]
    OutOfBounds { column: usize, row: usize },

    #[error("Frame stream line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<FrameError>,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// One 8x8 grid of intensity readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Frame {
    cells: [f64; SIZE],
}

impl Frame {
    /// A frame with every reading set to zero.
    pub const ZERO: Frame = Frame { cells: [0.0; SIZE] };

    /// Build a frame from exactly `SIZE` readings.
    ///
    /// Every reading must be finite; `NaN` and infinities are rejected.
    pub fn new(cells: [f64; SIZE]) -> Result<Self, FrameError> {
        if let Some((index, &value)) = cells.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(FrameError::NonFiniteReading { index, value });
        }
        Ok(Self { cells })
    }

    /// Build a frame from a slice, rejecting anything but `SIZE` finite readings.
    pub fn from_slice(values: &[f64]) -> Result<Self, FrameError> {
        let cells: [f64; SIZE] = values
            .try_into()
            .map_err(|_| FrameError::InvalidLength {
                expected: SIZE,
                actual: values.len(),
            })?;
        Self::new(cells)
    }

    /// A frame of `fill` readings with the given cells overridden.
    ///
    /// Fails on positions off the grid and on non-finite readings.
    pub fn with_cells(fill: f64, hot: &[(GridPos, f64)]) -> Result<Self, FrameError> {
        let mut cells = [fill; SIZE];
        for (pos, value) in hot {
            if !pos.in_bounds() {
                return Err(FrameError::OutOfBounds {
                    column: pos.column,
                    row: pos.row,
                });
            }
            cells[pos.index()] = *value;
        }
        Self::new(cells)
    }

    /// Readings in flat row-major order.
    pub fn values(&self) -> &[f64; SIZE] {
        &self.cells
    }

    /// Reading at `(column, row)`, or `None` off the grid.
    pub fn get(&self, column: usize, row: usize) -> Option<f64> {
        let pos = GridPos::new(column, row);
        pos.in_bounds().then(|| self.cells[pos.index()])
    }

    /// Iterate `(address, reading)` pairs in flat order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (GridPos, f64)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &value)| (GridPos::from_index(i), value))
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<Vec<f64>> for Frame {
    type Error = FrameError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}

impl TryFrom<&[f64]> for Frame {
    type Error = FrameError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl From<Frame> for Vec<f64> {
    fn from(frame: Frame) -> Self {
        frame.cells.to_vec()
    }
}

/// Renders the frame as a human-readable table.
///
/// Each row is prefixed with the flat index of its first cell (`00`, `08`,
/// ... `56`), followed by one `%6.1f` column per reading. A blank line
/// closes the table.
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.cells.chunks(ROW_LENGTH).enumerate() {
            write!(f, "{:02}", row_idx * ROW_LENGTH)?;
            for value in row {
                write!(f, "{value:6.1}")?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

/// Parse a single frame.
///
/// Accepts a JSON array (`[0.0, 1.5, ...]`) or plain text with readings
/// separated by whitespace and/or commas.
pub fn parse_frame(text: &str) -> Result<Frame, FrameError> {
    let trimmed = text.trim();
    if trimmed.starts_with('[') {
        let values: Vec<f64> = serde_json::from_str(trimmed)?;
        return Frame::try_from(values);
    }

    let values = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<f64>().map_err(|_| FrameError::InvalidReading {
                position,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Frame::try_from(values)
}

/// Parse a frame stream: one frame per line, skipping blanks and `#` comments.
pub fn parse_frames(jsonl: &str) -> Result<Vec<Frame>, FrameError> {
    jsonl
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, content)| {
            parse_frame(content).map_err(|e| FrameError::AtLine {
                line,
                source: Box::new(e),
            })
        })
        .collect()
}

/// Serialize frames to JSONL format.
pub fn serialize_frames(frames: &[Frame]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for frame in frames {
        output.push_str(&serde_json::to_string(frame)?);
        output.push('\n');
    }
    Ok(output)
}
