//! Benchmark profiles and utilities for narrowband.
//!
//! - [`parse_ascii_mask`] / [`format_field`]: the plain-text mask and field
//!   formats used by the `update_driver` example
//! - [`UpdateMode`]: the driver's synthetic update lists
//! - [`disk_mask`] / [`reference_level_set`]: deterministic inputs for
//!   benches and examples

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::error::Error;
use std::fmt;

use narrowband_core::{DenseField, DenseMask, GridError};
use narrowband_levelset::{BinaryMaskAdaptor, LevelSetConfig, SparseLevelSet};

// ── Mask text format ───────────────────────────────────────────────

/// Errors from [`parse_ascii_mask`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MaskParseError {
    /// The text has no non-blank lines.
    Empty,
    /// A row's width differs from the first row's.
    Ragged {
        /// 1-based line number of the offending row.
        line: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        actual: usize,
    },
    /// The parsed rows do not form a valid mask.
    Grid(GridError),
}

impl fmt::Display for MaskParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "mask text has no rows"),
            Self::Ragged {
                line,
                expected,
                actual,
            } => write!(f, "line {line} has {actual} pixels, expected {expected}"),
            Self::Grid(e) => write!(f, "invalid mask: {e}"),
        }
    }
}

impl Error for MaskParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for MaskParseError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Parse a 2D mask: one row per line, `0` or `.` for background, any other
/// non-whitespace character for foreground. Blank lines are skipped and
/// whitespace within a line is ignored.
///
/// # Examples
///
/// ```
/// use narrowband_bench::parse_ascii_mask;
/// use narrowband_core::MaskReader;
///
/// let mask = parse_ascii_mask("...\n.#.\n...\n").unwrap();
/// assert_eq!(mask.dimensions(), &[3, 3]);
/// assert_eq!(mask.pixel_at(&[1, 1]), Some(1));
/// assert_eq!(mask.pixel_at(&[0, 1]), Some(0));
/// ```
pub fn parse_ascii_mask(text: &str) -> Result<DenseMask, MaskParseError> {
    let mut data = Vec::new();
    let mut width = None;
    let mut rows = 0u32;
    for (i, line) in text.lines().enumerate() {
        let row: Vec<u8> = line
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| u8::from(!matches!(c, '0' | '.')))
            .collect();
        if row.is_empty() {
            continue;
        }
        match width {
            None => width = Some(row.len()),
            Some(w) if w != row.len() => {
                return Err(MaskParseError::Ragged {
                    line: i + 1,
                    expected: w,
                    actual: row.len(),
                })
            }
            Some(_) => {}
        }
        data.extend(row);
        rows += 1;
    }
    let width = width.ok_or(MaskParseError::Empty)?;
    Ok(DenseMask::new(&[rows, width as u32], data)?)
}

/// Render a field as whitespace-separated rows, one line per row of the
/// last axis.
pub fn format_field(field: &DenseField) -> String {
    let mut out = String::new();
    for row in field.rows() {
        let line: Vec<String> = row.iter().map(|v| format!("{v}")).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

// ── Driver update lists ────────────────────────────────────────────

/// The synthetic update patterns of the `update_driver` example.
///
/// Negative updates enlarge the interior, so [`Grow`](Self::Grow) pushes
/// the front out by one layer and [`Shrink`](Self::Shrink) pulls it in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateMode {
    /// Mode `0`: every entry `+1.0`.
    Shrink,
    /// Any mode other than `0` or `2`: bands of ten `-1.0` then ten `+1.0`.
    Alternating,
    /// Mode `2`: every entry `-1.0`.
    Grow,
}

impl UpdateMode {
    /// Interpret a command-line mode argument. Text that is not an integer
    /// reads as `0`.
    pub fn from_arg(arg: &str) -> Self {
        match arg.trim().parse::<i64>().unwrap_or(0) {
            0 => Self::Shrink,
            2 => Self::Grow,
            _ => Self::Alternating,
        }
    }

    /// The update list for a zero layer of `len` nodes.
    pub fn updates(self, len: usize) -> Vec<f64> {
        (0..len)
            .map(|k| match self {
                Self::Shrink => 1.0,
                Self::Grow => -1.0,
                Self::Alternating if k % 20 < 10 => -1.0,
                Self::Alternating => 1.0,
            })
            .collect()
    }
}

// ── Reference inputs ───────────────────────────────────────────────

/// A `size x size` mask holding a centred filled disk.
pub fn disk_mask(size: u32, radius: f64) -> DenseMask {
    let centre = (f64::from(size) - 1.0) / 2.0;
    let data = (0..size)
        .flat_map(|r| (0..size).map(move |c| (r, c)))
        .map(|(r, c)| {
            let (dr, dc) = (f64::from(r) - centre, f64::from(c) - centre);
            u8::from(dr * dr + dc * dc <= radius * radius)
        })
        .collect();
    // size x size elements by construction
    DenseMask::new(&[size, size], data).unwrap_or_else(|_| unreachable!())
}

/// A level set built from a centred disk covering a third of a
/// `size x size` grid, with the default configuration.
pub fn reference_level_set(size: u32) -> SparseLevelSet {
    let mask = disk_mask(size, f64::from(size) / 3.0);
    BinaryMaskAdaptor::new(LevelSetConfig::default())
        .and_then(|adaptor| adaptor.initialize(&mask))
        .unwrap_or_else(|e| panic!("reference disk of size {size} did not initialize: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use narrowband_core::MaskReader;

    #[test]
    fn parse_skips_blank_lines_and_whitespace() {
        let mask = parse_ascii_mask("\n0 0 0 0\n0 1 1 0\n\n0 0 0 0\n").unwrap();
        assert_eq!(mask.dimensions(), &[3, 4]);
        assert_eq!(mask.foreground_count(), 2);
        assert_eq!(mask.pixel_at(&[1, 2]), Some(1));
    }

    #[test]
    fn parse_rejects_ragged_and_empty() {
        assert_eq!(
            parse_ascii_mask("...\n..\n"),
            Err(MaskParseError::Ragged {
                line: 2,
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(parse_ascii_mask("\n  \n"), Err(MaskParseError::Empty));
    }

    #[test]
    fn field_formats_row_per_line() {
        let field = DenseField::new(vec![2, 2], vec![-1.0, 0.5, 2.0, 0.0]).unwrap();
        assert_eq!(format_field(&field), "-1 0.5\n2 0\n");
    }

    #[test]
    fn mode_arguments() {
        assert_eq!(UpdateMode::from_arg("0"), UpdateMode::Shrink);
        assert_eq!(UpdateMode::from_arg("2"), UpdateMode::Grow);
        assert_eq!(UpdateMode::from_arg("1"), UpdateMode::Alternating);
        assert_eq!(UpdateMode::from_arg("7"), UpdateMode::Alternating);
        assert_eq!(UpdateMode::from_arg("abc"), UpdateMode::Shrink);
    }

    #[test]
    fn alternating_bands_have_period_twenty() {
        let u = UpdateMode::Alternating.updates(45);
        assert!(u[..10].iter().all(|&v| v == -1.0));
        assert!(u[10..20].iter().all(|&v| v == 1.0));
        assert_eq!(u[20], -1.0);
        assert_eq!(u[44], -1.0);
        assert_eq!(UpdateMode::Grow.updates(3), vec![-1.0; 3]);
    }

    #[test]
    fn reference_level_set_has_a_zero_layer() {
        let ls = reference_level_set(32);
        assert!(!ls.zero_layer().is_empty());
    }
}
