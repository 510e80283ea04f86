//! Net text in and out, and the display palette.
//!
//! Net format
//! - 9 non-empty lines of whitespace-separated colour labels: Top as three
//!   rows of 3, then three rows of 12 (Left, Front, Right, Back side by side),
//!   then Bottom as three rows of 3. 54 labels in total.
//! - Lines starting with `#` are comments.
//!
//! ```text
//!       U U U
//!       U U U
//!       U U U
//! L L L F F F R R R B B B
//! L L L F F F R R R B B B
//! L L L F F F R R R B B B
//!       D D D
//!       D D D
//!       D D D
//! ```
//!
//! Palette
//! - The 6 distinct labels sorted alphabetically; label `k` has code `k + 1`.
//!   Parsed states use these codes. Painting a canonical form through the
//!   palette is for display only; comparisons use the digit string.

use std::collections::BTreeSet;
use std::fmt;

use crate::canon::CanonicalForm;
use crate::state::{CubeError, CubeState, COLORS, STICKERS};

/// Net token index of each internal sticker (Face order, row-major).
pub const NET_POSITIONS: [usize; STICKERS] = [
    12, 13, 14, 24, 25, 26, 36, 37, 38, // Front
    9, 10, 11, 21, 22, 23, 33, 34, 35, // Left
    15, 16, 17, 27, 28, 29, 39, 40, 41, // Right
    18, 19, 20, 30, 31, 32, 42, 43, 44, // Back
    0, 1, 2, 3, 4, 5, 6, 7, 8, // Top
    45, 46, 47, 48, 49, 50, 51, 52, 53, // Bottom
];

/// Tokens per net line.
pub const NET_ROW_LENGTHS: [usize; 9] = [3, 3, 3, 12, 12, 12, 3, 3, 3];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    LineCount { found: usize },
    TokenCount { found: usize },
    Palette { found: usize },
    UnknownLabel { label: String },
    UnknownSymbol { symbol: u8 },
    Cube(CubeError),
    InBlock { block: usize, error: Box<LayoutError> },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LineCount { found } => write!(
                f,
                "expected {} net lines, found {found}",
                NET_ROW_LENGTHS.len()
            ),
            Self::TokenCount { found } => {
                write!(f, "expected {STICKERS} labels, found {found}")
            }
            Self::Palette { found } => {
                write!(f, "expected {COLORS} distinct labels, found {found}")
            }
            Self::UnknownLabel { label } => write!(f, "label {label:?} is not in the palette"),
            Self::UnknownSymbol { symbol } => write!(f, "symbol {symbol} has no palette label"),
            Self::Cube(e) => write!(f, "{e}"),
            Self::InBlock { block, error } => write!(f, "net #{block}: {error}"),
        }
    }
}

impl std::error::Error for LayoutError {}

impl From<CubeError> for LayoutError {
    fn from(e: CubeError) -> Self {
        Self::Cube(e)
    }
}

/// Alphabetically sorted colour labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    labels: Vec<String>,
}

impl Palette {
    /// Collect the distinct labels of `tokens`; exactly 6 are required.
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<Self, LayoutError> {
        let set: BTreeSet<&str> = tokens.into_iter().collect();
        if set.len() != COLORS {
            return Err(LayoutError::Palette { found: set.len() });
        }
        Ok(Self {
            labels: set.into_iter().map(str::to_owned).collect(),
        })
    }

    /// The usual sticker colours: blue, green, orange, red, white, yellow.
    pub fn standard() -> Self {
        Self {
            labels: ["B", "G", "O", "R", "W", "Y"].map(String::from).to_vec(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Code (`1..=6`) of a label.
    pub fn code(&self, label: &str) -> Option<u8> {
        self.labels
            .binary_search_by(|l| l.as_str().cmp(label))
            .ok()
            .map(|i| i as u8 + 1)
    }

    /// Label of a code or canonical symbol (`1..=6`).
    pub fn label(&self, symbol: u8) -> Option<&str> {
        let i = usize::from(symbol).checked_sub(1)?;
        self.labels.get(i).map(String::as_str)
    }

    /// Labels for a sequence of codes.
    pub fn paint(&self, symbols: &[u8]) -> Result<Vec<&str>, LayoutError> {
        symbols
            .iter()
            .map(|&s| self.label(s).ok_or(LayoutError::UnknownSymbol { symbol: s }))
            .collect()
    }

    /// Codes for a sequence of labels.
    pub fn encode(&self, labels: &[&str]) -> Result<Vec<u8>, LayoutError> {
        labels
            .iter()
            .map(|&l| {
                self.code(l).ok_or_else(|| LayoutError::UnknownLabel {
                    label: l.to_owned(),
                })
            })
            .collect()
    }

    /// A canonical form spelled in this palette, e.g. `BBGORW…`.
    pub fn display(&self, form: &CanonicalForm) -> Result<String, LayoutError> {
        Ok(self.paint(form.symbols())?.concat())
    }
}

/// A parsed net: its palette and the palette-coded state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Net {
    pub palette: Palette,
    pub state: CubeState,
}

impl Net {
    /// Net text of the state through its own palette.
    pub fn render(&self) -> Result<String, LayoutError> {
        render_net(&self.palette.paint(&self.state.flatten())?)
    }
}

/// Parse one net (see module docs).
pub fn parse_net(text: &str) -> Result<Net, LayoutError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect();
    if lines.len() != NET_ROW_LENGTHS.len() {
        return Err(LayoutError::LineCount { found: lines.len() });
    }
    let tokens: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
    if tokens.len() != STICKERS {
        return Err(LayoutError::TokenCount {
            found: tokens.len(),
        });
    }
    let palette = Palette::from_tokens(tokens.iter().copied())?;
    let ordered: Vec<&str> = NET_POSITIONS.iter().map(|&p| tokens[p]).collect();
    let state = CubeState::from_stickers(&palette.encode(&ordered)?)?;
    Ok(Net { palette, state })
}

/// Parse several nets separated by blank lines or `Form …` header lines.
///
/// Headed nets may follow each other without blank lines. `#` comments are
/// skipped.
pub fn parse_nets(text: &str) -> Result<Vec<Net>, LayoutError> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }
        if line.starts_with('#') {
            continue;
        }
        if line.split_whitespace().next() == Some("Form") {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push(line);
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
        .iter()
        .enumerate()
        .map(|(block, lines)| {
            parse_net(&lines.join("\n")).map_err(|e| LayoutError::InBlock {
                block,
                error: Box::new(e),
            })
        })
        .collect()
}

/// Lay out 54 labels (internal sticker order) as net text.
pub fn render_net(labels: &[&str]) -> Result<String, LayoutError> {
    if labels.len() != STICKERS {
        return Err(LayoutError::TokenCount {
            found: labels.len(),
        });
    }
    let mut net = vec![""; STICKERS];
    for (i, &p) in NET_POSITIONS.iter().enumerate() {
        net[p] = labels[i];
    }
    let mut out = String::new();
    let mut start = 0;
    for len in NET_ROW_LENGTHS {
        out.push_str(&net[start..start + len].join(" "));
        out.push('\n');
        start += len;
    }
    Ok(out)
}
