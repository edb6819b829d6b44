//! Configurable material values.
//!
//! A value table is plain text, one `<kind> <value>` pair per line:
//!
//! ```text
//! # heavier chariots
//! rook 220
//! cannon 105
//! ```
//!
//! Blank lines and `#` comments are skipped. Kinds not listed keep their
//! default value. Values must lie within `±MAX_PIECE_VALUE`.

use std::str::FromStr;

use xiangqi_core::PieceKind;

use crate::error::PieceValueError;

/// Largest magnitude accepted for one piece kind.
pub const MAX_PIECE_VALUE: i32 = 20_000;

/// Material value per piece kind, indexed by [`PieceKind::index()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceValues {
    values: [i32; PieceKind::COUNT],
}

impl PieceValues {
    /// Default table.
    ///
    /// | Kind     | Value |
    /// |----------|-------|
    /// | Rook     |   200 |
    /// | Horse    |    90 |
    /// | Cannon   |   100 |
    /// | Elephant |    20 |
    /// | Advisor  |    20 |
    /// | King     | 10000 |
    /// | Pawn     |    10 |
    pub const DEFAULT: PieceValues = PieceValues {
        values: [200, 90, 100, 20, 20, 10_000, 10],
    };

    #[inline]
    pub const fn get(&self, kind: PieceKind) -> i32 {
        self.values[kind.index()]
    }

    #[inline]
    pub fn set(&mut self, kind: PieceKind, value: i32) {
        self.values[kind.index()] = value;
    }
}

impl Default for PieceValues {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for PieceValues {
    type Err = PieceValueError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut values = PieceValues::DEFAULT;

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let content = raw.split('#').next().unwrap_or("").trim();
            if content.is_empty() {
                continue;
            }

            let mut fields = content.split_whitespace();
            let Some(name) = fields.next() else {
                continue;
            };
            let kind = PieceKind::from_name(name).ok_or_else(|| PieceValueError::UnknownKind {
                line,
                name: name.to_string(),
            })?;
            let value_text = fields
                .next()
                .ok_or(PieceValueError::MissingValue { line })?;
            let wide = value_text
                .parse::<i64>()
                .map_err(|_| PieceValueError::InvalidValue {
                    line,
                    value: value_text.to_string(),
                })?;
            let value = i32::try_from(wide)
                .ok()
                .filter(|v| v.abs() <= MAX_PIECE_VALUE)
                .ok_or(PieceValueError::OutOfRange { line, value: wide })?;
            if let Some(extra) = fields.next() {
                return Err(PieceValueError::TrailingField {
                    line,
                    field: extra.to_string(),
                });
            }

            values.set(kind, value);
        }

        Ok(values)
    }
}
