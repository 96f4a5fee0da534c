//! Move-notation parsing.
//!
//! An algorithm is a whitespace-separated list of tokens such as `R`, `U'`
//! or `F2`. The first character names the move type (a face or axis), and
//! whatever follows is the modifier. A double turn (`X2`) is expanded into
//! two physical repetitions, each requesting the image keyed `X2`.

use std::fmt;

/// Modifier marking a double turn.
pub const DOUBLE: &str = "2";

/// Modifier marking a reverse (counter-clockwise) turn.
pub const REVERSE: &str = "'";

/// A single parsed move token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub move_type: char,
    pub modifier: String,
}

/// Lookup key for a move image: `(move type, modifier)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveKey {
    pub move_type: char,
    pub modifier: String,
}

impl Move {
    /// Split a non-empty token into move type and modifier.
    ///
    /// Returns `None` for an empty token.
    pub fn parse(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let move_type = chars.next()?;
        Some(Self {
            move_type,
            modifier: chars.as_str().to_string(),
        })
    }

    /// Number of physical repetitions this token stands for.
    ///
    /// Only a two-character token whose second character is `2` counts
    /// twice; a reverse modifier always counts once.
    pub fn repetitions(&self) -> usize {
        if self.modifier == DOUBLE { 2 } else { 1 }
    }

    /// The image key this move resolves through.
    pub fn key(&self) -> MoveKey {
        MoveKey {
            move_type: self.move_type,
            modifier: self.modifier.clone(),
        }
    }

    /// One lookup request per repetition.
    pub fn lookups(&self) -> impl Iterator<Item = MoveKey> + use<> {
        std::iter::repeat_n(self.key(), self.repetitions())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.move_type, self.modifier)
    }
}

impl MoveKey {
    pub fn new(move_type: char, modifier: impl Into<String>) -> Self {
        Self {
            move_type,
            modifier: modifier.into(),
        }
    }

    /// File stem of the asset backing this key, e.g. `R2` or `U'`.
    pub fn stem(&self) -> String {
        format!("{}{}", self.move_type, self.modifier)
    }

    pub fn is_double(&self) -> bool {
        self.modifier == DOUBLE
    }

    /// The same move with the modifier dropped.
    pub fn plain(&self) -> Self {
        Self::new(self.move_type, "")
    }
}

impl fmt::Display for MoveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.move_type, self.modifier)
    }
}

/// Parse an algorithm line into its moves, skipping empty tokens.
pub fn parse_algorithm(algorithm: &str) -> Vec<Move> {
    algorithm.split_whitespace().filter_map(Move::parse).collect()
}

/// Every image lookup an algorithm needs, in order, one per repetition.
pub fn lookups(algorithm: &str) -> impl Iterator<Item = MoveKey> + use<> {
    parse_algorithm(algorithm)
        .into_iter()
        .flat_map(|mv| mv.lookups())
}
