//! Obstacle pattern catalog
//!
//! Each pattern is `PATTERN_WIDTH` columns of (top, bottom) cells. Patterns
//! are authored as byte strings, `r` rock, `a` ammo pickup, `b` blank, and
//! decoded at compile time.

use serde::{Deserialize, Serialize};

use super::state::Cell;
use crate::consts::{PATTERN_COUNT, PATTERN_WIDTH};

const TOP_SOURCE: [[u8; PATTERN_WIDTH]; PATTERN_COUNT] = [
    *b"rbbbbbrb", *b"bbabbrbr", *b"rabbrbrr", *b"babbrrbr", *b"brrbbbrb",
    *b"bbrbbbrb", *b"bbarbrbb", *b"rbbbbbrb", *b"rrbbbrbb",
];

const BOTTOM_SOURCE: [[u8; PATTERN_WIDTH]; PATTERN_COUNT] = [
    *b"bbbrbbbb", *b"bbrbbrbr", *b"bbrbbrbb", *b"babbrrbb", *b"bbbrbrbb",
    *b"bbbbrbbb", *b"rbbrbbrb", *b"bbbrbbbb", *b"bbbbrbbb",
];

const fn decode(tag: u8) -> Cell {
    match tag {
        b'r' => Cell::Rock,
        b'a' => Cell::AmmoPickup,
        _ => Cell::Empty,
    }
}

const fn decode_table(
    source: [[u8; PATTERN_WIDTH]; PATTERN_COUNT],
) -> [[Cell; PATTERN_WIDTH]; PATTERN_COUNT] {
    let mut table = [[Cell::Empty; PATTERN_WIDTH]; PATTERN_COUNT];
    let mut p = 0;
    while p < PATTERN_COUNT {
        let mut c = 0;
        while c < PATTERN_WIDTH {
            table[p][c] = decode(source[p][c]);
            c += 1;
        }
        p += 1;
    }
    table
}

static TOP: [[Cell; PATTERN_WIDTH]; PATTERN_COUNT] = decode_table(TOP_SOURCE);
static BOTTOM: [[Cell; PATTERN_WIDTH]; PATTERN_COUNT] = decode_table(BOTTOM_SOURCE);

/// Index into the catalog; always in `0..PATTERN_COUNT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PatternIndex(usize);

impl PatternIndex {
    /// Map any selector output onto the catalog by clamping to the last entry.
    ///
    /// The digit selector produces 0..=9 against nine patterns; 9 lands on 8.
    pub fn clamped(raw: usize) -> Self {
        Self(raw.min(PATTERN_COUNT - 1))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for PatternIndex {
    type Error = String;

    fn try_from(raw: usize) -> Result<Self, Self::Error> {
        if raw < PATTERN_COUNT {
            Ok(Self(raw))
        } else {
            Err(format!("pattern index {raw} out of range 0..{PATTERN_COUNT}"))
        }
    }
}

impl From<PatternIndex> for usize {
    fn from(index: PatternIndex) -> usize {
        index.0
    }
}

/// Column `column` of `pattern` as (top, bottom), or `None` past the
/// pattern's width
pub fn column(pattern: PatternIndex, column: usize) -> Option<(Cell, Cell)> {
    let top = TOP[pattern.0].get(column)?;
    let bottom = BOTTOM[pattern.0].get(column)?;
    Some((*top, *bottom))
}
