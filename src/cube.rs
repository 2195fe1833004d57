//! The shared data model: colors, faces, moves and the [`CubeState`]
//! capability that all three encodings implement.

use std::fmt::{self, Display, Formatter, Write};
use std::str::FromStr;

use anyhow::bail;
use itertools::iproduct;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The color painted on one sticker. The declaration order matches [`Face`]:
/// `Color::ALL[face as usize]` is the color of that face's center, and
/// therefore the color of the whole face when solved.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Color {
    White,
    Green,
    Red,
    Blue,
    Orange,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Green,
        Color::Red,
        Color::Blue,
        Color::Orange,
        Color::Yellow,
    ];
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Color::White => "W",
            Color::Green => "G",
            Color::Red => "R",
            Color::Blue => "B",
            Color::Orange => "O",
            Color::Yellow => "Y",
        })
    }
}

/// One of the six sides of the cube, in a fixed frame: a face never rotates
/// relative to the cube, only the sticker colors on it change. Its center
/// sticker always shows [`Face::color`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Face {
    Up,
    Left,
    Front,
    Right,
    Back,
    Down,
}

use Face::*;

impl Face {
    pub const ALL: [Face; 6] = [Up, Left, Front, Right, Back, Down];

    /// The canonical color of this face: the color of its fixed center, and
    /// of all 9 of its stickers when the cube is solved.
    pub fn color(self) -> Color {
        Color::ALL[self as usize]
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Up => "up",
            Left => "left",
            Front => "front",
            Right => "right",
            Back => "back",
            Down => "down",
        })
    }
}

/// One of the 18 face turns, in the fixed order `U U' U2 L L' L2 F F' F2 R
/// R' R2 B B' B2 D D' D2` (so `Move::ALL[i]` is the move with index `i`).
///
/// Each move permutes the 54 stickers; none of them ever touches a center.
/// A prime move is the group inverse of its base move and a double move is
/// the base move squared, both *by definition*: [`CubeState::apply`] expands
/// them into repeated quarter turns rather than deriving separate
/// permutations, so the inverse and order-4 laws hold by construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Move {
    U,
    UPrime,
    U2,
    L,
    LPrime,
    L2,
    F,
    FPrime,
    F2,
    R,
    RPrime,
    R2,
    B,
    BPrime,
    B2,
    D,
    DPrime,
    D2,
}

impl Move {
    #[rustfmt::skip]
    pub const ALL: [Move; 18] = [
        Move::U, Move::UPrime, Move::U2,
        Move::L, Move::LPrime, Move::L2,
        Move::F, Move::FPrime, Move::F2,
        Move::R, Move::RPrime, Move::R2,
        Move::B, Move::BPrime, Move::B2,
        Move::D, Move::DPrime, Move::D2,
    ];

    /// Returns the move with the given index in the fixed 0..18 order.
    ///
    /// Panics if `index >= 18`; an out-of-range index is a caller bug, not a
    /// recoverable condition.
    pub fn from_index(index: usize) -> Move {
        Move::ALL[index]
    }

    /// The face whose layer this move turns.
    pub fn face(self) -> Face {
        Face::ALL[self as usize / 3]
    }

    /// How many clockwise quarter turns of [`Move::face`] this move expands
    /// to: 1 for the base move, 2 for the double, 3 for the prime (a
    /// counter-clockwise turn is three clockwise ones).
    pub fn quarter_turns(self) -> u32 {
        match self as usize % 3 {
            0 => 1,
            1 => 3,
            _ => 2,
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let face = match self.face() {
            Up => 'U',
            Left => 'L',
            Front => 'F',
            Right => 'R',
            Back => 'B',
            Down => 'D',
        };
        f.write_char(face)?;
        match self.quarter_turns() {
            1 => Ok(()),
            3 => f.write_char('\''),
            _ => f.write_char('2'),
        }
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for mv in Move::ALL {
            if s == mv.to_string() {
                return Ok(mv);
            }
        }
        bail!("unknown move {s:?}; expected standard notation like \"R\", \"R'\" or \"R2\"")
    }
}

/// Parses a whitespace-separated sequence of moves in standard notation,
/// e.g. `"R U R' U2"`.
pub fn parse_moves(s: &str) -> anyhow::Result<Vec<Move>> {
    s.split_whitespace().map(str::parse).collect()
}

/// The band cycle for each base move: the 12 sticker coordinates on the four
/// faces adjacent to the turning face, listed so that a quarter turn moves
/// the color at entry `i` to entry `i + 3` (mod 12). Indexed by the turning
/// face's ordinal.
///
/// Each group of three is one 3-sticker band; the groups are in the order
/// the turn carries them around, which is what makes the transfer direction
/// match the clockwise rotation of the face itself. The within-band order
/// encodes the orientation a band arrives in on its new face, which is where
/// hand-derived move tables usually go wrong; the cross-backend equivalence
/// tests in `lib.rs` pin all of this down.
#[rustfmt::skip]
pub(crate) const BAND_CYCLES: [[(Face, u8, u8); 12]; 6] = [
    // U: the top rows of Front, Left, Back, Right.
    [
        (Front, 0, 0), (Front, 0, 1), (Front, 0, 2),
        (Left, 0, 0), (Left, 0, 1), (Left, 0, 2),
        (Back, 0, 0), (Back, 0, 1), (Back, 0, 2),
        (Right, 0, 0), (Right, 0, 1), (Right, 0, 2),
    ],
    // L: the left columns of Up, Front and Down, and Back's right column
    // (reversed: Back faces the other way).
    [
        (Up, 0, 0), (Up, 1, 0), (Up, 2, 0),
        (Front, 0, 0), (Front, 1, 0), (Front, 2, 0),
        (Down, 0, 0), (Down, 1, 0), (Down, 2, 0),
        (Back, 2, 2), (Back, 1, 2), (Back, 0, 2),
    ],
    // F: Up's bottom row, Right's left column, Down's top row, Left's right
    // column.
    [
        (Up, 2, 0), (Up, 2, 1), (Up, 2, 2),
        (Right, 0, 0), (Right, 1, 0), (Right, 2, 0),
        (Down, 0, 2), (Down, 0, 1), (Down, 0, 0),
        (Left, 2, 2), (Left, 1, 2), (Left, 0, 2),
    ],
    // R: the right columns of Up, Front and Down, and Back's left column
    // (reversed).
    [
        (Up, 0, 2), (Up, 1, 2), (Up, 2, 2),
        (Back, 2, 0), (Back, 1, 0), (Back, 0, 0),
        (Down, 0, 2), (Down, 1, 2), (Down, 2, 2),
        (Front, 0, 2), (Front, 1, 2), (Front, 2, 2),
    ],
    // B: Up's top row, Left's left column, Down's bottom row, Right's right
    // column.
    [
        (Up, 0, 0), (Up, 0, 1), (Up, 0, 2),
        (Left, 2, 0), (Left, 1, 0), (Left, 0, 0),
        (Down, 2, 2), (Down, 2, 1), (Down, 2, 0),
        (Right, 0, 2), (Right, 1, 2), (Right, 2, 2),
    ],
    // D: the bottom rows of Front, Right, Back, Left.
    [
        (Front, 2, 0), (Front, 2, 1), (Front, 2, 2),
        (Right, 2, 0), (Right, 2, 1), (Right, 2, 2),
        (Back, 2, 0), (Back, 2, 1), (Back, 2, 2),
        (Left, 2, 0), (Left, 2, 1), (Left, 2, 2),
    ],
];

/// One encoding of the cube's 54-sticker state.
///
/// The three implementations ([`ArrayCube`](crate::ArrayCube),
/// [`GridCube`](crate::GridCube), [`BitboardCube`](crate::BitboardCube))
/// store the state differently but must be indistinguishable through this
/// interface: fed the same move sequence from solved, they report the same
/// color at every coordinate. That equivalence is enforced by shared tests,
/// not by any shared move code.
pub trait CubeState {
    /// The color at `(face, row, col)`, with row and col in `0..3`.
    ///
    /// Pure and total over valid coordinates; out-of-range coordinates are a
    /// caller contract violation and panic rather than returning an
    /// undefined color.
    fn sticker(&self, face: Face, row: u8, col: u8) -> Color;

    /// Turns the given face's layer one quarter turn clockwise (as seen
    /// looking at that face). This is the only move primitive a backend
    /// defines; everything else is built from it.
    fn turn_cw(&mut self, face: Face);

    /// Applies one of the 18 moves, in place. Total over the move alphabet.
    fn apply(&mut self, mv: Move) {
        for _ in 0..mv.quarter_turns() {
            self.turn_cw(mv.face());
        }
    }

    /// Whether every sticker shows its face's canonical color.
    ///
    /// Backends override this with a direct comparison against their solved
    /// representation; the default exists so the predicate's meaning is
    /// written down exactly once.
    fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            iproduct!(0..3, 0..3).all(|(row, col)| self.sticker(face, row, col) == face.color())
        })
    }
}

/// Applies `count` moves drawn uniformly at random from the 18-move alphabet
/// and returns the sequence that was applied.
///
/// Randomness is injected rather than global so that scrambles are
/// reproducible from a seed, in tests and in the CLI alike.
pub fn shuffle(state: &mut impl CubeState, count: usize, rng: &mut impl Rng) -> Vec<Move> {
    (0..count)
        .map(|_| {
            let mv = Move::ALL[rng.random_range(0..Move::ALL.len())];
            state.apply(mv);
            mv
        })
        .collect()
}

/// Renders the state as an unfolded net: Up on top, then Left, Front, Right
/// and Back in a row, then Down, one letter per sticker.
pub fn render(state: &impl CubeState) -> String {
    let mut out = String::new();
    let face_row = |face: Face, row: u8| -> String {
        let mut s = String::new();
        for col in 0..3 {
            if col != 0 {
                s.push(' ');
            }
            write!(s, "{}", state.sticker(face, row, col)).unwrap();
        }
        s
    };
    for row in 0..3 {
        writeln!(out, "        {}", face_row(Up, row)).unwrap();
    }
    out.push('\n');
    for row in 0..3 {
        let middle: Vec<_> = [Left, Front, Right, Back]
            .into_iter()
            .map(|face| face_row(face, row))
            .collect();
        writeln!(out, "{}", middle.join("   ")).unwrap();
    }
    out.push('\n');
    for row in 0..3 {
        writeln!(out, "        {}", face_row(Down, row)).unwrap();
    }
    out
}
