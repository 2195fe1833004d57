//! The bitboard encoding: one `u64` per face, packing eight one-hot color
//! bytes for the face's non-center stickers.
//!
//! Byte `i` of a face's word holds sticker `i` of that face's *ring*: the 8
//! moving stickers in clockwise order starting from the top-left corner, so
//! `(0,0) (0,1) (0,2) (1,2) (2,2) (2,1) (2,0) (1,0)` map to ring indices
//! 0..8. The center isn't stored at all; it can never move, so its color is
//! the face's canonical color, looked up rather than decoded.
//!
//! The payoff of the ring layout is that both halves of a move become cyclic
//! shifts. Rotating the turning face is a 16-bit rotate of its word (two
//! sticker slots separate a sticker from its clockwise neighbor). And each
//! 3-sticker band on an adjacent face is 3 consecutive ring slots, so the
//! four-way band transfer is: extract four 24-bit chunks, then write each
//! one to the next face's slot range, unchanged — the ring orientations line
//! up so no chunk ever needs reversing. The one wrinkle is a band that
//! covers ring indices 6, 7, 0 (a left-hand column), whose chunk wraps
//! around the end of the word; [`extract_band`] and [`insert_band`] handle
//! the wrap so the move code doesn't have to.

use std::array;

use crate::{Color, CubeState, Face};

use Face::*;

/// A 3-sticker chunk: 24 bits, low-aligned.
const BAND_MASK: u64 = 0xff_ffff;

/// Builds a `u64` consisting of 8 copies of `byte`.
fn repeat(byte: u8) -> u64 {
    0x0101_0101_0101_0101 * u64::from(byte)
}

/// The word of a face whose ring is entirely its own canonical color.
fn solved_word(face: Face) -> u64 {
    repeat(1 << face as u32)
}

/// Ring index of a non-center sticker, clockwise from the top-left corner.
///
/// Panics on the center and on out-of-range coordinates; neither has a ring
/// slot.
fn ring_index(row: u8, col: u8) -> u32 {
    match (row, col) {
        (0, 0) => 0,
        (0, 1) => 1,
        (0, 2) => 2,
        (1, 2) => 3,
        (2, 2) => 4,
        (2, 1) => 5,
        (2, 0) => 6,
        (1, 0) => 7,
        _ => panic!("sticker coordinate ({row}, {col}) has no ring index"),
    }
}

/// Extracts the 24-bit chunk covering the three ring slots starting at
/// `start`, low-aligned into the result.
///
/// A chunk starting at slot 6 covers slots 6, 7 and 0 and therefore wraps
/// around the end of the word; the rotate folds the wrapped byte back in.
pub(crate) fn extract_band(word: u64, start: u32) -> u64 {
    word.rotate_right(8 * start) & BAND_MASK
}

/// Returns `word` with the three ring slots starting at `start` replaced by
/// `band` (a low-aligned 24-bit chunk), wrapping the same way
/// [`extract_band`] does.
pub(crate) fn insert_band(word: u64, start: u32, band: u64) -> u64 {
    debug_assert_eq!(band & !BAND_MASK, 0);
    (word & !BAND_MASK.rotate_left(8 * start)) | band.rotate_left(8 * start)
}

/// The band cycle of each base move in ring terms: for each face adjacent to
/// the turning face, the ring slot its band starts at. A quarter turn moves
/// entry `i`'s chunk into entry `i + 1`'s slots (mod 4).
///
/// This is the same data as `BAND_CYCLES` in `cube.rs`, re-derived for the
/// ring layout: start 0 is a top row, 2 a right column, 4 a bottom row read
/// backwards, and 6 a left column (the wrapping case). Indexed by the
/// turning face's ordinal.
#[rustfmt::skip]
const RING_CYCLES: [[(Face, u32); 4]; 6] = [
    [(Front, 0), (Left, 0), (Back, 0), (Right, 0)],  // U
    [(Up, 6), (Front, 6), (Down, 6), (Back, 2)],     // L
    [(Up, 4), (Right, 6), (Down, 0), (Left, 2)],     // F
    [(Up, 2), (Back, 6), (Down, 2), (Front, 2)],     // R
    [(Up, 0), (Left, 6), (Down, 4), (Right, 2)],     // B
    [(Front, 4), (Right, 4), (Back, 4), (Left, 4)],  // D
];

/// A cube state stored as six 64-bit words, one per face.
///
/// The encoding is canonical (every logical state has exactly one word
/// array), so derived equality and hashing agree with element-wise sticker
/// equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitboardCube {
    words: [u64; 6],
}

impl BitboardCube {
    /// Creates the solved cube.
    pub fn solved() -> Self {
        Self {
            words: array::from_fn(|face| solved_word(Face::ALL[face])),
        }
    }
}

impl Default for BitboardCube {
    fn default() -> Self {
        Self::solved()
    }
}

impl CubeState for BitboardCube {
    fn sticker(&self, face: Face, row: u8, col: u8) -> Color {
        if (row, col) == (1, 1) {
            return face.color();
        }
        let byte = (self.words[face as usize] >> (8 * ring_index(row, col))) as u8;
        // One-hot by construction; anything else would be a corrupted word.
        Color::ALL[byte.trailing_zeros() as usize]
    }

    fn turn_cw(&mut self, face: Face) {
        // Rotating the face's own ring two slots clockwise sends byte `i`
        // to byte `i + 2`: a 16-bit rotate towards the high end of the word.
        self.words[face as usize] = self.words[face as usize].rotate_left(16);

        // Pull all four neighbours' chunks out before touching any word, so
        // a face that both gives and receives a band (they all do) can't see
        // a partial write.
        let cycle = &RING_CYCLES[face as usize];
        let bands: [u64; 4] =
            array::from_fn(|i| extract_band(self.words[cycle[i].0 as usize], cycle[i].1));
        for (i, band) in bands.into_iter().enumerate() {
            let (face, start) = cycle[(i + 1) % 4];
            self.words[face as usize] = insert_band(self.words[face as usize], start, band);
        }
    }

    fn is_solved(&self) -> bool {
        self.words
            .iter()
            .zip(Face::ALL)
            .all(|(&word, face)| word == solved_word(face))
    }
}
