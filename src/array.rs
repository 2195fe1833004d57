//! The flat-array encoding: all 54 stickers in one ordered sequence.

use std::array;

use crate::cube::BAND_CYCLES;
use crate::{Color, CubeState, Face};

/// A cube state stored as one flat array of 54 colors, indexed by
/// `face ordinal * 9 + row * 3 + col`.
///
/// Equality and hashing are element-wise over the stickers, which is exactly
/// the cross-encoding definition of state equality since this encoding is
/// canonical (one array per logical state).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayCube {
    stickers: [Color; 54],
}

impl ArrayCube {
    /// Creates the solved cube: each face uniformly its canonical color.
    pub fn solved() -> Self {
        Self {
            stickers: array::from_fn(|i| Color::ALL[i / 9]),
        }
    }

    fn index(face: Face, row: u8, col: u8) -> usize {
        // Out-of-range rows and columns would silently alias into another
        // face's block, so they have to be rejected here rather than left to
        // the bounds check.
        assert!(row < 3 && col < 3, "sticker coordinate ({row}, {col}) out of range");
        face as usize * 9 + usize::from(row) * 3 + usize::from(col)
    }

    /// Rotates the 9 stickers of `face` a quarter turn clockwise in place:
    /// position `(row, col)` receives the color from `(2 - col, row)`.
    fn rotate_face(&mut self, face: Face) {
        let base = face as usize * 9;
        let scratch: [Color; 9] = array::from_fn(|i| self.stickers[base + i]);
        for row in 0..3 {
            for col in 0..3 {
                self.stickers[base + row * 3 + col] = scratch[(2 - col) * 3 + row];
            }
        }
    }
}

impl Default for ArrayCube {
    fn default() -> Self {
        Self::solved()
    }
}

impl CubeState for ArrayCube {
    fn sticker(&self, face: Face, row: u8, col: u8) -> Color {
        self.stickers[Self::index(face, row, col)]
    }

    fn turn_cw(&mut self, face: Face) {
        self.rotate_face(face);

        // Read the whole band cycle before writing any of it back, so that
        // the overlapping reads and writes can't alias.
        let cycle = &BAND_CYCLES[face as usize];
        let band: [Color; 12] =
            array::from_fn(|i| self.stickers[Self::index(cycle[i].0, cycle[i].1, cycle[i].2)]);
        for (i, color) in band.into_iter().enumerate() {
            let (face, row, col) = cycle[(i + 3) % 12];
            self.stickers[Self::index(face, row, col)] = color;
        }
    }

    fn is_solved(&self) -> bool {
        self.stickers
            .iter()
            .enumerate()
            .all(|(i, &color)| color == Color::ALL[i / 9])
    }
}

#[cfg(test)]
mod tests {
    use crate::{shuffle, ArrayCube, Color, CubeState, Face, Move};
    use itertools::iproduct;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn scrambled(seed: u64) -> ArrayCube {
        let mut cube = ArrayCube::solved();
        shuffle(&mut cube, 40, &mut Xoshiro256PlusPlus::seed_from_u64(seed));
        cube
    }

    #[test]
    fn front_turn_scenario() {
        // From solved, F carries Left's right column onto Up's bottom row.
        let mut cube = ArrayCube::solved();
        cube.apply(Move::F);
        for col in 0..3 {
            assert_eq!(cube.sticker(Face::Up, 2, col), Color::Green);
        }
        assert!(!cube.is_solved());
        for _ in 0..3 {
            cube.apply(Move::F);
        }
        assert_eq!(cube, ArrayCube::solved());
        assert!(cube.is_solved());
    }

    #[test]
    fn face_rotation_is_clockwise() {
        // A quarter turn must map the turning face's own sticker at
        // (2 - col, row) to (row, col), and leave the rest of that face's
        // stickers alone (the moved bands live on the adjacent faces).
        for face in Face::ALL {
            let before = scrambled(11);
            let mut after = before.clone();
            after.turn_cw(face);
            for (row, col) in iproduct!(0..3u8, 0..3u8) {
                assert_eq!(
                    after.sticker(face, row, col),
                    before.sticker(face, 2 - col, row),
                    "{face} face, sticker ({row}, {col})"
                );
            }
        }
    }

    #[test]
    fn quarter_turns_have_order_four() {
        for face in Face::ALL {
            let original = scrambled(3);
            let mut cube = original.clone();
            for turn in 1..=4 {
                cube.turn_cw(face);
                if turn < 4 {
                    assert_ne!(cube, original, "{face} turn {turn}");
                }
            }
            assert_eq!(cube, original, "{face}");
        }
    }

    #[test]
    fn primes_and_doubles_invert() {
        for base in [Move::U, Move::L, Move::F, Move::R, Move::B, Move::D] {
            let original = scrambled(base as u64);
            let prime = Move::from_index(base as usize + 1);
            let double = Move::from_index(base as usize + 2);

            let mut cube = original.clone();
            cube.apply(base);
            cube.apply(prime);
            assert_eq!(cube, original, "{base} then {prime}");

            cube.apply(double);
            cube.apply(double);
            assert_eq!(cube, original, "{double} twice");
        }
    }

    #[test]
    fn centers_never_move() {
        let mut cube = ArrayCube::solved();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(99);
        for _ in 0..100 {
            shuffle(&mut cube, 1, &mut rng);
            for face in Face::ALL {
                assert_eq!(cube.sticker(face, 1, 1), face.color());
            }
        }
    }

    #[test]
    fn moves_conserve_the_color_multiset() {
        let cube = scrambled(42);
        for color in Color::ALL {
            let count = iproduct!(Face::ALL, 0..3u8, 0..3u8)
                .filter(|&(face, row, col)| cube.sticker(face, row, col) == color)
                .count();
            assert_eq!(count, 9, "{color:?}");
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_sticker_panics() {
        ArrayCube::solved().sticker(Face::Up, 3, 0);
    }
}
