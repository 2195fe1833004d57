//! A 3×3×3 twisty-puzzle engine: the 54-sticker state, the 18 face-turn
//! moves, and three interchangeable encodings of the state.
//!
//! The encodings — a flat 54-color array ([`ArrayCube`]), a per-face 3×3
//! grid ([`GridCube`]) and a packed 64-bit-per-face bitboard
//! ([`BitboardCube`]) — all implement [`CubeState`] and must be
//! indistinguishable through it: the same move sequence from solved yields
//! the same color at every coordinate. The tests at the bottom of this file
//! hold them to that.
//!
//! There is deliberately no solver here: the crate only applies moves and
//! answers queries about the resulting state.

mod array;
mod bitboard;
mod cube;
mod grid;

pub use array::*;
pub use bitboard::*;
pub use cube::*;
pub use grid::*;

#[cfg(test)]
mod tests {
    use crate::{shuffle, ArrayCube, BitboardCube, Color, CubeState, Face, GridCube, Move};
    use itertools::iproduct;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn assert_same_state(a: &impl CubeState, b: &impl CubeState, context: &str) {
        for (face, row, col) in iproduct!(Face::ALL, 0..3u8, 0..3u8) {
            assert_eq!(
                a.sticker(face, row, col),
                b.sticker(face, row, col),
                "{context}: {face} ({row}, {col})"
            );
        }
    }

    /// The primary correctness property: all three backends, fed identical
    /// random sequences from solved, agree at all 54 coordinates after every
    /// single move.
    #[test]
    fn cross_backend_equivalence() {
        for seed in 0..8 {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
            let mut array = ArrayCube::solved();
            let mut grid = GridCube::solved();
            let mut bits = BitboardCube::solved();
            for step in 0..50 {
                let mv = shuffle(&mut array, 1, &mut rng)[0];
                grid.apply(mv);
                bits.apply(mv);
                let context = format!("seed {seed}, step {step} ({mv})");
                assert_same_state(&grid, &array, &context);
                assert_same_state(&bits, &array, &context);
                assert_eq!(grid.is_solved(), array.is_solved(), "{context}");
                assert_eq!(bits.is_solved(), array.is_solved(), "{context}");
            }
        }
    }

    /// Every move followed by its inverse is the identity, on every backend:
    /// `m m'`, `m2 m2`, and four base moves in a row all cancel.
    #[test]
    fn inverse_laws() {
        fn check<C: CubeState + Clone + PartialEq + std::fmt::Debug + Default>() {
            let mut original = C::default();
            shuffle(&mut original, 30, &mut Xoshiro256PlusPlus::seed_from_u64(17));
            for base in [Move::U, Move::L, Move::F, Move::R, Move::B, Move::D] {
                let prime = Move::from_index(base as usize + 1);
                let double = Move::from_index(base as usize + 2);

                let mut cube = original.clone();
                cube.apply(base);
                cube.apply(prime);
                assert_eq!(cube, original, "{base} {prime}");

                cube.apply(double);
                cube.apply(double);
                assert_eq!(cube, original, "{double} {double}");

                for _ in 0..4 {
                    cube.apply(base);
                }
                assert_eq!(cube, original, "{base} four times");
            }
        }
        check::<ArrayCube>();
        check::<GridCube>();
        check::<BitboardCube>();
    }

    /// A move is a permutation: it relocates stickers but never changes the
    /// color census, and never touches a center.
    #[test]
    fn permutation_invariants() {
        fn check<C: CubeState + Default>(name: &str) {
            let mut cube = C::default();
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(23);
            for step in 0..60 {
                shuffle(&mut cube, 1, &mut rng);
                for face in Face::ALL {
                    assert_eq!(
                        cube.sticker(face, 1, 1),
                        face.color(),
                        "{name}, step {step}: {face} center moved"
                    );
                }
                for color in Color::ALL {
                    let count = iproduct!(Face::ALL, 0..3u8, 0..3u8)
                        .filter(|&(face, row, col)| cube.sticker(face, row, col) == color)
                        .count();
                    assert_eq!(count, 9, "{name}, step {step}: {color:?} census");
                }
            }
        }
        check::<ArrayCube>("array");
        check::<GridCube>("grid");
        check::<BitboardCube>("bitboard");
    }

    /// `is_solved` holds only for the exact solved assignment: one quarter
    /// turn falsifies it, three more of the same restore it.
    #[test]
    fn solved_predicate() {
        fn check<C: CubeState + Default>(name: &str) {
            let mut cube = C::default();
            assert!(cube.is_solved(), "{name}");
            cube.apply(Move::F);
            assert!(!cube.is_solved(), "{name}");
            for _ in 0..3 {
                cube.apply(Move::F);
            }
            assert!(cube.is_solved(), "{name}");
        }
        check::<ArrayCube>("array");
        check::<GridCube>("grid");
        check::<BitboardCube>("bitboard");
    }
}
