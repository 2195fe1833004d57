//! The per-face grid encoding: six independent 3×3 blocks of colors.

use std::array;

use crate::cube::BAND_CYCLES;
use crate::{Color, CubeState, Face};

/// A cube state stored as a 3×3 color grid per face, addressed directly by
/// `(face, row, col)` instead of a flattened index.
///
/// The move algorithm is the same as [`ArrayCube`](crate::ArrayCube)'s — the
/// same face-rotation transform and the same band-cycle tables — only the
/// addressing differs. The two must stay observably identical for every move
/// sequence; `lib.rs` holds the equivalence tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridCube {
    faces: [[[Color; 3]; 3]; 6],
}

impl GridCube {
    /// Creates the solved cube.
    pub fn solved() -> Self {
        Self {
            faces: array::from_fn(|face| [[Color::ALL[face]; 3]; 3]),
        }
    }

    fn at(&self, face: Face, row: u8, col: u8) -> Color {
        self.faces[face as usize][usize::from(row)][usize::from(col)]
    }

    fn at_mut(&mut self, face: Face, row: u8, col: u8) -> &mut Color {
        &mut self.faces[face as usize][usize::from(row)][usize::from(col)]
    }

    /// Rotates one face's grid a quarter turn clockwise in place.
    fn rotate_face(&mut self, face: Face) {
        let scratch = self.faces[face as usize];
        for row in 0..3 {
            for col in 0..3 {
                self.faces[face as usize][row][col] = scratch[2 - col][row];
            }
        }
    }
}

impl Default for GridCube {
    fn default() -> Self {
        Self::solved()
    }
}

impl CubeState for GridCube {
    fn sticker(&self, face: Face, row: u8, col: u8) -> Color {
        // Out-of-range rows and columns fail the grid's bounds checks.
        self.at(face, row, col)
    }

    fn turn_cw(&mut self, face: Face) {
        self.rotate_face(face);

        // Same aliasing discipline as the array backend: snapshot the whole
        // band cycle, then write it back shifted by one band.
        let cycle = &BAND_CYCLES[face as usize];
        let band: [Color; 12] = array::from_fn(|i| self.at(cycle[i].0, cycle[i].1, cycle[i].2));
        for (i, color) in band.into_iter().enumerate() {
            let (face, row, col) = cycle[(i + 3) % 12];
            *self.at_mut(face, row, col) = color;
        }
    }

    fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .zip(Face::ALL)
            .all(|(grid, face)| grid.iter().flatten().all(|&color| color == face.color()))
    }
}
