use std::collections::BTreeMap;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use cube_engine::{
    parse_moves, render, shuffle, ArrayCube, BitboardCube, Color, CubeState, Face, GridCube,
};
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

#[derive(Clone, Copy, ValueEnum)]
enum Backend {
    Array,
    Grid,
    Bitboard,
}

#[derive(Parser)]
struct Options {
    /// Which state encoding to drive. They all behave identically; the
    /// choice only exists to exercise them.
    #[arg(long, value_enum, default_value = "array")]
    backend: Backend,
    /// Apply this many uniformly random moves before the given sequence.
    #[arg(long, default_value_t = 0)]
    scramble: usize,
    /// Seed for the scramble, for reproducibility. Random if omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Dump the final state as JSON instead of an unfolded net.
    #[arg(long)]
    json: bool,
    /// Moves to apply, in standard notation (e.g. "R U R' U2").
    moves: Vec<String>,
}

#[derive(Serialize)]
struct Dump {
    solved: bool,
    faces: BTreeMap<String, [[Color; 3]; 3]>,
}

fn main() -> anyhow::Result<()> {
    let options = Options::parse();
    match options.backend {
        Backend::Array => run(ArrayCube::solved(), &options),
        Backend::Grid => run(GridCube::solved(), &options),
        Backend::Bitboard => run(BitboardCube::solved(), &options),
    }
}

fn run(mut cube: impl CubeState, options: &Options) -> anyhow::Result<()> {
    if options.scramble > 0 {
        let seed = options.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);
        let scramble = shuffle(&mut cube, options.scramble, &mut rng);
        println!(
            "scramble (seed {seed}): {}\n",
            scramble.iter().join(" ")
        );
    }
    for word in &options.moves {
        for mv in parse_moves(word).with_context(|| format!("couldn't parse {word:?}"))? {
            cube.apply(mv);
        }
    }

    if options.json {
        let dump = Dump {
            solved: cube.is_solved(),
            faces: Face::ALL
                .into_iter()
                .map(|face| {
                    let grid = std::array::from_fn(|row| {
                        std::array::from_fn(|col| cube.sticker(face, row as u8, col as u8))
                    });
                    (face.to_string(), grid)
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&dump)?);
    } else {
        print!("{}", render(&cube));
        println!("\nsolved: {}", cube.is_solved());
    }
    Ok(())
}
