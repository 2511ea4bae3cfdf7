/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Jadium.

Jadium is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Jadium is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Jadium. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! # Examples
//!
//! Generate a 5×5 puzzle with symmetric clues and print it with its description string:
//!
//! ```text
//! $ jadium -W 5 -H 5
//! 25,,,,21,,,18,,,,14,,8,,,,12,,,2,,,,7
//! 25  .  .  . 21
//!  .  . 18  .  .
//!  . 14  .  8  .
//!  .  . 12  .  .
//!  2  .  .  .  7
//! ```
//!
//! Solve a puzzle given by its description string:
//!
//! ```text
//! $ jadium -W 4 -H 4 --solve ',,4,3,,,,,,7,,9,,,,'
//! 16  5  4  3
//! 15  6  1  2
//! 14  7  8  9
//! 13 12 11 10
//! ```

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::time::Instant;

use crate::generator::puzzles::{self, Difficulty, Pattern, PuzzleParameters};
use crate::grid::Grid;
use crate::solver::{self, SolveOptions};

/// Generate and solve Hamilton number-path puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// List the parameter presets
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Generate from a named preset instead of the size and pattern options
    #[arg(short, long)]
    preset: Option<String>,

    /// Grid width
    #[arg(short = 'W', long, default_value_t = 7)]
    width: usize,

    /// Grid height
    #[arg(short = 'H', long, default_value_t = 7)]
    height: usize,

    /// Allow diagonal path segments
    #[arg(short = 'o', long, default_value_t = false)]
    diagonal: bool,

    /// Keep the first and last numbers as clues
    #[arg(short, long, default_value_t = false)]
    keep_ends: bool,

    /// Clue pattern
    #[arg(value_enum, long, default_value_t = Pattern::Rot2)]
    pattern: Pattern,

    /// Difficulty level
    #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Seed for the random source, for reproducible puzzles
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print puzzles as JSON instead of text
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Print some statistics after generating the puzzles
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Solve the given puzzle description instead of generating
    #[arg(long, value_name = "DESC")]
    solve: Option<String>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process the command-line options. Return the process exit code.
pub fn run() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // List the presets
    //
    if args.ls {
        for (name, params) in puzzles::presets() {
            println!(
                "{name}: {}x{} {} {}",
                params.width, params.height, params.pattern, params.difficulty
            );
        }
        return 0;
    }

    match &args.solve {
        Some(desc) => solve_puzzle(&args, desc),
        None => generate_puzzles(&args),
    }
}

/// Solve the puzzle given on the command line and print its solution.
fn solve_puzzle(args: &Args, desc: &str) -> u8 {
    let grid: Grid = match Grid::decode_desc(desc, args.width, args.height) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Invalid puzzle description: {e}");
            return 1;
        }
    };

    let options: SolveOptions = SolveOptions {
        unique_only: true,
        ..SolveOptions::default()
    };
    match solver::solve(&grid, args.diagonal, &options) {
        Some(solution) => print_grid(&solution, args.json),
        None => {
            eprintln!("The puzzle has no unique solution.");
            1
        }
    }
}

/// Generate the requested number of puzzles and print them.
fn generate_puzzles(args: &Args) -> u8 {
    let mut params: PuzzleParameters = PuzzleParameters {
        width: args.width,
        height: args.height,
        diagonal: args.diagonal,
        keep_ends: args.keep_ends,
        pattern: args.pattern,
        difficulty: args.difficulty,
    };
    if let Some(name) = &args.preset {
        match puzzles::presets()
            .into_iter()
            .find(|(n, _)| *n == name.as_str())
        {
            Some((_, preset)) => params = preset,
            None => {
                eprintln!("Unknown preset {name}. Use --ls to list the available presets.");
                return 1;
            }
        }
    }
    if let Err(e) = params.validate() {
        eprintln!("Invalid parameters: {e}");
        return 1;
    }

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut clues: usize = 0;

    for i in 0..args.count {
        debug!("Generating puzzle {i}");

        let start: Instant = Instant::now();
        let grid: Grid = puzzles::generate_puzzle(&params, &mut rng);
        let duration: f32 = start.elapsed().as_secs_f32();

        total += duration;
        if duration > max {
            max = duration;
        }
        clues += grid.clue_count();

        if !args.json {
            println!("{}", grid.encode_desc());
        }
        let code: u8 = print_grid(&grid, args.json);
        if code != 0 {
            return code;
        }
    }

    // Print some stats
    if args.summary && args.count > 0 {
        println!(
            "
   total time = {}s
 average time = {}s
     max time = {}s
average clues = {}",
            total,
            total / args.count as f32,
            max,
            clues / args.count
        );
    }
    0
}

/// Print a grid on the standard output, as text or as JSON.
fn print_grid(grid: &Grid, json: bool) -> u8 {
    if json {
        match serde_json::to_string(grid) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Cannot encode the grid: {e}");
                return 1;
            }
        }
    } else {
        print!("{grid}");
    }
    0
}
