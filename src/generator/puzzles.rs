/*
puzzles.rs

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

//! Puzzle parameters and the clue-removal generator.

use clap::ValueEnum;
use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use strum_macros::FromRepr;

use super::path::Path;
use super::random_path::RandomPath;
use crate::geometry::{Geometry, Location};
use crate::grid::{Grid, NUMBER_MAX};
use crate::solver::{self, SolveOptions};

/// Minimum size for each dimension of the grid.
const SIDE_MIN: usize = 3;

/// Longest gap allowed in a generated puzzle. Longer gaps give the verifying solver too much
/// room to recurse.
const MAX_GAP_LENGTH: usize = 9;

/// Puzzle difficulty level.
///
/// An easy puzzle can be solved with necessary moves alone. A hard puzzle may need some
/// guessing to see which possibilities work and which do not.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(i32)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Clue pattern constraint.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(i32)]
pub enum Pattern {
    /// Clues in random squares.
    Random,

    /// Clues in random squares, forming a two-way rotationally symmetric pattern.
    #[default]
    Rot2,

    /// Clues on the ring one square away from the border.
    Ring,

    /// Clues on every other border square.
    Border,
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Pattern::Random => write!(f, "random"),
            Pattern::Rot2 => write!(f, "symmetric"),
            Pattern::Ring => write!(f, "ring"),
            Pattern::Border => write!(f, "border"),
        }
    }
}

/// Type of errors raised when validating puzzle parameters.
#[derive(Debug, PartialEq, Eq)]
pub enum ParameterError {
    /// One of the grid dimensions is too small.
    SideTooSmall(usize),

    /// The grid has more squares than the largest supported number.
    TooManySquares(usize),
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParameterError::SideTooSmall(side) => {
                write!(f, "both dimensions must be at least {SIDE_MIN}, not {side}")
            }
            ParameterError::TooManySquares(area) => write!(
                f,
                "a {area}-square grid cannot be numbered with at most {NUMBER_MAX} distinct numbers"
            ),
        }
    }
}

impl Error for ParameterError {}

/// Parameters for puzzle generation.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct PuzzleParameters {
    /// Grid width.
    pub width: usize,

    /// Grid height.
    pub height: usize,

    /// Whether the path can use diagonal segments.
    pub diagonal: bool,

    /// Whether the first and last numbers always stay as clues.
    pub keep_ends: bool,

    /// Clue pattern.
    pub pattern: Pattern,

    /// Difficulty level.
    pub difficulty: Difficulty,
}

impl Default for PuzzleParameters {
    /// Default parameters: 7×7, orthogonal paths, symmetric clues, easy.
    fn default() -> Self {
        Self {
            width: 7,
            height: 7,
            diagonal: false,
            keep_ends: false,
            pattern: Pattern::Rot2,
            difficulty: Difficulty::Easy,
        }
    }
}

impl PuzzleParameters {
    /// Check the grid dimensions.
    ///
    /// # Errors
    ///
    /// The method returns an error if a dimension is below 3 or if the grid has more than 99
    /// squares.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.width < SIDE_MIN || self.height < SIDE_MIN {
            return Err(ParameterError::SideTooSmall(self.width.min(self.height)));
        }
        if self.width * self.height > NUMBER_MAX {
            return Err(ParameterError::TooManySquares(self.width * self.height));
        }
        Ok(())
    }

    /// Solver effort limit for verifying candidate puzzles with these parameters.
    ///
    /// Diagonal puzzles take much more time to solve, so their limits are lower, and the
    /// restrictive patterns need even less work per attempt. The values are empirical; the
    /// retry loop in [`generate_puzzle`] compensates when a limit makes the solver give up.
    fn steps_limit(&self) -> Option<usize> {
        if self.diagonal {
            match self.pattern {
                Pattern::Ring => Some(1_000),
                Pattern::Border => Some(100),
                _ => Some(80_000),
            }
        } else {
            match self.pattern {
                Pattern::Random => Some(300_000),
                Pattern::Rot2 => Some(800_000),
                _ => None,
            }
        }
    }
}

/// Return the named parameter presets.
pub fn presets() -> Vec<(&'static str, PuzzleParameters)> {
    let default: PuzzleParameters = PuzzleParameters::default();
    vec![
        ("7x7 Easy", default),
        (
            "7x7 Ring",
            PuzzleParameters {
                pattern: Pattern::Ring,
                difficulty: Difficulty::Hard,
                ..default
            },
        ),
        (
            "7x7 Border",
            PuzzleParameters {
                pattern: Pattern::Border,
                difficulty: Difficulty::Hard,
                ..default
            },
        ),
        (
            "7x7 Hard",
            PuzzleParameters {
                difficulty: Difficulty::Hard,
                ..default
            },
        ),
        (
            "9x9 Easy",
            PuzzleParameters {
                width: 9,
                height: 9,
                ..default
            },
        ),
        (
            "9x9 Hard",
            PuzzleParameters {
                width: 9,
                height: 9,
                difficulty: Difficulty::Hard,
                ..default
            },
        ),
    ]
}

/// Whether the square stays a clue in the ring pattern: on the rectangular ring one square
/// away from the border.
fn in_ring(x: usize, y: usize, width: usize, height: usize) -> bool {
    let border: bool = x == 0 || x == width - 1 || y == 0 || y == height - 1;
    let ring: bool = x == 1 || x == width - 2 || y == 1 || y == height - 2;
    !border && ring
}

/// Whether the square stays a clue in the border pattern: on the border, on every other
/// square.
fn on_border(x: usize, y: usize, width: usize, height: usize) -> bool {
    let border: bool = x == 0 || x == width - 1 || y == 0 || y == height - 1;
    border && (x + y) % 2 == 0
}

/// Construct a new random puzzle.
///
/// The generation starts from a random Hamiltonian path, which becomes the solution of the
/// puzzle. For the random patterns, the clues are then visited in random order, and each one is
/// removed when the puzzle keeps a unique solution without it. For the ring and border
/// patterns, the pattern dictates the clue set; paths are generated until one of them gives a
/// uniquely solvable puzzle with those clues.
///
/// The parameters should have been checked with [`PuzzleParameters::validate`] beforehand.
pub fn generate_puzzle(params: &PuzzleParameters, rng: &mut impl Rng) -> Grid {
    let width: usize = params.width;
    let height: usize = params.height;
    let mut generator: RandomPath = RandomPath::new(Geometry::new(width, height, params.diagonal));

    let mut max_gap_length: usize = MAX_GAP_LENGTH;
    let mut difficulty: Difficulty = params.difficulty;
    if params.pattern == Pattern::Border {
        // The border pattern leaves long gaps and cannot be solved without guessing
        max_gap_length = width.max(height)
            + if params.difficulty == Difficulty::Hard {
                4
            } else {
                0
            };
        difficulty = Difficulty::Hard;
    }
    let options: SolveOptions = SolveOptions {
        max_gap_length: Some(max_gap_length),
        max_difficulty: difficulty,
        steps_limit: params.steps_limit(),
        unique_only: true,
    };

    let mut attempts: usize = 0;
    loop {
        attempts += 1;
        let path: Path = generator.generate(rng);
        let mut grid: Grid = Grid::from_path(&path, width, height);

        match params.pattern {
            Pattern::Ring => {
                for y in 0..height {
                    for x in 0..width {
                        if !in_ring(x, y, width, height) {
                            grid.set(Location::new(x, y), 0);
                        }
                    }
                }
                if solver::solve(&grid, params.diagonal, &options).is_some() {
                    debug!("Ring puzzle found after {attempts} attempts");
                    return grid;
                }
            }
            Pattern::Border => {
                for y in 0..height {
                    for x in 0..width {
                        if !on_border(x, y, width, height) {
                            grid.set(Location::new(x, y), 0);
                        }
                    }
                }
                if solver::solve(&grid, params.diagonal, &options).is_some() {
                    debug!("Border puzzle found after {attempts} attempts");
                    return grid;
                }
            }
            Pattern::Random | Pattern::Rot2 => {
                remove_clues(params, &path, &mut grid, &options, rng);
                debug!("Puzzle generated with {} clues", grid.clue_count());
                return grid;
            }
        }
    }
}

/// Remove clues from the complete grid one by one, keeping the puzzle uniquely solvable.
///
/// The clues are visited in random order. For the symmetric pattern, only the clues in the
/// first half of the grid are considered, and each one is removed together with its mirror
/// under the central rotation.
fn remove_clues(
    params: &PuzzleParameters,
    path: &Path,
    grid: &mut Grid,
    options: &SolveOptions,
    rng: &mut impl Rng,
) {
    let area: usize = params.width * params.height;

    let mut clues: Vec<u8> = grid.cells().to_vec();
    if params.pattern == Pattern::Rot2 {
        clues.truncate(area.div_ceil(2));
    }
    clues.shuffle(rng);

    for clue in clues {
        if params.keep_ends && (clue == 1 || clue as usize == area) {
            continue;
        }

        // The clue's square is where the path puts that number
        let l: Location = match path.location_of(clue as usize) {
            Some(l) => l,
            None => continue,
        };
        let mirror: Location = Location::new(params.width - 1 - l.x, params.height - 1 - l.y);
        let mut mirror_clue: u8 = 0;

        if params.pattern == Pattern::Rot2 {
            mirror_clue = grid.get(mirror);
            if params.keep_ends && (mirror_clue == 1 || mirror_clue as usize == area) {
                continue;
            }
            grid.set(mirror, 0);
        }
        grid.set(l, 0);

        if solver::solve(grid, params.diagonal, options).is_none() {
            // The puzzle lost its unique solution: restore the clues
            grid.set(l, clue);
            if params.pattern == Pattern::Rot2 {
                grid.set(mirror, mirror_clue);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_validation() {
        let mut params: PuzzleParameters = PuzzleParameters::default();
        assert_eq!(params.validate(), Ok(()));

        params.width = 2;
        assert_eq!(params.validate(), Err(ParameterError::SideTooSmall(2)));

        params.width = 10;
        params.height = 10;
        assert_eq!(params.validate(), Err(ParameterError::TooManySquares(100)));

        params.height = 9;
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn ring_mask() {
        // On a 5x5 grid the ring is the 3x3 box around the centre, minus the centre itself
        let kept: Vec<(usize, usize)> = (0..5)
            .flat_map(|y| (0..5).map(move |x| (x, y)))
            .filter(|(x, y)| in_ring(*x, *y, 5, 5))
            .collect();

        assert_eq!(kept.len(), 8);
        assert!(!kept.contains(&(2, 2)));
        assert!(kept.contains(&(1, 1)));
        assert!(kept.contains(&(3, 2)));
    }

    #[test]
    fn border_mask() {
        // On a 4x4 grid, 6 of the 12 border squares have even coordinate sums
        let kept: Vec<(usize, usize)> = (0..4)
            .flat_map(|y| (0..4).map(move |x| (x, y)))
            .filter(|(x, y)| on_border(*x, *y, 4, 4))
            .collect();

        assert_eq!(kept, vec![(0, 0), (2, 0), (3, 1), (0, 2), (1, 3), (3, 3)]);
    }

    #[test]
    fn effort_limits_depend_on_the_pattern() {
        let mut params: PuzzleParameters = PuzzleParameters::default();
        assert_eq!(params.steps_limit(), Some(800_000));

        params.pattern = Pattern::Ring;
        assert_eq!(params.steps_limit(), None);

        params.diagonal = true;
        assert_eq!(params.steps_limit(), Some(1_000));

        params.pattern = Pattern::Rot2;
        assert_eq!(params.steps_limit(), Some(80_000));
    }

    #[test]
    fn preset_names_are_unique() {
        let presets: Vec<(&str, PuzzleParameters)> = presets();
        for (i, (name, params)) in presets.iter().enumerate() {
            assert_eq!(params.validate(), Ok(()));
            assert!(presets[i + 1..].iter().all(|(other, _)| other != name));
        }
    }
}
