/*
generator.rs

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

use rand::SeedableRng;
use rand::rngs::StdRng;

use jadium::generator::path::Path;
use jadium::generator::puzzles::{self, Difficulty, Pattern, PuzzleParameters};
use jadium::generator::random_path::RandomPath;
use jadium::geometry::{Geometry, Location};
use jadium::grid::Grid;
use jadium::solver::{self, SolveOptions};

/// Solve the generated puzzle and check the solution.
fn assert_uniquely_solvable(puzzle: &Grid, params: &PuzzleParameters) {
    let options: SolveOptions = SolveOptions {
        unique_only: true,
        ..SolveOptions::default()
    };
    let solution: Grid =
        solver::solve(puzzle, params.diagonal, &options).expect("generated puzzle not unique");

    let path: Path = solution.to_path().expect("incomplete solution");
    let geometry: Geometry = Geometry::new(params.width, params.height, params.diagonal);
    for pair in path.get().windows(2) {
        assert_eq!(geometry.distance(pair[0], pair[1]), 1);
    }
}

#[test]
fn random_pattern_puzzles_are_unique() {
    let params: PuzzleParameters = PuzzleParameters {
        width: 4,
        height: 4,
        pattern: Pattern::Random,
        ..PuzzleParameters::default()
    };
    let mut rng: StdRng = StdRng::seed_from_u64(7);

    for _ in 0..3 {
        let puzzle: Grid = puzzles::generate_puzzle(&params, &mut rng);
        assert_uniquely_solvable(&puzzle, &params);
    }
}

#[test]
fn symmetric_pattern_is_centrally_symmetric() {
    let params: PuzzleParameters = PuzzleParameters::default();
    let mut rng: StdRng = StdRng::seed_from_u64(11);
    let puzzle: Grid = puzzles::generate_puzzle(&params, &mut rng);

    for y in 0..params.height {
        for x in 0..params.width {
            let l: Location = Location::new(x, y);
            let mirror: Location = Location::new(params.width - 1 - x, params.height - 1 - y);
            assert_eq!(
                puzzle.get(l) != 0,
                puzzle.get(mirror) != 0,
                "clue pattern not symmetric at ({x},{y})"
            );
        }
    }

    // Easy puzzles are solvable without guessing
    let easy: SolveOptions = SolveOptions {
        max_difficulty: Difficulty::Easy,
        ..SolveOptions::default()
    };
    assert!(solver::solve(&puzzle, params.diagonal, &easy).is_some());
    assert_uniquely_solvable(&puzzle, &params);
}

#[test]
fn keep_ends_keeps_the_first_and_last_clues() {
    let params: PuzzleParameters = PuzzleParameters {
        width: 4,
        height: 4,
        keep_ends: true,
        pattern: Pattern::Random,
        ..PuzzleParameters::default()
    };
    let mut rng: StdRng = StdRng::seed_from_u64(3);

    for _ in 0..3 {
        let puzzle: Grid = puzzles::generate_puzzle(&params, &mut rng);
        assert!(puzzle.cells().contains(&1));
        assert!(puzzle.cells().contains(&16));
    }
}

#[test]
fn same_seed_same_puzzle() {
    let params: PuzzleParameters = PuzzleParameters {
        width: 5,
        height: 5,
        ..PuzzleParameters::default()
    };

    let mut rng: StdRng = StdRng::seed_from_u64(23);
    let first: Grid = puzzles::generate_puzzle(&params, &mut rng);
    let mut rng: StdRng = StdRng::seed_from_u64(23);
    let second: Grid = puzzles::generate_puzzle(&params, &mut rng);

    assert_eq!(first, second);
}

#[test]
fn diagonal_puzzles_are_unique() {
    let params: PuzzleParameters = PuzzleParameters {
        width: 4,
        height: 4,
        diagonal: true,
        difficulty: Difficulty::Hard,
        ..PuzzleParameters::default()
    };
    let mut rng: StdRng = StdRng::seed_from_u64(17);
    let puzzle: Grid = puzzles::generate_puzzle(&params, &mut rng);

    assert_uniquely_solvable(&puzzle, &params);
}

#[test]
fn rendered_paths_read_back_unchanged() {
    let geometry: Geometry = Geometry::new(5, 4, false);
    let mut generator: RandomPath = RandomPath::new(geometry);
    let mut rng: StdRng = StdRng::seed_from_u64(29);

    let path: Path = generator.generate(&mut rng);
    let grid: Grid = Grid::from_path(&path, 5, 4);
    assert_eq!(grid.to_path(), Some(path));
}
