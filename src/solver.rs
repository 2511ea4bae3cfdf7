/*
solver.rs

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

//! Solve puzzles.
//!
//! The solver works on the gaps of the puzzle (the runs of missing numbers, see
//! [`gaps::compute_gaps`]). It first plays the moves that a set of simple rules deems
//! necessary, without guess-work. When no necessary move remains and the puzzle is still not
//! solved, it can recursively try every possible move and keep the branches that work.
//!
//! The solver returns the first solution it finds, and it can also look for a second solution.
//! That is how generated puzzles are confirmed to have only one solution.
//!
//! Use [`solve`] for the whole pipeline. The building blocks ([`state::SolverState`],
//! [`recursive::recursive_solve`]) are also public for callers that need to observe
//! intermediate states, such as interfaces that report how far a puzzle can be taken without
//! guessing.

pub mod deductive;
pub mod gaps;
pub mod recursive;
pub mod state;

use log::debug;

use crate::generator::puzzles::Difficulty;
use crate::grid::Grid;
use recursive::Search;
use state::SolverState;

/// Settings for [`solve`].
#[derive(Debug, Copy, Clone)]
pub struct SolveOptions {
    /// Give up right away when the puzzle has a gap longer than this, even if it might be
    /// solvable. The puzzle generator uses this to bound the work spent on verifying a
    /// candidate puzzle. None accepts any gap length.
    pub max_gap_length: Option<usize>,

    /// With [`Difficulty::Easy`], the recursive trial-and-error search is disabled and only
    /// necessary moves are played.
    pub max_difficulty: Difficulty,

    /// Limit on the number of nodes in the recursion tree. None searches without limit.
    pub steps_limit: Option<usize>,

    /// Keep searching after a first solution, and fail unless it is the only one.
    pub unique_only: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            max_gap_length: None,
            max_difficulty: Difficulty::Hard,
            steps_limit: None,
            unique_only: false,
        }
    }
}

/// Try to find a solution for the given puzzle.
///
/// Return the solved grid, or None when no solution was found. Depending on the options, None
/// may mean that the puzzle has no solution, that it has several solutions
/// ([`SolveOptions::unique_only`]), that it needs guess-work
/// ([`SolveOptions::max_difficulty`]), or that the solver gave up
/// ([`SolveOptions::max_gap_length`], [`SolveOptions::steps_limit`]).
pub fn solve(grid: &Grid, diagonal: bool, options: &SolveOptions) -> Option<Grid> {
    let (mut state, longest) = SolverState::new(grid, diagonal, options.steps_limit);

    if let Some(max) = options.max_gap_length {
        if longest > max {
            debug!("Gap of length {longest} exceeds the limit of {max}");
            return None;
        }
    }

    if options.max_difficulty == Difficulty::Easy {
        // Necessary moves only. They never leave a choice, so a solution found this way is
        // unique by construction.
        if state.necessary_moves() && state.gaps.is_empty() {
            return Some(state.grid);
        }
        return None;
    }

    // Working on short gaps first narrows the search tree
    state.sort_gaps();

    let mut search: Search = Search::new(options.unique_only);
    recursive::recursive_solve(&mut state, &mut search);
    if search.multiple {
        debug!("The puzzle has more than one solution");
        return None;
    }
    search.solution
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easy_mode_reports_puzzles_that_need_guessing() {
        // Solvable, but not by necessary moves alone
        let grid: Grid = Grid::decode_desc("1,,,,5,,,,", 3, 3).unwrap();
        let easy: SolveOptions = SolveOptions {
            max_difficulty: Difficulty::Easy,
            ..SolveOptions::default()
        };

        assert!(solve(&grid, false, &easy).is_none());
        assert!(solve(&grid, false, &SolveOptions::default()).is_some());
    }

    #[test]
    fn gap_length_prefilter() {
        let grid: Grid = Grid::decode_desc("1,,,,5,,,,", 3, 3).unwrap();
        let options: SolveOptions = SolveOptions {
            max_gap_length: Some(3),
            ..SolveOptions::default()
        };

        assert!(solve(&grid, false, &options).is_none());
        assert!(solve(&grid, false, &SolveOptions::default()).is_some());
    }
}
