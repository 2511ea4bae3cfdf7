/*
recursive.rs

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

//! Recursive trial-and-error search.

use super::gaps::Gap;
use super::state::SolverState;
use crate::grid::Grid;

/// Progress of one recursive search, shared by all of its branches.
#[derive(Debug)]
pub struct Search {
    /// First solution found.
    pub solution: Option<Grid>,

    /// Whether a second solution was found. Only tracked when a uniqueness proof was
    /// requested.
    pub multiple: bool,

    /// Whether to keep searching after a first solution, to prove that it is the only one.
    unique_only: bool,

    /// Number of entries into the recursion, compared against the state's limit.
    steps: usize,
}

impl Search {
    /// Create a [`Search`] object.
    pub fn new(unique_only: bool) -> Self {
        Self {
            solution: None,
            multiple: false,
            unique_only,
            steps: 0,
        }
    }
}

/// Search for solutions by recursive trial and error.
///
/// The necessary moves are played first. If gaps remain after that, the search takes the first
/// gap, looks at its anchored end (the low end when both are anchored), and tries every empty
/// neighbour of that end in turn: the state is cloned, the number adjacent to the end is placed
/// in the neighbour, and the search recurses into the clone. Neighbours are tried in north,
/// east, south, west order, then north-east, south-east, south-west, north-west with diagonal
/// segments, so the search is deterministic.
///
/// The return value means "stop searching": true when a solution was found and no proof of
/// uniqueness was requested, when a second solution was found, or when the step budget ran out.
/// Callers that requested a uniqueness proof and got neither [`Search::multiple`] nor an
/// exhausted budget know the recorded solution is unique, because the search only stopped after
/// trying every move.
pub fn recursive_solve(state: &mut SolverState, search: &mut Search) -> bool {
    if !state.necessary_moves() {
        return false;
    }

    if let Some(limit) = state.steps_limit {
        search.steps += 1;
        if search.steps > limit {
            // Too much work: give up without a verdict
            return true;
        }
    }

    if state.gaps.is_empty() {
        if search.solution.is_some() {
            search.multiple = true;
            return true;
        }
        search.solution = Some(state.grid.clone());
        return !search.unique_only;
    }

    let gap: Gap = state.gaps[0];
    if let Some(l1) = gap.l1 {
        for neighbour in state.geometry.neighbours(l1) {
            if state.grid.get(neighbour) != 0 {
                continue;
            }
            let mut branch: SolverState = state.clone();
            if branch.place_low(0, neighbour) && recursive_solve(&mut branch, search) {
                return true;
            }
        }
    } else if let Some(l2) = gap.l2 {
        for neighbour in state.geometry.neighbours(l2) {
            if state.grid.get(neighbour) != 0 {
                continue;
            }
            let mut branch: SolverState = state.clone();
            if branch.place_high(0, neighbour) && recursive_solve(&mut branch, search) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_of(desc: &str, size: usize, steps_limit: Option<usize>) -> SolverState {
        let grid: Grid = Grid::decode_desc(desc, size, size).unwrap();
        SolverState::new(&grid, false, steps_limit).0
    }

    #[test]
    fn first_solution_stops_the_search() {
        let mut state: SolverState = state_of("1,,,,,,,,", 3, None);
        let mut search: Search = Search::new(false);

        assert!(recursive_solve(&mut state, &mut search));
        assert!(search.solution.is_some());
        assert!(!search.multiple);
    }

    #[test]
    fn second_solution_is_detected() {
        let mut state: SolverState = state_of("1,,,,,,,,,,,,,,,", 4, None);
        let mut search: Search = Search::new(true);

        assert!(recursive_solve(&mut state, &mut search));
        assert!(search.multiple);
    }

    #[test]
    fn exhausted_budget_aborts_without_a_solution() {
        let mut state: SolverState = state_of("1,,,,,,,,,,,,,,,", 4, Some(1));
        let mut search: Search = Search::new(true);

        assert!(recursive_solve(&mut state, &mut search));
        assert!(search.solution.is_none());
        assert!(!search.multiple);
    }
}
