/*
state.rs

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

//! Solver state: an owned grid copy and its gap list.

use super::gaps::{self, Gap};
use crate::geometry::{Geometry, Location};
use crate::grid::Grid;

/// Owned state for one solve attempt.
///
/// The recursive solver clones the state for every speculative branch, so each branch mutates
/// its own copy and no branch ever sees the moves of another.
#[derive(Debug, Clone)]
pub struct SolverState {
    /// Grid geometry and adjacency rule.
    pub geometry: Geometry,

    /// Limit on the size of the recursion tree, None for an unbounded search.
    pub steps_limit: Option<usize>,

    /// Working copy of the puzzle grid.
    pub grid: Grid,

    /// Remaining gaps.
    pub gaps: Vec<Gap>,
}

impl SolverState {
    /// Build the state for the given puzzle.
    ///
    /// Also returns the length of the longest gap, which callers use to reject puzzles that
    /// would be too expensive to verify.
    pub fn new(grid: &Grid, diagonal: bool, steps_limit: Option<usize>) -> (Self, usize) {
        let geometry: Geometry = Geometry::new(grid.width(), grid.height(), diagonal);
        let (gaps, longest) = gaps::compute_gaps(grid);
        (
            Self {
                geometry,
                steps_limit,
                grid: grid.clone(),
                gaps,
            },
            longest,
        )
    }

    /// Sort the gaps by the distance between their end locations, shortest first.
    ///
    /// Short gaps constrain the search more tightly and branch less, so the recursive solver
    /// works on them first. An open-ended gap has no measurable span and sorts after all the
    /// anchored gaps (the sort is stable, so open-ended gaps keep their relative order).
    pub fn sort_gaps(&mut self) {
        let geometry: Geometry = self.geometry;
        self.gaps.sort_by_key(|gap| match (gap.l1, gap.l2) {
            (Some(l1), Some(l2)) => geometry.distance(l1, l2),
            _ => usize::MAX,
        });
    }

    /// Place the number `n1 + 1` in the given square, raising the low end of the gap.
    ///
    /// Return false when the placement proves the puzzle unsolvable. If the placement completes
    /// the gap, the gap is removed.
    pub fn place_low(&mut self, gap_index: usize, l: Location) -> bool {
        let gap: Gap = self.gaps[gap_index];
        let n: u8 = gap.n1 + 1;

        // Unsolvable if the square is too far away from the other side of the gap
        if let Some(l2) = gap.l2 {
            if self.geometry.distance(l, l2) > gap.length() {
                return false;
            }
        }

        self.grid.set(l, n);

        // Unsolvable if the placed number starves a clue nearby
        if self.blocks_number_nearby(l) {
            return false;
        }

        if n + 1 == gap.n2 {
            self.gaps.remove(gap_index);
        } else {
            let gap: &mut Gap = &mut self.gaps[gap_index];
            gap.n1 = n;
            gap.l1 = Some(l);
        }
        true
    }

    /// Place the number `n2 - 1` in the given square, lowering the high end of the gap.
    ///
    /// Return false when the placement proves the puzzle unsolvable. If the placement completes
    /// the gap, the gap is removed.
    pub fn place_high(&mut self, gap_index: usize, l: Location) -> bool {
        let gap: Gap = self.gaps[gap_index];
        let n: u8 = gap.n2 - 1;

        // Unsolvable if the square is too far away from the other side of the gap
        if let Some(l1) = gap.l1 {
            if self.geometry.distance(l, l1) > gap.length() {
                return false;
            }
        }

        self.grid.set(l, n);

        // Unsolvable if the placed number starves a clue nearby
        if self.blocks_number_nearby(l) {
            return false;
        }

        if n - 1 == gap.n1 {
            self.gaps.remove(gap_index);
        } else {
            let gap: &mut Gap = &mut self.gaps[gap_index];
            gap.n2 = n;
            gap.l2 = Some(l);
        }
        true
    }

    /// Whether a number just placed at `l` took away a square that a clue nearby still needed.
    ///
    /// A number with missing numbers on both sides must keep two of its neighbouring squares
    /// available; using too many squares around it makes the puzzle impossible to solve. For
    /// example, in the grid
    ///
    /// ```text
    /// 16 15  .  .
    /// 11  .  .  .
    ///  .  7  6  .
    ///  .  .  .  .
    /// ```
    ///
    /// placing an 8 above the 7 is a dead end: the 11 still needs two connections but would
    /// have only one available square left.
    ///
    /// Only the `l2` end of each gap is inspected: every clue pinned on both sides is the `l2`
    /// of some gap, and inspecting an endpoint with a free side is harmless because the
    /// neighbour holding its next or previous number counts as available.
    pub(super) fn blocks_number_nearby(&self, l: Location) -> bool {
        for gap in &self.gaps {
            if let Some(l2) = gap.l2 {
                if self.geometry.distance(l2, l) == 1 && self.is_blocked(l2) {
                    return true;
                }
            }
        }
        false
    }

    /// Whether the number at `l` has too few of its neighbouring squares still available.
    ///
    /// A neighbouring square is available when it is empty or already holds the previous or the
    /// next number. The first and last numbers of the path are the only ones that connect on a
    /// single side.
    fn is_blocked(&self, l: Location) -> bool {
        let n: u8 = self.grid.get(l);
        let mut available: usize = 0;
        for neighbour in self.geometry.neighbours(l) {
            let o: u8 = self.grid.get(neighbour);
            if o == 0 || o + 1 == n || o == n + 1 {
                available += 1;
            }
        }
        let required: usize = if n == 1 || n as usize == self.grid.area() {
            1
        } else {
            2
        };
        available < required
    }
}
