/*
gaps.rs

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

//! Gaps between the numbers present on a grid.

use serde::{Deserialize, Serialize};

use crate::geometry::Location;
use crate::grid::Grid;

/// A gap: a run of consecutive missing numbers bracketed by numbers present on the grid.
///
/// Most gaps have two anchored ends, and the missing numbers complete a path from one end
/// location to the other. A gap at an end of the solution path has only one anchored end; such a
/// gap is "open-ended". For an open-ended gap the missing end number is 0 (low end) or area + 1
/// (high end), so the missing numbers are always exactly `n1+1..n2-1`.
///
/// For instance, in the grid
///
/// ```text
///  .  5  4  .
///  .  .  .  .
/// 14  .  .  9
/// 13 12 11  .
/// ```
///
/// the missing numbers are 1-3, 6-8, 10, and 15-16, and the gaps are:
///
/// ```text
/// { n1 = 0,  l1 = None,        n2 = 4,  l2 = Some((2,0)) }
/// { n1 = 5,  l1 = Some((1,0)), n2 = 9,  l2 = Some((3,2)) }
/// { n1 = 9,  l1 = Some((3,2)), n2 = 11, l2 = Some((2,3)) }
/// { n1 = 14, l1 = Some((0,2)), n2 = 17, l2 = None        }
/// ```
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Gap {
    /// Number present on the grid before the first missing number, 0 for an open-ended low gap.
    pub n1: u8,

    /// Number present on the grid after the last missing number, area + 1 for an open-ended
    /// high gap.
    pub n2: u8,

    /// Location of `n1`, None for an open-ended low gap.
    pub l1: Option<Location>,

    /// Location of `n2`, None for an open-ended high gap.
    pub l2: Option<Location>,
}

impl Gap {
    /// Number of missing numbers in the gap.
    pub fn length(&self) -> usize {
        (self.n2 - self.n1) as usize - 1
    }
}

/// Find the gaps in the given grid.
///
/// The gaps are returned in ascending order of their numbers, together with the length of the
/// longest gap. The longest gap length is useful for limiting the computational complexity of a
/// generated puzzle.
///
/// # Panics
///
/// The function panics if the grid is entirely empty. Generation and solving always start from
/// at least one clue.
pub fn compute_gaps(grid: &Grid) -> (Vec<Gap>, usize) {
    let area: usize = grid.area();

    // Map from each number to its location on the grid
    let mut map: Vec<Option<Location>> = vec![None; area + 1];
    let mut first: usize = 0;
    let mut last: usize = 0;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let l: Location = Location::new(x, y);
            let n: usize = grid.get(l) as usize;
            if n > 0 {
                map[n] = Some(l);
            }
        }
    }
    for n in 1..=area {
        if map[n].is_some() {
            if first == 0 {
                first = n;
            }
            last = n;
        }
    }
    assert!(first > 0, "the grid does not hold a single number");

    let mut gaps: Vec<Gap> = Vec::new();
    let mut longest: usize = 0;

    // If the first number is not 1, then the low gap is open-ended
    if first > 1 {
        gaps.push(Gap {
            n1: 0,
            n2: first as u8,
            l1: None,
            l2: map[first],
        });
        longest = first - 1;
    }

    // Runs of missing numbers in between
    let mut n: usize = first;
    while n < last {
        if map[n + 1].is_some() {
            n += 1;
            continue;
        }
        let mut m: usize = n + 1;
        while map[m].is_none() {
            m += 1;
        }
        gaps.push(Gap {
            n1: n as u8,
            n2: m as u8,
            l1: map[n],
            l2: map[m],
        });
        longest = longest.max(m - n - 1);
        n = m;
    }

    // If the last number is not the area, then the high gap is open-ended
    if last < area {
        gaps.push(Gap {
            n1: last as u8,
            n2: (area + 1) as u8,
            l1: map[last],
            l2: None,
        });
        longest = longest.max(area - last);
    }

    (gaps, longest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaps_of_a_partial_grid() {
        let grid: Grid = Grid::decode_desc(",5,4,,,,,,14,,,9,13,12,11,", 4, 4).unwrap();
        let (gaps, longest) = compute_gaps(&grid);

        assert_eq!(
            gaps,
            vec![
                Gap {
                    n1: 0,
                    n2: 4,
                    l1: None,
                    l2: Some(Location::new(2, 0))
                },
                Gap {
                    n1: 5,
                    n2: 9,
                    l1: Some(Location::new(1, 0)),
                    l2: Some(Location::new(3, 2))
                },
                Gap {
                    n1: 9,
                    n2: 11,
                    l1: Some(Location::new(3, 2)),
                    l2: Some(Location::new(2, 3))
                },
                Gap {
                    n1: 14,
                    n2: 17,
                    l1: Some(Location::new(0, 2)),
                    l2: None
                },
            ]
        );
        assert_eq!(longest, 3);
    }

    #[test]
    fn complete_grid_has_no_gaps() {
        let grid: Grid = Grid::decode_desc("1,2,3,6,5,4,7,8,9", 3, 3).unwrap();
        let (gaps, longest) = compute_gaps(&grid);

        assert!(gaps.is_empty());
        assert_eq!(longest, 0);
    }

    #[test]
    fn single_clue_splits_into_two_open_gaps() {
        let grid: Grid = Grid::decode_desc(",,,,5,,,,", 3, 3).unwrap();
        let (gaps, longest) = compute_gaps(&grid);

        assert_eq!(gaps.len(), 2);
        assert_eq!(gaps[0].n1, 0);
        assert_eq!(gaps[0].n2, 5);
        assert_eq!(gaps[1].n1, 5);
        assert_eq!(gaps[1].n2, 10);
        assert_eq!(longest, 4);
    }

    #[test]
    #[should_panic(expected = "does not hold a single number")]
    fn empty_grid_is_rejected() {
        let grid: Grid = Grid::new(3, 3);
        compute_gaps(&grid);
    }
}
