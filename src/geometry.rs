/*
geometry.rs

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

//! Locations and adjacency on the rectangular grid.

use serde::{Deserialize, Serialize};

/// Location of a square on the grid.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Location {
    /// Column, starting from 0 on the left.
    pub x: usize,

    /// Row, starting from 0 at the top.
    pub y: usize,
}

impl Location {
    /// Create a [`Location`] object.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Grid dimensions and adjacency rule.
///
/// Two squares are neighbours when their distance is exactly 1. Without diagonal segments the
/// distance is the "Manhattan" (or "taxicab") distance, so each square has up to four neighbours.
/// With diagonal segments the distance is the "Chebyshev" (or "chessboard") distance, and each
/// square has up to eight neighbours.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Geometry {
    /// Grid width.
    pub width: usize,

    /// Grid height.
    pub height: usize,

    /// Whether the path can use diagonal segments.
    pub diagonal: bool,
}

/// Orthogonal offsets, in north, east, south, west order.
const ORTHOGONAL: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Diagonal offsets, in north-east, south-east, south-west, north-west order.
const DIAGONAL: [(isize, isize); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

impl Geometry {
    /// Create a [`Geometry`] object.
    pub fn new(width: usize, height: usize, diagonal: bool) -> Self {
        Self {
            width,
            height,
            diagonal,
        }
    }

    /// Number of squares in the grid.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Distance between two squares: Manhattan without diagonal segments, Chebyshev with them.
    pub fn distance(&self, a: Location, b: Location) -> usize {
        let dx: usize = a.x.abs_diff(b.x);
        let dy: usize = a.y.abs_diff(b.y);
        if self.diagonal { dx.max(dy) } else { dx + dy }
    }

    /// The square at the given offset from `l`, or None if it falls outside the grid.
    fn offset(&self, l: Location, dx: isize, dy: isize) -> Option<Location> {
        let x: isize = l.x as isize + dx;
        let y: isize = l.y as isize + dy;
        if x < 0 || y < 0 || x >= self.width as isize || y >= self.height as isize {
            None
        } else {
            Some(Location::new(x as usize, y as usize))
        }
    }

    /// Return the in-bounds neighbours of the given square.
    ///
    /// The squares are listed in north, east, south, west order, followed by north-east,
    /// south-east, south-west, north-west when diagonal segments are enabled. The recursive
    /// solver relies on this order staying fixed.
    pub fn neighbours(&self, l: Location) -> Vec<Location> {
        let mut ret: Vec<Location> = Vec::with_capacity(8);
        for (dx, dy) in ORTHOGONAL {
            if let Some(n) = self.offset(l, dx, dy) {
                ret.push(n);
            }
        }
        if self.diagonal {
            for (dx, dy) in DIAGONAL {
                if let Some(n) = self.offset(l, dx, dy) {
                    ret.push(n);
                }
            }
        }
        ret
    }

    /// Same as [`Geometry::neighbours`], but without the `except` square.
    pub fn neighbours_except(&self, l: Location, except: Location) -> Vec<Location> {
        let mut ret: Vec<Location> = self.neighbours(l);
        ret.retain(|n| *n != except);
        ret
    }
}
