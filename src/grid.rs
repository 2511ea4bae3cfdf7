/*
grid.rs

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

//! The puzzle grid.
//!
//! A grid stores one number per square, 0 meaning that the square is empty. A complete grid
//! holds the numbers from 1 to the grid area, and numbering consecutive squares traces a path
//! through the grid. A puzzle is a grid where only the clues are filled in.
//!
//! A puzzle can be saved as a description string: the comma-separated list of its cell values
//! in row-major order, with empty squares contributing empty fields. For instance, the 4×4
//! puzzle
//!
//! ```text
//!  .  .  4  3
//!  .  .  .  .
//!  .  7  .  9
//!  .  .  .  .
//! ```
//!
//! is described by the string `,,4,3,,,,,,7,,9,,,,`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::generator::path::Path;
use crate::geometry::Location;

/// Largest number supported on a grid.
pub const NUMBER_MAX: usize = 99;

/// Rectangular grid of numbers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Grid width.
    width: usize,

    /// Grid height.
    height: usize,

    /// Cell values in row-major order. 0 means that the square is empty.
    cells: Vec<u8>,
}

/// Type of errors raised when parsing a puzzle description.
#[derive(Debug, PartialEq, Eq)]
pub enum DescError {
    /// The description contains a character other than a digit or a comma.
    InvalidCharacter(char),

    /// The description does not list one value per grid square.
    WrongLength { expected: usize, found: usize },

    /// The description contains a number that does not fit on the grid.
    ValueOutOfRange(usize),
}

impl fmt::Display for DescError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DescError::InvalidCharacter(c) => {
                write!(f, "invalid character {c:?} in the puzzle description")
            }
            DescError::WrongLength { expected, found } => {
                write!(f, "the description lists {found} squares instead of {expected}")
            }
            DescError::ValueOutOfRange(n) => write!(f, "the number {n} does not fit on the grid"),
        }
    }
}

impl Error for DescError {}

impl Grid {
    /// Create an empty grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Render a path as a complete grid: the square visited first holds 1, the next one 2, and
    /// so on.
    pub fn from_path(path: &Path, width: usize, height: usize) -> Self {
        let mut grid: Grid = Self::new(width, height);
        for (i, l) in path.get().iter().enumerate() {
            grid.set(*l, (i + 1) as u8);
        }
        grid
    }

    /// Grid width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of squares in the grid.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Value of the square at the given location, 0 when the square is empty.
    pub fn get(&self, l: Location) -> u8 {
        self.cells[l.y * self.width + l.x]
    }

    /// Set the value of the square at the given location.
    pub fn set(&mut self, l: Location, n: u8) {
        self.cells[l.y * self.width + l.x] = n;
    }

    /// Cell values in row-major order.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of filled squares.
    pub fn clue_count(&self) -> usize {
        self.cells.iter().filter(|n| **n != 0).count()
    }

    /// Read the numbers of a complete grid back into the path they trace.
    ///
    /// Return None if some number between 1 and the grid area is missing.
    pub fn to_path(&self) -> Option<Path> {
        let area: usize = self.area();
        let mut map: Vec<Option<Location>> = vec![None; area + 1];
        for y in 0..self.height {
            for x in 0..self.width {
                let l: Location = Location::new(x, y);
                let n: usize = self.get(l) as usize;
                if n > 0 {
                    map[n] = Some(l);
                }
            }
        }

        let mut path: Path = Path::new(area);
        for n in 1..=area {
            path.push(map[n]?);
        }
        Some(path)
    }

    /// Encode the grid as a puzzle description string.
    pub fn encode_desc(&self) -> String {
        let mut ret: String = String::with_capacity(3 * self.area());
        for (i, n) in self.cells.iter().enumerate() {
            if i != 0 {
                ret.push(',');
            }
            if *n != 0 {
                ret.push_str(&n.to_string());
            }
        }
        ret
    }

    /// Parse a puzzle description string.
    ///
    /// # Errors
    ///
    /// The method returns an error if the description contains unexpected characters, does not
    /// list exactly one value per square, or lists a number that does not fit on the grid.
    pub fn decode_desc(desc: &str, width: usize, height: usize) -> Result<Self, DescError> {
        let area: usize = width * height;
        let mut grid: Grid = Self::new(width, height);
        let mut index: usize = 0;

        for field in desc.split(',') {
            if index >= area {
                // Count the remaining fields for the error message
                index += 1;
                continue;
            }
            if field.is_empty() {
                index += 1;
                continue;
            }
            if let Some(c) = field.chars().find(|c| !c.is_ascii_digit()) {
                return Err(DescError::InvalidCharacter(c));
            }
            let n: usize = field.parse().map_err(|_| DescError::ValueOutOfRange(area + 1))?;
            if n == 0 || n > area {
                return Err(DescError::ValueOutOfRange(n));
            }
            grid.cells[index] = n as u8;
            index += 1;
        }

        if index != area {
            return Err(DescError::WrongLength {
                expected: area,
                found: index,
            });
        }
        Ok(grid)
    }
}

/// Fixed-width text form: two characters per number, `.` for empty squares.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                if x != 0 {
                    f.write_str(" ")?;
                }
                let n: u8 = self.get(Location::new(x, y));
                if n == 0 {
                    f.write_str(" .")?;
                } else {
                    write!(f, "{n:2}")?;
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desc_round_trip() {
        let desc: &str = ",,4,3,,,,,,7,,9,,,,";
        let grid: Grid = Grid::decode_desc(desc, 4, 4).unwrap();

        assert_eq!(grid.get(Location::new(2, 0)), 4);
        assert_eq!(grid.get(Location::new(1, 2)), 7);
        assert_eq!(grid.clue_count(), 4);
        assert_eq!(grid.encode_desc(), desc);
    }

    #[test]
    fn desc_errors() {
        assert_eq!(
            Grid::decode_desc("1,x,,", 2, 2),
            Err(DescError::InvalidCharacter('x'))
        );
        assert_eq!(
            Grid::decode_desc("1,2,3", 2, 2),
            Err(DescError::WrongLength {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            Grid::decode_desc("1,2,3,9", 2, 2),
            Err(DescError::ValueOutOfRange(9))
        );
    }

    #[test]
    fn path_round_trip() {
        let mut path: Path = Path::new(4);
        path.push(Location::new(0, 0));
        path.push(Location::new(1, 0));
        path.push(Location::new(1, 1));
        path.push(Location::new(0, 1));

        let grid: Grid = Grid::from_path(&path, 2, 2);
        assert_eq!(grid.cells(), &[1, 2, 4, 3]);
        assert_eq!(grid.to_path(), Some(path));
    }

    #[test]
    fn text_form() {
        let grid: Grid = Grid::decode_desc("12,5,,3,,,1,,,,,,14,,,", 4, 4).unwrap();

        assert_eq!(
            grid.to_string(),
            "12  5  .  3\n .  .  1  .\n .  .  .  .\n14  .  .  .\n"
        );
    }
}
