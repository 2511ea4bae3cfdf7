/*
lib.rs

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

//! Jadium generates and solves Hamilton number-path puzzles.
//!
//! This puzzle type is known under several names, including Hidato, Hidoku, Numbrix, and
//! Jadium. The objective of the game is to fill a rectangular grid with a number sequence that
//! traces a path through the grid: every square holds a distinct number, and consecutive
//! numbers always sit in adjacent squares. The path moves horizontally and vertically, and
//! optionally diagonally.
//!
//! For instance, the 4×4 puzzle described by `,,4,3,,,,,,7,,9,,,,`:
//!
//! ```text
//!  .  .  4  3
//!  .  .  .  .
//!  .  7  .  9
//!  .  .  .  .
//! ```
//!
//! is solved like this:
//!
//! ```text
//! 16  5  4  3
//! 15  6  1  2
//! 14  7  8  9
//! 13 12 11 10
//! ```
//!
//! The [`generator`] module builds random puzzles: it generates a random Hamiltonian path on
//! the grid and then removes clues while the [`solver`] module confirms that a single solution
//! remains.

pub mod cli_options;
pub mod generator;
pub mod geometry;
pub mod grid;
pub mod solver;
