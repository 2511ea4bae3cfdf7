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

//! Generate random paths and puzzles.
//!
//! A puzzle is built in two steps:
//!
//! * A random Hamiltonian path is generated with a [`random_path::RandomPath`] object and its
//!   [`random_path::RandomPath::generate`] method. Rendered as a grid of numbers, the path is
//!   the solution of the puzzle.
//!
//! * Clues are removed from the complete grid with [`puzzles::generate_puzzle`], which keeps
//!   invoking the solver to guarantee that the remaining clues still pin down a single
//!   solution. The [`puzzles::PuzzleParameters`] object selects the grid dimensions, the
//!   adjacency rule, the clue pattern, and the difficulty.
//!
//! Both steps consume random numbers from a caller-provided [`rand::Rng`] source, so a seeded
//! generator reproduces the same puzzle.

pub mod path;
pub mod puzzles;
pub mod random_path;
