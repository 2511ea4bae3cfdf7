/*
random_path.rs

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

//! Generate a random Hamiltonian path.

use log::debug;
use rand::Rng;
use std::time::Instant;

use super::path::Path;
use crate::geometry::{Geometry, Location};

/// Scaling factor for how much shuffling to do.
const SHUFFLE_FACTOR: usize = 5;

/// [`RandomPath`] object.
///
/// A random path is built by starting from a simple winding path and shuffling it for a while
/// with moves that keep the path Hamiltonian. The shuffle is the "backbite" move described in
/// *Secondary Structures in Long Compact Polymers* (<https://arxiv.org/abs/cond-mat/0508094>):
/// take the first square of the path, pick one of its neighbours other than the second square,
/// and reverse the section of the path before that neighbour. The neighbour becomes directly
/// connected to the old path head, and the path gets a new head.
///
/// For instance, with the path on the left and "8" as the chosen neighbour of "1":
///
/// ```text
///  1  2  3  4      7  6  5  4
///  8  7  6  5  ->  8  1  2  3
///  9 10 11 12      9 10 11 12
/// 16 15 14 13     16 15 14 13
/// ```
///
/// Because of the random-walk nature of the shuffling, the far end of the path could stay stuck
/// in a corner. The whole path is reversed halfway through the shuffle budget so that both ends
/// get agitated.
pub struct RandomPath {
    /// Grid geometry the paths are generated on.
    pub geometry: Geometry,

    /// Number of shuffle operations applied to the last generated path.
    pub shuffles: usize,

    /// Duration in seconds it took to generate the last random path.
    pub duration: f32,

    /// Time when the path generation started. Used to compute the [`RandomPath::duration`].
    start: Instant,
}

impl RandomPath {
    /// Create the object.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            shuffles: 0,
            duration: 0.0,
            start: Instant::now(),
        }
    }

    /// Construct the simple winding path that the shuffle starts from: row 0 left to right,
    /// row 1 right to left, and so on.
    fn simple_hampath(&self) -> Path {
        let mut path: Path = Path::new(self.geometry.area());
        for y in 0..self.geometry.height {
            if y % 2 == 0 {
                for x in 0..self.geometry.width {
                    path.push(Location::new(x, y));
                }
            } else {
                for x in (0..self.geometry.width).rev() {
                    path.push(Location::new(x, y));
                }
            }
        }
        path
    }

    /// Generate and return a random Hamiltonian path.
    pub fn generate(&mut self, rng: &mut impl Rng) -> Path {
        self.start = Instant::now();
        self.shuffles = 2 * SHUFFLE_FACTOR * self.geometry.area();

        let mut path: Path = self.simple_hampath();
        for i in 0..self.shuffles {
            // Shuffle the other end of the path during the second half of the budget
            if i == self.shuffles / 2 {
                path.reverse();
            }

            // Pick a random neighbour of the path head, other than the square the head is
            // currently connected to
            let head: Location = path.get()[0];
            let next: Location = path.get()[1];
            let neighbours: Vec<Location> = self.geometry.neighbours_except(head, next);
            let chosen: Location = neighbours[rng.random_range(0..neighbours.len())];

            // The neighbour is somewhere in the path, which covers the whole grid
            let index: usize = path.position(chosen).expect("the path covers the grid");
            path.reverse_prefix(index);
        }

        self.duration = self.start.elapsed().as_secs_f32();
        debug!(
            "Shuffles = {}  Duration = {}",
            self.shuffles, self.duration
        );
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn assert_hamiltonian(path: &Path, geometry: &Geometry) {
        assert_eq!(path.len(), geometry.area());
        for y in 0..geometry.height {
            for x in 0..geometry.width {
                assert!(path.position(Location::new(x, y)).is_some());
            }
        }
        for pair in path.get().windows(2) {
            assert_eq!(geometry.distance(pair[0], pair[1]), 1);
        }
    }

    #[test]
    fn simple_path_winds_through_the_grid() {
        let generator: RandomPath = RandomPath::new(Geometry::new(3, 3, false));
        let path: Path = generator.simple_hampath();

        assert_hamiltonian(&path, &generator.geometry);
        assert_eq!(path.get()[0], Location::new(0, 0));
        assert_eq!(path.get()[3], Location::new(2, 1));
        assert_eq!(path.get()[8], Location::new(2, 2));
    }

    #[test]
    fn random_paths_stay_hamiltonian() {
        for diagonal in [false, true] {
            let geometry: Geometry = Geometry::new(5, 4, diagonal);
            let mut generator: RandomPath = RandomPath::new(geometry);
            let mut rng: StdRng = StdRng::seed_from_u64(13);

            for _ in 0..10 {
                let path: Path = generator.generate(&mut rng);
                assert_hamiltonian(&path, &geometry);
            }
        }
    }

    #[test]
    fn same_seed_same_path() {
        let geometry: Geometry = Geometry::new(5, 5, false);
        let mut generator: RandomPath = RandomPath::new(geometry);

        let mut rng: StdRng = StdRng::seed_from_u64(42);
        let first: Path = generator.generate(&mut rng);
        let mut rng: StdRng = StdRng::seed_from_u64(42);
        let second: Path = generator.generate(&mut rng);

        assert_eq!(first, second);
    }
}
