// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::grid::{Dimensions, TileGrid};

/// Checks if tile size and ordering can rearrange the image.
///
/// Returns `true` iff:
/// * Tile size divides both image dimensions exactly (and is nonzero).
/// * `ordering` uses every tile index in `0..tile_count` exactly once.
pub fn is_valid(image: Dimensions, tile: Dimensions, ordering: &[usize]) -> bool {
    match TileGrid::new(image, tile) {
        Some(grid) => is_permutation(ordering, grid.len()),
        None => false,
    }
}

/// Checks `ordering` is a permutation of `0..n`.
pub(crate) fn is_permutation(ordering: &[usize], n: usize) -> bool {
    if ordering.len() != n {
        return false;
    }

    let mut seen = vec![false; n];
    ordering.iter().all(|&i| match seen.get_mut(i) {
        Some(s) if !*s => {
            *s = true;
            true
        }
        _ => false,
    })
}
