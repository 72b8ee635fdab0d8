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

use log::{debug, trace};
use ndarray::prelude::*;
use ndarray::Slice;
use rayon::prelude::*;

use crate::error::InvalidArrangementError;
use crate::grid::{Dimensions, TileCoordinate, TileGrid};
use crate::validate::is_permutation;

fn extract_tile<A, D>(mut arr: ArrayView<'_, A, D>, coord: TileCoordinate) -> Array<A, D>
where
    A: Clone,
    D: Dimension,
{
    arr.slice_axis_inplace(Axis(0), Slice::from(coord.top..coord.bottom));
    arr.slice_axis_inplace(Axis(1), Slice::from(coord.left..coord.right));
    arr.to_owned()
}

fn paste<A, D>(dst: &mut Array<A, D>, src: &Array<A, D>, x: usize, y: usize)
where
    A: Clone,
    D: Dimension,
{
    let mut dst = dst.view_mut();
    dst.slice_axis_inplace(Axis(0), Slice::from(y..y + src.len_of(Axis(0))));
    dst.slice_axis_inplace(Axis(1), Slice::from(x..x + src.len_of(Axis(1))));
    dst.assign(src);
}

/// Main rearrange algorithm.
///
/// Cuts array into tiles and moves them such that output tile `i`
/// is source tile `ordering[i]`. Tiles are indexed row-major.
///
/// Parameters:
/// * `arr` : Input array view. Can be multidimensional,
///   first 2 dimension is (height, width) and will be rearranged.
///   The rest (eg. channels) is moved along with it.
/// * `tile` : Tile size. Must divide both width and height.
/// * `ordering` : Permutation of tile indices.
///
/// Returns [InvalidArrangementError] if array has less than 2 dimension,
/// or if [is_valid](crate::is_valid) fails. Output is a new array with the same shape.
pub fn rearrange<A, D>(
    arr: ArrayView<'_, A, D>,
    tile: Dimensions,
    ordering: &[usize],
) -> Result<Array<A, D>, InvalidArrangementError>
where
    A: Clone + Default + Send + Sync,
    D: Dimension,
{
    if arr.ndim() < 2 {
        return Err(InvalidArrangementError);
    }

    let image = Dimensions::new(arr.len_of(Axis(1)), arr.len_of(Axis(0)));
    let grid = TileGrid::new(image, tile)
        .filter(|g| is_permutation(ordering, g.len()))
        .ok_or(InvalidArrangementError)?;
    debug!(
        "Rearranging {}x{} image into {}x{} tiles of {}x{}",
        image.width,
        image.height,
        grid.horizontal_tiles(),
        grid.vertical_tiles(),
        tile.width,
        tile.height,
    );

    let coords = grid.tile_coordinates();

    // tiles[i] is output position i
    let tiles: Vec<Array<A, D>> = ordering
        .par_iter()
        .map(|&i| extract_tile(arr.view(), coords[i]))
        .collect();

    let rows: Vec<Array<A, D>> = (0..grid.vertical_tiles())
        .into_par_iter()
        .map(|r| {
            let mut shape = arr.raw_dim();
            shape[0] = tile.height;
            let mut row = Array::from_elem(shape, A::default());

            for c in 0..grid.horizontal_tiles() {
                paste(&mut row, &tiles[grid.index(r, c)], c * tile.width, 0);
            }

            trace!("Merged row {r}");
            row
        })
        .collect();
    drop(tiles);

    let mut out = Array::from_elem(arr.raw_dim(), A::default());
    for (r, row) in rows.iter().enumerate() {
        paste(&mut out, row, 0, r * tile.height);
    }

    Ok(out)
}
