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

use ndarray::prelude::*;

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl From<(usize, usize)> for Dimensions {
    fn from((width, height): (usize, usize)) -> Self {
        Self::new(width, height)
    }
}

/// Bounding box of a tile in source pixel space.
///
/// `left` and `top` are inclusive, `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoordinate {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

/// Partition of an image into equal tiles.
///
/// Tiles are indexed row-major: `index = row * horizontal + column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    image: Dimensions,
    tile: Dimensions,
    horizontal: usize,
    vertical: usize,
    len: usize,
}

impl TileGrid {
    /// Creates tile grid.
    ///
    /// Returns [None] if a tile dimension is zero, does not
    /// divide the matching image dimension exactly, or the
    /// tile count overflows.
    pub fn new(image: Dimensions, tile: Dimensions) -> Option<Self> {
        if tile.width == 0 || tile.height == 0 {
            return None;
        }
        if image.width % tile.width != 0 || image.height % tile.height != 0 {
            return None;
        }

        let horizontal = image.width / tile.width;
        let vertical = image.height / tile.height;

        Some(Self {
            image,
            tile,
            horizontal,
            vertical,
            len: horizontal.checked_mul(vertical)?,
        })
    }

    pub fn image(&self) -> Dimensions {
        self.image
    }

    pub fn tile(&self) -> Dimensions {
        self.tile
    }

    /// Number of tiles per row.
    pub fn horizontal_tiles(&self) -> usize {
        self.horizontal
    }

    /// Number of tiles per column.
    pub fn vertical_tiles(&self) -> usize {
        self.vertical
    }

    /// Total tile count.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Grid position `(row, column)` of tile index.
    ///
    /// Panics if the grid is empty.
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.horizontal, index % self.horizontal)
    }

    /// Tile index of grid position.
    pub fn index(&self, row: usize, column: usize) -> usize {
        row * self.horizontal + column
    }

    /// Corner points of every tile, shape `(vertical + 1, horizontal + 1)`.
    ///
    /// Point at `[row, column]` is `(column * tile_width, row * tile_height)`.
    /// Adjacent tiles share corners, hence the extra row and column.
    pub fn lattice(&self) -> Array2<(usize, usize)> {
        let Dimensions { width, height } = self.tile;
        Array2::from_shape_fn((self.vertical + 1, self.horizontal + 1), |(r, c)| {
            (c * width, r * height)
        })
    }

    /// Bounding boxes of all tiles, in row-major index order.
    pub fn tile_coordinates(&self) -> Vec<TileCoordinate> {
        let lattice = self.lattice();

        let mut ret = Vec::with_capacity(self.len());
        for r in 0..self.vertical {
            for c in 0..self.horizontal {
                let (left, top) = lattice[[r, c]];
                let (right, bottom) = lattice[[r + 1, c + 1]];
                ret.push(TileCoordinate {
                    left,
                    top,
                    right,
                    bottom,
                });
            }
        }
        ret
    }
}
