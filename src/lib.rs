//! Library to rearrange image/array tiles by a permutation.
//!
//! The image is cut into a grid of equally sized tiles, indexed
//! row-major from the top-left. An ordering then says, for every
//! output position, which source tile goes there:
//!
//! * Tile size must divide both image dimensions exactly.
//! * Ordering must use every tile index exactly once.
//! * Tiles are moved as-is, never rotated nor flipped.
//!
//! Use [is_valid] to check inputs, [rearrange] for raw arrays
//! and [rearrange_image] for decoded images.

// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
//

mod error;
mod grid;
pub mod ordering;
mod raster;
mod rearrange;
mod validate;

#[doc(inline)]
pub use crate::error::{Error, InvalidArrangementError};
#[doc(inline)]
pub use crate::grid::{Dimensions, TileCoordinate, TileGrid};
#[doc(inline)]
pub use crate::raster::rearrange_image;
#[doc(inline)]
pub use crate::rearrange::rearrange;
#[doc(inline)]
pub use crate::validate::is_valid;
