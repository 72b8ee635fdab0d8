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

use image::{DynamicImage, ImageBuffer, Pixel};
use ndarray::prelude::*;
use ndarray::{ErrorKind, ShapeError};

use crate::error::Error;
use crate::grid::Dimensions;
use crate::rearrange::rearrange;

fn rearrange_buffer<P>(
    buf: &ImageBuffer<P, Vec<P::Subpixel>>,
    tile: Dimensions,
    ordering: &[usize],
) -> Result<ImageBuffer<P, Vec<P::Subpixel>>, Error>
where
    P: Pixel,
    P::Subpixel: Default + Send + Sync,
{
    let (width, height) = buf.dimensions();
    let shape = (
        height as usize,
        width as usize,
        usize::from(P::CHANNEL_COUNT),
    );
    let samples = buf
        .as_raw()
        .get(..shape.0 * shape.1 * shape.2)
        .ok_or_else(|| ShapeError::from_kind(ErrorKind::OutOfBounds))?;

    let arr = <ArrayView3<P::Subpixel>>::from_shape(shape, samples)?;
    let out = rearrange(arr, tile, ordering)?;

    ImageBuffer::from_raw(width, height, out.into_raw_vec())
        .ok_or_else(|| ShapeError::from_kind(ErrorKind::IncompatibleShape).into())
}

/// Rearranges tiles of a decoded image.
///
/// See [rearrange](crate::rearrange) for the meaning of `tile` and `ordering`.
/// Output has the same dimensions and pixel format as `image`.
pub fn rearrange_image(
    image: &DynamicImage,
    tile: Dimensions,
    ordering: &[usize],
) -> Result<DynamicImage, Error> {
    Ok(match image {
        DynamicImage::ImageLuma8(b) => {
            DynamicImage::ImageLuma8(rearrange_buffer(b, tile, ordering)?)
        }
        DynamicImage::ImageLumaA8(b) => {
            DynamicImage::ImageLumaA8(rearrange_buffer(b, tile, ordering)?)
        }
        DynamicImage::ImageRgb8(b) => {
            DynamicImage::ImageRgb8(rearrange_buffer(b, tile, ordering)?)
        }
        DynamicImage::ImageRgba8(b) => {
            DynamicImage::ImageRgba8(rearrange_buffer(b, tile, ordering)?)
        }
        DynamicImage::ImageLuma16(b) => {
            DynamicImage::ImageLuma16(rearrange_buffer(b, tile, ordering)?)
        }
        DynamicImage::ImageLumaA16(b) => {
            DynamicImage::ImageLumaA16(rearrange_buffer(b, tile, ordering)?)
        }
        DynamicImage::ImageRgb16(b) => {
            DynamicImage::ImageRgb16(rearrange_buffer(b, tile, ordering)?)
        }
        DynamicImage::ImageRgba16(b) => {
            DynamicImage::ImageRgba16(rearrange_buffer(b, tile, ordering)?)
        }
        DynamicImage::ImageRgb32F(b) => {
            DynamicImage::ImageRgb32F(rearrange_buffer(b, tile, ordering)?)
        }
        DynamicImage::ImageRgba32F(b) => {
            DynamicImage::ImageRgba32F(rearrange_buffer(b, tile, ordering)?)
        }
        image => return Err(Error::UnsupportedFormat(image.color())),
    })
}
