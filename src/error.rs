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

use image::ColorType;
use ndarray::ShapeError;
use thiserror::Error;

/// Tile size or ordering does not fit the image.
///
/// The message is the same whichever condition failed.
/// Check with [is_valid](crate::is_valid) piecewise for finer diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("The tile size or ordering are not valid for the given image")]
pub struct InvalidArrangementError;

/// Error from rearranging a decoded image.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    InvalidArrangement(#[from] InvalidArrangementError),

    #[error("Image samples do not match its dimensions: {0}")]
    Shape(#[from] ShapeError),

    #[error("Unsupported pixel format {0:?}")]
    UnsupportedFormat(ColorType),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_fixed() {
        assert_eq!(
            InvalidArrangementError.to_string(),
            "The tile size or ordering are not valid for the given image",
        );
        assert_eq!(
            Error::from(InvalidArrangementError).to_string(),
            InvalidArrangementError.to_string(),
        );
    }

    #[test]
    fn test_shape_message() {
        let err = Error::from(ShapeError::from_kind(ndarray::ErrorKind::IncompatibleShape));

        assert!(err
            .to_string()
            .starts_with("Image samples do not match its dimensions: "));
    }
}
