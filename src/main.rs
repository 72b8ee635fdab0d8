//! Main Program for Retile
//! Run with `--help` for more instruction

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

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{bail, Error};
use clap::{ArgGroup, Parser};
use image::io::Reader as ImageReader;
use image::GenericImageView;
use log::{info, warn};
use rand::SeedableRng;
use sha2::{Digest, Sha256};

use retile::{ordering, rearrange_image, Dimensions, TileGrid};

#[derive(Parser, Debug)]
#[command(author, version)]
#[command(group(ArgGroup::new("order").required(true).args(["ordering", "shuffle"])))]
struct Args {
    /// Input file
    input: PathBuf,

    /// Tile width
    #[arg(short = 't', long)]
    tile_width: usize,

    /// Tile height (defaults to tile width)
    #[arg(long)]
    tile_height: Option<usize>,

    /// Comma-separated tile ordering.
    /// Output tile i is taken from source tile ordering[i].
    #[arg(long, value_delimiter = ',')]
    ordering: Vec<usize>,

    /// Use random ordering
    #[arg(long)]
    shuffle: bool,

    /// Random seed
    #[arg(long, requires = "shuffle")]
    seed: Option<String>,

    /// Apply inverse of the ordering (undo previous rearrangement)
    #[arg(long)]
    inverse: bool,

    /// Print applied ordering to stdout
    #[arg(long)]
    print_ordering: bool,

    /// Output file
    #[arg(short = 'o', long)]
    output: PathBuf,
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let tile = Dimensions::new(args.tile_width, args.tile_height.unwrap_or(args.tile_width));

    let im = ImageReader::new(BufReader::new(File::open(&args.input)?))
        .with_guessed_format()?
        .decode()?;
    let (width, height) = im.dimensions();
    let image = Dimensions::new(width as _, height as _);
    info!("Loaded {}x{} image ({:?})", width, height, im.color());

    let mut order = if args.shuffle {
        let Some(grid) = TileGrid::new(image, tile) else {
            bail!(
                "Tile size {}x{} does not divide image size {}x{}",
                tile.width,
                tile.height,
                width,
                height,
            );
        };

        let mut random = if let Some(seed) = args.seed {
            let mut hasher = Sha256::new();
            hasher.update(seed);

            rand_xoshiro::Xoshiro256StarStar::from_seed(hasher.finalize().into())
        } else {
            rand_xoshiro::Xoshiro256StarStar::from_entropy()
        };

        ordering::shuffled(grid.len(), &mut random)
    } else {
        args.ordering
    };

    if args.inverse {
        order = match ordering::inverse(&order) {
            Some(v) => v,
            None => {
                warn!("Ordering is not a permutation, cannot invert it");
                order
            }
        };
    }

    let out = rearrange_image(&im, tile, &order)?;

    if args.print_ordering {
        let s: Vec<_> = order.iter().map(|v| v.to_string()).collect();
        println!("{}", s.join(","));
    }

    out.save(&args.output)?;

    Ok(())
}
