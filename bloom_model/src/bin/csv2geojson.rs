/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “BloomWatch” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! command line tool to convert NDVI sample CSVs into BloomWatch GeoJSON datasets

use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;

use bloom_common::geo::KENYA_BOUNDS;
use bloom_model::convert::csv_to_geojson;

#[derive(Parser)]
#[command(about = "convert NDVI sample CSV into GeoJSON FeatureCollection")]
struct Args {
    /// only keep samples inside the Kenya bounding box
    #[arg(long)]
    kenya_only: bool,

    /// input CSV with latitude, longitude, ndvi columns
    input: PathBuf,

    /// output GeoJSON file
    output: PathBuf,
}

fn main()->Result<()> {
    let args = Args::parse();

    let bounds = if args.kenya_only { Some(KENYA_BOUNDS) } else { None };
    let stats = csv_to_geojson( &args.input, &args.output, bounds)?;

    println!("read {} rows, wrote {} features to {:?} (ndvi {:.3} .. {:.3})",
             stats.rows_read, stats.features_written, args.output, stats.min_ndvi, stats.max_ndvi);
    Ok(())
}
