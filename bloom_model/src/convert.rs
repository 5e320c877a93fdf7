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

//! offline conversion of tabular NDVI samples (as exported from AppEEARS and similar
//! portals) into the GeoJSON form [`RawDataset::from_geojson`] consumes.

use std::fs;
use std::path::Path;
use serde::Deserialize;
use serde_json::json;
use bloom_common::{geo::GeoRect, round3};
use crate::Result;

/// NDVI outside this range indicates a fill value or sensor artifact
pub const NDVI_MIN: f64 = -0.2;
pub const NDVI_MAX: f64 = 1.0;

#[derive(Debug,Deserialize)]
struct NdviRow {
    latitude: f64,
    longitude: f64,
    ndvi: f64,

    #[serde(default)]
    land_type: Option<String>
}

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct ConvertStats {
    pub rows_read: usize,
    pub features_written: usize,
    pub min_ndvi: f64,
    pub max_ndvi: f64
}

/// convert a NDVI sample CSV (columns latitude, longitude, ndvi and optional land_type)
/// into a GeoJSON FeatureCollection file, dropping fill values and rows outside the
/// optional bounding box
pub fn csv_to_geojson (input: impl AsRef<Path>, output: impl AsRef<Path>, bounds: Option<GeoRect>)->Result<ConvertStats> {
    let mut reader = csv::Reader::from_path( input.as_ref())?;

    let mut rows_read = 0;
    let mut min_ndvi = f64::MAX;
    let mut max_ndvi = f64::MIN;
    let mut features: Vec<serde_json::Value> = Vec::new();

    for rec in reader.deserialize() {
        let row: NdviRow = rec?;
        rows_read += 1;

        if row.ndvi < NDVI_MIN || row.ndvi > NDVI_MAX { continue }
        if let Some(rect) = &bounds {
            let p = bloom_common::geo::GeoPoint::from_lon_lat_degrees( row.longitude, row.latitude);
            if !rect.contains(&p) { continue }
        }

        min_ndvi = min_ndvi.min(row.ndvi);
        max_ndvi = max_ndvi.max(row.ndvi);

        let mut props = json!({ "ndvi": round3(row.ndvi) });
        if let Some(lt) = &row.land_type {
            props["landType"] = json!(lt);
        }

        features.push( json!({
            "type": "Feature",
            "geometry": { "type": "Point", "coordinates": [ round3(row.longitude), round3(row.latitude) ] },
            "properties": props
        }));
    }

    if features.is_empty() {
        min_ndvi = 0.0;
        max_ndvi = 0.0;
    }

    let features_written = features.len();
    let collection = json!({ "type": "FeatureCollection", "features": features });
    fs::write( output.as_ref(), serde_json::to_string_pretty( &collection)?)?;

    Ok( ConvertStats { rows_read, features_written, min_ndvi, max_ndvi })
}
