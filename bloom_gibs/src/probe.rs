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

//! availability probing of GIBS tile endpoints. GIBS returns blank tiles rather than
//! error statuses for missing composites, so the probe checks HEAD status and content
//! length of a few well known tiles to tell a served composite from an empty one.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{tile_url, GibsLayer, Result};

/// probe tiles at increasing zoom, from whole-disk down to the Kenya monitoring region
pub const PROBE_TILES: [(u32,u32,u32,&str);3] = [
    (3, 4, 5,   "global view"),
    (5, 18, 13, "Africa/Europe"),
    (6, 37, 26, "Kenya region"),
];

/// a blank GIBS PNG tile is a few hundred bytes, real composites are well above this
pub const MIN_TILE_BYTES: u64 = 1000;

#[derive(Debug,Clone,Serialize)]
#[serde(rename_all(serialize="camelCase"))]
pub struct TileProbeResult {
    pub name: &'static str,
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
    pub success: bool,

    #[serde(skip_serializing_if="Option::is_none")]
    pub error: Option<String>
}

#[derive(Debug,Clone,Serialize)]
#[serde(rename_all(serialize="camelCase"))]
pub struct TileProbeReport {
    pub layer_id: &'static str,
    pub date: NaiveDate,
    pub results: Vec<TileProbeResult>
}

impl TileProbeReport {
    /// the composite is considered served if any probe tile carries real imagery
    pub fn is_available (&self)->bool {
        self.results.iter().any( |r| r.success)
    }
}

/// sequentially HEAD-check the probe tiles of a layer for an aligned composite date.
/// Individual tile failures are reported in the result, not raised - only client
/// construction level errors propagate.
pub async fn probe_layer (client: &reqwest::Client, layer: &GibsLayer, aligned_date: NaiveDate)->Result<TileProbeReport> {
    let mut results: Vec<TileProbeResult> = Vec::with_capacity(PROBE_TILES.len());

    for (z,x,y,name) in PROBE_TILES {
        let url = tile_url( layer, aligned_date, z, x, y);
        match client.head(&url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                let content_type = response.headers().get( reqwest::header::CONTENT_TYPE)
                    .and_then( |v| v.to_str().ok())
                    .map( |s| s.to_string());
                let content_length = response.content_length();
                let success = response.status().is_success()
                    && content_length.map( |n| n >= MIN_TILE_BYTES).unwrap_or(false);

                debug!("probed {} tile {}: status {}, {:?} bytes", layer.id, name, status, content_length);
                results.push( TileProbeResult { name, url, status, content_type, content_length, success, error: None });
            }
            Err(e) => {
                warn!("failed to probe {} tile {}: {}", layer.id, name, e);
                results.push( TileProbeResult {
                    name, url, status: 0, content_type: None, content_length: None,
                    success: false, error: Some(e.to_string())
                });
            }
        }
    }

    Ok( TileProbeReport { layer_id: layer.id, date: aligned_date, results })
}
