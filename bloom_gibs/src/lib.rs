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
#![allow(unused)]

//! NASA GIBS (Global Imagery Browse Services) date alignment and WMTS tile addressing
//! for the 16-day MODIS/VIIRS vegetation index composites. GIBS only serves tiles for
//! the exact composite period start dates, so any user-picked date has to be snapped
//! to the cadence grid before a tile URL is formed - a tile requested for an unaligned
//! or too recent date comes back blank without an error status.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use bloom_common::datetime::{iso_date_string, utc_now};

mod errors;
pub use errors::*;

pub mod probe;

/* #region cadence constants **************************************************************************************/

/// composite period length of the 16-day vegetation index products
pub const CADENCE_DAYS: i64 = 16;

/// processing latency: composites are not reliably served for the trailing days
pub const LATENCY_DAYS: i64 = 8;

/// first day of the first 16-day MODIS composite period (Terra science start)
pub const MODIS_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2000, 2, 18) {
    Some(d) => d,
    None => panic!("not a valid date")
};

pub const GIBS_BASE_URL: &str = "https://gibs.earthdata.nasa.gov/wmts/epsg3857/best";

/// GIBS vegetation layers use the GoogleMapsCompatible_Level9 tile matrix set
pub const TILE_MATRIX_SET: &str = "GoogleMapsCompatible_Level9";

pub const MAX_ZOOM: u32 = 9;
pub const TILE_SIZE: u32 = 256;

/* #endregion cadence constants */

/* #region layers *************************************************************************************************/

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Display,EnumIter,EnumString)]
#[strum(serialize_all="kebab-case", ascii_case_insensitive)]
#[serde(rename_all="kebab-case")]
pub enum GibsLayerType {
    Ndvi,
    Evi,
    ViirsNdvi
}

#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
#[serde(rename_all(serialize="camelCase"))]
pub struct GibsLayer {
    pub layer_type: GibsLayerType,
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub resolution: &'static str,
    pub cadence_days: i64
}

pub const GIBS_LAYERS: [GibsLayer;3] = [
    GibsLayer { layer_type: GibsLayerType::Ndvi,
                id: "MODIS_Terra_NDVI_16Day", title: "MODIS Terra NDVI (16-day)",
                description: "Normalized Difference Vegetation Index from MODIS Terra",
                resolution: "250m", cadence_days: CADENCE_DAYS },
    GibsLayer { layer_type: GibsLayerType::Evi,
                id: "MODIS_Terra_EVI_16Day", title: "MODIS Terra EVI (16-day)",
                description: "Enhanced Vegetation Index from MODIS Terra",
                resolution: "250m", cadence_days: CADENCE_DAYS },
    GibsLayer { layer_type: GibsLayerType::ViirsNdvi,
                id: "VIIRS_SNPP_NDVI_16Day", title: "VIIRS SNPP NDVI (16-day)",
                description: "Normalized Difference Vegetation Index from VIIRS Suomi NPP",
                resolution: "500m", cadence_days: CADENCE_DAYS },
];

pub fn layer_for (layer_type: GibsLayerType)->&'static GibsLayer {
    match layer_type {
        GibsLayerType::Ndvi => &GIBS_LAYERS[0],
        GibsLayerType::Evi => &GIBS_LAYERS[1],
        GibsLayerType::ViirsNdvi => &GIBS_LAYERS[2]
    }
}

/* #endregion layers */

/* #region date alignment *****************************************************************************************/

/// the most recent date for which composites can be assumed to be served
pub fn latest_safe_date_at (now: DateTime<Utc>)->NaiveDate {
    now.date_naive() - Duration::days(LATENCY_DAYS)
}

pub fn latest_safe_date ()->NaiveDate {
    latest_safe_date_at( utc_now())
}

/// snap a requested date onto the 16-day composite grid, with explicit wall clock for
/// latency clamping. The result never exceeds the request - we snap to the period the
/// date falls into, not the nearest period boundary.
pub fn align_date_at (requested: NaiveDate, now: DateTime<Utc>)->NaiveDate {
    let latest = latest_safe_date_at(now);
    let clamped = if requested > latest { latest } else { requested };
    if clamped <= MODIS_EPOCH { return MODIS_EPOCH }

    let days = (clamped - MODIS_EPOCH).num_days();
    MODIS_EPOCH + Duration::days( (days / CADENCE_DAYS) * CADENCE_DAYS)
}

pub fn align_date (requested: NaiveDate)->NaiveDate {
    align_date_at( requested, utc_now())
}

pub fn is_data_available_at (date: NaiveDate, now: DateTime<Utc>)->bool {
    date >= MODIS_EPOCH && date <= latest_safe_date_at(now)
}

pub fn is_data_available (date: NaiveDate)->bool {
    is_data_available_at( date, utc_now())
}

/// all composite period start dates intersecting [start,end], clamped to what is
/// currently served. Consecutive results are exactly one cadence apart.
pub fn composite_dates_at (start: NaiveDate, end: NaiveDate, now: DateTime<Utc>)->Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = Vec::new();
    let last = {
        let latest = latest_safe_date_at(now);
        if end > latest { latest } else { end }
    };

    let mut d = align_date_at( start, now);
    while d <= last {
        dates.push(d);
        d += Duration::days(CADENCE_DAYS);
    }
    dates
}

pub fn composite_dates (start: NaiveDate, end: NaiveDate)->Vec<NaiveDate> {
    composite_dates_at( start, end, utc_now())
}

/* #endregion date alignment */

/* #region tile addressing ****************************************************************************************/

/// WMTS REST tile URL for an already aligned composite date
pub fn tile_url (layer: &GibsLayer, aligned_date: NaiveDate, z: u32, x: u32, y: u32)->String {
    format!("{}/{}/default/{}/{}/{}/{}/{}.png",
            GIBS_BASE_URL, layer.id, iso_date_string(&aligned_date), TILE_MATRIX_SET, z, x, y)
}

/// URL template with {z}/{x}/{y} placeholders, as consumed by slippy map libraries
pub fn tile_url_template (layer: &GibsLayer, aligned_date: NaiveDate)->String {
    format!("{}/{}/default/{}/{}/{{z}}/{{x}}/{{y}}.png",
            GIBS_BASE_URL, layer.id, iso_date_string(&aligned_date), TILE_MATRIX_SET)
}

/// raster source descriptor handed to the host map, date already snapped to the grid
#[derive(Debug,Clone,PartialEq,Serialize)]
#[serde(rename_all(serialize="camelCase"))]
pub struct GibsRasterSource {
    pub layer: GibsLayer,
    pub date: NaiveDate,
    pub url_template: String,
    pub tile_size: u32,
    pub max_zoom: u32,
    pub attribution: &'static str
}

pub fn raster_source_at (layer_type: GibsLayerType, requested: NaiveDate, now: DateTime<Utc>)->GibsRasterSource {
    let layer = layer_for(layer_type);
    let date = align_date_at( requested, now);

    GibsRasterSource {
        layer: *layer,
        date,
        url_template: tile_url_template( layer, date),
        tile_size: TILE_SIZE,
        max_zoom: MAX_ZOOM,
        attribution: "NASA EOSDIS GIBS"
    }
}

pub fn raster_source (layer_type: GibsLayerType, requested: NaiveDate)->GibsRasterSource {
    raster_source_at( layer_type, requested, utc_now())
}

/* #endregion tile addressing */

/* #region NDVI legend ********************************************************************************************/

/// human readable land cover description for a NDVI value, matching the GIBS color ramp
pub fn ndvi_description (ndvi: f64)->&'static str {
    if ndvi < 0.0       { "Water or snow" }
    else if ndvi < 0.1  { "Barren or built-up" }
    else if ndvi < 0.2  { "Sparse vegetation" }
    else if ndvi < 0.4  { "Shrub and grassland" }
    else if ndvi < 0.6  { "Moderate vegetation" }
    else if ndvi < 0.8  { "Dense vegetation" }
    else                { "Very dense vegetation" }
}

/// bloom likelihood phrase for a NDVI value relative to a crop's bloom onset threshold
pub fn bloom_status (ndvi: f64, threshold: f64)->&'static str {
    if ndvi < threshold * 0.5        { "No bloom activity" }
    else if ndvi < threshold         { "Pre-bloom greening" }
    else if ndvi < threshold * 1.25  { "Possible bloom onset" }
    else if ndvi < threshold * 1.5   { "Active bloom likely" }
    else                             { "Peak bloom conditions" }
}

/* #endregion NDVI legend */
