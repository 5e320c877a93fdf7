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

//! crop phenology catalog: per-crop NDVI envelopes and bloom windows. Selecting a crop
//! switches the bloom domain from the generic seasonal curve to the crop's own window
//! logic. The built-in catalog covers the Kenya monitoring region; deployments can
//! override it from a RON config file.

use std::fs;
use std::path::Path;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use crate::{invalid_dataset, Result};

/* #region bloom windows ******************************************************************************************/

/// an inclusive month range (1-12) with a peak month. Windows may wrap the year
/// boundary (start > end), e.g. a Nov-Jan short rains season.
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(rename_all="camelCase")]
pub struct BloomWindow {
    pub start_month: u32,
    pub end_month: u32,
    pub peak_month: u32
}

impl BloomWindow {
    pub fn contains_month (&self, month: u32)->bool {
        if self.start_month <= self.end_month {
            month >= self.start_month && month <= self.end_month
        } else { // wraps the year boundary
            month >= self.start_month || month <= self.end_month
        }
    }

    /// circular distance in months to the peak, always in 0..=6
    pub fn peak_distance (&self, month: u32)->u32 {
        let d = (month as i64 - self.peak_month as i64).unsigned_abs() as u32;
        d.min( 12 - d)
    }
}

/* #endregion bloom windows */

/* #region crop types *********************************************************************************************/

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
#[serde(rename_all="lowercase")]
pub enum CropCategory {
    Cash,
    Cereal,
    Fruit,
    Oilseed,
    Forage,
    Wildflower,
    Horticultural
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(rename_all="camelCase")]
pub struct CropType {
    pub id: String,
    pub name: String,
    pub category: CropCategory,

    /// NDVI at which bloom onset is detectable
    pub ndvi_threshold: f64,

    /// NDVI at the height of the crop's bloom
    pub peak_ndvi: f64,

    pub bloom_windows: Vec<BloomWindow>,

    /// growing regions, for display only
    #[serde(default)]
    pub regions: Vec<String>
}

impl CropType {
    /// the bloom window covering the given month (1-12), if any
    pub fn active_window (&self, month: u32)->Option<&BloomWindow> {
        self.bloom_windows.iter().find( |w| w.contains_month(month))
    }

    pub fn is_in_season (&self, month: u32)->bool {
        self.active_window(month).is_some()
    }
}

/* #endregion crop types */

/* #region catalog ************************************************************************************************/

macro_rules! crop {
    ($id:literal, $name:literal, $cat:ident, $thresh:literal, $peak:literal,
     [ $( ($s:literal,$e:literal,$p:literal) ),* ], [ $( $reg:literal ),* ]) => {
        CropType {
            id: $id.to_string(),
            name: $name.to_string(),
            category: CropCategory::$cat,
            ndvi_threshold: $thresh,
            peak_ndvi: $peak,
            bloom_windows: vec![ $( BloomWindow { start_month: $s, end_month: $e, peak_month: $p } ),* ],
            regions: vec![ $( $reg.to_string() ),* ]
        }
    }
}

lazy_static! {
    /// built-in Kenya crop catalog, bloom windows follow the long rains (Mar-May) and
    /// short rains (Oct-Dec) growing seasons
    pub static ref KENYA_CROPS: Vec<CropType> = vec![
        crop!( "sunflower",     "Sunflower",     Oilseed,       0.36, 0.66,
               [ (5,8,7) ],            [ "Rift Valley", "Western Kenya" ]),
        crop!( "coffee",        "Coffee",        Cash,          0.45, 0.78,
               [ (3,5,4), (10,12,11) ], [ "Central Highlands", "Mt. Kenya Slopes" ]),
        crop!( "tea",           "Tea",           Cash,          0.55, 0.85,
               [ (3,6,4) ],            [ "Kericho", "Nandi Hills" ]),
        crop!( "maize",         "Maize",         Cereal,        0.40, 0.75,
               [ (4,7,6), (11,1,12) ], [ "Rift Valley", "Western Kenya", "Eastern Kenya" ]),
        crop!( "pasture",       "Pasture Grass", Forage,        0.30, 0.60,
               [ (3,11,6) ],           [ "Laikipia", "Kajiado" ]),
        crop!( "wildflowers",   "Wildflowers",   Wildflower,    0.25, 0.55,
               [ (11,2,1) ],           [ "Rift Valley", "Coastal Lowlands" ]),
        crop!( "wheat",         "Wheat",         Cereal,        0.38, 0.70,
               [ (6,9,8) ],            [ "Narok", "Uasin Gishu" ]),
        crop!( "horticultural", "Horticultural", Horticultural, 0.42, 0.76,
               [ (1,12,4) ],           [ "Naivasha", "Central Highlands" ]),
        crop!( "avocado",       "Avocado",       Fruit,         0.48, 0.80,
               [ (9,11,10) ],          [ "Murang'a", "Kisii" ]),
        crop!( "mango",         "Mango",         Fruit,         0.42, 0.72,
               [ (8,10,9) ],           [ "Coastal Lowlands", "Eastern Kenya" ])
    ];
}

pub fn crop_by_id (id: &str)->Option<&'static CropType> {
    KENYA_CROPS.iter().find( |c| c.id == id)
}

/// load a crop catalog from a RON file, replacing the built-in one. Rejects crops with
/// inverted NDVI envelopes since the interpolation in the derivation would misbehave.
pub fn load_crop_catalog (path: impl AsRef<Path>)->Result<Vec<CropType>> {
    let input = fs::read_to_string( path.as_ref())?;
    let crops: Vec<CropType> = ron::from_str( &input)?;

    for c in &crops {
        if c.peak_ndvi <= c.ndvi_threshold {
            return Err( invalid_dataset( format!("crop {} has peakNdvi <= ndviThreshold", c.id)))
        }
        if c.bloom_windows.is_empty() {
            return Err( invalid_dataset( format!("crop {} has no bloom windows", c.id)))
        }
    }
    Ok(crops)
}

/* #endregion catalog */
