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

/// minimal geodetic support for the BloomWatch core. Map rendering and projections are
/// host concerns - the core only needs lon/lat points in degrees and axis aligned
/// bounding boxes, so we use the new type pattern without pulling in ellipsoid algorithms.

use std::fmt;
use serde::{Serialize,Deserialize};
use serde::ser::{Serializer, SerializeSeq};
use serde::de::Deserializer;

/* #region GeoPoint ***********************************************************************************************/

/// a geodetic point in degrees, serialized as a GeoJSON coordinate array [lon,lat]
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoPoint {
    lon: f64,
    lat: f64
}

impl GeoPoint {
    pub const fn from_lon_lat_degrees (lon: f64, lat: f64)->Self {
        GeoPoint { lon, lat }
    }

    pub fn longitude_degrees (&self)->f64 { self.lon }
    pub fn latitude_degrees (&self)->f64 { self.lat }

    pub fn is_valid (&self)->bool {
        self.lon >= -180.0 && self.lon <= 180.0 && self.lat >= -90.0 && self.lat <= 90.0
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.lon, self.lat)
    }
}

impl Serialize for GeoPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut seq = serializer.serialize_seq( Some(2))?;
        seq.serialize_element( &self.lon)?;
        seq.serialize_element( &self.lat)?;
        seq.end()
    }
}

impl<'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: Deserializer<'de> {
        let a = <[f64;2]>::deserialize(deserializer)?;
        Ok( GeoPoint { lon: a[0], lat: a[1] } )
    }
}

/* #endregion GeoPoint */

/* #region GeoRect ***********************************************************************************************/

/// axis aligned lon/lat bounding box in degrees
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(rename_all="camelCase")]
pub struct GeoRect {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64
}

impl GeoRect {
    pub const fn new (west: f64, south: f64, east: f64, north: f64)->Self {
        GeoRect { west, south, east, north }
    }

    pub fn contains (&self, p: &GeoPoint)->bool {
        let lon = p.longitude_degrees();
        let lat = p.latitude_degrees();
        lon >= self.west && lon <= self.east && lat >= self.south && lat <= self.north
    }
}

impl fmt::Display for GeoRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{} .. {},{}]", self.west, self.south, self.east, self.north)
    }
}

/* #endregion GeoRect */

/// default map view center for the Kenya monitoring region
pub const KENYA_CENTER: GeoPoint = GeoPoint::from_lon_lat_degrees( 37.9062, -0.0236);

/// Kenya bounding box used by the CSV import filter
pub const KENYA_BOUNDS: GeoRect = GeoRect::new( 33.5, -5.0, 42.0, 5.0);
