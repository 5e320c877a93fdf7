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

//! built-in seed datasets. These are fully deterministic - the spatial texture inside a
//! region comes from a fixed trigonometric cluster term, never from a random source, so
//! the same call always yields the identical dataset and derived results are cacheable.

use std::f64::consts::TAU;
use std::sync::Arc;
use bloom_common::{clamp01, geo::GeoPoint, round3};
use crate::{DatasetKind, GeoFeature, RawDataset};

/* #region seed regions *******************************************************************************************/

/// a circular seed region that is expanded into a grid of features
#[derive(Debug,Clone,Copy)]
pub struct SeedRegion {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub radius_deg: f64,
    pub base: f64
}

pub const BLOOM_REGIONS: [SeedRegion;8] = [
    SeedRegion { name: "Kenya Highlands",           lat: -0.4,  lon: 36.9,   radius_deg: 1.5, base: 0.80 },
    SeedRegion { name: "Rift Valley",               lat: 0.5,   lon: 35.7,   radius_deg: 1.2, base: 0.72 },
    SeedRegion { name: "Netherlands Tulip Fields",  lat: 52.3,  lon: 4.9,    radius_deg: 0.8, base: 0.85 },
    SeedRegion { name: "Japan Sakura Belt",         lat: 35.0,  lon: 135.8,  radius_deg: 1.0, base: 0.90 },
    SeedRegion { name: "California Central Valley", lat: 36.7,  lon: -119.8, radius_deg: 1.5, base: 0.75 },
    SeedRegion { name: "Provence",                  lat: 43.8,  lon: 5.0,    radius_deg: 0.8, base: 0.70 },
    SeedRegion { name: "Western Cape Fynbos",       lat: -33.9, lon: 19.0,   radius_deg: 1.0, base: 0.68 },
    SeedRegion { name: "Atacama Desert Bloom",      lat: -27.0, lon: -70.0,  radius_deg: 1.2, base: 0.55 },
];

pub const VEGETATION_REGIONS: [SeedRegion;6] = [
    SeedRegion { name: "Mau Forest",        lat: -0.5,  lon: 35.8,  radius_deg: 1.0, base: 0.88 },
    SeedRegion { name: "Aberdare Range",    lat: -0.4,  lon: 36.7,  radius_deg: 0.8, base: 0.82 },
    SeedRegion { name: "Mount Kenya",       lat: -0.15, lon: 37.3,  radius_deg: 0.7, base: 0.78 },
    SeedRegion { name: "Tsavo Savanna",     lat: -2.8,  lon: 38.5,  radius_deg: 1.5, base: 0.45 },
    SeedRegion { name: "Lake Victoria Basin", lat: -0.3, lon: 34.3, radius_deg: 1.2, base: 0.70 },
    SeedRegion { name: "Chalbi Desert",     lat: 3.0,   lon: 37.3,  radius_deg: 1.3, base: 0.15 },
];

/// concentric zone around a center point: (radius in degrees, base value, point count)
pub type RingZone = (f64, f64, usize);

pub const CLIMATE_CENTER: GeoPoint = bloom_common::geo::KENYA_CENTER;
pub const CLIMATE_ZONES: [RingZone;5] = [
    (0.0, 0.65, 1), (0.8, 0.50, 8), (1.6, 0.30, 12), (2.4, 0.20, 16), (3.2, 0.33, 20)
];

pub const POLLEN_CENTER: GeoPoint = bloom_common::geo::KENYA_CENTER;
pub const POLLEN_ZONES: [RingZone;5] = [
    (0.0, 0.67, 1), (0.6, 0.38, 6), (1.2, 0.23, 10), (1.8, 0.08, 14), (2.4, 0.03, 18)
];

/* #endregion seed regions */

/* #region feature generation *************************************************************************************/

/// fixed spatial texture term in [-0.1, 0.1], a stand-in for sub-regional variation
pub fn cluster_term (lat: f64, lon: f64)->f64 {
    (lat * 10.0).sin() * (lon * 10.0).cos() * 0.1
}

/// expand seed regions into grids of (2*steps+1)^2 features each, base value falling
/// off towards the region rim
pub fn grid_features (regions: &[SeedRegion], steps: i32, falloff: f64)->Vec<GeoFeature> {
    let mut features: Vec<GeoFeature> = Vec::new();
    let mut index = 0;

    for r in regions {
        let region = Arc::new( r.name.to_string());
        for iy in -steps..=steps {
            for ix in -steps..=steps {
                let lat = r.lat + r.radius_deg * iy as f64 / steps as f64;
                let lon = r.lon + r.radius_deg * ix as f64 / steps as f64;

                let dist_norm = (((ix*ix + iy*iy) as f64).sqrt() / (steps as f64 * std::f64::consts::SQRT_2)).min(1.0);
                let base = clamp01( r.base * (1.0 - falloff * dist_norm) + cluster_term( lat, lon));

                features.push( GeoFeature {
                    position: GeoPoint::from_lon_lat_degrees( round3(lon), round3(lat)),
                    base_value: round3(base),
                    index,
                    region: Some(region.clone())
                });
                index += 1;
            }
        }
    }
    features
}

/// expand concentric ring zones into features placed evenly on each ring
pub fn ring_features (center: GeoPoint, zones: &[RingZone])->Vec<GeoFeature> {
    let mut features: Vec<GeoFeature> = Vec::new();
    let mut index = 0;

    for &(radius, base, count) in zones {
        for k in 0..count {
            let angle = TAU * k as f64 / count as f64;
            let lat = center.latitude_degrees() + radius * angle.sin();
            let lon = center.longitude_degrees() + radius * angle.cos();
            let base = clamp01( base + cluster_term( lat, lon));

            features.push( GeoFeature {
                position: GeoPoint::from_lon_lat_degrees( round3(lon), round3(lat)),
                base_value: round3(base),
                index,
                region: None
            });
            index += 1;
        }
    }
    features
}

/// the built-in dataset for a domain. Deterministic - repeated calls return equal data.
pub fn dataset_for (kind: DatasetKind)->RawDataset {
    let features = match kind {
        DatasetKind::Bloom => grid_features( &BLOOM_REGIONS, 3, 0.5),
        DatasetKind::Vegetation => grid_features( &VEGETATION_REGIONS, 3, 0.4),
        DatasetKind::Climate => ring_features( CLIMATE_CENTER, &CLIMATE_ZONES),
        DatasetKind::Pollen => ring_features( POLLEN_CENTER, &POLLEN_ZONES)
    };
    RawDataset::new( kind, features)
}

/* #endregion feature generation */
