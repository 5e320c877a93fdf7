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

//! the seasonal intensity model of the BloomWatch core: pure derivation of per-feature
//! intensity, classification stage and display metrics from a static base dataset and
//! an observation date. Everything here is synchronous, allocation-light and free of I/O;
//! the host (a map rendering UI) calls [`derive_dataset`] whenever its timeline date or
//! crop selection changes.

use std::sync::Arc;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use strum::{Display, EnumIter};

use bloom_common::{clamp01, geo::GeoPoint};

mod errors;
pub use errors::*;

pub mod seasons;
pub mod stages;
pub mod crops;
pub mod datasets;
pub mod trend;
pub mod cache;
pub mod convert;

use crops::CropType;
use stages::{AllergenLevel, BloomStage, ClimateBand, VegetationClass};

/* #region dataset types *****************************************************************************************/

/// the four data domains shown as map layers. Each has its own seasonal curve family,
/// stage labels and retention threshold but shares the derivation pipeline shape.
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize,Display,EnumIter)]
#[serde(rename_all="lowercase")]
#[strum(serialize_all="lowercase")]
pub enum DatasetKind {
    Bloom,
    Vegetation,
    Climate,
    Pollen
}

impl DatasetKind {
    /// minimum derived intensity a feature must exceed to be retained; None keeps all features
    pub fn retention_threshold (&self)->Option<f64> {
        match self {
            DatasetKind::Bloom => Some(0.1),
            DatasetKind::Pollen => Some(0.05),
            DatasetKind::Vegetation | DatasetKind::Climate => None
        }
    }
}

/// an immutable input feature: position, a base value in [0,1] and a stable index
/// that drives deterministic per-feature variation. Never mutated by derivation.
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(rename_all="camelCase")]
pub struct GeoFeature {
    pub position: GeoPoint,
    pub base_value: f64,
    pub index: usize,

    #[serde(skip_serializing_if="Option::is_none", default)]
    pub region: Option<Arc<String>>
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct RawDataset {
    pub kind: DatasetKind,
    pub features: Vec<GeoFeature>
}

impl RawDataset {
    pub fn new (kind: DatasetKind, features: Vec<GeoFeature>)->Self {
        RawDataset { kind, features }
    }

    pub fn len (&self)->usize { self.features.len() }
    pub fn is_empty (&self)->bool { self.features.is_empty() }

    /// build a RawDataset from a GeoJSON FeatureCollection of Point features, using the
    /// `intensity` (or `ndvi`) property as base value. This is how converted satellite
    /// samples (see the csv2geojson tool) are fed into the model.
    pub fn from_geojson (kind: DatasetKind, geojson: &str)->Result<Self> {
        let v: serde_json::Value = serde_json::from_str(geojson)?;
        let features = v.get("features").and_then(|f| f.as_array())
            .ok_or_else(|| invalid_dataset("no features array"))?;

        let mut fs: Vec<GeoFeature> = Vec::with_capacity(features.len());
        for (index,f) in features.iter().enumerate() {
            let coords = f.pointer("/geometry/coordinates").and_then(|c| c.as_array())
                .ok_or_else(|| invalid_dataset(format!("feature {index} has no coordinates")))?;
            if coords.len() < 2 { return Err( invalid_dataset(format!("feature {index} has malformed coordinates"))) }

            let lon = coords[0].as_f64().ok_or_else(|| invalid_dataset("non-numeric longitude"))?;
            let lat = coords[1].as_f64().ok_or_else(|| invalid_dataset("non-numeric latitude"))?;

            let props = f.get("properties");
            let base_value = props
                .and_then(|p| p.get("intensity").or_else(|| p.get("ndvi")))
                .and_then(|v| v.as_f64())
                .unwrap_or(0.5);
            let region = props
                .and_then(|p| p.get("region").or_else(|| p.get("landType")))
                .and_then(|v| v.as_str())
                .map(|s| Arc::new(s.to_string()));

            fs.push( GeoFeature {
                position: GeoPoint::from_lon_lat_degrees( lon, lat),
                base_value: clamp01(base_value),
                index,
                region
            });
        }

        Ok( RawDataset::new( kind, fs) )
    }
}

/// domain specific classification and display metrics of a derived feature
#[derive(Debug,Clone,PartialEq,Serialize)]
#[serde(untagged)]
pub enum DomainMetrics {
    #[serde(rename_all="camelCase")]
    Bloom {
        stage: BloomStage,
        species: &'static str,
        bloom_duration: u32,         // days
        pollination_activity: u32,   // percent
        #[serde(skip_serializing_if="Option::is_none")]
        is_in_season: Option<bool>
    },
    #[serde(rename_all="camelCase")]
    Vegetation {
        class: VegetationClass,
        health_index: u32,
        biomass: u32
    },
    #[serde(rename_all="camelCase")]
    Climate {
        band: ClimateBand,
        temperature: f64,  // celsius
        humidity: f64      // percent
    },
    #[serde(rename_all="camelCase")]
    Pollen {
        level: AllergenLevel,
        pollen_type: &'static str,
        concentration: u32  // grains/m3
    }
}

/// output of one derivation: the input feature's geometry plus the recomputed
/// intensity and metrics. Created fresh on every derivation call.
#[derive(Debug,Clone,PartialEq,Serialize)]
#[serde(rename_all(serialize="camelCase"))]
pub struct DerivedFeature {
    pub position: GeoPoint,
    pub index: usize,
    pub intensity: f64,

    #[serde(flatten)]
    pub metrics: DomainMetrics
}

#[derive(Debug,Clone,PartialEq,Serialize)]
#[serde(rename_all(serialize="camelCase"))]
pub struct DerivedDataset {
    pub kind: DatasetKind,
    pub date: NaiveDate,
    pub features: Vec<DerivedFeature>
}

impl DerivedDataset {
    pub fn len (&self)->usize { self.features.len() }
    pub fn is_empty (&self)->bool { self.features.is_empty() }

    pub fn mean_intensity (&self)->f64 {
        if self.features.is_empty() { return 0.0 }
        self.features.iter().map(|f| f.intensity).sum::<f64>() / self.features.len() as f64
    }

    pub fn to_json (&self)->Result<String> {
        Ok( serde_json::to_string( &self )?)
    }
    pub fn to_json_pretty (&self)->Result<String> {
        Ok( serde_json::to_string_pretty( &self )?)
    }

    /// render as a GeoJSON FeatureCollection the host map library can consume directly
    pub fn to_geojson (&self)->Result<String> {
        let mut features: Vec<serde_json::Value> = Vec::with_capacity(self.features.len());
        for f in &self.features {
            let mut props = serde_json::to_value(f)?;
            if let Some(map) = props.as_object_mut() {
                map.remove("position");
                map.insert( "date".to_string(), json!( bloom_common::datetime::iso_date_string(&self.date)));
            }
            features.push( json!({
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": f.position },
                "properties": props
            }));
        }

        Ok( serde_json::to_string( &json!({ "type": "FeatureCollection", "features": features }))?)
    }
}

/* #endregion dataset types */

/* #region derivation *********************************************************************************************/

/// recompute per-feature intensity, stage and metrics of a raw dataset for the given
/// observation date. Pure - input features are never mutated, a new dataset is returned.
/// The optional crop context switches the bloom domain to crop specific NDVI windows.
pub fn derive_dataset (raw: &RawDataset, date: NaiveDate, crop: Option<&CropType>)->DerivedDataset {
    let doy = date.ordinal();
    let month0 = date.month0();

    let mut features: Vec<DerivedFeature> = Vec::with_capacity(raw.features.len());
    for f in &raw.features {
        let df = match raw.kind {
            DatasetKind::Bloom => derive_bloom( f, doy, month0, crop),
            DatasetKind::Vegetation => derive_vegetation( f, doy, month0),
            DatasetKind::Climate => derive_climate( f, doy, month0),
            DatasetKind::Pollen => derive_pollen( f, doy, month0)
        };
        if is_retained( raw.kind, &df) {
            features.push(df)
        }
    }

    DerivedDataset { kind: raw.kind, date, features }
}

fn is_retained (kind: DatasetKind, df: &DerivedFeature)->bool {
    let min = match kind.retention_threshold() {
        Some(min) => min,
        None => return true
    };

    // crop mode shows fewer points outside the bloom season
    if let DomainMetrics::Bloom { is_in_season: Some(false), .. } = df.metrics {
        return df.intensity > 0.4
    }
    df.intensity > min
}

fn derive_bloom (f: &GeoFeature, doy: u32, month0: u32, crop: Option<&CropType>)->DerivedFeature {
    let (raw_intensity, is_in_season) = match crop {
        Some(c) => {
            let (i, in_season) = crop_bloom_intensity( c, f.base_value, doy, month0);
            (i, Some(in_season))
        }
        None => (f.base_value * seasons::seasonal_multiplier( DatasetKind::Bloom, month0, doy), None)
    };
    let intensity = clamp01( raw_intensity * seasons::variant_multiplier( DatasetKind::Bloom, f.index));

    DerivedFeature {
        position: f.position,
        index: f.index,
        intensity,
        metrics: DomainMetrics::Bloom {
            stage: BloomStage::from_intensity(intensity),
            species: stages::bloom_species(f.index),
            bloom_duration: (intensity * 14.0).round() as u32,
            pollination_activity: (intensity * 100.0).round() as u32,
            is_in_season
        }
    }
}

/// crop specific intensity: interpolate between the crop's NDVI threshold and its peak
/// NDVI by proximity to the peak month, with a short daily perturbation. Outside all
/// bloom windows the base value is heavily damped.
fn crop_bloom_intensity (crop: &CropType, base: f64, doy: u32, month0: u32)->(f64,bool) {
    let month = month0 + 1; // bloom windows use 1-12

    if let Some(window) = crop.active_window(month) {
        let peak_dist = window.peak_distance(month);
        let seasonal_factor = 1.0 - ((peak_dist as f64 / 6.0).min(1.0));
        let daily_variation = (doy as f64 * std::f64::consts::TAU / 30.0).sin() * 0.15;

        let ndvi = crop.ndvi_threshold + (crop.peak_ndvi - crop.ndvi_threshold) * seasonal_factor;
        ((ndvi / crop.peak_ndvi) * (0.85 + daily_variation), true)
    } else {
        (base * 0.2, false)
    }
}

fn derive_vegetation (f: &GeoFeature, doy: u32, month0: u32)->DerivedFeature {
    let i = f.base_value * seasons::seasonal_multiplier( DatasetKind::Vegetation, month0, doy);
    let intensity = clamp01( i * seasons::variant_multiplier( DatasetKind::Vegetation, f.index));

    DerivedFeature {
        position: f.position,
        index: f.index,
        intensity,
        metrics: DomainMetrics::Vegetation {
            class: VegetationClass::from_intensity(intensity),
            health_index: (intensity * 100.0).round() as u32,
            biomass: (intensity * 1000.0).round() as u32
        }
    }
}

fn derive_climate (f: &GeoFeature, doy: u32, month0: u32)->DerivedFeature {
    let i = f.base_value * seasons::seasonal_multiplier( DatasetKind::Climate, month0, doy) + seasons::weather_term(doy);
    let intensity = clamp01( i * seasons::variant_multiplier( DatasetKind::Climate, f.index));

    DerivedFeature {
        position: f.position,
        index: f.index,
        intensity,
        metrics: DomainMetrics::Climate {
            band: ClimateBand::from_intensity(intensity),
            temperature: bloom_common::round1( 10.0 + intensity * 30.0),
            humidity: bloom_common::round1( 85.0 - intensity * 30.0)
        }
    }
}

fn derive_pollen (f: &GeoFeature, doy: u32, month0: u32)->DerivedFeature {
    let i = f.base_value * seasons::seasonal_multiplier( DatasetKind::Pollen, month0, doy) + seasons::pollination_term(doy);
    let intensity = clamp01( i * seasons::variant_multiplier( DatasetKind::Pollen, f.index));
    let concentration = (intensity * 2000.0).round() as u32;

    DerivedFeature {
        position: f.position,
        index: f.index,
        intensity,
        metrics: DomainMetrics::Pollen {
            level: AllergenLevel::from_concentration(concentration),
            pollen_type: stages::pollen_type(f.index),
            concentration
        }
    }
}

/* #endregion derivation */
