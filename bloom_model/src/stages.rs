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

//! classification of derived intensities into the discrete stage labels shown in map
//! popups and legends. All cut points are half-open: a stage starts at its lower bound
//! inclusive and ends below the next bound.

use serde::Serialize;
use strum::{Display, EnumIter};

/* #region stage enums ********************************************************************************************/

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Display,EnumIter)]
#[serde(rename_all="camelCase")]
pub enum BloomStage {
    Dormant,
    PreBloom,
    EarlyBloom,
    ActiveBloom,
    FullBloom,
    PeakBloom
}

impl BloomStage {
    pub fn from_intensity (i: f64)->Self {
        if i < 0.15      { BloomStage::Dormant }
        else if i < 0.3  { BloomStage::PreBloom }
        else if i < 0.5  { BloomStage::EarlyBloom }
        else if i < 0.7  { BloomStage::ActiveBloom }
        else if i < 0.85 { BloomStage::FullBloom }
        else             { BloomStage::PeakBloom }
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Display,EnumIter)]
#[serde(rename_all="camelCase")]
pub enum VegetationClass {
    DesertBare,
    Sparse,
    Grassland,
    Forest,
    DenseForest
}

impl VegetationClass {
    pub fn from_intensity (i: f64)->Self {
        if i < 0.2      { VegetationClass::DesertBare }
        else if i < 0.4 { VegetationClass::Sparse }
        else if i < 0.6 { VegetationClass::Grassland }
        else if i < 0.8 { VegetationClass::Forest }
        else            { VegetationClass::DenseForest }
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Display,EnumIter)]
#[serde(rename_all="camelCase")]
pub enum ClimateBand {
    Cold,
    Cool,
    Mild,
    Warm,
    Hot
}

impl ClimateBand {
    pub fn from_intensity (i: f64)->Self {
        if i < 0.25      { ClimateBand::Cold }
        else if i < 0.45 { ClimateBand::Cool }
        else if i < 0.65 { ClimateBand::Mild }
        else if i < 0.85 { ClimateBand::Warm }
        else             { ClimateBand::Hot }
    }
}

/// allergen severity is keyed on grain concentration, not on normalized intensity
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Display,EnumIter)]
#[serde(rename_all="camelCase")]
pub enum AllergenLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh
}

impl AllergenLevel {
    pub fn from_concentration (grains_per_m3: u32)->Self {
        if grains_per_m3 > 1500      { AllergenLevel::VeryHigh }
        else if grains_per_m3 > 1000 { AllergenLevel::High }
        else if grains_per_m3 > 500  { AllergenLevel::Medium }
        else if grains_per_m3 > 100  { AllergenLevel::Low }
        else                         { AllergenLevel::VeryLow }
    }
}

/* #endregion stage enums */

/* #region display label tables ***********************************************************************************/

pub const BLOOM_SPECIES: [&str;10] = [
    "Cherry Blossom", "Wildflower Mix", "Jacaranda", "Acacia", "Coffee Blossom",
    "Sunflower", "Lavender", "Desert Rose", "Bougainvillea", "Magnolia"
];

pub const POLLEN_TYPES: [&str;6] = [
    "Oak", "Grass", "Ragweed", "Birch", "Pine", "Cedar"
];

/// stable species label for a feature - derived from the feature index so repeated
/// derivations always label the same point the same way
pub fn bloom_species (index: usize)->&'static str {
    BLOOM_SPECIES[ index % BLOOM_SPECIES.len() ]
}

pub fn pollen_type (index: usize)->&'static str {
    POLLEN_TYPES[ index % POLLEN_TYPES.len() ]
}

/* #endregion display label tables */
