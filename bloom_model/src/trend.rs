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

//! year-at-a-glance trend: derive the dataset for the first day of each month and
//! aggregate to one point per month. Used to render the intensity sparkline next to
//! the timeline slider.

use chrono::NaiveDate;
use serde::Serialize;
use bloom_common::round3;

use crate::crops::CropType;
use crate::stages::BloomStage;
use crate::{derive_dataset, RawDataset};

#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
#[serde(rename_all(serialize="camelCase"))]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub avg_intensity: f64,
    pub stage: BloomStage
}

/// monthly intensity trend for one calendar year, sampled on the first of each month
pub fn monthly_trend (raw: &RawDataset, year: i32, crop: Option<&CropType>)->Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = Vec::with_capacity(12);

    for month in 1..=12 {
        if let Some(date) = NaiveDate::from_ymd_opt( year, month, 1) {
            let ds = derive_dataset( raw, date, crop);
            let avg = round3( ds.mean_intensity());
            points.push( TrendPoint { date, avg_intensity: avg, stage: BloomStage::from_intensity(avg) });
        }
    }
    points
}

/// month of the year with the highest mean intensity (1-12)
pub fn peak_month (trend: &[TrendPoint])->Option<u32> {
    trend.iter()
        .max_by( |a,b| a.avg_intensity.total_cmp(&b.avg_intensity))
        .map( |p| chrono::Datelike::month(&p.date))
}
