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

//! seasonal curves: piecewise sinusoidal multipliers keyed on the calendar month, with
//! the day-of-year driving an oscillation inside each segment. The tables encode a
//! northern hemisphere phenology baseline (spring peak for bloom, summer plateau for
//! vegetation). Winter wraps the year boundary and is therefore split into two segments.

use std::f64::consts::TAU;
use crate::DatasetKind;

/* #region season segments ****************************************************************************************/

/// one piece of a seasonal curve: for months in [months.0, months.1] (0-based, inclusive)
/// the multiplier is offset + amplitude * sin( TAU * (doy - phase_day) / period_days )
#[derive(Debug,Clone,Copy)]
pub struct SeasonSegment {
    pub months: (u32,u32),
    pub offset: f64,
    pub amplitude: f64,
    pub phase_day: f64,
    pub period_days: f64
}

impl SeasonSegment {
    pub fn contains (&self, month0: u32)->bool {
        month0 >= self.months.0 && month0 <= self.months.1
    }

    pub fn multiplier (&self, doy: u32)->f64 {
        self.offset + self.amplitude * (TAU * (doy as f64 - self.phase_day) / self.period_days).sin()
    }
}

const BLOOM_SEASONS: [SeasonSegment;5] = [
    SeasonSegment { months: (0,1),   offset: 0.5,  amplitude: 0.1,  phase_day: 15.0,  period_days: 60.0 },
    SeasonSegment { months: (2,4),   offset: 1.2,  amplitude: 0.3,  phase_day: 90.0,  period_days: 40.0 },
    SeasonSegment { months: (5,7),   offset: 1.0,  amplitude: 0.15, phase_day: 170.0, period_days: 60.0 },
    SeasonSegment { months: (8,10),  offset: 0.9,  amplitude: 0.2,  phase_day: 240.0, period_days: 40.0 },
    SeasonSegment { months: (11,11), offset: 0.5,  amplitude: 0.1,  phase_day: 345.0, period_days: 60.0 },
];

const VEGETATION_SEASONS: [SeasonSegment;5] = [
    SeasonSegment { months: (0,1),   offset: 0.6,  amplitude: 0.1,  phase_day: 20.0,  period_days: 80.0 },
    SeasonSegment { months: (2,4),   offset: 0.95, amplitude: 0.2,  phase_day: 95.0,  period_days: 70.0 },
    SeasonSegment { months: (5,7),   offset: 1.15, amplitude: 0.1,  phase_day: 180.0, period_days: 90.0 },
    SeasonSegment { months: (8,10),  offset: 0.85, amplitude: 0.15, phase_day: 260.0, period_days: 70.0 },
    SeasonSegment { months: (11,11), offset: 0.6,  amplitude: 0.1,  phase_day: 340.0, period_days: 80.0 },
];

const CLIMATE_SEASONS: [SeasonSegment;5] = [
    SeasonSegment { months: (0,1),   offset: 0.45, amplitude: 0.05, phase_day: 20.0,  period_days: 90.0 },
    SeasonSegment { months: (2,4),   offset: 0.7,  amplitude: 0.1,  phase_day: 100.0, period_days: 90.0 },
    SeasonSegment { months: (5,7),   offset: 1.0,  amplitude: 0.1,  phase_day: 185.0, period_days: 90.0 },
    SeasonSegment { months: (8,10),  offset: 0.75, amplitude: 0.1,  phase_day: 265.0, period_days: 90.0 },
    SeasonSegment { months: (11,11), offset: 0.45, amplitude: 0.05, phase_day: 350.0, period_days: 90.0 },
];

const POLLEN_SEASONS: [SeasonSegment;5] = [
    SeasonSegment { months: (0,1),   offset: 0.25, amplitude: 0.05, phase_day: 25.0,  period_days: 50.0 },
    SeasonSegment { months: (2,4),   offset: 1.3,  amplitude: 0.25, phase_day: 105.0, period_days: 45.0 },
    SeasonSegment { months: (5,7),   offset: 0.9,  amplitude: 0.2,  phase_day: 175.0, period_days: 50.0 },
    SeasonSegment { months: (8,10),  offset: 0.7,  amplitude: 0.15, phase_day: 250.0, period_days: 45.0 },
    SeasonSegment { months: (11,11), offset: 0.25, amplitude: 0.05, phase_day: 340.0, period_days: 50.0 },
];

fn season_table (kind: DatasetKind)->&'static [SeasonSegment;5] {
    match kind {
        DatasetKind::Bloom => &BLOOM_SEASONS,
        DatasetKind::Vegetation => &VEGETATION_SEASONS,
        DatasetKind::Climate => &CLIMATE_SEASONS,
        DatasetKind::Pollen => &POLLEN_SEASONS
    }
}

/// look up the seasonal multiplier for a 0-based month and day-of-year. Every month is
/// covered by exactly one segment so the fallback of 1.0 is unreachable for valid input.
pub fn seasonal_multiplier (kind: DatasetKind, month0: u32, doy: u32)->f64 {
    let table = season_table(kind);
    for seg in table {
        if seg.contains(month0) {
            return seg.multiplier(doy)
        }
    }
    1.0
}

/* #endregion season segments */

/* #region short period terms *************************************************************************************/

/// additive short period weather oscillation of the climate domain (weekly cycle)
pub fn weather_term (doy: u32)->f64 {
    0.05 * (TAU * doy as f64 / 7.0).sin()
}

/// additive pollination cycle of the pollen domain (two week cycle)
pub fn pollination_term (doy: u32)->f64 {
    0.1 * (TAU * doy as f64 / 14.0).sin()
}

/* #endregion short period terms */

/* #region variant multipliers ************************************************************************************/

struct VariantSpec {
    variants: usize,
    low: f64,
    span: f64
}

const BLOOM_VARIANTS: VariantSpec      = VariantSpec { variants: 10, low: 0.7,  span: 0.6 };
const VEGETATION_VARIANTS: VariantSpec = VariantSpec { variants: 8,  low: 0.8,  span: 0.4 };
const CLIMATE_VARIANTS: VariantSpec    = VariantSpec { variants: 5,  low: 0.9,  span: 0.2 };
const POLLEN_VARIANTS: VariantSpec     = VariantSpec { variants: 6,  low: 0.75, span: 0.5 };

/// deterministic per-feature spread so co-located features of a dense grid do not all
/// render with the identical intensity. Keyed on the stable feature index.
pub fn variant_multiplier (kind: DatasetKind, index: usize)->f64 {
    let spec = match kind {
        DatasetKind::Bloom => &BLOOM_VARIANTS,
        DatasetKind::Vegetation => &VEGETATION_VARIANTS,
        DatasetKind::Climate => &CLIMATE_VARIANTS,
        DatasetKind::Pollen => &POLLEN_VARIANTS
    };
    spec.low + spec.span * (index % spec.variants) as f64 / spec.variants as f64
}

/* #endregion variant multipliers */
