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

pub mod datetime;
pub mod geo;

// syntactic sugar - this is just more readable in trig-heavy model code
#[inline(always)] pub fn sin(x:f64) -> f64 { x.sin() }
#[inline(always)] pub fn cos(x:f64) -> f64 { x.cos() }

/// clamp to the unit interval
#[inline] pub fn clamp01 (x: f64)->f64 {
    if x < 0.0 { 0.0 } else if x > 1.0 { 1.0 } else { x }
}

#[inline] pub fn round1 (x: f64)->f64 { (x * 10.0).round() / 10.0 }
#[inline] pub fn round2 (x: f64)->f64 { (x * 100.0).round() / 100.0 }
#[inline] pub fn round3 (x: f64)->f64 { (x * 1000.0).round() / 1000.0 }
