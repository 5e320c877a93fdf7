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

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Serialize, Serializer};

/// this should be used wherever we might have to use sim clock instead of wall clock
#[inline]
pub fn utc_now()->DateTime<Utc> {
    Utc::now()
}

/// day of year (1-366) for anything date-like
#[inline]
pub fn day_of_year<D:Datelike> (d: &D)->u32 { d.ordinal() }

/// zero based month (0-11)
#[inline]
pub fn month0<D:Datelike> (d: &D)->u32 { d.month0() }

/// one based month (1-12)
#[inline]
pub fn month<D:Datelike> (d: &D)->u32 { d.month() }

/// get a DateTime<Utc> from a NaiveDate that is supposed to be in Utc
pub fn naive_utc_date_to_utc_datetime (nd: NaiveDate) -> DateTime<Utc> {
    let nt = NaiveTime::from_hms_opt(0, 0, 0).unwrap(); // 00:00:00 can't fail
    let ndt = NaiveDateTime::new(nd,nt);

    DateTime::from_naive_utc_and_offset(ndt,Utc)
}

/// whole days from d_earlier to d_later (negative if d_later is the earlier one)
#[inline]
pub fn days_between (d_later: NaiveDate, d_earlier: NaiveDate)->i64 {
    (d_later - d_earlier).num_days()
}

/// YYYY-MM-DD, the date format used by the GIBS WMTS path and GeoJSON properties
pub fn iso_date_string (d: &NaiveDate)->String {
    format!("{}", d.format("%Y-%m-%d"))
}

pub fn parse_iso_date (s: &str)->Option<NaiveDate> {
    NaiveDate::parse_from_str( s, "%Y-%m-%d").ok()
}

//--- support for serde

pub fn ser_epoch_millis<S: Serializer> (dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>  {
    s.serialize_i64(dt.timestamp_millis())
}
