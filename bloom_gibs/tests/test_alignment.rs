#![allow(unused)]

// run with "cargo test --test test_alignment -- --nocapture"

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use bloom_common::datetime::days_between;
use bloom_gibs::*;

fn date (y: i32, m: u32, d: u32)->NaiveDate {
    NaiveDate::from_ymd_opt(y,m,d).unwrap()
}

// fixed wall clock so latency clamping is reproducible
fn test_now ()->DateTime<Utc> {
    Utc.with_ymd_and_hms( 2025, 8, 25, 12, 0, 0).unwrap()
}

#[test]
fn test_epoch_grid () {
    let now = test_now();

    // every aligned date is a whole number of cadence periods after the epoch
    let mut d = date(2020,1,1);
    while d < date(2021,1,1) {
        let aligned = align_date_at( d, now);
        let days = days_between( aligned, MODIS_EPOCH);
        assert_eq!( days % CADENCE_DAYS, 0, "unaligned result for {}", d);
        assert!( aligned <= d);
        assert!( days_between( d, aligned) < CADENCE_DAYS);
        d += Duration::days(7);
    }
}

#[test]
fn test_known_alignment () {
    let now = test_now();
    let aligned = align_date_at( date(2025,1,10), now);
    println!("2025-01-10 -> {}", aligned);
    assert_eq!( aligned, date(2025,1,5));

    // composite period starts align to themselves
    assert_eq!( align_date_at( date(2025,1,5), now), date(2025,1,5));
}

#[test]
fn test_idempotent_and_monotonic () {
    let now = test_now();
    let mut prev = align_date_at( date(2024,1,1), now);

    let mut d = date(2024,1,2);
    while d < date(2024,12,31) {
        let aligned = align_date_at( d, now);
        assert_eq!( align_date_at( aligned, now), aligned);
        assert!( aligned >= prev);
        prev = aligned;
        d += Duration::days(3);
    }
}

#[test]
fn test_epoch_clamp () {
    let now = test_now();
    assert_eq!( align_date_at( date(1999,1,1), now), MODIS_EPOCH);
    assert_eq!( align_date_at( MODIS_EPOCH, now), MODIS_EPOCH);
}

#[test]
fn test_latency_clamp () {
    let now = test_now();
    let latest = latest_safe_date_at(now);
    assert_eq!( latest, date(2025,8,17));

    // requests beyond the latency horizon snap back to a served composite
    let aligned = align_date_at( date(2025,12,1), now);
    println!("future request -> {}", aligned);
    assert!( aligned <= latest);
    assert_eq!( days_between( aligned, MODIS_EPOCH) % CADENCE_DAYS, 0);
}

#[test]
fn test_availability () {
    let now = test_now();
    assert!( is_data_available_at( MODIS_EPOCH, now));
    assert!( is_data_available_at( date(2025,8,17), now));
    assert!( !is_data_available_at( date(2025,8,18), now));
    assert!( !is_data_available_at( date(1999,12,31), now));
}

#[test]
fn test_composite_dates () {
    let now = test_now();
    let dates = composite_dates_at( date(2025,1,1), date(2025,3,1), now);
    println!("composites: {:?}", dates);

    assert!( !dates.is_empty());
    assert_eq!( dates[0], date(2024,12,20)); // period containing Jan 1
    for w in dates.windows(2) {
        assert_eq!( days_between( w[1], w[0]), CADENCE_DAYS);
    }
    assert!( *dates.last().unwrap() <= date(2025,3,1));
}

#[test]
fn test_tile_url () {
    let now = test_now();
    let layer = layer_for( GibsLayerType::Ndvi);
    let aligned = align_date_at( date(2025,1,10), now);

    let url = tile_url( layer, aligned, 5, 18, 13);
    println!("tile url: {}", url);

    assert!( url.starts_with("https://gibs.earthdata.nasa.gov/wmts/epsg3857/best/"));
    assert!( url.contains("/MODIS_Terra_NDVI_16Day/default/2025-01-05/"));
    assert!( url.ends_with("GoogleMapsCompatible_Level9/5/18/13.png")); // z/x/y order

    let template = tile_url_template( layer, aligned);
    println!("template: {}", template);
    assert!( template.ends_with("{z}/{x}/{y}.png"));
}

#[test]
fn test_raster_source () {
    let now = test_now();
    let src = raster_source_at( GibsLayerType::Evi, date(2025,1,10), now);
    println!("{}", serde_json::to_string_pretty(&src).unwrap());

    assert_eq!( src.date, date(2025,1,5));
    assert_eq!( src.layer.id, "MODIS_Terra_EVI_16Day");
    assert_eq!( src.tile_size, 256);
    assert_eq!( src.max_zoom, 9);
    assert!( src.url_template.contains("2025-01-05"));
}

#[test]
fn test_ndvi_legend () {
    assert_eq!( ndvi_description(-0.1), "Water or snow");
    assert_eq!( ndvi_description(0.5), "Moderate vegetation");
    assert_eq!( ndvi_description(0.9), "Very dense vegetation");

    assert_eq!( bloom_status(0.1, 0.4), "No bloom activity");
    assert_eq!( bloom_status(0.3, 0.4), "Pre-bloom greening");
    assert_eq!( bloom_status(0.45, 0.4), "Possible bloom onset");
    assert_eq!( bloom_status(0.8, 0.4), "Peak bloom conditions");
}
