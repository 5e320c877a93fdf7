#![allow(unused)]

// run with "cargo test --test test_derivation -- --nocapture"

use chrono::NaiveDate;
use bloom_common::geo::GeoPoint;
use bloom_model::stages::*;
use bloom_model::*;

fn date (y: i32, m: u32, d: u32)->NaiveDate {
    NaiveDate::from_ymd_opt(y,m,d).unwrap()
}

fn feature (base: f64, index: usize)->GeoFeature {
    GeoFeature {
        position: GeoPoint::from_lon_lat_degrees( 36.8, -1.3),
        base_value: base,
        index,
        region: None
    }
}

#[test]
fn test_spring_peak_bloom () {
    // a max base feature at the spring bloom peak has to clamp to full intensity
    let raw = RawDataset::new( DatasetKind::Bloom, vec![ feature(1.0, 0) ]);
    let ds = derive_dataset( &raw, date(2025,4,10), None);

    assert_eq!( ds.len(), 1);
    let f = &ds.features[0];
    println!("april 10 intensity: {}", f.intensity);

    assert_eq!( f.intensity, 1.0);
    match f.metrics {
        DomainMetrics::Bloom { stage, bloom_duration, pollination_activity, is_in_season, .. } => {
            assert_eq!( stage, BloomStage::PeakBloom);
            assert_eq!( bloom_duration, 14);
            assert_eq!( pollination_activity, 100);
            assert_eq!( is_in_season, None); // no crop context
        }
        _ => panic!("wrong metrics variant")
    }
}

#[test]
fn test_intensity_bounds () {
    // all four domains, all seasons: derived intensity stays in the unit interval
    let features: Vec<GeoFeature> = (0..40).map( |i| feature( (i as f64)/39.0, i)).collect();

    for kind in [DatasetKind::Bloom, DatasetKind::Vegetation, DatasetKind::Climate, DatasetKind::Pollen] {
        let raw = RawDataset::new( kind, features.clone());
        for month in 1..=12 {
            let ds = derive_dataset( &raw, date(2025,month,15), None);
            for f in &ds.features {
                assert!( f.intensity >= 0.0 && f.intensity <= 1.0,
                         "{} intensity {} out of bounds in month {}", kind, f.intensity, month);
            }
        }
    }
}

#[test]
fn test_bloom_filtering () {
    // mid-winter, low base features fall below the bloom retention threshold
    let raw = RawDataset::new( DatasetKind::Bloom, vec![ feature(0.05, 0), feature(0.9, 1) ]);
    let ds = derive_dataset( &raw, date(2025,1,15), None);

    assert_eq!( ds.len(), 1);
    assert_eq!( ds.features[0].index, 1);
}

#[test]
fn test_vegetation_and_climate_keep_all () {
    for kind in [DatasetKind::Vegetation, DatasetKind::Climate] {
        let raw = RawDataset::new( kind, vec![ feature(0.0, 0), feature(0.01, 1), feature(0.9, 2) ]);
        let ds = derive_dataset( &raw, date(2025,1,15), None);
        assert_eq!( ds.len(), raw.len(), "{} must not filter features", kind);
    }
}

#[test]
fn test_stage_boundaries () {
    assert_eq!( BloomStage::from_intensity(0.0), BloomStage::Dormant);
    assert_eq!( BloomStage::from_intensity(0.149), BloomStage::Dormant);
    assert_eq!( BloomStage::from_intensity(0.15), BloomStage::PreBloom);
    assert_eq!( BloomStage::from_intensity(0.3), BloomStage::EarlyBloom);
    assert_eq!( BloomStage::from_intensity(0.5), BloomStage::ActiveBloom);
    assert_eq!( BloomStage::from_intensity(0.7), BloomStage::FullBloom);
    assert_eq!( BloomStage::from_intensity(0.849), BloomStage::FullBloom);
    assert_eq!( BloomStage::from_intensity(0.85), BloomStage::PeakBloom);
    assert_eq!( BloomStage::from_intensity(1.0), BloomStage::PeakBloom);

    assert_eq!( VegetationClass::from_intensity(0.19), VegetationClass::DesertBare);
    assert_eq!( VegetationClass::from_intensity(0.2), VegetationClass::Sparse);
    assert_eq!( VegetationClass::from_intensity(0.8), VegetationClass::DenseForest);

    assert_eq!( ClimateBand::from_intensity(0.0), ClimateBand::Cold);
    assert_eq!( ClimateBand::from_intensity(0.85), ClimateBand::Hot);

    assert_eq!( AllergenLevel::from_concentration(100), AllergenLevel::VeryLow);
    assert_eq!( AllergenLevel::from_concentration(101), AllergenLevel::Low);
    assert_eq!( AllergenLevel::from_concentration(1500), AllergenLevel::High);
    assert_eq!( AllergenLevel::from_concentration(1501), AllergenLevel::VeryHigh);
}

#[test]
fn test_climate_metrics_consistency () {
    let features: Vec<GeoFeature> = (0..10).map( |i| feature( 0.1 * i as f64, i)).collect();
    let raw = RawDataset::new( DatasetKind::Climate, features);
    let ds = derive_dataset( &raw, date(2025,7,1), None);

    for f in &ds.features {
        match f.metrics {
            DomainMetrics::Climate { temperature, humidity, band } => {
                assert_eq!( temperature, bloom_common::round1( 10.0 + f.intensity * 30.0));
                assert_eq!( humidity, bloom_common::round1( 85.0 - f.intensity * 30.0));
                assert_eq!( band, ClimateBand::from_intensity(f.intensity));
            }
            _ => panic!("wrong metrics variant")
        }
    }
}

#[test]
fn test_pollen_metrics_consistency () {
    let features: Vec<GeoFeature> = (0..12).map( |i| feature( 0.08 * i as f64, i)).collect();
    let raw = RawDataset::new( DatasetKind::Pollen, features);
    let ds = derive_dataset( &raw, date(2025,4,20), None);

    assert!( !ds.is_empty());
    for f in &ds.features {
        match f.metrics {
            DomainMetrics::Pollen { concentration, level, pollen_type } => {
                assert_eq!( concentration, (f.intensity * 2000.0).round() as u32);
                assert_eq!( level, AllergenLevel::from_concentration(concentration));
                assert!( stages::POLLEN_TYPES.contains(&pollen_type));
            }
            _ => panic!("wrong metrics variant")
        }
    }
}

#[test]
fn test_determinism () {
    let features: Vec<GeoFeature> = (0..20).map( |i| feature( 0.05 * i as f64, i)).collect();
    let raw = RawDataset::new( DatasetKind::Bloom, features);

    let ds1 = derive_dataset( &raw, date(2025,5,20), None);
    let ds2 = derive_dataset( &raw, date(2025,5,20), None);
    assert_eq!( ds1, ds2);
}

#[test]
fn test_input_not_mutated () {
    let raw = RawDataset::new( DatasetKind::Bloom, vec![ feature(0.8, 0) ]);
    let before = raw.clone();

    derive_dataset( &raw, date(2025,4,10), None);
    derive_dataset( &raw, date(2025,11,10), None);
    assert_eq!( raw, before);
}

#[test]
fn test_crop_out_of_season_damping () {
    let mango = crops::crop_by_id("mango").unwrap(); // blooms Aug-Oct

    let raw = RawDataset::new( DatasetKind::Bloom, vec![ feature(1.0, 0) ]);
    let in_season = derive_dataset( &raw, date(2025,9,15), Some(mango));
    let off_season = derive_dataset( &raw, date(2025,4,10), Some(mango));

    assert_eq!( in_season.len(), 1);
    match in_season.features[0].metrics {
        DomainMetrics::Bloom { is_in_season, .. } => assert_eq!( is_in_season, Some(true)),
        _ => panic!("wrong metrics variant")
    }

    // out of season the damped intensity falls below the stricter crop retention bar
    assert!( off_season.is_empty());
}

#[test]
fn test_geojson_output () {
    let raw = RawDataset::new( DatasetKind::Bloom, vec![ feature(0.9, 0) ]);
    let ds = derive_dataset( &raw, date(2025,4,10), None);

    let geojson = ds.to_geojson().unwrap();
    println!("{}", geojson);

    let v: serde_json::Value = serde_json::from_str(&geojson).unwrap();
    assert_eq!( v["type"], "FeatureCollection");

    let f = &v["features"][0];
    assert_eq!( f["geometry"]["type"], "Point");
    assert_eq!( f["geometry"]["coordinates"][0], 36.8);
    assert_eq!( f["properties"]["date"], "2025-04-10");
    assert!( f["properties"]["position"].is_null()); // folded into the geometry
    assert!( f["properties"]["intensity"].is_number());
    assert!( f["properties"]["stage"].is_string());
}
