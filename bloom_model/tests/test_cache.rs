#![allow(unused)]

// run with "cargo test --test test_cache -- --nocapture"

use std::sync::Arc;
use chrono::NaiveDate;
use bloom_common::geo::GeoPoint;
use bloom_model::cache::*;
use bloom_model::crops::crop_by_id;
use bloom_model::*;

fn date (y: i32, m: u32, d: u32)->NaiveDate {
    NaiveDate::from_ymd_opt(y,m,d).unwrap()
}

fn test_dataset ()->RawDataset {
    let features = (0..16).map( |i| GeoFeature {
        position: GeoPoint::from_lon_lat_degrees( 36.0 + 0.1 * i as f64, -1.0),
        base_value: 0.3 + 0.04 * i as f64,
        index: i,
        region: None
    }).collect();
    RawDataset::new( DatasetKind::Bloom, features)
}

#[test]
fn test_hit_returns_same_instance () {
    let raw = test_dataset();
    let mut cache = DerivationCache::default();

    let a = cache.get_or_derive( &raw, date(2025,4,10), None);
    let b = cache.get_or_derive( &raw, date(2025,4,10), None);

    assert!( Arc::ptr_eq( &a, &b));
    assert_eq!( cache.len(), 1);
    assert_eq!( cache.hits(), 1);
    assert_eq!( cache.misses(), 1);
}

#[test]
fn test_cached_equals_fresh () {
    let raw = test_dataset();
    let mut cache = DerivationCache::default();

    let cached = cache.get_or_derive( &raw, date(2025,6,1), None);
    let fresh = derive_dataset( &raw, date(2025,6,1), None);
    assert_eq!( *cached, fresh);
}

#[test]
fn test_capacity_bound_and_eviction () {
    let raw = test_dataset();
    let mut cache = DerivationCache::new(2);

    cache.get_or_derive( &raw, date(2025,1,1), None);
    cache.get_or_derive( &raw, date(2025,2,1), None);
    cache.get_or_derive( &raw, date(2025,3,1), None);

    assert_eq!( cache.len(), 2); // never exceeds capacity

    // oldest entry was evicted
    let k1 = CacheKey::new( raw.kind, date(2025,1,1), None);
    assert!( cache.get(&k1).is_none());
    let k3 = CacheKey::new( raw.kind, date(2025,3,1), None);
    assert!( cache.get(&k3).is_some());
}

#[test]
fn test_get_refreshes_recency () {
    let raw = test_dataset();
    let mut cache = DerivationCache::new(2);

    cache.get_or_derive( &raw, date(2025,1,1), None);
    cache.get_or_derive( &raw, date(2025,2,1), None);

    // touch january so february becomes the eviction candidate
    let k1 = CacheKey::new( raw.kind, date(2025,1,1), None);
    assert!( cache.get(&k1).is_some());

    cache.get_or_derive( &raw, date(2025,3,1), None);

    assert!( cache.get(&k1).is_some());
    let k2 = CacheKey::new( raw.kind, date(2025,2,1), None);
    assert!( cache.get(&k2).is_none());
}

#[test]
fn test_crop_keys_are_distinct () {
    let raw = test_dataset();
    let mut cache = DerivationCache::default();

    let coffee = crop_by_id("coffee").unwrap();
    let generic = cache.get_or_derive( &raw, date(2025,4,10), None);
    let with_crop = cache.get_or_derive( &raw, date(2025,4,10), Some(coffee));

    assert_eq!( cache.len(), 2);
    assert!( !Arc::ptr_eq( &generic, &with_crop));
}

#[test]
fn test_clear () {
    let raw = test_dataset();
    let mut cache = DerivationCache::default();

    cache.get_or_derive( &raw, date(2025,4,10), None);
    cache.clear();
    assert!( cache.is_empty());
}
