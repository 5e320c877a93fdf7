#![allow(unused)]

// run with "cargo test --test test_geo -- --nocapture"

use bloom_common::geo::*;

#[test]
fn test_geopoint_serde () {
    let p = GeoPoint::from_lon_lat_degrees( 37.9062, -0.0236);

    let s = serde_json::to_string(&p).unwrap();
    println!("serialized GeoPoint: '{}'", s);
    assert_eq!( s, "[37.9062,-0.0236]"); // GeoJSON coordinate order: lon first

    let p1: GeoPoint = serde_json::from_str(&s).unwrap();
    assert_eq!( p, p1);
}

#[test]
fn test_geopoint_validity () {
    assert!( GeoPoint::from_lon_lat_degrees( 37.9, -0.02).is_valid());
    assert!( !GeoPoint::from_lon_lat_degrees( 200.0, 0.0).is_valid());
    assert!( !GeoPoint::from_lon_lat_degrees( 0.0, 95.0).is_valid());
}

#[test]
fn test_georect_contains () {
    println!("kenya bounds: {}", KENYA_BOUNDS);

    assert!( KENYA_BOUNDS.contains( &KENYA_CENTER));
    assert!( KENYA_BOUNDS.contains( &GeoPoint::from_lon_lat_degrees( 36.8, -1.3)));  // Nairobi
    assert!( !KENYA_BOUNDS.contains( &GeoPoint::from_lon_lat_degrees( 4.9, 52.3)));  // Amsterdam
}
