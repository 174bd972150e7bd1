//! End-to-end scenarios for bounding-box and distance filtering
//!
//! These tests run every query over a small fixed set of documents and assert
//! the exact set of matching ids, covering:
//! - Standard, degenerate and antimeridian-crossing boxes
//! - Coerced boxes that span the complete longitude range
//! - Unit-converted distance radii
//! - Geo filters combined with a term filter

use geofilter_core::models::{Distance, DistanceUnit, GeoPoint, ValidationMode};
use geofilter_geo::spatial::filter_points;
use geofilter_geo::{BoundingBox, DistanceQuery, GeoFilter, GeoShape};
use std::collections::BTreeSet;

struct Doc {
    id: usize,
    userid: Option<u32>,
    location: GeoPoint,
}

fn doc(id: usize, lat: f64, lon: f64) -> Doc {
    Doc { id, userid: None, location: GeoPoint::new(lat, lon).unwrap() }
}

fn user_doc(id: usize, userid: u32, lat: f64, lon: f64) -> Doc {
    Doc { id, userid: Some(userid), location: GeoPoint::new(lat, lon).unwrap() }
}

fn new_york_docs() -> Vec<Doc> {
    vec![
        doc(1, 40.7143528, -74.0059731), // New York
        doc(2, 40.759011, -73.9844722),  // Times Square
        doc(3, 40.718266, -74.007819),   // Tribeca
        doc(4, 40.7051157, -74.0088305), // Wall Street
        doc(5, 40.7247222, -74.0),       // Soho
        doc(6, 40.731033, -73.9962255),  // Greenwich Village
        doc(7, 40.65, -73.95),           // Brooklyn
    ]
}

/// Stockholm and Montreal stored with swapped axes, as the legacy fixture does
fn swapped_axis_docs() -> Vec<Doc> {
    vec![
        user_doc(1, 880, 18.036842, 59.328355000000002),
        user_doc(2, 534, 45.509526999999999, -73.570986000000005),
    ]
}

fn city_docs() -> Vec<Doc> {
    vec![
        user_doc(1, 880, 59.328355000000002, 18.036842), // Stockholm
        user_doc(2, 534, 45.509526999999999, -73.570986000000005), // Montreal
    ]
}

fn search(docs: &[Doc], shape: &GeoShape) -> BTreeSet<usize> {
    let points: Vec<(GeoPoint, usize)> = docs.iter().map(|d| (d.location, d.id)).collect();
    filter_points(&points, shape).into_iter().collect()
}

fn search_user(docs: &[Doc], userid: u32, filter: &GeoFilter) -> BTreeSet<usize> {
    docs.iter()
        .filter(|d| d.userid == Some(userid) && filter.matches(&d.location))
        .map(|d| d.id)
        .collect()
}

fn bbox(top: f64, left: f64, bottom: f64, right: f64) -> GeoShape {
    BoundingBox::new(top, left, bottom, right, ValidationMode::Strict).unwrap().into()
}

fn coerced_bbox(top: f64, left: f64, bottom: f64, right: f64) -> GeoShape {
    BoundingBox::new(top, left, bottom, right, ValidationMode::Coerce).unwrap().into()
}

fn ids(values: &[usize]) -> BTreeSet<usize> {
    values.iter().copied().collect()
}

#[test]
fn test_simple_bounding_box() {
    let docs = new_york_docs();
    let shape = bbox(40.73, -74.1, 40.717, -73.99);

    let hits = search(&docs, &shape);
    assert_eq!(hits.len(), 2);
    assert!(hits.is_subset(&ids(&[1, 3, 5])), "unexpected hits {:?}", hits);
    assert_eq!(hits, ids(&[3, 5]));

    // Same query again yields the same answer
    assert_eq!(search(&docs, &shape), hits);
}

#[test]
fn test_point_box_matches_single_document() {
    let docs = new_york_docs();
    let shape = bbox(40.7143528, -74.0059731, 40.7143528, -74.0059731);
    assert_eq!(search(&docs, &shape), ids(&[1]));
}

#[test]
fn test_zero_height_box() {
    let docs = new_york_docs();
    let shape = bbox(40.759011, -74.00009, 40.759011, -73.0059731);
    assert_eq!(search(&docs, &shape), ids(&[2]));
}

#[test]
fn test_zero_width_box() {
    let docs = new_york_docs();
    let shape = bbox(41.8, -73.9844722, 40.7, -73.9844722);
    assert_eq!(search(&docs, &shape), ids(&[2]));
}

#[test]
fn test_distance_in_kilometers() {
    let docs = new_york_docs();
    let center = GeoPoint::new(40.5, -73.9).unwrap();
    let query = DistanceQuery::new(center, Distance::kilometers(25.0)).unwrap();
    assert_eq!(query.radius_meters(), 25_000.0);

    let hits = search(&docs, &GeoShape::from(query.clone()));
    assert_eq!(hits, ids(&[4, 7]));

    for d in &docs {
        let expected = query.distance_to(&d.location) <= 25_000.0;
        assert_eq!(hits.contains(&d.id), expected, "doc {}", d.id);
    }
}

#[test]
fn test_antimeridian_box_with_term_filter() {
    let docs = swapped_axis_docs();
    let shape = bbox(74.579421999999994, 143.5, -66.668903999999998, 113.96875);
    if let GeoShape::BoundingBox(b) = &shape {
        assert!(b.crosses_antimeridian());
    }
    let filter = GeoFilter::new(shape);

    assert_eq!(search_user(&docs, 880, &filter), ids(&[1]));
    assert_eq!(search_user(&docs, 880, &filter), ids(&[1]));
    assert_eq!(search_user(&docs, 534, &filter), ids(&[2]));
    assert_eq!(search_user(&docs, 534, &filter), ids(&[2]));
}

#[test]
fn test_degenerate_boxes_with_term_filter() {
    let docs = swapped_axis_docs();

    // top == bottom && left == right
    let stockholm = GeoFilter::new(bbox(18.036842, 59.328355000000002, 18.036842, 59.328355000000002));
    assert_eq!(search_user(&docs, 880, &stockholm), ids(&[1]));
    let montreal = GeoFilter::new(bbox(
        45.509526999999999,
        -73.570986000000005,
        45.509526999999999,
        -73.570986000000005,
    ));
    assert_eq!(search_user(&docs, 534, &montreal), ids(&[2]));

    // top == bottom, crossing the antimeridian
    let line = GeoFilter::new(bbox(18.036842, 143.5, 18.036842, 113.96875));
    assert_eq!(search_user(&docs, 880, &line), ids(&[1]));
    let line = GeoFilter::new(bbox(45.509526999999999, 143.5, 45.509526999999999, 113.96875));
    assert_eq!(search_user(&docs, 534, &line), ids(&[2]));

    // left == right
    let meridian =
        GeoFilter::new(bbox(74.579421999999994, 59.328355000000002, -66.668903999999998, 59.328355000000002));
    assert_eq!(search_user(&docs, 880, &meridian), ids(&[1]));
    let meridian = GeoFilter::new(bbox(
        74.579421999999994,
        -73.570986000000005,
        -66.668903999999998,
        -73.570986000000005,
    ));
    assert_eq!(search_user(&docs, 534, &meridian), ids(&[2]));
}

#[test]
fn test_distance_in_miles_with_term_filter() {
    let docs = swapped_axis_docs();

    let query = DistanceQuery::new(GeoPoint::new(20.0, 60.0).unwrap(), Distance::miles(500.0))
        .unwrap();
    assert_eq!(query.radius_meters(), 804_672.0);
    assert_eq!(search_user(&docs, 880, &GeoFilter::new(query)), ids(&[1]));

    let query = DistanceQuery::new(GeoPoint::new(45.0, -73.0).unwrap(), Distance::miles(500.0))
        .unwrap();
    assert_eq!(search_user(&docs, 534, &GeoFilter::new(query)), ids(&[2]));
}

#[test]
fn test_complete_longitude_range() {
    let docs = city_docs();

    assert_eq!(search(&docs, &coerced_bbox(50.0, -180.0, -50.0, 180.0)), ids(&[2]));
    assert_eq!(search(&docs, &coerced_bbox(90.0, -180.0, -90.0, 180.0)), ids(&[1, 2]));
    assert_eq!(search(&docs, &coerced_bbox(50.0, 0.0, -50.0, 360.0)), ids(&[2]));
    assert_eq!(search(&docs, &coerced_bbox(90.0, 0.0, -90.0, 360.0)), ids(&[1, 2]));
}

#[test]
fn test_complete_longitude_range_zero_height() {
    let docs = city_docs();

    assert_eq!(
        search(&docs, &coerced_bbox(59.328355000000002, 0.0, 59.328355000000002, 360.0)),
        ids(&[1])
    );
    assert_eq!(
        search(&docs, &coerced_bbox(59.328355000000002, -180.0, 59.328355000000002, 180.0)),
        ids(&[1])
    );
}

#[test]
fn test_shifted_longitude_convention_matches_standard() {
    let docs = new_york_docs();
    let shifted = coerced_bbox(50.0, 0.0, -50.0, 360.0);
    let standard = coerced_bbox(50.0, -180.0, -50.0, 180.0);
    assert_eq!(search(&docs, &shifted), search(&docs, &standard));
    assert_eq!(search(&docs, &shifted).len(), docs.len());
}

#[test]
fn test_long_distance_in_miles() {
    let docs = city_docs();
    let radius = Distance::parse("1800mi", DistanceUnit::Meters).unwrap();
    let query = DistanceQuery::new(GeoPoint::new(60.0, -20.0).unwrap(), radius).unwrap();
    assert_eq!(search(&docs, &GeoShape::from(query)), ids(&[1]));
}
