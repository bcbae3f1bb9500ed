//! Integration tests for haversine separation.

use sky_coords::{
    CoordError, EquatorialCoordinate, spherical_distance, spherical_distance_broadcast,
};

#[test]
fn reference_value() {
    let d = spherical_distance(1.0, 2.0, 3.0, 4.0);
    assert!((d - 2.8264172166623145).abs() < 1e-12, "d = {d}");
}

#[test]
fn zero_separation() {
    assert_eq!(spherical_distance(0.0, 0.0, 0.0, 0.0), 0.0);
}

#[test]
fn array_matches_elementwise_scalar() {
    let ra2 = [1.0, 2.0, 3.0, 4.0];
    let dec2 = [4.0, 5.0, 6.0, 7.0];
    let arr = spherical_distance_broadcast(1.0, 2.0, &ra2, &dec2).unwrap();
    let expected = [2.0, 3.16165191, 4.46977556, 5.82570185];
    for i in 0..4 {
        assert_eq!(arr[i], spherical_distance(1.0, 2.0, ra2[i], dec2[i]));
        assert!((arr[i] - expected[i]).abs() < 1e-8, "[{i}] = {}", arr[i]);
    }
}

#[test]
fn mismatched_arrays_rejected() {
    let err = spherical_distance_broadcast(&[0.0, 1.0], &[0.0, 1.0, 2.0], 0.0, 0.0).unwrap_err();
    assert!(matches!(err, CoordError::ShapeMismatch { .. }));
}

#[test]
fn separation_of_parsed_positions() {
    let a: EquatorialCoordinate = "00:00:00 +00:00:00".parse().unwrap();
    let b: EquatorialCoordinate = "01:00:00 +00:00:00".parse().unwrap();
    let d = spherical_distance(a.ra(), a.dec(), b.ra(), b.dec());
    assert!((d - 15.0).abs() < 1e-10, "d = {d}");
}
