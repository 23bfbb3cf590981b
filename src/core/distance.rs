use crate::models::BoundingBox;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers (haversine).
///
/// Inputs are decimal degrees; any real-valued angle is accepted and wraps
/// naturally through the trigonometry. Identical points yield 0.
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distances from one source point to every point in `targets`, in km.
///
/// The engine calls this once per request against the whole catalog, so the
/// source latitude's cosine is hoisted out of the loop.
pub fn distances_from(lat: f64, lon: f64, targets: &[(f64, f64)]) -> Vec<f64> {
    let lat_rad = lat.to_radians();
    let cos_lat = lat_rad.cos();

    targets
        .iter()
        .map(|&(tlat, tlon)| {
            let tlat_rad = tlat.to_radians();
            let delta_lat = (tlat - lat).to_radians();
            let delta_lon = (tlon - lon).to_radians();

            let a = (delta_lat / 2.0).sin().powi(2)
                + cos_lat * tlat_rad.cos() * (delta_lon / 2.0).sin().powi(2);
            let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

            EARTH_RADIUS_KM * c
        })
        .collect()
}

/// Bounding box that fully contains the circle of `radius_km` around a point.
///
/// Much cheaper than haversine for pre-filtering: 1° latitude ≈ 111 km,
/// 1° longitude ≈ 111 km * cos(latitude). The box over-approximates the
/// circle, so rejecting points outside it never drops a true candidate.
/// When the circle can cross a pole no longitude window bounds it, so the
/// box widens to the full longitude range there.
pub fn radius_bounding_box(lat: f64, lon: f64, radius_km: f64) -> BoundingBox {
    let lat_delta = radius_km / 111.0;

    if lat.abs() + lat_delta >= 90.0 {
        return BoundingBox {
            min_lat: lat - lat_delta,
            max_lat: lat + lat_delta,
            min_lon: -180.0,
            max_lon: 180.0,
        };
    }

    let lon_delta = radius_km / (111.0 * lat.to_radians().cos());

    BoundingBox {
        min_lat: lat - lat_delta,
        max_lat: lat + lat_delta,
        min_lon: lon - lon_delta,
        max_lon: lon + lon_delta,
    }
}
