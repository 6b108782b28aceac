use arrival_common::LngLat;

/// Default arrival threshold in degrees (roughly 10 m at mid latitudes).
pub const DEFAULT_THRESHOLD: f64 = 0.0001;

/// Whether `current` is strictly closer than `threshold` to `target`.
///
/// Uses planar distance over `(lng, lat)`; see [`LngLat::planar_distance`].
pub fn is_close_to(target: LngLat, current: LngLat, threshold: f64) -> bool {
    target.planar_distance(&current) < threshold
}
