use crate::constants::EARTH_RADIUS_KM;

/// Great-circle distance in meters between two coordinate pairs (haversine).
pub fn calculate_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c * 1000.0
}

/// Leading integer of a delivery-time range such as `"25-30 mins"`.
pub fn leading_minutes(range: &str) -> Option<u32> {
    range
        .split('-')
        .next()?
        .trim()
        .split_whitespace()
        .next()?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_between_a_point_and_itself_is_zero() {
        assert_eq!(calculate_distance(0.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(calculate_distance(28.6139, 77.2090, 28.6139, 77.2090), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let d1 = calculate_distance(28.6139, 77.2090, 19.0760, 72.8777);
        let d2 = calculate_distance(19.0760, 72.8777, 28.6139, 77.2090);
        assert!((d1 - d2).abs() < 1e-6);
    }

    #[test]
    fn distance_delhi_to_mumbai_is_plausible() {
        // Roughly 1150 km as the crow flies.
        let d = calculate_distance(28.6139, 77.2090, 19.0760, 72.8777);
        assert!(d > 1_100_000.0 && d < 1_200_000.0);
    }

    #[test]
    fn leading_minutes_parses_a_range() {
        assert_eq!(leading_minutes("25-30 mins"), Some(25));
        assert_eq!(leading_minutes("15-20 mins"), Some(15));
    }

    #[test]
    fn leading_minutes_parses_a_single_value() {
        assert_eq!(leading_minutes("40 mins"), Some(40));
    }

    #[test]
    fn leading_minutes_rejects_garbage() {
        assert_eq!(leading_minutes("soon"), None);
        assert_eq!(leading_minutes(""), None);
    }
}
