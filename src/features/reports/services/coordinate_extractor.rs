//! Pulls a latitude/longitude pair out of OCR text from a camera coordinate stamp.
//!
//! Stamps typically read like `Lat 17.385000 Long 078.486700`. Both patterns are
//! scanned independently over the whole text, and because a two-digit-integer
//! decimal fits both shapes the latitude token is usually also the first
//! longitude-shaped match. The longitude is therefore taken from the second
//! longitude-shaped match. No range checks are applied.

use lazy_static::lazy_static;
use regex::Regex;

use crate::features::reports::models::Coordinates;

lazy_static! {
    /// Optional minus, 1-2 integer digits, 3+ fractional digits
    static ref LATITUDE_RE: Regex = Regex::new(r"-?[0-9]{1,2}\.[0-9]{3,}").unwrap();

    /// Optional minus, 2-3 integer digits, 3+ fractional digits
    static ref LONGITUDE_RE: Regex = Regex::new(r"-?[0-9]{2,3}\.[0-9]{3,}").unwrap();
}

/// Position of the longitude-shaped match used as longitude
const LONGITUDE_MATCH_INDEX: usize = 1;

/// Extract coordinates from recognized text.
///
/// Returns `None` when there is no latitude-shaped token or fewer than two
/// longitude-shaped tokens. Never fails.
pub fn extract_coordinates(text: &str) -> Option<Coordinates> {
    let latitude = LATITUDE_RE.find(text)?;
    let longitude = LONGITUDE_RE.find_iter(text).nth(LONGITUDE_MATCH_INDEX)?;

    // Both tokens are digits around a single '.', so parsing cannot fail
    let latitude = latitude.as_str().parse::<f64>().ok()?;
    let longitude = longitude.as_str().parse::<f64>().ok()?;

    Some(Coordinates {
        latitude,
        longitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_camera_stamp() {
        let text = "GPS Map Camera\nHyderabad, Telangana\nLat 17.385000 Long 078.486700\n12/03/2024 10:42 AM";

        let coords = extract_coordinates(text).unwrap();
        assert_eq!(coords.latitude, 17.385);
        assert_eq!(coords.longitude, 78.4867);
    }

    #[test]
    fn test_uses_second_longitude_match_not_first() {
        // -8.123000 has one integer digit, so it only matches the latitude shape
        let text = "-8.123000\n078.111111 078.486700";

        let coords = extract_coordinates(text).unwrap();
        assert_eq!(coords.latitude, -8.123);
        assert_eq!(coords.longitude, 78.4867);
    }

    #[test]
    fn test_latitude_token_counts_as_first_longitude_match() {
        // 17.385000 fits both shapes, so the longitude list is
        // [17.385000, 078.111111, 078.486700] and index 1 is 078.111111
        let text = "17.385000\n078.111111 078.486700";

        let coords = extract_coordinates(text).unwrap();
        assert_eq!(coords.latitude, 17.385);
        assert_eq!(coords.longitude, 78.111111);
    }

    #[test]
    fn test_no_coordinates_in_empty_or_plain_text() {
        assert_eq!(extract_coordinates(""), None);
        assert_eq!(extract_coordinates("   \n\t"), None);
        assert_eq!(extract_coordinates("Pothole near the bus stop"), None);
    }

    #[test]
    fn test_single_longitude_match_yields_nothing() {
        // One token matching both shapes: one latitude, one longitude
        assert_eq!(extract_coordinates("17.385000"), None);
        // Three-digit integer part is longitude-only, still just one match
        assert_eq!(extract_coordinates("5.12345 123.456"), None);
    }

    #[test]
    fn test_no_latitude_match_yields_nothing() {
        // Fewer than three fractional digits fits neither shape
        assert_eq!(extract_coordinates("17.38 78.48 100.12"), None);
    }

    #[test]
    fn test_no_bounds_validation() {
        let coords = extract_coordinates("95.123 Rs 499.999").unwrap();
        assert_eq!(coords.latitude, 95.123);
        assert_eq!(coords.longitude, 499.999);
    }

    #[test]
    fn test_negative_values() {
        let coords = extract_coordinates("-33.868800, -151.209300").unwrap();
        assert_eq!(coords.latitude, -33.8688);
        assert_eq!(coords.longitude, -151.2093);
    }

    #[test]
    fn test_latitude_found_inside_longer_number() {
        // Leftmost latitude match inside "078.111111" starts at "78"
        let coords = extract_coordinates("078.111111 078.486700").unwrap();
        assert_eq!(coords.latitude, 78.111111);
        assert_eq!(coords.longitude, 78.4867);
    }

    #[test]
    fn test_non_ascii_digits_are_ignored() {
        // Arabic-Indic digits are not matched
        assert_eq!(extract_coordinates("١٧.٣٨٥٠٠٠ ٧٨.٤٨٦٧٠٠"), None);
    }
}
