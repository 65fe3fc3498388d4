///! Latitude/longitude to six character Maidenhead locator

use super::GeoCoordinate;

/// Keeps the exact north pole / antimeridian inside the last field.
const EDGE: f64 = 1e-9;

fn letter(base: u8, value: f64) -> char {
    (base + value.floor() as u8) as char
}

fn digit(value: f64) -> char {
    char::from_digit(value.floor() as u32, 10).unwrap_or('0')
}

/// Convert a coordinate to its field, square and subsquare, e.g. `FN31pr`.
pub fn maidenhead(coord: GeoCoordinate) -> String {
    let lon = (coord.longitude + 180.0).clamp(0.0, 360.0 - EDGE);
    let lat = (coord.latitude + 90.0).clamp(0.0, 180.0 - EDGE);

    [
        letter(b'A', lon / 20.0),
        letter(b'A', lat / 10.0),
        digit((lon % 20.0) / 2.0),
        digit(lat % 10.0),
        letter(b'a', (lon % 2.0) * 12.0),
        letter(b'a', (lat % 1.0) * 24.0),
    ]
    .iter()
    .collect()
}
