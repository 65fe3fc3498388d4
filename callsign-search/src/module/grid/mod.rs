///! Grid square derivation
///!
///! Geocodes the registrant's address line and converts the coordinate into a
///! Maidenhead locator. Every failure here is non-fatal: the caller simply
///! gets no grid square row.

pub mod geocoder;
pub mod maidenhead;

pub use geocoder::Geocoder;
pub use maidenhead::maidenhead;

use crate::error::GeocodeError;
use crate::module::registry::TableRow;

pub const GRID_SQUARE_KEY: &str = "Grid square";

/// Position of the address among the raw detail lines
const ADDRESS_LINE: usize = 1;

/// Latitude and longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// The trimmed address line, counted over the raw lines (blank entries included).
pub fn address_line<S: AsRef<str>>(details: &[S]) -> Result<&str, GeocodeError> {
    details
        .get(ADDRESS_LINE)
        .map(|line| line.as_ref().trim())
        .ok_or(GeocodeError::AddressMissing(details.len()))
}

pub struct LocatorDeriver {
    geocoder: Geocoder,
}

impl LocatorDeriver {
    pub fn new(geocoder: Geocoder) -> Self {
        Self { geocoder }
    }

    /// Geocode the address line and compute its locator.
    pub async fn derive<S: AsRef<str>>(&self, details: &[S]) -> Result<String, GeocodeError> {
        let address = address_line(details)?;
        let coord = self.geocoder.locate(address).await?;
        let locator = maidenhead(coord);
        tracing::debug!(
            "'{}' -> ({}, {}) -> {}",
            address,
            coord.latitude,
            coord.longitude,
            locator
        );
        Ok(locator)
    }

    /// Grid square row for the report, or `None` after printing why there is none.
    pub async fn grid_square_row<S: AsRef<str>>(&self, details: &[S]) -> Option<TableRow> {
        match self.derive(details).await {
            Ok(locator) => Some(TableRow::new(GRID_SQUARE_KEY, locator)),
            Err(e) => {
                tracing::debug!("Grid square lookup failed: {:?}", e);
                println!("{}", e);
                None
            }
        }
    }
}
