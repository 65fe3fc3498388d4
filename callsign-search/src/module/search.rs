///! Call sign search pipeline: request, parse, classify, grid square

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::module::grid::{Geocoder, LocatorDeriver};
use crate::module::registry::{
    classify_details, parse_registry_html, CallsignQuery, RegistryClient, SearchReport,
};

pub struct CallsignSearch {
    registry: RegistryClient,
    /// `None` when geocoding is switched off in the configuration
    locator: Option<LocatorDeriver>,
}

impl CallsignSearch {
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let registry = RegistryClient::new(config)?;
        let locator = if config.geocode_enabled {
            let geocoder = Geocoder::new(config).map_err(SearchError::Transport)?;
            Some(LocatorDeriver::new(geocoder))
        } else {
            tracing::info!("Geocoding disabled, no grid square will be derived");
            None
        };

        Ok(Self { registry, locator })
    }

    /// Run one lookup. Only registry failures are returned as errors.
    pub async fn lookup(&self, callsign: &str) -> Result<SearchReport, SearchError> {
        let query = CallsignQuery::new(callsign);
        let html = self.registry.search(&query).await?;
        let page = parse_registry_html(&html)?;

        let (basic_info, mut tables) = classify_details(&page.details);
        tracing::info!(
            "{}: {} info lines, {} table rows",
            page.title,
            basic_info.len(),
            tables.len()
        );

        if let Some(locator) = &self.locator {
            if let Some(row) = locator.grid_square_row(&page.details).await {
                tables.push(row);
            }
        }

        Ok(SearchReport {
            title: page.title,
            basic_info,
            tables,
        })
    }
}
