use anyhow::{anyhow, bail, Result};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use std::time::Duration;

use placemap_core::entities::geo::MapPoint;
use placemap_frontend_api::{FoursquareCredentials, VenueQuery};

mod raw;

/// Element of the host page that contains the runtime configuration.
pub const CONFIG_ELEMENT_ID: &str = "placemap-config";

/// Google only allows zoom levels in this range.
const MAX_ZOOM: u8 = 22;

#[derive(Debug, Clone)]
pub struct Config {
    pub map: Map,
    pub google_maps: GoogleMaps,
    pub foursquare: Foursquare,
    pub wikipedia: Wikipedia,
    pub filter: Filter,
}

impl Config {
    /// Loads the configuration from `toml`,
    /// using the defaults for all missing keys.
    pub fn try_load_from_toml_str(toml: &str) -> Result<Self> {
        let raw_config = raw::Config::from_toml_str_with_defaults(toml)?;
        Self::try_from(raw_config)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Map {
    pub center: MapPoint,
    pub zoom: u8,
}

#[derive(Debug, Clone)]
pub struct GoogleMaps {
    /// URL of the script including the API key and callback.
    pub script_url: String,
    /// Name of the global function that is called when the script is ready.
    pub callback: String,
    /// Name of the global function that reports load failures.
    pub error_callback: String,
}

#[derive(Debug, Clone)]
pub struct Foursquare {
    pub api_url: String,
    pub credentials: FoursquareCredentials,
    pub query: VenueQuery,
}

#[derive(Debug, Clone)]
pub struct Wikipedia {
    pub api_url: String,
}

#[derive(Debug, Clone, Copy)]
pub struct Filter {
    pub debounce: Duration,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            map,
            google_maps,
            foursquare,
            wikipedia,
            filter,
        } = from;

        let raw::Map { center, zoom } = map.unwrap_or_default();
        let center = MapPoint::try_from_lat_lng_deg(center.lat, center.lng)
            .map_err(|err| anyhow!("Invalid map center: {err}"))?;
        if zoom > MAX_ZOOM {
            bail!("Invalid map zoom level {zoom} (max. {MAX_ZOOM})");
        }
        let map = Map { center, zoom };

        let raw::GoogleMaps {
            script_url,
            api_key,
            callback,
            error_callback,
        } = google_maps.unwrap_or_default();
        let api_key = api_key.trim();
        if api_key.is_empty() {
            bail!("Missing Google Maps API key");
        }
        if callback.trim().is_empty() || error_callback.trim().is_empty() {
            bail!("Missing name of a Google Maps callback");
        }
        if callback == error_callback {
            bail!("The Google Maps callbacks must have different names");
        }
        let script_url = format!(
            "{script_url}?key={}&callback={}",
            utf8_percent_encode(api_key, NON_ALPHANUMERIC),
            utf8_percent_encode(&callback, NON_ALPHANUMERIC)
        );
        let google_maps = GoogleMaps {
            script_url,
            callback,
            error_callback,
        };

        let raw::Foursquare {
            api_url,
            client_id,
            client_secret,
            version,
            near,
            ll,
            query,
            limit,
        } = foursquare.unwrap_or_default();
        if client_id.trim().is_empty() || client_secret.trim().is_empty() {
            log::warn!("Missing Foursquare credentials");
        }
        let near = near.filter(|n| !n.trim().is_empty());
        let ll = ll.filter(|ll| !ll.trim().is_empty());
        if near.is_none() && ll.is_none() {
            bail!("Either 'near' or 'll' is required to search places");
        }
        if limit == Some(0) {
            bail!("The result limit must be greater than zero");
        }
        let foursquare = Foursquare {
            api_url,
            credentials: FoursquareCredentials {
                client_id,
                client_secret,
                version,
            },
            query: VenueQuery {
                near,
                ll,
                query,
                limit,
            },
        };

        let raw::Wikipedia { api_url } = wikipedia.unwrap_or_default();
        let wikipedia = Wikipedia { api_url };

        let raw::Filter { debounce } = filter.unwrap_or_default();
        let filter = Filter { debounce };

        Ok(Self {
            map,
            google_maps,
            foursquare,
            wikipedia,
            filter,
        })
    }
}
