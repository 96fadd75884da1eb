use duration_str::deserialize_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("placemap.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub map: Option<Map>,
    pub google_maps: Option<GoogleMaps>,
    pub foursquare: Option<Foursquare>,
    pub wikipedia: Option<Wikipedia>,
    pub filter: Option<Filter>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

impl Config {
    /// Parses `toml` on top of the default configuration.
    ///
    /// Every key that is missing in `toml` keeps its default value.
    pub fn from_toml_str_with_defaults(toml: &str) -> Result<Self, toml::de::Error> {
        let mut table: toml::Table =
            toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        let overrides: toml::Table = toml::from_str(toml)?;
        merge_tables(&mut table, overrides);
        toml::Value::Table(table).try_into()
    }
}

fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(base)), toml::Value::Table(value)) => {
                merge_tables(base, value);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Map {
    pub center: MapCenter,
    pub zoom: u8,
}

impl Default for Map {
    fn default() -> Self {
        Config::default().map.expect("Map configuration")
    }
}

#[derive(Deserialize)]
pub struct MapCenter {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GoogleMaps {
    pub script_url: String,
    pub api_key: String,
    pub callback: String,
    pub error_callback: String,
}

impl Default for GoogleMaps {
    fn default() -> Self {
        Config::default()
            .google_maps
            .expect("Google Maps configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Foursquare {
    pub api_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub version: String,
    pub near: Option<String>,
    pub ll: Option<String>,
    pub query: Option<String>,
    pub limit: Option<u32>,
}

impl Default for Foursquare {
    fn default() -> Self {
        Config::default()
            .foursquare
            .expect("Foursquare configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Wikipedia {
    pub api_url: String,
}

impl Default for Wikipedia {
    fn default() -> Self {
        Config::default().wikipedia.expect("Wikipedia configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Filter {
    #[serde(deserialize_with = "deserialize_duration")]
    pub debounce: Duration,
}

impl Default for Filter {
    fn default() -> Self {
        Config::default().filter.expect("Filter configuration")
    }
}
