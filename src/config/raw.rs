use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("roofmap.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub catalogue: Option<Catalogue>,
    pub map: Option<Map>,
    pub anchor: Option<Anchor>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Catalogue {
    pub file: PathBuf,
}

impl Default for Catalogue {
    fn default() -> Self {
        Config::default()
            .catalogue
            .expect("Catalogue configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Map {
    pub center_lat: Option<f64>,
    pub center_lng: Option<f64>,
    pub zoom: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub popup_delay: Option<Duration>,
    pub tile_layer_url: Option<String>,
    pub attribution: Option<String>,
}

impl Default for Map {
    fn default() -> Self {
        Config::default().map.expect("Map configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Anchor {
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

impl Default for Anchor {
    fn default() -> Self {
        Config::default().anchor.expect("Anchor configuration")
    }
}
