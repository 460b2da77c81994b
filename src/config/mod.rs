use anyhow::{anyhow, Result};
use roofmap_core::settings::MapSettings;
use roofmap_entities::{anchor::AnchorPoint, geo::MapPoint};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "roofmap.toml";

pub const ENV_NAME_CATALOGUE_FILE: &str = "ROOFMAP_CATALOGUE";

pub struct Config {
    pub catalogue: Catalogue,
    pub map: MapSettings,
}

pub struct Catalogue {
    /// JSON file with all location records.
    pub file: PathBuf,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(file) = env::var(ENV_NAME_CATALOGUE_FILE) {
            cfg.catalogue.file = file.into();
        }
        Ok(cfg)
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            catalogue,
            map,
            anchor,
        } = from;

        let raw::Catalogue { file } = catalogue.unwrap_or_default();
        let catalogue = Catalogue { file };

        let raw::Anchor {
            name,
            address,
            lat,
            lng,
        } = anchor.unwrap_or_default();
        let anchor = AnchorPoint {
            name,
            address,
            pos: MapPoint::try_from_lat_lng_deg(lat, lng)
                .ok_or_else(|| anyhow!("Invalid anchor position ({lat}, {lng})"))?,
        };

        let raw::Map {
            center_lat,
            center_lng,
            zoom,
            popup_delay,
            tile_layer_url,
            attribution,
        } = map.unwrap_or_default();

        let defaults = MapSettings::default();
        let center = match (center_lat, center_lng) {
            (Some(lat), Some(lng)) => MapPoint::try_from_lat_lng_deg(lat, lng)
                .ok_or_else(|| anyhow!("Invalid map center ({lat}, {lng})"))?,
            (None, None) => anchor.pos,
            _ => return Err(anyhow!("Incomplete map center")),
        };
        let zoom = zoom.unwrap_or(defaults.zoom);
        if !(0.0..=20.0).contains(&zoom) {
            return Err(anyhow!("Zoom level out of range: {zoom}"));
        }

        let map = MapSettings {
            center,
            zoom,
            popup_delay: popup_delay.unwrap_or(defaults.popup_delay),
            tile_layer_url: tile_layer_url.unwrap_or(defaults.tile_layer_url),
            attribution: attribution.unwrap_or(defaults.attribution),
            anchor,
        };

        Ok(Self { catalogue, map })
    }
}
