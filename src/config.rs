//! Configuration controlling which stations to fetch and what to display.

use std::fs;
use std::path::{Path, PathBuf};

use serde_derive::Deserialize;

use crate::errors::MetarFetcherErr;

// File name searched for in the default locations.
const CONFIG_FILE_NAME: &str = "metar-fetcher.toml";

/// Display options like winds, flight category, and if the process is long lived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Include the flight category, e.g. VFR.
    pub category: bool,
    /// Include the winds, e.g. 09010G18KT.
    pub winds: bool,
    /// Include the ceiling in feet AGL, or CLR.
    pub ceilings: bool,
    /// Keep running and refresh on an interval instead of printing once.
    pub longlived: bool,
    /// Emit i3bar JSON fragments instead of colored terminal lines.
    pub i3json: bool,
}

/// Container for the stations to fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Metars {
    /// Station identifiers, e.g. 4 letter identifiers kmso, kbtm, kord.
    pub stations: Vec<String>,
}

/// The primary container for configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MetarConfig {
    /// The stations to fetch METARs for.
    pub metars: Metars,
    /// Output field selection and mode toggles.
    pub display: DisplayConfig,
}

impl MetarConfig {
    /// Load the configuration.
    ///
    /// With an explicit path the file must exist and decode. Otherwise the default
    /// locations are searched, and a missing file falls back to the defaults since
    /// stations may still be provided on the command line.
    pub fn load(path: Option<&Path>) -> Result<MetarConfig, MetarFetcherErr> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                for candidate in Self::default_paths() {
                    if candidate.is_file() {
                        return Self::from_file(&candidate);
                    }
                }
                log::info!("no configuration file found, using defaults");
                Ok(MetarConfig::default())
            }
        }
    }

    /// Produce a URL formatted list of stations for the API.
    ///
    /// The data server takes a single station string query parameter with the
    /// stations separated by encoded spaces, in the order given.
    pub fn station_query(&self) -> Result<String, MetarFetcherErr> {
        if self.metars.stations.is_empty() {
            return Err(MetarFetcherErr::NoStationsDefined);
        }

        Ok(self.metars.stations.join("%20"))
    }

    fn from_file(path: &Path) -> Result<MetarConfig, MetarFetcherErr> {
        let raw = fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;

        log::info!("using config file: {}", path.display());

        Ok(config)
    }

    // Search ${HOME}/.config/ first, then the working directory.
    // TODO: respect XDG_CONFIG_HOME through dirs::config_dir instead of assuming ~/.config.
    fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(2);

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(CONFIG_FILE_NAME));
        }
        paths.push(PathBuf::from(CONFIG_FILE_NAME));

        paths
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
