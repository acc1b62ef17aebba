//! Module for errors.
use std::{error::Error, fmt::Display};

/// Error from the METAR fetching interface.
#[derive(Debug)]
pub enum MetarFetcherErr {
    // Inherited errors from std
    /// Error forwarded from std
    IO(::std::io::Error),

    // Other forwarded errors
    /// Error forwarded from the HTTP client
    Network(::reqwest::Error),
    /// Error decoding the configuration file
    ConfigParse(::toml::de::Error),
    /// Error deserializing the data server XML response
    Xml(::serde_xml_rs::Error),
    /// Error serializing a status bar JSON fragment
    Json(::serde_json::Error),

    // My own errors from this crate
    /// No stations are configured.
    NoStationsDefined,
    /// The data server answered with something other than a success status.
    UnexpectedStatus(::reqwest::StatusCode),
}

impl Display for MetarFetcherErr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        use crate::errors::MetarFetcherErr::*;

        match self {
            IO(err) => write!(f, "std lib io error: {}", err),

            Network(err) => write!(f, "http client error: {}", err),
            ConfigParse(err) => write!(f, "error decoding config: {}", err),
            Xml(err) => write!(f, "error decoding METAR response: {}", err),
            Json(err) => write!(f, "error encoding status bar output: {}", err),

            NoStationsDefined => write!(f, "no stations defined"),
            UnexpectedStatus(code) => {
                write!(f, "unexpected status from the data server: {}", code)
            }
        }
    }
}

impl Error for MetarFetcherErr {}

impl From<::std::io::Error> for MetarFetcherErr {
    fn from(err: ::std::io::Error) -> MetarFetcherErr {
        MetarFetcherErr::IO(err)
    }
}

impl From<::reqwest::Error> for MetarFetcherErr {
    fn from(err: ::reqwest::Error) -> MetarFetcherErr {
        MetarFetcherErr::Network(err)
    }
}

impl From<::toml::de::Error> for MetarFetcherErr {
    fn from(err: ::toml::de::Error) -> MetarFetcherErr {
        MetarFetcherErr::ConfigParse(err)
    }
}

impl From<::serde_xml_rs::Error> for MetarFetcherErr {
    fn from(err: ::serde_xml_rs::Error) -> MetarFetcherErr {
        MetarFetcherErr::Xml(err)
    }
}

impl From<::serde_json::Error> for MetarFetcherErr {
    fn from(err: ::serde_json::Error) -> MetarFetcherErr {
        MetarFetcherErr::Json(err)
    }
}
