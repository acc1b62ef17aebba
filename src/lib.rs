#![deny(missing_docs)]
//! Package to fetch METAR observations and display them in a terminal or status bar.

//
// Public API
//
pub use crate::category::FlightCategory;
pub use crate::cmd_line::CmdLineArgs;
pub use crate::config::{DisplayConfig, MetarConfig, Metars};
pub use crate::errors::MetarFetcherErr;
pub use crate::metar::{Metar, MetarData, MetarResponse, SkyCondition};

pub mod fetch;
pub mod render;

//
// Implementation only
//
mod category;
mod cmd_line;
mod config;
mod errors;
mod metar;
