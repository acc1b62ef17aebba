//! Command line options for the metarf application.

use std::path::{Path, PathBuf};

use clap::{crate_version, App, Arg, ArgMatches};

use crate::errors::MetarFetcherErr;

/// Struct to package up command line arguments.
#[derive(Clone, Debug)]
pub struct CmdLineArgs {
    // Explicit path to a configuration file.
    config: Option<PathBuf>,
    // Station override, e.g. 3 or 4 letter identifiers kmso, kbtm, kord.
    stations: Vec<String>,
}

impl<'a, 'b> CmdLineArgs {
    /// Create a new app with the common arguments attached.
    pub fn new_app(app_name: &'static str, about: &'static str) -> App<'a, 'b> {
        App::new(app_name)
            .author("Matthew Yeazel <mattlezeay@gmail.com>")
            .about(about)
            .version(crate_version!())
            .arg(
                Arg::with_name("config")
                    .short("c")
                    .long("config")
                    .takes_value(true)
                    .help("Path to a configuration file.")
                    .long_help(
                        "Path to a configuration file. Defaults to metar-fetcher.toml in \
                         '${HOME}/.config/' or the working directory.",
                    ),
            )
            .arg(
                Arg::with_name("stations")
                    .multiple(true)
                    .short("s")
                    .long("stations")
                    .takes_value(true)
                    .help("Station identifiers (e.g. kmso, kbtm, kord).")
                    .long_help(
                        "Station identifiers to fetch. Overrides the stations from the \
                         configuration file.",
                    ),
            )
            .after_help(
                "If no stations are provided on the command line then they are read from the \
                 configuration file instead.",
            )
    }

    /// Process an `App` to get the parsed values out of it and the matches object so the
    /// application can continue with further argument parsing.
    pub fn matches(app: App<'a, 'b>) -> Result<(Self, ArgMatches<'a>), MetarFetcherErr> {
        let matches = app.get_matches();

        let config = matches.value_of("config").map(PathBuf::from);

        let stations: Vec<String> = matches
            .values_of("stations")
            .into_iter()
            .flat_map(|station_iter| station_iter.map(|arg_val| arg_val.to_owned()))
            .collect();

        Ok((CmdLineArgs { config, stations }, matches))
    }

    /// Get the explicit config file path, if one was provided.
    pub fn config(&self) -> Option<&Path> {
        self.config.as_deref()
    }

    /// Get the station override.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }
}
