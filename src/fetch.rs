//! Retrieval of the latest METAR reports from the ADDS data server.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::errors::MetarFetcherErr;
use crate::metar::{self, MetarResponse};

// Fixed query: the most recent METAR per station within the last 1.25 hours, as XML.
static HOST_URL: &str = "https://aviationweather.gov/adds/dataserver_current/httpparam?\
                         dataSource=metars&requestType=retrieve&format=xml&\
                         mostRecentForEachStation=constraint&hoursBeforeNow=1.25&stationString=";

// Bounds the whole request, connect through body read.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the client used for every fetch.
pub fn build_client() -> Result<Client, MetarFetcherErr> {
    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    Ok(client)
}

/// Produce the data server URL for a resolved station query string.
pub fn format_metar_url(station_query: &str) -> String {
    format!("{}{}", HOST_URL, station_query)
}

/// Fetch the latest METAR for each station encoded in the URL.
///
/// Any transport failure, non success status, or undecodable body fails the whole
/// batch. The caller decides whether that is fatal.
pub fn fetch_metars(client: &Client, url: &str) -> Result<MetarResponse, MetarFetcherErr> {
    let response = client.get(url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(MetarFetcherErr::UnexpectedStatus(status));
    }
    log::info!("fetched METAR data from {}", url);

    let body = response.text()?;

    metar::parse_metars(&body)
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
