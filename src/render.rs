//! Rendering of observations into output lines.
//!
//! Everything here is pure, the binary decides where the strings go. Plain output
//! is one ANSI colored, newline terminated line per station. JSON output is one
//! i3bar fragment per station with no separator in between, which is what the
//! status bar protocol expects from a command producing a stream of blocks.

use serde_derive::Serialize;

use crate::category::{FlightCategory, ANSI_RESET, DEFAULT_HEX_COLOR};
use crate::config::DisplayConfig;
use crate::errors::MetarFetcherErr;
use crate::metar::Metar;

// serde_json keeps struct field order, so full_text stays first in the fragment.
#[derive(Serialize)]
struct I3Block<'a> {
    full_text: &'a str,
    color: &'a str,
}

/// Render one observation according to the display options.
pub fn render_metar(metar: &Metar, display: &DisplayConfig) -> Result<String, MetarFetcherErr> {
    let body = assemble_fields(metar, display);

    if display.i3json {
        let color = metar
            .category()
            .map(FlightCategory::hex_color)
            .unwrap_or(DEFAULT_HEX_COLOR);

        let block = I3Block {
            full_text: &body,
            color,
        };

        Ok(serde_json::to_string(&block)?)
    } else {
        match metar.category() {
            Some(category) => Ok(format!(
                "{}{}{}\n",
                category.ansi_color(),
                body,
                ANSI_RESET
            )),
            None => Ok(format!("{}\n", body)),
        }
    }
}

/// Render a whole batch in the order the data server returned it.
pub fn render_batch(metars: &[Metar], display: &DisplayConfig) -> Result<String, MetarFetcherErr> {
    let mut output = String::new();

    for metar in metars {
        output.push_str(&render_metar(metar, display)?);
    }

    Ok(output)
}

// Assemble the bullet separated fields: station, winds, category, ceiling, time.
fn assemble_fields(metar: &Metar, display: &DisplayConfig) -> String {
    let mut output = metar.station_id.clone();

    if display.winds {
        output.push_str(&format!(
            "•{:03}{}",
            metar.wind_dir_degrees, metar.wind_speed_kt
        ));
        if metar.wind_gust_kt > 0 {
            output.push_str(&format!("G{}", metar.wind_gust_kt));
        }
        output.push_str("KT");
    }

    if display.category {
        output.push('•');
        output.push_str(metar.flight_category.as_deref().unwrap_or(""));
    }

    if display.ceilings {
        match metar.ceiling_ft_agl() {
            Some(base_ft) => output.push_str(&format!("•{}", base_ft)),
            None => output.push_str("•CLR"),
        }
    }

    output.push_str(&format!("•{}", metar.observation_time.format("%d%H%MZ")));

    output
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
