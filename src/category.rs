//! Flight categories assigned to METAR observations.

use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// ANSI sequence that returns the terminal to its default color.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Hex color used in i3bar output when no category was assigned.
pub const DEFAULT_HEX_COLOR: &str = "#FFFFFF";

/// Coarse ceiling and visibility classification reported with a METAR.
///
/// The data server reports these as upper case strings and matching is case
/// sensitive, anything unrecognized is treated as having no category.
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr, EnumIter)]
#[allow(missing_docs)]
pub enum FlightCategory {
    VFR,  // Visual flight rules
    MVFR, // Marginal visual flight rules
    IFR,  // Instrument flight rules
    LIFR, // Low instrument flight rules
}

impl FlightCategory {
    /// Get a static string representation.
    pub fn as_static_str(self) -> &'static str {
        self.into()
    }

    /// ANSI color sequence used for this category in plain terminal output.
    pub fn ansi_color(self) -> &'static str {
        match self {
            FlightCategory::VFR => "\x1b[32m",
            FlightCategory::MVFR => "\x1b[34m",
            FlightCategory::IFR => "\x1b[31m",
            FlightCategory::LIFR => "\x1b[35m",
        }
    }

    /// Hex color used for this category in i3bar JSON output.
    pub fn hex_color(self) -> &'static str {
        match self {
            FlightCategory::VFR => "#008000",
            FlightCategory::MVFR => "#0000FF",
            FlightCategory::IFR => "#FF0000",
            FlightCategory::LIFR => "#FF00FF",
        }
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
