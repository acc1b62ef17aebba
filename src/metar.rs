//! Parsed METAR observations returned by the ADDS data server.
//!
//! The data server answers with an XML document, one `METAR` element per station.
//! The structs here mirror the parts of that schema this crate consumes, anything
//! else in the response is ignored.

use chrono::{DateTime, Utc};
use serde_derive::Deserialize;

use crate::category::FlightCategory;
use crate::errors::MetarFetcherErr;

/// Top level of the data server response.
#[derive(Clone, Debug, Deserialize)]
pub struct MetarResponse {
    /// The payload of the response.
    #[serde(default)]
    pub data: MetarData,
}

/// The payload element wrapping the individual reports.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MetarData {
    /// Reports in the order the data server returned them.
    #[serde(rename = "METAR", default)]
    pub metars: Vec<Metar>,
}

/// A single METAR observation.
#[derive(Clone, Debug, Deserialize)]
pub struct Metar {
    /// Station identifier, e.g. KMSO.
    pub station_id: String,
    /// Observation time in UTC.
    pub observation_time: DateTime<Utc>,
    /// Raw flight category as reported. Absent when the server could not assign one.
    #[serde(default)]
    pub flight_category: Option<String>,
    /// Wind direction in degrees, 0 for calm or variable winds.
    #[serde(default)]
    pub wind_dir_degrees: i32,
    /// Sustained wind speed in knots.
    #[serde(default)]
    pub wind_speed_kt: u32,
    /// Gust speed in knots, 0 when no gust was reported.
    #[serde(default)]
    pub wind_gust_kt: u32,
    /// Sky condition layers in report order.
    #[serde(rename = "sky_condition", default)]
    pub sky_condition: Vec<SkyCondition>,
}

/// One reported cloud layer.
#[derive(Clone, Debug, Deserialize)]
pub struct SkyCondition {
    /// Cover code, e.g. FEW, SCT, BKN, OVC.
    pub sky_cover: String,
    /// Cloud base in feet above ground level.
    #[serde(default)]
    pub cloud_base_ft_agl: i32,
}

/// Deserialize a raw XML response body from the data server.
pub fn parse_metars(xml: &str) -> Result<MetarResponse, MetarFetcherErr> {
    let response = serde_xml_rs::from_str(xml)?;
    Ok(response)
}

impl Metar {
    /// The flight category assigned to this observation, if it is a known one.
    pub fn category(&self) -> Option<FlightCategory> {
        self.flight_category
            .as_deref()
            .and_then(|raw| raw.parse().ok())
    }

    /// The ceiling in feet AGL, if one can be derived.
    ///
    /// A report with a single layer counts as clear whatever its cover code. With
    /// multiple layers the first BKN or OVC layer is the ceiling.
    pub fn ceiling_ft_agl(&self) -> Option<i32> {
        if self.sky_condition.len() > 1 {
            self.sky_condition
                .iter()
                .find(|sky| sky.sky_cover == "BKN" || sky.sky_cover == "OVC")
                .map(|sky| sky.cloud_base_ft_agl)
        } else {
            None
        }
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
#[cfg(test)]
mod unit {
    use super::*;

    use chrono::TimeZone;

    const SAMPLE_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<response version="1.2">
  <request_index>46859233</request_index>
  <data_source name="metars" />
  <request type="retrieve" />
  <errors />
  <warnings />
  <time_taken_ms>7</time_taken_ms>
  <data num_results="2">
    <METAR>
      <raw_text>KMSO 171530Z 09010KT 10SM FEW012 OVC030 M06/M09 A3021</raw_text>
      <station_id>KMSO</station_id>
      <observation_time>2022-01-17T15:30:00Z</observation_time>
      <latitude>46.92</latitude>
      <longitude>-114.08</longitude>
      <temp_c>-6.0</temp_c>
      <wind_dir_degrees>90</wind_dir_degrees>
      <wind_speed_kt>10</wind_speed_kt>
      <sky_condition sky_cover="FEW" cloud_base_ft_agl="1200" />
      <sky_condition sky_cover="OVC" cloud_base_ft_agl="3000" />
      <flight_category>MVFR</flight_category>
      <metar_type>METAR</metar_type>
    </METAR>
    <METAR>
      <raw_text>KBTM 171535Z 27015G22KT 10SM SKC 00/M04 A3018</raw_text>
      <station_id>KBTM</station_id>
      <observation_time>2022-01-17T15:35:00Z</observation_time>
      <wind_dir_degrees>270</wind_dir_degrees>
      <wind_speed_kt>15</wind_speed_kt>
      <wind_gust_kt>22</wind_gust_kt>
      <sky_condition sky_cover="SKC" />
      <metar_type>METAR</metar_type>
    </METAR>
  </data>
</response>"#;

    const EMPTY_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<response version="1.2">
  <request_index>46859234</request_index>
  <data_source name="metars" />
  <request type="retrieve" />
  <errors />
  <warnings />
  <time_taken_ms>4</time_taken_ms>
  <data num_results="0">
  </data>
</response>"#;

    fn sky(cover: &str, base_ft: i32) -> SkyCondition {
        SkyCondition {
            sky_cover: cover.to_owned(),
            cloud_base_ft_agl: base_ft,
        }
    }

    fn test_metar() -> Metar {
        Metar {
            station_id: "KMSO".to_owned(),
            observation_time: Utc.ymd(2022, 1, 17).and_hms(15, 30, 0),
            flight_category: Some("VFR".to_owned()),
            wind_dir_degrees: 90,
            wind_speed_kt: 10,
            wind_gust_kt: 0,
            sky_condition: vec![],
        }
    }

    #[test]
    fn test_parse_metars_preserves_order() {
        let response = parse_metars(SAMPLE_RESPONSE).unwrap();
        let metars = &response.data.metars;

        assert_eq!(metars.len(), 2);
        assert_eq!(metars[0].station_id, "KMSO");
        assert_eq!(metars[1].station_id, "KBTM");
    }

    #[test]
    fn test_parse_metars_fields() {
        let response = parse_metars(SAMPLE_RESPONSE).unwrap();
        let kmso = &response.data.metars[0];

        assert_eq!(
            kmso.observation_time,
            Utc.ymd(2022, 1, 17).and_hms(15, 30, 0)
        );
        assert_eq!(kmso.flight_category.as_deref(), Some("MVFR"));
        assert_eq!(kmso.category(), Some(FlightCategory::MVFR));
        assert_eq!(kmso.wind_dir_degrees, 90);
        assert_eq!(kmso.wind_speed_kt, 10);
        assert_eq!(kmso.wind_gust_kt, 0);
        assert_eq!(kmso.sky_condition.len(), 2);
        assert_eq!(kmso.sky_condition[0].sky_cover, "FEW");
        assert_eq!(kmso.sky_condition[0].cloud_base_ft_agl, 1200);
    }

    #[test]
    fn test_parse_metars_missing_category() {
        let response = parse_metars(SAMPLE_RESPONSE).unwrap();
        let kbtm = &response.data.metars[1];

        assert_eq!(kbtm.flight_category, None);
        assert_eq!(kbtm.category(), None);
        assert_eq!(kbtm.wind_gust_kt, 22);
    }

    #[test]
    fn test_parse_metars_empty_result() {
        let response = parse_metars(EMPTY_RESPONSE).unwrap();

        assert!(response.data.metars.is_empty());
    }

    #[test]
    fn test_parse_metars_malformed() {
        match parse_metars("this is not xml at all") {
            Err(MetarFetcherErr::Xml(_)) => {}
            res => panic!("unexpected result: {:?}", res),
        }
    }

    #[test]
    fn test_category_unrecognized_is_none() {
        let mut metar = test_metar();

        metar.flight_category = Some("SVFR".to_owned());
        assert_eq!(metar.category(), None);

        metar.flight_category = Some("".to_owned());
        assert_eq!(metar.category(), None);

        metar.flight_category = None;
        assert_eq!(metar.category(), None);
    }

    #[test]
    fn test_ceiling_single_layer_is_clear() {
        let mut metar = test_metar();

        // A lone layer never counts as a ceiling, not even broken or overcast.
        metar.sky_condition = vec![sky("BKN", 2500)];
        assert_eq!(metar.ceiling_ft_agl(), None);
    }

    #[test]
    fn test_ceiling_first_qualifying_layer() {
        let mut metar = test_metar();

        metar.sky_condition = vec![sky("FEW", 1200), sky("OVC", 3000)];
        assert_eq!(metar.ceiling_ft_agl(), Some(3000));

        metar.sky_condition = vec![sky("FEW", 1200), sky("BKN", 2500), sky("OVC", 3000)];
        assert_eq!(metar.ceiling_ft_agl(), Some(2500));
    }

    #[test]
    fn test_ceiling_no_qualifying_layer() {
        let mut metar = test_metar();

        metar.sky_condition = vec![sky("FEW", 1200), sky("FEW", 4000)];
        assert_eq!(metar.ceiling_ft_agl(), None);

        metar.sky_condition = vec![];
        assert_eq!(metar.ceiling_ft_agl(), None);
    }
}
