/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “GSI” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

#![allow(unused)]

//! public satellite catalog ingest (CelesTrak SATCAT) and orbit classification.
//! Records are read once, enriched with a derived orbit class and census columns, and
//! serialized unchanged for the rest of their lifetime

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use chrono::{Datelike,NaiveDate};
use regex::Regex;
use serde::{Serialize,Deserialize};
use tracing::warn;

pub mod errors;
use errors::Result;

pub mod sample;

/// sidereal day period of a geostationary orbit, in minutes
pub const GEO_PERIOD_MIN: f64 = 1436.1;

/// relative period tolerance for tagging a catalog object as GEO
pub const GEO_PERIOD_TOLERANCE: f64 = 0.02;

/// apogee below which we tag LEO, in km
pub const LEO_APOGEE_KM: f64 = 2000.0;

/// apogee-perigee spread above which we tag HEO (Molniya/Tundra class), in km
pub const HEO_SPREAD_KM: f64 = 20_000.0;

/// regex to extract TLE lines from celestrak GP responses - we don't need to parse the
/// whole JSON structure since we only need the raw lines
pub static TLE_LINES_RE: LazyLock<Regex> = LazyLock::new(||
    Regex::new( r#""TLE_LINE0": *"(.+?)",\s*"TLE_LINE1": *"(.+?)",\s*"TLE_LINE2": *"(.+?)""#).unwrap()
);

/* #region catalog records ****************************************************************************/

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum OrbitClass {
    LEO,
    MEO,
    GEO,
    HEO,
    Unknown
}

/// one CelesTrak SATCAT row (the columns we use)
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct SatcatRecord {
    #[serde(rename="NORAD_CAT_ID")]
    pub norad_id: u32,

    #[serde(rename="OBJECT_NAME")]
    pub name: String,

    #[serde(rename="OBJECT_ID")]
    pub intl_designator: String,

    #[serde(rename="LAUNCH_DATE", default, deserialize_with="de_opt_date")]
    pub launch_date: Option<NaiveDate>,

    #[serde(rename="PERIOD", default)]
    pub period_min: Option<f64>,

    #[serde(rename="INCLINATION", default)]
    pub inclination_deg: Option<f64>,

    #[serde(rename="APOGEE", default)]
    pub apogee_km: Option<f64>,

    #[serde(rename="PERIGEE", default)]
    pub perigee_km: Option<f64>,

    #[serde(rename="OPS_STATUS_CODE", default)]
    pub status: String,
}

impl SatcatRecord {
    pub fn orbit_class (&self)->OrbitClass {
        classify_orbit( self.period_min, self.apogee_km, self.perigee_km)
    }

    pub fn launch_year (&self)->Option<i32> {
        self.launch_date.map( |d| d.year())
    }

    pub fn is_operational (&self)->bool {
        matches!( self.status.trim(), "+" | "P" | "B" | "S" | "X")
    }
}

// SATCAT leaves the launch date empty for analyst objects and unparseable for some
// pre-1960 entries, hence the lenient explicit handling
fn de_opt_date<'de,D> (deserializer: D)->std::result::Result<Option<NaiveDate>, D::Error>
    where D: serde::Deserializer<'de>
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok( s.as_deref().and_then( gsi_common::datetime::parse_iso_date) )
}

/* #endregion catalog records */

/* #region orbit classification ***********************************************************************/

/// derive the orbit class from period and apogee/perigee:
/// GEO - period within tolerance of the sidereal day and near-circular,
/// LEO - apogee under 2000 km, HEO - large apogee-perigee spread, MEO - the rest.
/// Unknown when the catalog row lacks the fields (decayed or analyst objects)
pub fn classify_orbit (period_min: Option<f64>, apogee_km: Option<f64>, perigee_km: Option<f64>)->OrbitClass {
    let (period, apogee, perigee) = match (period_min, apogee_km, perigee_km) {
        (Some(p), Some(a), Some(pg)) => (p, a, pg),
        _ => return OrbitClass::Unknown
    };

    let spread = apogee - perigee;

    if (period - GEO_PERIOD_MIN).abs() <= GEO_PERIOD_MIN * GEO_PERIOD_TOLERANCE && spread < 1000.0 {
        OrbitClass::GEO
    } else if apogee < LEO_APOGEE_KM {
        OrbitClass::LEO
    } else if spread > HEO_SPREAD_KM {
        OrbitClass::HEO
    } else {
        OrbitClass::MEO
    }
}

/// per-class and per-launch-year object counts - the demand proxy for the market heuristics
#[derive(Debug,Default,Serialize)]
pub struct OrbitCensus {
    pub by_class: HashMap<OrbitClass,usize>,
    pub by_launch_year: HashMap<i32,usize>,
    pub total: usize,
}

pub fn orbit_census (records: &[SatcatRecord])->OrbitCensus {
    let mut census = OrbitCensus::default();

    for rec in records {
        *census.by_class.entry( rec.orbit_class()).or_insert(0) += 1;
        if let Some(year) = rec.launch_year() {
            *census.by_launch_year.entry(year).or_insert(0) += 1;
        }
        census.total += 1;
    }
    census
}

/* #endregion orbit classification */

/* #region TLE fallback *******************************************************************************/

/// extract (line0,line1,line2) triples from a celestrak GP JSON response
pub fn parse_tle_lines (input: &str) -> Vec<(String,String,String)> {
    TLE_LINES_RE.captures_iter(input).map(|caps| {
        ( caps[1].to_string(), caps[2].to_string(), caps[3].to_string() )
    }).collect::<Vec<(String,String,String)>>()
}

/// recover the orbital period from TLE line 2 mean motion (rev/day, columns 53-63)
/// for catalog rows where the SATCAT period column is empty
pub fn period_from_tle_line2 (line2: &str)->Option<f64> {
    if line2.len() < 63 || !line2.starts_with('2') { return None }

    let mean_motion: f64 = line2.get(52..63)?.trim().parse().ok()?;
    if mean_motion > 0.0 {
        Some( 1440.0 / mean_motion )
    } else {
        None
    }
}

/* #endregion TLE fallback */

/// read a SATCAT CSV. Bad rows are logged and skipped, consistent with the station ingest
pub fn read_satcat_csv (path: impl AsRef<Path>)->Result<Vec<SatcatRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim( csv::Trim::All)
        .flexible( true)
        .from_path( path.as_ref())?;

    let mut records: Vec<SatcatRecord> = Vec::new();
    for (i,rec) in reader.deserialize::<SatcatRecord>().enumerate() {
        match rec {
            Ok(record) => records.push(record),
            Err(e) => warn!("skipping SATCAT row {}: {}", i+1, e)
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_geo () {
        assert_eq!( classify_orbit( Some(1436.1), Some(35793.0), Some(35779.0)), OrbitClass::GEO);
        assert_eq!( classify_orbit( Some(1450.0), Some(35900.0), Some(35600.0)), OrbitClass::GEO);
    }

    #[test]
    fn test_classify_leo_meo_heo () {
        assert_eq!( classify_orbit( Some(92.8), Some(420.0), Some(410.0)), OrbitClass::LEO);     // ISS
        assert_eq!( classify_orbit( Some(718.0), Some(20200.0), Some(19100.0)), OrbitClass::MEO); // GPS
        assert_eq!( classify_orbit( Some(717.7), Some(39800.0), Some(600.0)), OrbitClass::HEO);   // Molniya
    }

    #[test]
    fn test_classify_unknown_on_missing_fields () {
        assert_eq!( classify_orbit( None, Some(420.0), Some(410.0)), OrbitClass::Unknown);
        assert_eq!( classify_orbit( Some(92.8), None, None), OrbitClass::Unknown);
    }

    #[test]
    fn test_period_from_tle_line2 () {
        // ISS line 2, mean motion 15.49 rev/day
        let line2 = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.49560532999999";
        let period = period_from_tle_line2(line2).unwrap();
        assert!( (period - 92.9).abs() < 0.5);

        assert_eq!( period_from_tle_line2("1 25544U"), None);
    }

    #[test]
    fn test_parse_tle_lines () {
        let gp = r#"[{"TLE_LINE0": "ISS (ZARYA)", "TLE_LINE1": "1 25544U ...", "TLE_LINE2": "2 25544 ..."}]"#;
        let triples = parse_tle_lines(gp);
        assert_eq!( triples.len(), 1);
        assert_eq!( triples[0].0, "ISS (ZARYA)");
    }
}
