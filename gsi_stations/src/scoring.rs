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

/// the illustrative investment scoring heuristics. All sub-scores are static business
/// configuration (lookup tables keyed by country or antenna size), combined with fixed
/// weights. Scores are in 0..=100 and explicitly NOT investment advice - the weights and
/// tables exist to drive the demo visualizations

use serde::{Serialize,Deserialize};
use strum::{Display,EnumIter,IntoEnumIterator};

use crate::GroundStation;
use crate::competition::competition_score;

//--- fixed sub-score weights

pub const W_MARKET: f64 = 0.40;
pub const W_COMPETITION: f64 = 0.30;
pub const W_INFRASTRUCTURE: f64 = 0.15;
pub const W_WEATHER: f64 = 0.15;

pub const DEFAULT_MARKET_SCORE: f64 = 50.0;
pub const DEFAULT_WEATHER_SCORE: f64 = 60.0;

/// market opportunity by country - regulatory climate, teleport demand and fiber reach proxies
pub fn market_score (country: &str)->f64 {
    match country.trim() {
        "United States" | "USA" | "US" => 85.0,
        "Norway"          => 88.0,
        "Sweden"          => 82.0,
        "Singapore"       => 82.0,
        "Luxembourg"      => 80.0,
        "Australia"       => 80.0,
        "Japan"           => 78.0,
        "United Kingdom" | "UK" => 75.0,
        "India"           => 72.0,
        "Germany"         => 70.0,
        "Chile"           => 65.0,
        "Brazil"          => 60.0,
        "South Africa"    => 58.0,
        _ => DEFAULT_MARKET_SCORE
    }
}

/// infrastructure capability by primary antenna aperture bucket
pub fn infrastructure_score (antenna_m: f64)->f64 {
    if      antenna_m >= 13.0 { 90.0 }   // heavy GEO/deep-space capable apertures
    else if antenna_m >=  9.0 { 80.0 }
    else if antenna_m >=  6.0 { 70.0 }
    else if antenna_m >=  3.7 { 60.0 }
    else                      { 45.0 }   // small LEO-only terminals
}

/// weather exposure by country - a coarse rain-climate proxy. The per-band rain fade
/// margins computed by gsi_rain are the physical counterpart; this table only feeds the
/// weighted score
pub fn weather_score (country: &str)->f64 {
    match country.trim() {
        "Norway"          => 85.0,
        "Sweden"          => 85.0,
        "Chile"           => 80.0,
        "Australia"       => 70.0,
        "Germany"         => 70.0,
        "United States" | "USA" | "US" => 65.0,
        "United Kingdom" | "UK" => 60.0,
        "Japan"           => 55.0,
        "Brazil"          => 45.0,
        "India"           => 40.0,
        "Singapore"       => 35.0,  // tropical rain region
        _ => DEFAULT_WEATHER_SCORE
    }
}

/* #region recommendation *****************************************************************************/

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize,Display,EnumIter)]
pub enum Recommendation {
    StrongBuy,
    Buy,
    Hold,
    Avoid
}

impl Recommendation {
    pub fn from_score (score: f64)->Self {
        if      score >= 75.0 { Recommendation::StrongBuy }
        else if score >= 60.0 { Recommendation::Buy }
        else if score >= 45.0 { Recommendation::Hold }
        else                  { Recommendation::Avoid }
    }

    /// display color - every category has one, an unmapped category is a bug
    pub fn color (&self)->&'static str {
        match self {
            Recommendation::StrongBuy => "#2ECC71",
            Recommendation::Buy       => "#82E0AA",
            Recommendation::Hold      => "#F4D03F",
            Recommendation::Avoid     => "#E74C3C",
        }
    }
}

/* #endregion recommendation */

/// the derived per-station columns. Serialized flat so that GeoJSON/CSV/GraphXR property
/// bags stay schema-free
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct StationScores {
    pub market: f64,
    pub competition: f64,
    pub infrastructure: f64,
    pub weather: f64,
    pub investment: f64,
    pub recommendation: Recommendation,
}

pub fn investment_score (market: f64, competition: f64, infrastructure: f64, weather: f64)->f64 {
    let score = W_MARKET*market + W_COMPETITION*competition + W_INFRASTRUCTURE*infrastructure + W_WEATHER*weather;
    score.clamp( 0.0, 100.0)
}

/// a station together with its derived score columns
#[derive(Debug,Clone,Serialize)]
pub struct ScoredStation {
    #[serde(flatten)]
    pub station: GroundStation,

    #[serde(flatten)]
    pub scores: StationScores,
}

/// score all stations. `radius_km` is the competition radius (500 km default, 300 km for
/// the dense-market variant)
pub fn score_stations (stations: &[GroundStation], radius_km: f64)->Vec<ScoredStation> {
    let competition = competition_score( stations, radius_km);

    stations.iter().enumerate().map( |(i,station)| {
        let market = market_score( &station.country);
        let infrastructure = infrastructure_score( station.antenna_m);
        let weather = weather_score( &station.country);
        let investment = investment_score( market, competition[i], infrastructure, weather);

        let scores = StationScores {
            market,
            competition: competition[i],
            infrastructure,
            weather,
            investment,
            recommendation: Recommendation::from_score(investment),
        };

        ScoredStation { station: station.clone(), scores }
    }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one () {
        assert!( (W_MARKET + W_COMPETITION + W_INFRASTRUCTURE + W_WEATHER - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_score_range () {
        // extreme corners of the table space stay in 0..=100
        assert!( investment_score( 100.0, 100.0, 100.0, 100.0) <= 100.0);
        assert!( investment_score( 0.0, 0.0, 0.0, 0.0) >= 0.0);
        assert!( investment_score( 88.0, 100.0, 90.0, 85.0) <= 100.0);
    }

    #[test]
    fn test_every_recommendation_has_color () {
        for r in Recommendation::iter() {
            assert!( r.color().starts_with('#'), "no color for {r}");
        }
    }

    #[test]
    fn test_recommendation_buckets () {
        assert_eq!( Recommendation::from_score(80.0), Recommendation::StrongBuy);
        assert_eq!( Recommendation::from_score(75.0), Recommendation::StrongBuy);
        assert_eq!( Recommendation::from_score(74.9), Recommendation::Buy);
        assert_eq!( Recommendation::from_score(59.9), Recommendation::Hold);
        assert_eq!( Recommendation::from_score(10.0), Recommendation::Avoid);
    }

    #[test]
    fn test_unlisted_country_uses_default () {
        assert_eq!( market_score("Atlantis"), DEFAULT_MARKET_SCORE);
        assert_eq!( weather_score("Atlantis"), DEFAULT_WEATHER_SCORE);
    }
}
