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

//! rain fade estimates for ground station links: ITU-R P.838-3 specific attenuation
//! combined with a P.618-style effective slant path and availability scaling. Closed-form
//! per-row arithmetic throughout; out-of-range inputs fall back to the legacy formula
//! instead of failing the row

use std::path::Path;
use serde::{Serialize,Deserialize};
use strum::{Display,EnumIter};
use tracing::warn;

use gsi_common::geo::{closest_point_idx,GeoPoint};

pub mod errors;
use errors::Result;

pub mod p838;
pub mod sample;

/// minimum elevation angle for the P.618-style path model; below this the legacy formula is used
pub const MIN_ELEVATION_DEG: f64 = 5.0;

/// default GEO link elevation used when a station has no look-angle column
pub const DEFAULT_ELEVATION_DEG: f64 = 35.0;

/// mean annual 0°C isotherm rain height in km (flat default; fine for scoring heuristics)
pub const RAIN_HEIGHT_KM: f64 = 5.0;

/* #region bands **************************************************************************************/

/// the frequency bands the station catalogs list. Downlink frequencies are the
/// conservative band centers used in the original link-budget sheets
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize,Display,EnumIter)]
pub enum Band {
    C,
    X,
    Ku,
    Ka,
    Q
}

impl Band {
    pub fn downlink_ghz (&self)->f64 {
        match self {
            Band::C  =>  4.0,
            Band::X  =>  8.0,
            Band::Ku => 12.0,
            Band::Ka => 20.0,
            Band::Q  => 40.0,
        }
    }

    pub fn uplink_ghz (&self)->f64 {
        match self {
            Band::C  =>  6.0,
            Band::X  =>  8.0,
            Band::Ku => 14.0,
            Band::Ka => 30.0,
            Band::Q  => 50.0,
        }
    }

    /// nominal clear-sky link margin in dB the fade eats into
    pub fn nominal_margin_db (&self)->f64 {
        match self {
            Band::C  =>  4.0,
            Band::X  =>  6.0,
            Band::Ku =>  8.0,
            Band::Ka => 12.0,
            Band::Q  => 16.0,
        }
    }
}

/* #endregion bands */

/// one rain-rate grid cell: position and the R0.01 exceedance rate (mm/h exceeded for
/// 0.01% of an average year). Plain lon/lat columns so the grid CSV maps 1:1
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct RainRate {
    #[serde(alias="longitude")]
    pub lon: f64,
    #[serde(alias="latitude")]
    pub lat: f64,

    #[serde(alias="r001", alias="rain_rate_mm_h")]
    pub annual_p001_mm_h: f64,
}

impl RainRate {
    pub fn pos (&self)->GeoPoint { GeoPoint::from_lon_lat_degrees( self.lon, self.lat) }
}

/// the derived fade columns for one station/band/availability combination
#[derive(Debug,Clone,Serialize)]
pub struct FadeEstimate {
    pub band: Band,
    pub availability_pct: f64,
    pub specific_db_km: f64,
    pub path_db: f64,
    pub margin_db: f64,
}

/* #region path model *********************************************************************************/

/// legacy closed-form fallback, kept from the original link-budget sheets. Used whenever
/// the P.618-style model cannot be applied (frequency outside the P.838 table, elevation
/// under the cutoff)
pub fn fallback_attenuation (freq_ghz: f64, rain_rate_mm_h: f64)->f64 {
    0.0045 * freq_ghz.powf(1.45) * rain_rate_mm_h.max(0.0).powf(0.62)
}

/// P.618-style path attenuation in dB for the 0.01% exceedance rain rate, scaled to the
/// requested availability percentage (e.g. 99.9, 99.99)
pub fn path_attenuation (freq_ghz: f64, elevation_deg: f64, rain_rate_mm_h: f64, availability_pct: f64)->f64 {
    if elevation_deg < MIN_ELEVATION_DEG {
        return fallback_attenuation( freq_ghz, rain_rate_mm_h)
    }

    let gamma = match p838::specific_attenuation( freq_ghz, rain_rate_mm_h) {
        Some(g) => g,
        None => return fallback_attenuation( freq_ghz, rain_rate_mm_h)
    };
    if gamma == 0.0 { return 0.0 }

    let el = elevation_deg.to_radians();
    let slant_km = RAIN_HEIGHT_KM / el.sin();          // sea-level station
    let horiz_km = slant_km * el.cos();

    // horizontal reduction factor for the 0.01% exceedance path. The rate in the
    // exponent is capped at 100 mm/h per P.618, which also keeps the total monotonic
    // for the extreme rain zones (zone P grids carry R0.01 = 145 mm/h)
    let l0 = 35.0 * (-0.015 * rain_rate_mm_h.min(100.0)).exp();
    let r001 = 1.0 / (1.0 + horiz_km / l0);

    let a001 = gamma * slant_km * r001;

    // scale from 0.01% exceedance to the requested availability (P.618 eq. for p < 1%)
    let p = (100.0 - availability_pct).clamp( 0.001, 1.0);
    let scale = 0.12 * p.powf( -(0.546 + 0.043 * p.log10()));

    a001 * scale
}

/* #endregion path model */

/// read a rain-rate grid CSV (lon,lat,r001 columns). Bad rows are logged and skipped
pub fn read_rain_rates_csv (path: impl AsRef<Path>)->Result<Vec<RainRate>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim( csv::Trim::All)
        .flexible( true)
        .from_path( path.as_ref())?;

    let mut rates: Vec<RainRate> = Vec::new();
    for (i,rec) in reader.deserialize::<RainRate>().enumerate() {
        match rec {
            Ok(rate) if rate.annual_p001_mm_h >= 0.0 => rates.push(rate),
            Ok(rate) => warn!("skipping rain rate row {} with negative rate {}", i+1, rate.annual_p001_mm_h),
            Err(e) => warn!("skipping rain rate row {}: {}", i+1, e)
        }
    }

    Ok(rates)
}

/// fade estimates for one site across bands/availabilities, joined to the nearest
/// rain-rate grid cell. None for an empty grid
pub fn fade_estimates (pos: &GeoPoint, elevation_deg: f64, rates: &[RainRate], bands: &[Band], availabilities: &[f64])->Option<Vec<FadeEstimate>> {
    let cells: Vec<GeoPoint> = rates.iter().map( |r| r.pos()).collect();
    let idx = closest_point_idx( pos, &cells)?;
    let r001 = rates[idx].annual_p001_mm_h;

    let mut estimates: Vec<FadeEstimate> = Vec::with_capacity( bands.len() * availabilities.len());
    for band in bands {
        let f = band.downlink_ghz();
        let specific = p838::specific_attenuation( f, r001).unwrap_or_else( || fallback_attenuation( f, r001));

        for &availability_pct in availabilities {
            let path_db = path_attenuation( f, elevation_deg, r001, availability_pct);
            estimates.push( FadeEstimate {
                band: *band,
                availability_pct,
                specific_db_km: specific,
                path_db,
                margin_db: band.nominal_margin_db() - path_db,
            });
        }
    }

    Some(estimates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_attenuation_monotonic_in_rain () {
        let mut last = 0.0;
        for r in [5.0, 15.0, 42.0, 95.0, 120.0, 145.0] {
            let a = path_attenuation( 20.0, 35.0, r, 99.99);
            assert!( a > last && !a.is_nan(), "attenuation not increasing at R={r}");
            last = a;
        }
    }

    #[test]
    fn test_monotonic_past_reduction_cap () {
        // heaviest ITU rain zones exceed the 100 mm/h reduction-factor cap
        let a120 = path_attenuation( 20.0, 35.0, 120.0, 99.99);
        let a145 = path_attenuation( 20.0, 35.0, 145.0, 99.99);
        assert!( a145 > a120, "attenuation decreasing between 120 and 145 mm/h");
    }

    #[test]
    fn test_higher_availability_costs_more () {
        let a999 = path_attenuation( 20.0, 35.0, 42.0, 99.9);
        let a9999 = path_attenuation( 20.0, 35.0, 42.0, 99.99);
        assert!( a9999 > a999);
    }

    #[test]
    fn test_low_elevation_uses_fallback () {
        let a = path_attenuation( 20.0, 2.0, 42.0, 99.99);
        assert_eq!( a, fallback_attenuation( 20.0, 42.0));
    }

    #[test]
    fn test_out_of_band_uses_fallback () {
        let a = path_attenuation( 75.0, 35.0, 42.0, 99.99);
        assert_eq!( a, fallback_attenuation( 75.0, 42.0));
    }

    #[test]
    fn test_zero_rain_no_fade () {
        assert_eq!( path_attenuation( 20.0, 35.0, 0.0, 99.99), 0.0);
    }

    #[test]
    fn test_fade_estimates_never_nan () {
        let rates = vec![
            RainRate { lon: 103.8, lat: 1.35, annual_p001_mm_h: 95.0 }, // Singapore-class rain
        ];
        let pos = GeoPoint::from_lon_lat_degrees( 103.7, 1.30);

        let estimates = fade_estimates( &pos, DEFAULT_ELEVATION_DEG, &rates, &[Band::C,Band::Ku,Band::Ka], &[99.9,99.99]).unwrap();
        assert_eq!( estimates.len(), 6);
        for e in &estimates {
            assert!( !e.path_db.is_nan() && !e.margin_db.is_nan());
            assert!( e.path_db >= 0.0);
        }
    }

    #[test]
    fn test_empty_grid () {
        let pos = GeoPoint::from_lon_lat_degrees( 0.0, 0.0);
        assert!( fade_estimates( &pos, 35.0, &[], &[Band::Ka], &[99.99]).is_none());
    }
}
