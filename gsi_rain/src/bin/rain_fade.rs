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

//! rain fade table tool: joins a station catalog against a rain-rate grid and prints the
//! per-band fade margins at the standard availability percentiles

use anyhow::Result;
use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;

use gsi_common::{define_cli, check_cli};
use gsi_rain::{fade_estimates, read_rain_rates_csv, Band, DEFAULT_ELEVATION_DEG};
use gsi_stations::read_stations_csv;

define_cli! { ARGS [about="rain fade margin tool"] =
    stations: String [help="pathname of station catalog CSV"],
    rain_rates: String [help="pathname of rain rate grid CSV"]
}

const AVAILABILITIES: &[f64] = &[99.9, 99.99];

fn main ()->Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let stations = read_stations_csv( &ARGS.stations)?;
    let rates = read_rain_rates_csv( &ARGS.rain_rates)?;
    let bands: Vec<Band> = Band::iter().collect();

    for station in &stations {
        println!("\n{} ({}):", station.name, station.country);
        if let Some(estimates) = fade_estimates( &station.pos, DEFAULT_ELEVATION_DEG, &rates, &bands, AVAILABILITIES) {
            for e in &estimates {
                println!("  {:2} @ {:5.2}%: fade {:6.2} dB  margin {:6.2} dB", e.band.to_string(), e.availability_pct, e.path_db, e.margin_db);
            }
        }
    }

    Ok(())
}
