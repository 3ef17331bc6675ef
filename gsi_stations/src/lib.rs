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

//! ground station records and the illustrative investment heuristics computed over them.
//! Station lists come from commercial operator catalogs (flat CSV); every derived column
//! is a row-wise formula or lookup table - there is no cross-record state beyond the
//! pairwise competition scan in [`competition`]

use std::path::Path;
use serde::{Serialize,Deserialize};
use tracing::warn;

use gsi_common::geo::GeoPoint;

pub mod errors;
use errors::{GsiStationError,Result,record_error};

pub mod scoring;
pub mod competition;

/// a commercial ground station site as listed in operator location catalogs
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct GroundStation {
    pub name: String,
    pub operator: String,
    pub country: String,

    #[serde(flatten)]
    pub pos: GeoPoint,

    /// primary antenna aperture in meters
    pub antenna_m: f64,

    /// supported frequency bands, e.g. "S;X;Ka"
    #[serde(default)]
    pub bands: String,

    /// gain-to-noise-temperature figure, if published
    #[serde(default)]
    pub gt_dbk: Option<f64>,

    /// effective isotropic radiated power, if published
    #[serde(default)]
    pub eirp_dbw: Option<f64>,
}

impl GroundStation {
    pub fn supports_band (&self, band: &str)->bool {
        self.bands.split(';').any( |b| b.trim().eq_ignore_ascii_case(band))
    }
}

/// raw CSV row - separate from GroundStation since operator lists use varying lat/lon headers
/// and we want per-row validation before constructing the record
#[derive(Debug,Deserialize)]
struct StationRow {
    name: String,
    operator: String,
    country: String,

    #[serde(alias="latitude")]
    lat: f64,
    #[serde(alias="longitude")]
    lon: f64,

    #[serde(alias="antenna_size_m", alias="antenna_diameter_m")]
    antenna_m: f64,

    #[serde(default)]
    bands: String,

    #[serde(default)]
    gt_dbk: Option<f64>,
    #[serde(default)]
    eirp_dbw: Option<f64>,
}

impl StationRow {
    fn into_station (self)->Result<GroundStation> {
        if self.name.trim().is_empty() {
            return Err( record_error!("station without name (operator {})", self.operator))
        }
        if self.lat < -90.0 || self.lat > 90.0 {
            return Err( record_error!("station {} has invalid latitude {}", self.name, self.lat))
        }
        if self.antenna_m <= 0.0 {
            return Err( record_error!("station {} has invalid antenna size {}", self.name, self.antenna_m))
        }

        Ok( GroundStation {
            name: self.name,
            operator: self.operator,
            country: self.country,
            pos: GeoPoint::from_lon_lat_degrees( self.lon, self.lat),
            antenna_m: self.antenna_m,
            bands: self.bands,
            gt_dbk: self.gt_dbk,
            eirp_dbw: self.eirp_dbw,
        })
    }
}

/// read a ground station catalog CSV. Per-row failures are logged and skipped - a bad
/// operator row never fails the whole file. Only an unreadable file is an error
pub fn read_stations_csv (path: impl AsRef<Path>)->Result<Vec<GroundStation>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim( csv::Trim::All)
        .flexible( true)
        .from_path( path.as_ref())?;

    let mut stations: Vec<GroundStation> = Vec::new();
    for (i,rec) in reader.deserialize::<StationRow>().enumerate() {
        match rec.map_err( GsiStationError::from).and_then( |row| row.into_station()) {
            Ok(station) => stations.push(station),
            Err(e) => warn!("skipping station row {}: {}", i+1, e)
        }
    }

    Ok(stations)
}
