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

//! batch transform: station catalog CSV in, scored GeoJSON + CSV intermediates out

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use gsi_common::{define_cli, check_cli, fs::ensure_writable_dir};
use gsi_export::{csv_out, geojson_out};
use gsi_stations::{competition::competition_edges, read_stations_csv, scoring::score_stations};

define_cli! { ARGS [about="station scoring/export tool"] =
    stations: String [help="pathname of station catalog CSV"],
    radius_km: f64 [help="competition radius in km", long, default_value="500.0"],
    output_dir: String [help="directory for generated artifacts", long, default_value="out"]
}

fn main ()->Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let stations = read_stations_csv( &ARGS.stations)?;
    println!("read {} stations from {}", stations.len(), ARGS.stations);

    let scored = score_stations( &stations, ARGS.radius_km);
    let edges = competition_edges( &stations, ARGS.radius_km);

    ensure_writable_dir( &ARGS.output_dir)?;
    let dir = std::path::Path::new( &ARGS.output_dir);

    let fc = geojson_out::stations_to_geojson( &scored);
    geojson_out::validate_point_collection( &fc)?;
    geojson_out::write_geojson( dir.join("stations.geojson"), &fc)?;

    csv_out::write_scored_stations_csv( dir.join("stations_scored.csv"), &scored)?;
    csv_out::write_edges_csv( dir.join("competition_edges.csv"), &scored, &edges)?;

    println!("wrote {} features, {} competition edges to {}", scored.len(), edges.len(), ARGS.output_dir);
    Ok(())
}
