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

//! GraphXR/Kineviz graph export: station + competition graph, optionally enriched with
//! orbit-class census nodes from a SATCAT file

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use gsi_common::{define_cli, check_cli, fs::ensure_writable_dir};
use gsi_export::graphxr::{station_graph,write_graph};
use gsi_satcat::{orbit_census,read_satcat_csv};
use gsi_stations::{competition::competition_edges, read_stations_csv, scoring::score_stations};

define_cli! { ARGS [about="GraphXR graph export tool"] =
    stations: String [help="pathname of station catalog CSV"],
    satcat: Option<String> [help="optional pathname of SATCAT CSV for census nodes", long],
    radius_km: f64 [help="competition radius in km", long, default_value="500.0"],
    output_dir: String [help="directory for the generated graph", long, default_value="out"]
}

fn main ()->Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let stations = read_stations_csv( &ARGS.stations)?;
    let scored = score_stations( &stations, ARGS.radius_km);
    let edges = competition_edges( &stations, ARGS.radius_km);

    let census = match &ARGS.satcat {
        Some(path) => Some( orbit_census( &read_satcat_csv(path)?)),
        None => None
    };

    let graph = station_graph( &scored, &edges, census.as_ref());

    ensure_writable_dir( &ARGS.output_dir)?;
    let path = std::path::Path::new( &ARGS.output_dir).join("station_graph.json");
    write_graph( &path, &graph)?;

    println!("wrote {} nodes, {} edges to {}", graph.nodes.len(), graph.edges.len(), path.display());
    Ok(())
}
