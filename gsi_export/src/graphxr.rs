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

/// GraphXR/Kineviz node-edge JSON export: flat property bags, no schema enforcement on
/// the GraphXR side. Station nodes carry their derived score columns; orbit-class bucket
/// nodes summarize the satellite catalog census as demand context

use std::path::Path;
use serde::Serialize;
use serde_json;

use gsi_satcat::OrbitCensus;
use gsi_stations::competition::CompetitionEdge;
use gsi_stations::scoring::ScoredStation;

use crate::errors::Result;

#[derive(Debug,Serialize)]
pub struct GraphNode {
    pub id: String,
    pub category: &'static str,
    pub properties: serde_json::Map<String,serde_json::Value>,
}

#[derive(Debug,Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub relation: &'static str,
    pub properties: serde_json::Map<String,serde_json::Value>,
}

#[derive(Debug,Default,Serialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

fn props_of<T: Serialize> (v: &T)->serde_json::Map<String,serde_json::Value> {
    match serde_json::to_value(v) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => serde_json::Map::new()
    }
}

/// build the station/competition graph. Edge endpoints reference station node ids; the
/// edge list invariant (a < b, no self loops) carries over from gsi_stations
pub fn station_graph (scored: &[ScoredStation], edges: &[CompetitionEdge], census: Option<&OrbitCensus>)->Graph {
    let mut graph = Graph::default();

    for ss in scored {
        graph.nodes.push( GraphNode {
            id: ss.station.name.clone(),
            category: "GroundStation",
            properties: props_of(ss),
        });
    }

    for e in edges {
        let mut properties = serde_json::Map::new();
        properties.insert( "distance_km".to_string(), serde_json::json!(e.distance_km));

        graph.edges.push( GraphEdge {
            source: scored[e.a].station.name.clone(),
            target: scored[e.b].station.name.clone(),
            relation: "competes_with",
            properties,
        });
    }

    if let Some(census) = census {
        for (class,n) in &census.by_class {
            let mut properties = serde_json::Map::new();
            properties.insert( "objects".to_string(), serde_json::json!(n));

            graph.nodes.push( GraphNode {
                id: format!("orbit:{:?}", class),
                category: "OrbitClass",
                properties,
            });
        }
    }

    graph
}

pub fn write_graph (path: impl AsRef<Path>, graph: &Graph)->Result<()> {
    let json = serde_json::to_string_pretty(graph)?;
    std::fs::write( path.as_ref(), json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsi_common::geo::GeoPoint;
    use gsi_stations::{GroundStation, competition::competition_edges, scoring::score_stations};

    fn test_stations ()->Vec<GroundStation> {
        ["A","B","C"].iter().enumerate().map( |(i,name)| GroundStation {
            name: name.to_string(), operator: "op".to_string(), country: "Norway".to_string(),
            pos: GeoPoint::from_lon_lat_degrees( 15.0 + i as f64 * 0.5, 78.0),
            antenna_m: 9.0, bands: "X".to_string(), gt_dbk: None, eirp_dbw: None,
        }).collect()
    }

    #[test]
    fn test_graph_structure () {
        let stations = test_stations();
        let scored = score_stations( &stations, 500.0);
        let edges = competition_edges( &stations, 500.0);

        let graph = station_graph( &scored, &edges, None);
        assert_eq!( graph.nodes.len(), 3);
        assert_eq!( graph.edges.len(), 3); // all within 500 km

        for e in &graph.edges {
            assert_ne!( e.source, e.target, "self loop in graph export");
            assert_eq!( e.relation, "competes_with");
        }
    }

    #[test]
    fn test_node_properties_flat () {
        let stations = test_stations();
        let scored = score_stations( &stations, 500.0);
        let graph = station_graph( &scored, &[], None);

        let props = &graph.nodes[0].properties;
        assert!( props.get("investment").unwrap().is_number());
        assert!( props.get("lon").unwrap().is_number()); // GeoPoint flattened, not nested
    }
}
