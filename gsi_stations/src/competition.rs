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

/// competition density over a station list - a single O(n²) pass computing pairwise
/// great-circle distance and tagging pairs under a radius threshold as competing.
/// Station lists are a few hundred rows so no spatial index is warranted

use serde::{Serialize,Deserialize};

use crate::GroundStation;

/// default competition radius in km
pub const COMPETITION_RADIUS_KM: f64 = 500.0;

/// tighter radius used for dense teleport markets (central Europe, CONUS east coast)
pub const DENSE_MARKET_RADIUS_KM: f64 = 300.0;

/// per-neighbor score penalty
const NEIGHBOR_PENALTY: f64 = 12.5;

/// an undirected competition relation between two stations (indices into the scanned list).
/// Invariant: a < b, so there are no self-loops and no duplicate unordered pairs
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct CompetitionEdge {
    pub a: usize,
    pub b: usize,
    pub distance_km: f64,
}

/// number of competing neighbors (other stations within `radius_km`) per station
pub fn neighbor_counts (stations: &[GroundStation], radius_km: f64)->Vec<usize> {
    let mut counts = vec![0usize; stations.len()];

    for i in 0..stations.len() {
        for j in i+1..stations.len() {
            let d_km = stations[i].pos.haversine_distance_km( &stations[j].pos);
            if d_km <= radius_km {
                counts[i] += 1;
                counts[j] += 1;
            }
        }
    }
    counts
}

/// competition sub-score per station: 100 for an uncontested site, decreasing linearly
/// with the number of neighbors inside the radius, floored at 0
pub fn competition_score (stations: &[GroundStation], radius_km: f64)->Vec<f64> {
    neighbor_counts( stations, radius_km).iter()
        .map( |&n| (100.0 - NEIGHBOR_PENALTY * n as f64).max(0.0))
        .collect()
}

/// competing pairs as an undirected edge list for the graph exports
pub fn competition_edges (stations: &[GroundStation], radius_km: f64)->Vec<CompetitionEdge> {
    let mut edges: Vec<CompetitionEdge> = Vec::new();

    for i in 0..stations.len() {
        for j in i+1..stations.len() {
            let d_km = stations[i].pos.haversine_distance_km( &stations[j].pos);
            if d_km <= radius_km {
                edges.push( CompetitionEdge { a: i, b: j, distance_km: d_km });
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsi_common::geo::GeoPoint;

    fn station (name: &str, lon: f64, lat: f64)->GroundStation {
        GroundStation {
            name: name.to_string(),
            operator: "test".to_string(),
            country: "Norway".to_string(),
            pos: GeoPoint::from_lon_lat_degrees( lon, lat),
            antenna_m: 9.0,
            bands: "X;Ka".to_string(),
            gt_dbk: None,
            eirp_dbw: None,
        }
    }

    fn test_stations ()->Vec<GroundStation> {
        vec![
            station( "A", 15.39, 78.23),   // Svalbard
            station( "B", 15.50, 78.10),   // ~15 km from A
            station( "C", 18.94, 69.66),   // Tromsø, ~960 km from A
        ]
    }

    #[test]
    fn test_neighbor_counts () {
        let stations = test_stations();
        let counts = neighbor_counts( &stations, 500.0);
        assert_eq!( counts, vec![1, 1, 0]);
    }

    #[test]
    fn test_edges_no_self_loop_no_dup () {
        let stations = test_stations();
        let edges = competition_edges( &stations, 1000.0);

        for e in &edges {
            assert!( e.a < e.b, "self loop or unordered pair ({},{})", e.a, e.b);
        }

        let mut pairs: Vec<(usize,usize)> = edges.iter().map( |e| (e.a,e.b)).collect();
        let n = pairs.len();
        pairs.dedup();
        assert_eq!( pairs.len(), n, "duplicate unordered pair");

        assert_eq!( edges.len(), 3); // all three within 1000 km of each other
    }

    #[test]
    fn test_uncontested_station_scores_100 () {
        let stations = test_stations();
        let scores = competition_score( &stations, 500.0);
        assert_eq!( scores[2], 100.0);
        assert!( scores[0] < 100.0);
    }
}
