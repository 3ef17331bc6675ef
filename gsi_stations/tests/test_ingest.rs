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

use gsi_stations::{read_stations_csv, scoring::score_stations};

const CATALOG: &str = "\
name,operator,country,lat,lon,antenna_m,bands
SvalSat,KSAT,Norway,78.23,15.39,13.0,S;X;Ka
TrollSat,KSAT,Norway,-72.01,2.54,7.3,S;X
Bad Row,NoOp,Nowhere,999.0,0.0,9.0,X
,NoName,Nowhere,10.0,10.0,9.0,X
Punta Arenas,SSC,Chile,-52.94,-70.85,7.3,S;X
";

fn write_catalog ()->std::path::PathBuf {
    let path = std::env::temp_dir().join("gsi_test_stations.csv");
    std::fs::write( &path, CATALOG).unwrap();
    path
}

#[test]
fn test_bad_rows_skipped () {
    let stations = read_stations_csv( write_catalog()).unwrap();
    // invalid latitude and missing name rows are dropped, the file still loads
    assert_eq!( stations.len(), 3);
    assert!( stations.iter().all( |s| !s.name.is_empty()));
}

#[test]
fn test_scored_catalog_in_range () {
    let stations = read_stations_csv( write_catalog()).unwrap();
    let scored = score_stations( &stations, 500.0);

    for ss in &scored {
        println!("{:20} {:5.1} {:?}", ss.station.name, ss.scores.investment, ss.scores.recommendation);
        assert!( ss.scores.investment >= 0.0 && ss.scores.investment <= 100.0);
        assert!( ss.scores.market >= 0.0 && ss.scores.market <= 100.0);
        assert!( ss.scores.competition >= 0.0 && ss.scores.competition <= 100.0);
    }
}

#[test]
fn test_band_support () {
    let stations = read_stations_csv( write_catalog()).unwrap();
    let svalsat = stations.iter().find( |s| s.name == "SvalSat").unwrap();
    assert!( svalsat.supports_band("ka"));
    assert!( !svalsat.supports_band("Q"));
}
