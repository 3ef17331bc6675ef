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

/// GeoJSON FeatureCollection output for the scored station catalog. Every feature is a
/// Point with a two-element [lon,lat] coordinate array and a non-null flat property bag -
/// the contract the Kepler.gl/MapLibre demos rely on

use std::path::Path;
use geojson::{Feature,FeatureCollection,GeoJson,Geometry,JsonObject,Value};
use serde_json::{json,Map,Value as JsonValue};

use gsi_stations::scoring::ScoredStation;
use crate::errors::{artifact_error,GsiExportError,Result};

fn station_properties (ss: &ScoredStation)->JsonObject {
    let mut props = JsonObject::new();
    let station = &ss.station;
    let scores = &ss.scores;

    props.insert( "name".to_string(), json!(station.name));
    props.insert( "operator".to_string(), json!(station.operator));
    props.insert( "country".to_string(), json!(station.country));
    props.insert( "antenna_m".to_string(), json!(station.antenna_m));
    props.insert( "bands".to_string(), json!(station.bands));

    props.insert( "market_score".to_string(), json!(scores.market));
    props.insert( "competition_score".to_string(), json!(scores.competition));
    props.insert( "infrastructure_score".to_string(), json!(scores.infrastructure));
    props.insert( "weather_score".to_string(), json!(scores.weather));
    props.insert( "investment_score".to_string(), json!(scores.investment));
    props.insert( "recommendation".to_string(), json!(scores.recommendation.to_string()));
    props.insert( "color".to_string(), json!(scores.recommendation.color()));

    // optional figures only if published - flat bag, no nulls
    if let Some(gt) = station.gt_dbk { props.insert( "gt_dbk".to_string(), json!(gt)); }
    if let Some(eirp) = station.eirp_dbw { props.insert( "eirp_dbw".to_string(), json!(eirp)); }

    props
}

pub fn stations_to_geojson (scored: &[ScoredStation])->FeatureCollection {
    let features: Vec<Feature> = scored.iter().map( |ss| {
        let geometry = Geometry::new( Value::Point( vec![ ss.station.pos.longitude_deg(), ss.station.pos.latitude_deg() ]));
        Feature {
            bbox: None,
            geometry: Some(geometry),
            id: None,
            properties: Some( station_properties(ss)),
            foreign_members: None,
        }
    }).collect();

    FeatureCollection { bbox: None, features, foreign_members: None }
}

pub fn write_geojson (path: impl AsRef<Path>, fc: &FeatureCollection)->Result<()> {
    let geojson = GeoJson::FeatureCollection( fc.clone());
    std::fs::write( path.as_ref(), geojson.to_string())?;
    Ok(())
}

/// check the format contract of a point artifact: geometry type "Point", exactly two
/// coordinates, non-null properties on every feature
pub fn validate_point_collection (fc: &FeatureCollection)->Result<()> {
    for (i,feature) in fc.features.iter().enumerate() {
        let geometry = feature.geometry.as_ref()
            .ok_or_else( || artifact_error!("feature {} without geometry", i))?;

        match &geometry.value {
            Value::Point(coords) => {
                if coords.len() != 2 {
                    return Err( artifact_error!("feature {} has {} coordinates", i, coords.len()))
                }
            }
            other => return Err( artifact_error!("feature {} geometry is not a Point", i))
        }

        match &feature.properties {
            Some(props) if !props.is_empty() => {}
            _ => return Err( artifact_error!("feature {} without properties", i))
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsi_common::geo::GeoPoint;
    use gsi_stations::{GroundStation, scoring::score_stations};

    fn test_scored ()->Vec<ScoredStation> {
        let stations = vec![
            GroundStation {
                name: "SvalSat".to_string(), operator: "KSAT".to_string(), country: "Norway".to_string(),
                pos: GeoPoint::from_lon_lat_degrees( 15.39, 78.23),
                antenna_m: 13.0, bands: "S;X;Ka".to_string(), gt_dbk: Some(32.0), eirp_dbw: None,
            },
            GroundStation {
                name: "Punta Arenas".to_string(), operator: "SSC".to_string(), country: "Chile".to_string(),
                pos: GeoPoint::from_lon_lat_degrees( -70.85, -52.94),
                antenna_m: 7.3, bands: "S;X".to_string(), gt_dbk: None, eirp_dbw: None,
            },
        ];
        score_stations( &stations, 500.0)
    }

    #[test]
    fn test_geojson_contract () {
        let fc = stations_to_geojson( &test_scored());
        assert_eq!( fc.features.len(), 2);
        validate_point_collection(&fc).unwrap();
    }

    #[test]
    fn test_geojson_roundtrip_parses () {
        let fc = stations_to_geojson( &test_scored());
        let s = GeoJson::FeatureCollection(fc).to_string();
        let parsed: GeoJson = s.parse().unwrap();
        match parsed {
            GeoJson::FeatureCollection(fc) => {
                let props = fc.features[0].properties.as_ref().unwrap();
                assert!( props.get("investment_score").unwrap().is_number());
                assert!( props.get("color").unwrap().as_str().unwrap().starts_with('#'));
            }
            _ => panic!("not a FeatureCollection")
        }
    }
}
