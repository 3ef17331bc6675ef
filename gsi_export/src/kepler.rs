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

/// Kepler.gl config generator. The schema is fixed by Kepler (version tag plus a deeply
/// nested visState), with layer entries that depend on which datasets are exported -
/// exactly the conditional nesting JsonWriter is for

use std::path::Path;

use gsi_common::json_writer::{JsonWriter,NumFormat};
use gsi_stations::scoring::Recommendation;
use strum::IntoEnumIterator;

use crate::errors::Result;

pub const STATION_DATASET_ID: &str = "gsi_stations";
pub const EDGE_DATASET_ID: &str = "gsi_competition";

/// Kepler.gl map-config JSON for the station artifact. `with_edges` adds the arc layer
/// for the competition dataset
pub fn kepler_config (with_edges: bool)->String {
    let mut w = JsonWriter::with_capacity(4096);

    w.write_object( |w| {
        w.write_field( "version", "v1");
        w.write_object_field( "config", |w| {
            w.write_object_field( "visState", |w| {
                w.write_array_field( "layers", |w| {
                    write_point_layer(w);
                    if with_edges {
                        write_arc_layer(w);
                    }
                });
                w.write_object_field( "interactionConfig", |w| {
                    w.write_object_field( "tooltip", |w| {
                        w.write_field( "enabled", true);
                        w.write_object_field( "fieldsToShow", |w| {
                            w.write_array_field( STATION_DATASET_ID, |w| {
                                for field in ["name","operator","country","investment_score","recommendation"] {
                                    w.write_value(field);
                                }
                            });
                        });
                    });
                });
            });
            w.write_object_field( "mapState", |w| {
                w.write_f64_field( "latitude", 30.0, NumFormat::Fp1);
                w.write_f64_field( "longitude", 0.0, NumFormat::Fp1);
                w.write_f64_field( "zoom", 1.5, NumFormat::Fp1);
            });
        });
    });

    w.to_string()
}

fn write_point_layer (w: &mut JsonWriter) {
    w.write_object( |w| {
        w.write_field( "id", "station-points");
        w.write_field( "type", "point");
        w.write_object_field( "config", |w| {
            w.write_field( "dataId", STATION_DATASET_ID);
            w.write_field( "label", "ground stations");
            w.write_object_field( "columns", |w| {
                w.write_field( "lat", "lat");
                w.write_field( "lng", "lon");
            });
            w.write_object_field( "visConfig", |w| {
                w.write_f64_field( "radius", 10.0, NumFormat::Fp1);
                w.write_object_field( "colorRange", |w| {
                    w.write_field( "name", "recommendation");
                    w.write_array_field( "colors", |w| {
                        // one entry per recommendation category, same order as the legend
                        for r in Recommendation::iter() {
                            w.write_value( r.color());
                        }
                    });
                });
            });
        });
        w.write_object_field( "visualChannels", |w| {
            w.write_object_field( "colorField", |w| {
                w.write_field( "name", "recommendation");
                w.write_field( "type", "string");
            });
            w.write_object_field( "sizeField", |w| {
                w.write_field( "name", "antenna_m");
                w.write_field( "type", "real");
            });
        });
    });
}

fn write_arc_layer (w: &mut JsonWriter) {
    w.write_object( |w| {
        w.write_field( "id", "competition-arcs");
        w.write_field( "type", "arc");
        w.write_object_field( "config", |w| {
            w.write_field( "dataId", EDGE_DATASET_ID);
            w.write_field( "label", "competing pairs");
            w.write_object_field( "columns", |w| {
                w.write_field( "lat0", "src_lat");
                w.write_field( "lng0", "src_lon");
                w.write_field( "lat1", "dst_lat");
                w.write_field( "lng1", "dst_lon");
            });
            w.write_object_field( "visConfig", |w| {
                w.write_f64_field( "opacity", 0.4, NumFormat::Fp1);
                w.write_f64_field( "thickness", 1.5, NumFormat::Fp1);
            });
        });
    });
}

pub fn write_kepler_config (path: impl AsRef<Path>, with_edges: bool)->Result<()> {
    std::fs::write( path.as_ref(), kepler_config(with_edges))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_is_valid_json () {
        let s = kepler_config(true);
        let v: serde_json::Value = serde_json::from_str(&s).unwrap();

        assert_eq!( v["version"], "v1");
        let layers = v["config"]["visState"]["layers"].as_array().unwrap();
        assert_eq!( layers.len(), 2);
        assert_eq!( layers[0]["type"], "point");
        assert_eq!( layers[1]["type"], "arc");
    }

    #[test]
    fn test_no_edge_layer_without_edges () {
        let s = kepler_config(false);
        let v: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!( v["config"]["visState"]["layers"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_color_range_covers_all_categories () {
        let s = kepler_config(false);
        let v: serde_json::Value = serde_json::from_str(&s).unwrap();
        let colors = v["config"]["visState"]["layers"][0]["config"]["visConfig"]["colorRange"]["colors"].as_array().unwrap();
        assert_eq!( colors.len(), 4);
    }
}
