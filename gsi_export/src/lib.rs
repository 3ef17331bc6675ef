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

//! artifact writers for the third-party visualization tools: GeoJSON FeatureCollections
//! (MapLibre/Kepler.gl data), Kepler.gl config JSON, GraphXR/Kineviz node-edge JSON and
//! CSV intermediates. All writers take the already-derived records and serialize them
//! unchanged - no scoring logic lives here

pub mod errors;
pub mod geojson_out;
pub mod kepler;
pub mod graphxr;
pub mod csv_out;
