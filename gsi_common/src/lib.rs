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

//! common utility modules shared by the GSI data tools. This crate deliberately has no
//! domain semantics - ground station / satellite / rain specific code lives in the
//! respective gsi_* crates

pub mod macros;
pub use macros::*;

pub mod geo;
pub mod datetime;
pub mod fs;
pub mod net;
pub mod json_writer;
pub mod config;
