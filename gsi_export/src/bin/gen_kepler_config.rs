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

//! static Kepler.gl config generator for the station artifacts

use anyhow::Result;

use gsi_common::{define_cli, check_cli, fs::ensure_writable_dir};
use gsi_export::kepler::write_kepler_config;

define_cli! { ARGS [about="Kepler.gl config generator"] =
    with_edges: bool [help="include the competition arc layer", long],
    output_dir: String [help="directory for the generated config", long, default_value="out"]
}

fn main ()->Result<()> {
    check_cli!(ARGS);

    ensure_writable_dir( &ARGS.output_dir)?;
    let path = std::path::Path::new( &ARGS.output_dir).join("kepler_config.json");

    write_kepler_config( &path, ARGS.with_edges)?;
    println!("wrote {}", path.display());
    Ok(())
}
