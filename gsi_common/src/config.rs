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

/// RON config lookup for the GSI tools. Config structs are plain serde Deserialize types;
/// `load_config(spec)` resolves `spec` as (in order) an explicit filesystem path, a filename
/// under $GSI_ROOT/configs, or a filename under ./configs

use std::env;
use std::path::{Path,PathBuf};
use serde::de::DeserializeOwned;

use crate::define_error;
use crate::fs::filepath_contents;

define_error!{ pub GsiConfigError =
    IOError( #[from] std::io::Error ) : "IO error: {0}",
    RonError( #[from] ron::error::SpannedError ) : "RON parse error: {0}",
    NotFoundError( String ) : "no such config: {0}"
}

pub type Result<T> = std::result::Result<T, GsiConfigError>;

pub const CONFIGS: &'static str = "configs";

pub fn find_config_file (spec: &str) -> Option<PathBuf> {
    let path = Path::new(spec);
    if path.is_file() { return Some(path.to_path_buf()) }

    if let Ok(root) = env::var("GSI_ROOT") {
        let path = Path::new(&root).join(CONFIGS).join(spec);
        if path.is_file() { return Some(path) }
    }

    let path = Path::new(CONFIGS).join(spec);
    if path.is_file() { Some(path) } else { None }
}

/// instantiate a config struct from a RON config file
pub fn load_config<C> (spec: &str) -> Result<C> where C: DeserializeOwned {
    match find_config_file(spec) {
        Some(path) => {
            let data = filepath_contents(&path)?;
            Ok( ron::de::from_bytes( data.as_slice())? )
        }
        None => Err( GsiConfigError::NotFoundError( spec.to_string()) )
    }
}
