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

//! the crew API server. Config is optional - without one the default bind address and
//! LLM endpoint are used; API keys always come from the environment

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use gsi_common::{define_cli, check_cli, config::load_config};
use gsi_crew::server::{CrewServer,CrewServerConfig};

define_cli! { ARGS [about="crew API server"] =
    config: Option<String> [help="pathname of CrewServerConfig RON file", long]
}

#[tokio::main]
async fn main ()->Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    let config: CrewServerConfig = match &ARGS.config {
        Some(spec) => load_config(spec)?,
        None => CrewServerConfig::default()
    };

    let server = Arc::new( CrewServer::new( config));
    server.serve().await?;
    Ok(())
}
