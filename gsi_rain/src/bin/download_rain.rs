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

//! rain-rate grid download tool (NASA Earthdata). Credentials come from the
//! EARTHDATA_USER / EARTHDATA_PASS environment (the .netrc counterparts); download
//! failure falls back to the synthetic sample grid

use anyhow::Result;
use reqwest::Client;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use gsi_common::{define_cli, check_cli, fs::ensure_writable_dir};
use gsi_rain::sample::write_sample_rain_rates;

define_cli! { ARGS [about="rain rate grid download tool"] =
    url: String [help="rain rate grid URL", long, default_value="https://gpm1.gesdisc.eosdis.nasa.gov/data/GPM_L3/rain_rate_grid.csv"],
    output_dir: String [help="directory for the downloaded grid", long, default_value="data"]
}

#[tokio::main]
async fn main ()->Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    ensure_writable_dir( &ARGS.output_dir)?;
    let path = std::path::Path::new( &ARGS.output_dir).join("rain_rates.csv");

    let user = std::env::var("EARTHDATA_USER").ok();
    let pass = std::env::var("EARTHDATA_PASS").ok();

    let client = Client::new();
    let result = match (user, pass) {
        (Some(user), Some(pass)) => {
            let response = client.get( &ARGS.url).basic_auth( &user, Some(&pass)).send().await;
            match response {
                Ok(response) if response.status().is_success() => {
                    let bytes = response.bytes().await?;
                    std::fs::write( &path, &bytes)?;
                    Ok( bytes.len() as u64 )
                }
                Ok(response) => Err( anyhow::anyhow!("Earthdata response status {}", response.status())),
                Err(e) => Err( anyhow::anyhow!(e))
            }
        }
        _ => Err( anyhow::anyhow!("no Earthdata credentials in environment"))
    };

    match result {
        Ok(len) => println!("downloaded {} ({} bytes)", path.display(), len),
        Err(e) => {
            warn!("rain rate download failed ({e}), writing synthetic sample grid");
            write_sample_rain_rates(&path)?;
            println!("wrote sample grid {}", path.display());
        }
    }

    Ok(())
}
