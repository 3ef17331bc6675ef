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

//! CelesTrak SATCAT download tool. On download failure this falls back to writing the
//! synthetic sample catalog so the downstream scoring/export demos still run

use anyhow::Result;
use reqwest::Client;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use gsi_common::{define_cli, check_cli, fs::ensure_writable_dir, net::{download_url,url_file_name}};
use gsi_satcat::{read_satcat_csv, orbit_census, sample::write_sample_satcat};

define_cli! { ARGS [about="SATCAT download tool"] =
    url: String [help="catalog URL", long, default_value="https://celestrak.org/pub/satcat.csv"],
    output_dir: String [help="directory for the downloaded catalog", long, default_value="data"],
    census: bool [help="print orbit census after download", long]
}

#[tokio::main]
async fn main ()->Result<()> {
    check_cli!(ARGS);
    tracing_subscriber::fmt().with_env_filter( EnvFilter::from_default_env()).init();

    ensure_writable_dir( &ARGS.output_dir)?;
    let fname = url_file_name( &ARGS.url).unwrap_or("satcat.csv");
    let path = std::path::Path::new( &ARGS.output_dir).join(fname);

    let client = Client::new();
    match download_url( &client, &ARGS.url, &None, &path).await {
        Ok(len) => println!("downloaded {} ({} bytes)", path.display(), len),
        Err(e) => {
            warn!("SATCAT download failed ({e}), writing synthetic sample catalog");
            write_sample_satcat(&path)?;
            println!("wrote sample catalog {}", path.display());
        }
    }

    if ARGS.census {
        let records = read_satcat_csv(&path)?;
        let census = orbit_census(&records);

        println!("\n{} catalog objects:", census.total);
        for (class,n) in &census.by_class {
            println!("  {:?}: {}", class, n);
        }
    }

    Ok(())
}
