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

///! common utility functions for network operations (catalog downloads, LLM/REST delegation)

use std::{fs::File, io::Write, path::Path};
use reqwest::{header::HeaderMap, Client, StatusCode};
use regex::Regex;
use lazy_static::lazy_static;

use crate::define_error;

const PATH: usize = 5;

lazy_static! {
    // [scheme,user,host,port,path,query]
    static ref URL_RE: Regex = Regex::new( r"(.+)://(?:(.+)@)?([^:/]+)(?::(\d+))?(?:/([^?]+))?(?:\?(.+))?").unwrap();
    static ref FNAME_RE: Regex = Regex::new( r"(?:.*/)(.*)").unwrap();
}

define_error!{ pub GsiNetError =
    IOError(#[from] std::io::Error) : "IO error: {0}",
    NotFoundError(String) : "not found {0}",
    HttpError(#[from] reqwest::Error) : "http error: {0}",
    OpFailed(String) : "operation failed: {0}"
}

pub type Result<T> = std::result::Result<T, GsiNetError>;

/// fetch file from URL using HTTP GET. Retrieve in chunks to support large catalogs
pub async fn download_url (client: &Client, url: &str, opt_headers: &Option<HeaderMap>, path: impl AsRef<Path>) -> Result<u64> {
    let mut file = File::create(path)?;
    let mut len: u64 = 0;

    let mut req = client.get(url);
    if let Some(headermap) = &opt_headers {
        req = req.headers(headermap.clone())
    }

    let mut response = req.send().await?;

    match response.status() {
        StatusCode::OK => {
            while let Some(chunk) = response.chunk().await? {
                len += chunk.len() as u64;
                file.write_all(&chunk)?;
            }

            file.flush()?;
            Ok(len)
        }
        StatusCode::NOT_FOUND => {
            Err( GsiNetError::NotFoundError(format!("{url}")))
        }
        other => {
            Err( GsiNetError::OpFailed(format!("response status {other:?}")))
        }
    }
}

/// get filename part (last path element) of complete URL
/// NOTE - this does not work for partial (relative) URLs
pub fn url_file_name<'a> (url: &'a str) -> Option<&'a str> {
    URL_RE.captures( url)
    .and_then( |cap| cap.get( PATH))
    .map( |m| m.as_str())
    .and_then( |p| FNAME_RE.captures( p))
    .and_then( |cap| cap.get(1))
    .map( |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_file_name () {
        assert_eq!( url_file_name("https://celestrak.org/pub/satcat.csv"), Some("satcat.csv"));
        assert_eq!( url_file_name("https://celestrak.org/"), None);
    }
}
