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

/// synthetic rain-rate sample grid, written when the Earthdata download fails (expired
/// credentials are the usual cause and are terminal for the file - rerun after fixing
/// the .netrc). R0.01 values are representative ITU rain-zone figures

use std::path::Path;

use crate::errors::Result;

const SAMPLE_RAIN_RATES: &str = "\
lon,lat,r001
15.4,78.2,8
18.9,69.7,12
-0.1,51.5,28
8.5,47.4,35
-77.0,38.9,42
-121.9,37.4,30
139.7,35.7,50
103.8,1.4,95
-47.9,-15.8,75
77.2,28.6,65
151.2,-33.9,45
-70.7,-33.4,20
";

/// write the synthetic rain-rate sample grid to `path`
pub fn write_sample_rain_rates (path: impl AsRef<Path>)->Result<()> {
    std::fs::write( path.as_ref(), SAMPLE_RAIN_RATES)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read_rain_rates_csv;

    #[test]
    fn test_sample_parses () {
        let path = std::env::temp_dir().join("gsi_sample_rain.csv");
        write_sample_rain_rates(&path).unwrap();

        let rates = read_rain_rates_csv(&path).unwrap();
        assert_eq!( rates.len(), 12);
        assert!( rates.iter().all( |r| r.annual_p001_mm_h >= 0.0));
    }
}
