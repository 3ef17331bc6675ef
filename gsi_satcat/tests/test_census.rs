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

use gsi_satcat::{orbit_census, read_satcat_csv, sample::write_sample_satcat, OrbitClass};

#[test]
fn test_census_over_sample () {
    let path = std::env::temp_dir().join("gsi_test_census_satcat.csv");
    write_sample_satcat(&path).unwrap();

    let records = read_satcat_csv(&path).unwrap();
    let census = orbit_census(&records);

    assert_eq!( census.total, records.len());
    assert_eq!( census.by_class.get(&OrbitClass::GEO), Some(&1));
    assert_eq!( census.by_class.get(&OrbitClass::HEO), Some(&1));
    assert_eq!( census.by_class.get(&OrbitClass::Unknown), Some(&1)); // debris row without elements

    // per-class counts add up
    let sum: usize = census.by_class.values().sum();
    assert_eq!( sum, census.total);

    // launch years from the catalog dates
    assert!( census.by_launch_year.get(&1998).copied().unwrap_or(0) >= 2);
}

#[test]
fn test_operational_flag () {
    let path = std::env::temp_dir().join("gsi_test_ops_satcat.csv");
    write_sample_satcat(&path).unwrap();

    let records = read_satcat_csv(&path).unwrap();
    let molniya = records.iter().find( |r| r.norad_id == 25485).unwrap();
    assert!( !molniya.is_operational());

    let iss = records.iter().find( |r| r.norad_id == 25544).unwrap();
    assert!( iss.is_operational());
}
