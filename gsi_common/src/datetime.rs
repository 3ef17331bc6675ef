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

///! common datetime functions for catalog records and artifact naming

use chrono::{DateTime,NaiveDate,Utc};

pub fn utc_now ()->DateTime<Utc> {
    chrono::offset::Utc::now()
}

/// parse a "YYYY-MM-DD" launch date as used by the CelesTrak SATCAT
pub fn parse_iso_date (s: &str)->Option<NaiveDate> {
    NaiveDate::parse_from_str( s.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date () {
        assert_eq!( parse_iso_date(" 1998-11-20 "), NaiveDate::from_ymd_opt( 1998, 11, 20));
        assert_eq!( parse_iso_date(""), None);
        assert_eq!( parse_iso_date("N/A"), None);
    }
}
