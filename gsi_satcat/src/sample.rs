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

/// synthetic sample catalog used when the CelesTrak download fails. Network/auth failures
/// are terminal for the file (no retry) but the downstream demos still need something to
/// chew on, so we write a small representative catalog instead

use std::path::Path;

use crate::errors::Result;

const SAMPLE_SATCAT: &str = "\
OBJECT_NAME,OBJECT_ID,NORAD_CAT_ID,OBJECT_TYPE,OPS_STATUS_CODE,OWNER,LAUNCH_DATE,LAUNCH_SITE,DECAY_DATE,PERIOD,INCLINATION,APOGEE,PERIGEE,RCS,DATA_STATUS_CODE,ORBIT_CENTER,ORBIT_TYPE
ISS (ZARYA),1998-067A,25544,PAY,+,ISS,1998-11-20,TYMSC,,92.9,51.64,421,414,401.4,,EA,ORB
INTELSAT 901,2001-024A,26824,PAY,+,ITSO,2001-06-09,FRGUI,,1436.1,0.02,35798,35779,110.9,,EA,ORB
NAVSTAR 77,2019-056A,44506,PAY,+,US,2019-08-22,AFETR,,718.0,55.1,20201,19102,2.2,,EA,ORB
MOLNIYA 1-91,1998-054A,25485,PAY,-,CIS,1998-09-28,PKMTR,,717.7,64.2,39813,612,4.4,,EA,ORB
STARLINK-1007,2019-074A,44713,PAY,+,US,2019-11-11,AFETR,,95.6,53.0,550,548,,,EA,ORB
SENTINEL-2A,2015-028A,40697,PAY,+,ESA,2015-06-23,FRGUI,,100.6,98.57,789,786,4.7,,EA,ORB
O3B FM8,2014-038D,40081,PAY,+,SES,2014-07-10,FRGUI,,287.9,0.04,8069,8062,,,EA,ORB
COSMOS 2251 DEB,1993-036SX,34427,DEB,,CIS,1993-06-16,PKMTR,,,74.0,,,,,EA,ORB
";

/// write the synthetic SATCAT sample to `path`
pub fn write_sample_satcat (path: impl AsRef<Path>)->Result<()> {
    std::fs::write( path.as_ref(), SAMPLE_SATCAT)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{read_satcat_csv,OrbitClass};

    #[test]
    fn test_sample_parses () {
        let dir = std::env::temp_dir();
        let path = dir.join("gsi_sample_satcat.csv");
        write_sample_satcat(&path).unwrap();

        let records = read_satcat_csv(&path).unwrap();
        assert_eq!( records.len(), 8);

        let iss = records.iter().find( |r| r.norad_id == 25544).unwrap();
        assert_eq!( iss.orbit_class(), OrbitClass::LEO);

        let intelsat = records.iter().find( |r| r.norad_id == 26824).unwrap();
        assert_eq!( intelsat.orbit_class(), OrbitClass::GEO);

        let deb = records.iter().find( |r| r.norad_id == 34427).unwrap();
        assert_eq!( deb.orbit_class(), OrbitClass::Unknown);
    }
}
