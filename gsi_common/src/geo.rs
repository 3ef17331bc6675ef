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

/// support for point geometries on the WGS84 ellipsoid surface.
/// Following GSI design principles we build on the [geo](https://docs.rs/geo/latest/geo/index.html)
/// crate for the distance algorithms and only add value semantics (normalized geodetic degrees,
/// lon/lat field names) via the Rust new-type pattern

use std::fmt::{self,Debug,Display};
use serde::{Serialize,Deserialize};
use serde::ser::{Serializer,SerializeStruct};

use geo::{Coord, Distance, Point};
use geo::algorithm::line_measures::metric_spaces::{Haversine,Geodesic};

pub const MEAN_EARTH_RADIUS_M: f64 = 6_371_008.8;

/// normalize degrees into [-180.0, 180.0]
pub fn normalize_180 (deg: f64)->f64 {
    let mut d = (deg + 180.0) % 360.0;
    if d < 0.0 { d += 360.0 }
    d - 180.0
}

/// normalize degrees into [-90.0, 90.0] (clamping - latitudes outside the range are input errors)
pub fn normalize_90 (deg: f64)->f64 {
    deg.clamp( -90.0, 90.0)
}

/* #region GeoPoint ***********************************************************************************************/

/// a wrapper for geo::Point that uses geodetic degrees stored as f64
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoPoint(Point);

impl GeoPoint {
    pub fn from_lon_lat_degrees (lon: f64, lat: f64) -> Self {
        GeoPoint( Point::new( normalize_180(lon), normalize_90(lat)))
    }

    pub fn from_point (p: Point) -> Self { GeoPoint(p) }

    pub fn longitude_deg (&self)->f64 { self.0.x() }
    pub fn latitude_deg (&self)->f64 { self.0.y() }

    pub fn point<'a> (&'a self) -> &'a Point { &self.0 }

    pub fn coord (&self)->Coord<f64> { self.0.0.clone() }

    /// great-circle distance in meters on the mean-radius sphere
    pub fn haversine_distance (&self, other: &GeoPoint)->f64 {
        Haversine.distance( self.0, other.0)
    }

    /// ellipsoidal distance in meters (Karney geodesic)
    pub fn geodesic_distance (&self, other: &GeoPoint)->f64 {
        Geodesic.distance( self.0, other.0)
    }

    pub fn haversine_distance_km (&self, other: &GeoPoint)->f64 {
        self.haversine_distance(other) / 1000.0
    }
}

impl fmt::Display for GeoPoint {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.0.x(),self.0.y())
    }
}

impl Serialize for GeoPoint {
    fn serialize<S> (&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        let mut state = serializer.serialize_struct("GeoPoint", 2)?;
        state.serialize_field("lon", &self.longitude_deg())?;
        state.serialize_field("lat", &self.latitude_deg())?;
        state.end()
    }
}

// we accept "lon"/"longitude"/"x" and "lat"/"latitude"/"y" so that we can directly deserialize
// records that were serialized from raw `geo` types or from external catalogs
#[derive(Deserialize)]
struct LonLat {
    #[serde(alias="longitude", alias="x")]
    lon: f64,
    #[serde(alias="latitude", alias="y")]
    lat: f64
}

impl <'de> Deserialize<'de> for GeoPoint {
    fn deserialize<D> (deserializer: D) -> Result<Self, D::Error> where D: serde::Deserializer<'de> {
        let ll = LonLat::deserialize(deserializer)?;
        Ok( GeoPoint::from_lon_lat_degrees( ll.lon, ll.lat) )
    }
}

/* #endregion GeoPoint */

/// answer the index of the point in `ps` that is closest to `p` (haversine), None for empty input
pub fn closest_point_idx (p: &GeoPoint, ps: &[GeoPoint])->Option<usize> {
    let mut best: Option<(usize,f64)> = None;
    for (i,q) in ps.iter().enumerate() {
        let d = p.haversine_distance(q);
        if best.map_or( true, |(_,bd)| d < bd) { best = Some((i,d)) }
    }
    best.map( |(i,_)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize () {
        assert_eq!( normalize_180(190.0), -170.0);
        assert_eq!( normalize_180(-190.0), 170.0);
        assert_eq!( normalize_90(95.0), 90.0);
    }

    #[test]
    fn test_haversine_distance () {
        let svalbard = GeoPoint::from_lon_lat_degrees( 15.39, 78.23); // SvalSat
        let tromso = GeoPoint::from_lon_lat_degrees( 18.94, 69.66);   // KSAT Tromsø
        let d_km = svalbard.haversine_distance_km( &tromso);
        println!("SvalSat - Tromsø: {:.1} km", d_km);
        assert!( d_km > 940.0 && d_km < 980.0);
    }

    #[test]
    fn test_geodesic_distance () {
        let svalbard = GeoPoint::from_lon_lat_degrees( 15.39, 78.23);
        let tromso = GeoPoint::from_lon_lat_degrees( 18.94, 69.66);
        let dh = svalbard.haversine_distance( &tromso);
        let dg = svalbard.geodesic_distance( &tromso);
        // spherical and ellipsoidal distances agree to within 1% at this scale
        assert!( ((dg - dh) / dh).abs() < 0.01);
    }

    #[test]
    fn test_point_deserialize_aliases () {
        let p: GeoPoint = serde_json::from_str( r#"{"x": -122.4, "y": 37.6}"#).unwrap();
        assert_eq!( p.longitude_deg(), -122.4);
        assert_eq!( p.latitude_deg(), 37.6);
    }
}
