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

/// CSV intermediates for the scored catalog. Columns are written explicitly since the
/// csv serializer cannot flatten the nested record structs

use std::path::Path;

use gsi_stations::competition::CompetitionEdge;
use gsi_stations::scoring::ScoredStation;

use crate::errors::Result;

pub fn write_scored_stations_csv (path: impl AsRef<Path>, scored: &[ScoredStation])->Result<()> {
    let mut writer = csv::Writer::from_path( path.as_ref())?;

    writer.write_record( &[
        "name","operator","country","lon","lat","antenna_m","bands",
        "market","competition","infrastructure","weather","investment","recommendation","color"
    ])?;

    for ss in scored {
        let station = &ss.station;
        let scores = &ss.scores;
        writer.write_record( [
            station.name.clone(),
            station.operator.clone(),
            station.country.clone(),
            format!("{:.4}", station.pos.longitude_deg()),
            format!("{:.4}", station.pos.latitude_deg()),
            format!("{:.1}", station.antenna_m),
            station.bands.clone(),
            format!("{:.1}", scores.market),
            format!("{:.1}", scores.competition),
            format!("{:.1}", scores.infrastructure),
            format!("{:.1}", scores.weather),
            format!("{:.1}", scores.investment),
            scores.recommendation.to_string(),
            scores.recommendation.color().to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// edge intermediate with resolved endpoint coordinates, the column layout the Kepler
/// arc layer expects (src/dst lon/lat)
pub fn write_edges_csv (path: impl AsRef<Path>, scored: &[ScoredStation], edges: &[CompetitionEdge])->Result<()> {
    let mut writer = csv::Writer::from_path( path.as_ref())?;

    writer.write_record( &["src","dst","src_lon","src_lat","dst_lon","dst_lat","distance_km"])?;

    for e in edges {
        let src = &scored[e.a].station;
        let dst = &scored[e.b].station;
        writer.write_record( [
            src.name.clone(),
            dst.name.clone(),
            format!("{:.4}", src.pos.longitude_deg()),
            format!("{:.4}", src.pos.latitude_deg()),
            format!("{:.4}", dst.pos.longitude_deg()),
            format!("{:.4}", dst.pos.latitude_deg()),
            format!("{:.1}", e.distance_km),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
