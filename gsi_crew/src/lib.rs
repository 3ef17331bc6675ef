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

//! thin HTTP wrapper around the multi-agent "crew" orchestration. All actual intelligence
//! work is delegated to hosted LLM APIs and the collaborating web app's REST service;
//! this crate only routes requests and shapes responses

use serde::{Serialize,Deserialize};

pub mod errors;
use errors::{GsiCrewError,Result};

pub mod llm;
pub mod server;

/* #region crew routing *******************************************************************************/

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
#[serde(rename_all="snake_case")]
pub enum CrewType {
    Investment,
    Coverage,
    Visualization
}

impl CrewType {
    pub fn name (&self)->&'static str {
        match self {
            CrewType::Investment => "investment",
            CrewType::Coverage => "coverage",
            CrewType::Visualization => "visualization",
        }
    }

    pub fn all ()->&'static [CrewType] {
        &[CrewType::Investment, CrewType::Coverage, CrewType::Visualization]
    }
}

// the three fixed keyword lists the original shim matched queries against. Substring
// match on the lowercased query, first list with a hit wins in this order
const INVESTMENT_WORDS: &[&str] = &["invest", "score", "market", "opportunit", "acquisition", "buy", "portfolio"];
const COVERAGE_WORDS: &[&str] = &["coverage", "route", "pass", "visibility", "geocode", "antenna", "where"];
const VISUALIZATION_WORDS: &[&str] = &["visualiz", "map", "plot", "render", "kepler", "graph"];

/// pick the crew for a query: explicit crew_type wins, otherwise first keyword list with
/// a hit, otherwise the investment crew (the original's default)
pub fn route_crew (query: &str, explicit: Option<CrewType>)->CrewType {
    if let Some(crew) = explicit { return crew }

    let q = query.to_lowercase();
    if INVESTMENT_WORDS.iter().any( |w| q.contains(w)) { return CrewType::Investment }
    if COVERAGE_WORDS.iter().any( |w| q.contains(w)) { return CrewType::Coverage }
    if VISUALIZATION_WORDS.iter().any( |w| q.contains(w)) { return CrewType::Visualization }

    CrewType::Investment
}

/* #endregion crew routing */

/* #region wire types *********************************************************************************/

#[derive(Debug,Clone,Deserialize)]
pub struct CrewRequest {
    pub query: String,

    #[serde(default)]
    pub context: Option<String>,

    #[serde(default)]
    pub crew_type: Option<CrewType>,
}

#[derive(Debug,Clone,Serialize)]
pub struct TaskResult {
    pub task: String,
    pub output: String,
}

#[derive(Debug,Clone,Serialize)]
pub struct MapAction {
    pub action: String,
    pub target: String,
}

/// the response shape the frontend expects from every crew
#[derive(Debug,Clone,Serialize)]
pub struct CrewResponse {
    pub crew: CrewType,
    pub synthesized_text: String,
    pub task_results: Vec<TaskResult>,
    pub artifacts: Vec<String>,
    pub map_actions: Vec<MapAction>,
}

/* #endregion wire types */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_routing () {
        assert_eq!( route_crew("which sites are worth investing in?", None), CrewType::Investment);
        assert_eq!( route_crew("show antenna coverage over Svalbard", None), CrewType::Coverage);
        assert_eq!( route_crew("render a map of the stations", None), CrewType::Visualization);
    }

    #[test]
    fn test_first_list_wins () {
        // "market" (investment) and "map" (visualization) both hit - list order decides
        assert_eq!( route_crew("map the market", None), CrewType::Investment);
    }

    #[test]
    fn test_explicit_crew_wins () {
        assert_eq!( route_crew("map the market", Some(CrewType::Coverage)), CrewType::Coverage);
    }

    #[test]
    fn test_unmatched_defaults_to_investment () {
        assert_eq!( route_crew("hello there", None), CrewType::Investment);
    }
}
