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

/// the axum HTTP surface: GET /health and POST /api/crew. Requests are independent -
/// there is no shared mutable state between them, each one calls out to the configured
/// upstream and returns. Downstream failures map to a generic error JSON (502), the crew
/// without a local runner to 501

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse,Response},
    routing::{get,post},
    Json, Router
};
use reqwest::Client;
use serde::{Serialize,Deserialize};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::warn;

use crate::errors::{op_failed,upstream_error,GsiCrewError,Result};
use crate::llm;
use crate::{route_crew,CrewRequest,CrewResponse,CrewType,MapAction,TaskResult};

/// server configuration (RON, loaded via gsi_common::config). API keys deliberately come
/// from the environment, not the config file
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct CrewServerConfig {
    pub bind_addr: String,

    pub llm_url: String,
    pub llm_model: String,

    pub request_timeout_secs: u64,
}

impl Default for CrewServerConfig {
    fn default ()->Self {
        CrewServerConfig {
            bind_addr: "127.0.0.1:8200".to_string(),
            llm_url: llm::DEFAULT_MESSAGES_URL.to_string(),
            llm_model: "claude-sonnet-4-20250514".to_string(),
            request_timeout_secs: 60,
        }
    }
}

pub struct CrewServer {
    config: CrewServerConfig,
    client: Client,

    api_key: Option<String>,      // ANTHROPIC_API_KEY
    app_base_url: Option<String>, // GSI_APP_BASE_URL (the collaborating Next.js service)
}

impl CrewServer {
    pub fn new (config: CrewServerConfig)->Self {
        Self::with_keys( config,
            std::env::var("ANTHROPIC_API_KEY").ok(),
            std::env::var("GSI_APP_BASE_URL").ok()
        )
    }

    /// explicit-credential constructor (tests and embedding)
    pub fn with_keys (config: CrewServerConfig, api_key: Option<String>, app_base_url: Option<String>)->Self {
        CrewServer {
            config,
            client: Client::new(),
            api_key,
            app_base_url,
        }
    }

    pub fn build_router (self: Arc<Self>)->Router {
        Router::new()
            .route( "/health", get( {
                let server = self.clone();
                move || Self::health_handler( server.clone())
            }))
            .route( "/api/crew", post( {
                let server = self.clone();
                move |request: Json<CrewRequest>| Self::crew_handler( server.clone(), request)
            }))
    }

    pub async fn serve (self: Arc<Self>)->Result<()> {
        let addr = self.config.bind_addr.clone();
        let router = self.clone().build_router();

        println!("serving crew API on http://{}", addr);
        let listener = TcpListener::bind(&addr).await?;
        axum::serve( listener, router).await?;
        Ok(())
    }

    async fn health_handler (server: Arc<Self>)->Response {
        let crews: Vec<&str> = CrewType::all().iter().map( |c| c.name()).collect();
        Json( json!({ "status": "ok", "service": "gsi-crew", "crews": crews })).into_response()
    }

    async fn crew_handler (server: Arc<Self>, Json(request): Json<CrewRequest>)->Response {
        let crew = route_crew( &request.query, request.crew_type);

        let result = match crew {
            CrewType::Investment => server.run_investment_crew( &request).await,
            CrewType::Coverage => server.run_coverage_crew( &request).await,
            CrewType::Visualization => {
                // no local runner - the frontend drives Kepler/GraphXR directly
                return ( StatusCode::NOT_IMPLEMENTED,
                         Json( json!({ "error": "visualization crew has no local runner" })) ).into_response()
            }
        };

        match result {
            Ok(response) => Json(response).into_response(),
            Err(e) => {
                warn!("crew {} failed: {}", crew.name(), e);
                ( StatusCode::BAD_GATEWAY, Json( json!({ "error": e.to_string() })) ).into_response()
            }
        }
    }

    async fn run_investment_crew (&self, request: &CrewRequest)->Result<CrewResponse> {
        let api_key = self.api_key.as_ref()
            .ok_or( op_failed!("no ANTHROPIC_API_KEY in environment"))?;

        let timeout = Duration::from_secs( self.config.request_timeout_secs);
        let text = llm::complete(
            &self.client, &self.config.llm_url, api_key, &self.config.llm_model,
            &request.query, request.context.as_deref(), timeout
        ).await?;

        Ok( CrewResponse {
            crew: CrewType::Investment,
            synthesized_text: text.clone(),
            task_results: vec![ TaskResult { task: "investment_analysis".to_string(), output: text } ],
            artifacts: Vec::new(),
            map_actions: Vec::new(),
        })
    }

    async fn run_coverage_crew (&self, request: &CrewRequest)->Result<CrewResponse> {
        let base_url = self.app_base_url.as_ref()
            .ok_or( op_failed!("no GSI_APP_BASE_URL in environment"))?;

        let url = format!("{}/api/route", base_url.trim_end_matches('/'));
        let timeout = Duration::from_secs( self.config.request_timeout_secs);

        let response = self.client.get( &url)
            .query( &[("q", request.query.as_str())])
            .timeout( timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err( upstream_error!("app service status {}", response.status()))
        }

        let body: serde_json::Value = response.json().await?;
        let summary = body.get("summary").and_then( |v| v.as_str()).unwrap_or("route data attached").to_string();

        Ok( CrewResponse {
            crew: CrewType::Coverage,
            synthesized_text: summary,
            task_results: vec![ TaskResult { task: "route_lookup".to_string(), output: body.to_string() } ],
            artifacts: Vec::new(),
            map_actions: vec![ MapAction { action: "fit_bounds".to_string(), target: "route".to_string() } ],
        })
    }
}
