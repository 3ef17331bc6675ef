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

/// hosted LLM delegation for the investment crew (Anthropic messages endpoint). The shim
/// holds no conversation state - one request, one completion, request timeout from config

use std::time::Duration;
use reqwest::Client;
use serde::{Serialize,Deserialize};

use crate::errors::{upstream_error,GsiCrewError,Result};

pub const DEFAULT_MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug,Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug,Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug,Deserialize)]
struct ContentBlock {
    #[serde(rename="type")]
    block_type: String,
    #[serde(default)]
    text: String,
}

#[derive(Debug,Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

/// one-shot completion against the messages endpoint. The prompt is the user query plus
/// optional frontend context, concatenated the way the original shim did
pub async fn complete (client: &Client, url: &str, api_key: &str, model: &str, query: &str, context: Option<&str>, timeout: Duration)->Result<String> {
    let prompt = match context {
        Some(ctx) => format!("{}\n\nContext:\n{}", query, ctx),
        None => query.to_string()
    };

    let request = MessagesRequest {
        model,
        max_tokens: 1024,
        messages: vec![ ChatMessage { role: "user", content: &prompt } ],
    };

    let response = client.post( url)
        .header( "x-api-key", api_key)
        .header( "anthropic-version", ANTHROPIC_VERSION)
        .timeout( timeout)
        .json( &request)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err( upstream_error!("LLM API status {}", response.status()))
    }

    let body: MessagesResponse = response.json().await?;
    let text: String = body.content.iter()
        .filter( |block| block.block_type == "text")
        .map( |block| block.text.as_str())
        .collect::<Vec<&str>>()
        .join("\n");

    if text.is_empty() {
        Err( upstream_error!("LLM response without text content"))
    } else {
        Ok(text)
    }
}
