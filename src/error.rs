/*
 * Copyright 2025 Michael Krolikowski
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request failed")]
    Transport(#[from] reqwest::Error),
    #[error("Request to {url} returned {status}")]
    Status { url: String, status: StatusCode },
    #[error("Malformed response from {url}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Token endpoint returned an empty token")]
    EmptyToken,
    #[error("No tags available")]
    NoTags,
}
