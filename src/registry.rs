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

mod tags;
#[cfg(test)]
pub mod testing;
mod token;

use crate::{
    error::{Error, Result},
    settings::Settings,
};
use log::debug;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

pub struct Registry {
    settings: Settings,
    client: Client,
}

impl Registry {
    pub fn new(settings: Settings) -> Result<Registry> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Registry { settings, client })
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let request = request.build()?;
        let url = request.url().to_string();
        debug!("GET {url}");
        let response = self.client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { url, status });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| Error::Parse { url, source })
    }
}
