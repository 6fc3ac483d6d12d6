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

use super::Registry;
use crate::error::{Error, Result};
use log::info;
use serde::Deserialize;

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

impl Registry {
    /// Requests a bearer token for `pull,push` on the configured repository.
    pub async fn token(&self) -> Result<String> {
        let request = self.client.get(&self.settings.auth_url).query(&[
            ("service", self.settings.service.as_str()),
            ("scope", self.settings.scope().as_str()),
        ]);
        let response: TokenResponse = self.get_json(request).await?;
        if response.token.is_empty() {
            return Err(Error::EmptyToken);
        }
        info!("Authenticated for {}", self.settings.repository);
        Ok(response.token)
    }
}
