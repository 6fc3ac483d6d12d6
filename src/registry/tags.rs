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
use crate::error::Result;
use log::info;
use serde::Deserialize;

#[derive(Deserialize)]
struct TagList {
    // Docker Hub sends `null` for repositories without tags.
    #[serde(default)]
    tags: Option<Vec<String>>,
}

impl Registry {
    pub async fn tags(&self, token: &str) -> Result<Vec<String>> {
        let request = self
            .client
            .get(self.settings.tags_url())
            .bearer_auth(token);
        let response: TagList = self.get_json(request).await?;
        let tags = response.tags.unwrap_or_default();
        info!("Found {} tags for {}", tags.len(), self.settings.repository);
        Ok(tags)
    }
}
