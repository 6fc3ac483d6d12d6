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

use std::time::Duration;

use anyhow::Result;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    #[serde(default = "default_repository")]
    pub repository: String,
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    #[serde(default = "default_service")]
    pub service: String,
    #[serde(default = "default_registry_url")]
    pub registry_url: String,
    #[serde(deserialize_with = "parse_duration", default = "default_timeout")]
    pub timeout: Duration,
}

fn default_repository() -> String {
    "tfgco/pitaya-bot".to_string()
}

fn default_auth_url() -> String {
    "https://auth.docker.io/token".to_string()
}

fn default_service() -> String {
    "registry.docker.io".to_string()
}

fn default_registry_url() -> String {
    "https://registry-1.docker.io".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn parse_duration<'d, D: Deserializer<'d>>(
    deserializer: D,
) -> std::result::Result<Duration, D::Error> {
    let s: String = Deserialize::deserialize(deserializer)?;
    let d = s
        .parse::<iso8601_duration::Duration>()
        .map_err(|_| serde::de::Error::custom("Cannot parse ISO-8601 duration"))?;
    d.to_std()
        .ok_or(serde::de::Error::custom("Cannot convert to duration"))
}

impl Settings {
    pub fn read(filename: &str, repository: Option<String>) -> Result<Settings> {
        let config = Config::builder()
            .add_source(
                File::with_name(filename)
                    .format(FileFormat::Yaml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("LATEST_TAG"))
            .set_override_option("repository", repository)?
            .build()?;
        let settings = config.try_deserialize()?;
        Ok(settings)
    }

    pub fn tags_url(&self) -> String {
        format!(
            "{}/v2/{}/tags/list",
            self.registry_url.trim_end_matches('/'),
            self.repository
        )
    }

    pub fn scope(&self) -> String {
        format!("repository:{}:pull,push", self.repository)
    }
}
