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

use crate::error::{Error, Result};

pub const SENTINEL_TAG: &str = "latest";

fn sort_key(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

/// Picks the tag with the greatest first dash-delimited segment, compared as
/// plain strings. `v9` sorts after `v10`. On equal keys the first candidate wins.
pub fn latest_tag(tags: &[String]) -> Result<&str> {
    tags.iter()
        .map(String::as_str)
        .filter(|tag| *tag != SENTINEL_TAG)
        .rev()
        .max_by_key(|&tag| sort_key(tag))
        .ok_or(Error::NoTags)
}
