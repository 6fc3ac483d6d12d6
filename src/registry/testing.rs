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

use crate::settings::Settings;
use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::net::TcpListener;

pub const REPOSITORY: &str = "tfgco/pitaya-bot";

#[derive(Clone)]
pub enum Reply {
    Json(String),
    Status(StatusCode),
}

impl Reply {
    pub fn json(body: &str) -> Reply {
        Reply::Json(body.to_string())
    }

    pub fn tags(tags: &[&str]) -> Reply {
        Reply::Json(serde_json::json!({ "name": REPOSITORY, "tags": tags }).to_string())
    }

    pub fn status(status: StatusCode) -> Reply {
        Reply::Status(status)
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Json(body) => {
                (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], body).into_response()
            }
            Reply::Status(status) => (status, "denied").into_response(),
        }
    }
}

struct Recorded {
    token: Reply,
    tags: Reply,
    token_query: Mutex<HashMap<String, String>>,
    authorization: Mutex<Option<String>>,
}

/// Fake token endpoint and registry on an ephemeral local port.
pub struct Server {
    addr: SocketAddr,
    recorded: Arc<Recorded>,
}

impl Server {
    pub fn settings(&self) -> Settings {
        Settings {
            repository: REPOSITORY.to_string(),
            auth_url: format!("http://{}/token", self.addr),
            service: "registry.docker.io".to_string(),
            registry_url: format!("http://{}", self.addr),
            timeout: Duration::from_secs(5),
        }
    }

    pub fn token_query(&self) -> HashMap<String, String> {
        self.recorded.token_query.lock().unwrap().clone()
    }

    pub fn authorization(&self) -> Option<String> {
        self.recorded.authorization.lock().unwrap().clone()
    }
}

async fn token(
    State(recorded): State<Arc<Recorded>>,
    Query(query): Query<HashMap<String, String>>,
) -> Reply {
    *recorded.token_query.lock().unwrap() = query;
    recorded.token.clone()
}

async fn tags(State(recorded): State<Arc<Recorded>>, headers: HeaderMap) -> Reply {
    *recorded.authorization.lock().unwrap() = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());
    recorded.tags.clone()
}

pub async fn serve(token_reply: Reply, tags_reply: Reply) -> Server {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let recorded = Arc::new(Recorded {
        token: token_reply,
        tags: tags_reply,
        token_query: Mutex::new(HashMap::new()),
        authorization: Mutex::new(None),
    });
    let app = Router::new()
        .route("/token", get(token))
        .route(&format!("/v2/{REPOSITORY}/tags/list"), get(tags))
        .with_state(recorded.clone());
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    Server { addr, recorded }
}
