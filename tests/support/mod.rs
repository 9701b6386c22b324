#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use gitlab_cli::{Error, GitlabService, Result, Transport};
use serde_json::{Value, json};

pub const PROJECT_ID: u64 = 12;

enum Reply {
    Json(Value),
    Status(u16),
}

/// In-memory transport answering exact `METHOD path` routes.
///
/// Unknown routes answer 404, like the API does for a wrong id.
#[derive(Default)]
pub struct FakeTransport {
    routes: HashMap<String, Reply>,
    requests: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(mut self, path: &str, body: Value) -> Self {
        self.routes.insert(format!("GET {path}"), Reply::Json(body));
        self
    }

    pub fn put(mut self, path: &str, body: Value) -> Self {
        self.routes.insert(format!("PUT {path}"), Reply::Json(body));
        self
    }

    pub fn fail(mut self, method: &str, path: &str, status: u16) -> Self {
        self.routes.insert(format!("{method} {path}"), Reply::Status(status));
        self
    }

    /// Requests seen so far, as `METHOD path`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn reply(&self, method: &str, path: &str) -> Result<Value> {
        let key = format!("{method} {path}");
        self.requests.lock().unwrap().push(key.clone());
        match self.routes.get(&key) {
            Some(Reply::Json(body)) => Ok(body.clone()),
            Some(Reply::Status(status)) => Err(Error::Transport {
                status: *status,
                path: path.to_string(),
            }),
            None => Err(Error::Transport {
                status: 404,
                path: path.to_string(),
            }),
        }
    }
}

impl Transport for FakeTransport {
    async fn get(&self, path: &str) -> Result<Value> {
        self.reply("GET", path)
    }

    async fn put(&self, path: &str) -> Result<Value> {
        self.reply("PUT", path)
    }
}

pub fn service(transport: FakeTransport) -> GitlabService<FakeTransport> {
    GitlabService::new(transport)
}

pub fn project_search_path(search: &str) -> String {
    format!("/projects?per_page=100&order_by=name&sort=asc&membership=true&search={search}")
}

pub fn project_json(id: u64, path: &str) -> Value {
    json!({
        "id": id,
        "name": path.to_uppercase(),
        "description": "",
        "path": path,
        "path_with_namespace": format!("acme/{path}"),
        "default_branch": "main",
        "web_url": format!("https://gitlab.example.com/acme/{path}"),
        "ssh_url_to_repo": format!("git@gitlab.example.com:acme/{path}.git"),
        "http_url_to_repo": format!("https://gitlab.example.com/acme/{path}.git")
    })
}

/// Transport that already resolves the `shop` project to `PROJECT_ID`.
pub fn with_shop_project() -> FakeTransport {
    FakeTransport::new().get(
        &project_search_path("shop"),
        json!([project_json(3, "shop-legacy"), project_json(PROJECT_ID, "shop")]),
    )
}

pub fn issue_json(id: u64, iid: u64, state: &str, labels: &[&str]) -> Value {
    json!({
        "id": id,
        "iid": iid,
        "title": format!("Issue {iid}"),
        "state": state,
        "due_date": null,
        "closed_at": null,
        "labels": labels,
        "assignees": [],
        "web_url": format!("https://gitlab.example.com/acme/shop/-/issues/{iid}")
    })
}

pub fn milestone_json(id: u64, title: &str, state: &str) -> Value {
    json!({
        "id": id,
        "iid": id % 100,
        "title": title,
        "description": null,
        "state": state,
        "start_date": null,
        "due_date": null
    })
}
