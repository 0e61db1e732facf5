//! Shared fixtures: a recording fake remote and docs-directory helpers.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::future::Future;
use std::path::Path;
use std::sync::{Arc, Mutex};

use spec_fetcher_mcp::config::ServerConfig;
use spec_fetcher_mcp::remote::{RemoteError, RemoteResponse, RemoteSource};
use spec_fetcher_mcp::service::SpecService;

pub const BASE_URL: &str = "https://specs.test/repo";
pub const REMOTE_INDEX_URL: &str = "https://specs.test/repo/spec/docs/index.yml";

pub fn remote_doc_url(file: &str) -> String {
    format!("{BASE_URL}/spec/docs/{file}")
}

#[derive(Debug, Clone)]
enum Route {
    Respond(u16, String),
    Fail(String),
    Panic,
}

/// In-memory [`RemoteSource`] that records every URL it is asked for.
///
/// Unregistered URLs answer 404.
#[derive(Debug, Clone, Default)]
pub struct FakeRemote {
    routes: Arc<Mutex<HashMap<String, Route>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert(url.into(), Route::Respond(status, body.into()));
        self
    }

    pub fn fail(self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert(url.into(), Route::Fail(message.into()));
        self
    }

    pub fn panic_on(self, url: impl Into<String>) -> Self {
        self.routes.lock().unwrap().insert(url.into(), Route::Panic);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self, url: &str) -> usize {
        self.requests().iter().filter(|u| u.as_str() == url).count()
    }
}

impl RemoteSource for FakeRemote {
    fn get(&self, url: &str) -> impl Future<Output = Result<RemoteResponse, RemoteError>> + Send {
        let routes = Arc::clone(&self.routes);
        let requests = Arc::clone(&self.requests);
        let url = url.to_string();

        async move {
            requests.lock().unwrap().push(url.clone());
            let route = routes.lock().unwrap().get(&url).cloned();
            match route {
                Some(Route::Respond(status, body)) => Ok(RemoteResponse::new(status, body)),
                Some(Route::Fail(message)) => Err(RemoteError::new(url, message)),
                Some(Route::Panic) => panic!("fake remote exploded on {url}"),
                None => Ok(RemoteResponse::new(404, "404: Not Found")),
            }
        }
    }
}

pub fn service(docs_dir: &Path, remote: &FakeRemote) -> SpecService<FakeRemote> {
    SpecService::new(ServerConfig::new(docs_dir, BASE_URL), remote.clone())
}

pub fn write_index(docs_dir: &Path, yaml: &str) {
    fs::create_dir_all(docs_dir).unwrap();
    fs::write(docs_dir.join("index.yml"), yaml).unwrap();
}

pub fn write_doc(docs_dir: &Path, rel: &str, content: &str) {
    let path = docs_dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

pub const SAMPLE_INDEX: &str = "\
- name: onboarding
  description: How to onboard a new product team
  file: guides/onboarding.md
- name: api-design
  description: API design conventions
  file: api/design.md
- name: glossary
  file: glossary.md
";
