// Copyright 2026, The Akscope Authors
// SPDX-License-Identifier: Apache-2.0

//! Test utilities: a mock Kubernetes API service and RBAC list payload
//! builders.

use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A mock HTTP service answering GET requests from a fixed path-to-response
/// table. Unregistered paths get a Kubernetes-style 404 Status.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<String, (u16, String)>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Register the response served for GET requests to the exact path.
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.to_string()));
        self
    }

    /// Build a kube Client backed by this mock service.
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let path = req.uri().path().to_string();
        let is_get = req.method() == http::Method::GET;
        let response = if is_get {
            self.responses.lock().unwrap().get(&path).cloned()
        } else {
            None
        };

        Box::pin(async move {
            let (status, body) = response.unwrap_or_else(|| {
                (
                    404,
                    serde_json::json!({
                        "kind": "Status",
                        "apiVersion": "v1",
                        "status": "Failure",
                        "message": format!("the requested resource at {} was not mocked", path),
                        "reason": "NotFound",
                        "code": 404
                    })
                    .to_string(),
                )
            });

            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

fn subjects_json(subjects: &[(&str, &str)]) -> Vec<serde_json::Value> {
    subjects
        .iter()
        .map(|(kind, name)| {
            serde_json::json!({
                "kind": kind,
                "name": name,
                "apiGroup": "rbac.authorization.k8s.io"
            })
        })
        .collect()
}

/// Build a ClusterRoleBindingList response. Each entry is a binding name and
/// its `(kind, name)` subjects.
pub fn cluster_role_binding_list_json(bindings: &[(&str, Vec<(&str, &str)>)]) -> String {
    let items: Vec<_> = bindings
        .iter()
        .map(|(name, subjects)| {
            serde_json::json!({
                "apiVersion": "rbac.authorization.k8s.io/v1",
                "kind": "ClusterRoleBinding",
                "metadata": { "name": name, "uid": "test-uid" },
                "roleRef": {
                    "apiGroup": "rbac.authorization.k8s.io",
                    "kind": "ClusterRole",
                    "name": "view"
                },
                "subjects": subjects_json(subjects)
            })
        })
        .collect();

    serde_json::json!({
        "kind": "ClusterRoleBindingList",
        "apiVersion": "rbac.authorization.k8s.io/v1",
        "metadata": { "resourceVersion": "1" },
        "items": items
    })
    .to_string()
}

/// Build a RoleBindingList response. Each entry is a binding name, its
/// namespace, and its `(kind, name)` subjects.
pub fn role_binding_list_json(bindings: &[(&str, &str, Vec<(&str, &str)>)]) -> String {
    let items: Vec<_> = bindings
        .iter()
        .map(|(name, namespace, subjects)| {
            serde_json::json!({
                "apiVersion": "rbac.authorization.k8s.io/v1",
                "kind": "RoleBinding",
                "metadata": { "name": name, "namespace": namespace, "uid": "test-uid" },
                "roleRef": {
                    "apiGroup": "rbac.authorization.k8s.io",
                    "kind": "Role",
                    "name": "edit"
                },
                "subjects": subjects_json(subjects)
            })
        })
        .collect();

    serde_json::json!({
        "kind": "RoleBindingList",
        "apiVersion": "rbac.authorization.k8s.io/v1",
        "metadata": { "resourceVersion": "1" },
        "items": items
    })
    .to_string()
}
