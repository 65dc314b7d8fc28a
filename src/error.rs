// Copyright 2026, The Akscope Authors
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AkscopeError {
    #[error("failed to obtain a credential: {0}")]
    Credential(String),

    #[error("failed to create client: {0}")]
    ClientConstruction(String),

    #[error("environment variable {0} not set")]
    ConfigMissing(&'static str),

    #[error("failed to advance page: {0}")]
    PageFetch(String),

    #[error("failed to get role definition {id}: {reason}")]
    Lookup { id: String, reason: String },

    #[error("{0} not found")]
    NotFound(String),

    #[error("ARM request failed: {0}")]
    Api(String),

    #[error("{0}")]
    NoBindingsFound(String),

    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),
}

pub type Result<T> = std::result::Result<T, AkscopeError>;
