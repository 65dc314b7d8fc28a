// Copyright 2026, The Akscope Authors
// SPDX-License-Identifier: Apache-2.0

//! Azure credential acquisition for ARM requests.

use crate::constants::{env_vars, ARM_TOKEN_SCOPE};
use crate::error::{AkscopeError, Result};
use azure_core::credentials::TokenCredential;
use azure_identity::{ManagedIdentityCredential, WorkloadIdentityCredential};
use std::sync::Arc;
use tracing::debug;

/// Create a token credential from ambient configuration. Workload identity
/// when the injected federated token file variable is present, managed
/// identity otherwise. A fresh credential is built per call; tokens are not
/// cached here.
pub fn create_credential() -> Result<Arc<dyn TokenCredential>> {
    let credential: Arc<dyn TokenCredential> =
        if std::env::var(env_vars::FEDERATED_TOKEN_FILE).is_ok() {
            debug!("using Azure workload identity credential");
            WorkloadIdentityCredential::new(None)
                .map_err(|e| AkscopeError::Credential(e.to_string()))?
        } else {
            debug!("using Azure managed identity credential");
            ManagedIdentityCredential::new(None)
                .map_err(|e| AkscopeError::Credential(e.to_string()))?
        };

    Ok(credential)
}

/// Get a bearer token for ARM.
pub async fn get_token(credential: &Arc<dyn TokenCredential>) -> Result<String> {
    let token = credential
        .get_token(&[ARM_TOKEN_SCOPE], None)
        .await
        .map_err(|e| AkscopeError::Credential(e.to_string()))?;
    Ok(token.token.secret().to_string())
}
