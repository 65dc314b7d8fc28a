// Copyright 2026, The Akscope Authors
// SPDX-License-Identifier: Apache-2.0

//! ARM REST client. All resource-manager reads go through one authenticated
//! GET helper; the per-resource URLs are built by the callers in this module.

use crate::azure::auth;
use crate::azure::roles::{RoleDefinitionSource, ScopeRoleLister};
use crate::azure::types::{ManagedCluster, RoleAssignmentPage, RoleDefinition};
use crate::constants::{api_versions, ARM_ENDPOINT};
use crate::error::{AkscopeError, Result};
use async_trait::async_trait;
use azure_core::credentials::TokenCredential;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Authenticated client for Azure Resource Manager reads.
pub struct ArmClient {
    http: reqwest::Client,
    endpoint: String,
    credential: Arc<dyn TokenCredential>,
    subscription_id: String,
}

impl ArmClient {
    pub fn new(subscription_id: &str, credential: Arc<dyn TokenCredential>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AkscopeError::ClientConstruction(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: ARM_ENDPOINT.to_string(),
            credential,
            subscription_id: subscription_id.to_string(),
        })
    }

    /// Issue one authenticated GET and deserialize the JSON response body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let token = auth::get_token(&self.credential).await?;

        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AkscopeError::Api(format!("{}: {}", url, e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AkscopeError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AkscopeError::Api(format!(
                "{} returned {}: {}",
                url, status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AkscopeError::Api(format!("{}: invalid response body: {}", url, e)))
    }

    /// Fetch one managed cluster by resource group and name.
    #[instrument(skip(self))]
    pub async fn managed_cluster(
        &self,
        resource_group: &str,
        cluster_name: &str,
    ) -> Result<ManagedCluster> {
        let url = format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.ContainerService/managedClusters/{}?api-version={}",
            self.endpoint,
            self.subscription_id,
            resource_group,
            cluster_name,
            api_versions::MANAGED_CLUSTERS,
        );
        self.get_json(&url).await
    }
}

#[async_trait]
impl ScopeRoleLister for ArmClient {
    /// Fetch one page of role assignments for `scope`. The first page is
    /// addressed by scope; subsequent pages follow `next_link` verbatim.
    /// No filter, tenant override, or skip token is applied.
    async fn role_assignment_page(
        &self,
        scope: &str,
        next_link: Option<&str>,
    ) -> Result<RoleAssignmentPage> {
        let url = match next_link {
            Some(link) => link.to_string(),
            None => format!(
                "{}/{}/providers/Microsoft.Authorization/roleAssignments?api-version={}",
                self.endpoint,
                scope.trim_start_matches('/'),
                api_versions::ROLE_ASSIGNMENTS,
            ),
        };
        self.get_json(&url).await
    }
}

#[async_trait]
impl RoleDefinitionSource for ArmClient {
    /// Fetch a role definition by its full ARM resource id.
    async fn role_definition_by_id(&self, role_definition_id: &str) -> Result<RoleDefinition> {
        let url = format!(
            "{}/{}?api-version={}",
            self.endpoint,
            role_definition_id.trim_start_matches('/'),
            api_versions::ROLE_DEFINITIONS,
        );
        self.get_json(&url).await
    }
}
