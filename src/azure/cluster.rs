// Copyright 2026, The Akscope Authors
// SPDX-License-Identifier: Apache-2.0

//! Managed cluster metadata lookup

use crate::azure::auth;
use crate::azure::client::ArmClient;
use crate::azure::types::ManagedCluster;
use crate::error::Result;
use tracing::instrument;

/// Get the descriptive record of an AKS cluster by resource group and name.
/// One blocking round trip, no retry.
#[instrument(skip(subscription_id))]
pub async fn get_cluster_describe(
    subscription_id: &str,
    cluster_name: &str,
    resource_group: &str,
) -> Result<ManagedCluster> {
    let credential = auth::create_credential()?;
    let client = ArmClient::new(subscription_id, credential)?;
    client.managed_cluster(resource_group, cluster_name).await
}

/// The cluster's name for use as a kube context name. Tolerates a missing
/// record or a record without a name; never errors.
pub fn get_context_name(cluster: Option<&ManagedCluster>) -> String {
    cluster
        .and_then(|c| c.name.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_name_of_missing_record_is_empty() {
        assert_eq!(get_context_name(None), "");
    }

    #[test]
    fn test_context_name_of_unnamed_record_is_empty() {
        let cluster = ManagedCluster::default();
        assert_eq!(get_context_name(Some(&cluster)), "");
    }

    #[test]
    fn test_context_name_is_exact_cluster_name() {
        let cluster = ManagedCluster {
            name: Some("prod-aks-01".to_string()),
            ..Default::default()
        };
        assert_eq!(get_context_name(Some(&cluster)), "prod-aks-01");
    }
}
