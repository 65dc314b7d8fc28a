// Copyright 2026, The Akscope Authors
// SPDX-License-Identifier: Apache-2.0

/// Environment variables read by akscope. The names are a public contract;
/// other tooling sets them and must not be broken by a rename.
pub mod env_vars {
    /// Azure subscription the cluster lives in
    pub const SUBSCRIPTION_ID: &str = "AZURE_SUBSCRIPTION_ID";
    /// Resource group containing the managed cluster
    pub const RESOURCE_GROUP: &str = "AZURE_RESOURCE_GROUP";
    /// Set by AKS workload identity injection; its presence selects the
    /// workload identity credential over managed identity
    pub const FEDERATED_TOKEN_FILE: &str = "AZURE_FEDERATED_TOKEN_FILE";
}

/// Azure Resource Manager endpoint (public cloud)
pub const ARM_ENDPOINT: &str = "https://management.azure.com";

/// Token scope for ARM requests
pub const ARM_TOKEN_SCOPE: &str = "https://management.azure.com/.default";

/// ARM api-version query parameters per resource type
pub mod api_versions {
    pub const MANAGED_CLUSTERS: &str = "2024-05-01";
    pub const ROLE_ASSIGNMENTS: &str = "2022-04-01";
    pub const ROLE_DEFINITIONS: &str = "2022-04-01";
}

/// RoleBinding/ClusterRoleBinding subject kind collected by the RBAC group
/// collector
pub const GROUP_SUBJECT_KIND: &str = "Group";
