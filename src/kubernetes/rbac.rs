// Copyright 2026, The Akscope Authors
// SPDX-License-Identifier: Apache-2.0

//! Group subjects referenced by RoleBindings and ClusterRoleBindings.

use crate::constants::GROUP_SUBJECT_KIND;
use crate::error::{AkscopeError, Result};
use k8s_openapi::api::rbac::v1::{ClusterRoleBinding, RoleBinding};
use kube::{api::ListParams, Api, Client};
use tracing::{debug, instrument};

/// Which bindings to collect group subjects from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RbacScope {
    /// ClusterRoleBindings plus RoleBindings in every namespace
    ClusterWide,
    /// Only RoleBindings in the named namespace
    Namespace(String),
}

/// List the names of `Group` subjects bound through RBAC, in binding
/// iteration order, subjects in order within each binding.
///
/// For [`RbacScope::ClusterWide`], cluster-wide subjects precede the
/// namespace-tier ones, and the cluster-tier list failure is returned before
/// the RoleBinding tier is attempted. No deduplication: a group bound at
/// both tiers appears twice.
#[instrument(skip(client))]
pub async fn get_group_ids_role_bindings(
    client: &Client,
    scope: &RbacScope,
) -> Result<Vec<String>> {
    let mut group_ids = Vec::new();

    if *scope == RbacScope::ClusterWide {
        let cluster_role_bindings: Api<ClusterRoleBinding> = Api::all(client.clone());
        let bindings = cluster_role_bindings
            .list(&ListParams::default())
            .await
            .map_err(|e| {
                AkscopeError::NoBindingsFound(format!(
                    "no clusterrolebindings are found inside the cluster: {}",
                    e
                ))
            })?;

        for binding in &bindings.items {
            append_group_subjects(&mut group_ids, binding.subjects.as_deref());
        }
        debug!("{} group subjects from clusterrolebindings", group_ids.len());
    }

    let role_bindings: Api<RoleBinding> = match scope {
        RbacScope::ClusterWide => Api::all(client.clone()),
        RbacScope::Namespace(namespace) => Api::namespaced(client.clone(), namespace),
    };
    let bindings = role_bindings.list(&ListParams::default()).await.map_err(|e| {
        let tier = match scope {
            RbacScope::ClusterWide => "any namespace".to_string(),
            RbacScope::Namespace(namespace) => format!("the {} namespace", namespace),
        };
        AkscopeError::NoBindingsFound(format!("no rolebindings are found in {}: {}", tier, e))
    })?;

    for binding in &bindings.items {
        append_group_subjects(&mut group_ids, binding.subjects.as_deref());
    }

    Ok(group_ids)
}

fn append_group_subjects(
    group_ids: &mut Vec<String>,
    subjects: Option<&[k8s_openapi::api::rbac::v1::Subject]>,
) {
    for subject in subjects.unwrap_or_default() {
        if subject.kind == GROUP_SUBJECT_KIND {
            group_ids.push(subject.name.clone());
        }
    }
}
