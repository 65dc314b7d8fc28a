// Copyright 2026, The Akscope Authors
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use kube::Client;
use serde::Serialize;
use tracing::info;

use akscope::azure::types::{ManagedCluster, RoleAssignmentList, RoleDefinitionList};
use akscope::azure::{
    get_cluster_describe, get_context_name, list_all_role_definitions, list_all_roles_for_scope,
};
use akscope::config;
use akscope::kubernetes::{get_group_ids_role_bindings, RbacScope};

/// Inspect the access posture of an AKS cluster: Azure role assignments and
/// definitions for the cluster's scope, plus the group subjects bound
/// through Kubernetes RBAC.
#[derive(Parser, Debug)]
#[command(name = "akscope", version)]
struct Args {
    /// Name of the managed cluster
    cluster_name: String,

    /// Collect RBAC group subjects from this namespace only, instead of
    /// cluster-wide
    #[arg(long)]
    namespace: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AccessReport {
    context_name: String,
    cluster: ManagedCluster,
    #[serde(flatten)]
    role_assignments: RoleAssignmentList,
    #[serde(flatten)]
    role_definitions: RoleDefinitionList,
    group_subjects: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let subscription_id = config::get_subscription_id()?;
    let resource_group = config::get_resource_group()?;

    info!(
        "Describing cluster {} in resource group {}",
        args.cluster_name, resource_group
    );
    let cluster =
        get_cluster_describe(&subscription_id, &args.cluster_name, &resource_group).await?;
    let context_name = get_context_name(Some(&cluster));

    // Role assignments are gathered at the cluster's own resource scope
    let scope = cluster.id.clone().unwrap_or_else(|| {
        format!(
            "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.ContainerService/managedClusters/{}",
            subscription_id, resource_group, args.cluster_name
        )
    });

    info!("Listing role assignments for scope {}", scope);
    let role_assignments = list_all_roles_for_scope(&subscription_id, &scope).await?;
    info!(
        "Resolving {} role assignments to definitions",
        role_assignments.role_assignments.len()
    );
    let role_definitions = list_all_role_definitions(&subscription_id, &scope).await?;

    let client = Client::try_default().await?;
    let rbac_scope = match args.namespace {
        Some(namespace) => RbacScope::Namespace(namespace),
        None => RbacScope::ClusterWide,
    };
    let group_subjects = get_group_ids_role_bindings(&client, &rbac_scope).await?;
    info!("Collected {} RBAC group subjects", group_subjects.len());

    let report = AccessReport {
        context_name,
        cluster,
        role_assignments,
        role_definitions,
        group_subjects,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
