// Copyright 2026, The Akscope Authors
// SPDX-License-Identifier: Apache-2.0

//! Role assignment enumeration and role definition resolution for a scope.
//!
//! The algorithms are written against two narrow capabilities so they can be
//! exercised without a credentialed ARM backend: a paged scope-role lister
//! and a role-definition-by-id source. `ArmClient` implements both.

use crate::azure::auth;
use crate::azure::client::ArmClient;
use crate::azure::types::{
    RoleAssignmentList, RoleAssignmentPage, RoleDefinition, RoleDefinitionList,
};
use crate::error::{AkscopeError, Result};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Serves one page of role assignments bound to a scope.
#[async_trait]
pub trait ScopeRoleLister: Sync {
    /// `next_link` is `None` for the first page, otherwise the link returned
    /// by the previous page.
    async fn role_assignment_page(
        &self,
        scope: &str,
        next_link: Option<&str>,
    ) -> Result<RoleAssignmentPage>;
}

/// Resolves a role definition by its full ARM resource id.
#[async_trait]
pub trait RoleDefinitionSource: Sync {
    async fn role_definition_by_id(&self, role_definition_id: &str) -> Result<RoleDefinition>;
}

/// List every role assignment bound to `scope`, in page-arrival order.
///
/// Valid scopes are a subscription (`/subscriptions/{id}`), a resource group
/// (`/subscriptions/{id}/resourceGroups/{name}`), or a full resource id. The
/// string is passed through unvalidated; ARM rejects malformed scopes.
#[instrument(skip_all, fields(scope = %scope))]
pub async fn list_all_roles_for_scope(
    subscription_id: &str,
    scope: &str,
) -> Result<RoleAssignmentList> {
    let credential = auth::create_credential()?;
    let client = ArmClient::new(subscription_id, credential)?;
    collect_role_assignments(&client, scope).await
}

/// Resolve the full role definition of every role assignment bound to
/// `scope`, one lookup per assignment, in assignment order.
///
/// Definitions referenced by several assignments are fetched once per
/// assignment; completeness of the output is preferred over call-count
/// optimization. Any failed lookup aborts the whole call.
#[instrument(skip_all, fields(scope = %scope))]
pub async fn list_all_role_definitions(
    subscription_id: &str,
    scope: &str,
) -> Result<RoleDefinitionList> {
    let credential = auth::create_credential()?;
    let client = ArmClient::new(subscription_id, credential)?;
    resolve_role_definitions(&client, &client, scope).await
}

/// Drain the pager, appending each page's items in arrival order. A failed
/// page advance aborts the call; partial accumulation is discarded.
pub async fn collect_role_assignments<L>(lister: &L, scope: &str) -> Result<RoleAssignmentList>
where
    L: ScopeRoleLister + ?Sized,
{
    let mut role_assignments = Vec::new();
    let mut next_link: Option<String> = None;

    loop {
        let page = lister
            .role_assignment_page(scope, next_link.as_deref())
            .await
            .map_err(|e| AkscopeError::PageFetch(e.to_string()))?;

        debug!("page of {} role assignments for {}", page.value.len(), scope);
        role_assignments.extend(page.value);

        match page.next_link {
            Some(link) if !link.is_empty() => next_link = Some(link),
            _ => break,
        }
    }

    Ok(RoleAssignmentList { role_assignments })
}

/// Enumerate assignments for `scope` and resolve each to its definition.
pub async fn resolve_role_definitions<L, S>(
    lister: &L,
    source: &S,
    scope: &str,
) -> Result<RoleDefinitionList>
where
    L: ScopeRoleLister + ?Sized,
    S: RoleDefinitionSource + ?Sized,
{
    let assignments = collect_role_assignments(lister, scope).await?;

    let mut role_definitions = Vec::with_capacity(assignments.role_assignments.len());
    for assignment in &assignments.role_assignments {
        let id = assignment.role_definition_id().ok_or_else(|| AkscopeError::Lookup {
            id: assignment.id.clone().unwrap_or_else(|| "<unnamed>".to_string()),
            reason: "role assignment carries no roleDefinitionId".to_string(),
        })?;

        let definition = source
            .role_definition_by_id(id)
            .await
            .map_err(|e| AkscopeError::Lookup {
                id: id.to_string(),
                reason: e.to_string(),
            })?;
        role_definitions.push(definition);
    }

    Ok(RoleDefinitionList { role_definitions })
}
