// Copyright 2026, The Akscope Authors
// SPDX-License-Identifier: Apache-2.0

//! Read-only Kubernetes RBAC queries.

pub mod rbac;

pub use rbac::{get_group_ids_role_bindings, RbacScope};
