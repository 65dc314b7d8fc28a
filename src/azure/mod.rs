// Copyright 2026, The Akscope Authors
// SPDX-License-Identifier: Apache-2.0

//! Azure-side lookups: credential acquisition, cluster metadata, and the
//! role assignment / role definition aggregation.

pub mod auth;
pub mod client;
pub mod cluster;
pub mod roles;
pub mod types;

pub use client::ArmClient;
pub use cluster::{get_cluster_describe, get_context_name};
pub use roles::{list_all_role_definitions, list_all_roles_for_scope};
