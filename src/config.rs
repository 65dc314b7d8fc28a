// Copyright 2026, The Akscope Authors
// SPDX-License-Identifier: Apache-2.0

//! Resolution of ambient Azure configuration from environment variables.

use crate::constants::env_vars;
use crate::error::{AkscopeError, Result};
use std::env;

/// Read the Azure subscription id from `AZURE_SUBSCRIPTION_ID`.
pub fn get_subscription_id() -> Result<String> {
    require_env(env_vars::SUBSCRIPTION_ID)
}

/// Read the Azure resource group from `AZURE_RESOURCE_GROUP`.
pub fn get_resource_group() -> Result<String> {
    require_env(env_vars::RESOURCE_GROUP)
}

/// Return the literal value of `var`, unmodified. The error names the
/// variable so operators know exactly what to set.
fn require_env(var: &'static str) -> Result<String> {
    env::var(var).map_err(|_| AkscopeError::ConfigMissing(var))
}
