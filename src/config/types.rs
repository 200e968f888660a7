//! Configuration types for the tracker policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML policy files.

use serde::Deserialize;

/// Tracker policy file structure (`policy.yaml`).
///
/// Carries identifying metadata and the workday policy.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackerPolicy {
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
    /// The workday policy.
    pub workday: WorkdayPolicy,
}

/// Workday policy values.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkdayPolicy {
    /// Minutes credited as worked time for a vacation or sick day.
    pub absence_credit_minutes: i64,
}

/// Allowance file structure (`allowance.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct AllowanceConfig {
    /// Vacation allowance values.
    pub vacation: VacationAllowance,
}

/// Vacation allowance values.
#[derive(Debug, Clone, Deserialize)]
pub struct VacationAllowance {
    /// Vacation days granted per calendar year.
    pub annual_days: u32,
}

/// The complete tracker configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Tracker policy (metadata and workday values).
    policy: TrackerPolicy,
    /// Vacation allowance configuration.
    allowance: AllowanceConfig,
}

impl TrackerConfig {
    /// Creates a new TrackerConfig from its component parts.
    pub fn new(policy: TrackerPolicy, allowance: AllowanceConfig) -> Self {
        Self { policy, allowance }
    }

    /// Returns the tracker policy.
    pub fn policy(&self) -> &TrackerPolicy {
        &self.policy
    }

    /// Returns the allowance configuration.
    pub fn allowance(&self) -> &AllowanceConfig {
        &self.allowance
    }
}
