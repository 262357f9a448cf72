//! The configuration-store boundary.
//!
//! Regime slab tables and decomposition profiles are long-lived
//! configuration owned by whatever store the surrounding workflow wires in;
//! the engine only ever sees immutable snapshots fetched through
//! [`ConfigStore`]. A missing entry is surfaced as a typed error, never
//! silently defaulted.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{CtcProfile, ProfileCode, RegimeConfig, RegimeKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigStoreError {
    /// No slab table is registered for the requested (year, regime) pair.
    #[error("no tax regime configuration for financial year {financial_year} ({regime})")]
    RegimeMissing {
        financial_year: String,
        regime: RegimeKind,
    },

    /// No decomposition profile is registered for the requested code.
    #[error("no CTC decomposition profile registered for code {0}")]
    ProfileMissing(ProfileCode),
}

/// Read access to regime and profile configuration, keyed the way callers
/// look them up: `(financial_year, regime)` for slab tables, [`ProfileCode`]
/// for decomposition profiles.
pub trait ConfigStore: Send + Sync {
    fn regime_config(
        &self,
        financial_year: &str,
        regime: RegimeKind,
    ) -> Result<RegimeConfig, ConfigStoreError>;

    /// Financial years with at least one registered regime, sorted.
    fn list_financial_years(&self) -> Vec<String>;

    fn decomposition_profile(
        &self,
        code: ProfileCode,
    ) -> Result<CtcProfile, ConfigStoreError>;
}

/// Map-backed [`ConfigStore`].
///
/// Typical lifetime:
/// 1. Create with [`InMemoryConfigStore::with_builtin_profiles`].
/// 2. Register regimes (directly, or through a loader).
/// 3. Hand out snapshots via the trait for the duration of each calculation.
#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    regimes: HashMap<(String, RegimeKind), RegimeConfig>,
    profiles: HashMap<ProfileCode, CtcProfile>,
}

impl InMemoryConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with the built-in decomposition profiles.
    pub fn with_builtin_profiles() -> Self {
        let mut store = Self::new();
        store.insert_profile(CtcProfile::standard());
        store.insert_profile(CtcProfile::lta());
        store
    }

    /// Register a regime configuration.
    ///
    /// An existing entry for the same (year, regime) pair is silently
    /// replaced.
    pub fn insert_regime(
        &mut self,
        config: RegimeConfig,
    ) {
        self.regimes
            .insert((config.financial_year.clone(), config.regime), config);
    }

    /// Register a decomposition profile, replacing any existing entry for
    /// the same code.
    pub fn insert_profile(
        &mut self,
        profile: CtcProfile,
    ) {
        self.profiles.insert(profile.code, profile);
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn regime_config(
        &self,
        financial_year: &str,
        regime: RegimeKind,
    ) -> Result<RegimeConfig, ConfigStoreError> {
        self.regimes
            .get(&(financial_year.to_string(), regime))
            .cloned()
            .ok_or_else(|| ConfigStoreError::RegimeMissing {
                financial_year: financial_year.to_string(),
                regime,
            })
    }

    fn list_financial_years(&self) -> Vec<String> {
        let mut years: Vec<String> = self.regimes.keys().map(|(year, _)| year.clone()).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    fn decomposition_profile(
        &self,
        code: ProfileCode,
    ) -> Result<CtcProfile, ConfigStoreError> {
        self.profiles
            .get(&code)
            .cloned()
            .ok_or(ConfigStoreError::ProfileMissing(code))
    }
}
