// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Harness Configuration

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};
use tracing::debug;

use crate::error::{ContractError, ContractResult};
use crate::serialization::Format;

/// Environment variable overriding [`HarnessConfig::seed`].
pub const ENV_SEED: &str = "CONTRACT_SEED";
/// Environment variable overriding [`HarnessConfig::cases`].
pub const ENV_CASES: &str = "CONTRACT_CASES";
/// Environment variable overriding [`HarnessConfig::fail_fast`].
pub const ENV_FAIL_FAST: &str = "CONTRACT_FAIL_FAST";

/// Configuration shared by suites and property drivers.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Generated cases per property check.
    pub cases: u32,

    /// Seed for random cursor walks and property runners.
    pub seed: u64,

    /// Moves per random cursor walk.
    pub cursor_steps: usize,

    /// Formats exercised by round-trip checks.
    pub formats: Vec<Format>,

    /// Stop a suite at the first failing check.
    pub fail_fast: bool,

    /// Checks slower than this are logged as slow.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "slow_check_threshold_ms")]
    pub slow_check_threshold: Duration,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            cases: 64,
            seed: 0x5EED,
            cursor_steps: 256,
            formats: Format::ALL.to_vec(),
            fail_fast: false,
            slow_check_threshold: Duration::from_millis(500),
        }
    }
}

impl HarnessConfig {
    /// Parses a JSON document; absent fields take their defaults.
    pub fn from_json_str(json: &str) -> ContractResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> ContractResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading harness config");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Applies `CONTRACT_SEED`, `CONTRACT_CASES` and `CONTRACT_FAIL_FAST`.
    pub fn apply_env_overrides(mut self) -> ContractResult<Self> {
        if let Some(seed) = env_value(ENV_SEED) {
            self.seed = parse_seed(&seed)?;
        }
        if let Some(cases) = env_value(ENV_CASES) {
            self.cases = cases
                .parse()
                .map_err(|_| ContractError::config(format!("{ENV_CASES}: not a number: {cases}")))?;
        }
        if let Some(flag) = env_value(ENV_FAIL_FAST) {
            self.fail_fast = match flag.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ContractError::config(format!(
                        "{ENV_FAIL_FAST}: expected a boolean, got {flag}"
                    )))
                }
            };
        }
        self.validate()?;
        Ok(self)
    }

    /// Rejects configurations no check can run with.
    pub fn validate(&self) -> ContractResult<()> {
        if self.cases == 0 {
            return Err(ContractError::config("cases must be greater than zero"));
        }
        if self.cursor_steps == 0 {
            return Err(ContractError::config("cursor_steps must be greater than zero"));
        }
        if self.formats.is_empty() {
            return Err(ContractError::config("at least one format is required"));
        }
        Ok(())
    }

    /// Set the number of generated cases.
    pub fn with_cases(mut self, cases: u32) -> Self {
        self.cases = cases;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of random cursor moves.
    pub fn with_cursor_steps(mut self, steps: usize) -> Self {
        self.cursor_steps = steps;
        self
    }

    /// Restrict round-trip checks to the given formats.
    pub fn with_formats(mut self, formats: impl IntoIterator<Item = Format>) -> Self {
        self.formats = formats.into_iter().collect();
        self
    }

    /// Stop at the first failing check.
    pub fn fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    /// Set the slow-check warning threshold.
    pub fn with_slow_check_threshold(mut self, threshold: Duration) -> Self {
        self.slow_check_threshold = threshold;
        self
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Accepts decimal or `0x`-prefixed hexadecimal seeds.
fn parse_seed(raw: &str) -> ContractResult<u64> {
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => raw.parse(),
    };
    parsed.map_err(|_| ContractError::config(format!("{ENV_SEED}: invalid seed: {raw}")))
}
