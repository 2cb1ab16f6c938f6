//! Built-in portfolio configurations.

use polaris_base::{Error, Result};
use polaris_dpll::VsidsConfig;

/// The default portfolio: the four built-in tunings.
#[must_use]
pub fn builtin_configs() -> Vec<VsidsConfig> {
    vec![
        VsidsConfig::minisat_classic(),
        VsidsConfig::glucose_aggressive(),
        VsidsConfig::stable_longterm(),
        VsidsConfig::init_heavy(),
    ]
}

/// Looks up a built-in configuration by short or full name.
pub fn config_by_name(name: &str) -> Result<VsidsConfig> {
    match name {
        "mc" | "minisat-classic" => Ok(VsidsConfig::minisat_classic()),
        "ga" | "glucose-aggressive" => Ok(VsidsConfig::glucose_aggressive()),
        "sl" | "stable-longterm" => Ok(VsidsConfig::stable_longterm()),
        "ih" | "init-heavy" => Ok(VsidsConfig::init_heavy()),
        other => Err(Error::UnknownConfig(other.to_string())),
    }
}
