//! Defaults for the command line. Every value can be overridden by a flag or
//! the environment variable named next to it.

/// Markdown document holding the configuration table (`FEU_CONFIG_INPUT`).
pub const DEFAULT_INPUT: &str = "HSC_FEU_config.md";

/// CSV schedule written by `extract` (`FEU_CONFIG_OUTPUT`).
pub const DEFAULT_OUTPUT: &str = "docs/hsc_feu_configuration.csv";

/// Published schedule read by `locate` (`FEU_CONFIG_URL`).
pub const DEFAULT_URL: &str =
    "https://www.naoj.org/staff/monodera/hsc_feu_config/hsc_feu_configuration.csv";

pub const ENV_INPUT: &str = "FEU_CONFIG_INPUT";
pub const ENV_OUTPUT: &str = "FEU_CONFIG_OUTPUT";
pub const ENV_URL: &str = "FEU_CONFIG_URL";
