//! Config command argument structures

use std::fmt;

use clap::{Subcommand, ValueEnum};

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the global config and where it is stored
    Show,

    /// Store a default in the global config
    Set {
        /// Setting to change
        key: ConfigKey,

        /// Dataset file path, or output format name
        value: String,
    },

    /// Remove a default from the global config
    Unset {
        /// Setting to remove
        key: ConfigKey,
    },
}

/// Settings that live in the global config file
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Dataset,
    Format,
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigKey::Dataset => write!(f, "dataset"),
            ConfigKey::Format => write!(f, "format"),
        }
    }
}
