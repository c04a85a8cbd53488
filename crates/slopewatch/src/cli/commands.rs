//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::risk::RiskLevel;
use crate::storage::SortOrder;

/// Record command arguments.
///
/// Values are taken as typed and validated by the library, so a missing flag
/// is reported the same way as a blank form field.
#[derive(Debug, Args)]
pub struct RecordCommand {
    /// Temperature in degrees Celsius (e.g. 25.5)
    #[arg(short, long, allow_hyphen_values = true)]
    pub temperature: Option<String>,

    /// Relative humidity in percent, 0 to 100
    #[arg(short = 'H', long, allow_hyphen_values = true)]
    pub humidity: Option<String>,

    /// Atmospheric pressure in hPa, 800 to 1200
    #[arg(short, long, allow_hyphen_values = true)]
    pub pressure: Option<String>,

    /// Air quality index, 0 to 500
    #[arg(short, long, allow_hyphen_values = true)]
    pub air_quality: Option<String>,
}

/// History command arguments.
#[derive(Debug, Args)]
pub struct HistoryCommand {
    /// Display order
    #[arg(short, long, value_enum, default_value = "recent")]
    pub order: OrderArg,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Delete command arguments.
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Id of the record to delete
    pub id: String,
}

/// Clear command arguments.
#[derive(Debug, Args)]
pub struct ClearCommand {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Stats command arguments.
#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Mitigation checklist arguments.
#[derive(Debug, Args)]
pub struct ActionsCommand {
    /// Mark the action with this id as completed (repeatable)
    #[arg(long, value_name = "ID")]
    pub complete: Vec<u32>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Risk area arguments.
#[derive(Debug, Args)]
pub struct RisksCommand {
    /// Only show areas at this risk level
    #[arg(short, long, value_enum)]
    pub level: Option<RiskLevelArg>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Display order argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OrderArg {
    /// Newest first
    #[default]
    Recent,
    /// Oldest first
    Oldest,
}

impl From<OrderArg> for SortOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Recent => Self::Recent,
            OrderArg::Oldest => Self::Oldest,
        }
    }
}

/// Risk level argument for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RiskLevelArg {
    /// Low risk
    Low,
    /// Medium risk
    Medium,
    /// High risk
    High,
    /// Critical risk
    Critical,
}

impl From<RiskLevelArg> for RiskLevel {
    fn from(arg: RiskLevelArg) -> Self {
        match arg {
            RiskLevelArg::Low => Self::Low,
            RiskLevelArg::Medium => Self::Medium,
            RiskLevelArg::High => Self::High,
            RiskLevelArg::Critical => Self::Critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_arg_conversion() {
        assert_eq!(SortOrder::from(OrderArg::Recent), SortOrder::Recent);
        assert_eq!(SortOrder::from(OrderArg::Oldest), SortOrder::Oldest);
        assert_eq!(OrderArg::default(), OrderArg::Recent);
    }

    #[test]
    fn test_risk_level_arg_conversion() {
        assert_eq!(RiskLevel::from(RiskLevelArg::Low), RiskLevel::Low);
        assert_eq!(RiskLevel::from(RiskLevelArg::Medium), RiskLevel::Medium);
        assert_eq!(RiskLevel::from(RiskLevelArg::High), RiskLevel::High);
        assert_eq!(RiskLevel::from(RiskLevelArg::Critical), RiskLevel::Critical);
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
