//! Demo configuration from environment variables.

use bistro_core::{DomainError, DomainResult};
use bistro_observability::LogFormat;
use bistro_orders::TableNumber;

pub const REPORT_FORMAT_VAR: &str = "BISTRO_REPORT_FORMAT";
pub const LOG_FORMAT_VAR: &str = "BISTRO_LOG_FORMAT";
pub const TABLE_NUMBER_VAR: &str = "BISTRO_TABLE_NUMBER";

/// Output format of the order report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    pub report_format: ReportFormat,
    pub log_format: LogFormat,
    pub table_number: TableNumber,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            report_format: ReportFormat::default(),
            log_format: LogFormat::default(),
            table_number: TableNumber(1),
        }
    }
}

impl DemoConfig {
    /// Reads the process environment. Unset variables keep their defaults.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(REPORT_FORMAT_VAR) {
            config.report_format = ReportFormat::from_name(&raw).ok_or_else(|| {
                DomainError::validation(format!(
                    "{REPORT_FORMAT_VAR} must be one of: text, json (got {raw:?})"
                ))
            })?;
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            config.log_format = LogFormat::from_name(&raw).ok_or_else(|| {
                DomainError::validation(format!(
                    "{LOG_FORMAT_VAR} must be one of: json, text (got {raw:?})"
                ))
            })?;
        }

        if let Some(raw) = lookup(TABLE_NUMBER_VAR) {
            let number: i32 = raw.trim().parse().map_err(|e| {
                DomainError::validation(format!("{TABLE_NUMBER_VAR}: {e} (got {raw:?})"))
            })?;
            config.table_number = TableNumber(number);
        }

        Ok(config)
    }
}
