// Settings module
// User defaults for generation and display, stored as TOML

use serde::{Deserialize, Serialize};

use crate::models::recurrence::{GenerationMode, RangePolicy, Weekday, DEFAULT_CLAMP_DAYS};

/// How an end date before the start date is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeHandling {
    #[default]
    Clamp,
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default range length and clamp distance, in days.
    pub default_range_days: u32,
    pub range_policy: RangeHandling,
    pub generation_mode: GenerationMode,
    /// Extra chrono format accepted for typed dates besides ISO.
    pub input_date_format: String,
    pub output_format: OutputFormat,
    /// Column labels for the HTML calendar, Monday first.
    pub weekday_headers: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_range_days: DEFAULT_CLAMP_DAYS,
            range_policy: RangeHandling::Clamp,
            generation_mode: GenerationMode::Calendar,
            input_date_format: "%d/%m/%Y".to_string(),
            output_format: OutputFormat::Text,
            weekday_headers: Weekday::all()
                .iter()
                .map(|day| day.short_label().to_string())
                .collect(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.default_range_days == 0 {
            return Err("default_range_days must be at least 1".to_string());
        }

        if self.weekday_headers.len() != 7 {
            return Err(format!(
                "weekday_headers needs 7 labels, found {}",
                self.weekday_headers.len()
            ));
        }

        if self.input_date_format.trim().is_empty() {
            return Err("input_date_format cannot be empty".to_string());
        }

        Ok(())
    }

    pub fn range_policy(&self) -> RangePolicy {
        match self.range_policy {
            RangeHandling::Clamp => RangePolicy::Clamp {
                days: self.default_range_days,
            },
            RangeHandling::Reject => RangePolicy::Reject,
        }
    }
}
