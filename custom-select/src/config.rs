//! Page-wide settings for custom selects.

use std::time::Duration;

use serde::Deserialize;

use crate::error::SettingsError;

/// Settings applied to every widget created by [`Page::init`](crate::Page::init).
///
/// Deserializes from JSON. Missing keys keep their defaults, and the short
/// keys `ms`, `two` and `adjust-width` are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectSettings {
    /// Delay before the width equalization pass runs, in milliseconds.
    #[serde(alias = "ms")]
    pub width_equalize_delay_ms: u64,

    /// With exactly two options, only show the option that is not selected.
    #[serde(alias = "two")]
    pub two_option_toggle: bool,

    /// Run the width equalization pass after initialization.
    #[serde(alias = "adjust-width")]
    pub adjust_width: bool,

    /// Opening a widget closes every other open widget on the page.
    pub single_open: bool,

    /// Space opens and closes the panel, in addition to Enter.
    pub space_activates: bool,
}

impl Default for SelectSettings {
    fn default() -> Self {
        Self {
            width_equalize_delay_ms: 20,
            two_option_toggle: true,
            adjust_width: true,
            single_open: false,
            space_activates: true,
        }
    }
}

impl SelectSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn width_equalize_delay(&self) -> Duration {
        Duration::from_millis(self.width_equalize_delay_ms)
    }

    pub fn width_equalize_delay_ms(mut self, ms: u64) -> Self {
        self.width_equalize_delay_ms = ms;
        self
    }

    pub fn two_option_toggle(mut self, enabled: bool) -> Self {
        self.two_option_toggle = enabled;
        self
    }

    pub fn adjust_width(mut self, enabled: bool) -> Self {
        self.adjust_width = enabled;
        self
    }

    pub fn single_open(mut self, enabled: bool) -> Self {
        self.single_open = enabled;
        self
    }

    pub fn space_activates(mut self, enabled: bool) -> Self {
        self.space_activates = enabled;
        self
    }
}
