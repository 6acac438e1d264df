//! Shell tuning embedded from `shell.toml` at build time.

use std::{sync::OnceLock, time::Duration};

use leptos::logging;
use serde::Deserialize;
use thiserror::Error;

include!(concat!(env!("OUT_DIR"), "/shell_config_generated.rs"));

#[derive(Debug, Error)]
pub enum ShellConfigError {
    #[error("shell config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("shell config schema mismatch: expected 1 found {0}")]
    Schema(u32),
    #[error("shell config field `{0}` must be greater than zero")]
    Zero(&'static str),
}

#[derive(Debug, Deserialize)]
struct RawShellConfig {
    schema_version: u32,
    taskbar: RawTaskbar,
    timers: RawTimers,
    monitor: RawMonitor,
}

#[derive(Debug, Deserialize)]
struct RawTaskbar {
    height_px: u32,
}

#[derive(Debug, Deserialize)]
struct RawTimers {
    clock_tick_ms: u32,
    monitor_refresh_ms: u32,
    process_refresh_ms: u32,
}

#[derive(Debug, Deserialize)]
struct RawMonitor {
    history_len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfig {
    /// Height reserved at the bottom of the screen; maximized windows stop above it.
    pub taskbar_height_px: u32,
    pub clock_tick_ms: u32,
    pub monitor_refresh_ms: u32,
    pub process_refresh_ms: u32,
    /// Number of monitor samples kept for the history strip.
    pub monitor_history_len: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            taskbar_height_px: 56,
            clock_tick_ms: 1000,
            monitor_refresh_ms: 2000,
            process_refresh_ms: 3000,
            monitor_history_len: 20,
        }
    }
}

impl ShellConfig {
    /// Parses and validates the generated JSON form of `shell.toml`.
    pub fn from_json(raw: &str) -> Result<Self, ShellConfigError> {
        let raw: RawShellConfig = serde_json::from_str(raw)?;
        if raw.schema_version != 1 {
            return Err(ShellConfigError::Schema(raw.schema_version));
        }

        let config = Self {
            taskbar_height_px: raw.taskbar.height_px,
            clock_tick_ms: raw.timers.clock_tick_ms,
            monitor_refresh_ms: raw.timers.monitor_refresh_ms,
            process_refresh_ms: raw.timers.process_refresh_ms,
            monitor_history_len: raw.monitor.history_len,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ShellConfigError> {
        let checks = [
            ("timers.clock_tick_ms", self.clock_tick_ms as usize),
            ("timers.monitor_refresh_ms", self.monitor_refresh_ms as usize),
            ("timers.process_refresh_ms", self.process_refresh_ms as usize),
            ("monitor.history_len", self.monitor_history_len),
        ];
        match checks.into_iter().find(|(_, value)| *value == 0) {
            Some((field, _)) => Err(ShellConfigError::Zero(field)),
            None => Ok(()),
        }
    }

    pub fn clock_tick(&self) -> Duration {
        Duration::from_millis(self.clock_tick_ms.into())
    }

    pub fn monitor_refresh(&self) -> Duration {
        Duration::from_millis(self.monitor_refresh_ms.into())
    }

    pub fn process_refresh(&self) -> Duration {
        Duration::from_millis(self.process_refresh_ms.into())
    }
}

/// Returns the embedded shell configuration, falling back to defaults when it is rejected.
pub fn shell_config() -> &'static ShellConfig {
    static CONFIG: OnceLock<ShellConfig> = OnceLock::new();
    CONFIG.get_or_init(|| match ShellConfig::from_json(SHELL_CONFIG_JSON) {
        Ok(config) => config,
        Err(err) => {
            logging::warn!("shell config rejected, using defaults: {err}");
            ShellConfig::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn raw(schema: u32, clock: u32, history: usize) -> String {
        format!(
            r#"{{
                "schema_version": {schema},
                "taskbar": {{ "height_px": 48 }},
                "timers": {{ "clock_tick_ms": {clock}, "monitor_refresh_ms": 2500, "process_refresh_ms": 4000 }},
                "monitor": {{ "history_len": {history} }}
            }}"#
        )
    }

    #[test]
    fn embedded_config_matches_defaults() {
        assert_eq!(*shell_config(), ShellConfig::default());
    }

    #[test]
    fn parses_nested_sections() {
        let config = ShellConfig::from_json(&raw(1, 500, 10)).unwrap();
        assert_eq!(
            config,
            ShellConfig {
                taskbar_height_px: 48,
                clock_tick_ms: 500,
                monitor_refresh_ms: 2500,
                process_refresh_ms: 4000,
                monitor_history_len: 10,
            }
        );
        assert_eq!(config.process_refresh(), Duration::from_secs(4));
    }

    #[test]
    fn rejects_zero_intervals_and_history() {
        assert!(matches!(
            ShellConfig::from_json(&raw(1, 0, 10)),
            Err(ShellConfigError::Zero("timers.clock_tick_ms"))
        ));
        assert!(matches!(
            ShellConfig::from_json(&raw(1, 1000, 0)),
            Err(ShellConfigError::Zero("monitor.history_len"))
        ));
    }

    #[test]
    fn rejects_unknown_schema_and_garbage() {
        assert!(matches!(
            ShellConfig::from_json(&raw(2, 1000, 20)),
            Err(ShellConfigError::Schema(2))
        ));
        assert!(matches!(
            ShellConfig::from_json("not json"),
            Err(ShellConfigError::Parse(_))
        ));
    }
}
