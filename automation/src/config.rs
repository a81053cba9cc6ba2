use std::env;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Filter directive for the tracing subscriber (e.g. "info", "crm_automation=debug")
    pub log_filter: String,
    /// Emit ANSI colours in log output
    pub log_ansi: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            log_ansi: true,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        Ok(Config {
            log_filter: env::var("AUTOMATION_LOG").unwrap_or(defaults.log_filter),
            log_ansi: match env::var("AUTOMATION_LOG_ANSI") {
                Ok(value) => value.parse().map_err(|_| {
                    anyhow::anyhow!("AUTOMATION_LOG_ANSI must be 'true' or 'false', got '{}'", value)
                })?,
                Err(_) => defaults.log_ansi,
            },
        })
    }
}
