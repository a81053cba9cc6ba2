//! Trace logging for condition evaluation
//!
//! Conditions write human-readable trace lines through an [`AutomationLogger`].
//! The default implementation forwards to `tracing`; the binary installs the
//! subscriber with [`init`].

use std::sync::{Arc, Mutex};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Collaborator receiving single-line trace messages.
///
/// Implementations must not panic; a failing sink drops the line.
pub trait AutomationLogger: Send + Sync {
    fn log(&self, message: &str);
}

/// Forwards trace lines to `tracing` under the `automation` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl AutomationLogger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!(target: "automation", "{}", message);
    }
}

/// Keeps trace lines in memory, for the operator console and tests
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl AutomationLogger for MemoryLogger {
    fn log(&self, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(message.to_string());
        }
    }
}

pub fn default_logger() -> Arc<dyn AutomationLogger> {
    Arc::new(TracingLogger)
}

/// Install the global tracing subscriber
pub fn init(config: &Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_ansi(config.log_ansi))
        .try_init()?;

    Ok(())
}
