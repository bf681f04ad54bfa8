use monetization_core::{ActivityLogger, MonetizationResult};

/// Forwards component log lines to `tracing`
#[derive(Debug, Clone)]
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl ActivityLogger for TracingLogger {
    fn log_info(&self, message: &str) -> MonetizationResult<()> {
        tracing::info!(component = self.component, "{}", message);
        Ok(())
    }

    fn log_error(&self, message: &str) -> MonetizationResult<()> {
        tracing::error!(component = self.component, "{}", message);
        Ok(())
    }
}
