use crate::domain::StencilConfig;
use crate::ports::CommandRunner;

/// Application context holding dependencies for command execution.
pub struct AppContext<R: CommandRunner> {
    runner: R,
    config: StencilConfig,
}

impl<R: CommandRunner> AppContext<R> {
    /// Create a new application context.
    pub fn new(runner: R, config: StencilConfig) -> Self {
        Self { runner, config }
    }

    /// Get a reference to the command runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &StencilConfig {
        &self.config
    }
}
