//! Command line and environment configuration.

use numspiral_core::RenderOptions;

use crate::error::CliError;

/// Overrides the empty-cell marker.
pub const MARKER_VAR: &str = "NUMSPIRAL_MARKER";

/// Overrides the token separator.
pub const SEPARATOR_VAR: &str = "NUMSPIRAL_SEPARATOR";

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Run(CliConfig),
}

/// Settings for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Requested cell count, validated by the layout
    pub count: i64,

    /// Output tokens
    pub render: RenderOptions,
}

impl CliConfig {
    /// Parse process arguments and environment variables.
    pub fn from_env() -> Result<Invocation, CliError> {
        Self::from_args_and_env(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Parse `args` (without the program name), reading variables through `env`.
    pub fn from_args_and_env<I, F>(args: I, env: F) -> Result<Invocation, CliError>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut count = None;

        for arg in args {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Invocation::Help),
                _ if count.is_some() => {
                    return Err(CliError::Usage(format!("unexpected argument {:?}", arg)));
                }
                _ => {
                    let n = arg
                        .parse::<i64>()
                        .map_err(|_| CliError::InvalidCount(arg.clone()))?;
                    count = Some(n);
                }
            }
        }

        let count = count.ok_or_else(|| CliError::Usage("missing <count> argument".to_string()))?;

        let mut render = RenderOptions::default();
        if let Some(marker) = env(MARKER_VAR) {
            render.marker = marker;
        }
        if let Some(separator) = env(SEPARATOR_VAR) {
            render.separator = separator;
        }

        Ok(Invocation::Run(CliConfig { count, render }))
    }
}
