use semver::Version;

use crate::runtime::Runtime;
use crate::version::parse_version;

pub const RUNTIME_VAR: &str = "RUNTIME_HEALTHCHECK_RUNTIME";
pub const INTERPRETER_VAR: &str = "RUNTIME_HEALTHCHECK_INTERPRETER";
pub const MIN_VERSION_VAR: &str = "RUNTIME_HEALTHCHECK_MIN_VERSION";

/// Values baked in when the probe is compiled for a particular image.
const BUILD_RUNTIME: Option<&str> = option_env!("RUNTIME_HEALTHCHECK_RUNTIME");
const BUILD_INTERPRETER: Option<&str> = option_env!("RUNTIME_HEALTHCHECK_INTERPRETER");
const BUILD_MIN_VERSION: Option<&str> = option_env!("RUNTIME_HEALTHCHECK_MIN_VERSION");

/// Probe configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub runtime: Runtime,
    pub interpreter: String,
    pub minimum: Version,
}

impl ProbeConfig {
    /// Defaults for `runtime`: its usual interpreter name and oldest supported release.
    pub fn for_runtime(runtime: Runtime) -> Self {
        Self {
            runtime,
            interpreter: runtime.default_interpreter().to_string(),
            minimum: runtime.default_minimum(),
        }
    }

    /// Load configuration from build-time values, overridden by the environment.
    ///
    /// - `RUNTIME_HEALTHCHECK_RUNTIME` (optional, default `python`) — `python` or `node`
    /// - `RUNTIME_HEALTHCHECK_INTERPRETER` (optional) — executable to run
    /// - `RUNTIME_HEALTHCHECK_MIN_VERSION` (optional) — lowest accepted version
    ///
    /// Nothing is required; unset or empty variables fall back to the runtime defaults.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a caller-supplied variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let setting = |name: &str, built: Option<&str>| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .or_else(|| built.filter(|v| !v.trim().is_empty()).map(str::to_string))
        };

        let runtime = match setting(RUNTIME_VAR, BUILD_RUNTIME) {
            Some(val) => val
                .parse::<Runtime>()
                .map_err(|e| format!("{RUNTIME_VAR}: {e}"))?,
            None => Runtime::Python,
        };

        let mut config = Self::for_runtime(runtime);

        if let Some(interpreter) = setting(INTERPRETER_VAR, BUILD_INTERPRETER) {
            config.interpreter = interpreter.trim().to_string();
        }

        if let Some(val) = setting(MIN_VERSION_VAR, BUILD_MIN_VERSION) {
            config.minimum =
                parse_version(&val).map_err(|e| format!("{MIN_VERSION_VAR}: {e}"))?;
        }

        Ok(config)
    }
}
