use semver::Version;

/// Every way a health check can fail.
///
/// All variants are reported the same way: `ERROR: <Display>` on stdout and
/// exit code `1`.
#[derive(Debug, thiserror::Error)]
pub enum CheckFailure {
    #[error("{runtime} version {observed} is too old, need >= {minimum}")]
    BelowMinimum {
        runtime: String,
        observed: Version,
        minimum: Version,
    },
    #[error("cannot launch {interpreter}: {source}")]
    Spawn {
        interpreter: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{interpreter} exited with {status}: {stderr}")]
    Interpreter {
        interpreter: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("unreadable version report: {0}")]
    Report(#[from] serde_json::Error),
    #[error("invalid version {value:?}: {source}")]
    Version {
        value: String,
        #[source]
        source: semver::Error,
    },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("{0}")]
    Fault(String),
}
