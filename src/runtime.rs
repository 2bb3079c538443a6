use std::fmt;
use std::str::FromStr;

use semver::Version;
use serde::Deserialize;
use tokio::process::Command;

use crate::error::CheckFailure;
use crate::version::parse_version;

const PYTHON_SNIPPET: &str = "import json, platform, sys; \
print(json.dumps({'implementation': platform.python_implementation(), \
'version': '%d.%d.%d' % tuple(sys.version_info[:3])}))";

const NODE_SNIPPET: &str =
    "console.log(JSON.stringify({implementation: 'node', version: process.versions.node}))";

/// Language runtime a container image is built around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runtime {
    Python,
    Node,
}

impl Runtime {
    /// Executable looked up on `PATH` when no interpreter is configured.
    pub fn default_interpreter(&self) -> &'static str {
        match self {
            Self::Python => "python3",
            Self::Node => "node",
        }
    }

    /// Oldest release the runtime images support.
    pub fn default_minimum(&self) -> Version {
        match self {
            Self::Python => Version::new(3, 11, 0),
            Self::Node => Version::new(18, 0, 0),
        }
    }

    /// Arguments that make the interpreter print a [`RuntimeReport`] as JSON.
    pub fn introspection_args(&self) -> [&'static str; 2] {
        match self {
            Self::Python => ["-c", PYTHON_SNIPPET],
            Self::Node => ["-e", NODE_SNIPPET],
        }
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Python => f.write_str("Python"),
            Self::Node => f.write_str("Node.js"),
        }
    }
}

impl FromStr for Runtime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "python" | "python3" => Ok(Self::Python),
            "node" | "nodejs" => Ok(Self::Node),
            other => Err(format!("unknown runtime {other:?} (expected python or node)")),
        }
    }
}

/// What the interpreter says about itself.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuntimeReport {
    pub implementation: String,
    pub version: String,
}

impl RuntimeReport {
    /// Parse the interpreter's stdout. Only the last non-empty line is read, so
    /// banners or warnings printed ahead of the report are tolerated.
    pub fn from_stdout(stdout: &str) -> Result<Self, CheckFailure> {
        let line = stdout
            .lines()
            .map(str::trim)
            .rev()
            .find(|l| !l.is_empty())
            .unwrap_or("");
        Ok(serde_json::from_str(line)?)
    }

    pub fn parsed_version(&self) -> Result<Version, CheckFailure> {
        parse_version(&self.version)
    }
}

/// Run `interpreter` and ask it for its version.
pub async fn introspect(runtime: Runtime, interpreter: &str) -> Result<RuntimeReport, CheckFailure> {
    tracing::debug!(%runtime, interpreter, "querying runtime version");

    let output = Command::new(interpreter)
        .args(runtime.introspection_args())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|source| CheckFailure::Spawn {
            interpreter: interpreter.to_string(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        tracing::warn!(interpreter, status = %output.status, "interpreter failed");
        return Err(CheckFailure::Interpreter {
            interpreter: interpreter.to_string(),
            status: output.status,
            stderr,
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let report = RuntimeReport::from_stdout(&stdout)?;
    tracing::debug!(
        implementation = %report.implementation,
        version = %report.version,
        "runtime reported"
    );
    Ok(report)
}
