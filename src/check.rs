use std::any::Any;
use std::future::Future;
use std::process::ExitCode;

use tokio::io::AsyncWrite;
use tokio::task::{JoinError, JoinHandle};

use crate::config::ProbeConfig;
use crate::error::CheckFailure;
use crate::report;
use crate::runtime::{introspect, RuntimeReport};
use crate::version::meets_minimum;

/// Final verdict handed to the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    Healthy,
    Unhealthy,
}

impl Health {
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Healthy => 0,
            Self::Unhealthy => 1,
        }
    }
}

impl From<Health> for ExitCode {
    fn from(health: Health) -> Self {
        ExitCode::from(health.exit_code())
    }
}

/// Run the configured interpreter, compare its version and write the status line.
pub async fn run<W>(config: &ProbeConfig, out: &mut W) -> Health
where
    W: AsyncWrite + Unpin,
{
    let runtime = config.runtime;
    let interpreter = config.interpreter.clone();
    let outcome = evaluate(config, async move { introspect(runtime, &interpreter).await }).await;
    conclude(outcome.map(|_| ()), out).await
}

/// Drive `introspection` and judge the reported version against `config.minimum`.
///
/// The introspection runs on its own task, so a panic inside it comes back as
/// [`CheckFailure::Fault`] carrying the panic message instead of unwinding
/// through the caller. Dropping the returned future aborts that task, which
/// kills an interpreter that is still running.
pub async fn evaluate<F>(config: &ProbeConfig, introspection: F) -> Result<RuntimeReport, CheckFailure>
where
    F: Future<Output = Result<RuntimeReport, CheckFailure>> + Send + 'static,
{
    let mut task = AbortOnDrop(tokio::spawn(introspection));
    let report = (&mut task.0).await.map_err(fault)??;
    let observed = report.parsed_version()?;

    if !meets_minimum(&observed, &config.minimum) {
        return Err(CheckFailure::BelowMinimum {
            runtime: config.runtime.to_string(),
            observed,
            minimum: config.minimum.clone(),
        });
    }

    tracing::debug!(%observed, minimum = %config.minimum, "runtime version accepted");
    Ok(report)
}

/// Report `outcome` on `out` and map it to a [`Health`].
///
/// A failed write does not change the verdict; the exit code still carries it.
pub async fn conclude<W>(outcome: Result<(), CheckFailure>, out: &mut W) -> Health
where
    W: AsyncWrite + Unpin,
{
    if let Err(failure) = &outcome {
        tracing::warn!(error = %failure, "health check failed");
    }

    if let Err(e) = report::write_outcome(out, &outcome).await {
        tracing::warn!(error = %e, "cannot write status line");
    }

    match outcome {
        Ok(()) => Health::Healthy,
        Err(_) => Health::Unhealthy,
    }
}

struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

fn fault(err: JoinError) -> CheckFailure {
    if err.is_panic() {
        CheckFailure::Fault(panic_message(err.into_panic()))
    } else {
        CheckFailure::Fault(err.to_string())
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "introspection panicked".to_string()
    }
}
