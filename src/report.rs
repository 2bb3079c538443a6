use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::CheckFailure;

/// Render the status line for an outcome, without the trailing newline.
///
/// Failure descriptions are folded onto one line; interpreter stderr in
/// particular often spans several.
pub fn render(outcome: &Result<(), CheckFailure>) -> String {
    match outcome {
        Ok(()) => "OK".to_string(),
        Err(failure) => {
            let description = failure
                .to_string()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            if description.is_empty() {
                "ERROR: unknown failure".to_string()
            } else {
                format!("ERROR: {description}")
            }
        }
    }
}

/// Write the status line and flush.
pub async fn write_outcome<W>(out: &mut W, outcome: &Result<(), CheckFailure>) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let line = render(outcome);
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}
