use anyhow::Result;
use log::warn;

use crate::types::JobFailure;
use crate::utils::Colors;

/// Report render failures after the barrier. Strict: the first failure becomes the error.
/// Otherwise every failure is logged and the build goes on.
pub fn check_for_render_failures(
    failures: &[JobFailure],
    strict: bool,
    total: usize,
) -> Result<()> {
    if failures.is_empty() {
        return Ok(());
    }
    for f in failures {
        warn!("render failed: {}", f);
    }
    let summary = format!(
        "{} | {}",
        Colors::colorize(
            Colors::OK,
            &format!("Rendered: {}", total.saturating_sub(failures.len()))
        ),
        Colors::colorize(Colors::FAILED, &format!("Failed: {}", failures.len()))
    );
    if strict {
        return Err(anyhow::anyhow!(
            "{} of {} icons failed to render (first: {}); {}",
            failures.len(),
            total,
            failures[0],
            summary
        ));
    }
    warn!(
        "{}; outputs reflect whatever the failed jobs left on disk",
        summary
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn failure(target: &str) -> JobFailure {
        JobFailure {
            category: "Compute".to_string(),
            target: target.to_string(),
            source: PathBuf::from(format!("official/compute/{target}.png")),
            error: "boom".to_string(),
        }
    }

    #[test]
    fn test_no_failures_ok() {
        assert!(check_for_render_failures(&[], true, 3).is_ok());
    }

    #[test]
    fn test_non_strict_continues() {
        assert!(check_for_render_failures(&[failure("GKE")], false, 3).is_ok());
    }

    #[test]
    fn test_strict_reports_first_failure() {
        let err = check_for_render_failures(&[failure("GKE"), failure("Run")], true, 3)
            .unwrap_err()
            .to_string();
        assert!(err.starts_with("2 of 3 icons failed"));
        assert!(err.contains("Compute/GKE"));
    }
}
