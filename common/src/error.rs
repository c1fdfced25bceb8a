use std::backtrace::BacktraceStatus;

use anyhow::Error;
use simplelog::error;

pub struct FancyError();

impl FancyError {
    pub fn print_fancy(error: &Error, critical: bool) {
        Self::lines(error, critical)
            .iter()
            .for_each(|line| error!("{}", line));
    }

    #[must_use]
    pub fn lines(error: &Error, critical: bool) -> Vec<String> {
        let mut lines = vec![if critical {
            "A lookup failed and the caller cannot continue without its result.".to_string()
        } else {
            "A lookup failed, but the caller can continue. Results may be incomplete.".to_string()
        }];

        lines.push(format!("Error: {error}"));
        error
            .chain()
            .skip(1)
            .for_each(|cause| lines.push(format!("    Caused by: {cause}")));

        match error.backtrace().status() {
            BacktraceStatus::Captured => {
                lines.push("Backtrace:".to_string());
                format!("{}", error.backtrace())
                    .lines()
                    .for_each(|line| lines.push(line.to_string()));
            }
            _ => {
                lines.push("Backtrace is not available. Ensure you run the program with `RUST_BACKTRACE=1` to enable backtraces.".to_string());
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{Context, anyhow};

    use super::FancyError;

    #[test]
    fn cause_chain_is_listed_in_order() {
        let error = Err::<(), _>(anyhow!("connection refused"))
            .context("Failed to list nodes")
            .unwrap_err();

        let lines = FancyError::lines(&error, false);
        assert!(lines[0].contains("can continue"));
        assert_eq!(lines[1], "Error: Failed to list nodes");
        assert_eq!(lines[2], "    Caused by: connection refused");
    }

    #[test]
    fn critical_errors_use_the_critical_banner() {
        let lines = FancyError::lines(&anyhow!("boom"), true);
        assert!(lines[0].contains("cannot continue"));
    }
}
