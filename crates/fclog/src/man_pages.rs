//! Man-page lookup through the external fc_shell tool.
//!
//! The lookup sits behind a trait so the enrichment stage can run against
//! an in-process stub in tests without spawning anything.

use std::collections::HashMap;
use std::env;
use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use tracing::warn;

use fclog_shared::man_text::parse_man_output;

/// Environment variable overriding the fc_shell executable.
pub const SHELL_ENV: &str = "FCLOG_SHELL";

const DEFAULT_SHELL: &str = "fc_shell";

/// Batch man-page lookup: code list in, code → cleaned text out.
pub trait ManPageSource {
    fn fetch(&self, codes: &[String]) -> Result<HashMap<String, String>>;
}

/// Production source driving `fc_shell -no_init -no_local_init`.
///
/// One invocation per fetch; the request script prints a start marker,
/// issues `man`, and prints an end marker per code so the combined output
/// can be split back apart reliably.
#[derive(Debug, Clone)]
pub struct FcShell {
    command: String,
}

impl FcShell {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Resolve the executable from `$FCLOG_SHELL`, defaulting to `fc_shell`.
    pub fn from_env() -> Self {
        Self::new(env::var(SHELL_ENV).unwrap_or_else(|_| DEFAULT_SHELL.to_string()))
    }

    /// One marker-delimited man request per code, ended by `exit`.
    fn request_script(codes: &[String]) -> String {
        let mut script = String::new();
        for code in codes {
            script.push_str(&format!("puts \"<<<CODE:{code}>>>\"\n"));
            script.push_str(&format!("man {code}\n"));
            script.push_str("puts \"<<<END>>>\"\n");
        }
        script.push_str("exit\n");
        script
    }
}

impl ManPageSource for FcShell {
    /// A failed invocation resolves no codes: the batch keeps going and
    /// Descriptions stay as they were.
    fn fetch(&self, codes: &[String]) -> Result<HashMap<String, String>> {
        let mut child = match Command::new(&self.command)
            .args(["-no_init", "-no_local_init"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                warn!("Failed to launch {}: {}", self.command, e);
                return Ok(HashMap::new());
            }
        };

        let script = Self::request_script(codes);
        child
            .stdin
            .as_mut()
            .context("fc_shell stdin handle missing")?
            .write_all(script.as_bytes())?;
        let output = child.wait_with_output()?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !output.status.success() {
            warn!(
                "{} exited with {}:\n{}{}",
                self.command,
                output.status,
                stdout,
                String::from_utf8_lossy(&output.stderr)
            );
            return Ok(HashMap::new());
        }

        Ok(parse_man_output(&stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_script_one_block_per_code() {
        let codes = vec!["FC-100".to_string(), "OPT-9".to_string()];
        let script = FcShell::request_script(&codes);
        assert_eq!(
            script,
            "puts \"<<<CODE:FC-100>>>\"\n\
             man FC-100\n\
             puts \"<<<END>>>\"\n\
             puts \"<<<CODE:OPT-9>>>\"\n\
             man OPT-9\n\
             puts \"<<<END>>>\"\n\
             exit\n"
        );
    }

    #[test]
    fn test_request_script_empty_codes_still_exits() {
        assert_eq!(FcShell::request_script(&[]), "exit\n");
    }

    #[test]
    fn test_missing_binary_resolves_nothing() {
        let shell = FcShell::new("/nonexistent/fc_shell");
        let pages = shell.fetch(&["FC-1".to_string()]).unwrap();
        assert!(pages.is_empty());
    }
}
