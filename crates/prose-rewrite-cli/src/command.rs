use std::io::Write;
use std::process::{Command, Stdio};

use prose_rewrite_engine::{Rewriter, ServiceError};

/// Environment variable carrying the instructions to the rewrite command.
pub const INSTRUCTIONS_ENV: &str = "PROSE_REWRITE_INSTRUCTIONS";

/// Runs a shell command as the rewriter: target text on stdin, instructions
/// in [`INSTRUCTIONS_ENV`], replacement on stdout.
pub struct CommandRewriter {
    command: String,
}

impl CommandRewriter {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    fn run(&self, text: &str, instructions: &str) -> Result<String, ServiceError> {
        log::debug!("running rewrite command: {}", self.command);

        let mut child = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .env(INSTRUCTIONS_ENV, instructions)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ServiceError::new(format!("failed to start `{}`: {e}", self.command)))?;

        let stdin = child.stdin.take();
        let output = std::thread::scope(|s| {
            // The command may fill stdout before it has read all of stdin.
            s.spawn(move || {
                if let Some(mut stdin) = stdin
                    && let Err(e) = stdin.write_all(text.as_bytes())
                {
                    log::debug!("rewrite command closed stdin early: {e}");
                }
            });
            child.wait_with_output()
        })
        .map_err(|e| ServiceError::new(format!("failed to wait for `{}`: {e}", self.command)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("`{}` exited with {}", self.command, output.status)
            } else {
                stderr
            };
            return Err(match output.status.code().and_then(|c| u16::try_from(c).ok()) {
                Some(code) => ServiceError::with_status(code, message),
                None => ServiceError::new(message),
            });
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| ServiceError::new("rewrite command produced invalid UTF-8"))?;
        // Commands conventionally end their output with a newline that isn't
        // part of the replacement.
        let replacement = stdout.strip_suffix('\n').unwrap_or(&stdout);
        if replacement.trim().is_empty() {
            return Err(ServiceError::empty_result());
        }
        Ok(replacement.to_string())
    }
}

impl Rewriter for CommandRewriter {
    async fn rewrite(&self, text: &str, instructions: &str) -> Result<String, ServiceError> {
        self.run(text, instructions)
    }
}
