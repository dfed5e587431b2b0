//! Normalizer running as a separate process.
//!
//! The process receives one utterance per line on stdin and must answer with
//! exactly one line on stdout for each of them. It stays alive for the whole
//! run, so model loading happens once.

use super::Normalizer;
use normeval_core::{EvalError, Result};
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

/// Line-oriented external normalizer process.
pub struct CommandNormalizer {
    program: String,
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    line: String,
}

impl CommandNormalizer {
    /// Start `program` with `args`.
    ///
    /// The process inherits stderr, so its own diagnostics stay visible.
    pub fn spawn(program: &str, args: &[String]) -> Result<Self> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| EvalError::Normalizer(format!("Failed to start {}: {}", program, e)))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| EvalError::Normalizer(format!("No stdin for {}", program)))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| EvalError::Normalizer(format!("No stdout for {}", program)))?;

        log::info!("Started normalizer {} (pid {})", program, child.id());

        Ok(Self {
            program: program.to_string(),
            child,
            stdin,
            stdout: BufReader::new(stdout),
            line: String::new(),
        })
    }
}

impl Normalizer for CommandNormalizer {
    fn normalize(&mut self, text: &str) -> Result<String> {
        if text.contains('\n') {
            return Err(EvalError::Normalizer(format!(
                "Can't send multi-line text to {}: [{}]",
                self.program, text
            )));
        }

        writeln!(self.stdin, "{}", text)
            .and_then(|_| self.stdin.flush())
            .map_err(|e| EvalError::Normalizer(format!("Failed to write to {}: {}", self.program, e)))?;

        self.line.clear();
        let read = self
            .stdout
            .read_line(&mut self.line)
            .map_err(|e| EvalError::Normalizer(format!("Failed to read from {}: {}", self.program, e)))?;
        if read == 0 {
            return Err(EvalError::Normalizer(format!(
                "{} exited before answering [{}]",
                self.program, text
            )));
        }

        Ok(self.line.trim_end_matches(['\n', '\r']).to_string())
    }
}

impl Drop for CommandNormalizer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_echo_process() {
        let mut normalizer = CommandNormalizer::spawn("cat", &[]).unwrap();
        assert_eq!(normalizer.normalize("two apples").unwrap(), "two apples");
        assert_eq!(normalizer.normalize("three").unwrap(), "three");
    }

    #[test]
    fn test_missing_program() {
        let err = CommandNormalizer::spawn("normeval-no-such-normalizer", &[]).err().unwrap();
        assert!(err.to_string().contains("normeval-no-such-normalizer"));
    }

    #[test]
    fn test_multi_line_rejected() {
        let mut normalizer = CommandNormalizer::spawn("cat", &[]).unwrap();
        assert!(normalizer.normalize("a\nb").is_err());
    }
}
