//! Process-backed MeCab analyzer session.

use std::io;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use encoding_rs::Encoding;
use tracing::{debug, warn};

use super::classify;
use super::config::{AnalyzerConfig, Platform};
use super::error::AdapterError;
use super::exchange;
use super::state::ProcessState;
use super::transport::StdioTransport;
use crate::morpheme::Morpheme;

/// Log target for adapter operations.
pub(super) const ADAPTER_TARGET: &str = "hanseg_host::adapter";

/// Flag appended to the command line to request dictionary metadata.
const DICTIONARY_INFO_FLAG: &str = "-D";

/// Korean MeCab analyzer driven over its standard streams.
///
/// One instance owns at most one external process. All exchanges are
/// synchronous and blocking with no timeout; the only way to abort an
/// in-flight exchange is [`MecabAnalyzer::dispose_session`], after which
/// the session must be started again.
pub struct MecabAnalyzer {
    config: AnalyzerConfig,
    state: ProcessState,
}

impl MecabAnalyzer {
    /// Creates an unstarted session for the current platform rooted at
    /// `support_dir`.
    #[must_use]
    pub fn new(support_dir: impl Into<PathBuf>) -> Self {
        Self::with_config(AnalyzerConfig::for_platform(Platform::current(), support_dir))
    }

    /// Creates an unstarted session from an explicit configuration.
    #[must_use]
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            config,
            state: ProcessState::NotStarted,
        }
    }

    /// Returns the resolved spawn configuration.
    #[must_use]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Whether a production process is currently running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.state, ProcessState::Running { .. })
    }

    /// Spawns the analyzer and discovers its text encoding.
    ///
    /// Runs the binary once with the dictionary info flag, reading its
    /// entire output until exit, and scans the dump for a `charset:`
    /// declaration. Only then is the long-lived exchange process spawned
    /// with piped stdio. Any failure leaves the session unstarted with no
    /// partially-started process retained. A process from a previous
    /// start is terminated first.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::BinaryNotFound`] or
    /// [`AdapterError::SpawnFailed`] when the binary cannot be run,
    /// [`AdapterError::CharsetNotFound`] when the dump carries no charset
    /// declaration, and [`AdapterError::UnsupportedCharset`] when the
    /// declared label is not a recognised encoding.
    pub fn start_session(&mut self) -> Result<(), AdapterError> {
        self.dispose_session();
        self.ensure_executable_mode()?;

        let dump = self.read_dictionary_info()?;
        let Some(label) = parse_charset(&dump) else {
            return Err(AdapterError::CharsetNotFound { diagnostics: dump });
        };
        let encoding = Encoding::for_label(label.as_bytes()).ok_or_else(|| {
            AdapterError::UnsupportedCharset {
                label: label.to_owned(),
            }
        })?;

        debug!(
            target: ADAPTER_TARGET,
            charset = encoding.name(),
            "dictionary charset discovered"
        );

        let (child, transport) = self.spawn_piped()?;
        self.state = ProcessState::Running {
            child,
            transport,
            encoding,
        };
        Ok(())
    }

    /// Terminates the analyzer process if one is running.
    ///
    /// Safe to call repeatedly and without a prior successful
    /// [`MecabAnalyzer::start_session`]; never fails.
    pub fn dispose_session(&mut self) {
        if let ProcessState::Running { mut child, .. } =
            std::mem::replace(&mut self.state, ProcessState::Stopped)
        {
            if let Err(error) = child.kill() {
                warn!(
                    target: ADAPTER_TARGET,
                    error = %error,
                    "failed to kill analyzer process"
                );
            } else {
                let _ = child.wait();
            }
        }
    }

    /// Segments `text` into filtered morphemes in output order.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::NotStarted`] without a running session;
    /// otherwise propagates exchange failures, which leave the session
    /// unusable until disposed and restarted.
    pub fn morphemes(&mut self, text: &str) -> Result<Vec<Morpheme>, AdapterError> {
        let ProcessState::Running {
            transport,
            encoding,
            ..
        } = &mut self.state
        else {
            return Err(AdapterError::NotStarted);
        };

        let response = exchange::round_trip(transport, *encoding, text)?;
        Ok(classify::morphemes_from_response(&response))
    }

    /// Grants run permission on the analyzer binary.
    ///
    /// The bundled binary ships without an executable bit on unix
    /// platforms.
    fn ensure_executable_mode(&self) -> Result<(), AdapterError> {
        #[cfg(unix)]
        {
            use std::fs;
            use std::os::unix::fs::PermissionsExt;

            fs::set_permissions(&self.config.command, fs::Permissions::from_mode(0o755)).map_err(
                |source| AdapterError::SpawnFailed {
                    message: format!(
                        "failed to mark {} executable",
                        self.config.command.display()
                    ),
                    source,
                },
            )?;
        }
        Ok(())
    }

    /// Builds the base command with library search paths scoped to the
    /// spawn, so no process-global environment outlives the session.
    fn base_command(&self) -> Command {
        let mut command = Command::new(&self.config.command);
        command
            .args(&self.config.args)
            .env("LD_LIBRARY_PATH", &self.config.support_dir)
            .env("DYLD_LIBRARY_PATH", &self.config.support_dir);
        command
    }

    /// Runs the analyzer in dictionary info mode and captures its output.
    ///
    /// Both streams are captured so that stray loader or dictionary
    /// warnings end up in the diagnostics attached to a failed scan.
    fn read_dictionary_info(&self) -> Result<String, AdapterError> {
        debug!(
            target: ADAPTER_TARGET,
            command = %self.config.command.display(),
            "requesting dictionary info"
        );

        let output = self
            .base_command()
            .arg(DICTIONARY_INFO_FLAG)
            .stdin(Stdio::null())
            .output()
            .map_err(|error| self.spawn_error(error))?;

        let mut dump = String::from_utf8_lossy(&output.stdout).into_owned();
        dump.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(dump)
    }

    /// Spawns the long-lived exchange process with piped stdio.
    ///
    /// Stderr is discarded rather than piped so analyzer warnings cannot
    /// interleave with the framed response stream.
    fn spawn_piped(&self) -> Result<(Child, StdioTransport), AdapterError> {
        let mut child = self
            .base_command()
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|error| self.spawn_error(error))?;

        let stdin = child.stdin.take().ok_or_else(|| AdapterError::SpawnFailed {
            message: "failed to capture stdin".to_owned(),
            source: io::Error::other("no stdin"),
        })?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| AdapterError::SpawnFailed {
                message: "failed to capture stdout".to_owned(),
                source: io::Error::other("no stdout"),
            })?;

        debug!(
            target: ADAPTER_TARGET,
            pid = child.id(),
            "analyzer process spawned"
        );

        Ok((child, StdioTransport::new(stdout, stdin)))
    }

    /// Maps a spawn failure onto the adapter error taxonomy.
    fn spawn_error(&self, source: io::Error) -> AdapterError {
        if source.kind() == io::ErrorKind::NotFound {
            AdapterError::BinaryNotFound {
                command: self.config.command.display().to_string(),
                source,
            }
        } else {
            AdapterError::SpawnFailed {
                message: format!("failed to start {}", self.config.command.display()),
                source,
            }
        }
    }
}

impl Drop for MecabAnalyzer {
    fn drop(&mut self) {
        self.dispose_session();
    }
}

impl std::fmt::Debug for MecabAnalyzer {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &self.state {
            ProcessState::NotStarted => "not_started".to_owned(),
            ProcessState::Running { child, encoding, .. } => {
                format!("running (pid: {}, charset: {})", child.id(), encoding.name())
            }
            ProcessState::Stopped => "stopped".to_owned(),
        };
        formatter
            .debug_struct("MecabAnalyzer")
            .field("command", &self.config.command)
            .field("state", &state)
            .finish()
    }
}

/// Scans a dictionary info dump for its `charset:` declaration.
fn parse_charset(dump: &str) -> Option<&str> {
    dump.lines()
        .find_map(|line| line.strip_prefix("charset:"))
        .map(str::trim)
        .filter(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn finds_charset_declaration_in_dump() {
        let dump = "filename:\t/opt/mecabko/dic/sys.dic\nversion:\t102\ncharset:\tUTF-8\n";

        assert_eq!(parse_charset(dump), Some("UTF-8"));
    }

    #[rstest]
    #[case("")]
    #[case("filename:\t/opt/mecabko/dic/sys.dic\n")]
    #[case("charset:\t\n")]
    fn rejects_dump_without_charset(#[case] dump: &str) {
        assert_eq!(parse_charset(dump), None);
    }

    #[rstest]
    fn accepts_space_separated_charset() {
        assert_eq!(parse_charset("charset: euc-kr\n"), Some("euc-kr"));
    }
}
