//! Configuration for spawning the analyzer process.

use std::path::PathBuf;

/// Platform flavour used to resolve the analyzer executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Windows; the bundled binary carries an `.exe` suffix.
    Windows,
    /// macOS; the bundled binary carries no suffix.
    MacOs,
    /// Any other unix; the bundled binary carries a `.lin` suffix.
    OtherUnix,
}

impl Platform {
    /// Returns the flavour this library was compiled for.
    ///
    /// This is the only place ambient platform facts are consulted;
    /// resolution itself is a pure function of the flavour.
    #[must_use]
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::OtherUnix
        }
    }

    /// Analyzer executable file name for this flavour.
    #[must_use]
    pub fn executable_name(self) -> &'static str {
        match self {
            Self::Windows => "mecab.exe",
            Self::MacOs => "mecab",
            Self::OtherUnix => "mecab.lin",
        }
    }
}

/// Configuration for spawning an analyzer process.
///
/// Immutable once resolved; the exchange and classification layers
/// depend on the exact output template selected here.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// The executable path.
    pub command: PathBuf,
    /// Arguments passed on every invocation.
    pub args: Vec<String>,
    /// Directory holding the binary, dictionaries and shared libraries.
    pub support_dir: PathBuf,
}

impl AnalyzerConfig {
    /// Resolves the command for `platform` rooted at `support_dir`.
    ///
    /// The argument set selects the bundled `mecab-ko-dic` dictionary and
    /// an output template of `<surface>\t<primary tag>` per node,
    /// terminated by a carriage return, with a bare newline per sentence
    /// terminator.
    #[must_use]
    pub fn for_platform(platform: Platform, support_dir: impl Into<PathBuf>) -> Self {
        let support_dir = support_dir.into();
        let command = support_dir.join(platform.executable_name());
        let dictionary = support_dir.join("dic").join("mecab-ko-dic");
        let args = vec![
            "-d".to_owned(),
            dictionary.to_string_lossy().into_owned(),
            "--node-format=%m\t%f[0]\r".to_owned(),
            "--eos-format=\n".to_owned(),
        ];
        Self {
            command,
            args,
            support_dir,
        }
    }
}
