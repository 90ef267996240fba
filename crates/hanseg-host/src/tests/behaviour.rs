//! Behaviour tests for the exchange protocol and session lifecycle.

use encoding_rs::UTF_8;
use rstest::rstest;

use super::support::ScriptedTransport;
use crate::adapter::{
    AdapterError, AnalyzerConfig, MecabAnalyzer, Platform, TransportError, classify, exchange,
};
use crate::{Analyzer, UNKNOWN_TAG};

#[rstest]
fn writes_framed_request_and_reassembles_response() {
    let mut transport = ScriptedTransport::replaying(["안녕\tXX\r하\tXX\r\n"]);

    let blob = exchange::round_trip(&mut transport, UTF_8, "안녕하")
        .expect("round trip failed");

    assert_eq!(transport.sent(), ["안녕하\n".as_bytes().to_vec()]);
    assert_eq!(blob, "안녕\tXX\r하\tXX");
}

#[rstest]
fn control_characters_never_reach_the_transport() {
    let mut transport = ScriptedTransport::replaying(["ok\n"]);

    exchange::round_trip(&mut transport, UTF_8, "안\u{1}녕\u{9b}\n하")
        .expect("round trip failed");

    assert_eq!(transport.sent(), ["안녕하\n".as_bytes().to_vec()]);
}

#[rstest]
fn filters_and_orders_the_greeting_scenario() {
    // Stubbed analyzer output for "안녕하세요 제이름은 발렌타인입니다".
    let response = "안녕\tXX\r하\tXX\r세요\tEF\r제\tXX\r이름\tXX\r은\tJKV\r입니다\tXX\n";
    let mut transport = ScriptedTransport::replaying([response]);

    let blob = exchange::round_trip(&mut transport, UTF_8, "안녕하세요 제이름은 발렌타인입니다")
        .expect("round trip failed");
    let surfaces: Vec<String> = classify::morphemes_from_response(&blob)
        .into_iter()
        .map(|morpheme| morpheme.surface)
        .collect();

    assert_eq!(surfaces, ["안녕", "하", "제", "이름", "입니다"]);
}

#[rstest]
fn identical_requests_produce_identical_output() {
    let response = "안녕\tXX\r하\tXX\n";
    let run = || {
        let mut transport = ScriptedTransport::replaying([response]);
        let blob = exchange::round_trip(&mut transport, UTF_8, "안녕하")
            .expect("round trip failed");
        classify::morphemes_from_response(&blob)
    };

    assert_eq!(run(), run());
}

#[rstest]
fn closed_pipe_surfaces_as_transport_error() {
    let mut transport = ScriptedTransport::replaying(Vec::<Vec<u8>>::new());

    let result = exchange::round_trip(&mut transport, UTF_8, "안녕");

    assert!(matches!(
        result,
        Err(AdapterError::Transport(TransportError::ClosedPipe))
    ));
}

#[rstest]
fn tagless_record_defaults_all_derived_fields() {
    let mut transport = ScriptedTransport::replaying(["이름\n"]);

    let blob = exchange::round_trip(&mut transport, UTF_8, "이름").expect("round trip failed");
    let morphemes = classify::morphemes_from_response(&blob);

    assert_eq!(morphemes.len(), 1);
    assert_eq!(morphemes[0].pos, UNKNOWN_TAG);
    assert_eq!(morphemes[0].base, "이름");
    assert_eq!(morphemes[0].reading, "이름");
}

#[rstest]
fn analyze_before_start_reports_not_started() {
    let mut analyzer = unstarted_analyzer();

    assert!(matches!(
        analyzer.morphemes("안녕"),
        Err(AdapterError::NotStarted)
    ));
}

#[rstest]
fn dispose_twice_without_start_is_a_noop() {
    let mut analyzer = unstarted_analyzer();

    analyzer.dispose_session();
    analyzer.dispose_session();

    assert!(!analyzer.is_running());
}

#[rstest]
fn trait_object_reports_static_metadata() {
    let analyzer: Box<dyn Analyzer> = Box::new(unstarted_analyzer());

    assert_eq!(analyzer.name(), "korean-mecab");
    assert!(analyzer.description().contains("Korean"));
}

fn unstarted_analyzer() -> MecabAnalyzer {
    MecabAnalyzer::with_config(AnalyzerConfig::for_platform(
        Platform::current(),
        "/nonexistent/mecabko",
    ))
}

#[cfg(unix)]
mod with_fake_binary {
    //! End-to-end session tests over a scripted shell stand-in.

    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use crate::adapter::{AdapterError, AnalyzerConfig, MecabAnalyzer};
    use crate::{Analyzer, UNKNOWN_TAG};

    /// Prints dictionary info for `-D` and otherwise echoes stdin,
    /// standing in for the analyzer's request/response loop.
    const ECHOING_ANALYZER: &str = "#!/bin/sh\n\
        for arg in \"$@\"; do\n\
        \tif [ \"$arg\" = \"-D\" ]; then\n\
        \t\tprintf 'filename:\\t/tmp/sys.dic\\ncharset:\\tUTF-8\\n'\n\
        \t\texit 0\n\
        \tfi\n\
        done\n\
        exec cat\n";

    const NO_CHARSET_ANALYZER: &str = "#!/bin/sh\n\
        printf 'filename:\\t/tmp/sys.dic\\nversion:\\t102\\n'\n";

    const BAD_CHARSET_ANALYZER: &str = "#!/bin/sh\n\
        printf 'charset:\\tnot-a-real-charset\\n'\n";

    fn fake_analyzer(dir: &TempDir, script: &str) -> MecabAnalyzer {
        let command = dir.path().join("mecab.fake");
        fs::write(&command, script).expect("failed to write fake analyzer");
        MecabAnalyzer::with_config(AnalyzerConfig {
            command,
            args: Vec::new(),
            support_dir: dir.path().to_path_buf(),
        })
    }

    #[rstest]
    fn starts_analyzes_and_disposes() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let mut analyzer = fake_analyzer(&dir, ECHOING_ANALYZER);

        analyzer.start().expect("start failed");
        assert!(analyzer.is_running());

        let morphemes = analyzer.analyze("안녕 세상").expect("analyze failed");
        assert_eq!(morphemes.len(), 1);
        assert_eq!(morphemes[0].surface, "안녕 세상");
        assert_eq!(morphemes[0].pos, UNKNOWN_TAG);

        analyzer.dispose();
        assert!(!analyzer.is_running());
        assert!(matches!(
            analyzer.morphemes("안녕"),
            Err(AdapterError::NotStarted)
        ));
    }

    #[rstest]
    fn missing_charset_fails_start_with_diagnostics() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let mut analyzer = fake_analyzer(&dir, NO_CHARSET_ANALYZER);

        let error = analyzer.start_session().expect_err("start should fail");

        match error {
            AdapterError::CharsetNotFound { diagnostics } => {
                assert!(diagnostics.contains("version"));
            }
            other => panic!("expected CharsetNotFound, got {other:?}"),
        }
        assert!(!analyzer.is_running());
    }

    #[rstest]
    fn unrecognised_charset_fails_start() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let mut analyzer = fake_analyzer(&dir, BAD_CHARSET_ANALYZER);

        let error = analyzer.start_session().expect_err("start should fail");

        assert!(matches!(
            error,
            AdapterError::UnsupportedCharset { ref label } if label == "not-a-real-charset"
        ));
        assert!(!analyzer.is_running());
    }

    #[rstest]
    fn missing_binary_fails_start_without_panicking() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let mut analyzer = MecabAnalyzer::with_config(AnalyzerConfig {
            command: dir.path().join("missing"),
            args: Vec::new(),
            support_dir: dir.path().to_path_buf(),
        });

        assert!(analyzer.start_session().is_err());
        assert!(!analyzer.is_running());
    }
}
