use crate::errors::Error;
use crate::input::KeyReader;
use crate::key::KeyCode;
use crate::key::grammar::{AnsiGrammar, ConsoleGrammar};

#[test]
fn decode_event_pairs_code_with_last_byte() {
    let reader = KeyReader::new(Box::new(AnsiGrammar));

    let event = reader.decode_event(&[27, 91, 65]);
    assert_eq!(event.code, KeyCode::Up);
    assert_eq!(event.value, 65);

    let event = reader.decode_event(&[27, 91, 50, 52, 126]);
    assert_eq!(event.code, KeyCode::F12);
    assert_eq!(event.value, 126);
}

#[test]
fn decode_event_of_empty_poll_is_none_with_zero_value() {
    let reader = KeyReader::new(Box::new(ConsoleGrammar));
    let event = reader.decode_event(&[]);
    assert_eq!(event.code, KeyCode::None);
    assert_eq!(event.value, 0);
}

#[test]
fn decode_event_keeps_last_byte_even_when_unknown() {
    let reader = KeyReader::new(Box::new(AnsiGrammar));
    let event = reader.decode_event(&[200]);
    assert_eq!(event.code, KeyCode::Unknown);
    assert_eq!(event.value, 200);
}

#[test]
fn reader_resolves_grammars_by_name() {
    assert_eq!(
        KeyReader::with_grammar_name("ansi").unwrap().grammar_name(),
        "ansi"
    );
    assert_eq!(
        KeyReader::with_grammar_name("console")
            .unwrap()
            .grammar_name(),
        "console"
    );

    let err = KeyReader::with_grammar_name("vt52").unwrap_err();
    match err {
        Error::Config(msg) => assert!(msg.contains("vt52"), "message was: {msg}"),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn platform_default_matches_target_family() {
    let reader = KeyReader::platform_default();
    if cfg!(windows) {
        assert_eq!(reader.grammar_name(), "console");
    } else {
        assert_eq!(reader.grammar_name(), "ansi");
    }
}
