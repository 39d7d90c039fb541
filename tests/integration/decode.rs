// End-to-end checks through the public API: config file -> reader -> events.

use std::fs;

use termkit::config::Config;
use termkit::key::KeyCode;

use crate::common::make_temp_dir;

#[test]
fn config_file_selects_the_console_grammar() {
    let dir = make_temp_dir("termkit-decode");
    let path = dir.join("termkit.json");
    fs::write(&path, r#"{ "grammar": "console" }"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    let reader = config.key_reader().unwrap();
    assert_eq!(reader.grammar_name(), "console");

    let up = reader.decode_event(&[224, 72]);
    assert_eq!(up.code, KeyCode::Up);
    assert_eq!(up.value, 72);

    let f1 = reader.decode_event(&[0, 59]);
    assert_eq!(f1.code, KeyCode::F1);

    // Escape-sequence framing belongs to the other grammar.
    let foreign = reader.decode_event(&[27, 91, 65]);
    assert_eq!(foreign.code, KeyCode::Unknown);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn default_config_decodes_ansi_sequences_end_to_end() {
    let dir = make_temp_dir("termkit-decode");
    let config = Config::load_from(dir.join("missing.json")).unwrap();
    let reader = config.key_reader().unwrap();

    if cfg!(windows) {
        assert_eq!(reader.grammar_name(), "console");
    } else {
        assert_eq!(reader.grammar_name(), "ansi");
        assert_eq!(reader.decode_event(&[27, 91, 68]).code, KeyCode::Left);
        assert_eq!(
            reader.decode_event(&[27, 91, 49, 53, 126]).code,
            KeyCode::F5
        );
        assert_eq!(reader.decode_event(&[113]).code, KeyCode::Q);
    }

    let _ = fs::remove_dir_all(&dir);
}
