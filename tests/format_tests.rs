//! Tests pinning the wire format itself: line grammar, whitespace handling,
//! duplicate resolution, and shape errors.

use serde::Deserialize;
use serde_props::{from_str, from_str_with_options, Error, PropsOptions};
use std::collections::HashMap;

#[derive(Deserialize, Debug, PartialEq)]
struct Server {
    host: String,
    port: u16,
}

#[derive(Deserialize, Debug, PartialEq)]
struct Outer {
    server: Server,
}

#[test]
fn test_crlf_line_endings() {
    let server: Server = from_str("host=h\r\nport=80\r\n").unwrap();
    assert_eq!(server, Server { host: "h".to_string(), port: 80 });
}

#[test]
fn test_no_trailing_newline() {
    let server: Server = from_str("host=h\nport=80").unwrap();
    assert_eq!(server.port, 80);
}

#[test]
fn test_whitespace_around_key_and_value() {
    let server: Server = from_str("  host = h \n\tport\t=\t80\t\n").unwrap();
    assert_eq!(server, Server { host: "h".to_string(), port: 80 });
}

#[test]
fn test_value_splits_on_first_equals() {
    #[derive(Deserialize)]
    struct Data {
        formula: String,
    }

    let data: Data = from_str("formula=a=b=c\n").unwrap();
    assert_eq!(data.formula, "a=b=c");
}

#[test]
fn test_missing_separator_reports_line_number() {
    // Line numbers count every line, comments and blanks included.
    let result: Result<Server, Error> = from_str("# header\nhost=h\nbogus line\nport=80\n");
    match result {
        Err(Error::InvalidLine { line, content }) => {
            assert_eq!(line, 3);
            assert_eq!(content, "bogus line");
        }
        other => panic!("expected InvalidLine, got {:?}", other),
    }
}

#[test]
fn test_indented_comment_is_still_a_comment() {
    let server: Server = from_str("   # leading spaces\nhost=h\nport=80\n").unwrap();
    assert_eq!(server.port, 80);
}

#[test]
fn test_duplicate_scalar_last_write_wins() {
    let server: Server = from_str("host=first\nport=80\nhost=second\n").unwrap();
    assert_eq!(server.host, "second");
}

#[test]
fn test_duplicate_map_entry_last_write_wins() {
    #[derive(Deserialize)]
    struct Data {
        props: HashMap<String, String>,
    }

    let data: Data = from_str("props.k=old\nprops.k=new\n").unwrap();
    assert_eq!(data.props.len(), 1);
    assert_eq!(data.props["k"], "new");
}

#[test]
fn test_duplicate_sequence_line_replaces_wholesale() {
    #[derive(Deserialize)]
    struct Data {
        tags: Vec<String>,
    }

    let data: Data = from_str("tags=a,b,c\ntags=x,y\n").unwrap();
    assert_eq!(data.tags, vec!["x", "y"]);
}

#[test]
fn test_duplicate_sequence_index_last_write_wins() {
    #[derive(Deserialize)]
    struct Data {
        tags: Vec<String>,
    }

    let data: Data = from_str("tags[0]=old\ntags[0]=new\ntags[1]=b\n").unwrap();
    assert_eq!(data.tags, vec!["new", "b"]);
}

#[test]
fn test_mixed_sequence_forms_rejected() {
    #[derive(Deserialize, Debug)]
    struct Data {
        #[allow(dead_code)]
        tags: Vec<String>,
    }

    let result: Result<Data, Error> = from_str("tags[0]=a\ntags=b,c\n");
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
}

#[test]
fn test_dotted_path_into_scalar_rejected() {
    let result: Result<Server, Error> = from_str("host.sub=x\nport=80\n");
    match result {
        Err(Error::ShapeMismatch { key, .. }) => assert_eq!(key, "host"),
        other => panic!("expected ShapeMismatch, got {:?}", other),
    }
}

#[test]
fn test_index_into_scalar_rejected() {
    let result: Result<Server, Error> = from_str("host=h\nport[0]=80\n");
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
}

#[test]
fn test_bare_value_into_nested_record_rejected() {
    let result: Result<Outer, Error> = from_str("server=oops\n");
    match result {
        Err(Error::ShapeMismatch { key, .. }) => assert_eq!(key, "server"),
        other => panic!("expected ShapeMismatch, got {:?}", other),
    }
}

#[test]
fn test_index_into_nested_record_rejected() {
    let result: Result<Outer, Error> = from_str("server[0].host=h\n");
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
}

#[test]
fn test_index_into_mapping_rejected() {
    #[derive(Deserialize, Debug)]
    struct Data {
        #[allow(dead_code)]
        props: HashMap<String, String>,
    }

    let result: Result<Data, Error> = from_str("props[0]=x\n");
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
}

#[test]
fn test_strict_mode_names_the_unknown_segment() {
    let options = PropsOptions::new().with_deny_unknown_keys(true);
    let result: Result<Outer, Error> =
        from_str_with_options("server.host=h\nserver.port=1\nghost.x=1\n", options);
    match result {
        Err(Error::UnknownKey { key }) => assert_eq!(key, "ghost"),
        other => panic!("expected UnknownKey, got {:?}", other),
    }
}

#[test]
fn test_strict_mode_applies_to_nested_records() {
    let options = PropsOptions::new().with_deny_unknown_keys(true);
    let result: Result<Outer, Error> =
        from_str_with_options("server.host=h\nserver.port=1\nserver.ghost=1\n", options);
    match result {
        Err(Error::UnknownKey { key }) => assert_eq!(key, "server.ghost"),
        other => panic!("expected UnknownKey, got {:?}", other),
    }
}

#[test]
fn test_lenient_bool_forms() {
    #[derive(Deserialize)]
    struct Flag {
        on: bool,
    }

    for text in ["1", "t", "T", "TRUE", "true", "True"] {
        let flag: Flag = from_str(&format!("on={}", text)).unwrap();
        assert!(flag.on, "{:?} should parse true", text);
    }
    for text in ["0", "f", "F", "FALSE", "false", "False"] {
        let flag: Flag = from_str(&format!("on={}", text)).unwrap();
        assert!(!flag.on, "{:?} should parse false", text);
    }

    let result: Result<Flag, Error> = from_str("on=yes");
    assert!(matches!(result, Err(Error::InvalidValue { .. })));
}

#[test]
fn test_numeric_bounds_checked() {
    let result: Result<Server, Error> = from_str("host=h\nport=70000\n");
    // 70000 overflows u16; serde reports it through the custom channel.
    assert!(result.is_err());
}

#[test]
fn test_negative_into_unsigned_rejected() {
    let result: Result<Server, Error> = from_str("host=h\nport=-1\n");
    assert!(matches!(result, Err(Error::InvalidValue { .. })));
}

#[test]
fn test_non_numeric_bracket_suffix_is_a_plain_name() {
    // `tags[x]` has no numeric index, so it reads as an unknown field name
    // and is ignored rather than rejected.
    let server: Server = from_str("host=h\nport=80\ntags[x]=1\n").unwrap();
    assert_eq!(server.port, 80);
}
