//! End-to-end tests for the field tag channel: name overrides, `omitempty`,
//! and the `-` skip marker, all carried in `#[serde(rename = "...")]`.

use serde::{Deserialize, Serialize};
use serde_props::{from_str, to_string};
use std::collections::HashMap;

#[test]
fn test_rename_encodes_and_decodes() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Config {
        #[serde(rename = "serverName")]
        name: String,
        port: u16,
    }

    let config = Config { name: "alpha".to_string(), port: 1 };
    let text = to_string(&config).unwrap();
    assert_eq!(text, "serverName=alpha\nport=1\n");
    assert_eq!(from_str::<Config>(&text).unwrap(), config);
}

#[test]
fn test_declared_name_no_longer_matches_after_rename() {
    #[derive(Deserialize, Debug, PartialEq)]
    struct Config {
        #[serde(rename = "serverName")]
        #[serde(default)]
        name: String,
    }

    // The declared field name is an unknown key once renamed.
    let config: Config = from_str("name=alpha\n").unwrap();
    assert_eq!(config.name, "");
}

#[test]
fn test_omitempty_elides_zero_values() {
    #[derive(Serialize)]
    struct Config {
        #[serde(rename = "count,omitempty")]
        count: u32,
        #[serde(rename = "label,omitempty")]
        label: String,
        #[serde(rename = "ratio,omitempty")]
        ratio: f64,
        #[serde(rename = "on,omitempty")]
        on: bool,
        #[serde(rename = "tags,omitempty")]
        tags: Vec<String>,
        #[serde(rename = "props,omitempty")]
        props: HashMap<String, String>,
        keep: String,
    }

    let config = Config {
        count: 0,
        label: String::new(),
        ratio: 0.0,
        on: false,
        tags: Vec::new(),
        props: HashMap::new(),
        keep: "here".to_string(),
    };

    assert_eq!(to_string(&config).unwrap(), "keep=here\n");
}

#[test]
fn test_omitempty_keeps_nonzero_values() {
    #[derive(Serialize)]
    struct Config {
        #[serde(rename = "count,omitempty")]
        count: u32,
        #[serde(rename = "label,omitempty")]
        label: String,
    }

    let config = Config { count: 2, label: "x".to_string() };
    assert_eq!(to_string(&config).unwrap(), "count=2\nlabel=x\n");
}

#[test]
fn test_omitempty_never_elides_nested_records() {
    #[derive(Serialize)]
    struct Inner {
        #[serde(rename = "n,omitempty")]
        n: u32,
    }

    #[derive(Serialize)]
    struct Outer {
        #[serde(rename = "inner,omitempty")]
        inner: Inner,
        flag: bool,
    }

    // The record survives omitempty; its own empty field is what vanishes.
    let outer = Outer { inner: Inner { n: 0 }, flag: true };
    assert_eq!(to_string(&outer).unwrap(), "flag=true\n");

    let outer = Outer { inner: Inner { n: 5 }, flag: true };
    assert_eq!(to_string(&outer).unwrap(), "inner.n=5\nflag=true\n");
}

#[test]
fn test_skip_marker_elides_on_encode() {
    #[derive(Serialize)]
    struct Config {
        visible: String,
        #[serde(rename = "-")]
        secret: String,
    }

    let config = Config {
        visible: "yes".to_string(),
        secret: "hunter2".to_string(),
    };
    assert_eq!(to_string(&config).unwrap(), "visible=yes\n");
}

#[test]
fn test_skip_marker_ignores_input_on_decode() {
    #[derive(Deserialize, Debug, PartialEq)]
    struct Config {
        visible: String,
        #[serde(rename = "-")]
        #[serde(default)]
        secret: String,
    }

    // A literal `-` key in the input does not reach the skipped field.
    let config: Config = from_str("visible=yes\n-=nope\n").unwrap();
    assert_eq!(config.secret, "");
    assert_eq!(config.visible, "yes");
}

#[test]
fn test_rename_with_omitempty_combined() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Config {
        #[serde(rename = "maxRetries,omitempty")]
        #[serde(default)]
        retries: u32,
    }

    assert_eq!(to_string(&Config { retries: 0 }).unwrap(), "");
    assert_eq!(to_string(&Config { retries: 3 }).unwrap(), "maxRetries=3\n");

    let config: Config = from_str("maxRetries=7\n").unwrap();
    assert_eq!(config.retries, 7);

    // Elided on encode, defaulted on decode.
    let config: Config = from_str("").unwrap();
    assert_eq!(config.retries, 0);
}

#[test]
fn test_unknown_tag_options_ignored() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Config {
        #[serde(rename = "key,frobnicate")]
        key: String,
    }

    let config = Config { key: "v".to_string() };
    let text = to_string(&config).unwrap();
    assert_eq!(text, "key=v\n");
    assert_eq!(from_str::<Config>(&text).unwrap(), config);
}

#[test]
fn test_tags_apply_inside_nested_records() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Server {
        #[serde(rename = "hostName")]
        host: String,
        #[serde(rename = "port,omitempty")]
        #[serde(default)]
        port: u16,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Config {
        server: Server,
    }

    let config = Config {
        server: Server { host: "h".to_string(), port: 0 },
    };
    let text = to_string(&config).unwrap();
    assert_eq!(text, "server.hostName=h\n");
    assert_eq!(from_str::<Config>(&text).unwrap(), config);
}
