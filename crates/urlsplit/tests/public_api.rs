//! End-to-end checks of the public parsing surface.

use urlsplit::{logging, parse, parse_scheme, ParseError, Url};

#[test]
fn parse_then_split_host() {
    let _ = logging::init_logging();

    let u = parse("http://localhost:8000/test.html").unwrap();
    assert_eq!(u.scheme, "http");
    assert_eq!(u.host, "localhost:8000");
    assert_eq!(u.hostname(), "localhost");
    assert_eq!(u.port(), "8000");
    assert_eq!(u.path, "test.html");
}

#[test]
fn display_roundtrip_with_path() {
    let _ = logging::init_logging();

    let cases = [
        ("https", "foo.com", "go"),
        ("http", "1.2.3.4:80", "a/b/c"),
        ("ftp", "mirror.example.org:21", "pub/"),
    ];
    for (scheme, host, path) in cases {
        let u = Url {
            scheme: scheme.to_string(),
            host: host.to_string(),
            path: path.to_string(),
        };
        assert_eq!(parse(&u.to_string()).unwrap(), u);
    }
}

#[test]
fn display_roundtrip_without_path_gains_slash() {
    let u = parse("https://foo.com").unwrap();
    let rendered = u.to_string();
    assert_eq!(rendered, "https://foo.com/");
    assert_eq!(parse(&rendered).unwrap(), u);
}

#[test]
fn scheme_helper_is_public() {
    assert_eq!(
        parse_scheme("https://foo.com/go"),
        Some(("https", "foo.com/go"))
    );
    assert_eq!(parse_scheme("foo.com/go"), None);
}

#[test]
fn missing_scheme_is_an_error_value() {
    let err = parse("foo.com/abc").unwrap_err();
    assert_eq!(err, ParseError::MissingScheme);
    assert_eq!(err.to_string(), "missing scheme");
}

#[test]
fn serde_json_record() {
    let u = parse("https://foo.com:443/abc").unwrap();
    let json = serde_json::to_string(&u).unwrap();
    assert_eq!(
        json,
        r#"{"scheme":"https","host":"foo.com:443","path":"abc"}"#
    );
    let back: Url = serde_json::from_str(&json).unwrap();
    assert_eq!(back, u);
}

#[test]
fn logging_init_is_idempotent_for_callers() {
    let _ = logging::init_logging();
    assert!(logging::init_logging().is_err());
}
