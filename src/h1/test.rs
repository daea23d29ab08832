use super::{Method, RequestLine, Version, header_line};
use crate::common::ErrorKind;
use crate::cursor::Cursor;

#[test]
fn test_parse_reqline() {
    macro_rules! test {
        (#[error($kind:ident, $pos:expr)] $input:literal) => {
            match RequestLine::parse($input) {
                Ok(ok) => panic!("expected `Err` but returns `Ok` with {ok:?}"),
                Err(err) => {
                    assert_eq!(err.kind(), ErrorKind::$kind, "{:?}: {err}", $input);
                    assert_eq!(err.position(), $pos, "{:?}: {err}", $input);
                }
            }
        };
        {
            $input:literal;
            $m:expr, $path:literal, ($major:literal, $minor:literal)
        } => {
            let line = RequestLine::parse($input).unwrap_or_else(|err| panic!("{:?}: {err}", $input));
            assert_eq!(line.method(), &$m);
            assert_eq!(line.uri().path(), $path);
            assert_eq!(line.version_major(), $major);
            assert_eq!(line.version_minor(), $minor);
        };
    }

    test! {
        "GET / HTTP/1.1\r\n";
        Method::GET, "/", (1, 1)
    }
    test! {
        "POST /users/all?page=2 HTTP/1.0\r\n";
        Method::POST, "/users/all", (1, 0)
    }
    test! {
        "OPTIONS * HTTP/1.1\r\n";
        Method::OPTIONS, "*", (1, 1)
    }
    test! {
        "GET http://example.com/index.html HTTP/2.0\r\n";
        Method::GET, "/index.html", (2, 0)
    }
    test! {
        "GET / HTTP/10.23\r\n";
        Method::GET, "/", (10, 23)
    }

    test!(#[error(Mismatch, 0)] "get / HTTP/1.1\r\n");
    test!(#[error(Mismatch, 1)] "Get / HTTP/1.1\r\n");
    test!(#[error(Mismatch, 20)] "GETGETGETGETGETGETGETGETGETGETGETGETGE / HTTP/1.1\r\n");
    test!(#[error(Mismatch, 0)] " / HTTP/1.1\r\n");
    test!(#[error(Mismatch, 4)] "GET  / HTTP/1.1\r\n");
    test!(#[error(Mismatch, 14)] "GET / HTTP/1.1 \r\n");
    test!(#[error(Mismatch, 14)] "GET / HTTP/1.1\n");
    test!(#[error(Mismatch, 14)] "GET / HTTP/1.1");
    test!(#[error(Mismatch, 6)] "GET / http/1.1\r\n");
    test!(#[error(Mismatch, 12)] "GET / HTTP/1\r\n");
    test!(#[error(Mismatch, 13)] "GET / HTTP/1.\r\n");
    test!(#[error(Range, 13)] "GET / HTTP/1.99999999999\r\n");
    test!(#[error(Encoding, 6)] "GET /a%zz HTTP/1.1\r\n");
    test!(#[error(Mismatch, 16)] "GET / HTTP/1.1\r\nHost: a\r\n");
}

#[test]
fn test_methods() {
    for (input, method) in [
        ("GET", Method::GET),
        ("HEAD", Method::HEAD),
        ("PUT", Method::PUT),
        ("POST", Method::POST),
        ("DELETE", Method::DELETE),
        ("OPTIONS", Method::OPTIONS),
        ("TRACE", Method::TRACE),
        ("CONNECT", Method::CONNECT),
        ("PATCH", Method::PATCH),
    ] {
        let line = RequestLine::parse(format!("{input} / HTTP/1.1\r\n")).unwrap();
        assert_eq!(line.method(), &method);
        assert_eq!(line.method().as_str(), input);
        assert!(!method.is_extension());
    }

    let line = RequestLine::parse("PURGE / HTTP/1.1\r\n").unwrap();
    assert!(line.method().is_extension());
    assert_eq!(line.method().as_str(), "PURGE");

    let line = RequestLine::parse("M2 / HTTP/1.1\r\n").unwrap();
    assert_eq!(line.method().as_str(), "M2");

    // exactly 20 is still a method
    let line = RequestLine::parse("ABCDEFGHIJKLMNOPQRST / HTTP/1.1\r\n").unwrap();
    assert_eq!(line.method().as_str().len(), 20);

    assert_eq!("PURGE".parse::<Method>().unwrap().as_str(), "PURGE");
    assert_eq!("GET".parse::<Method>().unwrap(), Method::GET);
    assert!("get".parse::<Method>().is_err());
    assert!("".parse::<Method>().is_err());
    assert!("ABCDEFGHIJKLMNOPQRST".parse::<Method>().is_ok());
    assert!("ABCDEFGHIJKLMNOPQRSTU".parse::<Method>().is_err());
    assert!(Method::from_bytes(b"get").is_none());
}

#[test]
fn test_target() {
    let line = RequestLine::parse("GET http://joe@[FFFF:1:2::10.0.0.1]:80/x?y#z HTTP/1.1\r\n").unwrap();
    let uri = line.uri();
    assert_eq!(uri.scheme(), "http");
    assert_eq!(uri.user_info(), "joe");
    assert_eq!(uri.host(), "FFFF:1:2::10.0.0.1");
    assert_eq!(uri.port(), "80");
    assert_eq!(uri.path(), "/x");
    assert_eq!(uri.query(), "y");
    assert_eq!(uri.fragment(), "z");

    let line = RequestLine::parse("OPTIONS * HTTP/1.1\r\n").unwrap();
    assert!(line.uri().is_asterisk());

    // authority-form reads as a scheme followed by a rootless path
    let line = RequestLine::parse("CONNECT example.com:443 HTTP/1.1\r\n").unwrap();
    assert_eq!(line.uri().scheme(), "example.com");
    assert_eq!(line.uri().path(), "443");
}

#[test]
fn test_version() {
    assert_eq!(Version::HTTP_11.to_string(), "HTTP/1.1");
    assert_eq!(Version::HTTP_10.to_string(), "HTTP/1.0");
    assert_eq!(Version::new(12, 345).to_string(), "HTTP/12.345");
    assert_eq!(format!("{:?}", Version::default()), "\"HTTP/1.1\"");
    assert!(Version::HTTP_10 < Version::HTTP_11);
}

#[test]
fn test_header_line() {
    macro_rules! test {
        (#[error] $input:literal) => {
            let mut cursor = Cursor::new($input);
            assert!(header_line(&mut cursor).is_none(), "{:?}", $input);
            assert_eq!(cursor.pos(), 0);
        };
        ($input:literal => $name:literal: $value:literal) => {
            let mut cursor = Cursor::new($input);
            let header = header_line(&mut cursor).unwrap();
            assert_eq!(&$input[header.name], $name);
            assert_eq!(&$input[header.value], $value);
            assert!(cursor.is_empty());
        };
    }

    test!(b"Host: example.com\r\n" => b"Host": b"example.com");
    test!(b"Host:example.com\r\n" => b"Host": b"example.com");
    test!(b"Host: \t example.com\r\n" => b"Host": b"example.com");
    test!(b"X-Trailing: a b \r\n" => b"X-Trailing": b"a b ");
    test!(b"Accept: */*; q=0.8\r\n" => b"Accept": b"*/*; q=0.8");

    test!(#[error] b"Host: \r\n");
    test!(#[error] b"Host\r\n");
    test!(#[error] b"Ho st: x\r\n");
    test!(#[error] b"X_Y: x\r\n");
    test!(#[error] b": x\r\n");
    test!(#[error] b"Host: x\n");
    test!(#[error] b"Host: x");
    test!(#[error] b"Host: caf\xc3\xa9\r\n");
}
