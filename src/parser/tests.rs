//! Tests for the HTTP parser.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde::{Deserialize, Serialize};

    use crate::parser::{parse_request, Error, PeerIdentity, Request};

    /// Test-side inverse of `parse_request`: a request rendered back to wire
    /// bytes so parsing can be checked as a round trip.
    fn serialize_request(request: &Request) -> Vec<u8> {
        let mut bytes = Vec::new();
        let request_line = format!(
            "{} {} {}\r\n",
            request.method, request.path, request.version
        );
        bytes.extend_from_slice(request_line.as_bytes());
        for (name, value) in &request.headers {
            bytes.extend_from_slice(format!("{name}: {value}\r\n").as_bytes());
        }
        bytes.extend_from_slice(b"\r\n");
        bytes.extend_from_slice(&request.body);
        bytes
    }

    #[test]
    fn test_parse_simple_get_request() {
        let input = b"GET /index.html HTTP/1.1\r\nHost: www.example.com\r\nUser-Agent: X\r\n\r\n";
        let request = parse_request(input).unwrap();

        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/index.html");
        assert_eq!(request.version, "HTTP/1.1");
        assert_eq!(request.headers.len(), 2);
        assert_eq!(request.header("Host"), Some("www.example.com"));
        assert_eq!(request.header("User-Agent"), Some("X"));
        assert!(request.body.is_empty());
        assert!(request.peer.is_none());
    }

    #[test]
    fn test_parse_request_with_multiple_headers() {
        let input = b"POST /submit HTTP/1.1\r\n\
            Host: example.com\r\n\
            Content-Type: application/json\r\n\
            Content-Length: 2\r\n\r\n{}";
        let request = parse_request(input).unwrap();

        assert_eq!(request.method, "POST");
        assert_eq!(request.headers.len(), 3);
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(request.body, b"{}");
    }

    #[test]
    fn test_missing_body_separator() {
        let input = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n";
        let result = parse_request(input);
        assert!(matches!(result, Err(Error::MissingBodySeparator)));
    }

    #[test]
    fn test_empty_buffer() {
        let result = parse_request(b"");
        assert!(matches!(result, Err(Error::MissingBodySeparator)));
    }

    #[test]
    fn test_malformed_request_line_too_few_tokens() {
        let result = parse_request(b"GET HTTP/1.1\r\n\r\n");
        assert!(matches!(
            result,
            Err(Error::MalformedRequestLine(ref line)) if line == "GET HTTP/1.1"
        ));
    }

    #[test]
    fn test_malformed_request_line_too_many_tokens() {
        let result = parse_request(b"GET /a b HTTP/1.1\r\n\r\n");
        assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
    }

    #[test]
    fn test_request_line_with_extra_whitespace() {
        // Runs of whitespace still yield exactly three tokens.
        let request = parse_request(b"GET  /path   HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/path");
        assert_eq!(request.version, "HTTP/1.1");
    }

    #[test]
    fn test_unknown_method_token_is_accepted() {
        // Methods are plain tokens; routing decides what they mean.
        let request = parse_request(b"BREW /pot HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(request.method, "BREW");
    }

    #[test]
    fn test_malformed_header_line() {
        let result = parse_request(b"GET / HTTP/1.1\r\nInvalidHeader\r\n\r\n");
        assert!(matches!(
            result,
            Err(Error::MalformedHeader(ref line)) if line == "InvalidHeader"
        ));
    }

    #[test]
    fn test_header_without_space_after_colon() {
        // The delimiter is ": ", colon included but space missing is malformed.
        let result = parse_request(b"GET / HTTP/1.1\r\nHost:example.com\r\n\r\n");
        assert!(matches!(result, Err(Error::MalformedHeader(_))));
    }

    #[test]
    fn test_zero_headers_is_valid() {
        let request = parse_request(b"GET / HTTP/1.1\r\n\r\n").unwrap();
        assert!(request.headers.is_empty());
    }

    #[test]
    fn test_header_names_are_case_sensitive() {
        let request = parse_request(b"GET / HTTP/1.1\r\nHoSt: example.com\r\n\r\n").unwrap();

        assert_eq!(request.header("HoSt"), Some("example.com"));
        assert_eq!(request.header("Host"), None);
        assert!(request.has_header("HoSt"));
        assert!(!request.has_header("host"));
    }

    #[test]
    fn test_duplicate_headers_last_wins() {
        let input = b"GET / HTTP/1.1\r\n\
            Custom: first\r\n\
            Custom: second\r\n\r\n";
        let request = parse_request(input).unwrap();

        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.header("Custom"), Some("second"));
    }

    #[test]
    fn test_header_value_with_colons() {
        let input = b"GET / HTTP/1.1\r\nCustom-Header: value: with: colons\r\n\r\n";
        let request = parse_request(input).unwrap();
        assert_eq!(request.header("Custom-Header"), Some("value: with: colons"));
    }

    #[test]
    fn test_empty_header_value() {
        let request = parse_request(b"GET / HTTP/1.1\r\nX-Empty: \r\n\r\n").unwrap();
        assert_eq!(request.header("X-Empty"), Some(""));
    }

    #[test]
    fn test_header_value_kept_verbatim() {
        // No trimming: trailing whitespace is part of the value.
        let request = parse_request(b"GET / HTTP/1.1\r\nX-Pad: padded  \r\n\r\n").unwrap();
        assert_eq!(request.header("X-Pad"), Some("padded  "));
    }

    #[test]
    fn test_body_longer_than_declared_content_length() {
        let input = b"POST /echo HTTP/1.1\r\nContent-Length: 5\r\n\r\nmuch longer than five";
        let request = parse_request(input).unwrap();
        assert_eq!(request.body, b"much longer than five");
    }

    #[test]
    fn test_body_shorter_than_declared_content_length() {
        let input = b"POST /echo HTTP/1.1\r\nContent-Length: 100\r\n\r\nabc";
        let request = parse_request(input).unwrap();
        assert_eq!(request.body, b"abc");
    }

    #[test]
    fn test_body_split_at_first_separator_only() {
        let input = b"POST / HTTP/1.1\r\nHost: a\r\n\r\nfirst\r\n\r\nsecond";
        let request = parse_request(input).unwrap();
        assert_eq!(request.body, b"first\r\n\r\nsecond");
    }

    #[test]
    fn test_binary_body_preserved() {
        let mut input = b"POST /bin HTTP/1.1\r\nHost: a\r\n\r\n".to_vec();
        input.extend_from_slice(&[0x00, 0xFF, 0x7F, 0x0D, 0x0A]);
        let request = parse_request(&input).unwrap();
        assert_eq!(request.body, [0x00, 0xFF, 0x7F, 0x0D, 0x0A]);
    }

    #[test]
    fn test_path_used_verbatim() {
        let input = b"GET /search?q=%20rust&page=1 HTTP/1.1\r\nHost: a\r\n\r\n";
        let request = parse_request(input).unwrap();
        assert_eq!(request.path, "/search?q=%20rust&page=1");
    }

    #[test]
    fn test_invalid_utf8_in_header_block() {
        // Invalid UTF-8 in header text degrades to replacement characters
        // rather than failing the parse.
        let mut input = b"GET / HTTP/1.1\r\nX-Bin: a".to_vec();
        input.push(0xFF);
        input.extend_from_slice(b"b\r\n\r\n");

        let request = parse_request(&input).unwrap();
        assert_eq!(request.header("X-Bin"), Some("a\u{FFFD}b"));
    }

    #[test]
    fn test_peer_identity_attachment() {
        let request = parse_request(b"GET / HTTP/1.1\r\n\r\n").unwrap();
        assert!(request.peer.is_none());

        let identity = PeerIdentity {
            subject: Some("CN=client".to_string()),
            issuer: Some("CN=test-ca".to_string()),
            protocol: Some("TLSv1.3".to_string()),
        };
        let request = request.with_peer(identity.clone());
        assert_eq!(request.peer, Some(identity));
    }

    #[test]
    fn test_round_trip() {
        let mut headers = HashMap::new();
        headers.insert("Host".to_string(), "www.example.com".to_string());
        headers.insert("Accept".to_string(), "text/html".to_string());
        headers.insert("X-Trace-Id".to_string(), "abc123".to_string());

        let mut original = Request::new("PUT", "/items/7?replace=yes", "HTTP/1.1", headers);
        original.body = b"payload bytes".to_vec();

        let parsed = parse_request(&serialize_request(&original)).unwrap();

        assert_eq!(parsed.method, original.method);
        assert_eq!(parsed.path, original.path);
        assert_eq!(parsed.version, original.version);
        // Headers compare as an unordered map.
        assert_eq!(parsed.headers, original.headers);
        assert_eq!(parsed.body, original.body);
    }

    #[test]
    fn test_round_trip_resolves_duplicates_to_last() {
        let input = b"GET / HTTP/1.1\r\nA: one\r\nA: two\r\nB: three\r\n\r\n";
        let first = parse_request(input).unwrap();
        let second = parse_request(&serialize_request(&first)).unwrap();
        assert_eq!(second.headers, first.headers);
        assert_eq!(second.header("A"), Some("two"));
    }

    #[test]
    fn test_json_body() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Greeting {
            message: String,
        }

        let input = b"POST /api HTTP/1.1\r\n\
            Content-Type: application/json\r\n\r\n\
            {\"message\":\"hello\"}";
        let request = parse_request(input).unwrap();

        assert!(request.is_json());
        let greeting: Greeting = request.json().unwrap();
        assert_eq!(
            greeting,
            Greeting {
                message: "hello".to_string()
            }
        );
    }

    #[test]
    fn test_json_on_invalid_body_fails() {
        let input = b"POST /api HTTP/1.1\r\nContent-Type: application/json\r\n\r\nnot json";
        let request = parse_request(input).unwrap();

        assert!(request.is_json());
        assert!(request.json::<serde_json::Value>().is_err());
    }

    #[test]
    fn test_is_json_requires_exact_header_name() {
        // Content type detection follows the case-sensitive header store.
        let input = b"POST /api HTTP/1.1\r\ncontent-type: application/json\r\n\r\n{}";
        let request = parse_request(input).unwrap();
        assert!(!request.is_json());
    }
}
