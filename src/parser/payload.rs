use crate::parser::id::IdGenerator;
use crate::parser::types::{HeaderEntry, ParseError, ParseResult, RequestRecord};

const HEADER_SEPARATOR: &str = ": ";
const CONTENT_LENGTH: &str = "Content-Length";

/// 逐行解析时的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineState {
    /// 空行之前，每行都是 header
    ReadingHeaders,
    /// 第一个空行之后，所有行都属于 body
    ReadingBody,
}

/// 原始 HTTP 请求文本解析器
///
/// 输入格式：
/// - 第 1 行：`METHOD PATH VERSION`
/// - 第 2 行：其值被当作 Host，不检查 header 名称
/// - 之后直到空行：`Key: Value` 形式的 headers
/// - 空行之后：body
pub struct PayloadParser {
    ids: IdGenerator,
}

impl PayloadParser {
    pub fn new() -> Self {
        Self {
            ids: IdGenerator::new(),
        }
    }

    /// 解析单个请求
    pub fn parse(&mut self, payload: &str) -> ParseResult<RequestRecord> {
        let lines: Vec<&str> = payload.split('\n').map(strip_cr).collect();

        let (method, path) = Self::parse_request_line(lines[0])?;

        // 第二行按位置当作 Host，不进入 headers
        let host_line = lines.get(1).ok_or(ParseError::MissingHost)?;
        let (_, host) = Self::split_header(host_line, 2)?;

        let mut state = LineState::ReadingHeaders;
        let mut headers = Vec::new();
        let mut body_lines: Vec<&str> = Vec::new();

        for (index, line) in lines.iter().enumerate().skip(2) {
            match state {
                LineState::ReadingHeaders if line.is_empty() => {
                    state = LineState::ReadingBody;
                }
                LineState::ReadingHeaders => {
                    let (key, value) = Self::split_header(line, index + 1)?;
                    if key != CONTENT_LENGTH {
                        headers.push(HeaderEntry::new(key, value));
                    }
                }
                LineState::ReadingBody => body_lines.push(line),
            }
        }

        let body = body_lines.join("\n").trim_end().to_string();
        let url = format!("https://{}{}", host, path);

        tracing::trace!(method, url = %url, headers = headers.len(), "Parsed payload");

        Ok(RequestRecord::new(
            self.ids.next_id(),
            url,
            method.to_string(),
            headers,
            body,
        ))
    }

    /// 解析请求行，返回 (method, path)，HTTP 版本被丢弃
    fn parse_request_line(line: &str) -> ParseResult<(&str, &str)> {
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.as_slice() {
            [method, path, _version] => Ok((*method, *path)),
            _ => Err(ParseError::MalformedRequestLine {
                line: 1,
                found: parts.len(),
            }),
        }
    }

    /// 在第一个 `": "` 处拆分 header 行
    fn split_header(line: &str, line_number: usize) -> ParseResult<(&str, &str)> {
        line.split_once(HEADER_SEPARATOR)
            .ok_or_else(|| ParseError::MalformedHeader {
                line: line_number,
                content: line.to_string(),
            })
    }
}

impl Default for PayloadParser {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(payload: &str) -> ParseResult<RequestRecord> {
        PayloadParser::new().parse(payload)
    }

    #[test]
    fn test_parse_simple_get() {
        let payload = "GET /api/users HTTP/1.1\nHost: example.com\nAccept: application/json\nContent-Length: 0\n\n";
        let record = parse(payload).unwrap();

        assert_eq!(record.method, "GET");
        assert_eq!(record.url, "https://example.com/api/users");
        assert_eq!(
            record.headers,
            vec![HeaderEntry::new("Accept", "application/json")]
        );
        assert_eq!(record.body, "");
        assert_eq!(record.auth_type, "none");
        assert_eq!(record.name, "");
        assert!(record.id.parse::<i64>().is_ok());
    }

    #[test]
    fn test_parse_with_body() {
        let payload = r#"POST /login HTTP/1.1
Host: api.example.com
Content-Type: application/json
Content-Length: 27

{"user": "a", "pass": "b"}
"#;
        let record = parse(payload).unwrap();
        assert_eq!(record.method, "POST");
        assert_eq!(record.url, "https://api.example.com/login");
        assert_eq!(record.headers.len(), 1);
        assert_eq!(record.header("Content-Type"), Some("application/json"));
        assert_eq!(record.body, r#"{"user": "a", "pass": "b"}"#);
    }

    #[test]
    fn test_host_is_positional() {
        // 第二行不论名称都当作 Host
        let payload = "GET /v1 HTTP/1.1\nUser-Agent: curl/8.0\nHost: real.example.com\n\n";
        let record = parse(payload).unwrap();
        assert_eq!(record.url, "https://curl/8.0/v1");
        assert_eq!(
            record.headers,
            vec![HeaderEntry::new("Host", "real.example.com")]
        );
    }

    #[test]
    fn test_host_value_is_text_after_first_separator() {
        let payload = "GET /x HTTP/1.1\nHost: a: b\n\n";
        let record = parse(payload).unwrap();
        assert_eq!(record.url, "https://a: b/x");
    }

    #[test]
    fn test_url_is_literal_concatenation() {
        let payload = "GET http://plain.example.com/x HTTP/1.0\nHost: plain.example.com\n";
        let record = parse(payload).unwrap();
        assert_eq!(record.url, "https://plain.example.comhttp://plain.example.com/x");

        let payload = "GET /x HTTP/1.0\nHost: plain.example.com:8080\n";
        let record = parse(payload).unwrap();
        assert_eq!(record.url, "https://plain.example.com:8080/x");
    }

    #[test]
    fn test_content_length_filtered_and_order_kept() {
        let payload = "PUT /item HTTP/1.1\nHost: h\nX-First: 1\nContent-Length: 10\nX-Second: 2\nX-Third: 3\n\nbody";
        let record = parse(payload).unwrap();
        let keys: Vec<&str> = record.headers.iter().map(|h| h.key.as_str()).collect();
        assert_eq!(keys, vec!["X-First", "X-Second", "X-Third"]);
        assert!(record.header("Content-Length").is_none());
    }

    #[test]
    fn test_content_length_match_is_exact() {
        let payload = "GET / HTTP/1.1\nHost: h\ncontent-length: 0\n\n";
        let record = parse(payload).unwrap();
        assert_eq!(record.header("content-length"), Some("0"));
    }

    #[test]
    fn test_header_split_on_first_separator() {
        let payload = "GET / HTTP/1.1\nHost: h\nX-Note: a: b: c\n\n";
        let record = parse(payload).unwrap();
        assert_eq!(record.header("X-Note"), Some("a: b: c"));
    }

    #[test]
    fn test_body_keeps_inner_blank_lines() {
        let payload = "POST /f HTTP/1.1\nHost: h\n\nline one\n\nline three\n\n\n";
        let record = parse(payload).unwrap();
        assert_eq!(record.body, "line one\n\nline three");
    }

    #[test]
    fn test_body_header_like_lines_stay_in_body() {
        let payload = "POST /f HTTP/1.1\nHost: h\n\nKey: Value\nnot a header";
        let record = parse(payload).unwrap();
        assert!(record.headers.is_empty());
        assert_eq!(record.body, "Key: Value\nnot a header");
    }

    #[test]
    fn test_no_blank_line_folds_into_headers() {
        let payload = "GET /x HTTP/1.1\nHost: h\nAccept: */*\nX-Trace: abc";
        let record = parse(payload).unwrap();
        assert_eq!(record.headers.len(), 2);
        assert_eq!(record.header("X-Trace"), Some("abc"));
        assert_eq!(record.body, "");
    }

    #[test]
    fn test_crlf_payload() {
        let payload = "POST /c HTTP/1.1\r\nHost: crlf.example.com\r\nAccept: text/plain\r\n\r\nhello\r\n";
        let record = parse(payload).unwrap();
        assert_eq!(record.url, "https://crlf.example.com/c");
        assert_eq!(record.header("Accept"), Some("text/plain"));
        assert_eq!(record.body, "hello");
    }

    #[test]
    fn test_malformed_request_line() {
        match parse("GET /only-two\nHost: h\n") {
            Err(ParseError::MalformedRequestLine { line, found }) => {
                assert_eq!(line, 1);
                assert_eq!(found, 2);
            }
            other => panic!("Expected MalformedRequestLine, got {:?}", other),
        }

        assert!(matches!(
            parse("GET / HTTP/1.1 extra\nHost: h\n"),
            Err(ParseError::MalformedRequestLine { found: 4, .. })
        ));
        assert!(matches!(
            parse(""),
            Err(ParseError::MalformedRequestLine { found: 0, .. })
        ));
    }

    #[test]
    fn test_missing_host_line() {
        assert!(matches!(
            parse("GET / HTTP/1.1"),
            Err(ParseError::MissingHost)
        ));
    }

    #[test]
    fn test_malformed_host_line() {
        match parse("GET / HTTP/1.1\nHost:nospace\n\n") {
            Err(ParseError::MalformedHeader { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "Host:nospace");
            }
            other => panic!("Expected MalformedHeader, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_header_before_body() {
        match parse("GET / HTTP/1.1\nHost: h\nAccept: */*\nbroken\n\nbody") {
            Err(ParseError::MalformedHeader { line, content }) => {
                assert_eq!(line, 4);
                assert_eq!(content, "broken");
            }
            other => panic!("Expected MalformedHeader, got {:?}", other),
        }
    }

    #[test]
    fn test_ids_increase_across_parses() {
        let mut parser = PayloadParser::new();
        let payload = "GET / HTTP/1.1\nHost: h\n";
        let first: i64 = parser.parse(payload).unwrap().id.parse().unwrap();
        let second: i64 = parser.parse(payload).unwrap().id.parse().unwrap();
        assert!(second > first);
    }
}
