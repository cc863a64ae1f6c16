pub mod id;
pub mod name;
pub mod payload;
pub mod types;

// Re-export commonly used types
pub use id::IdGenerator;
pub use name::record_name;
pub use payload::PayloadParser;
pub use types::{HeaderEntry, ParseError, ParseResult, RequestRecord};

/// 从字符串内容解析单个 HTTP 请求
pub fn parse_payload(payload: &str) -> ParseResult<RequestRecord> {
    PayloadParser::new().parse(payload)
}
