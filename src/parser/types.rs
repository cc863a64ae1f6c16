use serde::{Deserialize, Serialize};

/// 单个 header，序列化为 `{"key": ..., "value": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    pub key: String,
    pub value: String,
}

impl HeaderEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// 一个转换后的 HTTP 请求
///
/// 字段顺序即 JSON 输出顺序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRecord {
    /// 毫秒时间戳
    pub id: String,

    /// 由文件名派生（第一个 `.` 之前的部分）
    pub name: String,

    /// `https://` + Host + 请求行路径
    pub url: String,

    pub method: String,

    /// 保持原始顺序，不含 `Content-Length`
    pub headers: Vec<HeaderEntry>,

    /// 空行之后的内容，去除尾部空白
    pub body: String,

    /// 固定为 `"none"`
    pub auth_type: String,

    pub bearer_token: String,
    pub username: String,
    pub password: String,
}

impl RequestRecord {
    pub const AUTH_NONE: &'static str = "none";

    /// 创建记录，认证相关字段使用默认占位值
    pub fn new(
        id: String,
        url: String,
        method: String,
        headers: Vec<HeaderEntry>,
        body: String,
    ) -> Self {
        Self {
            id,
            name: String::new(),
            url,
            method,
            headers,
            body,
            auth_type: Self::AUTH_NONE.to_string(),
            bearer_token: String::new(),
            username: String::new(),
            password: String::new(),
        }
    }

    /// 设置名称
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// 按 key 查找 header（区分大小写）
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.key == key)
            .map(|h| h.value.as_str())
    }
}

/// 解析错误类型
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// 请求行不是 `METHOD URL VERSION`
    #[error("Malformed request line at line {line}: expected 3 tokens, found {found}")]
    MalformedRequestLine { line: usize, found: usize },

    /// 没有第二行，无法取得 Host
    #[error("Missing host line: payload has no second line")]
    MissingHost,

    /// Header 缺少 `": "` 分隔符
    #[error("Malformed header at line {line}: expected 'Key: Value', got '{content}'")]
    MalformedHeader { line: usize, content: String },
}

/// 解析结果类型别名
pub type ParseResult<T> = Result<T, ParseError>;
