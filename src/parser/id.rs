use chrono::Utc;

/// 记录 ID 生成器
///
/// ID 是毫秒时间戳的字符串形式。同一毫秒内连续生成时取 `last + 1`，
/// 因此同一个生成器产生的 ID 严格递增。
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 基于当前时间生成下一个 ID
    pub fn next_id(&mut self) -> String {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// 基于给定的毫秒时间生成下一个 ID
    pub fn next_at(&mut self, now_ms: i64) -> String {
        let id = match self.last {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        };
        self.last = Some(id);
        id.to_string()
    }
}
