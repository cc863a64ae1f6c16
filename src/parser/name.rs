/// 由文件名派生记录名称：第一个 `.` 之前的部分
///
/// `login.http` -> `login`，`a.b.c` -> `a`，`.env` -> ``
pub fn record_name(file_name: &str) -> &str {
    file_name
        .split_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name)
}
