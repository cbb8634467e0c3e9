//! 디바이스 파일 시스템 경로 정규화.
//!
//! 디바이스 경로는 항상 `/`로 시작하고, 디렉토리 경로는 `/`로 끝난다.

/// 디렉토리 경로 정규화: 빈 문자열은 루트, 앞뒤 `/` 보장
pub fn normalize_directory(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }
    let mut normalized = normalize_file(path);
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

/// 파일 경로 정규화: 빈 문자열은 루트, 앞 `/`만 보장
pub fn normalize_file(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// 디렉토리 경로와 항목 이름을 이어 붙임
pub fn join(directory: &str, name: &str) -> String {
    format!("{directory}{name}")
}
