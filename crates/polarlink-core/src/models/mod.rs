//! polarlink 도메인 모델.
//!
//! 세션 식별, 디바이스 파일 시스템 항목, 디바이스→호스트 알림,
//! 오프라인 레코딩 샘플 구조체를 정의한다.

pub mod file;
pub mod notification;
pub mod recording;
pub mod session;
