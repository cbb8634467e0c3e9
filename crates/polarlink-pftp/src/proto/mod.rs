//! PFTP protobuf 메시지 정의
//!
//! 디바이스 펌웨어의 `.proto` 정의를 prost derive로 옮긴 것.
//! 필드 번호는 디바이스와의 와이어 호환성에 직접 영향을 주므로 바꾸지 않는다.

/// 요청/디렉토리 메시지 (GET/PUT/REMOVE 연산, 디렉토리 목록)
pub mod request;

/// 디바이스 에러 코드
pub mod error;

/// D2H 알림 파라미터
pub mod notification;
