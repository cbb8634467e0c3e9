//! # polarlink-pftp
//!
//! BLE 세션 위의 PFTP(파일 전송 프로토콜) 오케스트레이션.
//! 바이트 단위 요청/응답/알림 전송 계층을 타입이 있는 파일 연산,
//! 재귀 디렉토리 탐색, D2H 알림 스트림으로 바꾼다.
//!
//! ## 구조
//!
//! - [`proto`]: PFTP protobuf 메시지 (prost derive)
//! - [`path`]: 경로 정규화
//! - [`codec`]: 연산 인코딩, 디렉토리 디코딩, 전송 에러 매핑
//! - [`session_gate`]: 세션/서비스 준비 확인
//! - [`traversal`]: 지연 재귀 디렉토리 탐색
//! - [`notifications`]: D2H 알림 역다중화
//! - [`freshness`]: 파일 신선도 캐시
//! - [`file_api`]: 공개 파일 API
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use polarlink_pftp::file_api::PolarFileApi;
//!
//! let api = PolarFileApi::new(listener, capabilities, &PolarLinkConfig::default());
//! let files = api.get_file_list("E123456F", "/U/0/", true).await?;
//! ```

pub mod codec;
pub mod file_api;
pub mod freshness;
pub mod notifications;
pub mod path;
pub mod proto;
pub mod session_gate;
pub mod traversal;

pub use file_api::PolarFileApi;
