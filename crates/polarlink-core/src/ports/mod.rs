//! 포트 인터페이스 (trait).
//!
//! BLE 전송 계층과 capability 설정, 파일 신선도 저장소는 외부 협력자다.
//! 각 어댑터가 이 trait들을 구현하며 `Arc<dyn T>`로 주입된다.
//!
//! 비동기 trait은 `async_trait` 매크로로 object safety를 보장한다.

pub mod capabilities;
pub mod freshness;
pub mod transport;
