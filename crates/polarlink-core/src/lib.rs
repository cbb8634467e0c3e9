//! # polarlink-core
//!
//! polarlink 도메인 모델, 포트(trait) 정의, 에러 타입, 설정.
//! 모든 크레이트가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`]: 세션/파일/알림/오프라인 레코딩 도메인 구조체
//! - [`ports`]: BLE 전송 계층 및 외부 협력자 포트 인터페이스
//! - [`error`]: 핵심 에러 타입 (thiserror)
//! - [`config`]: 런타임 설정 및 디바이스 capability 문서
//! - [`config_manager`]: capability 문서 파일 관리 (로드/저장)

pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
pub mod ports;
