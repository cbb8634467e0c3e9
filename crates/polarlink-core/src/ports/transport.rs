//! BLE 전송 계층 포트.
//!
//! 연결, 서비스 탐색, 바이트 단편화/재조립, MTU 협상은 전송 계층의 몫이다.
//! 이 crate는 세션 하나당 요청/응답, 스트리밍 쓰기, 알림 피드만 사용한다.

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::BoxStream;
use thiserror::Error;

use crate::models::session::{GattService, NotifyCharacteristic, SessionState};

/// 전송 계층 에러
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// BLE 연결 끊김
    #[error("BLE 연결 끊김")]
    Disconnected,
    /// 디바이스가 PFTP 에러 코드로 응답함
    #[error("PFTP 응답 에러: {0}")]
    Response(i32),
    /// 그 외 전송 실패
    #[error("{0}")]
    Other(String),
}

/// 알림 피드로 수신된 원시 메시지
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNotification {
    /// 알림 숫자 ID
    pub id: i32,
    /// 파라미터 바이트 (비어 있을 수 있음)
    pub payload: Vec<u8>,
}

/// GATT 서비스 클라이언트 공통 상태
pub trait ServiceClient: Send + Sync {
    /// 서비스 characteristic 탐색 완료 여부
    fn is_service_discovered(&self) -> bool;

    /// characteristic 알림 등록이 성공했는지
    fn is_notification_enabled(&self, characteristic: NotifyCharacteristic) -> bool;
}

/// PFTP 서비스 클라이언트
///
/// 세션당 동시에 하나의 요청만 처리된다. 호출자는 이전 응답(또는 실패)을
/// 확인하기 전에 다음 요청을 보내지 않는다.
#[async_trait]
pub trait PftpClient: ServiceClient {
    /// 직렬화된 연산을 보내고 응답 바이트를 받는다
    async fn request(&self, operation: Vec<u8>) -> Result<Vec<u8>, TransportError>;

    /// 연산 헤더와 데이터를 스트리밍 전송한다.
    ///
    /// 전송된 누적 바이트 수를 진행률로 내보내고, 완료 시 스트림이 끝난다.
    fn write(
        &self,
        operation: Vec<u8>,
        data: Vec<u8>,
    ) -> BoxStream<'static, Result<u64, TransportError>>;

    /// 끝나지 않는 D2H 알림 피드
    fn notifications(&self) -> BoxStream<'static, Result<RawNotification, TransportError>>;
}

/// 열린 BLE 세션 하나 (전송 계층 소유, 코어는 읽기만 함)
pub trait DeviceSession: Send + Sync {
    /// BT 주소
    fn address(&self) -> &str;

    /// 광고 패킷의 디바이스 ID
    fn device_id(&self) -> &str;

    /// 디바이스 종류 문자열 (파일 시스템 세대 선택에 사용)
    fn device_type(&self) -> &str;

    fn state(&self) -> SessionState;

    /// 서비스 클라이언트 조회
    fn service_client(&self, service: GattService) -> Option<Arc<dyn ServiceClient>>;

    /// PFTP 클라이언트 조회
    fn pftp_client(&self) -> Option<Arc<dyn PftpClient>>;
}

/// 열린 세션 디렉토리
pub trait DeviceListener: Send + Sync {
    fn device_sessions(&self) -> Vec<Arc<dyn DeviceSession>>;
}
