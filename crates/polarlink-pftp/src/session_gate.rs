//! 세션 준비 게이트.
//!
//! 모든 파일/알림 연산 앞에서 세션이 열려 있고, 서비스 탐색이 끝났고,
//! 필요한 알림 등록이 성공했는지 확인한다. 탐색 대기는 async 폴링이다.

use std::sync::Arc;

use polarlink_core::config::SessionGateConfig;
use polarlink_core::error::PolarError;
use polarlink_core::models::session::{DeviceIdentifier, GattService};
use polarlink_core::ports::transport::{
    DeviceListener, DeviceSession, PftpClient, ServiceClient,
};
use tokio::time::{sleep, Instant};
use tracing::{debug, warn};

/// 세션 준비 게이트
pub struct SessionGate {
    listener: Arc<dyn DeviceListener>,
    config: SessionGateConfig,
}

impl SessionGate {
    pub fn new(listener: Arc<dyn DeviceListener>, config: SessionGateConfig) -> Self {
        Self { listener, config }
    }

    /// 식별자에 맞는 세션 조회 (상태 검사 없음)
    pub fn find_session(&self, identifier: &str) -> Result<Arc<dyn DeviceSession>, PolarError> {
        let parsed = DeviceIdentifier::parse(identifier)?;
        self.listener
            .device_sessions()
            .into_iter()
            .find(|session| parsed.matches(session.address(), session.device_id()))
            .ok_or_else(|| PolarError::DeviceNotFound(identifier.to_string()))
    }

    /// 세션이 열려 있는지까지 확인
    pub fn open_session(&self, identifier: &str) -> Result<Arc<dyn DeviceSession>, PolarError> {
        let session = self.find_session(identifier)?;
        if !session.state().is_open() {
            debug!("세션이 열려 있지 않음: {identifier} ({:?})", session.state());
            return Err(PolarError::DeviceDisconnected);
        }
        Ok(session)
    }

    /// 지정한 서비스가 사용 가능한 세션을 반환
    pub async fn ready(
        &self,
        identifier: &str,
        service: GattService,
    ) -> Result<Arc<dyn DeviceSession>, PolarError> {
        let session = self.open_session(identifier)?;
        let client = session
            .service_client(service)
            .ok_or_else(|| PolarError::ServiceNotAvailable(service.to_string()))?;
        self.await_ready(client.as_ref(), service).await?;
        Ok(session)
    }

    /// PFTP 서비스가 사용 가능한 세션과 클라이언트를 반환
    pub async fn pftp_ready(
        &self,
        identifier: &str,
    ) -> Result<(Arc<dyn DeviceSession>, Arc<dyn PftpClient>), PolarError> {
        let session = self.open_session(identifier)?;
        let client = session
            .pftp_client()
            .ok_or_else(|| PolarError::ServiceNotAvailable(GattService::Pftp.to_string()))?;
        self.await_ready(client.as_ref(), GattService::Pftp).await?;
        Ok((session, client))
    }

    async fn await_ready<C>(&self, client: &C, service: GattService) -> Result<(), PolarError>
    where
        C: ServiceClient + ?Sized,
    {
        self.await_discovery(client, service).await?;
        for characteristic in service.required_notifications() {
            if !client.is_notification_enabled(*characteristic) {
                return Err(PolarError::NotificationNotEnabled(format!(
                    "{service}: {characteristic:?}"
                )));
            }
        }
        Ok(())
    }

    async fn await_discovery<C>(&self, client: &C, service: GattService) -> Result<(), PolarError>
    where
        C: ServiceClient + ?Sized,
    {
        if client.is_service_discovered() {
            return Ok(());
        }

        let timeout = self.config.discovery_timeout();
        let interval = self.config.discovery_poll_interval();
        let deadline = Instant::now() + timeout;
        debug!("{service} 서비스 탐색 대기 시작 (최대 {timeout:?})");

        loop {
            if Instant::now() >= deadline {
                warn!("{service} 서비스 탐색 시간 초과 ({timeout:?})");
                return Err(PolarError::ServiceNotAvailable(format!(
                    "{service}: 서비스 탐색 시간 초과"
                )));
            }
            sleep(interval).await;
            if client.is_service_discovered() {
                debug!("{service} 서비스 탐색 완료");
                return Ok(());
            }
        }
    }
}
