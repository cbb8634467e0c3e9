//! 통합 테스트용 모의 전송 계층.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use parking_lot::Mutex;
use polarlink_core::config::{DeviceCapabilitiesConfig, PolarLinkConfig};
use polarlink_core::models::session::{GattService, NotifyCharacteristic, SessionState};
use polarlink_core::ports::transport::{
    DeviceListener, DeviceSession, PftpClient, RawNotification, ServiceClient, TransportError,
};
use polarlink_pftp::codec::{decode_operation, PftpCommand};
use polarlink_pftp::proto::request::{PbPFtpDirectory, PbPFtpEntry};
use polarlink_pftp::PolarFileApi;
use prost::Message;

pub const ADDRESS: &str = "A0:9E:1A:00:11:22";
pub const DEVICE_ID: &str = "E123456F";

pub fn directory(entries: &[(&str, u64)]) -> Vec<u8> {
    PbPFtpDirectory {
        entries: entries
            .iter()
            .map(|(name, size)| PbPFtpEntry {
                name: name.to_string(),
                size: *size,
                created: None,
                modified: None,
                touched: None,
            })
            .collect(),
    }
    .encode_to_vec()
}

/// 모의 PFTP 클라이언트
///
/// 경로별 고정 응답이 있으면 그것을, 없으면 순서대로 쌓인 응답을 사용한다.
/// 둘 다 없으면 NO_SUCH_FILE_OR_DIRECTORY(103)로 응답한다.
#[derive(Default)]
pub struct MockPftp {
    by_path: Mutex<HashMap<String, Result<Vec<u8>, TransportError>>>,
    queued: Mutex<VecDeque<Result<Vec<u8>, TransportError>>>,
    /// 모든 요청을 이 에러로 실패시킴
    fail_all: Mutex<Option<TransportError>>,
    write_result: Mutex<Option<TransportError>>,
    notifications: Mutex<Vec<Result<RawNotification, TransportError>>>,
    requests: Mutex<Vec<(PftpCommand, String)>>,
    written: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MockPftp {
    pub fn respond(&self, path: &str, response: Result<Vec<u8>, TransportError>) {
        self.by_path.lock().insert(path.to_string(), response);
    }

    pub fn enqueue(&self, response: Vec<u8>) {
        self.queued.lock().push_back(Ok(response));
    }

    pub fn fail_all(&self, error: TransportError) {
        *self.fail_all.lock() = Some(error.clone());
        *self.write_result.lock() = Some(error);
    }

    pub fn push_notification(&self, id: i32, payload: Vec<u8>) {
        self.notifications
            .lock()
            .push(Ok(RawNotification { id, payload }));
    }

    pub fn push_notification_error(&self, error: TransportError) {
        self.notifications.lock().push(Err(error));
    }

    pub fn requests(&self) -> Vec<(PftpCommand, String)> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn written(&self) -> Vec<(String, Vec<u8>)> {
        self.written.lock().clone()
    }
}

impl ServiceClient for MockPftp {
    fn is_service_discovered(&self) -> bool {
        true
    }

    fn is_notification_enabled(&self, characteristic: NotifyCharacteristic) -> bool {
        characteristic == NotifyCharacteristic::PftpMtu
    }
}

#[async_trait]
impl PftpClient for MockPftp {
    async fn request(&self, operation: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        let (command, path) = decode_operation(&operation).expect("valid operation header");
        self.requests.lock().push((command, path.clone()));

        if let Some(error) = self.fail_all.lock().clone() {
            return Err(error);
        }
        if let Some(response) = self.by_path.lock().get(&path) {
            return response.clone();
        }
        self.queued
            .lock()
            .pop_front()
            .unwrap_or(Err(TransportError::Response(103)))
    }

    fn write(
        &self,
        operation: Vec<u8>,
        data: Vec<u8>,
    ) -> BoxStream<'static, Result<u64, TransportError>> {
        let (command, path) = decode_operation(&operation).expect("valid operation header");
        self.requests.lock().push((command, path.clone()));

        if let Some(error) = self.write_result.lock().clone() {
            return stream::iter(vec![Ok(0), Err(error)]).boxed();
        }
        let total = data.len() as u64;
        self.written.lock().push((path, data));
        let progress: Vec<Result<u64, TransportError>> =
            (1..=4).map(|step| Ok(total * step / 4)).collect();
        stream::iter(progress).boxed()
    }

    fn notifications(&self) -> BoxStream<'static, Result<RawNotification, TransportError>> {
        let items = std::mem::take(&mut *self.notifications.lock());
        // 실제 피드처럼 끝나지 않는다
        stream::iter(items).chain(stream::pending()).boxed()
    }
}

pub struct MockSession {
    pub address: String,
    pub device_id: String,
    pub device_type: String,
    pub state: Mutex<SessionState>,
    pub pftp: Option<Arc<MockPftp>>,
}

impl MockSession {
    pub fn open(device_type: &str, pftp: Arc<MockPftp>) -> Self {
        Self {
            address: ADDRESS.to_string(),
            device_id: DEVICE_ID.to_string(),
            device_type: device_type.to_string(),
            state: Mutex::new(SessionState::Open),
            pftp: Some(pftp),
        }
    }
}

impl DeviceSession for MockSession {
    fn address(&self) -> &str {
        &self.address
    }

    fn device_id(&self) -> &str {
        &self.device_id
    }

    fn device_type(&self) -> &str {
        &self.device_type
    }

    fn state(&self) -> SessionState {
        *self.state.lock()
    }

    fn service_client(&self, service: GattService) -> Option<Arc<dyn ServiceClient>> {
        match service {
            GattService::Pftp => self
                .pftp
                .clone()
                .map(|client| client as Arc<dyn ServiceClient>),
            _ => None,
        }
    }

    fn pftp_client(&self) -> Option<Arc<dyn PftpClient>> {
        self.pftp.clone().map(|client| client as Arc<dyn PftpClient>)
    }
}

#[derive(Default)]
pub struct MockListener {
    pub sessions: Mutex<Vec<Arc<MockSession>>>,
}

impl DeviceListener for MockListener {
    fn device_sessions(&self) -> Vec<Arc<dyn DeviceSession>> {
        self.sessions
            .lock()
            .iter()
            .map(|session| session.clone() as Arc<dyn DeviceSession>)
            .collect()
    }
}

/// 모의 디바이스 하나가 연결된 API
pub struct Fixture {
    pub api: PolarFileApi,
    pub pftp: Arc<MockPftp>,
    pub session: Arc<MockSession>,
}

pub fn fixture(device_type: &str) -> Fixture {
    let pftp = Arc::new(MockPftp::default());
    let session = Arc::new(MockSession::open(device_type, pftp.clone()));
    let listener = Arc::new(MockListener::default());
    listener.sessions.lock().push(session.clone());

    let api = PolarFileApi::new(
        listener,
        Arc::new(DeviceCapabilitiesConfig::default_config()),
        &PolarLinkConfig::default(),
    );
    Fixture { api, pftp, session }
}

/// 연결된 디바이스가 없는 API
pub fn empty_api() -> PolarFileApi {
    PolarFileApi::new(
        Arc::new(MockListener::default()),
        Arc::new(DeviceCapabilitiesConfig::default_config()),
        &PolarLinkConfig::default(),
    )
}
