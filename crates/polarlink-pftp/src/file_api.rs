//! 공개 파일 API.
//!
//! 세션 게이트, 경로 정규화, 코덱, 탐색, 알림, 오프라인 누적기를 조합해
//! 식별자 기반 파일 연산을 제공한다.

use std::sync::Arc;

use chrono::NaiveDate;
use futures::stream::{BoxStream, StreamExt, TryStream, TryStreamExt};
use polarlink_core::config::PolarLinkConfig;
use polarlink_core::error::PolarError;
use polarlink_core::models::file::RemoteFile;
use polarlink_core::models::recording::{OfflineChunk, RecordingResult};
use polarlink_core::ports::capabilities::CapabilityConfig;
use polarlink_core::ports::transport::{DeviceListener, PftpClient};
use tracing::{debug, info, warn};

use crate::codec::{map_transport_error, PftpCommand, PftpOperation};
use crate::notifications::{demux, NotificationEvent};
use crate::path::{normalize_directory, normalize_file};
use crate::session_gate::SessionGate;
use crate::traversal::{self, ListOptions};

/// 자동 샘플(24/7 측정) 디렉토리
pub const AUTO_SAMPLES_DIRECTORY: &str = "/U/0/AUTOS/";

/// 날짜별 사용자 데이터 디렉토리의 상위 경로
pub const USER_DATA_ROOT: &str = "/U/0/";

/// 식별자 기반 PFTP 파일 API
pub struct PolarFileApi {
    gate: SessionGate,
    capabilities: Arc<dyn CapabilityConfig>,
}

impl PolarFileApi {
    pub fn new(
        listener: Arc<dyn DeviceListener>,
        capabilities: Arc<dyn CapabilityConfig>,
        config: &PolarLinkConfig,
    ) -> Self {
        Self {
            gate: SessionGate::new(listener, config.session.clone()),
            capabilities,
        }
    }

    pub fn session_gate(&self) -> &SessionGate {
        &self.gate
    }

    /// 파일 내용 읽기 (GET)
    pub async fn read_file(&self, identifier: &str, path: &str) -> Result<Vec<u8>, PolarError> {
        let (_, client) = self.gate.pftp_ready(identifier).await?;
        let operation = PftpOperation::new(PftpCommand::Get, normalize_file(path));
        debug!("파일 읽기: {identifier} {operation}");
        let data = client
            .request(operation.encode())
            .await
            .map_err(|e| map_transport_error("read", e))?;
        debug!("파일 읽기 완료: {} ({}바이트)", operation.path(), data.len());
        Ok(data)
    }

    /// 파일 쓰기 (PUT). 진행률 스트림이 끝날 때까지 기다린다.
    pub async fn write_file(
        &self,
        identifier: &str,
        path: &str,
        data: Vec<u8>,
    ) -> Result<(), PolarError> {
        let (_, client) = self.gate.pftp_ready(identifier).await?;
        let operation = PftpOperation::new(PftpCommand::Put, normalize_file(path));
        let total = data.len();
        info!("파일 쓰기 시작: {identifier} {operation} ({total}바이트)");

        let mut progress = client.write(operation.encode(), data);
        while let Some(sent) = progress.next().await {
            let sent = sent.map_err(|e| map_transport_error("write", e))?;
            debug!("파일 쓰기 진행: {sent}/{total}");
        }
        info!("파일 쓰기 완료: {}", operation.path());
        Ok(())
    }

    /// 파일 또는 디렉토리 삭제 (REMOVE)
    pub async fn delete_file(&self, identifier: &str, path: &str) -> Result<(), PolarError> {
        let (_, client) = self.gate.pftp_ready(identifier).await?;
        remove(client.as_ref(), &normalize_file(path)).await
    }

    /// 디렉토리 나열
    ///
    /// `recurse_deep`이면 하위 디렉토리를 펼쳐 파일만, 아니면 직속 항목만 내보낸다.
    pub async fn list_files(
        &self,
        identifier: &str,
        path: &str,
        recurse_deep: bool,
    ) -> Result<BoxStream<'static, Result<RemoteFile, PolarError>>, PolarError> {
        let options = ListOptions {
            recurse_deep,
            ..ListOptions::default()
        };
        self.list_files_with(identifier, path, options).await
    }

    /// 이름 조건을 만족하는 항목만 깊이 우선으로 나열
    pub async fn list_files_matching<F>(
        &self,
        identifier: &str,
        path: &str,
        include: F,
    ) -> Result<BoxStream<'static, Result<RemoteFile, PolarError>>, PolarError>
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.list_files_with(identifier, path, ListOptions::deep().with_filter(include))
            .await
    }

    /// 옵션을 직접 지정한 나열
    ///
    /// 디렉토리 목록을 지원하지 않는 파일 시스템이면 요청 없이 실패한다.
    pub async fn list_files_with(
        &self,
        identifier: &str,
        path: &str,
        options: ListOptions,
    ) -> Result<BoxStream<'static, Result<RemoteFile, PolarError>>, PolarError> {
        let (session, client) = self.gate.pftp_ready(identifier).await?;
        let file_system = self.capabilities.file_system_type(session.device_type());
        if !file_system.supports_directory_listing() {
            return Err(PolarError::OperationNotSupported(format!(
                "{} ({file_system:?}) 디바이스는 디렉토리 목록을 지원하지 않음",
                session.device_type()
            )));
        }
        debug!("디렉토리 나열: {identifier} {path} {options:?}");
        Ok(traversal::list_files(client, path, options))
    }

    /// 나열 결과를 모두 모아 반환
    pub async fn get_file_list(
        &self,
        identifier: &str,
        path: &str,
        recurse_deep: bool,
    ) -> Result<Vec<RemoteFile>, PolarError> {
        let files: Vec<RemoteFile> = self
            .list_files(identifier, path, recurse_deep)
            .await?
            .try_collect()
            .await?;
        info!("파일 목록 조회 완료: {identifier} {path} ({}개)", files.len());
        Ok(files)
    }

    /// D2H 알림 구독
    pub async fn observe_notifications(
        &self,
        identifier: &str,
    ) -> Result<BoxStream<'static, Result<NotificationEvent, PolarError>>, PolarError> {
        let (_, client) = self.gate.pftp_ready(identifier).await?;
        info!("D2H 알림 구독 시작: {identifier}");
        Ok(demux(client.notifications()))
    }

    /// 하위 레코딩 청크 스트림을 하나의 레코딩으로 병합
    pub async fn fetch_offline_recording<S>(
        &self,
        identifier: &str,
        chunks: S,
    ) -> Result<Option<RecordingResult>, PolarError>
    where
        S: TryStream<Ok = OfflineChunk, Error = PolarError>,
    {
        self.gate.pftp_ready(identifier).await?;
        let result = polarlink_offline::accumulate_stream(chunks).await?;
        match &result {
            Some(recording) => info!(
                "오프라인 레코딩 병합 완료: {identifier} {} ({}개 샘플)",
                recording.modality(),
                recording.sample_count()
            ),
            None => info!("오프라인 레코딩 없음: {identifier}"),
        }
        Ok(result)
    }

    /// 자동 샘플 디렉토리 전체를 한 번의 REMOVE로 삭제
    pub async fn delete_auto_samples_directory(&self, identifier: &str) -> Result<(), PolarError> {
        let (_, client) = self.gate.pftp_ready(identifier).await?;
        info!("자동 샘플 디렉토리 삭제: {identifier}");
        remove(client.as_ref(), AUTO_SAMPLES_DIRECTORY).await
    }

    /// 날짜 범위(양 끝 포함)의 `/U/0/YYYYMMDD/<subdirectory>/` 삭제
    ///
    /// 날짜마다 REMOVE 한 번. 없는 디렉토리 등 개별 실패는 건너뛰고,
    /// 연결이 끊기면 중단한다. 삭제에 성공한 경로를 반환한다.
    pub async fn delete_stored_data_directories(
        &self,
        identifier: &str,
        subdirectory: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<String>, PolarError> {
        let (_, client) = self.gate.pftp_ready(identifier).await?;
        let subdirectory = subdirectory.trim_matches('/');
        let mut removed = Vec::new();

        for date in from.iter_days().take_while(|date| *date <= to) {
            let path = normalize_directory(&format!(
                "{USER_DATA_ROOT}{}/{subdirectory}",
                date.format("%Y%m%d")
            ));
            match remove(client.as_ref(), &path).await {
                Ok(()) => removed.push(path),
                Err(PolarError::DeviceDisconnected) => return Err(PolarError::DeviceDisconnected),
                Err(e) => warn!("저장 데이터 디렉토리 삭제 실패 (건너뜀): {path}: {e}"),
            }
        }

        info!(
            "저장 데이터 디렉토리 삭제 완료: {identifier} {subdirectory} {from}~{to} ({}개)",
            removed.len()
        );
        Ok(removed)
    }
}

async fn remove(client: &dyn PftpClient, path: &str) -> Result<(), PolarError> {
    let operation = PftpOperation::new(PftpCommand::Remove, path);
    debug!("삭제: {operation}");
    client
        .request(operation.encode())
        .await
        .map_err(|e| map_transport_error("delete", e))?;
    Ok(())
}
