//! D2H 알림 파라미터 메시지.
//!
//! `.proto`에서 `required`인 필드도 여기서는 `optional`로 선언한다.
//! prost는 proto2 `required`를 검사하지 않으므로, 필드가 빠진 메시지도
//! 기본값으로 채워져 디코딩된다. 존재 여부는 [`RequiredFields`]로 확인한다.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PbPFtpSyncTrigger {
    #[prost(enumeration = "pb_p_ftp_sync_trigger::Source", optional, tag = "1")]
    pub source: ::core::option::Option<i32>,
}

pub mod pb_p_ftp_sync_trigger {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Source {
        Timed = 0,
        DataChanged = 1,
        UserRequested = 2,
    }
}

/// SYNC_REQUIRED
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PbPFtpSyncRequiredParams {
    #[prost(message, repeated, tag = "1")]
    pub sync_triggers: ::prost::alloc::vec::Vec<PbPFtpSyncTrigger>,
}

/// FILESYSTEM_MODIFIED
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PbPFtpFilesystemModifiedParams {
    #[prost(enumeration = "pb_p_ftp_filesystem_modified_params::Action", optional, tag = "1")]
    pub action: ::core::option::Option<i32>,
    #[prost(string, optional, tag = "2")]
    pub path: ::core::option::Option<::prost::alloc::string::String>,
}

pub mod pb_p_ftp_filesystem_modified_params {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Action {
        Created = 0,
        Updated = 1,
        Removed = 2,
    }
}

/// INACTIVITY_ALERT
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PbPFtpInactivityAlert {
    /// 알림까지 남은 분
    #[prost(uint32, optional, tag = "1")]
    pub countdown: ::core::option::Option<u32>,
}

/// TRAINING_SESSION_STATUS
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PbPFtpTrainingSessionStatus {
    #[prost(bool, optional, tag = "1")]
    pub inprogress: ::core::option::Option<bool>,
}

/// AUTOSYNC_STATUS
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PbPFtpAutoSyncStatusParams {
    #[prost(bool, optional, tag = "1")]
    pub succeeded: ::core::option::Option<bool>,
    #[prost(string, optional, tag = "2")]
    pub description: ::core::option::Option<::prost::alloc::string::String>,
}

/// PNS_DH_NOTIFICATION_RESPONSE
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PbPftpPnsDhNotificationResponse {
    #[prost(uint32, optional, tag = "1")]
    pub notification_id: ::core::option::Option<u32>,
    #[prost(uint32, optional, tag = "2")]
    pub action: ::core::option::Option<u32>,
    #[prost(string, optional, tag = "3")]
    pub text: ::core::option::Option<::prost::alloc::string::String>,
}

/// PNS_SETTINGS
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PbPftpPnsState {
    #[prost(bool, optional, tag = "1")]
    pub notifications_enabled: ::core::option::Option<bool>,
    #[prost(bool, optional, tag = "2")]
    pub preview_enabled: ::core::option::Option<bool>,
}

/// START_GPS_MEASUREMENT
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PbPftpStartGpsMeasurement {
    /// 최소 측정 간격 (밀리초)
    #[prost(uint32, optional, tag = "1")]
    pub minimum_interval: ::core::option::Option<u32>,
    #[prost(uint32, optional, tag = "2")]
    pub accuracy: ::core::option::Option<u32>,
    #[prost(double, optional, tag = "3")]
    pub latitude: ::core::option::Option<f64>,
    #[prost(double, optional, tag = "4")]
    pub longitude: ::core::option::Option<f64>,
}

/// POLAR_SHELL_DH_DATA
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PbPftpPolarShellMessageParams {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub message: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
}

/// MEDIA_CONTROL_REQUEST_DH
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PbPftpDhMediaControlRequest {
    #[prost(enumeration = "MediaControlRequest", optional, tag = "1")]
    pub request: ::core::option::Option<i32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum MediaControlRequest {
    GetMediaData = 0,
}

/// MEDIA_CONTROL_COMMAND_DH
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PbPftpDhMediaControlCommand {
    #[prost(enumeration = "MediaControlCommand", optional, tag = "1")]
    pub command: ::core::option::Option<i32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum MediaControlCommand {
    Play = 0,
    Pause = 1,
    NextTrack = 2,
    PreviousTrack = 3,
    VolumeUp = 4,
    VolumeDown = 5,
}

/// MEDIA_CONTROL_ENABLED
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PbPftpDhMediaControlEnabled {
    #[prost(bool, optional, tag = "1")]
    pub enabled: ::core::option::Option<bool>,
}

/// REST_API_EVENT
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PbPftpDhRestApiEvent {
    #[prost(string, optional, tag = "1")]
    pub path: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(bytes = "vec", optional, tag = "2")]
    pub event: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
}

/// EXERCISE_STATUS
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PbPftpDhExerciseStatus {
    #[prost(enumeration = "ExerciseState", optional, tag = "1")]
    pub state: ::core::option::Option<i32>,
    #[prost(string, optional, tag = "2")]
    pub sport_profile: ::core::option::Option<::prost::alloc::string::String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ExerciseState {
    Off = 0,
    Running = 1,
    Paused = 2,
}

/// proto2 `required` 필드가 모두 채워졌는지 확인
pub trait RequiredFields {
    fn has_required_fields(&self) -> bool;
}

impl RequiredFields for PbPFtpSyncTrigger {
    fn has_required_fields(&self) -> bool {
        self.source.is_some()
    }
}

impl RequiredFields for PbPFtpSyncRequiredParams {
    fn has_required_fields(&self) -> bool {
        self.sync_triggers.iter().all(RequiredFields::has_required_fields)
    }
}

impl RequiredFields for PbPFtpFilesystemModifiedParams {
    fn has_required_fields(&self) -> bool {
        self.action.is_some() && self.path.is_some()
    }
}

impl RequiredFields for PbPFtpInactivityAlert {
    fn has_required_fields(&self) -> bool {
        self.countdown.is_some()
    }
}

impl RequiredFields for PbPFtpTrainingSessionStatus {
    fn has_required_fields(&self) -> bool {
        self.inprogress.is_some()
    }
}

impl RequiredFields for PbPFtpAutoSyncStatusParams {
    fn has_required_fields(&self) -> bool {
        self.succeeded.is_some()
    }
}

impl RequiredFields for PbPftpPnsDhNotificationResponse {
    fn has_required_fields(&self) -> bool {
        self.notification_id.is_some() && self.action.is_some()
    }
}

impl RequiredFields for PbPftpPnsState {
    fn has_required_fields(&self) -> bool {
        self.notifications_enabled.is_some()
    }
}

impl RequiredFields for PbPftpStartGpsMeasurement {
    fn has_required_fields(&self) -> bool {
        true
    }
}

impl RequiredFields for PbPftpPolarShellMessageParams {
    fn has_required_fields(&self) -> bool {
        self.message.is_some()
    }
}

impl RequiredFields for PbPftpDhMediaControlRequest {
    fn has_required_fields(&self) -> bool {
        self.request.is_some()
    }
}

impl RequiredFields for PbPftpDhMediaControlCommand {
    fn has_required_fields(&self) -> bool {
        self.command.is_some()
    }
}

impl RequiredFields for PbPftpDhMediaControlEnabled {
    fn has_required_fields(&self) -> bool {
        self.enabled.is_some()
    }
}

impl RequiredFields for PbPftpDhRestApiEvent {
    fn has_required_fields(&self) -> bool {
        self.path.is_some()
    }
}

impl RequiredFields for PbPftpDhExerciseStatus {
    fn has_required_fields(&self) -> bool {
        self.state.is_some()
    }
}
