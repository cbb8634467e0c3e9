/// 디바이스가 응답 에러로 보고하는 PFTP 에러 코드
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PbPFtpError {
    OperationSucceeded = 0,
    Rebooting = 1,
    TryAgain = 2,
    UnidentifiedHostError = 100,
    InvalidCommand = 101,
    InvalidParameter = 102,
    NoSuchFileOrDirectory = 103,
    DirectoryExists = 104,
    FileExists = 105,
    OperationNotPermitted = 106,
    NoSuchUser = 107,
    Timeout = 108,
    UnidentifiedDeviceError = 200,
    NotImplemented = 201,
    SystemBusy = 202,
    InvalidContent = 203,
    ChecksumFailure = 204,
    DiskFull = 205,
    PrerequisiteNotMet = 206,
    InsufficientBuffer = 207,
    WaitForIdling = 208,
    BatteryTooLow = 209,
}

impl PbPFtpError {
    /// `.proto` 정의에 쓰인 심볼 이름
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::OperationSucceeded => "OPERATION_SUCCEEDED",
            Self::Rebooting => "REBOOTING",
            Self::TryAgain => "TRY_AGAIN",
            Self::UnidentifiedHostError => "UNIDENTIFIED_HOST_ERROR",
            Self::InvalidCommand => "INVALID_COMMAND",
            Self::InvalidParameter => "INVALID_PARAMETER",
            Self::NoSuchFileOrDirectory => "NO_SUCH_FILE_OR_DIRECTORY",
            Self::DirectoryExists => "DIRECTORY_EXISTS",
            Self::FileExists => "FILE_EXISTS",
            Self::OperationNotPermitted => "OPERATION_NOT_PERMITTED",
            Self::NoSuchUser => "NO_SUCH_USER",
            Self::Timeout => "TIMEOUT",
            Self::UnidentifiedDeviceError => "UNIDENTIFIED_DEVICE_ERROR",
            Self::NotImplemented => "NOT_IMPLEMENTED",
            Self::SystemBusy => "SYSTEM_BUSY",
            Self::InvalidContent => "INVALID_CONTENT",
            Self::ChecksumFailure => "CHECKSUM_FAILURE",
            Self::DiskFull => "DISK_FULL",
            Self::PrerequisiteNotMet => "PREREQUISITE_NOT_MET",
            Self::InsufficientBuffer => "INSUFFICIENT_BUFFER",
            Self::WaitForIdling => "WAIT_FOR_IDLING",
            Self::BatteryTooLow => "BATTERY_TOO_LOW",
        }
    }
}
