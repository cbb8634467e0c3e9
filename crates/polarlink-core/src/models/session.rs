//! 세션 모델.
//!
//! BLE 세션 상태, GATT 서비스 종류, 세션 식별자 파싱.

use serde::{Deserialize, Serialize};

use crate::error::PolarError;

/// BLE 디바이스 세션 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    /// 연결 없음
    Closed,
    /// 연결 수립 중
    Opening,
    /// 연결 대기 (재연결 예약)
    OpenPark,
    /// 연결됨
    Open,
    /// 연결 해제 중
    Closing,
}

impl SessionState {
    /// 요청을 보낼 수 있는 상태인지
    pub fn is_open(self) -> bool {
        matches!(self, SessionState::Open)
    }
}

/// 알림 등록이 필요한 characteristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotifyCharacteristic {
    /// PFTP MTU characteristic
    PftpMtu,
    /// PMD control point
    PmdControlPoint,
    /// PMD data
    PmdData,
    /// 심박 측정값
    HrMeasurement,
}

/// 세션 게이트가 검사하는 GATT 서비스
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GattService {
    /// 파일 전송 서비스 (PFTP)
    Pftp,
    /// 측정 데이터 서비스 (PMD)
    Pmd,
    /// 표준 심박 서비스
    HeartRate,
    /// 디바이스 기능 설정 서비스 (PFC)
    Pfc,
}

impl GattService {
    /// 서비스 사용 전 성공적으로 등록되어 있어야 하는 알림 목록.
    ///
    /// PFC는 탐색 완료만 요구한다.
    pub fn required_notifications(self) -> &'static [NotifyCharacteristic] {
        match self {
            GattService::Pftp => &[NotifyCharacteristic::PftpMtu],
            GattService::Pmd => &[
                NotifyCharacteristic::PmdControlPoint,
                NotifyCharacteristic::PmdData,
            ],
            GattService::HeartRate => &[NotifyCharacteristic::HrMeasurement],
            GattService::Pfc => &[],
        }
    }

    /// 로그/에러 메시지용 이름
    pub fn name(self) -> &'static str {
        match self {
            GattService::Pftp => "PFTP",
            GattService::Pmd => "PMD",
            GattService::HeartRate => "HR",
            GattService::Pfc => "PFC",
        }
    }
}

impl std::fmt::Display for GattService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 사용자 식별자: BT 주소 또는 디바이스 ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceIdentifier {
    /// `AA:BB:CC:DD:EE:FF` 또는 `AA-BB-CC-DD-EE-FF`
    Address(String),
    /// 6~8자리 16진수 디바이스 ID
    DeviceId(String),
}

impl DeviceIdentifier {
    /// 식별자 문자열 파싱
    ///
    /// 어느 형식에도 맞지 않으면 `InvalidArgument`.
    pub fn parse(identifier: &str) -> Result<Self, PolarError> {
        if is_mac_address(identifier) {
            Ok(DeviceIdentifier::Address(identifier.to_string()))
        } else if is_device_id(identifier) {
            Ok(DeviceIdentifier::DeviceId(identifier.to_string()))
        } else {
            Err(PolarError::InvalidArgument(identifier.to_string()))
        }
    }

    /// 세션의 주소/디바이스 ID와 일치하는지 (형식에 맞는 필드만 비교)
    ///
    /// ASCII 대소문자는 구분하지 않는다. `a0:9e:1a:12:34:56`과
    /// `A0:9E:1A:12:34:56`은 같은 주소로 본다.
    pub fn matches(&self, address: &str, device_id: &str) -> bool {
        match self {
            DeviceIdentifier::Address(addr) => addr.eq_ignore_ascii_case(address),
            DeviceIdentifier::DeviceId(id) => id.eq_ignore_ascii_case(device_id),
        }
    }
}

impl std::fmt::Display for DeviceIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceIdentifier::Address(addr) => f.write_str(addr),
            DeviceIdentifier::DeviceId(id) => f.write_str(id),
        }
    }
}

fn is_mac_address(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 17 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| {
        if i % 3 == 2 {
            *b == b':' || *b == b'-'
        } else {
            b.is_ascii_hexdigit()
        }
    })
}

fn is_device_id(s: &str) -> bool {
    (6..=8).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_hexdigit())
}
