//! PFTP 연산 코덱.
//!
//! 연산 헤더 인코딩, 디렉토리 응답 디코딩, 전송 에러를 [`PolarError`]로 매핑.

use polarlink_core::error::PolarError;
use polarlink_core::models::file::DirectoryEntry;
use polarlink_core::ports::transport::TransportError;
use prost::Message;

use crate::proto::error::PbPFtpError;
use crate::proto::request::{pb_p_ftp_operation::Command, PbPFtpDirectory, PbPFtpOperation};

/// PFTP 명령
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PftpCommand {
    Get,
    Put,
    Remove,
}

impl PftpCommand {
    fn to_proto(self) -> Command {
        match self {
            PftpCommand::Get => Command::Get,
            PftpCommand::Put => Command::Put,
            PftpCommand::Remove => Command::Remove,
        }
    }
}

impl std::fmt::Display for PftpCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PftpCommand::Get => f.write_str("GET"),
            PftpCommand::Put => f.write_str("PUT"),
            PftpCommand::Remove => f.write_str("REMOVE"),
        }
    }
}

/// 전송 직전의 불변 연산
///
/// PUT 데이터는 헤더와 별도로 쓰기 스트림으로 전달된다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PftpOperation {
    command: PftpCommand,
    path: String,
}

impl PftpOperation {
    /// 경로는 호출자가 이미 정규화한 값이어야 한다
    pub fn new(command: PftpCommand, path: impl Into<String>) -> Self {
        Self {
            command,
            path: path.into(),
        }
    }

    pub fn command(&self) -> PftpCommand {
        self.command
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// `PbPFtpOperation` 바이트로 직렬화
    pub fn encode(&self) -> Vec<u8> {
        encode_operation(self.command, &self.path)
    }
}

impl std::fmt::Display for PftpOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.command, self.path)
    }
}

pub fn encode_operation(command: PftpCommand, path: &str) -> Vec<u8> {
    PbPFtpOperation {
        command: command.to_proto() as i32,
        path: path.to_string(),
    }
    .encode_to_vec()
}

/// 연산 헤더 디코딩 (주로 테스트 더블이 요청 경로를 확인할 때 사용)
pub fn decode_operation(bytes: &[u8]) -> Result<(PftpCommand, String), PolarError> {
    let operation = PbPFtpOperation::decode(bytes)
        .map_err(|e| PolarError::Decode(format!("PFTP 연산 디코딩 실패: {e}")))?;
    let command = match Command::try_from(operation.command) {
        Ok(Command::Get) => PftpCommand::Get,
        Ok(Command::Put) => PftpCommand::Put,
        Ok(Command::Remove) => PftpCommand::Remove,
        Ok(Command::Merge) | Err(_) => {
            return Err(PolarError::Decode(format!(
                "지원하지 않는 PFTP 명령: {}",
                operation.command
            )))
        }
    };
    Ok((command, operation.path))
}

/// 디렉토리 GET 응답 디코딩
pub fn decode_directory(bytes: &[u8]) -> Result<Vec<DirectoryEntry>, PolarError> {
    let directory = PbPFtpDirectory::decode(bytes)
        .map_err(|e| PolarError::Decode(format!("디렉토리 목록 디코딩 실패: {e}")))?;
    Ok(directory
        .entries
        .into_iter()
        .map(|entry| DirectoryEntry {
            modified: entry.modified.as_ref().and_then(|m| m.to_naive()),
            name: entry.name,
            size: entry.size,
        })
        .collect())
}

/// PFTP 에러 코드 → 심볼 이름
pub fn protocol_error_name(code: i32) -> Option<&'static str> {
    PbPFtpError::try_from(code).ok().map(|e| e.as_str_name())
}

/// 전송 계층 에러를 도메인 에러로 변환
pub fn map_transport_error(operation: &str, error: TransportError) -> PolarError {
    match error {
        TransportError::Disconnected => PolarError::DeviceDisconnected,
        TransportError::Response(code) => PolarError::Protocol {
            code,
            name: protocol_error_name(code),
        },
        TransportError::Other(message) => PolarError::Transport(format!("{operation}: {message}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::request::{PbDate, PbPFtpEntry, PbSystemDateTime, PbTime};
    use assert_matches::assert_matches;

    fn directory_bytes(entries: &[(&str, u64)]) -> Vec<u8> {
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

    #[test]
    fn operation_header_decodes_back() {
        let op = PftpOperation::new(PftpCommand::Remove, "/U/0/AUTOS/");
        let (command, path) = decode_operation(&op.encode()).unwrap();
        assert_eq!(command, PftpCommand::Remove);
        assert_eq!(path, "/U/0/AUTOS/");
        assert_eq!(op.to_string(), "REMOVE /U/0/AUTOS/");
    }

    #[test]
    fn get_command_is_encoded_explicitly() {
        // required 필드이므로 기본값(GET=0)이어도 와이어에 기록된다
        let bytes = encode_operation(PftpCommand::Get, "/");
        assert_eq!(bytes[0], 0x08);
        assert_eq!(bytes[1], 0x00);
    }

    #[test]
    fn decodes_directory_in_device_order() {
        let entries = decode_directory(&directory_bytes(&[
            ("20250202/", 0),
            ("DEVICE.BPB", 512),
            ("20250101/", 0),
        ]))
        .unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["20250202/", "DEVICE.BPB", "20250101/"]);
        assert!(entries[0].is_directory());
        assert_eq!(entries[1].size, 512);
    }

    #[test]
    fn empty_response_is_empty_listing() {
        assert!(decode_directory(&[]).unwrap().is_empty());
    }

    #[test]
    fn directory_entry_keeps_modified_time() {
        let bytes = PbPFtpDirectory {
            entries: vec![PbPFtpEntry {
                name: "ASAMPL0.BPB".to_string(),
                size: 42,
                created: None,
                modified: Some(PbSystemDateTime {
                    date: Some(PbDate {
                        year: 2025,
                        month: 1,
                        day: 1,
                    }),
                    time: Some(PbTime {
                        hour: 8,
                        minute: 30,
                        seconds: 0,
                        millis: None,
                    }),
                    trusted: true,
                }),
                touched: None,
            }],
        }
        .encode_to_vec();
        let entries = decode_directory(&bytes).unwrap();
        assert_eq!(
            entries[0].modified.map(|m| m.to_string()),
            Some("2025-01-01 08:30:00".to_string())
        );
    }

    #[test]
    fn malformed_directory_is_decode_error() {
        assert_matches!(
            decode_directory(&[0x0A, 0x05, 0x01]),
            Err(PolarError::Decode(_))
        );
    }

    #[test]
    fn maps_disconnect() {
        assert_matches!(
            map_transport_error("read", TransportError::Disconnected),
            PolarError::DeviceDisconnected
        );
    }

    #[test]
    fn maps_known_protocol_code_with_name() {
        assert_matches!(
            map_transport_error("read", TransportError::Response(103)),
            PolarError::Protocol {
                code: 103,
                name: Some("NO_SUCH_FILE_OR_DIRECTORY")
            }
        );
        assert_matches!(
            map_transport_error("write", TransportError::Response(209)),
            PolarError::Protocol {
                code: 209,
                name: Some("BATTERY_TOO_LOW")
            }
        );
    }

    #[test]
    fn maps_unknown_protocol_code_without_name() {
        assert_matches!(
            map_transport_error("read", TransportError::Response(150)),
            PolarError::Protocol {
                code: 150,
                name: None
            }
        );
    }

    #[test]
    fn preserves_other_transport_messages() {
        let err = map_transport_error("delete", TransportError::Other("gatt busy".to_string()));
        match err {
            PolarError::Transport(message) => {
                assert!(message.contains("delete"));
                assert!(message.contains("gatt busy"));
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[test]
    fn error_code_table_covers_all_ranges() {
        assert_eq!(protocol_error_name(0), Some("OPERATION_SUCCEEDED"));
        assert_eq!(protocol_error_name(2), Some("TRY_AGAIN"));
        assert_eq!(protocol_error_name(108), Some("TIMEOUT"));
        assert_eq!(protocol_error_name(208), Some("WAIT_FOR_IDLING"));
        assert_eq!(protocol_error_name(3), None);
        assert_eq!(protocol_error_name(210), None);
    }
}
