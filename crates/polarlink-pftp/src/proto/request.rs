use chrono::{NaiveDate, NaiveDateTime};

/// PFTP 연산 헤더
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PbPFtpOperation {
    #[prost(enumeration = "pb_p_ftp_operation::Command", required, tag = "1")]
    pub command: i32,
    #[prost(string, required, tag = "2")]
    pub path: ::prost::alloc::string::String,
}

pub mod pb_p_ftp_operation {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Command {
        Get = 0,
        Put = 1,
        Merge = 2,
        Remove = 3,
    }
}

/// 디렉토리 GET 응답
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PbPFtpDirectory {
    #[prost(message, repeated, tag = "1")]
    pub entries: ::prost::alloc::vec::Vec<PbPFtpEntry>,
}

/// 디렉토리 항목
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PbPFtpEntry {
    #[prost(string, required, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(uint64, required, tag = "2")]
    pub size: u64,
    #[prost(message, optional, tag = "3")]
    pub created: ::core::option::Option<PbSystemDateTime>,
    #[prost(message, optional, tag = "4")]
    pub modified: ::core::option::Option<PbSystemDateTime>,
    #[prost(message, optional, tag = "5")]
    pub touched: ::core::option::Option<PbSystemDateTime>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PbSystemDateTime {
    #[prost(message, optional, tag = "1")]
    pub date: ::core::option::Option<PbDate>,
    #[prost(message, optional, tag = "2")]
    pub time: ::core::option::Option<PbTime>,
    /// 디바이스 시계가 사용자/모바일과 동기화된 값인지
    #[prost(bool, required, tag = "3")]
    pub trusted: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PbDate {
    #[prost(uint32, required, tag = "1")]
    pub year: u32,
    #[prost(uint32, required, tag = "2")]
    pub month: u32,
    #[prost(uint32, required, tag = "3")]
    pub day: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PbTime {
    #[prost(uint32, required, tag = "1")]
    pub hour: u32,
    #[prost(uint32, required, tag = "2")]
    pub minute: u32,
    #[prost(uint32, required, tag = "3")]
    pub seconds: u32,
    #[prost(uint32, optional, tag = "4")]
    pub millis: ::core::option::Option<u32>,
}

impl PbSystemDateTime {
    /// 날짜/시각이 모두 있고 유효할 때만 변환
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        let date = self.date.as_ref()?;
        let time = self.time.as_ref()?;
        NaiveDate::from_ymd_opt(i32::try_from(date.year).ok()?, date.month, date.day)?
            .and_hms_milli_opt(
                time.hour,
                time.minute,
                time.seconds,
                time.millis.unwrap_or(0),
            )
    }

    pub fn from_naive(value: NaiveDateTime) -> Self {
        use chrono::{Datelike, Timelike};
        Self {
            date: Some(PbDate {
                year: value.year().max(0) as u32,
                month: value.month(),
                day: value.day(),
            }),
            time: Some(PbTime {
                hour: value.hour(),
                minute: value.minute(),
                seconds: value.second(),
                millis: Some(value.nanosecond() / 1_000_000),
            }),
            trusted: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_date_time_requires_both_parts() {
        let partial = PbSystemDateTime {
            date: Some(PbDate {
                year: 2025,
                month: 1,
                day: 1,
            }),
            time: None,
            trusted: true,
        };
        assert!(partial.to_naive().is_none());
    }

    #[test]
    fn invalid_calendar_date_is_none() {
        let value = PbSystemDateTime {
            date: Some(PbDate {
                year: 2025,
                month: 2,
                day: 30,
            }),
            time: Some(PbTime {
                hour: 0,
                minute: 0,
                seconds: 0,
                millis: None,
            }),
            trusted: false,
        };
        assert!(value.to_naive().is_none());
    }

    #[test]
    fn converts_valid_timestamp() {
        let expected = NaiveDate::from_ymd_opt(2025, 2, 2)
            .unwrap()
            .and_hms_milli_opt(13, 45, 10, 250)
            .unwrap();
        assert_eq!(
            PbSystemDateTime::from_naive(expected).to_naive(),
            Some(expected)
        );
    }
}
