//! # polarlink-offline
//!
//! 디바이스에 저장된 오프라인 레코딩은 여러 하위 레코딩으로 나뉘어 도착한다.
//! [`OfflineAccumulator`]는 모달리티별로 하나의 버퍼에 샘플을 이어 붙여
//! 청크 수와 무관하게 O(n)으로 병합한다.
//!
//! ```rust,ignore
//! let mut acc = OfflineAccumulator::new();
//! for chunk in chunks {
//!     acc.accumulate(chunk)?;
//! }
//! let recording = acc.finalize();
//! ```

pub mod accumulator;

pub use accumulator::{accumulate_stream, OfflineAccumulator};
