//! 지연 재귀 디렉토리 탐색.
//!
//! 디렉토리 하나를 GET으로 나열하고, 하위 디렉토리는 깊이 우선으로
//! 순차 확장한다. 세션당 요청은 항상 하나만 진행 중이며, 스트림을
//! drop하면 이후 요청을 보내지 않는다.

use std::collections::VecDeque;
use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt};
use polarlink_core::error::PolarError;
use polarlink_core::models::file::RemoteFile;
use polarlink_core::ports::transport::PftpClient;
use tracing::debug;

use crate::codec::{decode_directory, map_transport_error, PftpCommand, PftpOperation};
use crate::path::{join, normalize_directory};

/// 항목 이름 포함 조건
pub type EntryFilter = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// 탐색 옵션
#[derive(Clone, Default)]
pub struct ListOptions {
    /// 하위 디렉토리를 펼쳐서 파일만 내보낼지
    pub recurse_deep: bool,
    /// 확장할 최대 디렉토리 깊이. 루트의 직속 항목이 깊이 1이고,
    /// 깊이가 이 값 이상인 디렉토리는 확장하지 않고 그대로 내보낸다.
    pub max_depth: Option<usize>,
    /// 디렉토리를 포함한 모든 항목 이름에 적용
    pub include: Option<EntryFilter>,
}

impl ListOptions {
    pub fn shallow() -> Self {
        Self::default()
    }

    pub fn deep() -> Self {
        Self {
            recurse_deep: true,
            ..Self::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_filter<F>(mut self, include: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.include = Some(Arc::new(include));
        self
    }

    fn includes(&self, name: &str) -> bool {
        self.include.as_ref().map_or(true, |include| include(name))
    }

    fn expands(&self, depth: usize) -> bool {
        self.recurse_deep && self.max_depth.map_or(true, |max| depth < max)
    }
}

impl std::fmt::Debug for ListOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListOptions")
            .field("recurse_deep", &self.recurse_deep)
            .field("max_depth", &self.max_depth)
            .field("include", &self.include.is_some())
            .finish()
    }
}

/// 한 디렉토리 목록에서 아직 내보내지 않은 항목
struct Frontier {
    entries: VecDeque<RemoteFile>,
    depth: usize,
}

struct Traversal {
    client: Arc<dyn PftpClient>,
    options: ListOptions,
    root: Option<String>,
    stack: Vec<Frontier>,
    requests: usize,
}

impl Traversal {
    async fn list_directory(&mut self, path: &str, depth: usize) -> Result<(), PolarError> {
        let operation = PftpOperation::new(PftpCommand::Get, path);
        debug!("디렉토리 조회: {operation}");
        self.requests += 1;
        let response = self
            .client
            .request(operation.encode())
            .await
            .map_err(|e| map_transport_error("list", e))?;

        let entries = decode_directory(&response)?
            .into_iter()
            .filter(|entry| self.options.includes(&entry.name))
            .map(|entry| RemoteFile {
                path: join(path, &entry.name),
                size: entry.size,
            })
            .collect();
        self.stack.push(Frontier { entries, depth });
        Ok(())
    }

    async fn next_file(&mut self) -> Result<Option<RemoteFile>, PolarError> {
        if let Some(root) = self.root.take() {
            self.list_directory(&root, 1).await?;
        }

        loop {
            let Some(frontier) = self.stack.last_mut() else {
                debug!("디렉토리 탐색 완료 (요청 {}회)", self.requests);
                return Ok(None);
            };
            let depth = frontier.depth;
            let Some(file) = frontier.entries.pop_front() else {
                self.stack.pop();
                continue;
            };

            if file.is_directory() && self.options.expands(depth) {
                self.list_directory(&file.path, depth + 1).await?;
                continue;
            }
            return Ok(Some(file));
        }
    }
}

/// `root` 아래 항목을 지연 스트림으로 나열
///
/// 첫 에러가 나면 그 에러를 내보내고 스트림이 끝난다.
pub fn list_files(
    client: Arc<dyn PftpClient>,
    root: &str,
    options: ListOptions,
) -> BoxStream<'static, Result<RemoteFile, PolarError>> {
    let traversal = Traversal {
        client,
        options,
        root: Some(normalize_directory(root)),
        stack: Vec::new(),
        requests: 0,
    };
    stream::try_unfold(traversal, |mut traversal| async move {
        let next = traversal.next_file().await?;
        Ok::<_, PolarError>(next.map(|file| (file, traversal)))
    })
    .boxed()
}
