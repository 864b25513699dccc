use async_trait::async_trait;
use homepage_editor_application::ports::DocumentStore;
use homepage_editor_domain::{Document, DomainError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// Stores the dashboard document as a YAML file.
///
/// Saves never truncate the live file in place: the new content goes to a
/// sibling temp file which is synced and then renamed over the target. When
/// the configured path is a symlink the file it points to is replaced and the
/// link is left as is.
pub struct YamlDocumentStore {
    path: PathBuf,
}

impl YamlDocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DocumentStore for YamlDocumentStore {
    async fn load(&self) -> Result<Document, DomainError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Document file absent, starting empty");
                return Ok(Document::default());
            }
            Err(e) => {
                return Err(DomainError::Io(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        parse_document(&contents)
    }

    async fn save(&self, document: &Document) -> Result<(), DomainError> {
        let rendered = render_document(document)?;
        let target = resolve_target(&self.path).await?;
        write_atomic(&target, rendered.as_bytes()).await?;

        debug!(
            path = %target.display(),
            bytes = rendered.len(),
            "Document written"
        );
        Ok(())
    }
}

/// Parses YAML text into a document. Empty text and a bare `null` document
/// both read as an empty document.
pub fn parse_document(contents: &str) -> Result<Document, DomainError> {
    if contents.trim().is_empty() {
        return Ok(Document::default());
    }

    let parsed: Option<Document> =
        serde_yaml::from_str(contents).map_err(|e| DomainError::Format(e.to_string()))?;
    Ok(parsed.unwrap_or_default())
}

pub fn render_document(document: &Document) -> Result<String, DomainError> {
    serde_yaml::to_string(document)
        .map_err(|e| DomainError::Format(format!("Failed to serialize document: {}", e)))
}

/// Follows symlinks so the rename lands on the real file.
async fn resolve_target(path: &Path) -> Result<PathBuf, DomainError> {
    match tokio::fs::canonicalize(path).await {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            // A dangling link still names the file to create.
            match tokio::fs::read_link(path).await {
                Ok(link) => Ok(path.parent().map(|p| p.join(&link)).unwrap_or(link)),
                Err(_) => Ok(path.to_path_buf()),
            }
        }
        Err(e) => Err(DomainError::Io(format!(
            "Failed to resolve {}: {}",
            path.display(),
            e
        ))),
    }
}

async fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), DomainError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| DomainError::Io(format!("Invalid document path: {}", path.display())))?;

    tokio::fs::create_dir_all(parent).await.map_err(|e| {
        DomainError::Io(format!("Failed to create {}: {}", parent.display(), e))
    })?;

    let temp_path = parent.join(format!(
        ".{}.tmp.{}",
        file_name.to_string_lossy(),
        std::process::id()
    ));

    if let Err(e) = write_and_replace(&temp_path, path, contents).await {
        if let Err(cleanup) = tokio::fs::remove_file(&temp_path).await {
            if cleanup.kind() != ErrorKind::NotFound {
                warn!(
                    path = %temp_path.display(),
                    error = %cleanup,
                    "Failed to remove temp file"
                );
            }
        }
        return Err(DomainError::Io(format!(
            "Failed to write {}: {}",
            path.display(),
            e
        )));
    }

    Ok(())
}

async fn write_and_replace(temp_path: &Path, path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(temp_path).await?;
    file.write_all(contents).await?;
    file.sync_all().await?;
    drop(file);

    // Keep the mode of the file being replaced.
    if let Ok(metadata) = tokio::fs::metadata(path).await {
        tokio::fs::set_permissions(temp_path, metadata.permissions()).await?;
    }

    tokio::fs::rename(temp_path, path).await
}
