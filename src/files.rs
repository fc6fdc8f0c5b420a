use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// A local file that passed the existence and readability checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    /// Absolute path the content is read from
    pub path: PathBuf,
    /// Name sent alongside the content; the path exactly as the caller gave it
    pub display_name: String,
    /// Detected MIME type
    pub mime: String,
}

/// Outcome of inspecting a local path before upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileProbe {
    Missing,
    Unreadable,
    Readable(LocalFile),
}

/// Read-only view of local file metadata.
///
/// Abstracted so request building can be tested without touching disk.
pub trait FileSystem: Send + Sync {
    fn probe(&self, path: &str) -> FileProbe;
}

/// FileSystem backed by the real local disk
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn probe(&self, path: &str) -> FileProbe {
        let local = Path::new(path);

        match fs::metadata(local) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return FileProbe::Unreadable,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return FileProbe::Missing,
            Err(_) => return FileProbe::Unreadable,
        }

        // Handle is dropped immediately
        if File::open(local).is_err() {
            return FileProbe::Unreadable;
        }

        let absolute = match fs::canonicalize(local) {
            Ok(p) => p,
            Err(_) => return FileProbe::Unreadable,
        };

        FileProbe::Readable(LocalFile {
            mime: detect_mime(&absolute),
            path: absolute,
            display_name: path.to_string(),
        })
    }
}

/// Guess the MIME type of a file from its extension
pub fn detect_mime(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}
