//! File discovery module for finding media files to identify.
//!
//! The walker descends from a root path, pruning directories whose names fail
//! the keyword filters and selecting files whose names pass the keyword and
//! extension filters. Entries are visited in the order the platform lists
//! them, so the result is NOT sorted.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{CoreError, CoreResult};

/// Name-based filters applied while walking.
///
/// Keywords are matched as case-sensitive substrings of the bare entry name.
/// Extensions include the leading dot and are compared exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// An entry must contain at least one of these (ignored when empty)
    pub includes: Vec<String>,
    /// An entry must contain none of these
    pub excludes: Vec<String>,
    /// Accepted file extensions (ignored when empty; never applied to directories)
    pub extensions: Vec<String>,
    /// Skip every subdirectory of the root
    pub no_subdirs: bool,
}

impl DiscoveryOptions {
    /// Whether a directory with this name should be descended into.
    #[must_use]
    pub fn accepts_dir_name(&self, name: &str) -> bool {
        self.passes_keywords(name)
    }

    /// Whether a file with this name should be selected.
    #[must_use]
    pub fn accepts_file_name(&self, name: &str) -> bool {
        if !self.passes_keywords(name) {
            return false;
        }
        self.extensions.is_empty() || self.extensions.iter().any(|e| *e == suffix(name))
    }

    fn passes_keywords(&self, name: &str) -> bool {
        if !self.includes.is_empty() && !self.includes.iter().any(|k| name.contains(k.as_str())) {
            return false;
        }
        !self.excludes.iter().any(|k| name.contains(k.as_str()))
    }
}

/// The final extension of `name` with its dot, or an empty string.
fn suffix(name: &str) -> String {
    match Path::new(name).extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.is_empty() => format!(".{ext}"),
        _ => String::new(),
    }
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Finds the files beneath `root` that pass `options`.
///
/// When `root` is a file, the result is either empty or contains just `root`.
///
/// # Errors
///
/// * `CoreError::PathNotFound` if `root` does not exist
/// * `CoreError::Walkdir` if a directory cannot be read
///
/// # Examples
///
/// ```rust,no_run
/// use vidorg_core::discovery::{DiscoveryOptions, find_media_files};
/// use std::path::Path;
///
/// let options = DiscoveryOptions {
///     extensions: vec![".mkv".to_string()],
///     ..Default::default()
/// };
/// let files = find_media_files(Path::new("/media/anime"), &options).unwrap();
/// println!("Found {} files", files.len());
/// ```
pub fn find_media_files(root: &Path, options: &DiscoveryOptions) -> CoreResult<Vec<PathBuf>> {
    if !root.exists() {
        return Err(CoreError::PathNotFound(root.to_path_buf()));
    }

    if root.is_file() {
        log::debug!("{} is a file", root.display());
        let name = entry_name(root);
        return Ok(if options.accepts_file_name(&name) {
            vec![root.to_path_buf()]
        } else {
            log::debug!("Filter to skip: {}", root.display());
            Vec::new()
        });
    }

    let max_depth = if options.no_subdirs { 1 } else { usize::MAX };
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| {
            let name = entry.file_name().to_string_lossy();
            let keep = if entry.file_type().is_dir() {
                options.accepts_dir_name(&name)
            } else {
                // Non-directories are judged below
                true
            };
            if !keep {
                log::debug!("Filter to skip: {}", entry.path().display());
            }
            keep
        });

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_skippable(&err) => {
                log::warn!("Skipping unreadable entry: {err}");
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            if options.no_subdirs {
                log::debug!("`--no-subdir` skipping {}", entry.path().display());
            } else {
                log::debug!("Finding files in {}", entry.path().display());
            }
            continue;
        }
        if !file_type.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if options.accepts_file_name(&name) {
            log::debug!("Found {}", entry.path().display());
            files.push(entry.into_path());
        } else {
            log::debug!("Filter to skip: {}", entry.path().display());
        }
    }

    Ok(files)
}

/// Dangling symlinks and symlink loops are neither files nor directories; they
/// are passed over rather than failing the walk.
fn is_skippable(err: &walkdir::Error) -> bool {
    if err.loop_ancestor().is_some() {
        return true;
    }
    err.path().is_some_and(|p| {
        p.symlink_metadata()
            .is_ok_and(|m| m.file_type().is_symlink())
            && !p.exists()
    })
}
