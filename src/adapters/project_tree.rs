//! Filesystem operations on template and target project trees.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::domain::{AppError, BinaryFilter};

/// Outcome of a substitution pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubstitutionReport {
    /// Files inspected, excluded ones included.
    pub scanned: usize,
    /// Files left alone because of their extension.
    pub skipped: Vec<PathBuf>,
    /// Files whose content changed, relative to the tree root.
    pub rewritten: Vec<PathBuf>,
}

/// Recursively copy `src` to the not-yet-existing directory `dest`.
///
/// Symbolic links are recreated rather than followed on Unix.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<(), AppError> {
    if fs::symlink_metadata(dest).is_ok() {
        return Err(AppError::DestinationExists(dest.to_path_buf()));
    }
    if !src.is_dir() {
        return Err(AppError::config_error(format!(
            "Template directory not found: {}",
            src.display()
        )));
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::create_dir(dest).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => AppError::DestinationExists(dest.to_path_buf()),
        _ => AppError::Io(e),
    })?;

    for entry in WalkDir::new(src).min_depth(1).follow_links(false) {
        let entry = entry.map_err(walk_error)?;
        let relative = relative_to(entry.path(), src)?;
        let target = dest.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir(&target)?;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}

#[cfg(unix)]
fn copy_symlink(link: &Path, target: &Path) -> Result<(), AppError> {
    let pointee = fs::read_link(link)?;
    std::os::unix::fs::symlink(pointee, target)?;
    Ok(())
}

#[cfg(not(unix))]
fn copy_symlink(link: &Path, target: &Path) -> Result<(), AppError> {
    fs::copy(link, target)?;
    Ok(())
}

/// Remove a directory tree, tolerating its absence.
pub fn remove_dir_if_present(path: &Path) -> Result<bool, AppError> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Remove a file that is expected to exist.
pub fn remove_required_file(path: &Path) -> Result<(), AppError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(AppError::MissingExpectedFile(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Replace every occurrence of `token` with `replacement` in the text files
/// under `root`.
///
/// Files are only written when their content changes, so a second pass over an
/// already-substituted tree touches nothing.
pub fn substitute_token(
    root: &Path,
    token: &str,
    replacement: &str,
    filter: &BinaryFilter,
) -> Result<SubstitutionReport, AppError> {
    if token.is_empty() {
        return Err(AppError::config_error("substitution token must not be empty"));
    }

    let mut report = SubstitutionReport::default();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(walk_error)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let relative = relative_to(path, root)?.to_path_buf();
        report.scanned += 1;
        debug!("Checking: {}", path.display());

        if filter.is_excluded(path) {
            debug!("Skipping binary file: {}", path.display());
            report.skipped.push(relative);
            continue;
        }

        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes).map_err(|_| AppError::NonTextFile(path.to_path_buf()))?;
        if !text.contains(token) {
            continue;
        }

        debug!("Replacing '{}' with '{}' in: {}", token, replacement, path.display());
        fs::write(path, text.replace(token, replacement))?;
        report.rewritten.push(relative);
    }

    report.skipped.sort();
    report.rewritten.sort();
    Ok(report)
}

fn relative_to<'a>(path: &'a Path, root: &Path) -> Result<&'a Path, AppError> {
    path.strip_prefix(root).map_err(|_| {
        AppError::config_error(format!(
            "Path {} escaped tree root {}",
            path.display(),
            root.display()
        ))
    })
}

fn walk_error(err: walkdir::Error) -> AppError {
    match err.into_io_error() {
        Some(io) => AppError::Io(io),
        None => AppError::config_error("Filesystem loop detected while walking project tree"),
    }
}
