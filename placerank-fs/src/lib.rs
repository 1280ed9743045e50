//! UTF-8 file helpers for ranking requests and results, built on `cap-std`
//! and `camino`.
//!
//! Every path is resolved against an ambient directory handle, so reads and
//! writes go through capability-checked `fs_utf8` APIs rather than
//! `std::fs`.
#![forbid(unsafe_code)]

use std::io::{self, Read};
use std::path::Component;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open a UTF-8 file path using ambient authority.
///
/// # Errors
/// Returns the underlying I/O error when the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read the whole of a UTF-8 text file.
///
/// # Errors
/// Returns the underlying I/O error when the file cannot be opened or its
/// contents are not valid UTF-8.
pub fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let mut contents = String::new();
    open_utf8_file(path)?.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Return whether `path` exists and is a regular file.
///
/// # Errors
/// Returns the underlying I/O error when the parent directory cannot be
/// opened or the entry cannot be inspected; a missing entry surfaces as
/// [`io::ErrorKind::NotFound`].
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_parent_dir(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Write `contents` to `path`, creating missing parent directories and
/// replacing any existing file.
///
/// # Errors
/// Returns the underlying I/O error when a directory cannot be created or
/// the file cannot be written.
pub fn write_utf8_file(path: &Utf8Path, contents: &str) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let (dir, name) = open_parent_dir(path)?;
    dir.write(name.as_str(), contents)
}

/// Open the directory containing `path` and return it with the file name.
fn open_parent_dir(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("target should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Create the parent directory of `path` and any missing ancestors.
fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() {
        return Ok(());
    }
    let (base, relative) = split_base(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?.create_dir_all(&relative)
}

/// Split a directory path into an ambient base (root, drive, or `.`) and the
/// path relative to it.
fn split_base(dir: &Utf8Path) -> io::Result<(Utf8PathBuf, Utf8PathBuf)> {
    let std_dir = dir.as_std_path();
    let base = match std_dir.components().next() {
        Some(Component::Prefix(component)) => {
            let prefix = component
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            Utf8PathBuf::from(prefix).join(std::path::MAIN_SEPARATOR_STR)
        }
        Some(Component::RootDir) => Utf8PathBuf::from(std::path::MAIN_SEPARATOR_STR),
        _ => return Ok((Utf8PathBuf::from("."), dir.to_path_buf())),
    };
    let relative = dir
        .strip_prefix(&base)
        .map_err(|_| io::Error::other("failed to strip base from directory path"))?
        .to_path_buf();
    Ok((base, relative))
}
