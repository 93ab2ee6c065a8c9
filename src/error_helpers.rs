//! Error helper functions for creating actionable error messages

use std::io;
use std::path::Path;

/// Check if an IO error is a permission denied error
pub fn is_permission_denied(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::PermissionDenied
}

/// Check if an IO error is a "not found" error
pub fn is_not_found(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::NotFound
}

/// `read_to_string` reports non-UTF-8 content as invalid data
pub fn is_invalid_utf8(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::InvalidData
}

/// A source file the migration cannot read or rewrite
pub fn permission_error(path: &Path, operation: &str) -> String {
    format!(
        "Permission denied when {} '{}'\n\n\
         Possible fixes:\n\
         1. The migration rewrites sources in place: chmod u+rw '{}'\n\
         2. Preview the remaining changes without writing: slf4j-migrate --dry-run",
        operation,
        path.display(),
        path.display()
    )
}

/// A discovered source that disappeared before it could be processed
pub fn not_found_error(path: &Path, context: &str) -> String {
    format!(
        "Source file vanished: '{}'\n\n\
         Context: {}\n\n\
         Possible fixes:\n\
         1. Avoid running a build or checkout while the migration is running\n\
         2. Check for a dangling symbolic link: ls -l '{}'",
        path.display(),
        context,
        path.display()
    )
}

/// The replacement file is staged next to the source, so its directory must be writable
pub fn temp_file_error(dir: &Path, err: &io::Error) -> String {
    let base = format!(
        "Failed to stage the rewritten file in directory '{}'",
        dir.display()
    );

    if is_permission_denied(err) {
        format!(
            "{}\n\n\
             Cause: the directory is not writable\n\n\
             Possible fixes:\n\
             1. Grant write access to the directory, not just the file: chmod u+w '{}'\n\
             2. Preview the change instead: slf4j-migrate --dry-run",
            base,
            dir.display()
        )
    } else {
        format!("{}\n\nUnderlying error: {}", base, err)
    }
}

/// Create an enhanced error message for sources that are not UTF-8
pub fn encoding_error(path: &Path) -> String {
    format!(
        "File is not valid UTF-8: '{}'\n\n\
         Possible fixes:\n\
         1. Check the encoding: file -i '{}'\n\
         2. Convert it first: iconv -f ISO-8859-1 -t UTF-8 '{}' -o '{}.utf8'",
        path.display(),
        path.display(),
        path.display(),
        path.display()
    )
}

/// Pick the most helpful message for an IO failure on `path`
pub fn describe_io_error(path: &Path, operation: &str, err: &io::Error) -> String {
    if is_permission_denied(err) {
        permission_error(path, operation)
    } else if is_not_found(err) {
        not_found_error(path, operation)
    } else if is_invalid_utf8(err) {
        encoding_error(path)
    } else {
        format!("Failed {} '{}': {}", operation, path.display(), err)
    }
}
