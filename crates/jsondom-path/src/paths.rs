use std::{
    ffi::OsStr,
    path::{is_separator, Path, PathBuf, MAIN_SEPARATOR},
};

/// Separator between path components.
pub const DIRECTORY_SEPARATOR: char = MAIN_SEPARATOR;

/// Separator between entries of `PATH`-like lists.
#[cfg(windows)]
pub const PATH_SEPARATOR: char = ';';
/// Separator between entries of `PATH`-like lists.
#[cfg(not(windows))]
pub const PATH_SEPARATOR: char = ':';

/// Join `parts` with [`DIRECTORY_SEPARATOR`].
///
/// Separators at the junctions are collapsed, so a later part starting with a separator is
/// appended rather than replacing the path built so far. Empty parts are skipped and a leading
/// separator on the first part is kept.
///
/// ```
/// use std::path::PathBuf;
/// use jsondom_path::concatenate;
///
/// let expected: PathBuf = ["/usr", "share", "doc"].iter().collect();
/// assert_eq!(concatenate(["/usr/", "/share", "doc"]), expected);
/// ```
pub fn concatenate<I, S>(parts: I) -> PathBuf
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut output = String::new();
    for part in parts {
        let mut part = part.as_ref();
        if !output.is_empty() {
            part = part.trim_start_matches(is_separator);
        }
        if part.is_empty() {
            continue;
        }
        if !output.is_empty() && !output.ends_with(is_separator) {
            output.push(DIRECTORY_SEPARATOR);
        }
        output.push_str(part);
    }
    PathBuf::from(output)
}

/// Path without its final component, `None` for a root or an empty path.
pub fn parent_of<P: AsRef<Path> + ?Sized>(path: &P) -> Option<&Path> {
    path.as_ref().parent()
}

/// Final component of `path`, optionally without its extension.
pub fn filename_of<P: AsRef<Path> + ?Sized>(path: &P, include_extension: bool) -> Option<&OsStr> {
    let path = path.as_ref();
    if include_extension {
        path.file_name()
    } else {
        path.file_stem()
    }
}

/// Extension of the final component of `path`, without the leading dot.
pub fn extension_of<P: AsRef<Path> + ?Sized>(path: &P) -> Option<&OsStr> {
    path.as_ref().extension()
}
