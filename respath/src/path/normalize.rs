//! Path normalization functions.
//!
//! Paths handled here are plain strings rather than `std::path::Path`
//! values: a display reference may be a local path containing spaces, or a
//! URL such as `https://host/displays/main.bob`, and both must survive the
//! same string operations unchanged apart from separator fixes and `..`
//! collapsing.

/// Scheme prefixes treated as remote locations.
pub const URL_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Check if a path is an `http://` or `https://` URL.
///
/// # Examples
///
/// ```
/// use respath::path::normalize::is_url;
///
/// assert!(is_url("https://host/display.bob"));
/// assert!(!is_url("/local/display.bob"));
/// assert!(!is_url("ftp://host/file"));
/// ```
#[must_use]
pub fn is_url(path: &str) -> bool {
    URL_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Check if a path is absolute, i.e. starts with `/` or is a URL.
///
/// # Examples
///
/// ```
/// use respath::path::normalize::is_absolute;
///
/// assert!(is_absolute("/one/two"));
/// assert!(is_absolute("http://host/one"));
/// assert!(!is_absolute("one/two"));
/// ```
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    path.starts_with('/') || is_url(path)
}

/// Replace each lone backslash with `/`.
///
/// A `\\` pair is an escaped backslash and is copied through unchanged.
/// Pairs are matched left to right, so in a run of three the last one is a
/// separator.
fn replace_backslashes(path: &str) -> String {
    let mut result = String::with_capacity(path.len());
    let mut chars = path.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
        } else if chars.next_if_eq(&'\\').is_some() {
            result.push_str("\\\\");
        } else {
            result.push('/');
        }
    }
    result
}

/// Normalize a path.
///
/// Windows-style separators become `/`, then every `segment/../` is
/// collapsed, leftmost first. Collapsing stops as soon as the leftmost
/// `/../` has no `/` before it, so up-references that walk above the start
/// of the path are kept as written.
///
/// # Examples
///
/// ```
/// use respath::path::normalize::normalize;
///
/// assert_eq!(normalize("a\\b\\c"), "a/b/c");
/// assert_eq!(normalize("a/b/../c"), "a/c");
/// assert_eq!(normalize("/a/b/../../c"), "/c");
/// assert_eq!(normalize("../a"), "../a");
/// ```
#[must_use]
pub fn normalize(path: &str) -> String {
    let mut result = replace_backslashes(path);
    while let Some(up) = result.find("/../") {
        match result[..up].rfind('/') {
            // Drop "/segment/.." and keep the trailing "/"
            Some(prev) => result.replace_range(prev..up + 3, ""),
            None => break,
        }
    }
    result
}

/// Obtain the directory portion of a path or URL.
///
/// The path is normalized, then everything from the last `/` on is removed.
/// A path without any `/` lives in `"."`. An absent path has no directory,
/// which callers express as `parent.map(get_directory)`.
///
/// # Examples
///
/// ```
/// use respath::path::normalize::get_directory;
///
/// assert_eq!(get_directory("/one/two/three.bob"), "/one/two");
/// assert_eq!(get_directory("http://host/a/b.png"), "http://host/a");
/// assert_eq!(get_directory("noslash"), ".");
/// assert_eq!(None::<&str>.map(get_directory), None);
/// ```
#[must_use]
pub fn get_directory(path: &str) -> String {
    let mut path = normalize(path);
    match path.rfind('/') {
        Some(sep) => {
            path.truncate(sep);
            path
        }
        None => ".".to_string(),
    }
}

/// Split a normalized path into its `/`-separated segments.
///
/// A leading `/` is ignored so `/a/b` and `a/b` give the same segments.
/// Trailing empty segments are dropped, while a path without any `/` is
/// returned as its own single segment (even when empty).
///
/// # Examples
///
/// ```
/// use respath::path::normalize::split_path;
///
/// assert_eq!(split_path("/a/b/c"), vec!["a", "b", "c"]);
/// assert_eq!(split_path("a/b/c"), vec!["a", "b", "c"]);
/// assert_eq!(split_path("a/b/"), vec!["a", "b"]);
/// assert_eq!(split_path("single"), vec!["single"]);
/// ```
#[must_use]
pub fn split_path(path: &str) -> Vec<&str> {
    let path = path.strip_prefix('/').unwrap_or(path);
    if !path.contains('/') {
        return vec![path];
    }

    let mut segments: Vec<&str> = path.split('/').collect();
    while segments.last() == Some(&"") {
        segments.pop();
    }
    segments
}
