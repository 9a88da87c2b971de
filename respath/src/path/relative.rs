//! Relative and combined display paths.
//!
//! A child display refers to its resources either absolutely or relative to
//! the directory of the parent display. These functions convert between the
//! two forms without touching the filesystem.

use super::normalize::{get_directory, is_absolute, normalize, split_path};

/// Express `path` relative to the directory of `parent`.
///
/// A path that is already relative is returned (normalized) as is.
/// Otherwise the shared leading segments are skipped, one `..` is emitted
/// for every remaining segment of the parent directory, followed by the
/// rest of `path`.
///
/// # Examples
///
/// ```
/// use respath::path::get_relative_path;
///
/// assert_eq!(
///     get_relative_path("/a/b/parent.bob", "/a/c/example.bob"),
///     "../c/example.bob"
/// );
/// assert_eq!(get_relative_path("/a/b/parent.bob", "/a/b/x.png"), "x.png");
/// assert_eq!(get_relative_path("/a/b/parent.bob", "already/relative.png"), "already/relative.png");
/// ```
#[must_use]
pub fn get_relative_path(parent: &str, path: &str) -> String {
    let path = normalize(path);
    if !is_absolute(&path) {
        return path;
    }

    let parent_dir = get_directory(parent);
    let parent_elements = split_path(&parent_dir);
    let path_elements = split_path(&path);
    let common = parent_elements
        .iter()
        .zip(&path_elements)
        .take_while(|(a, b)| a == b)
        .count();

    let up = std::iter::repeat("..").take(parent_elements.len() - common);
    let down = path_elements[common..].iter().copied();

    let mut relative = String::new();
    for segment in up.chain(down) {
        if !relative.is_empty() {
            relative.push('/');
        }
        relative.push_str(segment);
    }
    relative
}

/// Combine a display path with the path of its parent display.
///
/// Without a parent, `path` is returned untouched. An absolute `path`
/// (after normalization) wins over the parent. A relative `path` is appended
/// to the directory of the parent and the result normalized again, so `..`
/// segments introduced by the child are collapsed against the parent.
///
/// # Examples
///
/// ```
/// use respath::path::combine_display_paths;
///
/// assert_eq!(
///     combine_display_paths(Some("/a/b/parent.bob"), "sub/child.bob"),
///     "/a/b/sub/child.bob"
/// );
/// assert_eq!(combine_display_paths(None, "x.bob"), "x.bob");
/// assert_eq!(
///     combine_display_paths(Some("/a/parent.bob"), "/abs/x.bob"),
///     "/abs/x.bob"
/// );
/// ```
#[must_use]
pub fn combine_display_paths(parent: Option<&str>, path: &str) -> String {
    let parent = match parent {
        Some(parent) if !parent.is_empty() => parent,
        _ => return path.to_string(),
    };

    let path = normalize(path);
    if is_absolute(&path) {
        return path;
    }

    let directory = get_directory(&normalize(parent));
    normalize(&format!("{directory}/{path}"))
}
