//! String-level path algebra for display resources.
//!
//! A display reference is either a local path (`/displays/main.bob`,
//! `img\logo.png`) or a URL (`https://host/displays/main.bob`). Both are kept
//! as plain strings: `std::path::Path` cannot represent a URL and `url::Url`
//! cannot represent a relative path with spaces, so the operations here work
//! on `/`-separated text.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! [`normalize`] converts `\` separators into `/` and collapses
//! `segment/../` pairs. Up-references with no preceding segment are kept.
//!
//! ## Combination
//!
//! [`combine_display_paths`] resolves a child reference against the
//! directory of its parent display, while [`get_relative_path`] performs the
//! inverse, expressing an absolute reference relative to the parent.
//!
//! # Examples
//!
//! ```
//! use respath::path::{combine_display_paths, get_relative_path, normalize};
//!
//! let parent = "/displays/main/overview.bob";
//! let child = combine_display_paths(Some(parent), "../shared/pump.bob");
//! assert_eq!(child, "/displays/shared/pump.bob");
//! assert_eq!(get_relative_path(parent, &child), "../shared/pump.bob");
//! assert_eq!(normalize("a\\b\\..\\c"), "a/c");
//! ```
//!
//! None of these functions perform I/O.

pub mod normalize;
pub mod relative;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use normalize::{get_directory, is_absolute, is_url, normalize, split_path};
pub use relative::{combine_display_paths, get_relative_path};
