#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # respath
//!
//! A library for resolving display resource references.
//!
//! Displays refer to other displays, images and scripts by name. A name can
//! be a local path, a URL, or a path relative to the display that mentions
//! it. This library turns such names into reachable resources, caches URL
//! content for a short time, and upgrades references to legacy files when a
//! newer version sits next to them.
//!
//! ## Core Types
//!
//! - [`ResourceResolver`]: Resolution and opening of files and URLs
//! - [`ContentCache`]: Time-bounded, thread-safe value cache
//! - [`path`]: Pure string path algebra for files and URLs
//! - [`Config`] and [`ResolverSettings`]: Layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use respath::path::combine_display_paths;
//! use respath::{ResolverSettings, ResourceResolver};
//!
//! let child = combine_display_paths(Some("/displays/main.bob"), "pumps/p1.bob");
//! assert_eq!(child, "/displays/pumps/p1.bob");
//!
//! let resolver = ResourceResolver::new(ResolverSettings::default());
//! // Unreachable references come back unchanged
//! assert_eq!(resolver.resolve(None, &child), child);
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod resource;

// Re-export key types at crate root for convenience
pub use cache::ContentCache;
pub use config::{Config, ConfigBuilder, ResolverSettings};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use resource::{copy_resource, HttpReader, ResourceResolver, UrlCache, UrlReader};
