//! Opening, resolving and copying display resources.
//!
//! A [`ResourceResolver`] decides which file or URL a display reference
//! points to and opens it. URL content goes through a [`UrlReader`] and is
//! cached for the configured time-to-live. [`copy_resource`] moves an opened
//! resource into any writer.
//!
//! # Examples
//!
//! ```no_run
//! use respath::{copy_resource, ResolverSettings, ResourceResolver};
//!
//! let resolver = ResourceResolver::new(ResolverSettings::default());
//! let name = resolver.resolve(Some("/displays/main.bob"), "pump.opi");
//! let input = resolver.open_resource_stream(&name).unwrap();
//! copy_resource(input, std::io::stdout()).unwrap();
//! ```

pub mod copy;
pub mod reader;
pub mod resolver;

pub use copy::{copy_resource, COPY_BUFFER_SIZE};
pub use reader::{HttpReader, UrlReader};
pub use resolver::{ResourceResolver, UrlCache};
