//! Resolution of display references to reachable resources.

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;
use std::sync::Arc;

use crate::cache::ContentCache;
use crate::config::ResolverSettings;
use crate::error::Result;
use crate::path::{combine_display_paths, is_url};
use crate::resource::reader::{HttpReader, UrlReader};

/// Cache of URL bodies keyed by the literal URL text.
pub type UrlCache = ContentCache<Arc<[u8]>>;

/// Prefix stripped from names before resolution.
const FILE_PREFIX: &str = "file:";

/// Turns display references into reachable files or URLs.
///
/// URL content is read through a shared [`UrlCache`], so probing a URL during
/// [`resolve`](Self::resolve) and opening it right after costs one request.
///
/// # Examples
///
/// ```
/// use respath::{ResolverSettings, ResourceResolver};
///
/// let resolver = ResourceResolver::new(ResolverSettings::default());
///
/// // Nothing matches, so the name comes back as given
/// assert_eq!(resolver.resolve(None, "file:missing.bob"), "missing.bob");
/// ```
pub struct ResourceResolver {
    settings: ResolverSettings,
    cache: Arc<UrlCache>,
    reader: Arc<dyn UrlReader>,
}

impl ResourceResolver {
    /// Create a resolver with its own cache and an [`HttpReader`].
    #[must_use]
    pub fn new(settings: ResolverSettings) -> Self {
        let cache = Arc::new(ContentCache::new(settings.cache_ttl));
        let reader = Arc::new(HttpReader::new(
            settings.read_timeout,
            settings.trust_self_signed,
        ));
        Self {
            settings,
            cache,
            reader,
        }
    }

    /// Share `cache` with other resolvers.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<UrlCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Fetch URL content through `reader` instead of the network client.
    #[must_use]
    pub fn with_reader(mut self, reader: Arc<dyn UrlReader>) -> Self {
        self.reader = reader;
        self
    }

    /// Settings this resolver was created with.
    #[must_use]
    pub const fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// The cache holding fetched URL content.
    #[must_use]
    pub fn cache(&self) -> &Arc<UrlCache> {
        &self.cache
    }

    /// Resolve `name`, possibly relative to `parent`, to a reachable resource.
    ///
    /// A leading `file:` is dropped. A name with the legacy extension is first
    /// tried with the current extension. When no candidate can be opened the
    /// name is returned unchanged, so this never fails.
    #[must_use]
    pub fn resolve(&self, parent: Option<&str>, name: &str) -> String {
        let name = name.strip_prefix(FILE_PREFIX).unwrap_or(name);

        if let Some(upgraded) = self.upgrade_legacy_extension(name) {
            if let Some(found) = self.do_resolve(parent, &upgraded) {
                log::debug!("Resolved {name} to newer {found}");
                return found;
            }
        }

        if let Some(found) = self.do_resolve(parent, name) {
            log::debug!("Resolved {name} to {found}");
            return found;
        }

        log::debug!("Cannot resolve {name}, keeping it as given");
        name.to_string()
    }

    /// Find the first candidate for `name` that can be opened.
    ///
    /// Candidates, in order: `name` as a URL, `name` combined with `parent` as
    /// a URL, `name` as a file, the combined path as a file. Files are
    /// returned as absolute paths.
    #[must_use]
    pub fn do_resolve(&self, parent: Option<&str>, name: &str) -> Option<String> {
        if self.can_open_url(name) {
            return Some(name.to_string());
        }

        let combined = combine_display_paths(parent, name);
        if self.can_open_url(&combined) {
            return Some(combined);
        }

        existing_file(name).or_else(|| existing_file(&combined))
    }

    /// Check whether `candidate` is a URL whose content can be read.
    ///
    /// Probe failures are logged at debug level and reported as `false`.
    #[must_use]
    pub fn can_open_url(&self, candidate: &str) -> bool {
        if !is_url(candidate) {
            return false;
        }
        match self.open_url(candidate) {
            Ok(_) => true,
            Err(e) => {
                log::debug!("Probe of {candidate} failed: {e}");
                false
            }
        }
    }

    /// Open `url`, reading its content through the cache.
    ///
    /// # Errors
    ///
    /// Returns the fetch error when the content is not cached and cannot be
    /// read. Failed fetches are not cached.
    pub fn open_url(&self, url: &str) -> Result<Cursor<Arc<[u8]>>> {
        let content = self
            .cache
            .get_or_fetch(url, || self.reader.read(url).map(Arc::from))?;
        Ok(Cursor::new(content))
    }

    /// Open a resource for reading, either a URL or a local file.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be fetched or the file opened.
    pub fn open_resource_stream(&self, name: &str) -> Result<Box<dyn Read + Send>> {
        if is_url(name) {
            Ok(Box::new(self.open_url(name)?))
        } else {
            Ok(Box::new(File::open(name)?))
        }
    }

    /// Create or truncate a local file for writing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn write_resource(&self, name: &str) -> Result<File> {
        Ok(File::create(name)?)
    }

    /// Drop cached URL content older than the time-to-live.
    ///
    /// Returns the number of entries removed.
    pub fn purge_cache(&self) -> usize {
        self.cache.purge_expired()
    }

    /// `name` with the legacy extension replaced by the current one.
    fn upgrade_legacy_extension(&self, name: &str) -> Option<String> {
        let stem = name
            .strip_suffix(self.settings.legacy_extension.as_str())?
            .strip_suffix('.')?;
        Some(format!("{stem}.{}", self.settings.current_extension))
    }
}

/// Absolute form of `candidate` if it names an existing file.
fn existing_file(candidate: &str) -> Option<String> {
    let path = Path::new(candidate);
    if !path.exists() {
        return None;
    }
    std::path::absolute(path)
        .ok()
        .map(|absolute| absolute.to_string_lossy().into_owned())
}
