//! Host error types.
//!
//! A host is a domain's own error type. It keeps an [`Annotator`] in a
//! named field and implements [`Annotate`] to get the annotation methods
//! forwarded:
//!
//! ```
//! use errpath::{origin, Annotate, Annotator};
//!
//! struct StorageError {
//!     annotator: Annotator,
//! }
//!
//! impl Annotate for StorageError {
//!     fn annotator(&self) -> &Annotator {
//!         &self.annotator
//!     }
//! }
//!
//! let host = StorageError {
//!     annotator: Annotator::new(origin!(), "storage failure", "service unavailable"),
//! };
//! let err = host.parse_error("open", [Some("no such file")]).unwrap();
//! assert_eq!(err.short_error(), "service unavailable");
//! ```
//!
//! Domains that annotate from free functions use a [`SharedAnnotator`]
//! in a `static`, initialized once at startup.

use core::fmt;

use once_cell::sync::OnceCell;

use crate::annotator::Annotator;
use crate::combine::CombinedError;
use crate::item::AnnotatedError;
use crate::origin::Origin;

/// Forwarding surface for types that own an [`Annotator`].
pub trait Annotate {
    /// The annotator of this host.
    fn annotator(&self) -> &Annotator;

    fn combine_errors<I, E>(&self, errs: I) -> Option<CombinedError>
    where
        I: IntoIterator<Item = Option<E>>,
        E: fmt::Display,
    {
        self.annotator().combine_errors(errs)
    }

    fn parse_error<I, E>(&self, description: &str, errs: I) -> Option<AnnotatedError>
    where
        I: IntoIterator<Item = Option<E>>,
        E: fmt::Display,
    {
        self.annotator().parse_error(description, errs)
    }

    fn merge_error<'a>(
        &self,
        description: &str,
        prior: impl Into<Option<&'a AnnotatedError>>,
    ) -> Option<AnnotatedError> {
        self.annotator().merge_error(description, prior)
    }

    fn is_nil_err<'a>(&self, err: impl Into<Option<&'a AnnotatedError>>) -> bool {
        self.annotator().is_nil_err(err)
    }

    fn base_error(&self) -> &str {
        self.annotator().base_error()
    }

    fn short_error(&self) -> &str {
        self.annotator().short_error()
    }
}

impl Annotate for Annotator {
    #[inline]
    fn annotator(&self) -> &Annotator {
        self
    }
}

impl<T: Annotate + ?Sized> Annotate for &T {
    #[inline]
    fn annotator(&self) -> &Annotator {
        (**self).annotator()
    }
}

// ── SharedAnnotator ───────────────────────────────────────────────

/// Returned when a [`SharedAnnotator`] is initialized twice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    #[error("annotator already initialized (origin {origin:?}, base {base:?})")]
    AlreadyInitialized { origin: String, base: String },
}

static UNINIT: Annotator = Annotator::uninit();

/// An [`Annotator`] for `static` use, configured exactly once.
///
/// `init` is the one-time barrier: every `get` that observes the
/// configuration happens after it. Concurrent readers are fine.
///
/// ```
/// use errpath::{origin, Annotate, SharedAnnotator};
///
/// static DISK: SharedAnnotator = SharedAnnotator::new();
///
/// DISK.init(origin!(), "disk failure", "storage unavailable").unwrap();
/// assert!(DISK.init(origin!(), "again", "again").is_err());
/// assert_eq!(DISK.base_error(), "disk failure");
/// ```
pub struct SharedAnnotator {
    cell: OnceCell<Annotator>,
}

impl SharedAnnotator {
    pub const fn new() -> Self {
        Self { cell: OnceCell::new() }
    }

    /// Configure the annotator. Fails if it was already configured; the
    /// first configuration stays in place.
    pub fn init(
        &self,
        origin: Origin,
        base: impl Into<String>,
        short: impl Into<String>,
    ) -> Result<(), InitError> {
        self.set(Annotator::new(origin, base, short))
    }

    /// Install a pre-built annotator, e.g. one from a
    /// [`Catalog`](crate::Catalog).
    pub fn set(&self, annotator: Annotator) -> Result<(), InitError> {
        self.cell.set(annotator).map_err(|_rejected| {
            let current = self.get();
            tracing::warn!(
                origin = %current.origin(),
                "shared annotator initialized twice, keeping first configuration"
            );
            InitError::AlreadyInitialized {
                origin: current.origin().to_string(),
                base: current.base_error().to_string(),
            }
        })
    }

    /// The configured annotator, or an uninitialized one before `init`.
    #[inline]
    pub fn get(&self) -> &Annotator {
        self.cell.get().unwrap_or(&UNINIT)
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl Default for SharedAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl Annotate for SharedAnnotator {
    #[inline]
    fn annotator(&self) -> &Annotator {
        self.get()
    }
}

impl fmt::Debug for SharedAnnotator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedAnnotator")
            .field("annotator", &self.cell.get())
            .finish()
    }
}
