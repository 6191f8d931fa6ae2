use core::fmt;

use crate::combine::{self, CombinedError};
use crate::item::AnnotatedError;
use crate::origin::Origin;

/// Annotates errors for one error domain (usually one module).
///
/// Configured once with an [`Origin`], a base error and a short error, then
/// used at every fallible call boundary of the domain:
///
/// - [`parse_error`](Self::parse_error) where raw errors enter the chain,
/// - [`merge_error`](Self::merge_error) where an [`AnnotatedError`] from a
///   deeper call passes through.
///
/// Both return `None` when there is nothing to report, so "no error"
/// travels through any number of layers untouched.
///
/// ```
/// use errpath::{Annotator, Origin};
/// use std::io;
///
/// let disk = Annotator::new(Origin::verbatim("p."), "B", "S");
/// let inner = disk
///     .parse_error("D", [Some(io::Error::new(io::ErrorKind::Other, "E"))])
///     .unwrap();
/// assert_eq!(inner.detail_error(), Some("B : E "));
/// assert_eq!(inner.path_error(), Some("p.D : B "));
///
/// let svc = Annotator::new(Origin::verbatim("q."), "B2", "S2");
/// let outer = svc.merge_error("D2", &inner).unwrap();
/// assert_eq!(outer.detail_error(), Some("B2 : B : E  "));
/// assert_eq!(outer.path_error(), Some("q.D2 : B2 : p.D : B "));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Annotator {
    origin: Origin,
    base:   String,
    short:  String,
}

// ── Constructors ──────────────────────────────────────────────────

impl Annotator {
    /// An annotator that has not been through [`init`](Self::init) yet.
    ///
    /// Usable in `const`/`static` position.
    pub const fn uninit() -> Self {
        Self {
            origin: Origin::empty(),
            base: String::new(),
            short: String::new(),
        }
    }

    /// A fully configured annotator.
    pub fn new(origin: Origin, base: impl Into<String>, short: impl Into<String>) -> Self {
        let mut a = Self::uninit();
        a.init(origin, base, short);
        a
    }

    /// Bind the origin, base and short errors.
    ///
    /// Call once, before any annotation. Re-initializing replaces the
    /// previous configuration.
    pub fn init(&mut self, origin: Origin, base: impl Into<String>, short: impl Into<String>) {
        self.origin = origin;
        self.base = base.into();
        self.short = short.into();

        tracing::debug!(
            origin = %self.origin,
            base = %self.base,
            "annotator initialized"
        );
    }
}

// ── Accessors ─────────────────────────────────────────────────────

impl Annotator {
    #[inline]
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// The base error every item of this annotator carries.
    #[inline]
    pub fn base_error(&self) -> &str {
        &self.base
    }

    /// The short, external message every item of this annotator carries.
    #[inline]
    pub fn short_error(&self) -> &str {
        &self.short
    }

    /// False until a base or short error has been bound.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        !self.base.is_empty() || !self.short.is_empty()
    }
}

// ── Annotation ────────────────────────────────────────────────────

impl Annotator {
    /// Join present errors with `|`. See [`combine::combine_errors`].
    pub fn combine_errors<I, E>(&self, errs: I) -> Option<CombinedError>
    where
        I: IntoIterator<Item = Option<E>>,
        E: fmt::Display,
    {
        combine::combine_errors(errs)
    }

    /// Annotate raw errors.
    ///
    /// `None` when no error is present. Otherwise:
    ///
    /// - detail = `"<base> : <combined> "`
    /// - path   = `"<origin><description> : <base> "`
    pub fn parse_error<I, E>(&self, description: &str, errs: I) -> Option<AnnotatedError>
    where
        I: IntoIterator<Item = Option<E>>,
        E: fmt::Display,
    {
        let combined = combine::combine_errors(errs)?;
        Some(self.annotate(description, combined.as_str()))
    }

    /// Layer this call's context over an item from a deeper call.
    ///
    /// `None` when `prior` is absent or empty. Otherwise:
    ///
    /// - detail = `"<base> : <prior detail> "`
    /// - path   = `"<origin><description> : <base> : <prior path>"`
    pub fn merge_error<'a>(
        &self,
        description: &str,
        prior: impl Into<Option<&'a AnnotatedError>>,
    ) -> Option<AnnotatedError> {
        let prior = prior.into().filter(|p| !p.is_empty())?;
        Some(self.layer(description, prior))
    }

    /// True for an absent item or an empty one.
    #[inline]
    pub fn is_nil_err<'a>(&self, err: impl Into<Option<&'a AnnotatedError>>) -> bool {
        err.into().map_or(true, AnnotatedError::is_empty)
    }

    pub(crate) fn annotate(&self, description: &str, text: &str) -> AnnotatedError {
        self.warn_if_uninit(description);

        let detail = format!("{} : {} ", self.base, text);
        let path = format!("{}{} : {} ", self.origin, description, self.base);

        tracing::trace!(origin = %self.origin, description, "error annotated");
        AnnotatedError::new(&self.base, &self.short, detail, path)
    }

    pub(crate) fn layer(&self, description: &str, prior: &AnnotatedError) -> AnnotatedError {
        self.warn_if_uninit(description);

        let detail = format!(
            "{} : {} ",
            self.base,
            prior.detail_error().unwrap_or_default()
        );
        let path = format!(
            "{}{} : {} : {}",
            self.origin,
            description,
            self.base,
            prior.path_error().unwrap_or_default()
        );

        tracing::trace!(origin = %self.origin, description, "error merged");
        AnnotatedError::new(&self.base, &self.short, detail, path)
    }

    fn warn_if_uninit(&self, description: &str) {
        if !self.is_initialized() {
            tracing::warn!(description, "annotating with an uninitialized annotator");
        }
    }
}

impl fmt::Debug for Annotator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Annotator")
            .field("origin", &self.origin)
            .field("base", &self.base)
            .field("short", &self.short)
            .finish()
    }
}
