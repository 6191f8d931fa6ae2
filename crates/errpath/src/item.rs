use std::error::Error;
use std::fmt;

/// One annotation event: four views of the same error.
///
/// - **base**: the fixed category label of the annotating domain.
/// - **short**: the fixed, externally safe message of that domain.
/// - **detail**: base labels layered over the underlying error text,
///   accumulated innermost-first.
/// - **path**: `origin` + description + base of every layer, outermost
///   call leftmost. Shows the execution path the error travelled.
///
/// Only an [`Annotator`](crate::Annotator) builds set items, and it always
/// sets `detail` and `path` together. `Default` gives the empty item.
///
/// `detail` and `path` are internal traces meant for logs. Hand only
/// [`short_error`](Self::short_error) to external callers.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AnnotatedError {
    base:   String,
    short:  String,
    detail: Option<String>,
    path:   Option<String>,
}

// ── Constructors ──────────────────────────────────────────────────

impl AnnotatedError {
    pub(crate) fn new(base: &str, short: &str, detail: String, path: String) -> Self {
        Self {
            base: base.to_owned(),
            short: short.to_owned(),
            detail: Some(detail),
            path: Some(path),
        }
    }
}

// ── Accessors ─────────────────────────────────────────────────────

impl AnnotatedError {
    /// True when neither trace is set. Such an item reports no error.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.detail.is_none() && self.path.is_none()
    }

    /// The base error of the annotating domain.
    #[inline]
    pub fn base_error(&self) -> &str {
        &self.base
    }

    /// The externally safe message. Safe to return to end users.
    #[inline]
    pub fn short_error(&self) -> &str {
        &self.short
    }

    /// The accumulated detail trace.
    #[inline]
    pub fn detail_error(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// The accumulated execution path trace.
    #[inline]
    pub fn path_error(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Emit this error as one `tracing` ERROR event with every facet
    /// attached as a field.
    pub fn report(&self) {
        tracing::error!(
            base = %self.base,
            short = %self.short,
            detail = self.detail.as_deref().unwrap_or_default(),
            path = self.path.as_deref().unwrap_or_default(),
            "annotated error"
        );
    }
}

// ── std::error::Error ─────────────────────────────────────────────

impl Error for AnnotatedError {}

// ── Display ───────────────────────────────────────────────────────

impl fmt::Display for AnnotatedError {
    /// `{}` renders the detail trace, `{:#}` the path trace.
    ///
    /// With `feature = "production"` both render the short message only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[cfg(feature = "production")]
        {
            f.write_str(&self.short)
        }
        #[cfg(not(feature = "production"))]
        {
            let trace = if f.alternate() { &self.path } else { &self.detail };
            f.write_str(trace.as_deref().unwrap_or_default())
        }
    }
}

// ── Debug ─────────────────────────────────────────────────────────

impl fmt::Debug for AnnotatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("AnnotatedError");
        d.field("base", &self.base);
        d.field("short", &self.short);

        #[cfg(not(feature = "production"))]
        {
            d.field("detail", &self.detail);
            d.field("path", &self.path);
        }
        #[cfg(feature = "production")]
        {
            d.field("empty", &self.is_empty());
        }

        d.finish()
    }
}

// ── Into<io::Error> ───────────────────────────────────────────────

impl From<AnnotatedError> for std::io::Error {
    /// Wraps the annotated error as a custom `io::Error`.
    fn from(err: AnnotatedError) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnnotatedError {
        AnnotatedError::new("B", "S", "B : E ".to_string(), "p.D : B ".to_string())
    }

    #[test]
    fn default_is_empty() {
        let e = AnnotatedError::default();
        assert!(e.is_empty());
        assert_eq!(e.detail_error(), None);
        assert_eq!(e.path_error(), None);
        assert_eq!(e.base_error(), "");
    }

    #[test]
    fn built_item_is_set() {
        let e = sample();
        assert!(!e.is_empty());
        assert_eq!(e.base_error(), "B");
        assert_eq!(e.short_error(), "S");
        assert_eq!(e.detail_error(), Some("B : E "));
        assert_eq!(e.path_error(), Some("p.D : B "));
    }

    #[test]
    fn display_forms() {
        let e = sample();
        #[cfg(not(feature = "production"))]
        {
            assert_eq!(format!("{}", e), "B : E ");
            assert_eq!(format!("{:#}", e), "p.D : B ");
            assert_eq!(format!("{}", AnnotatedError::default()), "");
        }
        #[cfg(feature = "production")]
        {
            assert_eq!(format!("{}", e), "S");
            assert_eq!(format!("{:#}", e), "S");
        }
    }

    #[test]
    fn debug_lists_facets() {
        let s = format!("{:?}", sample());
        assert!(s.contains("AnnotatedError"), "got: {}", s);
        assert!(s.contains("\"S\""), "got: {}", s);
        #[cfg(not(feature = "production"))]
        assert!(s.contains("p.D : B "), "got: {}", s);
        #[cfg(feature = "production")]
        assert!(!s.contains("p.D"), "got: {}", s);
    }

    #[test]
    fn into_io_error() {
        let io_err: std::io::Error = sample().into();
        assert_eq!(io_err.kind(), std::io::ErrorKind::Other);
        let inner = io_err.get_ref().and_then(|e| e.downcast_ref::<AnnotatedError>());
        assert_eq!(inner, Some(&sample()));
    }

    #[test]
    fn equality_covers_traces() {
        let a = sample();
        let b = AnnotatedError::new("B", "S", "B : F ".to_string(), "p.D : B ".to_string());
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn report_does_not_panic_without_subscriber() {
        sample().report();
        AnnotatedError::default().report();
    }

    #[test]
    fn send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnnotatedError>();
    }
}
