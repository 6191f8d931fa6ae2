use core::fmt;

use crate::host::Annotate;
use crate::item::AnnotatedError;

/// Convenience Result alias.
pub type AnnotatedResult<T> = Result<T, AnnotatedError>;

// ── ResultExt — annotate raw errors on Results ────────────────────

/// Annotate the error of any `Result` during propagation.
///
/// The `Result` form of [`Annotator::parse_error`](crate::Annotator::parse_error)
/// with exactly one underlying error.
///
/// ```
/// use errpath::{Annotator, Origin, ResultExt};
///
/// let disk = Annotator::new(Origin::verbatim("disk."), "disk failure", "unavailable");
/// let err = "x".parse::<u32>().annotate_err(&disk, "parse block id").unwrap_err();
/// assert_eq!(err.path_error(), Some("disk.parse block id : disk failure "));
/// ```
pub trait ResultExt<T> {
    fn annotate_err<A>(self, annotator: &A, description: &str) -> AnnotatedResult<T>
    where
        A: Annotate + ?Sized;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: fmt::Display,
{
    fn annotate_err<A>(self, annotator: &A, description: &str) -> AnnotatedResult<T>
    where
        A: Annotate + ?Sized,
    {
        self.map_err(|e| {
            annotator
                .annotator()
                .annotate(description, &e.to_string())
        })
    }
}

// ── AnnotatedResultExt — layer context on annotated Results ───────

/// Layer the current call's context over an annotated error from a deeper
/// call. The `Result` form of
/// [`Annotator::merge_error`](crate::Annotator::merge_error).
///
/// An `Err` holding an empty item has nothing to layer onto and is passed
/// through unchanged.
pub trait AnnotatedResultExt<T> {
    fn merge_err<A>(self, annotator: &A, description: &str) -> AnnotatedResult<T>
    where
        A: Annotate + ?Sized;
}

impl<T> AnnotatedResultExt<T> for AnnotatedResult<T> {
    fn merge_err<A>(self, annotator: &A, description: &str) -> AnnotatedResult<T>
    where
        A: Annotate + ?Sized,
    {
        self.map_err(|prior| {
            if prior.is_empty() {
                return prior;
            }
            annotator.annotator().layer(description, &prior)
        })
    }
}
