use core::fmt;

/// Separator placed between the messages of combined errors.
pub const COMBINE_SEPARATOR: &str = "|";

/// Several error messages joined into one.
///
/// Produced by [`combine_errors`]; never empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct CombinedError(String);

impl CombinedError {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Join the messages of all present errors with `|`, in argument order.
///
/// Returns `None` when `errs` is empty or every entry is `None`.
///
/// ```
/// use errpath::combine_errors;
/// use std::io;
///
/// let a = io::Error::new(io::ErrorKind::NotFound, "missing");
/// let b = io::Error::new(io::ErrorKind::TimedOut, "slow");
/// let joined = combine_errors([Some(a), None, Some(b)]).unwrap();
/// assert_eq!(joined.as_str(), "missing|slow");
///
/// assert!(combine_errors([None::<io::Error>, None]).is_none());
/// ```
///
/// Mixed error types can be passed as `Option<&dyn Display>`, or through
/// the [`parse_error!`](crate::parse_error!) macro.
pub fn combine_errors<I, E>(errs: I) -> Option<CombinedError>
where
    I: IntoIterator<Item = Option<E>>,
    E: fmt::Display,
{
    let msgs: Vec<String> = errs
        .into_iter()
        .flatten()
        .map(|e| e.to_string())
        .collect();

    if msgs.is_empty() {
        return None;
    }
    Some(CombinedError(msgs.join(COMBINE_SEPARATOR)))
}

/// Borrow an optional error as an optional `&dyn Display`.
///
/// Used by `parse_error!` to put differently typed errors in one list.
#[doc(hidden)]
#[inline]
pub fn erase<E: fmt::Display>(err: &Option<E>) -> Option<&dyn fmt::Display> {
    err.as_ref().map(|e| e as &dyn fmt::Display)
}
