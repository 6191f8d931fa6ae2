/// The [`Origin`](crate::Origin) of the module this macro is expanded in.
///
/// ```ignore
/// // inside myapp::storage::disk
/// assert_eq!(origin!().as_str(), "storage::disk.");
/// ```
#[macro_export]
macro_rules! origin {
    () => {
        $crate::Origin::resolve(::core::module_path!())
    };
}

/// An [`Annotator`](crate::Annotator) whose origin is the calling module.
///
/// ```ignore
/// let disk = annotator!("disk failure", "storage unavailable");
/// ```
#[macro_export]
macro_rules! annotator {
    ($base:expr, $short:expr $(,)?) => {
        $crate::Annotator::new($crate::origin!(), $base, $short)
    };
}

/// Annotate any number of optional errors of different types.
///
/// Each error argument is an `Option<E>` with `E: Display`. Works with an
/// `Annotator`, a `SharedAnnotator` or any host implementing `Annotate`.
///
/// ```ignore
/// let io_res: Option<io::Error> = ...;
/// let parse_res: Option<ParseIntError> = ...;
/// if let Some(err) = parse_error!(DISK, "load header", io_res, parse_res) {
///     return Err(err);
/// }
/// ```
#[macro_export]
macro_rules! parse_error {
    ($annotator:expr, $description:expr $(, $err:expr)* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::Annotate as _;
        ($annotator).parse_error(
            $description,
            <[::core::option::Option<&dyn ::core::fmt::Display>]>::iter(
                &[$($crate::__erase(&$err)),*]
            )
            .copied(),
        )
    }};
}
