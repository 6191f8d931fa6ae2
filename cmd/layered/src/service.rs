//! Middle layer: merges storage errors and adds its own validation errors.

use errpath::{origin, parse_error, Annotate, AnnotatedError, InitError, SharedAnnotator};

use crate::storage;

pub const DOMAIN: &str = "service";

pub static ERRORS: SharedAnnotator = SharedAnnotator::new();

pub fn init() -> Result<(), InitError> {
    ERRORS.init(origin!(), "profile service failure", "try again later")
}

/// Load a user's age. `corrupt` makes the stored record unparsable.
pub fn load_age(user: &str, fail_storage: bool, corrupt: bool) -> Result<u32, AnnotatedError> {
    let (record, err) = storage::read_record(user, fail_storage);
    if let Some(e) = ERRORS.merge_error(&format!("load profile {user}"), err.as_ref()) {
        return Err(e);
    }

    let record = record.unwrap_or_default();
    let raw = if corrupt { "forty-two" } else { record.rsplit('=').next().unwrap_or_default() };

    let parsed = raw.parse::<u32>();
    let empty = raw.is_empty().then_some("empty age field");
    match parse_error!(ERRORS, "parse age", parsed.as_ref().err(), empty) {
        Some(e) => Err(e),
        None => parsed.map_err(|_| AnnotatedError::default()),
    }
}
