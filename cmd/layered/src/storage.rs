//! Leaf layer: raw I/O errors enter the chain here.

use std::io;

use errpath::{origin, Annotate, AnnotatedError, InitError, SharedAnnotator};

/// Catalog domain name of this layer.
pub const DOMAIN: &str = "storage";

pub static ERRORS: SharedAnnotator = SharedAnnotator::new();

pub fn init() -> Result<(), InitError> {
    ERRORS.init(origin!(), "storage failure", "service unavailable")
}

fn fetch(key: &str, fail: bool) -> io::Result<String> {
    if fail {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("record {key} not found"),
        ));
    }
    Ok(format!("{key}:age=42"))
}

/// Read one record. The error side is `None` on success.
pub fn read_record(key: &str, fail: bool) -> (Option<String>, Option<AnnotatedError>) {
    match fetch(key, fail) {
        Ok(record) => (Some(record), None),
        Err(e) => (None, ERRORS.parse_error(&format!("read record {key}"), [Some(e)])),
    }
}
