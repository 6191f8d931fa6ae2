//! Top layer: turns service results into responses.

use errpath::{origin, AnnotatedResultExt, InitError, SharedAnnotator};

use crate::service;

pub const DOMAIN: &str = "handler";

pub static ERRORS: SharedAnnotator = SharedAnnotator::new();

pub fn init() -> Result<(), InitError> {
    ERRORS.init(origin!(), "request failed", "internal error")
}

pub fn handle(user: &str, fail_storage: bool, corrupt: bool) -> errpath::AnnotatedResult<String> {
    let age = service::load_age(user, fail_storage, corrupt)
        .merge_err(&ERRORS, &format!("GET /users/{user}/age"))?;
    Ok(format!("{user} is {age}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage;

    fn init_all() {
        // Tests share the statics; later calls just get AlreadyInitialized.
        let _ = storage::init();
        let _ = service::init();
        let _ = init();
    }

    #[test]
    fn ok_request() {
        init_all();
        assert_eq!(handle("alice", false, false).unwrap(), "alice is 42");
    }

    #[test]
    fn storage_failure_reaches_top() {
        init_all();
        let e = handle("bob", true, false).unwrap_err();
        assert_eq!(e.short_error(), "internal error");
        assert_eq!(
            e.path_error(),
            Some(
                "handler.GET /users/bob/age : request failed : \
                 service.load profile bob : profile service failure : \
                 storage.read record bob : storage failure "
            )
        );
        assert_eq!(
            e.detail_error(),
            Some("request failed : profile service failure : storage failure : record bob not found   ")
        );
    }

    #[test]
    fn service_failure_skips_storage() {
        init_all();
        let e = handle("carol", false, true).unwrap_err();
        assert_eq!(
            e.path_error(),
            Some("handler.GET /users/carol/age : request failed : service.parse age : profile service failure ")
        );
        assert_eq!(
            e.detail_error(),
            Some("request failed : profile service failure : invalid digit found in string  ")
        );
    }
}
