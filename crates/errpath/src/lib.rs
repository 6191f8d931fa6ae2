//! # errpath — error path annotation
//!
//! Annotates errors as they travel up a call chain. Every module that can
//! fail owns an [`Annotator`] configured with:
//!
//! - an **origin**: the module's path, e.g. `storage::disk.`
//! - a **base error**: the category label of the module
//! - a **short error**: the message that is safe to show outside
//!
//! At each boundary the annotator turns errors into an [`AnnotatedError`]
//! carrying four views of the same failure:
//!
//! | View     | Example                                                   |
//! |----------|-----------------------------------------------------------|
//! | `base`   | `service failure`                                         |
//! | `short`  | `try later`                                               |
//! | `detail` | `service failure : disk failure : block 7 missing  `      |
//! | `path`   | `svc.serve : service failure : disk.read : disk failure ` |
//!
//! `detail` and `path` are for logs. Return `short` to clients.
//!
//! ## Quick Start
//!
//! ```rust
//! use errpath::{origin, Annotate, AnnotatedError, SharedAnnotator};
//! use std::io;
//!
//! static DISK: SharedAnnotator = SharedAnnotator::new();
//! static SVC: SharedAnnotator = SharedAnnotator::new();
//!
//! fn read_block(id: u32) -> Option<AnnotatedError> {
//!     let res: io::Result<()> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
//!     DISK.parse_error(&format!("read block {id}"), [res.err()])
//! }
//!
//! fn serve() -> Option<AnnotatedError> {
//!     SVC.merge_error("serve", read_block(7).as_ref())
//! }
//!
//! DISK.init(origin!(), "disk failure", "storage unavailable").unwrap();
//! SVC.init(origin!(), "service failure", "try later").unwrap();
//!
//! let err = serve().unwrap();
//! assert_eq!(err.short_error(), "try later");
//! assert_eq!(err.detail_error(), Some("service failure : disk failure : missing  "));
//! ```
//!
//! ## Design
//!
//! - Absence is contagious: annotating nothing yields `None`, and merging
//!   `None` yields `None`, so no layer invents an error.
//! - Items are immutable; `base` and `short` are fixed per annotator.
//! - Host error types own an `Annotator` and implement [`Annotate`] to get
//!   the annotation methods forwarded.
//! - Origins come from `module_path!()` via [`origin!`], or from a
//!   [`Catalog`] file.
//!
//! ## Feature Flags
//!
//! | Flag         | Effect |
//! |--------------|--------|
//! | `production` | `Display`/`Debug` of `AnnotatedError` stop showing `detail` and `path` |

mod origin;
mod combine;
mod item;
mod annotator;
mod host;
mod convert;
mod catalog;
#[macro_use]
mod macros;

// ── Public API ────────────────────────────────────────────────────

pub use origin::Origin;
pub use combine::{combine_errors, CombinedError, COMBINE_SEPARATOR};
pub use item::AnnotatedError;
pub use annotator::Annotator;
pub use host::{Annotate, InitError, SharedAnnotator};
pub use convert::{AnnotatedResult, AnnotatedResultExt, ResultExt};
pub use catalog::{Catalog, CatalogError, DomainConfig};

#[doc(hidden)]
pub use combine::erase as __erase;
