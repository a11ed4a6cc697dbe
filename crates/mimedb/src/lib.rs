//! MIME type and file extension lookups.
//!
//! The database is generated from the Apache httpd `mime.types` registry in
//! three steps: [`source`] parses the registry into records, [`index`] builds
//! the media type and extension indexes, and [`artifact`] renders them into a
//! generated file. [`regenerate`] runs the whole pipeline.
//!
//! At runtime [`MimeDb`] loads the generated file on first use and answers
//! lookups in both directions:
//!
//! ```no_run
//! let types = mimedb::types_for_extension("html")?.unwrap_or_default();
//! let extensions = mimedb::extensions_for_type("image/png")?;
//! # Ok::<(), mimedb::Error>(())
//! ```

pub mod artifact;
mod error;
pub mod index;
pub mod location;
pub mod lookup;
pub mod regenerate;
pub mod source;

pub use error::{Error, Result};
pub use index::{DuplicatePolicy, MimeTable};
pub use location::{Location, location};
pub use lookup::{MimeDb, extensions_for_type, global, types_for_extension};
pub use regenerate::{Options, Stage, Summary, regenerate, regenerate_with};
pub use source::Record;
