//! Media entity model
//!
//! Value types for the three kinds of library entries (plain files, comics,
//! videos), their construction from loosely-typed API records, and the
//! derived display values the browser shows: size in MB, viewed state,
//! cover locator and tags.

pub mod category;
pub mod cover;
pub mod entity;
pub mod error;
pub mod kind;
pub mod record;

pub use category::Category;
pub use cover::CoverBase;
pub use entity::{Comic, MediaEntity, MediaFile, Video};
pub use error::RecordError;
pub use kind::MediaType;
pub use record::MediaRecord;
