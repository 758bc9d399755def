//! Member extraction.
//!
//! Data flows: options → [`scope`] (which members to enumerate) → [`fields`] /
//! [`properties`] (read and classify) → [`merge`] (one namespace).
//!
//! - [`scope`] - `MemberScope`, `ExtractOptions`, `compute_scope`
//! - [`fields`] - backing-field filtering and recursive classification
//! - [`properties`] - raw property getter values
//! - [`merge`] - field + property union with duplicate detection
//! - [`census`] - categorized member listing

mod census;
mod fields;
mod merge;
mod properties;
mod scope;

pub use census::{MemberCensus, member_census};
pub use fields::extract_fields;
pub use merge::extract_fields_and_properties;
pub use properties::extract_properties;
pub use scope::{DEFAULT_MAX_DEPTH, ExtractOptions, MemberScope, compute_scope};
