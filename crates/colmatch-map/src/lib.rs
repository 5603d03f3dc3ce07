//! Column classification and field matching.
//!
//! Given a header row, the template field catalog and sample data rows, a
//! [`MatchSession`] tracks for every source column which field it is bound
//! to, whether it is ignored, and for select fields how each distinct raw
//! value maps onto the field's options.
//!
//! The building blocks are also exposed on their own:
//!
//! - [`catalog`]: field lookups
//! - [`samples`]: distinct value discovery
//! - [`mod@classify`]: pure column state transitions
//! - [`gate`]: unmatched required fields check
//! - [`patterns`]: header auto-matching

#![deny(unsafe_code)]

pub mod catalog;
pub mod classify;
pub mod error;
pub mod gate;
pub mod patterns;
pub mod samples;
pub mod session;
pub mod utils;

pub use catalog::{FieldCatalog, find_field, options_of};
pub use classify::{classify, ignore};
pub use error::{MatchError, Result};
pub use gate::{SubmitDecision, unmatched_required_fields};
pub use patterns::suggest_header_matches;
pub use samples::{extract_samples, preview_entries};
pub use session::MatchSession;
