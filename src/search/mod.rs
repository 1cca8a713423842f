//! Search over package names
//!
//! - `policy`: how a query matches a name
//! - `filter`: the visible-names computation
//! - `status`: the result count line

pub mod filter;
pub mod policy;
pub mod status;

pub use filter::{SearchResult, filter_names};
pub use policy::{MatchPolicy, NameMatcher, is_active_query};
pub use status::{StatusPart, status_parts, status_text};
