//! Bundled record types for the gym dashboard's list screens
//!
//! Members from the management roster, tickets from the triage queue,
//! posts from the blog grid, each with seed data, form rules, and a
//! default sort order. They double as worked examples of the
//! [`Record`](crate::core::record::Record) trait: two via the
//! [`impl_record!`](crate::impl_record) macro, one by hand.

pub mod macros;
pub mod member;
pub mod post;
pub mod ticket;

pub use member::Member;
pub use post::Post;
pub use ticket::{PRIORITY_RANKS, Ticket};
