//! sea-orm entities for the content service.
//!
//! Both persisted entities live in this one crate so the relation between
//! them is a direct structural reference, not a late-bound name lookup.

pub mod contents;
pub mod users;
