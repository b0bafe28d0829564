//! sea-orm accessors for the PostgreSQL-backed catalog.
//!
//! One module per collection; plain table reads ordered by id (ids are
//! assigned sequentially, so id order is insertion order) and single-row
//! inserts returning the generated id.

pub mod services;
pub mod team_members;
pub mod projects;
pub mod testimonials;
