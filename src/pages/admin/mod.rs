//! Admin content-management screens.
//!
//! Every screen follows the same contract: fetch the collection on mount,
//! validate required fields client-side before any request, refetch after a
//! successful mutation, and surface failures as transient notices while
//! keeping form contents intact for correction.

pub mod about;
pub mod contact_info;
pub mod contacts;
pub mod dashboard;
pub mod experience;
pub mod hero;
pub mod layout;
pub mod projects;
pub mod services;
pub mod skills;
pub mod social;
pub mod testimonials;
