//! Aggregated public-site content, one independently-settling slot per
//! section.
//!
//! DESIGN
//! ======
//! The homepage fires all section fetches concurrently and each result is
//! applied on its own as it settles. A slot is written exactly once per
//! fetch; one endpoint's outage leaves the other sections intact, so a
//! partial backend failure never blanks the whole page.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::net::types::{
    AboutCard, ContactDetails, ExperienceEntry, HeroContent, Project, Service, Skill, SocialLinks,
    Testimonial,
};

/// One public section's fetch slot: the value, whether the fetch settled,
/// and the error message if it settled unsuccessfully.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionSlot<T> {
    pub value: T,
    pub settled: bool,
    pub error: Option<String>,
}

impl<T> SectionSlot<T> {
    /// Apply a fetch outcome. On failure the previous value is kept (it is
    /// the type default on first settlement) and only the error is recorded.
    pub fn resolve(&mut self, outcome: Result<T, String>) {
        self.settled = true;
        match outcome {
            Ok(value) => {
                self.value = value;
                self.error = None;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
    }

    /// Still waiting for the first settlement.
    pub fn pending(&self) -> bool {
        !self.settled
    }

    /// Settled with a failure.
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }
}

/// All public-site content sections.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentState {
    pub hero: SectionSlot<Option<HeroContent>>,
    pub about: SectionSlot<Vec<AboutCard>>,
    pub services: SectionSlot<Vec<Service>>,
    pub skills: SectionSlot<Vec<Skill>>,
    pub projects: SectionSlot<Vec<Project>>,
    pub experiences: SectionSlot<Vec<ExperienceEntry>>,
    pub testimonials: SectionSlot<Vec<Testimonial>>,
    pub contact_info: SectionSlot<Vec<ContactDetails>>,
    pub social: SectionSlot<SocialLinks>,
}
