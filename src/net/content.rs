//! Content-collection endpoints, one fetch/create/update/delete family per
//! resource type.
//!
//! SYSTEM CONTEXT
//! ==============
//! The deployed API grew one resource at a time and its paths show it
//! (`/display` for projects, `/serviceDisplay`, `/heroGet`, ...). The exact
//! paths are kept here in one place so no page hardcodes a URL. Multipart
//! variants exist for the resources that carry a binary asset (project and
//! testimonial images, the hero banner, the resume file).

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use super::api::{delete_json, get_json, post_json, put_json};
#[cfg(feature = "hydrate")]
use super::api::{post_form, put_form};
use super::error::ApiError;
use super::types::{
    AboutCard, AboutPayload, AboutResponse, ContactDetails, ContactInfoResponse, ContactMessage,
    ContactMessagePayload, ContactsResponse, ExperienceEntry, ExperiencePayload,
    ExperiencesResponse, HeroContent, HeroResponse, MutationResponse, Project, ProjectsResponse,
    Service, ServicePayload, ServicesResponse, Skill, SkillPayload, SkillsResponse, SocialLinks,
    SocialResponse, Testimonial, TestimonialsResponse,
};

// ---------------------------------------------------------------------------
// Endpoint formatters for identifier-in-path operations.
// ---------------------------------------------------------------------------

#[cfg(any(test, feature = "hydrate"))]
fn project_update_endpoint(id: &str) -> String {
    format!("/update/{id}")
}

fn project_delete_endpoint(id: &str) -> String {
    format!("/delete/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn hero_update_endpoint(id: &str) -> String {
    format!("/heroUpdate/{id}")
}

fn service_update_endpoint(id: &str) -> String {
    format!("/serviceUpdate/{id}")
}

fn service_delete_endpoint(id: &str) -> String {
    format!("/serviceDelete/{id}")
}

fn skill_update_endpoint(id: &str) -> String {
    format!("/skillUpdate/{id}")
}

fn skill_delete_endpoint(id: &str) -> String {
    format!("/skillDelete/{id}")
}

fn testimonial_delete_endpoint(id: &str) -> String {
    format!("/testimonialDelete/{id}")
}

fn experience_update_endpoint(id: &str) -> String {
    format!("/experienceUpdate/{id}")
}

fn experience_delete_endpoint(id: &str) -> String {
    format!("/experienceDelete/{id}")
}

fn about_update_endpoint(id: &str) -> String {
    format!("/aboutUpdate/{id}")
}

fn about_delete_endpoint(id: &str) -> String {
    format!("/aboutDelete/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn contact_info_update_endpoint(id: &str) -> String {
    format!("/contactInfoUpdate/{id}")
}

fn contact_info_delete_endpoint(id: &str) -> String {
    format!("/contactInfoDelete/{id}")
}

fn contact_message_delete_endpoint(id: &str) -> String {
    format!("/deleteContact/{id}")
}

// ---------------------------------------------------------------------------
// Hero banner (single document).
// ---------------------------------------------------------------------------

/// Fetch the hero banner; `None` when nothing was published yet.
pub async fn fetch_hero() -> Result<Option<HeroContent>, ApiError> {
    let body: HeroResponse = get_json("/heroGet").await?;
    Ok(body.hero)
}

#[cfg(feature = "hydrate")]
pub async fn create_hero(form: web_sys::FormData) -> Result<MutationResponse, ApiError> {
    post_form("/heroCreate", form).await
}

#[cfg(feature = "hydrate")]
pub async fn update_hero(id: &str, form: web_sys::FormData) -> Result<MutationResponse, ApiError> {
    put_form(&hero_update_endpoint(id), form).await
}

// ---------------------------------------------------------------------------
// Projects.
// ---------------------------------------------------------------------------

pub async fn fetch_projects() -> Result<Vec<Project>, ApiError> {
    let body: ProjectsResponse = get_json("/display").await?;
    Ok(body.projects)
}

#[cfg(feature = "hydrate")]
pub async fn create_project(form: web_sys::FormData) -> Result<MutationResponse, ApiError> {
    post_form("/create", form).await
}

#[cfg(feature = "hydrate")]
pub async fn update_project(id: &str, form: web_sys::FormData) -> Result<MutationResponse, ApiError> {
    put_form(&project_update_endpoint(id), form).await
}

pub async fn delete_project(id: &str) -> Result<MutationResponse, ApiError> {
    delete_json(&project_delete_endpoint(id)).await
}

// ---------------------------------------------------------------------------
// Services.
// ---------------------------------------------------------------------------

pub async fn fetch_services() -> Result<Vec<Service>, ApiError> {
    let body: ServicesResponse = get_json("/serviceDisplay").await?;
    Ok(body.services)
}

pub async fn create_service(payload: &ServicePayload) -> Result<MutationResponse, ApiError> {
    post_json("/serviceCreate", payload).await
}

pub async fn update_service(id: &str, payload: &ServicePayload) -> Result<MutationResponse, ApiError> {
    put_json(&service_update_endpoint(id), payload).await
}

pub async fn delete_service(id: &str) -> Result<MutationResponse, ApiError> {
    delete_json(&service_delete_endpoint(id)).await
}

// ---------------------------------------------------------------------------
// Skills.
// ---------------------------------------------------------------------------

pub async fn fetch_skills() -> Result<Vec<Skill>, ApiError> {
    let body: SkillsResponse = get_json("/skillDisplay").await?;
    Ok(body.skills)
}

pub async fn create_skill(payload: &SkillPayload) -> Result<MutationResponse, ApiError> {
    post_json("/skillCreate", payload).await
}

pub async fn update_skill(id: &str, payload: &SkillPayload) -> Result<MutationResponse, ApiError> {
    put_json(&skill_update_endpoint(id), payload).await
}

pub async fn delete_skill(id: &str) -> Result<MutationResponse, ApiError> {
    delete_json(&skill_delete_endpoint(id)).await
}

// ---------------------------------------------------------------------------
// Testimonials (create + delete only; the API has no update).
// ---------------------------------------------------------------------------

pub async fn fetch_testimonials() -> Result<Vec<Testimonial>, ApiError> {
    let body: TestimonialsResponse = get_json("/testimonialDisplay").await?;
    Ok(body.testimonials)
}

#[cfg(feature = "hydrate")]
pub async fn create_testimonial(form: web_sys::FormData) -> Result<MutationResponse, ApiError> {
    post_form("/testimonialCreate", form).await
}

pub async fn delete_testimonial(id: &str) -> Result<MutationResponse, ApiError> {
    delete_json(&testimonial_delete_endpoint(id)).await
}

// ---------------------------------------------------------------------------
// Experience.
// ---------------------------------------------------------------------------

pub async fn fetch_experiences() -> Result<Vec<ExperienceEntry>, ApiError> {
    let body: ExperiencesResponse = get_json("/experienceDisplay").await?;
    Ok(body.experiences)
}

pub async fn create_experience(payload: &ExperiencePayload) -> Result<MutationResponse, ApiError> {
    post_json("/experienceCreate", payload).await
}

pub async fn update_experience(id: &str, payload: &ExperiencePayload) -> Result<MutationResponse, ApiError> {
    put_json(&experience_update_endpoint(id), payload).await
}

pub async fn delete_experience(id: &str) -> Result<MutationResponse, ApiError> {
    delete_json(&experience_delete_endpoint(id)).await
}

// ---------------------------------------------------------------------------
// About cards.
// ---------------------------------------------------------------------------

pub async fn fetch_about_cards() -> Result<Vec<AboutCard>, ApiError> {
    let body: AboutResponse = get_json("/aboutDisplay").await?;
    Ok(body.about_cards)
}

pub async fn create_about_card(payload: &AboutPayload) -> Result<MutationResponse, ApiError> {
    post_json("/aboutCreate", payload).await
}

pub async fn update_about_card(id: &str, payload: &AboutPayload) -> Result<MutationResponse, ApiError> {
    put_json(&about_update_endpoint(id), payload).await
}

pub async fn delete_about_card(id: &str) -> Result<MutationResponse, ApiError> {
    delete_json(&about_delete_endpoint(id)).await
}

// ---------------------------------------------------------------------------
// Contact details (email/phone/location + resume upload).
// ---------------------------------------------------------------------------

pub async fn fetch_contact_details() -> Result<Vec<ContactDetails>, ApiError> {
    let body: ContactInfoResponse = get_json("/contactInfoDisplay").await?;
    Ok(body.data)
}

#[cfg(feature = "hydrate")]
pub async fn create_contact_details(form: web_sys::FormData) -> Result<MutationResponse, ApiError> {
    post_form("/contactInfoCreate", form).await
}

#[cfg(feature = "hydrate")]
pub async fn update_contact_details(id: &str, form: web_sys::FormData) -> Result<MutationResponse, ApiError> {
    put_form(&contact_info_update_endpoint(id), form).await
}

pub async fn delete_contact_details(id: &str) -> Result<MutationResponse, ApiError> {
    delete_json(&contact_info_delete_endpoint(id)).await
}

// ---------------------------------------------------------------------------
// Visitor contact messages.
// ---------------------------------------------------------------------------

pub async fn fetch_contact_messages() -> Result<Vec<ContactMessage>, ApiError> {
    let body: ContactsResponse = get_json("/contactDisplay").await?;
    Ok(body.contacts)
}

pub async fn create_contact_message(payload: &ContactMessagePayload) -> Result<MutationResponse, ApiError> {
    post_json("/contactCreate", payload).await
}

pub async fn delete_contact_message(id: &str) -> Result<MutationResponse, ApiError> {
    delete_json(&contact_message_delete_endpoint(id)).await
}

// ---------------------------------------------------------------------------
// Social links (fixed five-link document, upsert only).
// ---------------------------------------------------------------------------

pub async fn fetch_social_links() -> Result<SocialLinks, ApiError> {
    let body: SocialResponse = get_json("/socialDisplay").await?;
    Ok(body.socials.unwrap_or_default())
}

pub async fn update_social_links(payload: &SocialLinks) -> Result<MutationResponse, ApiError> {
    put_json("/socialUpdate", payload).await
}
