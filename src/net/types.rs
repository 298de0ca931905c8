//! Wire-schema DTOs for the portfolio API.
//!
//! DESIGN
//! ======
//! These types mirror the deployed API's payloads so serde decoding stays
//! lossless. Identifiers are opaque server-assigned strings surfaced as
//! `_id`; the client never generates them. A few list-valued fields arrive
//! either as a JSON array or as a comma-separated string depending on how
//! the document was last written, so those fields use a tolerant
//! deserializer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The authenticated administrator identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (server-assigned).
    #[serde(rename = "_id", default)]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Role string; the admin area requires `"admin"`.
    #[serde(default)]
    pub role: String,
}

/// Response of the identity check (`GET /`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct IdentityResponse {
    #[serde(default)]
    pub success: bool,
    pub user: Option<User>,
}

/// Response of `POST /login`. The identity fields arrive at the top level;
/// a 2xx status is the success signal, failures surface as HTTP 4xx.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    pub message: Option<String>,
}

impl LoginResponse {
    /// Convert the flat login payload into a session identity.
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
        }
    }
}

/// Generic mutation acknowledgement (`{ success, message? }`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
}

/// A server-hosted binary asset reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub url: String,
}

/// Hero banner content for the public landing section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    pub title: String,
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub stats: Vec<HeroStat>,
    pub image: Option<UploadedImage>,
}

/// A single headline statistic on the hero banner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroStat {
    pub label: String,
    pub value: String,
}

/// A portfolio project entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub title: String,
    pub tagline: String,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub tags: Vec<String>,
    /// Live deployment URL.
    pub link: String,
    /// Source repository URL.
    pub repo: String,
    pub image: Option<UploadedImage>,
}

/// A service offering card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub title: String,
    /// Icon identifier or emoji rendered next to the title.
    #[serde(default)]
    pub icon: String,
    pub desc: String,
}

/// A skill with a proficiency level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    /// Proficiency as entered by the admin (e.g. `"90"`).
    pub level: String,
}

/// A testimonial quote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    /// The author's role or affiliation line.
    pub title: String,
    pub quote: String,
    pub image: Option<UploadedImage>,
}

/// A work-history entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub role: String,
    pub company: String,
    /// Free-form period label (e.g. `"2021 – 2023"`).
    pub period: String,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub points: Vec<String>,
}

/// An "about me" card (title + paragraph).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutCard {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub title: String,
    pub text: String,
}

/// Public contact details shown in the contact section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Absolute URL of the downloadable resume, if one was uploaded.
    pub resume: Option<String>,
}

/// The fixed set of social profile links.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default)]
    pub x: String,
}

/// A message submitted through the public contact form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Optional 1–5 portfolio rating picked by the visitor.
    #[serde(default)]
    pub rating: Option<String>,
    /// Server-side receipt timestamp (ISO 8601), if recorded.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

// ---------------------------------------------------------------------------
// Collection envelopes: `{ success, <resourceKey>: [...] }`.
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HeroResponse {
    #[serde(default)]
    pub success: bool,
    pub hero: Option<HeroContent>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProjectsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ServicesResponse {
    #[serde(default)]
    pub services: Vec<Service>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SkillsResponse {
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TestimonialsResponse {
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ExperiencesResponse {
    #[serde(default)]
    pub experiences: Vec<ExperienceEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AboutResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "aboutCards", default)]
    pub about_cards: Vec<AboutCard>,
}

/// Contact-info collection; the API nests these under a generic `data` key.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContactInfoResponse {
    #[serde(default)]
    pub data: Vec<ContactDetails>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContactsResponse {
    #[serde(default)]
    pub contacts: Vec<ContactMessage>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SocialResponse {
    pub socials: Option<SocialLinks>,
}

// ---------------------------------------------------------------------------
// Request payloads (JSON-bodied endpoints).
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfilePayload {
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordPayload {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ServicePayload {
    pub title: String,
    pub icon: String,
    pub desc: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkillPayload {
    pub name: String,
    pub level: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExperiencePayload {
    pub role: String,
    pub company: String,
    pub period: String,
    pub points: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AboutPayload {
    pub title: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactMessagePayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub rating: String,
}

fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(Vec::new()),
        serde_json::Value::String(raw) => Ok(raw
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(ToOwned::to_owned)
            .collect()),
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::String(text) => Ok(text),
                other => Err(D::Error::custom(format!("expected string list entry, got {other}"))),
            })
            .collect(),
        _ => Err(D::Error::custom("expected string or list of strings")),
    }
}
