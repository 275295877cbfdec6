//! Stored records and the JSON shapes the API exposes for them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const IMAGE_PREFIX: &str = "/static/images/";
pub const DEFAULT_IMAGE: &str = "/static/images/default-pet.jpg";

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub age: i64,
    pub description: String,
    pub adopted: bool,
    pub image: Option<String>,
}

/// Public URL for a stored image filename.
pub fn image_url(image: Option<&str>) -> String {
    match image {
        Some(file) if !file.is_empty() => format!("{}{}", IMAGE_PREFIX, file),
        _ => DEFAULT_IMAGE.to_string(),
    }
}

pub fn age_label(age: i64) -> String {
    format!("{} years", age)
}

/// A pet as listed by `GET /api/pets`.
#[derive(Clone, Debug, Serialize)]
pub struct PetView {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub age: String,
    pub description: String,
    pub image: String,
}

impl From<Pet> for PetView {
    fn from(p: Pet) -> Self {
        PetView {
            image: image_url(p.image.as_deref()),
            age: age_label(p.age),
            id: p.id,
            name: p.name,
            kind: p.kind,
            description: p.description,
        }
    }
}

/// Adoption row left-joined with the pet it points at. Pet columns are None when the pet is gone.
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct AdoptionRow {
    pub user_name: String,
    pub pet_name: String,
    pub pet_type: Option<String>,
    pub pet_age: Option<i64>,
    pub pet_description: Option<String>,
    pub pet_image: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct AdoptionView {
    pub pet_name: String,
    pub user_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub age: String,
    pub description: String,
    pub image: String,
}

impl From<AdoptionRow> for AdoptionView {
    fn from(r: AdoptionRow) -> Self {
        AdoptionView {
            kind: r.pet_type.unwrap_or_else(|| "Unknown".into()),
            age: match r.pet_age {
                Some(age) if age != 0 => age_label(age),
                _ => "Unknown".into(),
            },
            description: r
                .pet_description
                .unwrap_or_else(|| "Loved and cared for".into()),
            image: image_url(r.pet_image.as_deref()),
            pet_name: r.pet_name,
            user_name: r.user_name,
        }
    }
}

/// What a raw `pet_id` value refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PetIdInput {
    /// Absent, null, false, zero or the empty string.
    Missing,
    Id(i64),
    /// Present but cannot name any pet.
    Unknown,
}

impl PetIdInput {
    /// Integers, integer-valued floats and numeric strings name a pet.
    pub fn classify(value: Option<&Value>) -> Self {
        let Some(value) = value else {
            return PetIdInput::Missing;
        };
        match value {
            Value::Null | Value::Bool(false) => PetIdInput::Missing,
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(0), _) => PetIdInput::Missing,
                (Some(id), _) => PetIdInput::Id(id),
                (None, Some(f)) if f == 0.0 => PetIdInput::Missing,
                (None, Some(f)) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                    PetIdInput::Id(f as i64)
                }
                _ => PetIdInput::Unknown,
            },
            Value::String(s) if s.is_empty() => PetIdInput::Missing,
            Value::String(s) => s
                .trim()
                .parse()
                .map(PetIdInput::Id)
                .unwrap_or(PetIdInput::Unknown),
            _ => PetIdInput::Unknown,
        }
    }
}

/// Body of `POST /api/adopt`. Fields stay untyped until the handler has checked identity.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AdoptRequest {
    #[serde(default)]
    pub pet_id: Option<Value>,
    #[serde(default)]
    pub user_name: Option<Value>,
}

impl AdoptRequest {
    /// The asserted name as text. Non-zero numbers are rendered; other non-string values assert nothing.
    pub fn asserted_name(&self) -> Option<String> {
        match self.user_name.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn pet_id(&self) -> PetIdInput {
        PetIdInput::classify(self.pet_id.as_ref())
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct AdoptResponse {
    pub message: String,
    pub pet_name: String,
    pub user_name: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AdoptionsQuery {
    #[serde(default)]
    pub user_name: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ResetResponse {
    pub message: String,
    pub pets_reset: i64,
}

#[derive(Clone, Debug, Serialize)]
pub struct InitResponse {
    pub message: String,
    pub pets_added: i64,
}

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct CommunityPost {
    pub id: i64,
    pub user_name: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewCommunityPost {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Clone, Debug, Serialize, sqlx::FromRow)]
pub struct LostFoundReport {
    pub id: i64,
    pub user_name: Option<String>,
    pub report_type: Option<String>,
    pub pet_name: Option<String>,
    pub pet_type: Option<String>,
    pub breed: Option<String>,
    pub color: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub contact_phone: Option<String>,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewLostFoundReport {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub report_type: Option<String>,
    #[serde(default)]
    pub pet_name: Option<String>,
    #[serde(default)]
    pub pet_type: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub database: &'static str,
    pub total_pets: i64,
    pub message: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct HealthFailure {
    pub status: &'static str,
    pub error: String,
}
