use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

/// Administrative region every recommendation and search is scoped to
pub const REGION: &str = "departamento de Guatemala";

/// Municipalities of the department of Guatemala offered as locations
pub const MUNICIPALITIES: [&str; 17] = [
    "Guatemala",
    "Santa Catarina Pinula",
    "San José Pinula",
    "San José del Golfo",
    "Palencia",
    "Chinautla",
    "San Pedro Ayampuc",
    "Mixco",
    "San Pedro Sacatepéquez",
    "San Juan Sacatepéquez",
    "San Raymundo",
    "Chuarrancho",
    "Fraijanes",
    "Amatitlán",
    "Villa Nueva",
    "Villa Canales",
    "San Miguel Petapa",
];

pub const MIN_AGE: u8 = 3;
pub const MAX_AGE: u8 = 18;
pub const MIN_BUDGET: u32 = 5_000;
pub const MAX_BUDGET: u32 = 100_000;
pub const MAX_DISTANCE_KM: u16 = 50;

/// Search criteria assembled from a single form submission
///
/// Constructed on submit, consumed by the builder and discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SearchCriteria {
    pub sex: Sex,
    #[validate(range(min = MIN_AGE, max = MAX_AGE))]
    pub age: u8,
    /// Annual budget in quetzales
    #[validate(range(min = MIN_BUDGET, max = MAX_BUDGET))]
    pub budget: u32,
    #[validate(custom(function = "validate_location"))]
    pub location: PrimaryLocation,
    #[serde(rename = "otherLocations", default)]
    pub other_locations: Vec<String>,
    /// Collected from the form but not used by the prompt or the query
    #[serde(rename = "maxDistanceKm", default)]
    #[validate(range(max = MAX_DISTANCE_KM))]
    pub max_distance_km: Option<u16>,
    #[serde(default)]
    pub bilingual: bool,
    #[serde(default)]
    pub transport: bool,
    #[serde(default)]
    #[validate(custom(function = "validate_religion"))]
    pub religion: ReligiousOrientation,
    #[serde(default, deserialize_with = "unique_activities")]
    pub activities: Vec<Activity>,
}

impl SearchCriteria {
    /// Primary location followed by any secondary locations, comma separated
    pub fn location_segment(&self) -> String {
        if self.other_locations.is_empty() {
            return self.location.as_str().to_string();
        }

        std::iter::once(self.location.as_str())
            .chain(self.other_locations.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn key(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Masculino",
            Sex::Female => "Femenino",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// Where the family wants the school to be
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryLocation {
    /// One of [`MUNICIPALITIES`]
    Municipality(String),
    /// Free-text description such as "zona 10"
    Area(String),
}

impl PrimaryLocation {
    pub fn as_str(&self) -> &str {
        match self {
            PrimaryLocation::Municipality(name) => name,
            PrimaryLocation::Area(description) => description,
        }
    }
}

fn validate_location(location: &PrimaryLocation) -> Result<(), ValidationError> {
    match location {
        PrimaryLocation::Municipality(name) if !MUNICIPALITIES.contains(&name.as_str()) => {
            Err(ValidationError::new("unknown_municipality"))
        }
        PrimaryLocation::Area(description) if description.trim().is_empty() => {
            Err(ValidationError::new("empty_area"))
        }
        _ => Ok(()),
    }
}

fn validate_religion(religion: &ReligiousOrientation) -> Result<(), ValidationError> {
    match religion {
        ReligiousOrientation::Other(text) if text.trim().is_empty() => {
            Err(ValidationError::new("empty_religion"))
        }
        _ => Ok(()),
    }
}

/// Preferred religious orientation of the school
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReligiousOrientation {
    #[default]
    NotAFactor,
    Secular,
    Catholic,
    Evangelical,
    OtherChristian,
    Jewish,
    /// Orientation typed in by the parent
    Other(String),
}

impl ReligiousOrientation {
    /// Form keys in display order; `other` carries its text in a separate field
    pub const KEYS: [&'static str; 7] = [
        "not_a_factor",
        "secular",
        "catholic",
        "evangelical",
        "other_christian",
        "jewish",
        "other",
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ReligiousOrientation::NotAFactor => "not_a_factor",
            ReligiousOrientation::Secular => "secular",
            ReligiousOrientation::Catholic => "catholic",
            ReligiousOrientation::Evangelical => "evangelical",
            ReligiousOrientation::OtherChristian => "other_christian",
            ReligiousOrientation::Jewish => "jewish",
            ReligiousOrientation::Other(_) => "other",
        }
    }

    /// Build from a form key; `other_text` is only read for `other`
    pub fn from_key(key: &str, other_text: Option<&str>) -> Option<Self> {
        let orientation = match key {
            "not_a_factor" => ReligiousOrientation::NotAFactor,
            "secular" => ReligiousOrientation::Secular,
            "catholic" => ReligiousOrientation::Catholic,
            "evangelical" => ReligiousOrientation::Evangelical,
            "other_christian" => ReligiousOrientation::OtherChristian,
            "jewish" => ReligiousOrientation::Jewish,
            "other" => ReligiousOrientation::Other(other_text.unwrap_or_default().to_string()),
            _ => return None,
        };
        Some(orientation)
    }

    /// Label shown in the form for a key
    pub fn key_label(key: &str) -> &'static str {
        match key {
            "not_a_factor" => "No es un factor importante",
            "secular" => "Laico (sin orientación religiosa)",
            "catholic" => "Católico",
            "evangelical" => "Evangélico",
            "other_christian" => "Otro cristiano",
            "jewish" => "Judío",
            _ => "Otro",
        }
    }

    /// Value used downstream. `Other` resolves to the typed text, never "Otro".
    pub fn effective_label(&self) -> &str {
        match self {
            ReligiousOrientation::Other(text) => text,
            other => Self::key_label(other.key()),
        }
    }

    pub fn is_factor(&self) -> bool {
        !matches!(self, ReligiousOrientation::NotAFactor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    Sports,
    Art,
    Music,
    Technology,
    AdditionalLanguages,
    Other,
}

impl Activity {
    pub const ALL: [Activity; 6] = [
        Activity::Sports,
        Activity::Art,
        Activity::Music,
        Activity::Technology,
        Activity::AdditionalLanguages,
        Activity::Other,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Activity::Sports => "sports",
            Activity::Art => "art",
            Activity::Music => "music",
            Activity::Technology => "technology",
            Activity::AdditionalLanguages => "additional_languages",
            Activity::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Activity::Sports => "Deportes",
            Activity::Art => "Arte",
            Activity::Music => "Música",
            Activity::Technology => "Tecnología",
            Activity::AdditionalLanguages => "Idiomas adicionales",
            Activity::Other => "Otro",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.key() == key)
    }
}

/// Drop repeated activities, keeping the first occurrence
pub fn dedup_activities(activities: Vec<Activity>) -> Vec<Activity> {
    let mut unique = Vec::with_capacity(activities.len());
    for activity in activities {
        if !unique.contains(&activity) {
            unique.push(activity);
        }
    }
    unique
}

fn unique_activities<'de, D>(deserializer: D) -> Result<Vec<Activity>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<Activity>::deserialize(deserializer).map(dedup_activities)
}
