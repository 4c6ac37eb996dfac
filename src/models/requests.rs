use thiserror::Error;

use crate::models::domain::{
    dedup_activities, Activity, PrimaryLocation, ReligiousOrientation, SearchCriteria, Sex,
};

/// Errors turning an HTML form submission into [`SearchCriteria`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}

/// Raw `application/x-www-form-urlencoded` submission from the search form
///
/// Kept as ordered pairs so repeated keys (`otherLocations`, `activities`)
/// survive decoding.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    pairs: Vec<(String, String)>,
}

impl SearchForm {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn required(&self, key: &'static str) -> Result<&str, FormError> {
        self.first(key).ok_or(FormError::MissingField(key))
    }

    fn number<T: std::str::FromStr>(&self, key: &'static str) -> Result<T, FormError> {
        let raw = self.required(key)?;
        raw.trim().parse().map_err(|_| FormError::InvalidValue {
            field: key,
            value: raw.to_string(),
        })
    }

    /// Checkboxes are only sent when ticked
    fn flag(&self, key: &str) -> bool {
        self.first(key).is_some()
    }

    /// Decode the submission. Range checks are left to `Validate`.
    pub fn into_criteria(self) -> Result<SearchCriteria, FormError> {
        let sex_key = self.required("sex")?;
        let sex = Sex::from_key(sex_key).ok_or_else(|| FormError::InvalidValue {
            field: "sex",
            value: sex_key.to_string(),
        })?;

        let location = match self.first("locationKind").unwrap_or("municipality") {
            "municipality" => PrimaryLocation::Municipality(self.required("municipality")?.to_string()),
            "area" => PrimaryLocation::Area(self.required("area")?.to_string()),
            other => {
                return Err(FormError::InvalidValue {
                    field: "locationKind",
                    value: other.to_string(),
                })
            }
        };

        let max_distance_km = match self.first("maxDistanceKm") {
            Some(raw) if !raw.trim().is_empty() => Some(self.number("maxDistanceKm")?),
            _ => None,
        };

        let religion_key = self.first("religion").unwrap_or("not_a_factor");
        let religion = ReligiousOrientation::from_key(religion_key, self.first("religionOther"))
            .ok_or_else(|| FormError::InvalidValue {
                field: "religion",
                value: religion_key.to_string(),
            })?;

        let activities = self
            .all("activities")
            .map(|key| {
                Activity::from_key(key).ok_or_else(|| FormError::InvalidValue {
                    field: "activities",
                    value: key.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SearchCriteria {
            sex,
            age: self.number("age")?,
            budget: self.number("budget")?,
            location,
            other_locations: self
                .all("otherLocations")
                .filter(|l| !l.trim().is_empty())
                .map(str::to_string)
                .collect(),
            max_distance_km,
            bilingual: self.flag("bilingual"),
            transport: self.flag("transport"),
            religion,
            activities: dedup_activities(activities),
        })
    }
}
