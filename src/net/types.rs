//! Wire DTOs for the activities API.
//!
//! DESIGN
//! ======
//! The catalog arrives as a JSON object keyed by activity name. Render order
//! follows the server's key order, so `Catalog` deserializes through a map
//! visitor into an ordered `Vec` instead of a hash map.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{Error as _, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// A signup-able activity with capacity and schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    /// Unique display name; also the catalog key.
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in server-assigned order.
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity, floored at zero.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// Activity body as it appears under its name key.
#[derive(Debug, Deserialize)]
struct ActivityDetails {
    #[serde(default)]
    description: String,
    #[serde(default)]
    schedule: String,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    max_participants: u32,
    #[serde(default)]
    participants: Vec<String>,
}

impl ActivityDetails {
    fn into_activity(self, name: String) -> Activity {
        Activity {
            name,
            description: self.description,
            schedule: self.schedule,
            max_participants: self.max_participants,
            participants: self.participants,
        }
    }
}

/// Ordered activity catalog as returned by `GET /activities`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    activities: Vec<Activity>,
}

impl Catalog {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.activities.iter()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities.iter_mut().find(|a| a.name == name)
    }

    /// Activity names in render order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }

    /// Insert or replace by name; a replaced entry keeps its position.
    fn upsert(&mut self, activity: Activity) {
        match self.get_mut(&activity.name) {
            Some(existing) => *existing = activity,
            None => self.activities.push(activity),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = Catalog;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of activity name to activity details")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Catalog, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut catalog = Catalog { activities: Vec::with_capacity(map.size_hint().unwrap_or(0)) };
        while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
            catalog.upsert(details.into_activity(name));
        }
        Ok(catalog)
    }
}

/// Success body for signup and removal: `{ "message": "..." }`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

/// Failure body: `{ "detail": ... }`.
///
/// `detail` is usually a string but validation failures send a list of
/// objects, so it is kept as raw JSON.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ApiErrorBody {
    /// The detail when it is a non-empty string.
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(text)) if !text.is_empty() => Some(text.clone()),
            _ => None,
        }
    }
}

fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Number(number) = value else {
        return Err(D::Error::custom("expected number"));
    };
    if let Some(int) = number.as_u64() {
        return u32::try_from(int).map_err(|_| D::Error::custom(format!("value {int} out of range for u32")));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= 0.0
        && float <= f64::from(u32::MAX)
    {
        return Ok(float as u32);
    }
    Err(D::Error::custom("expected non-negative integer-compatible number"))
}
