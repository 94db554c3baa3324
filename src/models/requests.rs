//! Request DTOs for the movie service API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::{de, Deserialize, Deserializer};

/// Request body for create (POST /api/movies) and update (PUT /api/movies/:id).
///
/// Every field is optional at this layer. The store decides which fields are
/// required on insert; on update, absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    /// Accepts a JSON number or a numeric string
    #[serde(default, deserialize_with = "coerce_rating")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub streaming_link: Option<String>,
}

/// Query string for GET /api/search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

impl SearchQuery {
    /// Returns the search text, treating an empty `q` the same as a missing one.
    pub fn text(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RatingInput {
    Number(f64),
    Text(String),
}

fn coerce_rating<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RatingInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RatingInput::Number(n)) => Ok(Some(n)),
        Some(RatingInput::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("rating '{}' is not a number", s))),
    }
}
