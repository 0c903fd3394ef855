use serde::{Deserialize, Serialize};

/// OMDb substitutes the literal string "N/A" for fields it has no data for.
/// We keep that convention instead of mapping to `None` so display code can
/// treat every textual field uniformly; it also survives re-serialization.
fn not_available() -> String {
    "N/A".to_string()
}

/// One entry from a third-party rating aggregator, e.g.
/// `{"Source": "Rotten Tomatoes", "Value": "72%"}`. Sources are unique
/// within a record; order is kept as received.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Rating {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// Decoded payload of a single OMDb title lookup.
///
/// `response` is the API-level success flag ("True"/"False"); when it is
/// "False" the payload carries only `error` and the rest of the fields fall
/// back to their defaults.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Movie {
    #[serde(rename = "Title", default = "not_available")]
    pub title: String,
    #[serde(rename = "Year", default = "not_available")]
    pub year: String,
    #[serde(rename = "Rated", default = "not_available")]
    pub rated: String,
    #[serde(rename = "Released", default = "not_available")]
    pub released: String,
    #[serde(rename = "Runtime", default = "not_available")]
    pub runtime: String,
    #[serde(rename = "Genre", default = "not_available")]
    pub genre: String,
    #[serde(rename = "Director", default = "not_available")]
    pub director: String,
    #[serde(rename = "Writer", default = "not_available")]
    pub writer: String,
    #[serde(rename = "Actors", default = "not_available")]
    pub actors: String,
    #[serde(rename = "Plot", default = "not_available")]
    pub plot: String,
    #[serde(rename = "Language", default = "not_available")]
    pub language: String,
    #[serde(rename = "Country", default = "not_available")]
    pub country: String,
    #[serde(rename = "Awards", default = "not_available")]
    pub awards: String,
    #[serde(rename = "Poster", default = "not_available")]
    pub poster: String,
    #[serde(rename = "Ratings", default)]
    pub ratings: Vec<Rating>,
    #[serde(rename = "Metascore", default = "not_available")]
    pub metascore: String,
    #[serde(rename = "imdbRating", default = "not_available")]
    pub imdb_rating: String,
    #[serde(rename = "imdbVotes", default = "not_available")]
    pub imdb_votes: String,
    #[serde(rename = "imdbID", default = "not_available")]
    pub imdb_id: String,
    #[serde(rename = "Type", default = "not_available")]
    pub media_type: String,
    #[serde(rename = "DVD")]
    pub dvd: Option<String>,
    #[serde(rename = "BoxOffice")]
    pub box_office: Option<String>,
    #[serde(rename = "Production")]
    pub production: Option<String>,
    #[serde(rename = "Website")]
    pub website: Option<String>,
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl Movie {
    /// API-level success flag, string-typed on the wire.
    pub fn is_success(&self) -> bool {
        self.response == "True"
    }
}
