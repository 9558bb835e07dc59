//! Core domain types returned by the movie catalog.
//!
//! The shapes follow the catalog's JSON payloads so they can be decoded
//! directly with serde. Fields the catalog may omit or send as `null` fall
//! back to their defaults instead of failing the whole movie.

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie in the catalog
pub type MovieId = u64;

/// Unique identifier for a person (cast or crew)
pub type PersonId = u64;

/// Unique identifier for a genre
pub type GenreId = u32;

/// Crew job title that marks a director
pub const DIRECTOR_JOB: &str = "Director";

/// Treat an explicit JSON `null` the same as a missing field.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Leading four characters of a release date ("1999-03-30" -> "1999").
///
/// Returns `None` for a missing or empty date.
pub fn leading_year(release_date: Option<&str>) -> Option<String> {
    match release_date {
        Some(date) if !date.is_empty() => Some(date.chars().take(4).collect()),
        _ => None,
    }
}

/// Numeric release year, `None` when the date is missing or not parseable.
pub fn parse_year(release_date: Option<&str>) -> Option<i32> {
    leading_year(release_date)?.parse().ok()
}

/// Full image URL for a poster path; `None` when the path is missing or empty.
pub fn poster_url(image_base_url: &str, poster_path: Option<&str>) -> Option<String> {
    poster_path
        .filter(|path| !path.is_empty())
        .map(|path| format!("{}{}", image_base_url, path))
}

// =============================================================================
// Movie details
// =============================================================================

/// A genre as the catalog lists it: id plus localized name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
}

/// Full details of a single movie
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: MovieId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    /// Date string as sent by the catalog ("YYYY-MM-DD", sometimes empty)
    #[serde(default)]
    pub release_date: Option<String>,
    /// Box office revenue in dollars
    #[serde(default, deserialize_with = "null_to_default")]
    pub revenue: u64,
    /// Genres in the catalog's order
    #[serde(default, deserialize_with = "null_to_default")]
    pub genres: Vec<Genre>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub popularity: f64,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub vote_average: f64,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl MovieDetails {
    /// Release year as text, `None` if the catalog has no date
    pub fn year_label(&self) -> Option<String> {
        leading_year(self.release_date.as_deref())
    }

    /// Release year as a number, `None` if unknown or malformed
    pub fn release_year(&self) -> Option<i32> {
        parse_year(self.release_date.as_deref())
    }

    /// Genre names in the catalog's order
    pub fn genre_names(&self) -> Vec<String> {
        self.genres.iter().map(|g| g.name.clone()).collect()
    }
}

// =============================================================================
// Credits
// =============================================================================

/// One billed cast member; the catalog returns them in billing order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: PersonId,
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
}

/// One crew member with the job they held on the movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: PersonId,
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub job: String,
    #[serde(default)]
    pub department: Option<String>,
}

impl CrewMember {
    pub fn is_director(&self) -> bool {
        self.job == DIRECTOR_JOB
    }
}

/// Cast and crew of a movie
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieCredits {
    pub id: MovieId,
    #[serde(default, deserialize_with = "null_to_default")]
    pub cast: Vec<CastMember>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub crew: Vec<CrewMember>,
}

impl MovieCredits {
    /// The first `limit` cast members in billing order (fewer if the cast is short)
    pub fn top_cast(&self, limit: usize) -> &[CastMember] {
        &self.cast[..self.cast.len().min(limit)]
    }

    /// Crew entries whose job is "Director"
    pub fn directors(&self) -> impl Iterator<Item = &CrewMember> {
        self.crew.iter().filter(|member| member.is_director())
    }
}

// =============================================================================
// Listings (recommendations and search results)
// =============================================================================

/// A movie as it appears inside a paged listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieListing {
    pub id: MovieId,
    #[serde(default, deserialize_with = "null_to_default")]
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub popularity: f64,
    #[serde(default, deserialize_with = "null_to_default")]
    pub vote_average: f64,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub genre_ids: Vec<GenreId>,
}

impl MovieListing {
    pub fn year_label(&self) -> Option<String> {
        leading_year(self.release_date.as_deref())
    }
}

/// One page of a listing endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoviePage {
    #[serde(default)]
    pub page: u32,
    #[serde(default, deserialize_with = "null_to_default")]
    pub results: Vec<MovieListing>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

impl MoviePage {
    /// Wrap a list of listings as page 1 of 1
    pub fn single(results: Vec<MovieListing>) -> Self {
        let total = results.len() as u32;
        Self {
            page: 1,
            results,
            total_pages: 1,
            total_results: total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_year() {
        assert_eq!(leading_year(Some("1999-03-30")), Some("1999".to_string()));
        assert_eq!(leading_year(Some("")), None);
        assert_eq!(leading_year(None), None);
    }

    #[test]
    fn test_parse_year_rejects_garbage() {
        assert_eq!(parse_year(Some("1999-03-30")), Some(1999));
        assert_eq!(parse_year(Some("n/a")), None);
        assert_eq!(parse_year(None), None);
    }

    #[test]
    fn test_details_tolerate_nulls() {
        let json = r#"{
            "id": 603,
            "title": "The Matrix",
            "release_date": "1999-03-30",
            "revenue": null,
            "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
            "popularity": 83.4,
            "poster_path": null
        }"#;

        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.revenue, 0);
        assert_eq!(details.release_year(), Some(1999));
        assert_eq!(details.genre_names(), vec!["Action", "Science Fiction"]);
        assert!(details.poster_path.is_none());
    }

    #[test]
    fn test_top_cast_and_directors() {
        let credits = MovieCredits {
            id: 1,
            cast: (1..=3)
                .map(|i| CastMember {
                    id: i,
                    name: format!("Actor {}", i),
                    character: None,
                })
                .collect(),
            crew: vec![
                CrewMember {
                    id: 10,
                    name: "Director One".to_string(),
                    job: "Director".to_string(),
                    department: Some("Directing".to_string()),
                },
                CrewMember {
                    id: 11,
                    name: "Writer".to_string(),
                    job: "Screenplay".to_string(),
                    department: Some("Writing".to_string()),
                },
            ],
        };

        assert_eq!(credits.top_cast(5).len(), 3);
        assert_eq!(credits.top_cast(2).len(), 2);
        let directors: Vec<_> = credits.directors().map(|d| d.id).collect();
        assert_eq!(directors, vec![10]);
    }
}
