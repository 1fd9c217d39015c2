use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredMovie")]
pub struct Movie {
    pub title: String,
    pub director: String,
    pub year: i32,
    #[serde(rename = "genre")]
    pub genres: Vec<String>,
}

impl Movie {
    pub fn new(title: &str, director: &str, year: i32, genres: Vec<String>) -> Self {
        Movie {
            title: title.to_string(),
            director: director.to_string(),
            year,
            genres,
        }
    }

    pub fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    pub fn has_director(&self, director: &str) -> bool {
        self.director.to_lowercase() == director.to_lowercase()
    }

    pub fn has_genre_label(&self, label: &str) -> bool {
        let label = label.to_lowercase();
        self.genres.iter().any(|g| g.to_lowercase() == label)
    }

    pub fn title_length(&self) -> usize {
        self.title.chars().count()
    }

    pub fn to_csvable_array(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.director.clone(),
            self.year.to_string(),
            self.genres.join(", "),
        ]
    }

    pub fn csv_titles() -> Vec<&'static str> {
        vec!["Title", "Directors", "Year", "Genres"]
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {}", self.title, self.year, self.director)?;
        if !self.genres.is_empty() {
            write!(f, " [{}]", self.genres.join(", "))?;
        }
        Ok(())
    }
}

/// On-disk shape. Older files may carry the genre list under `genres`
/// (written by updates), `genre`, or both; `genres` is the newer value.
#[derive(Deserialize)]
struct StoredMovie {
    title: String,
    director: String,
    year: i32,
    #[serde(default)]
    genre: Option<Vec<String>>,
    #[serde(default)]
    genres: Option<Vec<String>>,
}

impl From<StoredMovie> for Movie {
    fn from(stored: StoredMovie) -> Self {
        Movie {
            title: stored.title,
            director: stored.director,
            year: stored.year,
            genres: stored.genres.or(stored.genre).unwrap_or_default(),
        }
    }
}

/// Optional overrides applied by `MovieCatalog::update`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieChanges {
    pub director: Option<String>,
    pub year: Option<i32>,
    pub genres: Option<Vec<String>>,
}

impl MovieChanges {
    pub fn is_empty(&self) -> bool {
        self.director.is_none() && self.year.is_none() && self.genres.is_none()
    }

    pub fn apply_to(self, movie: &mut Movie) {
        if let Some(director) = self.director {
            movie.director = director;
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(genres) = self.genres {
            movie.genres = genres;
        }
    }
}
