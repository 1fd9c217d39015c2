use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use crate::{
    error::{CatalogError, Result},
    model::movie::{Movie, MovieChanges},
    persisters::{csv_writer::CsvWriter, json_store},
};

/// An ordered list of movies mirrored to a JSON file.
///
/// The file is read once when the catalog is opened and rewritten in full
/// after every `add`, `remove` and `update`. Nothing else touches it.
#[derive(Debug)]
pub struct MovieCatalog {
    path: PathBuf,
    movies: Vec<Movie>,
}

impl MovieCatalog {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let movies = json_store::load(&path)?;
        log::info!("Loaded {} movies from {}", movies.len(), path.display());

        Ok(MovieCatalog { path, movies })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Discards in-memory state and reads the backing file again.
    pub fn reload(&mut self) -> Result<()> {
        self.movies = json_store::load(&self.path)?;
        log::info!("Reloaded {} movies from {}", self.movies.len(), self.path.display());
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        json_store::save(&self.path, &self.movies)
    }

    fn position_of(&self, title: &str) -> Result<usize> {
        self.movies
            .iter()
            .position(|movie| movie.has_title(title))
            .ok_or_else(|| {
                log::warn!("No movie titled {:?} in {}", title, self.path.display());
                CatalogError::MovieNotFound
            })
    }

    pub fn list(&self) -> &[Movie] {
        &self.movies
    }

    pub fn add(&mut self, title: &str, director: &str, year: i32, genres: Vec<String>) -> Result<String> {
        self.movies.push(Movie::new(title, director, year, genres));
        self.persist()?;

        log::info!("Added movie {:?}", title);
        Ok(format!("{} was added successfully", title))
    }

    /// Removes the first movie whose title matches, ignoring case.
    pub fn remove(&mut self, title: &str) -> Result<Movie> {
        let index = self.position_of(title)?;
        let removed = self.movies.remove(index);
        self.persist()?;

        log::info!("Removed movie {:?}", removed.title);
        Ok(removed)
    }

    /// Applies `changes` to the first movie whose title matches, ignoring case.
    /// The file is rewritten even when `changes` is empty.
    pub fn update(&mut self, title: &str, changes: MovieChanges) -> Result<Movie> {
        let index = self.position_of(title)?;
        if changes.is_empty() {
            log::debug!("Update for {:?} carries no changes", title);
        }
        changes.apply_to(&mut self.movies[index]);
        self.persist()?;

        let updated = self.movies[index].clone();
        log::info!("Updated movie {:?}", updated.title);
        Ok(updated)
    }

    pub fn titles(&self) -> Vec<&str> {
        self.movies.iter().map(|movie| movie.title.as_str()).collect()
    }

    pub fn count(&self) -> usize {
        self.movies.len()
    }

    pub fn find_by_title(&self, title: &str) -> Vec<&Movie> {
        self.movies.iter().filter(|movie| movie.has_title(title)).collect()
    }

    /// Case-sensitive substring match on the title.
    pub fn find_by_title_substring(&self, substring: &str) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|movie| movie.title.contains(substring))
            .collect()
    }

    pub fn find_by_year(&self, year: i32) -> Result<Vec<&Movie>> {
        let movies: Vec<&Movie> = self.movies.iter().filter(|movie| movie.year == year).collect();
        if movies.is_empty() {
            return Err(CatalogError::MovieNotFound);
        }
        Ok(movies)
    }

    pub fn count_by_director(&self, director: &str) -> usize {
        self.movies
            .iter()
            .filter(|movie| movie.has_director(director))
            .count()
    }

    /// Movies whose genre list is exactly `genres`, same labels in the same order.
    /// Use `find_by_genre_label` to look for a single genre.
    pub fn find_by_genre(&self, genres: &[String]) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|movie| movie.genres.as_slice() == genres)
            .collect()
    }

    pub fn find_by_genre_label(&self, label: &str) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|movie| movie.has_genre_label(label))
            .collect()
    }

    /// Title of the movie with the smallest year. The earliest entry wins ties.
    pub fn oldest_title(&self) -> Result<&str> {
        let mut movies = self.movies.iter();
        let mut oldest = movies.next().ok_or(CatalogError::EmptyCatalog {
            operation: "oldest title",
        })?;
        for movie in movies {
            if movie.year < oldest.year {
                oldest = movie;
            }
        }
        Ok(&oldest.title)
    }

    pub fn average_year(&self) -> Result<f64> {
        if self.movies.is_empty() {
            return Err(CatalogError::EmptyCatalog {
                operation: "average year",
            });
        }
        let total: i64 = self.movies.iter().map(|movie| i64::from(movie.year)).sum();
        Ok(total as f64 / self.movies.len() as f64)
    }

    /// Longest title by character count; the earliest entry wins ties.
    /// An empty catalog yields an empty string.
    pub fn longest_title(&self) -> &str {
        let mut longest = "";
        let mut longest_len = 0;
        for movie in &self.movies {
            let len = movie.title_length();
            if len > longest_len {
                longest = &movie.title;
                longest_len = len;
            }
        }
        longest
    }

    /// Titles released from `start` to `end`, both inclusive.
    pub fn titles_between_years(&self, start: i32, end: i32) -> Vec<&str> {
        self.movies
            .iter()
            .filter(|movie| start <= movie.year && movie.year <= end)
            .map(|movie| movie.title.as_str())
            .collect()
    }

    /// The most frequent year and how many movies have it. Among equally
    /// frequent years, the one that appears first in the catalog wins.
    pub fn most_common_year(&self) -> Result<(i32, usize)> {
        let mut counts: HashMap<i32, usize> = HashMap::new();
        for movie in &self.movies {
            *counts.entry(movie.year).or_insert(0) += 1;
        }

        let mut best: Option<(i32, usize)> = None;
        for movie in &self.movies {
            let count = counts[&movie.year];
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((movie.year, count));
            }
        }

        best.ok_or(CatalogError::EmptyCatalog {
            operation: "most common year",
        })
    }

    /// Writes the catalog as a CSV file that Letterboxd can import.
    pub fn export_csv(&self, csv_path: impl AsRef<Path>) -> Result<()> {
        let csv_path = csv_path.as_ref();
        CsvWriter::save_movies_to_csv(&self.movies, csv_path)?;
        log::info!("Exported {} movies to {}", self.movies.len(), csv_path.display());
        Ok(())
    }
}
