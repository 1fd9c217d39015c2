use std::{
    fs::{self, File},
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
    process,
};

use crate::{
    error::{CatalogError, Result},
    model::movie::Movie,
};

/// Reads the whole catalog file as a JSON array of movies.
pub fn load(path: &Path) -> Result<Vec<Movie>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => CatalogError::Io(e),
    })?;

    let movies: Vec<Movie> = serde_json::from_reader(BufReader::new(file))?;
    log::debug!("Read {} movies from {}", movies.len(), path.display());
    Ok(movies)
}

/// Replaces the catalog file with the given movies, compact JSON.
///
/// The movies are written to a sibling temp file which is then renamed over
/// `path`, so a failed write leaves the previous file in place.
pub fn save(path: &Path, movies: &[Movie]) -> Result<()> {
    let temp_path = temp_path_for(path);

    if let Err(e) = write_movies(&temp_path, movies) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    fs::rename(&temp_path, path)?;

    log::debug!("Wrote {} movies to {}", movies.len(), path.display());
    Ok(())
}

fn write_movies(temp_path: &Path, movies: &[Movie]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(temp_path)?);
    serde_json::to_writer(&mut writer, movies)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().unwrap_or_default().to_os_string();
    file_name.push(format!(".{}.tmp", process::id()));
    path.with_file_name(file_name)
}
