use std::path::Path;

use csv::Writer;

use crate::{error::Result, model::movie::Movie};

pub struct CsvWriter {}

impl CsvWriter {
    pub fn save_movies_to_csv(movies: &[Movie], file_name: &Path) -> Result<()> {
        let mut wrt = Writer::from_path(file_name)?;
        wrt.write_record(Movie::csv_titles())?;
        for movie in movies.iter() {
            wrt.write_record(movie.to_csvable_array())?;
        }
        wrt.flush()?;

        Ok(())
    }
}
