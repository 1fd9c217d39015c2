use std::path::Path;

mod catalog;
pub use catalog::movie_catalog::MovieCatalog;

mod commands;
use commands::Command;
pub use commands::resolve_catalog_file;

mod error;
pub use error::{CatalogError, Result};

mod model;
pub use model::movie::{Movie, MovieChanges};

mod persisters;

/// Opens the catalog at `file` and runs one command against it, printing the
/// result to stdout.
pub fn run(file: &Path, args: &[String]) -> Result<()> {
    let command = Command::parse(args)?;
    let mut catalog = MovieCatalog::open(file)?;

    log::debug!("Running {:?} against {}", command, file.display());
    execute(&mut catalog, command)
}

fn execute(catalog: &mut MovieCatalog, command: Command) -> Result<()> {
    match command {
        Command::List => print_movies(catalog.list().iter()),
        Command::Titles => print_lines(catalog.titles()),
        Command::Count => println!("{}", catalog.count()),
        Command::Add {
            title,
            director,
            year,
            genres,
        } => println!("{}", catalog.add(&title, &director, year, genres)?),
        Command::Remove(title) => println!("Removed {}", catalog.remove(&title)?),
        Command::Update { title, changes } => {
            println!("Updated {}", catalog.update(&title, changes)?)
        }
        Command::Find(title) => print_movies(catalog.find_by_title(&title)),
        Command::Search(substring) => print_movies(catalog.find_by_title_substring(&substring)),
        Command::Year(year) => print_movies(catalog.find_by_year(year)?),
        Command::Director(director) => println!("{}", catalog.count_by_director(&director)),
        Command::Genre(genres) => print_movies(catalog.find_by_genre(&genres)),
        Command::HasGenre(label) => print_movies(catalog.find_by_genre_label(&label)),
        Command::Oldest => println!("{}", catalog.oldest_title()?),
        Command::Average => println!("{}", catalog.average_year()?),
        Command::Longest => println!("{}", catalog.longest_title()),
        Command::Between(start, end) => print_lines(catalog.titles_between_years(start, end)),
        Command::Common => {
            let (year, count) = catalog.most_common_year()?;
            println!("{} ({} movies)", year, count);
        }
        Command::Export(csv_path) => {
            catalog.export_csv(&csv_path)?;
            println!("Exported {} movies to {}", catalog.count(), csv_path);
        }
    }

    Ok(())
}

fn print_movies<'a>(movies: impl IntoIterator<Item = &'a Movie>) {
    for movie in movies {
        println!("{}", movie);
    }
}

fn print_lines(lines: Vec<&str>) {
    for line in lines {
        println!("{}", line);
    }
}
