use std::path::PathBuf;

use crate::{
    error::{CatalogError, Result},
    model::movie::MovieChanges,
};

pub(crate) const USAGE: &str = "\
usage: movielib <file> <command> [args...]
       MOVIELIB_FILE=<file> movielib <command> [args...]

commands:
  list | titles | count | oldest | average | longest | common
  add <title> <director> <year> [genre...]
  remove <title>
  update <title> [--director D] [--year Y] [--genre G]...
  find <title>
  search <substring>
  year <year>
  director <name>
  genre [genre...]
  has-genre <label>
  between <start> <end>
  export <csv-path>";

/// Picks the catalog file: `env_file` when set, otherwise the first argument,
/// which is then removed from `args`.
pub fn resolve_catalog_file(env_file: Option<String>, args: &mut Vec<String>) -> Result<PathBuf> {
    match env_file {
        Some(file) => Ok(PathBuf::from(file)),
        None if !args.is_empty() => Ok(PathBuf::from(args.remove(0))),
        None => Err(CatalogError::usage(USAGE)),
    }
}

#[derive(Debug, PartialEq)]
pub(crate) enum Command {
    List,
    Titles,
    Count,
    Add {
        title: String,
        director: String,
        year: i32,
        genres: Vec<String>,
    },
    Remove(String),
    Update {
        title: String,
        changes: MovieChanges,
    },
    Find(String),
    Search(String),
    Year(i32),
    Director(String),
    Genre(Vec<String>),
    HasGenre(String),
    Oldest,
    Average,
    Longest,
    Between(i32, i32),
    Common,
    Export(String),
}

impl Command {
    pub fn parse(args: &[String]) -> Result<Command> {
        let (name, rest) = args
            .split_first()
            .ok_or_else(|| CatalogError::usage(USAGE))?;

        let command = match name.as_str() {
            "list" => Command::List,
            "titles" => Command::Titles,
            "count" => Command::Count,
            "oldest" => Command::Oldest,
            "average" => Command::Average,
            "longest" => Command::Longest,
            "common" => Command::Common,
            "add" => match rest {
                [title, director, year, genres @ ..] => Command::Add {
                    title: title.clone(),
                    director: director.clone(),
                    year: parse_year(year)?,
                    genres: genres.to_vec(),
                },
                _ => return Err(CatalogError::usage("add needs <title> <director> <year>")),
            },
            "remove" => Command::Remove(single_arg("remove", rest)?),
            "update" => Self::parse_update(rest)?,
            "find" => Command::Find(single_arg("find", rest)?),
            "search" => Command::Search(single_arg("search", rest)?),
            "year" => Command::Year(parse_year(&single_arg("year", rest)?)?),
            "director" => Command::Director(single_arg("director", rest)?),
            "genre" => Command::Genre(rest.to_vec()),
            "has-genre" => Command::HasGenre(single_arg("has-genre", rest)?),
            "between" => match rest {
                [start, end] => Command::Between(parse_year(start)?, parse_year(end)?),
                _ => return Err(CatalogError::usage("between needs <start> <end>")),
            },
            "export" => Command::Export(single_arg("export", rest)?),
            other => {
                return Err(CatalogError::usage(format!(
                    "unknown command {:?}\n\n{}",
                    other, USAGE
                )))
            }
        };

        Ok(command)
    }

    fn parse_update(args: &[String]) -> Result<Command> {
        let (title, mut flags) = args
            .split_first()
            .ok_or_else(|| CatalogError::usage("update needs <title>"))?;

        let mut changes = MovieChanges::default();
        while let [flag, value, rest @ ..] = flags {
            match flag.as_str() {
                "--director" => changes.director = Some(value.clone()),
                "--year" => changes.year = Some(parse_year(value)?),
                "--genre" => changes.genres.get_or_insert_with(Vec::new).push(value.clone()),
                other => {
                    return Err(CatalogError::usage(format!("unknown update flag {:?}", other)))
                }
            }
            flags = rest;
        }
        if let [dangling] = flags {
            return Err(CatalogError::usage(format!("missing value for {}", dangling)));
        }

        Ok(Command::Update {
            title: title.clone(),
            changes,
        })
    }
}

fn single_arg(command: &str, args: &[String]) -> Result<String> {
    match args {
        [value] => Ok(value.clone()),
        _ => Err(CatalogError::usage(format!(
            "{} takes exactly one argument",
            command
        ))),
    }
}

fn parse_year(value: &str) -> Result<i32> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| CatalogError::usage(format!("not a year: {:?}", value)))
}
