//! Interactive menu loop.
//!
//! Reads one choice per line, prompts for that action's inputs, and prints
//! the result. Failed actions print their error and return to the menu. End
//! of input behaves like choosing `x`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use rusqlite::Connection;

use super::actions::{self, MOVIE_NOT_FOUND};
use super::open_connection;
use crate::CliError;

const MENU: &str = "\
Select a menu option:
  1. Print general statistics about the database
  2. Find movies matching a pattern for the name
  3. Find details of a movie by movie ID
  4. Top N movies by average rating, with a minimum number of reviews
  5. Add a new review for a movie
  6. Set the tagline of a movie
or x to exit the program.";

/// Run the full interactive session on stdin/stdout.
pub(crate) fn run_interactive(db: Option<PathBuf>) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout().lock());

    writeln!(
        session.out,
        "{}",
        "MovieLens Database App (N-Tier)".if_supports_color(Stdout, |t| t.bold()),
    )?;
    writeln!(session.out)?;
    writeln!(
        session.out,
        "This application allows you to analyze various\naspects of the MovieLens database."
    )?;
    writeln!(session.out)?;

    let path = match movielens_lib::resolve_database_path(db) {
        Some(p) => p,
        None => match session.ask("Enter the name of the database you would like to use: ")? {
            Some(name) if !name.trim().is_empty() => PathBuf::from(name.trim()),
            _ => return Err(CliError::config("No database given")),
        },
    };
    let conn = open_connection(&path)?;
    log::debug!("Connected to {}", path.display());

    writeln!(session.out)?;
    writeln!(session.out, "Successfully connected to the database!")?;

    session.run(&conn)
}

pub(crate) struct Session<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Print `prompt` and read one line without its line terminator.
    ///
    /// Returns `None` at end of input. Other whitespace is kept, so taglines
    /// and patterns arrive exactly as typed.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Menu loop; returns when the user exits or input ends.
    pub(crate) fn run(&mut self, conn: &Connection) -> Result<(), CliError> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "{}", MENU)?;
            let Some(choice) = self.ask("Your choice --> ")? else {
                break;
            };
            writeln!(self.out)?;

            let result = match choice.trim() {
                "1" => actions::print_stats(conn, &mut self.out),
                "2" => self.search(conn),
                "3" => self.detail(conn),
                "4" => self.top(conn),
                "5" => self.review(conn),
                "6" => self.tagline(conn),
                "x" => break,
                _ => {
                    writeln!(self.out, "Error, unknown command, try again...")?;
                    Ok(())
                }
            };

            match result {
                Ok(()) => {}
                Err(CliError::Io(e)) => return Err(CliError::Io(e)),
                Err(e) => {
                    writeln!(
                        self.out,
                        "{}",
                        e.to_string().if_supports_color(Stdout, |t| t.red()),
                    )?;
                }
            }
        }

        writeln!(self.out, "Exiting program.")?;
        Ok(())
    }

    fn search(&mut self, conn: &Connection) -> Result<(), CliError> {
        let Some(pattern) =
            self.ask("Enter the name of the movie to find (wildcards _ and % allowed): ")?
        else {
            return Ok(());
        };
        writeln!(self.out)?;
        actions::print_search(conn, &mut self.out, &pattern)
    }

    fn detail(&mut self, conn: &Connection) -> Result<(), CliError> {
        let Some(id) = self.ask("Enter a movie ID: ")? else {
            return Ok(());
        };
        writeln!(self.out)?;
        match parse_int(&id) {
            Some(id) => actions::print_detail(conn, &mut self.out, id),
            None => self.not_found(),
        }
    }

    fn top(&mut self, conn: &Connection) -> Result<(), CliError> {
        let Some(n) = self.ask("Enter a value for N: ")? else {
            return Ok(());
        };
        let Some(n) = parse_int(&n).filter(|&n| n > 0) else {
            writeln!(self.out, "Please enter a positive value for N.")?;
            return Ok(());
        };

        let Some(min_reviews) = self.ask("Enter a value for the minimum number of reviews: ")?
        else {
            return Ok(());
        };
        let Some(min_reviews) = parse_int(&min_reviews).filter(|&m| m > 0) else {
            writeln!(
                self.out,
                "Please enter a positive value for the minimum number of reviews."
            )?;
            return Ok(());
        };

        writeln!(self.out)?;
        actions::print_top(conn, &mut self.out, n, min_reviews)
    }

    fn review(&mut self, conn: &Connection) -> Result<(), CliError> {
        let Some(rating) = self.ask("Enter a value for the new rating (0-10): ")? else {
            return Ok(());
        };
        let Some(rating) = parse_int(&rating).filter(|r| movielens_lib::RATING_RANGE.contains(r))
        else {
            writeln!(
                self.out,
                "Invalid rating. Please enter a value between 0 and 10 (inclusive)."
            )?;
            return Ok(());
        };

        let Some(id) = self.ask("Enter a movie ID: ")? else {
            return Ok(());
        };
        writeln!(self.out)?;
        match parse_int(&id) {
            Some(id) => actions::add_review(conn, &mut self.out, id, rating),
            None => self.not_found(),
        }
    }

    fn tagline(&mut self, conn: &Connection) -> Result<(), CliError> {
        let Some(tagline) = self.ask("Enter a tagline: ")? else {
            return Ok(());
        };
        let Some(id) = self.ask("Enter a movie ID: ")? else {
            return Ok(());
        };
        writeln!(self.out)?;
        match parse_int(&id) {
            Some(id) => actions::set_tagline(conn, &mut self.out, id, &tagline),
            None => self.not_found(),
        }
    }

    /// An ID that isn't a number can't match any movie.
    fn not_found(&mut self) -> Result<(), CliError> {
        writeln!(self.out, "{}", MOVIE_NOT_FOUND)?;
        Ok(())
    }
}

fn parse_int(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}
