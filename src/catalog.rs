//! Movie catalog files, one record per line:
//!
//! ```text
//! # category   name                 year  rating
//! HORROR       "IT"                 2017  4.3
//! ADVENTURE    "Lord of The Rings"  2003  5
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use crate::Float;
use crate::err::SeqErr;
use crate::movie::{Movie, MovieType};
use crate::seq::text::TextSource;
use nom::bytes::complete::{take_until, take_while1};
use nom::character::complete::{char, i32 as year, space0, space1};
use nom::combinator::all_consuming;
use nom::number::complete::double;
use nom::sequence::{delimited, preceded, terminated};
use nom::{IResult, Parser};

type Fields<'a> = (&'a str, &'a str, i32, Float);

/// Reads every record of `file`. Stops at the first bad line.
pub(crate) fn load(file: &str) -> Result<Vec<Movie>, SeqErr> {
    TextSource::with_lines(file, |lines| {
        lines
            .enumerate()
            .filter(|(_, line)| !is_skipped(line))
            .map(|(idx, line)| match parse_movie(&line) {
                Some(movie) => movie,
                None => Err(SeqErr::ParseMovieErr { file: file.to_owned(), line_no: idx + 1, line }),
            })
            .collect::<Result<Vec<_>, _>>()
    })?
}

fn is_skipped(line: &str) -> bool {
    let line = line.trim_start();
    line.is_empty() || line.starts_with('#')
}

/// `None` when the line does not have the record shape or the rating is not finite, `Some(Err)`
/// for an unknown category.
fn parse_movie(line: &str) -> Option<Result<Movie, SeqErr>> {
    let (_, (category, name, year, rating)) = fields(line).ok()?;
    if !rating.is_finite() {
        return None;
    }
    Some(category.parse::<MovieType>().map(|category| Movie::new(category, name, year, rating)))
}

fn fields(input: &str) -> IResult<&str, Fields<'_>> {
    all_consuming(terminated(
        (
            preceded(space0, category),  // category word
            preceded(space1, quoted),    // "name"
            preceded(space1, year),      // year
            preceded(space1, double),    // rating
        ),
        space0,
    ))
    .parse(input)
}

fn category(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphabetic() || c == '_').parse(input)
}

fn quoted(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_until("\""), char('"')).parse(input)
}
