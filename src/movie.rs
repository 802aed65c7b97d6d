use crate::Float;
use crate::err::SeqErr;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use unicase::UniCase;

/// Category of a movie.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub(crate) enum MovieType {
    Adventure,
    ActionAdventure,
    Mystery,
    Horror,
    Documentary,
}

impl MovieType {
    pub(crate) const ALL: [MovieType; 5] = [
        MovieType::Adventure,
        MovieType::ActionAdventure,
        MovieType::Mystery,
        MovieType::Horror,
        MovieType::Documentary,
    ];

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            MovieType::Adventure => "ADVENTURE",
            MovieType::ActionAdventure => "ACTION_ADVENTURE",
            MovieType::Mystery => "MYSTERY",
            MovieType::Horror => "HORROR",
            MovieType::Documentary => "DOCUMENTARY",
        }
    }
}

impl FromStr for MovieType {
    type Err = SeqErr;

    /// Case-insensitive, only the canonical names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = UniCase::new(s);
        MovieType::ALL
            .into_iter()
            .find(|category| UniCase::new(category.as_str()) == name)
            .ok_or_else(|| SeqErr::UnknownCategory(s.to_owned()))
    }
}

impl Display for MovieType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub(crate) enum MovieQuality {
    Good,
    Ok,
    Bad,
}

impl MovieQuality {
    /// Above 3 is good, below 3 is bad, exactly 3 is ok.
    pub(crate) fn of_rating(rating: Float) -> MovieQuality {
        if rating > 3.0 {
            MovieQuality::Good
        } else if rating < 3.0 {
            MovieQuality::Bad
        } else {
            MovieQuality::Ok
        }
    }
}

impl Display for MovieQuality {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MovieQuality::Good => "GOOD",
            MovieQuality::Ok => "OK",
            MovieQuality::Bad => "BAD",
        })
    }
}

/// An immutable movie record. A changed record is a new value, see [`Movie::with_rating`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Movie {
    category: MovieType,
    name: String,
    year: i32,
    rating: Float,
}

impl Movie {
    pub(crate) fn new(category: MovieType, name: impl Into<String>, year: i32, rating: Float) -> Movie {
        Movie { category, name: name.into(), year, rating }
    }

    pub(crate) fn category(&self) -> MovieType {
        self.category
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn year(&self) -> i32 {
        self.year
    }

    pub(crate) fn rating(&self) -> Float {
        self.rating
    }

    pub(crate) fn quality(&self) -> MovieQuality {
        MovieQuality::of_rating(self.rating)
    }

    pub(crate) fn with_rating(self, rating: Float) -> Movie {
        Movie { rating, ..self }
    }
}

impl Display for Movie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Built-in catalog used when no catalog file is given.
pub(crate) fn sample_movies() -> Vec<Movie> {
    vec![
        Movie::new(MovieType::Horror, "IT", 2017, 4.3),
        Movie::new(MovieType::Adventure, "Lord of The Rings", 2003, 5.0),
        Movie::new(MovieType::Documentary, "Planet Earth", 2012, 5.0),
        Movie::new(MovieType::Adventure, "Star Wars", 1978, 4.0),
        Movie::new(MovieType::Adventure, "Food Fight", 2012, 0.0),
    ]
}
