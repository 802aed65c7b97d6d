mod collectors;
mod file_io;
mod flat_map;
mod int_range;
mod operators;
mod show;

use crate::err::SeqErr;
use crate::movie::Movie;
use crate::println_err;
use cmd_help::CmdHelp;
use unicase::UniCase;

/// Demonstration sections, run in declaration order by default.
#[derive(Debug, Clone, Copy, Eq, PartialEq, CmdHelp)]
pub(crate) enum Demo {
    /// file_io     Total whitespace token count of the text file.
    FileIo,
    /// int_range   Factorial of 10 folded from an inclusive integer range, stepped ranges.
    IntRange,
    /// flat_map    Nested versus flattened pairs, average word length of the text file.
    FlatMap,
    /// operators   filter, distinct, limit, map, flatten, sorted, any/none/all match,
    ///             find any/first, for each, collect, reduce, count, lazy peek, rerating.
    Operators,
    /// collectors  Grouping by category and quality, partitioning by year, max by rating,
    ///             averaging, summarizing, nested grouping, per group max and counts.
    Collectors,
}

/// Data every section reads.
#[derive(Debug)]
pub(crate) struct Ctx {
    pub(crate) text: String,
    pub(crate) movies: Vec<Movie>,
}

impl Demo {
    pub(crate) const ALL: [Demo; 5] = [Demo::FileIo, Demo::IntRange, Demo::FlatMap, Demo::Operators, Demo::Collectors];

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Demo::FileIo => "file_io",
            Demo::IntRange => "int_range",
            Demo::FlatMap => "flat_map",
            Demo::Operators => "operators",
            Demo::Collectors => "collectors",
        }
    }

    pub(crate) fn from_name(name: &str) -> Result<Demo, SeqErr> {
        let wanted = UniCase::new(name);
        Demo::ALL
            .into_iter()
            .find(|demo| UniCase::new(demo.name()) == wanted)
            .ok_or_else(|| SeqErr::UnknownSection(name.to_owned()))
    }

    pub(crate) fn run(&self, ctx: &Ctx) -> Result<(), SeqErr> {
        match self {
            Demo::FileIo => file_io::run(ctx),
            Demo::IntRange => int_range::run(),
            Demo::FlatMap => flat_map::run(ctx),
            Demo::Operators => operators::run(ctx),
            Demo::Collectors => collectors::run(ctx),
        }
    }
}

/// Reports a recoverable error of a single step and carries on; anything else aborts the run.
fn step(res: Result<(), SeqErr>) -> Result<(), SeqErr> {
    match res {
        Err(err) if err.is_recoverable() => {
            println_err!("{err}, step skipped");
            Ok(())
        }
        res => res,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movie::sample_movies;

    #[test]
    fn test_from_name() {
        assert_eq!(Demo::from_name("file_io"), Ok(Demo::FileIo));
        assert_eq!(Demo::from_name("COLLECTORS"), Ok(Demo::Collectors));
        assert_eq!(Demo::from_name("streams"), Err(SeqErr::UnknownSection("streams".to_string())));
        for demo in Demo::ALL {
            assert_eq!(Demo::from_name(demo.name()), Ok(demo));
        }
    }

    #[test]
    fn test_help_starts_with_name() {
        for demo in Demo::ALL {
            assert!(demo.help().starts_with(demo.name()), "{}", demo.help());
        }
        assert_eq!(Demo::all_help().len(), Demo::ALL.len());
    }

    #[test]
    fn test_step() {
        assert_eq!(step(Ok(())), Ok(()));
        assert_eq!(step(Err(SeqErr::NoSuchElement { op: "find_first" })), Ok(()));
        assert_eq!(step(Err(SeqErr::ZeroStep)), Err(SeqErr::ZeroStep));
    }

    #[test]
    fn test_run_all_with_missing_text_file() {
        // file backed steps are skipped, the rest still runs
        let ctx = Ctx { text: "/definitely/not/here.txt".to_string(), movies: sample_movies() };
        for demo in Demo::ALL {
            assert_eq!(demo.run(&ctx), Ok(()));
        }
    }

    #[test]
    fn test_run_all_with_empty_catalog() {
        let path = std::env::temp_dir().join(format!("streams_{}_demo_text.txt", std::process::id()));
        std::fs::write(&path, "the quick brown fox\njumps over\nthe lazy dog\n").unwrap();
        let ctx = Ctx { text: path.to_string_lossy().into_owned(), movies: vec![] };
        for demo in Demo::ALL {
            assert_eq!(demo.run(&ctx), Ok(()));
        }
        std::fs::remove_file(path).unwrap();
    }
}
