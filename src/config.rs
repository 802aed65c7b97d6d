use crate::demo::Demo;

pub(crate) const DEFAULT_TEXT_FILE: &str = "data/test.txt";

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Config {
    /// Help `-h`
    Help,
    /// Version `-V`
    Version,
    /// Print the resolved options `-v`
    Verbose,
    /// Resolve options and load the catalog, run nothing `-d`
    DryRun,
}

/// Everything after the flags.
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Options {
    /// Text resource the file-backed demos read, `--text <file>`.
    pub(crate) text: String,
    /// Catalog file replacing the built-in movies, `--movies <file>`.
    pub(crate) movies: Option<String>,
    /// Sections to run, in the order given. All sections when none are named.
    pub(crate) sections: Vec<Demo>,
}

impl Default for Options {
    fn default() -> Self {
        Options { text: DEFAULT_TEXT_FILE.to_owned(), movies: None, sections: Demo::ALL.to_vec() }
    }
}

#[inline]
pub(crate) fn is_verbose(configs: &[Config]) -> bool {
    configs.contains(&Config::Verbose)
}
