use crate::config::{Config, Options};
use crate::demo::Demo;
use crate::err::SeqErr;
use std::iter::Peekable;

pub(crate) fn parse_configs(args: &mut Peekable<impl Iterator<Item = String>>) -> Vec<Config> {
    let mut configs = Vec::new();
    while let Some(config) = parse_config(args.peek()) {
        args.next();
        configs.push(config);
    }
    configs
}

fn parse_config(arg: Option<&String>) -> Option<Config> {
    match arg {
        Some(arg) => match arg.as_str() {
            "-h" => Some(Config::Help),
            "-V" => Some(Config::Version),
            "-v" => Some(Config::Verbose),
            "-d" => Some(Config::DryRun),
            _ => None, // stop at the first non flag, the caller handles the rest
        },
        None => None,
    }
}

/// `[--text <file>] [--movies <file>] [<section>...]`
pub(crate) fn parse_options(mut args: Peekable<impl Iterator<Item = String>>) -> Result<Options, SeqErr> {
    let mut options = Options::default();
    loop {
        if let Some(text) = consume_value_of(&mut args, "--text")? {
            options.text = text;
        } else if let Some(movies) = consume_value_of(&mut args, "--movies")? {
            options.movies = Some(movies);
        } else {
            break;
        }
    }
    let mut sections = Vec::new();
    while let Some(section) = consume_if(&mut args, |value| !value.starts_with('-')) {
        sections.push(Demo::from_name(&section)?);
    }
    if !sections.is_empty() {
        options.sections = sections;
    }
    let remaining = args.collect::<Vec<_>>();
    if !remaining.is_empty() { Err(SeqErr::UnknownArgs { args: remaining }) } else { Ok(options) }
}

fn consume_if<F>(args: &mut Peekable<impl Iterator<Item = String>>, f: F) -> Option<String>
where
    F: FnOnce(&String) -> bool,
{
    if let Some(value) = args.peek()
        && f(value)
    {
        args.next()
    } else {
        None
    }
}

/// Consumes `flag <value>` when the next argument is `flag`.
fn consume_value_of(
    args: &mut Peekable<impl Iterator<Item = String>>, flag: &'static str,
) -> Result<Option<String>, SeqErr> {
    if consume_if(args, |value| value == flag).is_some() {
        args.next().map(Some).ok_or(SeqErr::MissingArg { arg: flag })
    } else {
        Ok(None)
    }
}

#[cfg(test)]
fn build_args(args_line: &'static str) -> Peekable<impl Iterator<Item = String>> {
    args_line.split(' ').filter(|arg| !arg.is_empty()).map(String::from).peekable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TEXT_FILE;

    #[test]
    fn test_parse_configs() {
        let mut args = build_args("-v -d --text a.txt");
        assert_eq!(parse_configs(&mut args), vec![Config::Verbose, Config::DryRun]);
        assert_eq!(args.next(), Some("--text".to_string()));
        assert!(parse_configs(&mut build_args("")).is_empty());
    }

    #[test]
    fn test_parse_options_default() {
        assert_eq!(parse_options(build_args("")), Ok(Options::default()));
        assert_eq!(Options::default().text, DEFAULT_TEXT_FILE);
        assert_eq!(Options::default().sections, Demo::ALL.to_vec());
    }

    #[test]
    fn test_parse_options_files() {
        let options = parse_options(build_args("--movies m.txt --text t.txt")).unwrap();
        assert_eq!(options.text, "t.txt");
        assert_eq!(options.movies, Some("m.txt".to_string()));
    }

    #[test]
    fn test_parse_options_sections() {
        let options = parse_options(build_args("--text t.txt collectors file_io")).unwrap();
        assert_eq!(options.sections, vec![Demo::Collectors, Demo::FileIo]);
    }

    #[test]
    fn test_parse_options_errors() {
        assert_eq!(parse_options(build_args("--text")), Err(SeqErr::MissingArg { arg: "--text" }));
        assert_eq!(parse_options(build_args("nosuch")), Err(SeqErr::UnknownSection("nosuch".to_string())));
        assert_eq!(
            parse_options(build_args("operators --text t.txt")),
            Err(SeqErr::UnknownArgs { args: vec!["--text".to_string(), "t.txt".to_string()] })
        );
        assert_eq!(
            parse_options(build_args("--verbose")),
            Err(SeqErr::UnknownArgs { args: vec!["--verbose".to_string()] })
        );
    }
}
