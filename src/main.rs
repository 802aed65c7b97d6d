use crate::config::{Config, Options, is_verbose};
use crate::demo::{Ctx, Demo};
use crate::err::SeqErr;
use crate::movie::Movie;
use itertools::Itertools;

mod args;
mod catalog;
mod collect;
mod config;
mod demo;
mod err;
mod movie;
mod print;
mod seq;
mod summary;

/// Integer element of ranges.
pub(crate) type Integer = i64;

/// Floating point element of ratings and statistics.
pub(crate) type Float = f64;

fn main() {
    if let Err(e) = run() {
        e.termination();
    }
}

fn run() -> Result<(), SeqErr> {
    let mut args = std::env::args().skip(1).peekable();
    let configs = args::parse_configs(&mut args);
    if configs.contains(&Config::Help) {
        print_help();
        return Ok(());
    }
    if configs.contains(&Config::Version) {
        println!("streams {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let options = args::parse_options(args)?;
    let movies = match &options.movies {
        Some(file) => catalog::load(file)?,
        None => movie::sample_movies(),
    };
    if is_verbose(&configs) {
        print_options(&options, &movies);
    }
    if configs.contains(&Config::DryRun) {
        return Ok(());
    }
    let ctx = Ctx { text: options.text, movies };
    for demo in options.sections {
        demo.run(&ctx)?;
        println!();
    }
    Ok(())
}

fn print_help() {
    println!("Usage: streams [-h] [-V] [-v] [-d] [--text <file>] [--movies <file>] [<section>...]");
    println!();
    println!("    -h               Print this help.");
    println!("    -V               Print the version.");
    println!("    -v               Print the resolved options before running.");
    println!("    -d               Resolve options and load the catalog, run nothing.");
    println!("    --text <file>    Text file read by the file backed steps, default `{}`.", config::DEFAULT_TEXT_FILE);
    println!("    --movies <file>  Movie catalog replacing the built-in movies.");
    println!();
    println!("Sections (all when none are given):");
    for (_, help) in Demo::all_help() {
        println!("{}", help.lines().map(|line| format!("    {line}")).join("\n"));
    }
}

fn print_options(options: &Options, movies: &[Movie]) {
    println_info!("Text:");
    println_info!("    {}", options.text);
    println_info!("Movies:");
    println_info!("    {}", options.movies.as_deref().unwrap_or("<built-in>"));
    for movie in movies {
        println_info!("    {:?}", movie);
    }
    println_info!("Sections:");
    for section in &options.sections {
        println_info!("    {}", section.help().lines().next().unwrap_or_default());
    }
}
