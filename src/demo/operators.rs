use crate::Float;
use crate::collect::to_list;
use crate::demo::{Ctx, show, step};
use crate::err::SeqErr;
use crate::movie::Movie;
use crate::println_notice;
use crate::seq::text::{TextSource, words};
use crate::seq::{Found, Seq};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

pub(super) fn run(ctx: &Ctx) -> Result<(), SeqErr> {
    println_notice!("-- USEFUL SEQUENCE OPERATIONS --");
    let movies = &ctx.movies;

    filter(movies);
    step(distinct_line_lengths(&ctx.text))?;
    limit(movies);
    skip(movies);
    map();
    flatten();
    sorted(movies);
    matches(movies);
    step(find(movies))?;
    step(find_above_five(movies))?;
    for_each();
    collect();
    step(reduce(movies))?;
    count();
    lazy_peek(movies);
    rerate(movies);
    Ok(())
}

fn filter(movies: &[Movie]) {
    let good = Seq::of(movies).filter(|movie| movie.rating() >= 3.5).to_list();
    println!("[filter] all movies: {}", show::list(movies));
    println!("[filter] good movies: {}\n", show::list(good));
}

fn distinct_line_lengths(file: &str) -> Result<(), SeqErr> {
    let lengths = TextSource::with_lines(file, |lines| lines.map(|line| words(line).len()).distinct().to_list())?;
    println!("[distinct] distinct line token counts: {}\n", show::list(lengths));
    Ok(())
}

fn limit(movies: &[Movie]) {
    println!("[limit] movies without limit: {}", show::list(movies));
    println!("[limit] movies limited to 2: {}\n", show::list(Seq::of(movies).limit(2).to_list()));
}

fn skip(movies: &[Movie]) {
    println!("[skip] movies after the first 3: {}\n", show::list(Seq::of(movies).skip(3).to_list()));
}

fn map() {
    let nums = [2, 4, 6, 8];
    println!("[map] un-mapped list: {}", show::list(nums));
    println!("[map] mapped list: {}\n", show::list(Seq::of(nums).map(|num| num * num).to_list()));
}

fn flatten() {
    let primes = vec![5, 7, 11, 13];
    let odds = vec![1, 3, 5];
    let evens = vec![2, 4, 6, 8];
    let lists = vec![primes, odds, evens];
    println!("[flatten] before flattening: {}", show::list(lists.iter().map(|list| show::list(list))));
    let flat = Seq::of(lists).flat_map(|list| list).to_list();
    println!("[flatten] after flattening: {}\n", show::list(flat));
}

fn sorted(movies: &[Movie]) {
    let by_name = Seq::of(movies).sorted_by(|l, r| l.name().cmp(r.name())).to_list();
    println!("[sorted] movies: {}", show::list(movies));
    println!("[sorted] movies by name: {}", show::list(by_name));
    let by_rating = Seq::of(movies).sorted_by_key(|movie| Reverse(OrderedFloat(movie.rating()))).to_list();
    println!("[sorted] movies by rating, best first: {}", show::list(by_rating));
    let years = Seq::of(movies).map(Movie::year).sorted().distinct().to_list();
    println!("[sorted] distinct years: {}\n", show::list(years));
}

fn matches(movies: &[Movie]) {
    println!("[any match] any movie named 'IT': {}", Seq::of(movies).any_match(|movie| movie.name() == "IT"));
    println!(
        "[any match] any movie named 'Avengers: Endgame': {}",
        Seq::of(movies).any_match(|movie| movie.name() == "Avengers: Endgame")
    );
    println!("[none match] no movie named 'Elf': {}", Seq::of(movies).none_match(|movie| movie.name() == "Elf"));
    println!(
        "[none match] no movie named 'Lord of The Rings': {}",
        Seq::of(movies).none_match(|movie| movie.name() == "Lord of The Rings")
    );
    println!("[all match] all movies named 'IT': {}", Seq::of(movies).all_match(|movie| movie.name() == "IT"));
    println!(
        "[all match] every element of an empty sequence is named 'IT': {}\n",
        Seq::<&Movie>::empty().all_match(|movie| movie.name() == "IT")
    );
}

fn find(movies: &[Movie]) -> Result<(), SeqErr> {
    let doubles = [2.5, 6.2, 8.5, 2.5, 10.43];
    let found = Seq::of(doubles).filter(|d| *d == 2.5).find_any().found("find_any")?;
    println!("[find any] found value: {found}");

    let ratings = movies.iter().map(|movie| format!("{}({:.1})", movie, movie.rating())).join(", ");
    println!("[find first] all movies and their ratings: [{ratings}]");
    let first = Seq::of(movies).filter(|movie| movie.rating() == 5.0).find_first().found("find_first")?;
    println!("[find first] first movie rated 5: {first}");
    Ok(())
}

fn find_above_five(movies: &[Movie]) -> Result<(), SeqErr> {
    let first = Seq::of(movies).filter(|movie| movie.rating() > 5.0).find_first().found("find_first")?;
    println!("[find first] first movie rated above 5: {first}\n");
    Ok(())
}

fn for_each() {
    println!("[for each] action performed on each element:");
    Seq::of([1, 2, 3, 4, 5]).for_each(|num| println!("{num}"));
    println!();
}

fn collect() {
    let ints = [2, 4, 6, 8];
    let squared = Seq::of(ints).map(|i| i * i).collect(to_list());
    println!("[collect] ints: {}", show::list(ints));
    println!("[collect] ints squared: {}\n", show::list(squared));
}

fn reduce(movies: &[Movie]) -> Result<(), SeqErr> {
    let total = Seq::of(movies).map(Movie::rating).reduce(|a, b| a + b).found("reduce")?;
    // the reduced sequence is exhausted, count a fresh one
    let count = Seq::of(movies).count();
    println!("[reduce] average rating of all movies: {}", total / count as Float);
    println!("[sum] total rating of all movies: {}\n", Seq::of(movies).map(Movie::rating).sum());
    Ok(())
}

fn count() {
    let strings = ["Hello", "goodbye", "another string"];
    println!("[count] strings: {}", show::list(strings));
    println!("[count] strings count: {}\n", Seq::of(strings).count());
}

fn lazy_peek(movies: &[Movie]) {
    println!("[peek] stages run per element and stop once a result is found:");
    let first_good = Seq::of(movies)
        .peek(|movie| println!("    visiting {movie}"))
        .filter(|movie| movie.rating() >= 4.5)
        .limit(1)
        .find_first();
    println!("[peek] first movie rated 4.5 or more: {}\n", show::optional(&first_good));
}

fn rerate(movies: &[Movie]) {
    let rerated = Seq::of(movies.iter().cloned())
        .map(|movie| if movie.rating() == 0.0 { movie.with_rating(1.0) } else { movie })
        .to_list();
    let ratings = Seq::of(&rerated).map(|movie| format!("{}({:.1})", movie, movie.rating())).join(", ");
    println!("[rerate] unrated movies rebuilt with rating 1: [{ratings}]\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movie::sample_movies;

    #[test]
    fn test_find_above_five_is_recoverable() {
        let err = find_above_five(&sample_movies()).unwrap_err();
        assert_eq!(err, SeqErr::NoSuchElement { op: "find_first" });
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_reduce_on_empty_catalog() {
        assert_eq!(reduce(&[]), Err(SeqErr::NoSuchElement { op: "reduce" }));
        assert_eq!(reduce(&sample_movies()), Ok(()));
    }

    #[test]
    fn test_find() {
        assert_eq!(find(&sample_movies()), Ok(()));
        assert_eq!(find(&[]), Err(SeqErr::NoSuchElement { op: "find_first" }));
    }
}
