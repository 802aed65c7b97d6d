use crate::collect::{
    averaging_double, comparing_double, counting, grouping_by, grouping_by_with, joining, mapping, max_by, min_by,
    partitioning_by, partitioning_by_with, summarizing_double,
};
use crate::demo::{Ctx, show};
use crate::err::SeqErr;
use crate::movie::Movie;
use crate::println_notice;
use crate::seq::Seq;

pub(super) fn run(ctx: &Ctx) -> Result<(), SeqErr> {
    println_notice!("-- COLLECTORS --");
    let movies = &ctx.movies;

    let by_category = Seq::of(movies).collect(grouping_by(|movie: &&Movie| movie.category()));
    println!("[grouping by] movies by category: {}\n", show::groups(&by_category, |group| show::list(group)));

    let before_2014 = Seq::of(movies).collect(partitioning_by(|movie: &&Movie| movie.year() < 2014));
    println!(
        "[partitioning by] movies published before 2014: {}\n",
        show::partition(&before_2014, |part| show::list(part))
    );

    let rated_counts =
        Seq::of(movies).collect(partitioning_by_with(|movie: &&Movie| movie.rating() > 0.0, counting()));
    println!(
        "[partitioning by] rated versus unrated movie counts: {}\n",
        show::partition(&rated_counts, |count| count.to_string())
    );

    let best = Seq::of(movies).collect(max_by(comparing_double(|movie: &&Movie| movie.rating())));
    println!("[max by] movie with the highest rating: {}", show::optional(&best));
    let worst = Seq::of(movies).collect(min_by(comparing_double(|movie: &&Movie| movie.rating())));
    println!("[min by] movie with the lowest rating: {}\n", show::optional(&worst));

    // NaN for an empty catalog
    let average = Seq::of(movies).collect(averaging_double(|movie: &&Movie| movie.rating()));
    println!("[averaging] average rating of movies: {average}\n");

    let stats = Seq::of(movies).collect(summarizing_double(|movie: &&Movie| movie.rating()));
    println!("[summarizing] movie rating stats: {stats}\n");

    let by_quality = Seq::of(movies).collect(grouping_by(|movie: &&Movie| movie.quality()));
    println!("[grouping by] movies by quality: {}\n", show::groups(&by_quality, |group| show::list(group)));

    let by_category_then_year = Seq::of(movies).collect(grouping_by_with(
        |movie: &&Movie| movie.category(),
        grouping_by(|movie: &&Movie| movie.year()),
    ));
    println!(
        "[inner grouping by] movies by category, then by year: {}\n",
        show::groups(&by_category_then_year, |years| show::groups(years, |group| show::list(group)))
    );

    let top_by_category = Seq::of(movies).collect(grouping_by_with(
        |movie: &&Movie| movie.category(),
        max_by(comparing_double(|movie: &&Movie| movie.rating())),
    ));
    println!(
        "[two level] top movie per category: {}\n",
        show::groups(&top_by_category, |top| show::optional(top))
    );

    let count_by_category =
        Seq::of(movies).collect(grouping_by_with(|movie: &&Movie| movie.category(), counting()));
    println!("[counting] movies per category: {}", show::groups(&count_by_category, |count| count.to_string()));

    let names_by_year = Seq::of(movies).collect(grouping_by_with(
        |movie: &&Movie| movie.year(),
        mapping(|movie: &Movie| movie.name().to_owned(), joining(" / ")),
    ));
    println!("[mapping] movie names per year: {}\n", show::groups(&names_by_year, |names| names.clone()));
    Ok(())
}
