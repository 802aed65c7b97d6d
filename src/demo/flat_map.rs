use crate::Float;
use crate::demo::{Ctx, show, step};
use crate::err::SeqErr;
use crate::println_notice;
use crate::seq::text::{TextSource, words};
use crate::seq::{Found, Seq};

pub(super) fn run(ctx: &Ctx) -> Result<(), SeqErr> {
    println_notice!("-- FLAT MAP --");
    let l1 = [2, 3, 7, 9];
    let l2 = [4, 5, 8];

    let arrays = Seq::of(l1).map(|i| [1, i]).map(|pair| show::list(pair)).join("");
    println!("[flat map] map to arrays: {arrays}");

    // a sequence of sequences has to be walked twice
    println!("[flat map] nested contents:");
    Seq::of(l1)
        .map(move |i| Seq::of(l2).map(move |j| [i, j]))
        .for_each(|inner| inner.for_each(|pair| println!("{}", show::list(pair))));

    println!("[flat map] flattened contents:");
    Seq::of(l1).flat_map(move |i| Seq::of(l2).map(move |j| [i, j])).for_each(|pair| println!("{}", show::list(pair)));

    step(average_word_length(&ctx.text))?;

    // the inner sequence is built anew for every outer element
    let arr1 = [2, 3, 7, 9];
    let arr2 = [5, 1, 7, 0];
    println!("[flat map] pairs values:");
    Seq::of(arr1).flat_map(move |i| Seq::of(arr2).map(move |j| [i, j])).for_each(|pair| println!("{}", show::list(pair)));
    Ok(())
}

fn average_word_length(file: &str) -> Result<(), SeqErr> {
    let avg = TextSource::with_lines(file, |lines| {
        lines.flat_map(words).map(|word| word.chars().count() as Float).average()
    })?;
    println!("[flat map] average word length: {}", avg.found("average")?);
    Ok(())
}
