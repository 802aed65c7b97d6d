use crate::err::SeqErr;
use crate::println_notice;
use crate::seq::Seq;

pub(super) fn run() -> Result<(), SeqErr> {
    println_notice!("-- INT RANGE --");
    // 1*1, 1*2, 2*3, 6*4, ...
    let fact = Seq::range_closed(1, 10).reduce_from(1, |x, y| x * y);
    println!("[int range] fact value: {fact}");
    println!("[int range] evens up to 10: {}", Seq::range_step(0, 10, 2)?.join(" "));
    println!("[int range] countdown: {}", Seq::range_step(1, 5, -1)?.join(" "));
    Ok(())
}
