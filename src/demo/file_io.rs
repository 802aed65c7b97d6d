use crate::demo::{Ctx, step};
use crate::err::SeqErr;
use crate::println_notice;
use crate::seq::Found;
use crate::seq::text::{TextSource, words};

pub(super) fn run(ctx: &Ctx) -> Result<(), SeqErr> {
    println_notice!("-- FILE IO --");
    step(token_count(&ctx.text))?;
    step(single_use(&ctx.text))
}

fn token_count(file: &str) -> Result<(), SeqErr> {
    let total = TextSource::with_lines(file, |lines| lines.map(|line| words(line).len()).reduce(|a, b| a + b))?;
    println!("[file io] token count: {}", total.found("reduce")?);
    Ok(())
}

fn single_use(file: &str) -> Result<(), SeqErr> {
    let mut source = TextSource::open(file)?;
    println!("[file io] source state after open: {:?}", source.state());
    let lines = source.lines()?.count();
    println!("[file io] {lines} lines read, source state: {:?}", source.state());
    if let Err(err) = source.lines() {
        println!("[file io] asking for the lines again: {err}");
    }
    source.close()?;
    println!("[file io] source state after close: {:?}", source.state());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_recoverable() {
        let err = single_use("no/such/file.txt").unwrap_err();
        assert!(matches!(err, SeqErr::OpenFileErr { .. }));
        assert!(err.is_recoverable());
        assert!(token_count("no/such/file.txt").unwrap_err().is_recoverable());
    }
}
