use crate::err::SeqErr;
use crate::seq::Seq;
use std::fs::File;
use std::io::{BufRead, BufReader};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum SourceState {
    /// Opened, lines not yet handed out.
    Fresh,
    /// Lines handed out to a sequence.
    Consumed,
    Closed,
}

/// A line-oriented text file that hands out its lines as a [`Seq`] exactly once.
///
/// The sequence borrows the source, so the source can not be closed while the sequence is alive.
/// Asking for the lines a second time, or after [`TextSource::close`], is an error.
#[derive(Debug)]
pub(crate) struct TextSource {
    file: String,
    reader: Option<BufReader<File>>,
    state: SourceState,
    read_err: Option<SeqErr>,
}

impl TextSource {
    pub(crate) fn open(file: impl Into<String>) -> Result<TextSource, SeqErr> {
        let file = file.into();
        match File::open(&file) {
            Ok(fin) => Ok(TextSource { file, reader: Some(BufReader::new(fin)), state: SourceState::Fresh, read_err: None }),
            Err(err) => Err(SeqErr::OpenFileErr { file, err: err.to_string() }),
        }
    }

    /// Opens `file`, hands its lines to `f` and closes the source once `f` returns. The lines can
    /// not outlive `f`.
    pub(crate) fn with_lines<R>(file: impl Into<String>, f: impl FnOnce(Seq<'_, String>) -> R) -> Result<R, SeqErr> {
        let mut source = TextSource::open(file)?;
        let res = f(source.lines()?);
        source.close()?;
        Ok(res)
    }

    pub(crate) fn state(&self) -> SourceState {
        self.state
    }

    /// Moves the source from `Fresh` to `Consumed`. A read error stops the sequence early and is
    /// reported by [`TextSource::close`].
    pub(crate) fn lines(&mut self) -> Result<Seq<'_, String>, SeqErr> {
        match self.state {
            SourceState::Fresh => {}
            SourceState::Consumed => Err(SeqErr::ConsumedSource { file: self.file.clone() })?,
            SourceState::Closed => Err(SeqErr::ClosedSource { file: self.file.clone() })?,
        }
        let reader = self.reader.as_mut().ok_or_else(|| SeqErr::ClosedSource { file: self.file.clone() })?;
        self.state = SourceState::Consumed;
        let file = &self.file;
        let read_err = &mut self.read_err;
        Ok(Seq::new(reader.lines().enumerate().map_while(move |(line_no, line)| match line {
            Ok(line) => Some(line),
            Err(err) => {
                *read_err = Some(SeqErr::ReadFileErr { file: file.clone(), line_no: line_no + 1, err: err.to_string() });
                None
            }
        })))
    }

    /// Releases the file and reports the read error of the sequence, if any. Closing a closed
    /// source does nothing.
    pub(crate) fn close(&mut self) -> Result<(), SeqErr> {
        if self.state == SourceState::Closed {
            return Ok(());
        }
        self.reader = None;
        self.state = SourceState::Closed;
        self.read_err.take().map_or(Ok(()), Err)
    }
}

/// Whitespace separated tokens of a line.
pub(crate) fn words(line: String) -> Vec<String> {
    line.split_whitespace().map(str::to_owned).collect()
}
