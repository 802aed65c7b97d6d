use std::process::{ExitCode, Termination};
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub(crate) enum SeqErr {
    #[error("[Bad Arg] Missing value of argument `{arg}`")]
    MissingArg { arg: &'static str },

    #[error("[Bad Arg] Unknown demo section `{0}`, see `-h` for all sections")]
    UnknownSection(String),

    #[error("[Bad Arg] Unknown arguments: {args:?}")]
    UnknownArgs { args: Vec<String> },

    #[error("[Input] Open input file `{file}` error: {err}")]
    OpenFileErr { file: String, err: String },

    #[error("[Input] Read line `{line_no}` of input file `{file}` error: {err}")]
    ReadFileErr { file: String, line_no: usize, err: String },

    #[error("[Input] Lines of `{file}` have already been consumed")]
    ConsumedSource { file: String },

    #[error("[Input] Input file `{file}` has already been closed")]
    ClosedSource { file: String },

    #[error("[Catalog] Unable to parse line `{line_no}` of `{file}`: `{line}`")]
    ParseMovieErr { file: String, line_no: usize, line: String },

    #[error("[Catalog] Unknown movie category `{0}`")]
    UnknownCategory(String),

    #[error("[Range] Step of a range can not be zero")]
    ZeroStep,

    #[error("[Empty] No matching element for `{op}`")]
    NoSuchElement { op: &'static str },
}

impl Termination for SeqErr {
    fn report(self) -> ExitCode {
        eprintln!("{}", self);
        ExitCode::from(self.exit_code())
    }
}

impl SeqErr {
    pub fn termination(self) -> ! {
        let exit_code = self.exit_code();
        self.report();
        std::process::exit(exit_code as i32);
    }

    /// Errors a demo step reports and skips instead of aborting the whole run.
    pub(crate) fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SeqErr::OpenFileErr { .. }
                | SeqErr::ReadFileErr { .. }
                | SeqErr::ConsumedSource { .. }
                | SeqErr::ClosedSource { .. }
                | SeqErr::NoSuchElement { .. }
        )
    }

    fn exit_code(&self) -> u8 {
        let mut code = 1u8..;
        match self {
            SeqErr::MissingArg { .. } => code.next().unwrap(),
            SeqErr::UnknownSection(_) => code.nth(1).unwrap(),
            SeqErr::UnknownArgs { .. } => code.nth(2).unwrap(),
            SeqErr::OpenFileErr { .. } => code.nth(3).unwrap(),
            SeqErr::ReadFileErr { .. } => code.nth(4).unwrap(),
            SeqErr::ConsumedSource { .. } => code.nth(5).unwrap(),
            SeqErr::ClosedSource { .. } => code.nth(6).unwrap(),
            SeqErr::ParseMovieErr { .. } => code.nth(7).unwrap(),
            SeqErr::UnknownCategory(_) => code.nth(8).unwrap(),
            SeqErr::ZeroStep => code.nth(9).unwrap(),
            SeqErr::NoSuchElement { .. } => code.nth(10).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_is_distinct_per_variant() {
        let errs = [
            SeqErr::MissingArg { arg: "--text" },
            SeqErr::UnknownSection("x".to_string()),
            SeqErr::UnknownArgs { args: vec![] },
            SeqErr::OpenFileErr { file: String::new(), err: String::new() },
            SeqErr::ReadFileErr { file: String::new(), line_no: 1, err: String::new() },
            SeqErr::ConsumedSource { file: String::new() },
            SeqErr::ClosedSource { file: String::new() },
            SeqErr::ParseMovieErr { file: String::new(), line_no: 1, line: String::new() },
            SeqErr::UnknownCategory(String::new()),
            SeqErr::ZeroStep,
            SeqErr::NoSuchElement { op: "find_first" },
        ];
        let codes = errs.iter().map(SeqErr::exit_code).collect::<Vec<_>>();
        assert_eq!(codes, (1..=11).collect::<Vec<u8>>());
    }

    #[test]
    fn test_recoverable() {
        assert!(SeqErr::NoSuchElement { op: "find_any" }.is_recoverable());
        assert!(SeqErr::OpenFileErr { file: "a".to_string(), err: "b".to_string() }.is_recoverable());
        assert!(!SeqErr::UnknownCategory("MISTORY".to_string()).is_recoverable());
        assert!(!SeqErr::ZeroStep.is_recoverable());
    }

    #[test]
    fn test_no_such_element_message() {
        assert_eq!(SeqErr::NoSuchElement { op: "find_first" }.to_string(), "[Empty] No matching element for `find_first`");
    }
}
