use crate::Integer;

/// Inclusive integer range. A negative `step` walks from `end` down to `start`. `step` must not be
/// zero.
pub(super) fn range_to_iter(start: Integer, end: Integer, step: Integer) -> Box<dyn Iterator<Item = Integer>> {
    let iter = RangeIter { step: step.unsigned_abs(), next: start, next_back: end, done: start > end };
    if step < 0 { Box::new(iter.rev()) } else { Box::new(iter) }
}

#[derive(Debug, Eq, PartialEq)]
struct RangeIter {
    step: u64,
    next: Integer,
    next_back: Integer,
    done: bool,
}

impl Iterator for RangeIter {
    type Item = Integer;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let res = self.next;
        match res.checked_add_unsigned(self.step) {
            Some(next) if next <= self.next_back => self.next = next,
            _ => self.done = true,
        }
        Some(res)
    }
}

impl DoubleEndedIterator for RangeIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let res = self.next_back;
        match res.checked_sub_unsigned(self.step) {
            Some(next_back) if next_back >= self.next => self.next_back = next_back,
            _ => self.done = true,
        }
        Some(res)
    }
}
