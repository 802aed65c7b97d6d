mod range;
pub(crate) mod text;

use crate::collect::Collector;
use crate::err::SeqErr;
use crate::summary::DoubleSummary;
use crate::{Float, Integer};
use itertools::Itertools;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::Hash;

/// A lazy, single-use sequence.
///
/// Stages (`filter`, `map`, `flat_map`, ...) wrap the upstream iterator and compute elements on
/// demand. Terminal consumers take the sequence by value, so a consumed sequence can not be used
/// again.
pub(crate) struct Seq<'a, T> {
    iter: Box<dyn Iterator<Item = T> + 'a>,
}

impl<T> Iterator for Seq<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }
}

impl<'a, T: 'a> Seq<'a, T> {
    pub(crate) fn new(iter: impl Iterator<Item = T> + 'a) -> Seq<'a, T> {
        Seq { iter: Box::new(iter) }
    }

    pub(crate) fn of<I>(values: I) -> Seq<'a, T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Seq::new(values.into_iter())
    }

    pub(crate) fn empty() -> Seq<'a, T> {
        Seq::new(std::iter::empty())
    }

    /* **************************************** stages **************************************** */

    pub(crate) fn filter(self, predicate: impl FnMut(&T) -> bool + 'a) -> Seq<'a, T> {
        Seq::new(self.iter.filter(predicate))
    }

    pub(crate) fn map<U: 'a>(self, f: impl FnMut(T) -> U + 'a) -> Seq<'a, U> {
        Seq::new(self.iter.map(f))
    }

    /// Replaces each element with the elements of the sub-sequence it maps to. Empty
    /// sub-sequences contribute nothing.
    pub(crate) fn flat_map<I, F>(self, f: F) -> Seq<'a, I::Item>
    where
        I: IntoIterator + 'a,
        I::IntoIter: 'a,
        I::Item: 'a,
        F: FnMut(T) -> I + 'a,
    {
        Seq::new(self.iter.flat_map(f))
    }

    /// Drops elements equal to an earlier one, keeping encounter order.
    pub(crate) fn distinct(self) -> Seq<'a, T>
    where
        T: Eq + Hash + Clone,
    {
        let mut seen = FxHashSet::default();
        Seq::new(self.iter.filter(move |item| seen.insert(item.clone())))
    }

    /// Natural order. Drains the upstream sequence when the stage is built.
    pub(crate) fn sorted(self) -> Seq<'a, T>
    where
        T: Ord,
    {
        Seq::new(self.iter.sorted())
    }

    /// Stable sort by comparator. Drains the upstream sequence when the stage is built.
    pub(crate) fn sorted_by(self, cmp: impl FnMut(&T, &T) -> Ordering) -> Seq<'a, T> {
        Seq::new(self.iter.sorted_by(cmp))
    }

    /// Stable sort by extracted key. Drains the upstream sequence when the stage is built.
    pub(crate) fn sorted_by_key<K: Ord>(self, key: impl FnMut(&T) -> K) -> Seq<'a, T> {
        Seq::new(self.iter.sorted_by_key(key))
    }

    /// At most the first `n` elements; upstream is never pulled past the `n`th.
    pub(crate) fn limit(self, n: usize) -> Seq<'a, T> {
        Seq::new(self.iter.take(n))
    }

    pub(crate) fn skip(self, n: usize) -> Seq<'a, T> {
        Seq::new(self.iter.skip(n))
    }

    pub(crate) fn peek(self, action: impl FnMut(&T) + 'a) -> Seq<'a, T> {
        Seq::new(self.iter.inspect(action))
    }

    /* **************************************** terminals **************************************** */

    /// Left fold without identity, absent on an empty sequence.
    pub(crate) fn reduce(self, op: impl FnMut(T, T) -> T) -> Option<T> {
        self.iter.reduce(op)
    }

    /// Left fold starting from `identity`.
    pub(crate) fn reduce_from<A>(self, identity: A, op: impl FnMut(A, T) -> A) -> A {
        self.iter.fold(identity, op)
    }

    pub(crate) fn count(self) -> usize {
        self.iter.count()
    }

    pub(crate) fn any_match(mut self, predicate: impl FnMut(T) -> bool) -> bool {
        self.iter.any(predicate)
    }

    /// Vacuously true on an empty sequence.
    pub(crate) fn all_match(mut self, predicate: impl FnMut(T) -> bool) -> bool {
        self.iter.all(predicate)
    }

    /// Vacuously true on an empty sequence.
    pub(crate) fn none_match(mut self, predicate: impl FnMut(T) -> bool) -> bool {
        !self.iter.any(predicate)
    }

    pub(crate) fn find_first(mut self) -> Option<T> {
        self.iter.next()
    }

    /// Evaluation is sequential, so this is the first element as well.
    pub(crate) fn find_any(self) -> Option<T> {
        self.find_first()
    }

    pub(crate) fn for_each(self, action: impl FnMut(T)) {
        self.iter.for_each(action)
    }

    pub(crate) fn to_list(self) -> Vec<T> {
        self.iter.collect()
    }

    pub(crate) fn collect<C: Collector<T>>(self, collector: C) -> C::Output {
        let mut acc = collector.supply();
        for item in self.iter {
            collector.accumulate(&mut acc, item);
        }
        collector.finish(acc)
    }

    pub(crate) fn join(mut self, sep: &str) -> String
    where
        T: Display,
    {
        self.iter.join(sep)
    }
}

impl<'a, T: Into<Float> + 'a> Seq<'a, T> {
    pub(crate) fn sum(self) -> Float {
        self.iter.map(Into::into).sum()
    }

    /// Arithmetic mean, absent on an empty sequence.
    pub(crate) fn average(self) -> Option<Float> {
        let summary = self.summarize();
        if summary.count() == 0 { None } else { Some(summary.average()) }
    }

    pub(crate) fn summarize(self) -> DoubleSummary {
        self.iter.fold(DoubleSummary::default(), |mut summary, value| {
            summary.accept(value.into());
            summary
        })
    }
}

impl Seq<'static, Integer> {
    /// `start..=end` counting up by one.
    pub(crate) fn range_closed(start: Integer, end: Integer) -> Seq<'static, Integer> {
        Seq { iter: range::range_to_iter(start, end, 1) }
    }

    /// `start..=end` stepping by `step`; a negative step walks the same range from `end` down.
    pub(crate) fn range_step(start: Integer, end: Integer, step: Integer) -> Result<Seq<'static, Integer>, SeqErr> {
        if step == 0 { Err(SeqErr::ZeroStep) } else { Ok(Seq { iter: range::range_to_iter(start, end, step) }) }
    }
}

/// Unwraps the optional result of a terminal consumer, turning absence into
/// [`SeqErr::NoSuchElement`].
pub(crate) trait Found<T> {
    fn found(self, op: &'static str) -> Result<T, SeqErr>;
}

impl<T> Found<T> for Option<T> {
    fn found(self, op: &'static str) -> Result<T, SeqErr> {
        self.ok_or(SeqErr::NoSuchElement { op })
    }
}
