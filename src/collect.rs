//! Collectors: terminal reductions that nest.
//!
//! A collector supplies a fresh accumulator, folds elements into it one at a time and finishes it
//! into a result. Grouping collectors keep one downstream accumulator per key, so any collector
//! can be applied per group.

use crate::Float;
use crate::summary::DoubleSummary;
use itertools::Itertools;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::marker::PhantomData;

pub(crate) trait Collector<T> {
    type Acc;
    type Output;

    fn supply(&self) -> Self::Acc;

    fn accumulate(&self, acc: &mut Self::Acc, item: T);

    fn finish(&self, acc: Self::Acc) -> Self::Output;
}

/// Both sides of a partition. Either side may be empty but both are always present.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Partition<R> {
    pub(crate) matched: R,
    pub(crate) unmatched: R,
}

pub(crate) struct ToList;

pub(crate) struct Counting;

pub(crate) struct Joining {
    sep: String,
}

pub(crate) struct Mapping<F, U, D> {
    f: F,
    downstream: D,
    marker: PhantomData<fn() -> U>,
}

pub(crate) struct GroupingBy<F, K, D> {
    key: F,
    downstream: D,
    marker: PhantomData<fn() -> K>,
}

pub(crate) struct PartitioningBy<P, D> {
    predicate: P,
    downstream: D,
}

pub(crate) struct MaxBy<C> {
    cmp: C,
}

pub(crate) struct MinBy<C> {
    cmp: C,
}

pub(crate) struct AveragingDouble<F> {
    extractor: F,
}

pub(crate) struct SummarizingDouble<F> {
    extractor: F,
}

pub(crate) fn to_list() -> ToList {
    ToList
}

pub(crate) fn counting() -> Counting {
    Counting
}

pub(crate) fn joining(sep: &str) -> Joining {
    Joining { sep: sep.to_owned() }
}

pub(crate) fn mapping<T, U, F, D>(f: F, downstream: D) -> Mapping<F, U, D>
where
    F: Fn(T) -> U,
    D: Collector<U>,
{
    Mapping { f, downstream, marker: PhantomData }
}

pub(crate) fn grouping_by<T, K, F>(key: F) -> GroupingBy<F, K, ToList>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    grouping_by_with(key, ToList)
}

pub(crate) fn grouping_by_with<T, K, F, D>(key: F, downstream: D) -> GroupingBy<F, K, D>
where
    F: Fn(&T) -> K,
    K: Ord,
    D: Collector<T>,
{
    GroupingBy { key, downstream, marker: PhantomData }
}

pub(crate) fn partitioning_by<T, P>(predicate: P) -> PartitioningBy<P, ToList>
where
    P: Fn(&T) -> bool,
{
    partitioning_by_with(predicate, ToList)
}

pub(crate) fn partitioning_by_with<T, P, D>(predicate: P, downstream: D) -> PartitioningBy<P, D>
where
    P: Fn(&T) -> bool,
    D: Collector<T>,
{
    PartitioningBy { predicate, downstream }
}

/// Greatest element by `cmp`; among equal maxima the first encountered wins.
pub(crate) fn max_by<T, C>(cmp: C) -> MaxBy<C>
where
    C: Fn(&T, &T) -> Ordering,
{
    MaxBy { cmp }
}

/// Least element by `cmp`; among equal minima the first encountered wins.
pub(crate) fn min_by<T, C>(cmp: C) -> MinBy<C>
where
    C: Fn(&T, &T) -> Ordering,
{
    MinBy { cmp }
}

/// Mean of the extracted values. NaN for an empty input, never zero.
pub(crate) fn averaging_double<T, F>(extractor: F) -> AveragingDouble<F>
where
    F: Fn(&T) -> Float,
{
    AveragingDouble { extractor }
}

pub(crate) fn summarizing_double<T, F>(extractor: F) -> SummarizingDouble<F>
where
    F: Fn(&T) -> Float,
{
    SummarizingDouble { extractor }
}

/// Total order over an extracted float, NaN sorting above every number.
pub(crate) fn comparing_double<T>(extractor: impl Fn(&T) -> Float) -> impl Fn(&T, &T) -> Ordering {
    move |l: &T, r: &T| OrderedFloat(extractor(l)).cmp(&OrderedFloat(extractor(r)))
}

impl<T> Collector<T> for ToList {
    type Acc = Vec<T>;
    type Output = Vec<T>;

    fn supply(&self) -> Self::Acc {
        Vec::new()
    }

    fn accumulate(&self, acc: &mut Self::Acc, item: T) {
        acc.push(item);
    }

    fn finish(&self, acc: Self::Acc) -> Self::Output {
        acc
    }
}

impl<T> Collector<T> for Counting {
    type Acc = usize;
    type Output = usize;

    fn supply(&self) -> Self::Acc {
        0
    }

    fn accumulate(&self, acc: &mut Self::Acc, _item: T) {
        *acc += 1;
    }

    fn finish(&self, acc: Self::Acc) -> Self::Output {
        acc
    }
}

impl<T: Display> Collector<T> for Joining {
    type Acc = Vec<T>;
    type Output = String;

    fn supply(&self) -> Self::Acc {
        Vec::new()
    }

    fn accumulate(&self, acc: &mut Self::Acc, item: T) {
        acc.push(item);
    }

    fn finish(&self, acc: Self::Acc) -> Self::Output {
        acc.iter().join(&self.sep)
    }
}

impl<T, U, F, D> Collector<T> for Mapping<F, U, D>
where
    F: Fn(T) -> U,
    D: Collector<U>,
{
    type Acc = D::Acc;
    type Output = D::Output;

    fn supply(&self) -> Self::Acc {
        self.downstream.supply()
    }

    fn accumulate(&self, acc: &mut Self::Acc, item: T) {
        self.downstream.accumulate(acc, (self.f)(item));
    }

    fn finish(&self, acc: Self::Acc) -> Self::Output {
        self.downstream.finish(acc)
    }
}

impl<T, K, F, D> Collector<T> for GroupingBy<F, K, D>
where
    F: Fn(&T) -> K,
    K: Ord,
    D: Collector<T>,
{
    type Acc = BTreeMap<K, D::Acc>;
    type Output = BTreeMap<K, D::Output>;

    fn supply(&self) -> Self::Acc {
        BTreeMap::new()
    }

    fn accumulate(&self, acc: &mut Self::Acc, item: T) {
        let group = acc.entry((self.key)(&item)).or_insert_with(|| self.downstream.supply());
        self.downstream.accumulate(group, item);
    }

    fn finish(&self, acc: Self::Acc) -> Self::Output {
        acc.into_iter().map(|(key, group)| (key, self.downstream.finish(group))).collect()
    }
}

impl<T, P, D> Collector<T> for PartitioningBy<P, D>
where
    P: Fn(&T) -> bool,
    D: Collector<T>,
{
    type Acc = Partition<D::Acc>;
    type Output = Partition<D::Output>;

    fn supply(&self) -> Self::Acc {
        Partition { matched: self.downstream.supply(), unmatched: self.downstream.supply() }
    }

    fn accumulate(&self, acc: &mut Self::Acc, item: T) {
        if (self.predicate)(&item) {
            self.downstream.accumulate(&mut acc.matched, item);
        } else {
            self.downstream.accumulate(&mut acc.unmatched, item);
        }
    }

    fn finish(&self, acc: Self::Acc) -> Self::Output {
        Partition { matched: self.downstream.finish(acc.matched), unmatched: self.downstream.finish(acc.unmatched) }
    }
}

impl<T, C> Collector<T> for MaxBy<C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Acc = Option<T>;
    type Output = Option<T>;

    fn supply(&self) -> Self::Acc {
        None
    }

    fn accumulate(&self, acc: &mut Self::Acc, item: T) {
        if let Some(current) = acc
            && (self.cmp)(&item, current) != Ordering::Greater
        {
            return;
        }
        *acc = Some(item);
    }

    fn finish(&self, acc: Self::Acc) -> Self::Output {
        acc
    }
}

impl<T, C> Collector<T> for MinBy<C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Acc = Option<T>;
    type Output = Option<T>;

    fn supply(&self) -> Self::Acc {
        None
    }

    fn accumulate(&self, acc: &mut Self::Acc, item: T) {
        if let Some(current) = acc
            && (self.cmp)(&item, current) != Ordering::Less
        {
            return;
        }
        *acc = Some(item);
    }

    fn finish(&self, acc: Self::Acc) -> Self::Output {
        acc
    }
}

impl<T, F> Collector<T> for AveragingDouble<F>
where
    F: Fn(&T) -> Float,
{
    type Acc = DoubleSummary;
    type Output = Float;

    fn supply(&self) -> Self::Acc {
        DoubleSummary::default()
    }

    fn accumulate(&self, acc: &mut Self::Acc, item: T) {
        acc.accept((self.extractor)(&item));
    }

    fn finish(&self, acc: Self::Acc) -> Self::Output {
        acc.average()
    }
}

impl<T, F> Collector<T> for SummarizingDouble<F>
where
    F: Fn(&T) -> Float,
{
    type Acc = DoubleSummary;
    type Output = DoubleSummary;

    fn supply(&self) -> Self::Acc {
        DoubleSummary::default()
    }

    fn accumulate(&self, acc: &mut Self::Acc, item: T) {
        acc.accept((self.extractor)(&item));
    }

    fn finish(&self, acc: Self::Acc) -> Self::Output {
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movie::{Movie, MovieType, sample_movies};
    use crate::seq::Seq;

    #[test]
    fn test_grouping_by_category() {
        let groups = Seq::of(sample_movies()).collect(grouping_by(|movie: &Movie| movie.category()));
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[&MovieType::Horror].len(), 1);
        assert_eq!(groups[&MovieType::Adventure].len(), 3);
        assert_eq!(groups[&MovieType::Documentary].len(), 1);
        // encounter order within a group
        let names = groups[&MovieType::Adventure].iter().map(Movie::name).collect::<Vec<_>>();
        assert_eq!(names, vec!["Lord of The Rings", "Star Wars", "Food Fight"]);
    }

    #[test]
    fn test_nested_grouping() {
        let movies = sample_movies();
        let groups = Seq::of(&movies).collect(grouping_by_with(
            |movie: &&Movie| movie.category(),
            grouping_by(|movie: &&Movie| movie.year()),
        ));
        let adventure = &groups[&MovieType::Adventure];
        assert_eq!(adventure.keys().copied().collect::<Vec<_>>(), vec![1978, 2003, 2012]);
        assert_eq!(adventure[&2012][0].name(), "Food Fight");
    }

    #[test]
    fn test_grouping_with_max_by() {
        let movies = sample_movies();
        let top = Seq::of(&movies).collect(grouping_by_with(
            |movie: &&Movie| movie.category(),
            max_by(comparing_double(|movie: &&Movie| movie.rating())),
        ));
        assert_eq!(top[&MovieType::Adventure].map(Movie::name), Some("Lord of The Rings"));
        assert_eq!(top[&MovieType::Horror].map(Movie::name), Some("IT"));
    }

    #[test]
    fn test_grouping_with_counting_and_mapping() {
        let words = vec!["apple", "avocado", "banana", "blueberry", "cherry"];
        let counts = Seq::of(words.clone()).collect(grouping_by_with(|w: &&str| w.chars().next(), counting()));
        assert_eq!(counts.values().copied().collect::<Vec<_>>(), vec![2, 2, 1]);
        let lens = Seq::of(words).collect(grouping_by_with(|w: &&str| w.len() > 5, mapping(|w: &str| w.len(), to_list())));
        assert_eq!(lens[&false], vec![5]);
        assert_eq!(lens[&true], vec![7, 6, 9, 6]);
    }

    #[test]
    fn test_partitioning_by() {
        let parts = Seq::of(sample_movies()).collect(partitioning_by(|movie: &Movie| movie.year() < 2014));
        assert_eq!(parts.matched.len(), 4);
        assert_eq!(parts.unmatched.len(), 1);
        assert_eq!(parts.unmatched[0].name(), "IT");
    }

    #[test]
    fn test_partitioning_keeps_both_sides() {
        let values = vec![1, 2, 3, 4, 5];
        for bound in 0..=6 {
            let parts = Seq::of(values.clone()).collect(partitioning_by(move |v: &i32| *v < bound));
            assert_eq!(parts.matched.len() + parts.unmatched.len(), values.len());
        }
        let parts = Seq::<i32>::empty().collect(partitioning_by(|v: &i32| *v > 0));
        assert_eq!(parts, Partition { matched: vec![], unmatched: vec![] });
        let counted = Seq::of(values).collect(partitioning_by_with(|v: &i32| v % 2 == 0, counting()));
        assert_eq!(counted, Partition { matched: 2, unmatched: 3 });
    }

    #[test]
    fn test_max_by_ties_keep_first() {
        let best = Seq::of(sample_movies()).collect(max_by(comparing_double(|movie: &Movie| movie.rating())));
        assert_eq!(best.map(|movie| movie.name().to_owned()), Some("Lord of The Rings".to_string()));
        let words = vec!["bb", "aa", "c"];
        assert_eq!(Seq::of(words).collect(max_by(|l: &&str, r: &&str| l.len().cmp(&r.len()))), Some("bb"));
        assert_eq!(Seq::<i32>::empty().collect(max_by(|l: &i32, r: &i32| l.cmp(r))), None);
    }

    #[test]
    fn test_min_by() {
        let worst = Seq::of(sample_movies()).collect(min_by(comparing_double(|movie: &Movie| movie.rating())));
        assert_eq!(worst.map(|movie| movie.name().to_owned()), Some("Food Fight".to_string()));
        let words = vec!["c", "bb", "d"];
        assert_eq!(Seq::of(words).collect(min_by(|l: &&str, r: &&str| l.len().cmp(&r.len()))), Some("c"));
    }

    #[test]
    fn test_averaging_double() {
        let avg = Seq::of(sample_movies()).collect(averaging_double(|movie: &Movie| movie.rating()));
        assert!((avg - 3.66).abs() < 1e-9);
        assert!(Seq::<Movie>::empty().collect(averaging_double(|movie: &Movie| movie.rating())).is_nan());
    }

    #[test]
    fn test_summarizing_double() {
        let stats = Seq::of(sample_movies()).collect(summarizing_double(|movie: &Movie| movie.rating()));
        assert_eq!(stats.count(), 5);
        assert!((stats.sum() - 18.3).abs() < 1e-9);
        assert_eq!(stats.min(), 0.0);
        assert_eq!(stats.max(), 5.0);
    }

    #[test]
    fn test_to_list_and_joining() {
        assert_eq!(Seq::of([2, 4, 6, 8]).map(|i| i * i).collect(to_list()), vec![4, 16, 36, 64]);
        assert_eq!(Seq::of(sample_movies()).limit(2).collect(joining(", ")), "IT, Lord of The Rings");
    }

    #[test]
    fn test_comparing_double_orders_nan_last() {
        let cmp = comparing_double(|v: &f64| *v);
        assert_eq!(cmp(&1.0, &2.0), Ordering::Less);
        assert_eq!(cmp(&Float::NAN, &2.0), Ordering::Greater);
    }
}
