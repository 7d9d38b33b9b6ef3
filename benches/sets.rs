use criterion::{criterion_group, criterion_main, Bencher, Criterion};
use setmap::{HashSet, LinkedHashSet, TreeSet};
use std::collections::HashSet as StdHashSet;
use std::hint::black_box;
use std::iter::FromIterator;

mod utils;
use utils::*;

// Trait to abstract over the set flavours
trait BenchSet<A>: Clone + FromIterator<A>
where
    A: TestData,
{
    type Iter<'a>: Iterator<Item = &'a A>
    where
        Self: 'a,
        A: 'a;

    fn new() -> Self;
    fn insert(&mut self, a: A) -> bool;
    fn remove(&mut self, a: &A) -> bool;
    fn contains(&self, a: &A) -> bool;
    fn iter(&self) -> Self::Iter<'_>;
}

impl<A: TestData> BenchSet<A> for HashSet<A> {
    type Iter<'a>
        = setmap::hashset::Iter<'a, A>
    where
        A: 'a;

    fn new() -> Self {
        HashSet::new()
    }

    fn insert(&mut self, a: A) -> bool {
        self.insert(a)
    }

    fn remove(&mut self, a: &A) -> bool {
        self.remove(a)
    }

    fn contains(&self, a: &A) -> bool {
        self.contains(a)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<A: TestData> BenchSet<A> for LinkedHashSet<A> {
    type Iter<'a>
        = setmap::linkedhashset::Iter<'a, A>
    where
        A: 'a;

    fn new() -> Self {
        LinkedHashSet::new()
    }

    fn insert(&mut self, a: A) -> bool {
        self.insert(a)
    }

    fn remove(&mut self, a: &A) -> bool {
        self.remove(a)
    }

    fn contains(&self, a: &A) -> bool {
        self.contains(a)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<A: TestData> BenchSet<A> for TreeSet<A> {
    type Iter<'a>
        = setmap::treeset::Iter<'a, A>
    where
        A: 'a;

    fn new() -> Self {
        TreeSet::new()
    }

    fn insert(&mut self, a: A) -> bool {
        self.insert(a)
    }

    fn remove(&mut self, a: &A) -> bool {
        self.remove(a)
    }

    fn contains(&self, a: &A) -> bool {
        self.contains(a)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

impl<A: TestData> BenchSet<A> for StdHashSet<A> {
    type Iter<'a>
        = std::collections::hash_set::Iter<'a, A>
    where
        A: 'a;

    fn new() -> Self {
        StdHashSet::new()
    }

    fn insert(&mut self, a: A) -> bool {
        self.insert(a)
    }

    fn remove(&mut self, a: &A) -> bool {
        self.remove(a)
    }

    fn contains(&self, a: &A) -> bool {
        self.contains(a)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.iter()
    }
}

fn bench_lookup<S: BenchSet<A>, A: TestData>(b: &mut Bencher, size: usize) {
    let values = A::generate(size);
    let order = reorder(&values);
    let set: S = reorder(&order).into_iter().collect();
    b.iter(|| {
        for a in &order {
            black_box(set.contains(a));
        }
    })
}

fn bench_lookup_ne<S: BenchSet<A>, A: TestData>(b: &mut Bencher, size: usize) {
    let values = A::generate(size * 2);
    let order = reorder(&values[size..]);
    let set: S = reorder(&values[..size]).into_iter().collect();
    b.iter(|| {
        for a in &order {
            black_box(set.contains(a));
        }
    })
}

fn bench_insert_mut<S: BenchSet<A>, A: TestData>(b: &mut Bencher, size: usize) {
    let values = reorder(&A::generate(size));
    b.iter(|| {
        let mut set = S::new();
        for a in values.clone() {
            set.insert(a);
        }
        set
    })
}

fn bench_remove_mut<S: BenchSet<A>, A: TestData>(b: &mut Bencher, size: usize) {
    let values = A::generate(size);
    let order = reorder(&values);
    let set: S = reorder(&values).into_iter().rev().collect();
    b.iter(|| {
        let mut s = set.clone();
        for a in &order {
            s.remove(a);
        }
        s
    })
}

fn bench_iter<S: BenchSet<A>, A: TestData>(b: &mut Bencher, size: usize) {
    let values = reorder(&A::generate(size));
    let set: S = values.into_iter().collect();
    b.iter(|| {
        for a in set.iter() {
            black_box(a);
        }
    })
}

fn bench_group<S: BenchSet<A>, A: TestData>(c: &mut Criterion, group_name: &str) {
    let mut group = c.benchmark_group(group_name);

    for size in &[100, 1000, 10000, 100000] {
        group.bench_function(format!("lookup_{}", size), |b| {
            bench_lookup::<S, A>(b, *size)
        });
    }

    for size in &[10000, 100000] {
        group.bench_function(format!("lookup_ne_{}", size), |b| {
            bench_lookup_ne::<S, A>(b, *size)
        });
    }

    for size in &[100, 1000, 10000, 100000] {
        group.bench_function(format!("insert_mut_{}", size), |b| {
            bench_insert_mut::<S, A>(b, *size)
        });
    }

    for size in &[100, 1000, 10000] {
        group.bench_function(format!("remove_mut_{}", size), |b| {
            bench_remove_mut::<S, A>(b, *size)
        });
    }

    for size in &[1000, 10000] {
        group.bench_function(format!("iter_{}", size), |b| {
            bench_iter::<S, A>(b, *size)
        });
    }

    group.finish();
}

fn bench_hashset(c: &mut Criterion) {
    bench_group::<HashSet<i64>, i64>(c, "hashset_i64");
    bench_group::<HashSet<String>, String>(c, "hashset_str");
}

fn bench_linkedhashset(c: &mut Criterion) {
    bench_group::<LinkedHashSet<i64>, i64>(c, "linkedhashset_i64");
    bench_group::<LinkedHashSet<String>, String>(c, "linkedhashset_str");
}

fn bench_treeset(c: &mut Criterion) {
    bench_group::<TreeSet<i64>, i64>(c, "treeset_i64");
    bench_group::<TreeSet<String>, String>(c, "treeset_str");
}

fn bench_stdhashset(c: &mut Criterion) {
    bench_group::<StdHashSet<i64>, i64>(c, "stdhashset_i64");
    bench_group::<StdHashSet<String>, String>(c, "stdhashset_str");
}

criterion_group!(
    sets,
    bench_hashset,
    bench_linkedhashset,
    bench_treeset,
    bench_stdhashset
);
criterion_main!(sets);
