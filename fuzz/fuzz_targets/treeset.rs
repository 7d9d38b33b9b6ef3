#![no_main]

use std::collections::BTreeSet as NatSet;
use std::fmt::Debug;
use std::iter::FromIterator;
use std::ops::Range;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use setmap::{Cursor, TreeSet};

#[derive(Arbitrary, Debug)]
enum Action<A> {
    Insert(A),
    Remove(A),
    Range(Range<A>),
    RemoveMultiples(u8),
}

fuzz_target!(|actions: Vec<Action<u32>>| {
    let mut set = TreeSet::new();
    let mut nat = NatSet::new();
    for action in actions {
        match action {
            Action::Insert(value) => {
                assert_eq!(nat.insert(value), set.insert(value));
            }
            Action::Remove(value) => {
                assert_eq!(nat.remove(&value), set.remove(&value));
            }
            Action::Range(range) => {
                assert_eq!(set.first().ok(), nat.first());
                assert_eq!(set.last().ok(), nat.last());
                assert_eq!(set.ceiling(&range.start), nat.range(range.start..).next());
                assert_eq!(set.floor(&range.start), nat.range(..=range.start).last());

                if range.start < range.end {
                    assert!(set
                        .range(&range.start, &range.end)
                        .eq(nat.range(range.clone())));
                    let sub = set.sub_set(&range.start, &range.end);
                    sub.check_sane();
                    assert!(sub.iter().eq(nat.range(range.clone())));
                } else {
                    assert_eq!(0, set.range(&range.start, &range.end).count());
                }
            }
            Action::RemoveMultiples(divisor) => {
                let divisor = u32::from(divisor.max(1));
                nat.retain(|v| v % divisor != 0);
                let mut cursor = set.cursor();
                while cursor.has_next() {
                    if cursor.advance().unwrap() % divisor == 0 {
                        cursor.remove().unwrap();
                    }
                }
            }
        }
        assert_eq!(nat.len(), set.len());
        set.check_sane();
    }
    let rebuilt: TreeSet<u32> = TreeSet::from_iter(nat.iter().cloned());
    assert_eq!(rebuilt, set);
    assert!(set.iter().eq(nat.iter()));
    assert!(set.iter().rev().eq(nat.iter().rev()));
    assert!(set.into_iter().eq(nat));
});
