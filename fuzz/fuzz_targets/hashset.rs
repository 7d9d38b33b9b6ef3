#![no_main]

use std::collections::HashSet as NatSet;
use std::fmt::Debug;
use std::iter::FromIterator;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use setmap::{Cursor, HashSet};

#[derive(Arbitrary, Debug)]
enum Action<A> {
    Insert(A),
    Remove(A),
    RemoveMultiples(u8),
}

fuzz_target!(|actions: Vec<Action<u32>>| {
    let mut set = HashSet::new();
    let mut nat = NatSet::new();
    for action in actions {
        match action {
            Action::Insert(value) => {
                assert_eq!(nat.insert(value), set.insert(value));
            }
            Action::Remove(value) => {
                assert_eq!(nat.remove(&value), set.remove(&value));
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
    let rebuilt: HashSet<u32> = HashSet::from_iter(nat.iter().cloned());
    assert_eq!(rebuilt, set);
    assert_eq!(NatSet::from_iter(set.iter().cloned()), nat);
    assert_eq!(set.iter().count(), nat.len());
    assert_eq!(set.into_iter().count(), nat.len());
});
