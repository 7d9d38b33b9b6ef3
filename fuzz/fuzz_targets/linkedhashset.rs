#![no_main]

use std::fmt::Debug;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use setmap::{Cursor, LinkedHashSet};

#[derive(Arbitrary, Debug)]
enum Action<A> {
    Insert(A),
    Remove(A),
    PopFront,
    RemoveMultiples(u8),
}

// The model is a plain vector in first-insertion order.
fuzz_target!(|actions: Vec<Action<u16>>| {
    let mut set = LinkedHashSet::new();
    let mut nat: Vec<u16> = Vec::new();
    for action in actions {
        match action {
            Action::Insert(value) => {
                let fresh = !nat.contains(&value);
                if fresh {
                    nat.push(value);
                }
                assert_eq!(fresh, set.insert(value));
            }
            Action::Remove(value) => {
                let position = nat.iter().position(|v| *v == value);
                if let Some(index) = position {
                    nat.remove(index);
                }
                assert_eq!(position.is_some(), set.remove(&value));
            }
            Action::PopFront => {
                let front = if nat.is_empty() {
                    None
                } else {
                    Some(nat.remove(0))
                };
                assert_eq!(front, set.pop_front());
            }
            Action::RemoveMultiples(divisor) => {
                let divisor = u16::from(divisor.max(1));
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
    assert!(set.iter().eq(nat.iter()));
    assert!(set.iter().rev().eq(nat.iter().rev()));
    assert!(set.into_iter().eq(nat));
});
