// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

// Every codebase needs a `util` module.

use std::mem;

use crate::error::{Error, Result};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Side {
    Left,
    Right,
}

/// What a cursor remembers about the element it handed out last.
///
/// Only `Removable` permits a removal, and a removal moves the state to
/// `Consumed` until the cursor advances again.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum LastReturned<P> {
    NotStarted,
    Removable(P),
    Consumed,
}

impl<P> LastReturned<P> {
    /// Claim the pending position for removal.
    pub(crate) fn take(&mut self) -> Result<P> {
        match mem::replace(self, LastReturned::Consumed) {
            LastReturned::Removable(position) => Ok(position),
            other => {
                *self = other;
                Err(Error::IllegalState)
            }
        }
    }
}

#[cfg(test)]
macro_rules! assert_covariant {
    ($name:ident<$($gen:tt),*> in $param:ident) => {
        #[allow(dead_code, unused_assignments, unused_variables)]
        const _: () = {
            type Tmp<$param> = $name<$($gen),*>;
            fn assign<'a, 'b: 'a>(src: Tmp<&'b i32>, mut dst: Tmp<&'a i32>) {
                dst = src;
            }
        };
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn removal_slot_transitions() {
        let mut slot: LastReturned<u8> = LastReturned::NotStarted;
        assert_eq!(Err(Error::IllegalState), slot.take());
        assert_eq!(LastReturned::NotStarted, slot);
        slot = LastReturned::Removable(7);
        assert_eq!(Ok(7), slot.take());
        assert_eq!(LastReturned::Consumed, slot);
        assert_eq!(Err(Error::IllegalState), slot.take());
    }
}
