//! Shared comparison/predicate logic that the original design hung off an
//! `AbstractMoney` base class. Rust has no base class to put it on, so
//! it's a trait with default methods instead: `FixedMoney` and
//! `RationalMoney` each supply [`MoneySign::sign`] and get the rest for
//! free, the way the original's subclasses inherited them.

use std::cmp::Ordering;

/// Zero/negative/positive predicates derived from a single sign probe.
pub trait MoneySign {
    fn sign(&self) -> Ordering;

    fn is_zero(&self) -> bool {
        self.sign() == Ordering::Equal
    }

    fn is_negative(&self) -> bool {
        self.sign() == Ordering::Less
    }

    fn is_positive(&self) -> bool {
        self.sign() == Ordering::Greater
    }
}
