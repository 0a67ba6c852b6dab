//! Boolean algebra over outcomes.
//!
//! Every outcome arity (and [`bool`] itself) exposes one bit of truth: the ok-flag.
//! [`Truthy`] abstracts over that bit so outcomes of different arities compose
//! without unwrapping. Composition reads flags only - it never touches values,
//! never merges causes and never synthesizes an error; a failed combination is
//! always a causeless [`Status`].
//!
//! The `&`, `|` and `^` operators accept any [`Truthy`] on the right-hand side, so
//! `status & outcome`, `outcome | true` and `typed ^ status` all work directly. For
//! `bool` on the left-hand side, concrete impls are provided for each arity.

use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::outcome::status::Status;
use crate::outcome::typed::TypedOutcome;
use crate::outcome::value::Outcome;

/// A value with an ok-flag: the common denominator of [`bool`], [`Status`],
/// [`Outcome`] and [`TypedOutcome`].
pub trait Truthy {
    /// Returns the ok-flag: `true` iff this value represents success.
    fn truthy(&self) -> bool;

    /// Ok iff both `self` and `other` are ok. The named form of `&`.
    fn and<R: Truthy>(&self, other: &R) -> Status {
        Status::from(self.truthy() & other.truthy())
    }

    /// Ok iff either `self` or `other` is ok. The named form of `|`.
    fn or<R: Truthy>(&self, other: &R) -> Status {
        Status::from(self.truthy() | other.truthy())
    }

    /// Ok iff exactly one of `self` and `other` is ok. The named form of `^`.
    fn xor<R: Truthy>(&self, other: &R) -> Status {
        Status::from(self.truthy() ^ other.truthy())
    }

    /// Cross-arity flag equality: `true` iff `self` and `other` are both ok or both
    /// failed. Coherence keeps some of these pairings out of `==`; this form is
    /// total over every combination.
    fn eq_ok<R: Truthy>(&self, other: &R) -> bool {
        self.truthy() == other.truthy()
    }
}

impl Truthy for bool {
    fn truthy(&self) -> bool {
        *self
    }
}

impl Truthy for Status {
    fn truthy(&self) -> bool {
        self.is_ok()
    }
}

impl<T> Truthy for Outcome<T> {
    fn truthy(&self) -> bool {
        self.is_ok()
    }
}

impl<T, E> Truthy for TypedOutcome<T, E> {
    fn truthy(&self) -> bool {
        self.is_ok()
    }
}

/// Implements `&`, `|`, `^` (mixed-arity RHS, producing a causeless [`Status`]) and
/// `!` (producing "truly failed") for an outcome type.
macro_rules! impl_logic_ops {
    (<$($gen:ident),*> $type:ty) => {
        impl<$($gen,)* Rhs: Truthy> BitAnd<Rhs> for $type {
            type Output = Status;

            fn bitand(self, rhs: Rhs) -> Status {
                self.and(&rhs)
            }
        }

        impl<$($gen,)* Rhs: Truthy> BitOr<Rhs> for $type {
            type Output = Status;

            fn bitor(self, rhs: Rhs) -> Status {
                self.or(&rhs)
            }
        }

        impl<$($gen,)* Rhs: Truthy> BitXor<Rhs> for $type {
            type Output = Status;

            fn bitxor(self, rhs: Rhs) -> Status {
                self.xor(&rhs)
            }
        }

        impl<$($gen),*> Not for $type {
            type Output = bool;

            /// `true` iff the outcome failed.
            fn not(self) -> bool {
                !self.truthy()
            }
        }
    };
}

impl_logic_ops!(<> Status);
impl_logic_ops!(<T> Outcome<T>);
impl_logic_ops!(<T, E> TypedOutcome<T, E>);

/// Implements `&`, `|`, `^` with `bool` on the left-hand side, completing the
/// composition table.
macro_rules! impl_bool_lhs_ops {
    (<$($gen:ident),*> $type:ty) => {
        impl<$($gen),*> BitAnd<$type> for bool {
            type Output = Status;

            fn bitand(self, rhs: $type) -> Status {
                Truthy::and(&self, &rhs)
            }
        }

        impl<$($gen),*> BitOr<$type> for bool {
            type Output = Status;

            fn bitor(self, rhs: $type) -> Status {
                Truthy::or(&self, &rhs)
            }
        }

        impl<$($gen),*> BitXor<$type> for bool {
            type Output = Status;

            fn bitxor(self, rhs: $type) -> Status {
                Truthy::xor(&self, &rhs)
            }
        }
    };
}

impl_bool_lhs_ops!(<> Status);
impl_bool_lhs_ops!(<T> Outcome<T>);
impl_bool_lhs_ops!(<T, E> TypedOutcome<T, E>);
