//! Numeric presets
//!
//! Integer refinements (`Nat`, `Odd`, `Even`, `Pos`, `Neg`) and the `Num`
//! union of integers and floats with its sign refinements.

use typeward_contract::combinators::filter;
use typeward_contract::{Descriptor, Kind, Value};

fn int_where(test: fn(i64) -> bool) -> impl Fn(&Value) -> bool + Send + Sync + 'static {
    move |value| value.as_int().is_some_and(test)
}

fn number_where(test: fn(f64) -> bool) -> impl Fn(&Value) -> bool + Send + Sync + 'static {
    move |value| value.as_number().is_some_and(test)
}

preset! {
    /// Integers or floats.
    pub fn num() = "Num", Descriptor::from(Kind::Int).or(Kind::Float);

    /// Natural numbers, zero included.
    pub fn nat() = "Nat", filter(Kind::Int, int_where(|n| n >= 0));

    pub fn odd() = "Odd", filter(Kind::Int, int_where(|n| n % 2 != 0));

    pub fn even() = "Even", filter(Kind::Int, int_where(|n| n % 2 == 0));

    /// Strictly positive integers.
    pub fn pos() = "Pos", filter(Kind::Int, int_where(|n| n > 0));

    /// Strictly negative integers.
    pub fn neg() = "Neg", filter(Kind::Int, int_where(|n| n < 0));

    /// Strictly positive integers or floats.
    pub fn pos_num() = "PosNum", filter(num(), number_where(|n| n > 0.0));

    /// Strictly negative integers or floats.
    pub fn neg_num() = "NegNum", filter(num(), number_where(|n| n < 0.0));
}
