#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};

mod algorithms;
mod tree;

/// Orders in which a tree's values get inserted.
#[derive(Copy, Clone, Debug)]
pub enum Order {
    /// As generated.
    Random,
    /// Sorted ascending, giving a right-skewed tree.
    Ascending,
    /// Sorted descending, giving a left-skewed tree.
    Descending,
}

impl Order {
    /// Rearranges `xs` into this order.
    pub fn apply<T: Ord>(self, xs: &mut [T]) {
        match self {
            Order::Random => {}
            Order::Ascending => xs.sort(),
            Order::Descending => xs.sort_by(|a, b| b.cmp(a)),
        }
    }
}

impl Arbitrary for Order {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Order::Random, Order::Ascending, Order::Descending])
            .unwrap()
    }
}
