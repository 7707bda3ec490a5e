//! Distinct permutations of a multiset, in lexicographic order

use super::{Arrangement, BACK_RANK};
use crate::error::Result;
use crate::pieces::Symbol;

/// Iterator over the distinct orderings of a multiset.
///
/// Starts from the sorted multiset and steps with next-permutation, so
/// equal symbols never produce duplicate orderings and the sequence is
/// the same on every run.
pub struct MultisetPermutations {
    current: Option<Vec<Symbol>>,
}

impl Iterator for MultisetPermutations {
    type Item = Vec<Symbol>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        let mut following = current.clone();
        if next_permutation(&mut following) {
            self.current = Some(following);
        }
        Some(current)
    }
}

pub fn multiset_permutations(symbols: &[Symbol]) -> MultisetPermutations {
    let mut start = symbols.to_vec();
    start.sort();
    MultisetPermutations {
        current: Some(start),
    }
}

/// Rearranges `items` into the next greater ordering. Returns false once
/// `items` is already the greatest (fully descending) ordering.
fn next_permutation(items: &mut [Symbol]) -> bool {
    if items.len() < 2 {
        return false;
    }

    let mut pivot = items.len() - 1;
    while pivot > 0 && items[pivot - 1] >= items[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }

    let mut successor = items.len() - 1;
    while items[successor] <= items[pivot - 1] {
        successor -= 1;
    }

    items.swap(pivot - 1, successor);
    items[pivot..].reverse();
    true
}

/// Every distinct back rank, in generation order.
pub fn all_arrangements() -> Result<Vec<Arrangement>> {
    multiset_permutations(&BACK_RANK)
        .map(|symbols| Arrangement::new(&symbols))
        .collect()
}
