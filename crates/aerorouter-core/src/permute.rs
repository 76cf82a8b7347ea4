// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

/// Every ordering of `items`, each exactly once.
///
/// Orderings come out in index-lexicographic order: `[0, 1, 2, 3]` first,
/// `[3, 2, 1, 0]` last. Route selection relies on this order for tie-breaking.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut out = Vec::with_capacity(factorial(items.len()));
    let mut current = Vec::with_capacity(items.len());
    let mut used = vec![false; items.len()];
    extend(items, &mut used, &mut current, &mut out);
    out
}

fn extend<T: Clone>(items: &[T], used: &mut [bool], current: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
    if current.len() == items.len() {
        out.push(current.clone());
        return;
    }
    for i in 0..items.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        current.push(items[i].clone());
        extend(items, used, current, out);
        current.pop();
        used[i] = false;
    }
}

fn factorial(n: usize) -> usize {
    (1..=n).product()
}
