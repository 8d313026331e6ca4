//! End-to-end usage of the owned chain API.
//!
//! Walks the classic driver scenario (build, swap, concatenate, render) and
//! checks the structural invariants after every mutation.

use forward_chain::OwnedChain;

/// Checks that walking from the head visits exactly `len` elements and ends
/// at the element `last()` reports.
fn check_invariants<T: PartialEq + std::fmt::Debug>(chain: &OwnedChain<T>) {
    let walked: Vec<&T> = chain.iter().collect();
    assert_eq!(walked.len(), chain.len());
    assert_eq!(walked.first().copied(), chain.first());
    assert_eq!(walked.last().copied(), chain.last());
    assert_eq!(chain.is_empty(), chain.len() == 0);
    if chain.is_empty() {
        assert!(chain.first().is_none());
        assert!(chain.last().is_none());
    }
}

#[test]
fn build_swap_concatenate_render() {
    let mut first = OwnedChain::new();
    first.push_front("BBB");
    first.push_back("CCC");
    first.push_back("DDD");
    first.push_front("AAA");

    assert_eq!(first.to_string(), "(AAA, BBB, CCC, DDD)");
    check_invariants(&first);

    assert!(first.swap_values(&"CCC", &"DDD"));
    assert_eq!(first.to_string(), "(AAA, BBB, DDD, CCC)");
    assert_eq!(first.last(), Some(&"CCC"));
    check_invariants(&first);

    let mut second = OwnedChain::new();
    second.push_front("111");
    second.push_back("222");
    second.push_back("333");
    assert_eq!(second.to_string(), "(111, 222, 333)");
    check_invariants(&second);

    first.append(second);
    assert_eq!(first.to_string(), "(AAA, BBB, DDD, CCC, 111, 222, 333)");
    assert_eq!(first.len(), 7);
    assert_eq!(first.last(), Some(&"333"));
    check_invariants(&first);
}

#[test]
fn invariants_hold_across_op_sequences() {
    let mut chain: OwnedChain<u32> = OwnedChain::new();

    // Interleave every mutating operation and re-check after each
    let ops: &[fn(&mut OwnedChain<u32>)] = &[
        |c| {
            c.push_front(1);
        },
        |c| {
            c.push_back(2);
        },
        |c| {
            c.push_front(3);
        },
        |c| {
            c.pop_front();
        },
        |c| {
            c.push_back(4);
        },
        |c| {
            c.swap_values(&1, &4);
        },
        |c| {
            c.pop_front();
        },
        |c| {
            c.pop_front();
        },
        |c| {
            c.pop_front();
        },
        |c| {
            c.pop_front();
        },
    ];

    for op in ops {
        op(&mut chain);
        check_invariants(&chain);
    }
    assert!(chain.is_empty());
}

#[test]
fn swap_covers_all_three_link_cases() {
    // Adjacent, first argument earlier in the chain
    let mut chain: OwnedChain<u32> = [1, 2, 3, 4].into_iter().collect();
    assert!(chain.swap_values(&2, &3));
    assert_eq!(render(&chain), vec![1, 3, 2, 4]);
    check_invariants(&chain);

    // Adjacent, first argument later in the chain
    let mut chain: OwnedChain<u32> = [1, 2, 3, 4].into_iter().collect();
    assert!(chain.swap_values(&3, &2));
    assert_eq!(render(&chain), vec![1, 3, 2, 4]);
    check_invariants(&chain);

    // Non-adjacent
    let mut chain: OwnedChain<u32> = [1, 2, 3, 4].into_iter().collect();
    assert!(chain.swap_values(&1, &4));
    assert_eq!(render(&chain), vec![4, 2, 3, 1]);
    assert_eq!(chain.last(), Some(&1));
    check_invariants(&chain);
}

#[test]
fn concatenation_of_number_chains() {
    let mut left: OwnedChain<u32> = [1, 2].into_iter().collect();
    let right: OwnedChain<u32> = [3, 4].into_iter().collect();

    left.append(right);

    assert_eq!(render(&left), vec![1, 2, 3, 4]);
    assert_eq!(left.len(), 4);
    assert_eq!(left.last(), Some(&4));
    check_invariants(&left);
}

#[test]
fn clone_and_hash_round_out_the_contract() {
    let chain: OwnedChain<u32> = [1, 2, 3].into_iter().collect();
    let copy = chain.clone();

    assert_eq!(chain, copy);
    assert_eq!(chain.sequence_hash(), copy.sequence_hash());

    let reversed: OwnedChain<u32> = [3, 2, 1].into_iter().collect();
    assert_ne!(chain, reversed);
    assert_ne!(chain.sequence_hash(), reversed.sequence_hash());
}

fn render(chain: &OwnedChain<u32>) -> Vec<u32> {
    chain.iter().copied().collect()
}
