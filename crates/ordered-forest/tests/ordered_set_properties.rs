use std::collections::BTreeSet;

use ordered_forest::{AvlTree, Bst, OrderedSet, RbTree, Traversal, TreeError};
use proptest::prelude::*;
use simplelog::{Config, LevelFilter, TestLogger};

#[derive(Clone, Debug)]
enum Op {
    Insert(i16),
    Remove(i16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-64i16..64).prop_map(Op::Insert),
        2 => (-64i16..64).prop_map(Op::Remove),
    ]
}

fn run<S>(
    ops: &[Op],
    mut tree: S,
    validate: impl Fn(&S) -> Result<(), String>,
) -> Result<(), TestCaseError>
where
    S: OrderedSet<i16>,
{
    let mut model = BTreeSet::new();
    for op in ops {
        match *op {
            Op::Insert(v) => {
                let expected = if model.insert(v) {
                    Ok(())
                } else {
                    Err(TreeError::DuplicateItem)
                };
                prop_assert_eq!(tree.insert(v), expected);
                prop_assert!(tree.has(&v));
            }
            Op::Remove(v) => {
                let expected = if model.remove(&v) {
                    Ok(v)
                } else {
                    Err(TreeError::ItemNotFound)
                };
                prop_assert_eq!(tree.remove(&v), expected);
                prop_assert!(!tree.has(&v));
            }
        }
        prop_assert_eq!(tree.size(), model.len());
        if let Err(msg) = validate(&tree) {
            return Err(TestCaseError::fail(msg));
        }
    }

    let in_order: Vec<i16> = tree.traverse_into(Traversal::InOrder);
    prop_assert_eq!(&in_order, &model.iter().copied().collect::<Vec<_>>());

    for order in [Traversal::PreOrder, Traversal::PostOrder] {
        let mut items: Vec<i16> = tree.traverse_into(order);
        prop_assert_eq!(items.len(), tree.size());
        items.sort_unstable();
        prop_assert_eq!(&items, &in_order);
    }

    match model.first() {
        Some(min) => {
            prop_assert_eq!(tree.first(), Ok(min));
            prop_assert_eq!(tree.last(), model.last().ok_or(TreeError::EmptyCollectionAccess));
        }
        None => {
            prop_assert!(tree.is_empty());
            prop_assert_eq!(tree.first(), Err(TreeError::EmptyCollectionAccess));
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn avl_matches_btree_set(ops in proptest::collection::vec(op(), 0..200)) {
        let _ = TestLogger::init(LevelFilter::Debug, Config::default());
        run(&ops, AvlTree::new(), AvlTree::assert_valid)?;
    }

    #[test]
    fn red_black_matches_btree_set(ops in proptest::collection::vec(op(), 0..200)) {
        run(&ops, RbTree::new(), RbTree::assert_valid)?;
    }

    #[test]
    fn bst_matches_btree_set(ops in proptest::collection::vec(op(), 0..200)) {
        run(&ops, Bst::new(), Bst::assert_valid)?;
    }

    #[test]
    fn every_tree_renders_the_same_items(items in proptest::collection::btree_set(any::<u8>(), 0..40)) {
        let avl = AvlTree::try_from_iter(items.iter().copied()).unwrap();
        let rb = RbTree::try_from_iter(items.iter().copied()).unwrap();
        let bst = Bst::try_from_iter(items.iter().copied()).unwrap();
        let expected: Vec<u8> = items.iter().copied().collect();
        prop_assert_eq!(avl.iter().copied().collect::<Vec<_>>(), expected.clone());
        prop_assert_eq!(rb.iter().copied().collect::<Vec<_>>(), expected.clone());
        prop_assert_eq!(bst.iter().copied().collect::<Vec<_>>(), expected);
        // sorted input: the plain tree degenerates, the balanced ones do not
        prop_assert_eq!(bst.height(), items.len());
        let bound = 2 * (usize::BITS - items.len().leading_zeros()) as usize;
        prop_assert!(avl.height() <= bound);
        prop_assert!(rb.height() <= bound);
    }
}
