use ordered_forest::{Color, OrderedSet, RbTree, TreeError};
use simplelog::{Config, LevelFilter, TestLogger};

#[test]
fn rb_insert_then_remove_matrix() {
    let mut tree = RbTree::new();
    tree.insert(42).unwrap();
    assert_eq!(tree.size(), 1);
    assert_eq!(tree.color_of(&42), Some(Color::Black));
    assert_eq!(tree.remove(&42), Ok(42));
    assert_eq!(tree.size(), 0);
    assert!(!tree.has(&42));
    assert!(tree.is_empty());
    tree.assert_valid().unwrap();
}

#[test]
fn rb_errors_leave_tree_untouched_matrix() {
    let mut tree = RbTree::try_from_iter([10, 20, 30]).unwrap();
    assert_eq!(tree.insert(20), Err(TreeError::DuplicateItem));
    assert_eq!(tree.remove(&25), Err(TreeError::ItemNotFound));
    assert_eq!(tree.size(), 3);
    assert_eq!(tree.in_order().into_iter().collect::<Vec<_>>(), vec![10, 20, 30]);
    tree.assert_valid().unwrap();

    let empty = RbTree::<u8>::new();
    assert_eq!(empty.first(), Err(TreeError::EmptyCollectionAccess));
    assert_eq!(empty.last(), Err(TreeError::EmptyCollectionAccess));
}

#[test]
fn rb_first_insert_case_matrix() {
    // 10b(5r, 20r) + 15: red uncle, recolor only
    let mut tree = RbTree::try_from_iter([10, 5, 20]).unwrap();
    tree.insert(15).unwrap();
    assert_eq!(tree.color_of(&10), Some(Color::Black));
    assert_eq!(tree.color_of(&5), Some(Color::Black));
    assert_eq!(tree.color_of(&20), Some(Color::Black));
    assert_eq!(tree.color_of(&15), Some(Color::Red));
    assert_eq!(tree.to_string(), "(5,10,(15,20))");
    tree.assert_valid().unwrap();
}

#[test]
fn rb_two_children_removal_uses_successor_matrix() {
    let mut tree = RbTree::try_from_iter([50, 25, 75, 10, 30, 60, 90]).unwrap();
    assert_eq!(tree.remove(&50), Ok(50));
    assert_eq!(tree.pre_order().into_iter().next(), Some(60));
    assert_eq!(
        tree.in_order().into_iter().collect::<Vec<_>>(),
        vec![10, 25, 30, 60, 75, 90]
    );
    tree.assert_valid().unwrap();
}

#[test]
fn rb_ladder_insert_delete_matrix() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
    let mut tree = RbTree::new();

    for i in 0..300 {
        tree.insert(i).unwrap();
        tree.assert_valid().unwrap();
    }
    for i in (0..300).step_by(2) {
        assert_eq!(tree.remove(&i), Ok(i));
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.size(), 150);
    assert_eq!(tree.first(), Ok(&1));
    assert_eq!(tree.last(), Ok(&299));

    for i in (0..300).rev().step_by(2) {
        tree.remove(&i).unwrap();
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
}

#[test]
fn rb_descending_and_interleaved_matrix() {
    let mut tree = RbTree::new();
    for i in (0..200).rev() {
        tree.insert(i).unwrap();
    }
    tree.assert_valid().unwrap();
    assert!(tree.height() <= 2 * 8);

    for i in (0..200).filter(|i| i % 5 == 2) {
        tree.remove(&i).unwrap();
        tree.insert(i + 1000).unwrap();
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.size(), 200);
    assert_eq!(tree.last(), Ok(&1197));
}

#[test]
fn rb_clone_and_equality_matrix() {
    let a = RbTree::try_from_iter([1, 2, 3, 4]).unwrap();
    let mut b = a.clone();
    assert_eq!(a, b);
    b.remove(&4).unwrap();
    assert_ne!(a, b);
    assert_eq!(format!("{b:?}"), "{1, 2, 3}");
    assert_eq!(b.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
}
