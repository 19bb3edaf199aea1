use linked_seq::{DoublyLinkedList, ListError};

fn list_of(items: &[i32]) -> DoublyLinkedList<i32> {
    items.iter().copied().collect()
}

#[test]
fn is_created_empty() {
    let list = DoublyLinkedList::<i32>::new();
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert_eq!(list.front(), Err(ListError::EmptyCollectionAccess));
    assert_eq!(list.back(), Err(ListError::EmptyCollectionAccess));
}

#[test]
fn push_back_pushes_on_back() {
    let mut list = DoublyLinkedList::new();
    list.push_back(42);
    assert_eq!(list.len(), 1);
    assert_eq!(list.get(0), Ok(&42));
    list.push_back(1963);
    assert_eq!(list.get(0), Ok(&42));
    assert_eq!(list.get(1), Ok(&1963));
    assert_eq!(list.len(), 2);
}

#[test]
fn push_front_pushes_on_front() {
    let mut list = DoublyLinkedList::new();
    list.push_front(42);
    assert_eq!(list.get(0), Ok(&42));
    list.push_front(1963);
    assert_eq!(list.get(0), Ok(&1963));
    assert_eq!(list.get(1), Ok(&42));
    assert_eq!(list.len(), 2);
}

#[test]
fn positional_insert() {
    let mut list = list_of(&[42, 13]);
    list.insert(1, 1963).unwrap();
    assert_eq!(list.get(0), Ok(&42));
    assert_eq!(list.get(1), Ok(&1963));
    assert_eq!(list.get(2), Ok(&13));
    assert_eq!(list.len(), 3);
}

#[test]
fn pop_back_and_pop_front() {
    let mut list = list_of(&[42, 1963]);
    assert_eq!(list.pop_back(), Ok(1963));
    assert_eq!(list.len(), 1);

    let mut list = list_of(&[42, 1963]);
    assert_eq!(list.pop_front(), Ok(42));
    assert_eq!(list.len(), 1);
    assert_eq!(list.front(), Ok(&1963));
    assert_eq!(list.back(), Ok(&1963));
}

#[test]
fn positional_remove() {
    let mut list = list_of(&[42, 1963, 13]);
    assert_eq!(list.remove(1), Ok(1963));
    assert_eq!(list.len(), 2);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![42, 13]);
}

#[test]
fn access_out_of_range() {
    let mut list = DoublyLinkedList::<i32>::new();
    let err = ListError::IndexOutOfRange { index: 13, len: 0 };
    assert_eq!(list.get(13), Err(err));
    assert_eq!(list.insert(13, 42), Err(err));
    assert_eq!(list.remove(13), Err(err));
    assert!(list.is_empty());
}

#[test]
fn boundaries_with_no_problems() {
    let mut list = DoublyLinkedList::new();
    list.insert(0, 42).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.get(0), Ok(&42));
    assert_eq!(list.remove(0), Ok(42));
    assert_eq!(list.len(), 0);
}

#[test]
fn removals_from_empty_fail() {
    let mut list = DoublyLinkedList::<i32>::new();
    assert_eq!(list.pop_back(), Err(ListError::EmptyCollectionAccess));
    assert_eq!(list.pop_front(), Err(ListError::EmptyCollectionAccess));
    assert!(matches!(
        list.remove(13),
        Err(ListError::IndexOutOfRange { index: 13, len: 0 })
    ));
}

#[test]
fn equality_clone_and_move() {
    let list = list_of(&[42, 1963, 13]);
    let other = list_of(&[42, 1963, 13]);
    assert_eq!(list, other);
    assert_ne!(list, list_of(&[42, 13, 1963]));
    assert_ne!(list, list_of(&[42, 1963]));

    let copy = list.clone();
    assert_eq!(list, copy);

    let mut source = list_of(&[42, 1963, 13]);
    let moved = std::mem::take(&mut source);
    assert_eq!(source.len(), 0);
    assert_eq!(moved, list);
}

#[test]
fn swap_exchanges_contents() {
    let mut a = list_of(&[1, 2]);
    let mut b = list_of(&[3]);
    a.swap(&mut b);
    assert_eq!(a, list_of(&[3]));
    assert_eq!(b, list_of(&[1, 2]));
}

#[test]
fn forward_and_backward_iteration() {
    let list = list_of(&[42, 1963, 13]);
    let mut it = list.iter();
    assert_eq!(it.next(), Some(&42));
    assert_eq!(it.next(), Some(&1963));
    assert_eq!(it.next(), Some(&13));
    assert_eq!(it.next(), None);

    let mut back = list.iter().rev();
    assert_eq!(back.next(), Some(&13));
    assert_eq!(back.next(), Some(&1963));
    assert_eq!(back.next(), Some(&42));
    assert_eq!(back.next(), None);

    let mut both = list.iter();
    assert_eq!(both.next(), Some(&42));
    assert_eq!(both.next_back(), Some(&13));
    assert_eq!(both.next(), Some(&1963));
    assert_eq!(both.next_back(), None);
}

#[test]
fn sort_is_ordered_properly() {
    let mut list = list_of(&[42, 1963, 13]);
    list.sort();
    let items: Vec<i32> = list.iter().copied().collect();
    assert!(items.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(items, vec![13, 42, 1963]);
}

#[test]
fn get_mut_and_clear() {
    let mut list = list_of(&[1, 2, 3]);
    *list.get_mut(1).unwrap() = 20;
    assert_eq!(list.get(1), Ok(&20));
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.iter().next(), None);
}

#[test]
fn debug_and_serde() {
    let list = list_of(&[3, 1, 2]);
    assert_eq!(format!("{list:?}"), "[3, 1, 2]");

    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[3,1,2]");
    let back: DoublyLinkedList<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, list);
}
