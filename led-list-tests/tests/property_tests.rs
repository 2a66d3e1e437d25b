//! Property Tests für die Listen-Invarianten
//!
//! Vergleicht jede Operationsfolge mit einem `VecDeque` als Referenzmodell.

use std::collections::VecDeque;

use led_list_core::{LedList, ListError};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    PushFront(u8),
    PushBack(u8),
    PopFront,
    PopBack,
    InsertAt(usize, u8),
    RemoveAt(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::PushFront),
        any::<u8>().prop_map(Op::PushBack),
        Just(Op::PopFront),
        Just(Op::PopBack),
        (0usize..12, any::<u8>()).prop_map(|(i, h)| Op::InsertAt(i, h)),
        (0usize..12).prop_map(Op::RemoveAt),
    ]
}

fn apply(list: &mut LedList<u8>, model: &mut VecDeque<u8>, op: &Op) {
    match *op {
        Op::PushFront(h) => {
            list.push_front(h).unwrap();
            model.push_front(h);
        }
        Op::PushBack(h) => {
            list.push_back(h).unwrap();
            model.push_back(h);
        }
        Op::PopFront => {
            list.pop_front();
            model.pop_front();
        }
        Op::PopBack => {
            list.pop_back();
            model.pop_back();
        }
        Op::InsertAt(i, h) => {
            let result = list.insert_at(i, h);
            if i < model.len() {
                assert_eq!(result, Ok(()));
                model.insert(i, h);
            } else {
                assert_eq!(result, Err(ListError::IndexOutOfRange));
            }
        }
        Op::RemoveAt(i) => {
            let result = list.remove_at(i);
            if i < model.len() {
                assert_eq!(result, Ok(()));
                model.remove(i);
            } else {
                assert_eq!(result, Err(ListError::IndexOutOfRange));
            }
        }
    }
}

fn build(handles: &[u8]) -> LedList<u8> {
    let mut list = LedList::new();
    for &h in handles {
        list.push_back(h).unwrap();
    }
    list
}

fn contents(list: &LedList<u8>) -> Vec<u8> {
    list.handles().flatten().collect()
}

proptest! {
    /// Länge, Reihenfolge und Erreichbarkeit jedes Index stimmen nach
    /// beliebigen Operationsfolgen mit dem Referenzmodell überein.
    #[test]
    fn list_matches_model(ops in proptest::collection::vec(arb_op(), 0..64)) {
        let mut list = LedList::new();
        let mut model = VecDeque::new();

        for op in &ops {
            apply(&mut list, &mut model, op);
        }

        prop_assert_eq!(list.len(), model.len());
        prop_assert_eq!(contents(&list), model.iter().copied().collect::<Vec<_>>());
        prop_assert_eq!(list.begin().is_none(), model.is_empty());
        prop_assert_eq!(list.last().is_none(), model.is_empty());

        let len = list.len();
        for i in 0..len {
            let target = list.at(i);
            prop_assert!(target.is_some());

            let mut forward = list.begin();
            for _ in 0..i {
                forward = forward.and_then(|n| n.next());
            }
            prop_assert_eq!(forward, target);

            let mut backward = list.last();
            for _ in 0..(len - 1 - i) {
                backward = backward.and_then(|n| n.previous());
            }
            prop_assert_eq!(backward, target);
        }
        prop_assert!(list.at(len).is_none());
    }

    /// Anzahl = ausgeführte Pushes − tatsächlich entfernte Knoten
    #[test]
    fn push_pop_count(ops in proptest::collection::vec(any::<Option<bool>>(), 0..64)) {
        let mut list = LedList::new();
        let mut expected = 0usize;

        for op in ops {
            match op {
                Some(true) => {
                    list.push_back(0u8).unwrap();
                    expected += 1;
                }
                Some(false) => {
                    list.push_front(0u8).unwrap();
                    expected += 1;
                }
                None => {
                    list.pop_back();
                    expected = expected.saturating_sub(1);
                }
            }
        }

        prop_assert_eq!(list.len(), expected);
        prop_assert_eq!(list.iter().count(), expected);
    }

    /// insert_at(i, h) gefolgt von remove_at(i) stellt die Liste wieder her
    #[test]
    fn insert_then_remove_restores(
        handles in proptest::collection::vec(any::<u8>(), 1..16),
        index in any::<prop::sample::Index>(),
        extra in any::<u8>(),
    ) {
        let mut list = build(&handles);
        let i = index.index(handles.len());

        list.insert_at(i, extra).unwrap();
        prop_assert_eq!(list.len(), handles.len() + 1);
        prop_assert_eq!(list.at(i).and_then(|n| n.handle()), Some(extra));

        list.remove_at(i).unwrap();
        prop_assert_eq!(contents(&list), handles);
    }

    /// push_back gefolgt von pop_back stellt die Liste wieder her
    #[test]
    fn push_back_then_pop_back_restores(
        handles in proptest::collection::vec(any::<u8>(), 0..16),
        extra in any::<u8>(),
    ) {
        let mut list = build(&handles);
        list.push_back(extra).unwrap();
        list.pop_back();

        prop_assert_eq!(list.len(), handles.len());
        prop_assert_eq!(contents(&list), handles);
    }

    /// resize erreicht immer die verlangte Größe und behält den Präfix
    #[test]
    fn resize_reaches_requested_size(
        handles in proptest::collection::vec(any::<u8>(), 0..16),
        new_size in 0usize..24,
    ) {
        let mut list = build(&handles);
        list.resize(new_size).unwrap();

        prop_assert_eq!(list.len(), new_size);
        let kept = handles.len().min(new_size);
        let prefix: Vec<Option<u8>> = list.handles().take(kept).collect();
        let expected: Vec<Option<u8>> = handles[..kept].iter().copied().map(Some).collect();
        prop_assert_eq!(prefix, expected);
        prop_assert!(list.handles().skip(kept).all(|h| h.is_none()));
    }
}
