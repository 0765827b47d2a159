use std::{borrow::Borrow, collections::HashSet};

use fast_avl::avl_map::DefaultAvlMap;
use rand::{seq::SliceRandom, thread_rng, Rng};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn avl_map_works() {
    init_logging();
    let mut tree = DefaultAvlMap::<i32, i32>::new();

    for i in 0..1000 {
        tree.put(i, i + 1);
    }

    for i in 0..1000 {
        assert_eq!(tree.get(&i), Some(&(i + 1)));
    }

    assert_eq!(tree.get(&12), Some(&13));
    assert_eq!(tree.remove(&12), Some(13));
    assert!(tree.get(&12).is_none());
    assert_eq!(tree.put(12, 24), None);
    assert_eq!(tree.get(&12), Some(&24));

    for i in 0..1000 {
        if i == 12 {
            assert_eq!(tree.get(&i), Some(&24));
        } else {
            assert_eq!(tree.get(&i), Some(&(i + 1)));
        }
    }
}

#[test]
fn put_overwrites_existing_key() {
    let mut tree = DefaultAvlMap::<i32, i32>::new();

    for i in 0..100 {
        assert_eq!(tree.put(i, i), None);
    }
    assert_eq!(tree.len(), 100);
    let height = tree.height();

    for i in 0..100 {
        assert_eq!(tree.put(i, i * 10), Some(i));
    }

    // overwriting never restructures the tree
    assert_eq!(tree.len(), 100);
    assert_eq!(tree.height(), height);
    for i in 0..100 {
        assert_eq!(tree.get(&i), Some(&(i * 10)));
    }
}

#[test]
fn works_on_pointer_types() {
    let mut tree = DefaultAvlMap::<String, String>::new();
    assert_eq!(tree.get(&"test".into()), None);
    tree.put("test".into(), "test2".into());
    assert_eq!(tree.get(&"test".into()), Some(&("test2".to_string())));
    for i in 0..100 {
        tree.put(i.to_string(), (i + 1).to_string());
    }
    for i in 0..100 {
        assert_eq!(
            tree.get(i.to_string().borrow()),
            Some((i + 1).to_string().borrow()),
        );
    }
}

#[test]
fn random_op_test() {
    init_logging();
    let mut tree = DefaultAvlMap::<i32, i32>::new();

    let n = 50000;

    let mut rng = thread_rng();

    let mut keys = HashSet::new();
    while keys.len() < n {
        keys.insert(rng.gen::<u16>() as i32);
    }
    let mut keys: Vec<_> = keys.into_iter().collect();

    for &key in keys.iter() {
        tree.put(key, key + 1);
    }

    for &key in keys.iter() {
        assert_eq!(tree.get(&key), Some(&(key + 1)));
    }

    keys.shuffle(&mut rng);
    let removed_keys = keys.split_off(n / 2);
    for &key in removed_keys.iter() {
        assert_eq!(tree.remove(&key), Some(key + 1));
    }

    for &key in removed_keys.iter() {
        assert!(tree.get(&key).is_none());
    }

    for &key in keys.iter() {
        assert_eq!(tree.get(&key), Some(&(key + 1)));
    }

    // the surviving keys come back in sorted order
    keys.sort_unstable();
    let ascended: Vec<i32> = tree.iter().map(|(&k, _)| k).collect();
    assert_eq!(ascended, keys);
}

#[test]
fn ascend_and_descend_visit_in_key_order() {
    // worst case for an unbalanced BST: strictly ascending insertion
    let mut tree = DefaultAvlMap::<i32, i32>::new();
    let elems: Vec<i32> = (1..=10).collect();
    for &i in elems.iter() {
        tree.put(i, i);
    }

    let mut ascend_result = Vec::new();
    let mut descend_result = Vec::new();

    tree.ascend(|&k, _| ascend_result.push(k));
    tree.descend(|&k, _| descend_result.push(k));

    assert_eq!(ascend_result, elems);
    let reversed: Vec<i32> = elems.iter().rev().copied().collect();
    assert_eq!(descend_result, reversed);
}

#[test]
fn descend_is_exact_reverse_of_ascend() {
    let mut rng = thread_rng();
    let mut tree = DefaultAvlMap::<i32, i32>::new();
    for _ in 0..500 {
        let key = rng.gen::<u16>() as i32;
        tree.put(key, key);
    }

    let forward: Vec<i32> = tree.iter().map(|(&k, _)| k).collect();
    let mut backward: Vec<i32> = tree.iter_rev().map(|(&k, _)| k).collect();
    backward.reverse();

    assert!(forward.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(forward, backward);
}

#[test]
fn traversal_is_idempotent() {
    let mut tree = DefaultAvlMap::<i32, i32>::new();
    for i in [5, 3, 8, 1, 4, 7, 9] {
        tree.put(i, i * 2);
    }

    let first: Vec<(i32, i32)> = tree.iter().map(|(&k, &v)| (k, v)).collect();
    let second: Vec<(i32, i32)> = tree.iter().map(|(&k, &v)| (k, v)).collect();
    assert_eq!(first, second);

    let first_rev: Vec<(i32, i32)> = tree.iter_rev().map(|(&k, &v)| (k, v)).collect();
    let second_rev: Vec<(i32, i32)> = tree.iter_rev().map(|(&k, &v)| (k, v)).collect();
    assert_eq!(first_rev, second_rev);
}

#[test]
fn empty_map_traversals_visit_nothing() {
    let tree = DefaultAvlMap::<i32, i32>::new();

    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.first(), None);
    assert_eq!(tree.last(), None);

    let mut visited = 0;
    tree.ascend(|_, _| visited += 1);
    tree.descend(|_, _| visited += 1);
    assert_eq!(visited, 0);
}

#[test]
fn single_entry_map() {
    let mut tree = DefaultAvlMap::<i32, i32>::new();
    tree.put(42, 1);

    assert_eq!(tree.len(), 1);
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.first(), Some((&42, &1)));
    assert_eq!(tree.last(), Some((&42, &1)));

    let ascended: Vec<(i32, i32)> = tree.iter().map(|(&k, &v)| (k, v)).collect();
    let descended: Vec<(i32, i32)> = tree.iter_rev().map(|(&k, &v)| (k, v)).collect();
    assert_eq!(ascended, vec![(42, 1)]);
    assert_eq!(descended, vec![(42, 1)]);
}

#[test]
fn get_mut_writes_through() {
    let mut tree = DefaultAvlMap::<i32, i32>::new();
    for i in 0..10 {
        tree.put(i, 0);
    }

    assert!(tree.get_mut(&100).is_none());

    *tree.get_mut(&7).unwrap() = 70;
    assert_eq!(tree.get(&7), Some(&70));
}

#[test]
fn clear_empties_the_map() {
    let mut tree = DefaultAvlMap::<i32, i32>::new();
    for i in 0..100 {
        tree.put(i, i);
    }

    tree.clear();

    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.get(&50), None);

    // reusable after clearing
    tree.put(1, 2);
    assert_eq!(tree.get(&1), Some(&2));
}
