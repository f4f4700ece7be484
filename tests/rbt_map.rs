use std::{borrow::Borrow, collections::HashSet};

use fast_llrb::rbt_map::DefaultRbtMap;
use rand::{seq::SliceRandom, thread_rng, Rng};

#[test]
fn rbt_map_works() {
    let mut tree = DefaultRbtMap::<i32, i32>::new();

    for i in 0..1000 {
        tree.insert(i, i + 1);
    }

    for i in 0..1000 {
        assert_eq!(tree.get(&i), Some(&(i + 1)));
    }

    assert_eq!(tree.get(&12), Some(&13));
    assert_eq!(tree.remove(&12), Some(13));
    assert!(tree.get(&12).is_none());
    assert_eq!(tree.insert(12, 24), None);
    assert_eq!(tree.get(&12), Some(&24));

    for i in 0..1000 {
        if i == 12 {
            assert_eq!(tree.get(&i), Some(&24));
        } else {
            assert_eq!(tree.get(&i), Some(&(i + 1)));
        }
    }
    assert!(tree.tree().verify());
}

#[test]
fn works_on_pointer_types() {
    let mut tree = DefaultRbtMap::<String, String>::new();
    assert_eq!(tree.get(&"test".into()), None);
    tree.insert("test".into(), "test2".into());
    assert_eq!(tree.get(&"test".into()), Some(&("test2".to_string())));
    for i in 0..100 {
        tree.insert(i.to_string(), (i + 1).to_string());
    }
    for i in 0..100 {
        assert_eq!(
            tree.get(i.to_string().borrow()),
            Some((i + 1).to_string().borrow()),
        );
    }
    // lexicographic order
    assert_eq!(tree.first_key_value().map(|(k, _)| k.as_str()), Some("0"));
    assert_eq!(tree.last_key_value().map(|(k, _)| k.as_str()), Some("test"));
}

#[test]
fn random_op_test() {
    let mut tree = DefaultRbtMap::<i32, i32>::new();

    let n = 50000;

    let mut rng = thread_rng();

    let mut keys = HashSet::new();
    while keys.len() < n {
        keys.insert(rng.gen::<u16>() as i32);
    }
    let mut keys: Vec<_> = keys.into_iter().collect();

    for &key in keys.iter() {
        tree.insert(key, key + 1);
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
    assert_eq!(tree.len(), n - n / 2);
    assert!(tree.tree().verify());
}

#[test]
fn pop_and_select() {
    let mut tree: DefaultRbtMap<u32, char> = ('a'..='j')
        .enumerate()
        .map(|(i, c)| (i as u32, c))
        .collect();
    assert_eq!(tree.len(), 10);
    assert_eq!(tree.select(3), Some((&3, &'d')));
    assert_eq!(tree.select(10), None);
    assert_eq!(tree.rank(&7), 7);

    assert_eq!(tree.pop_first(), Some((0, 'a')));
    assert_eq!(tree.pop_last(), Some((9, 'j')));
    assert_eq!(tree.len(), 8);

    let rest: Vec<_> = (&tree).into_iter().map(|(_, c)| *c).collect();
    assert_eq!(rest, "bcdefghi".chars().collect::<Vec<_>>());

    *tree.get_mut(&4).unwrap() = 'E';
    assert_eq!(tree.get(&4), Some(&'E'));
    assert_eq!(format!("{:?}", tree).matches(':').count(), 8);

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.pop_first(), None);
    assert_eq!(tree.pop_last(), None);
}

#[test]
fn maps_compare_by_content() {
    let a: DefaultRbtMap<i32, i32> = (0..50).map(|i| (i, i * i)).collect();
    let mut b = DefaultRbtMap::<i32, i32>::default();
    b.extend((0..50).rev().map(|i| (i, i * i)));
    assert!(a == b);
    b.insert(3, 0);
    assert!(a != b);
}
