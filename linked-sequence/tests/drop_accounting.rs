// Every element is dropped exactly once, front to back.

use std::cell::RefCell;
use std::rc::Rc;

use linked_sequence::LinkedSequence;

/// Records its id in a shared log when dropped.
struct Tracked {
    id: u32,
    log: Rc<RefCell<Vec<u32>>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.borrow_mut().push(self.id);
    }
}

fn tracked_sequence(ids: &[u32], log: &Rc<RefCell<Vec<u32>>>) -> LinkedSequence<Tracked> {
    ids.iter()
        .map(|&id| Tracked {
            id,
            log: Rc::clone(log),
        })
        .collect()
}

#[test]
fn test_drop_releases_every_node_front_to_back() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let seq = tracked_sequence(&[1, 2, 3, 4], &log);
    drop(seq);
    assert_eq!(*log.borrow(), vec![1, 2, 3, 4]);
}

#[test]
fn test_clear_releases_every_node_once() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut seq = tracked_sequence(&[5, 6, 7], &log);
    seq.clear();
    assert_eq!(*log.borrow(), vec![5, 6, 7]);

    seq.clear();
    drop(seq);
    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn test_drop_order_follows_links_after_edits() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut seq = tracked_sequence(&[2, 3], &log);
    seq.push_front(Tracked {
        id: 1,
        log: Rc::clone(&log),
    });
    let first = seq.begin();
    let removed = seq.erase_after(first);
    assert_eq!(seq.get(removed).map(|t| t.id), Some(3));
    assert_eq!(*log.borrow(), vec![2]);

    drop(seq);
    assert_eq!(*log.borrow(), vec![2, 1, 3]);
}

#[test]
fn test_swap_and_clone_from_do_not_leak() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut a = tracked_sequence(&[1, 2], &log);
    let mut b = tracked_sequence(&[3], &log);
    a.swap(&mut b);
    assert!(log.borrow().is_empty());

    drop(a);
    assert_eq!(*log.borrow(), vec![3]);
    drop(b);
    assert_eq!(*log.borrow(), vec![3, 1, 2]);
}

#[test]
fn test_into_iter_drops_the_rest() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let seq = tracked_sequence(&[1, 2, 3], &log);
    let mut iter = seq.into_iter();
    let first = iter.next().map(|t| t.id);
    assert_eq!(first, Some(1));
    drop(iter);
    assert_eq!(*log.borrow(), vec![1, 2, 3]);
}

#[test]
fn test_rc_counts_return_to_one() {
    let shared = Rc::new(0u8);
    let mut seq: LinkedSequence<Rc<u8>> = (0..10).map(|_| Rc::clone(&shared)).collect();
    let copy = seq.clone();
    assert_eq!(Rc::strong_count(&shared), 21);

    let mut target = LinkedSequence::from([Rc::clone(&shared)]);
    target.clone_from(&copy);
    assert_eq!(Rc::strong_count(&shared), 31);

    seq.clear();
    drop(copy);
    drop(target);
    assert_eq!(Rc::strong_count(&shared), 1);
}
