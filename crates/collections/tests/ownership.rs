//! Every byte a table allocates has to come back, checked with a counting allocator.
//!
//! Counting is per thread so tests running side by side do not see each other.

use std::{
    alloc::{GlobalAlloc, Layout, System},
    cell::Cell,
};

use collections::{HashTable, TableError, linked_list::Chain};

struct Counting;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
    // allocations larger than this fail with a null pointer
    static LIMIT: Cell<usize> = const { Cell::new(usize::MAX) };
}

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if LIMIT.try_with(|l| layout.size() > l.get()).unwrap_or(false) {
            return std::ptr::null_mut();
        }
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            let _ = LIVE.try_with(|l| l.set(l.get() + layout.size() as isize));
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        let _ = LIVE.try_with(|l| l.set(l.get() - layout.size() as isize));
    }
}

#[global_allocator]
static GLOBAL: Counting = Counting;

fn live() -> isize {
    LIVE.with(Cell::get)
}

/// Runs `f` with every allocation above `limit` bytes failing
fn with_alloc_limit<R>(limit: usize, f: impl FnOnce() -> R) -> R {
    LIMIT.with(|l| l.set(limit));
    let r = f();
    LIMIT.with(|l| l.set(usize::MAX));
    r
}

fn filled(capacity: usize, n: usize) -> HashTable {
    let mut t = HashTable::create(capacity).unwrap();
    for i in 0..n {
        t.insert(format!("key-{i}"), format!("val-{i}"));
    }
    t
}

#[test]
fn destroy_releases_everything() {
    let before = live();

    let t = filled(8, 100);
    assert!(live() > before);
    t.destroy();

    assert_eq!(live(), before);
}

#[test]
fn drop_releases_everything() {
    let before = live();
    {
        let _t = filled(2, 1_000);
    }
    assert_eq!(live(), before);
}

#[test]
fn remove_releases_entry() {
    let mut t = filled(4, 10);
    let before = live();

    t.insert("short-lived", "value");
    let value = t.remove("short-lived").unwrap();
    assert_eq!(value, "value");
    drop(value);

    assert_eq!(live(), before);
    t.destroy();
}

#[test]
fn failed_remove_allocates_nothing_lasting() {
    let mut t = filled(4, 10);
    let before = live();

    let err = t.remove("missing").unwrap_err();
    drop(err);

    assert_eq!(live(), before);
    t.destroy();
}

#[test]
fn overwrite_releases_old_value() {
    let mut t = filled(4, 10);
    t.insert("k", "first value");
    let before = live();

    let old = t.insert("k", "other value");
    assert_eq!(old.as_deref(), Some("first value"));
    drop(old);

    // same length value, so the footprint is unchanged
    assert_eq!(live(), before);
    t.destroy();
}

#[test]
fn resize_releases_old_table() {
    let mut t = filled(4, 20);
    let before = live();

    t.resize().unwrap();

    // the only growth is the second half of the bucket array,
    // entries are rebuilt one for one and the old array is gone
    let grown = (4 * size_of::<Chain>()) as isize;
    assert_eq!(live() - before, grown);
    assert_eq!(t.len(), 20);

    t.destroy();
}

#[test]
fn failed_resize_leaves_table_unchanged() {
    let mut t = filled(4, 20);
    let chains: Vec<usize> = (0..4).map(|i| t.chain_len(i)).collect();
    let before = live();

    // the doubled bucket array is the first allocation of a resize
    let doubled = 8 * size_of::<Chain>();
    let res = with_alloc_limit(doubled - 1, || t.resize());

    assert_eq!(res, Err(TableError::OutOfMemory { capacity: 8 }));
    assert_eq!(live(), before);
    assert_eq!(t.capacity(), 4);
    assert_eq!(t.len(), 20);
    assert_eq!((0..4).map(|i| t.chain_len(i)).collect::<Vec<_>>(), chains);
    for i in 0..20 {
        assert_eq!(t.retrieve(&format!("key-{i}")), Some(format!("val-{i}").as_str()));
    }

    // with memory back the same table still grows
    t.resize().unwrap();
    assert_eq!(t.capacity(), 8);
    assert_eq!(t.len(), 20);
    t.destroy();
}

#[test]
fn create_reports_allocation_failure() {
    let res = with_alloc_limit(0, || HashTable::create(16));
    assert_eq!(res.unwrap_err(), TableError::OutOfMemory { capacity: 16 });
}
