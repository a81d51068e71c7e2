use super::repo::DeleteResult;
use std::sync::Mutex;
use studydesk_domain::{Entity, ID};

/// Useful functions for creating inmemory repositories

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    collection.push(val.clone());
}

/// Inserts the values whose key is not already present, in one critical
/// section. Returns the inserted values.
pub fn insert_unique_by<T: Clone, K: PartialEq, F: Fn(&T) -> K>(
    vals: &[T],
    collection: &Mutex<Vec<T>>,
    key: F,
) -> Vec<T> {
    let mut collection = collection.lock().unwrap();
    let mut inserted = Vec::new();
    for val in vals {
        let val_key = key(val);
        if collection.iter().any(|existing| key(existing) == val_key) {
            continue;
        }
        collection.push(val.clone());
        inserted.push(val.clone());
    }
    inserted
}

pub fn save<T: Clone + Entity>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    if let Some(existing) = collection.iter_mut().find(|e| e.id() == val.id()) {
        *existing = val.clone();
    }
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let collection = collection.lock().unwrap();
    collection.iter().find(|e| e.id() == val_id).cloned()
}

pub fn find_by<T: Clone + Entity, F: FnMut(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    mut compare: F,
) -> Vec<T> {
    let collection = collection.lock().unwrap();
    let mut items = Vec::new();
    for item in collection.iter() {
        if compare(item) {
            items.push(item.clone());
        }
    }
    items
}

pub fn delete<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let mut collection = collection.lock().unwrap();
    let index = collection.iter().position(|e| e.id() == val_id)?;
    Some(collection.remove(index))
}

pub fn delete_by<T: Clone + Entity, F: Fn(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    compare: F,
) -> DeleteResult {
    DeleteResult {
        deleted_count: find_and_delete_by(collection, compare).len() as i64,
    }
}

pub fn find_and_delete_by<T: Clone + Entity, F: Fn(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    compare: F,
) -> Vec<T> {
    let mut collection = collection.lock().unwrap();
    let mut deleted_items = Vec::new();
    let mut kept = Vec::with_capacity(collection.len());
    for item in collection.drain(..) {
        if compare(&item) {
            deleted_items.push(item);
        } else {
            kept.push(item);
        }
    }
    *collection = kept;
    deleted_items
}
