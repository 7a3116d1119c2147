//! Lock helpers that recover from poisoning.
//!
//! A user closure or validator that panics while a lock is held poisons it.
//! Fields compute the next value and its errors before storing either, so
//! the protected pair is still the last consistent one and the guard is
//! recovered instead of propagating the panic.

use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| {
        log::warn!("[sync] recovering poisoned read lock");
        poisoned.into_inner()
    })
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| {
        log::warn!("[sync] recovering poisoned write lock");
        poisoned.into_inner()
    })
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        log::warn!("[sync] recovering poisoned mutex");
        poisoned.into_inner()
    })
}
