//! # Fund store
//!
//! Funds are addressed by a `u64` id handed out from a single counter. Ids
//! start at 0, are never reused, and a slot once written is never removed;
//! only its standing changes.
//!
//! Backends implement [`FundStore`] over their host storage. [`FundTable`]
//! is the in-memory arena used for tests and off-chain replicas.

use crate::Error;

pub trait FundStore {
    type Record;

    /// Id the next successful [`FundStore::allocate`] will assign.
    fn next_id(&self) -> u64;

    /// Assign the next id, store `build(id)` under it and advance the counter.
    fn allocate<F>(&mut self, build: F) -> Result<u64, Error>
    where
        F: FnOnce(u64) -> Self::Record;

    fn get(&self, id: u64) -> Result<Self::Record, Error>;

    /// Overwrite an existing record. Fails with `FundNotFound` for unallocated ids.
    fn put(&mut self, id: u64, record: Self::Record) -> Result<(), Error>;
}

/// Compute the counter value following `id`.
pub fn advance(id: u64) -> Result<u64, Error> {
    id.checked_add(1).ok_or(Error::StoreExhausted)
}

#[cfg(feature = "alloc")]
pub use table::FundTable;

#[cfg(feature = "alloc")]
mod table {
    use alloc::vec::Vec;

    use super::{advance, FundStore};
    use crate::Error;

    /// Vec-backed arena; the id is the index.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct FundTable<R> {
        records: Vec<R>,
    }

    impl<R> Default for FundTable<R> {
        fn default() -> Self {
            FundTable {
                records: Vec::new(),
            }
        }
    }

    impl<R> FundTable<R> {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn len(&self) -> usize {
            self.records.len()
        }

        pub fn is_empty(&self) -> bool {
            self.records.is_empty()
        }

        pub fn iter(&self) -> impl Iterator<Item = (u64, &R)> {
            self.records.iter().enumerate().map(|(i, r)| (i as u64, r))
        }
    }

    impl<R: Clone> FundStore for FundTable<R> {
        type Record = R;

        fn next_id(&self) -> u64 {
            self.records.len() as u64
        }

        fn allocate<F>(&mut self, build: F) -> Result<u64, Error>
        where
            F: FnOnce(u64) -> R,
        {
            let id = self.next_id();
            advance(id)?;
            self.records.push(build(id));
            Ok(id)
        }

        fn get(&self, id: u64) -> Result<R, Error> {
            usize::try_from(id)
                .ok()
                .and_then(|i| self.records.get(i))
                .cloned()
                .ok_or(Error::FundNotFound)
        }

        fn put(&mut self, id: u64, record: R) -> Result<(), Error> {
            let slot = usize::try_from(id)
                .ok()
                .and_then(|i| self.records.get_mut(i))
                .ok_or(Error::FundNotFound)?;
            *slot = record;
            Ok(())
        }
    }
}
