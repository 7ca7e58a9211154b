// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Ids for colours and layers. An id is assigned once, when the entity is created, and
//! is never reused, even after the entity has been removed from the palette. External
//! code that cached an id can therefore never alias a newer entity.
//!
//! The allocator is an explicit object handed to the reducer (see
//! [`crate::PaletteReducer`]) rather than a process wide global, so tests can inject
//! their own deterministic sequence by implementing [`IdAllocator`].

use std::{fmt::{Display, Formatter},
          sync::atomic::{AtomicU64, Ordering}};

use strum_macros::{AsRefStr, Display as StrumDisplay};

use crate::InlineString;

/// The kind of entity an id is minted for. The string form is the id prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, StrumDisplay)]
pub enum IdPrefix {
    #[strum(serialize = "col")]
    Colour,
    #[strum(serialize = "hue")]
    Hue,
    #[strum(serialize = "shade")]
    Shade,
}

/// Opaque unique identifier, eg: `col-12`, `hue-3`, `shade-4`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(InlineString);

impl EntityId {
    #[must_use]
    pub fn new(prefix: IdPrefix, number: u64) -> Self {
        use std::fmt::Write as _;
        let mut acc = InlineString::new();
        _ = write!(acc, "{prefix}-{number}");
        Self(acc)
    }

    #[must_use]
    pub fn as_str(&self) -> &str { self.0.as_str() }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self { Self(value.into()) }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str { self.as_str() }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

/// Mints fresh ids. Takes `&self` so a single allocator can be shared between threads;
/// implementations must never hand out the same id twice.
pub trait IdAllocator {
    fn next_id(&self, prefix: IdPrefix) -> EntityId;
}

/// Race free monotonic counter shared by all prefixes. The first id minted by
/// [`MonotonicIdAllocator::new`] is numbered `1`.
#[derive(Debug)]
pub struct MonotonicIdAllocator {
    counter: AtomicU64,
}

impl Default for MonotonicIdAllocator {
    fn default() -> Self { Self::new() }
}

impl MonotonicIdAllocator {
    #[must_use]
    pub fn new() -> Self { Self::starting_at(1) }

    /// The next id minted will carry `first` as its number.
    #[must_use]
    pub fn starting_at(first: u64) -> Self {
        Self {
            counter: AtomicU64::new(first),
        }
    }

    /// Number that the next call to [`IdAllocator::next_id`] will use.
    #[must_use]
    pub fn peek(&self) -> u64 { self.counter.load(Ordering::SeqCst) }
}

impl IdAllocator for MonotonicIdAllocator {
    /// [`AtomicU64::fetch_add`] returns the **old** value, which is exactly the number
    /// this call owns. A second load would race with other threads.
    fn next_id(&self, prefix: IdPrefix) -> EntityId {
        let number = self.counter.fetch_add(1, Ordering::SeqCst);
        EntityId::new(prefix, number)
    }
}

impl<T: IdAllocator + ?Sized> IdAllocator for &T {
    fn next_id(&self, prefix: IdPrefix) -> EntityId { (**self).next_id(prefix) }
}
