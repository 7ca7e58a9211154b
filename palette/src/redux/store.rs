// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter};

use crate::{IdAllocator, MonotonicIdAllocator, PaletteAction, PaletteConfig, PaletteReducer,
            PaletteResult, PaletteState, Reducer};

/// Subscriber function, called with the new snapshot after every dispatch.
pub type SubscriberFn = dyn Fn(&PaletteState) + Send + Sync + 'static;

/// Holds the current [`PaletteState`] snapshot, the [`PaletteConfig`], and the id
/// allocator. Actions are applied strictly in dispatch order, each one producing a whole
/// new snapshot before the next is considered.
///
/// Snapshots handed out by [`PaletteStore::get_state`] are never mutated; clone one to
/// keep it around after the next dispatch.
pub struct PaletteStore<I: IdAllocator = MonotonicIdAllocator> {
    state: PaletteState,
    config: PaletteConfig,
    ids: I,
    subscribers: Vec<Box<SubscriberFn>>,
}

impl Default for PaletteStore {
    fn default() -> Self {
        Self::from_parts(PaletteConfig::default(), MonotonicIdAllocator::new())
    }
}

impl PaletteStore {
    /// Seed a store from `config`, minting ids from `1`.
    ///
    /// # Errors
    ///
    /// Returns the error from [`PaletteConfig::validate`].
    pub fn try_new(config: PaletteConfig) -> PaletteResult<Self> {
        Self::try_new_with_ids(config, MonotonicIdAllocator::new())
    }
}

impl<I: IdAllocator> PaletteStore<I> {
    /// Seed a store from `config`, minting every id (including the seed grid's) from
    /// `ids`.
    ///
    /// # Errors
    ///
    /// Returns the error from [`PaletteConfig::validate`].
    pub fn try_new_with_ids(config: PaletteConfig, ids: I) -> PaletteResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, ids))
    }

    fn from_parts(config: PaletteConfig, ids: I) -> Self {
        let state = PaletteState::new(&config, &ids);
        Self {
            state,
            config,
            ids,
            subscribers: Vec::new(),
        }
    }

    #[must_use]
    pub fn get_state(&self) -> &PaletteState { &self.state }

    #[must_use]
    pub fn get_config(&self) -> &PaletteConfig { &self.config }

    #[must_use]
    pub fn get_ids(&self) -> &I { &self.ids }

    /// Run `action` through [`PaletteReducer`], swap in the new snapshot, and notify the
    /// subscribers in the order they were added.
    pub fn dispatch_action(&mut self, action: PaletteAction) -> &PaletteState {
        let reducer = PaletteReducer::new(&self.config, &self.ids);
        self.state = reducer.run(&action, &self.state);
        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }
        &self.state
    }

    pub fn add_subscriber(
        &mut self,
        subscriber_fn: impl Fn(&PaletteState) + Send + Sync + 'static,
    ) -> &mut Self {
        self.subscribers.push(Box::new(subscriber_fn));
        self
    }

    pub fn clear_subscribers(&mut self) -> &mut Self {
        self.subscribers.clear();
        self
    }
}

impl<I: IdAllocator + Debug> Debug for PaletteStore<I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaletteStore")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("ids", &self.ids)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
