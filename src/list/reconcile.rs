//! Keyed enter/exit bookkeeping with a delayed purge.

use rustc_hash::{FxHashMap, FxHashSet};
use web_time::Instant;

use crate::options::ListOptions;
use crate::transition::DirectionalConfig;

/// Stable identity of a list item.
pub trait Keyed {
    /// Identity key; equal keys are the same item.
    fn key(&self) -> &str;
}

impl Keyed for String {
    fn key(&self) -> &str {
        self
    }
}

impl Keyed for &str {
    fn key(&self) -> &str {
        self
    }
}

/// Lifecycle tag of a displayed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// Present in the latest collection; plays its entrance.
    Entering,
    /// Removed; plays its exit until purged.
    Exiting,
}

/// One item in display order with the transition it should run.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayItem<'a, T> {
    /// The item.
    pub item: &'a T,
    /// Enter or exit.
    pub lifecycle: Lifecycle,
    /// Position in display order.
    pub index: usize,
    /// Directional move for this item, staggered by `index`.
    pub transition: DirectionalConfig,
}

/// Reconciles successive snapshots of an identity-keyed collection.
///
/// Every item in the latest snapshot is tagged [`Lifecycle::Entering`],
/// including items that were already shown, so each update replays the
/// whole cascade. Items that dropped out stay rendered as
/// [`Lifecycle::Exiting`] until the purge deadline passes. A single
/// deadline is kept: each update cancels the previous one and re-arms it
/// for every item still exiting.
#[derive(Debug, Clone)]
pub struct ListReconciler<T> {
    options: ListOptions,
    current: Vec<T>,
    exiting: Vec<T>,
    tags: FxHashMap<String, Lifecycle>,
    purge_at: Option<Instant>,
    generation: u64,
}

impl<T: Keyed + Clone> ListReconciler<T> {
    /// Empty reconciler.
    #[must_use]
    pub fn new(options: ListOptions) -> Self {
        Self {
            options,
            current: Vec::new(),
            exiting: Vec::new(),
            tags: FxHashMap::default(),
            purge_at: None,
            generation: 0,
        }
    }

    /// Apply a new snapshot at `now`.
    pub fn update(&mut self, items: Vec<T>, now: Instant) {
        let incoming: FxHashSet<&str> =
            items.iter().map(Keyed::key).collect();

        // Revived items leave the pending purge.
        self.exiting.retain(|item| !incoming.contains(item.key()));

        for item in self.current.drain(..) {
            if incoming.contains(item.key()) {
                continue;
            }
            log::debug!("list item {:?} exiting", item.key());
            let _ = self.tags.insert(item.key().to_owned(), Lifecycle::Exiting);
            self.exiting.push(item);
        }
        for item in &items {
            let _ = self.tags.insert(item.key().to_owned(), Lifecycle::Entering);
        }
        self.current = items;
        self.generation += 1;

        self.purge_at = if self.exiting.is_empty() {
            None
        } else {
            Some(now + self.options.grace())
        };
    }

    /// Purge exiting items once the deadline has passed. Returns the
    /// purged keys.
    pub fn tick(&mut self, now: Instant) -> Vec<String> {
        match self.purge_at {
            Some(deadline) if now >= deadline => {}
            _ => return Vec::new(),
        }
        self.purge_at = None;
        let purged: Vec<String> = self
            .exiting
            .drain(..)
            .map(|item| item.key().to_owned())
            .collect();
        for key in &purged {
            let _ = self.tags.remove(key);
        }
        log::debug!("purged {} exiting list items", purged.len());
        purged
    }

    /// Tag of the item with `key`, if it is displayed.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<Lifecycle> {
        self.tags.get(key).copied()
    }

    /// Items of the latest snapshot.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.current
    }

    /// Removed items still rendered.
    #[must_use]
    pub fn exiting(&self) -> &[T] {
        &self.exiting
    }

    /// When the exiting items will be purged.
    #[must_use]
    pub fn pending_purge(&self) -> Option<Instant> {
        self.purge_at
    }

    /// Incremented by every update; use as the re-key for entrance
    /// animations so they replay.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current items in order, then exiting items, each with its
    /// directional transition.
    #[must_use]
    pub fn display_items(&self) -> Vec<DisplayItem<'_, T>> {
        let current = self.current.iter().map(|item| (item, Lifecycle::Entering));
        let exiting = self.exiting.iter().map(|item| (item, Lifecycle::Exiting));
        current
            .chain(exiting)
            .enumerate()
            .map(|(index, (item, lifecycle))| DisplayItem {
                item,
                lifecycle,
                index,
                transition: self.transition_for(lifecycle, index),
            })
            .collect()
    }

    fn transition_for(&self, lifecycle: Lifecycle, index: usize) -> DirectionalConfig {
        DirectionalConfig {
            direction: match lifecycle {
                Lifecycle::Entering => self.options.enter_direction,
                Lifecycle::Exiting => self.options.exit_direction,
            },
            distance: self.options.distance,
            duration: self.options.item_duration(),
            delay: self.options.stagger_for(index),
        }
    }
}
