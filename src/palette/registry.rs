use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use indexmap::IndexMap;

use crate::error::{PointError, Result};

/// Colors accepted before any caller extends the allow-list, in order.
pub const SEED_COLORS: [&str; 7] = [
    "red",
    "green",
    "blue",
    "yellow",
    "black",
    "periwinkle",
    "white",
];

/// Color used by pair constructors when none is given.
pub const DEFAULT_COLOR: &str = "red";

static COLORS: LazyLock<ColorRegistry> = LazyLock::new(ColorRegistry::new);

/// The process-wide allow-list shared by every `AdvancedPoint`.
///
/// Initialized from [`SEED_COLORS`] on first use. Additions are permanent.
#[must_use]
pub fn global() -> &'static ColorRegistry {
    &COLORS
}

/// Ordered, append-only list of allowed color names.
///
/// Reads and writes go through one lock, so a membership check never
/// interleaves with a concurrent append. Entries are never removed, which
/// means a color that passed a check stays valid.
#[derive(Debug)]
pub struct ColorRegistry {
    colors: Mutex<Vec<String>>,
}

impl ColorRegistry {
    /// Registry seeded with [`SEED_COLORS`].
    #[must_use]
    pub fn new() -> Self {
        Self::from_colors(SEED_COLORS)
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            colors: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn from_colors<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            colors: Mutex::new(colors.into_iter().map(Into::into).collect()),
        }
    }

    // A panic while holding the lock cannot leave the Vec half-written,
    // so a poisoned guard is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.colors.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn contains(&self, color: &str) -> bool {
        self.lock().iter().any(|c| c == color)
    }

    /// Appends a color. Duplicates are kept.
    pub fn add(&self, color: impl Into<String>) {
        self.lock().push(color.into());
    }

    pub fn extend<I, S>(&self, colors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lock().extend(colors.into_iter().map(Into::into));
    }

    /// Ordered copy of the current entries.
    #[must_use]
    pub fn snapshot(&self) -> Vec<String> {
        self.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Occurrences of each color, in first-registration order.
    #[must_use]
    pub fn counts(&self) -> IndexMap<String, usize> {
        let mut counts = IndexMap::new();
        for color in self.lock().iter() {
            *counts.entry(color.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Checks membership, reporting the allow-list on failure.
    ///
    /// # Errors
    /// Returns [`PointError::InvalidColor`] if `color` is not registered.
    pub fn ensure_allowed(&self, color: &str) -> Result<()> {
        let colors = self.lock();
        if colors.iter().any(|c| c == color) {
            Ok(())
        } else {
            Err(PointError::InvalidColor {
                color: color.to_string(),
                allowed: colors.clone(),
            })
        }
    }
}

impl Default for ColorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
