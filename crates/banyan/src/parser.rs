//! Lazy per-language parser handles and the process-wide pool.
//!
//! A tree-sitter parser handle is allocated by the engine and bound to
//! exactly one grammar. Handles are reusable indefinitely, so Banyan
//! constructs each language's handle on first use and keeps it for the
//! lifetime of the pool — callers never manage construction timing.
//!
//! ## Construction discipline
//!
//! Each [`LazyParser`] slot guards its check-and-set with a mutex, so the
//! first access constructs exactly once even when racing threads request the
//! same language. Construction is fast and does no I/O; the lock is held for
//! its duration. A failed construction leaves the slot empty and the next
//! access retries.
//!
//! ## Lifetime
//!
//! The [`pool`] singleton lives in a `'static OnceLock`, so handles are
//! never torn down; they are reclaimed at process exit.

use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::debug;

use crate::error::{InitializationError, Result};
use crate::grammar::grammar_for;
use crate::types::Language;

/// Generic construct-once slot guarded by a mutex.
///
/// Holds the check-and-set discipline shared by all pool slots: construct on
/// the first access, cache on success only, hand out exclusive borrows of
/// the cached value thereafter.
pub(crate) struct LazySlot<T> {
    slot: Mutex<Option<T>>,
}

impl<T> LazySlot<T> {
    /// Create an empty slot. No construction happens here.
    pub(crate) const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Whether the slot holds a constructed value.
    pub(crate) fn is_filled(&self) -> bool {
        self.lock().is_some()
    }

    /// Run `f` against the cached value, constructing it first if needed.
    ///
    /// `construct` is invoked only when the slot is empty, and its result is
    /// stored only on success — an `Err` leaves the slot empty so a later
    /// call can retry.
    pub(crate) fn with<U, E>(
        &self,
        construct: impl FnOnce() -> std::result::Result<T, E>,
        f: impl FnOnce(&mut T) -> U,
    ) -> std::result::Result<U, E> {
        let mut slot = self.lock();
        if let Some(value) = slot.as_mut() {
            return Ok(f(value));
        }
        let mut value = construct()?;
        let result = f(&mut value);
        *slot = Some(value);
        Ok(result)
    }

    /// Lock the slot, recovering from poisoning.
    ///
    /// A poisoned mutex means a caller's closure panicked; the slot contents
    /// are either empty or a fully constructed value, both safe to reuse.
    fn lock(&self) -> std::sync::MutexGuard<'_, Option<T>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A lazily constructed parser handle for one language.
///
/// The handle is created on the first call to [`LazyParser::with_parser`]
/// and cached for every later call; the engine's allocate and bind
/// primitives run at most once per slot.
pub struct LazyParser {
    language: Language,
    slot: LazySlot<tree_sitter::Parser>,
}

impl LazyParser {
    /// Create an empty slot for a language. No engine work happens here.
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self {
            language,
            slot: LazySlot::new(),
        }
    }

    /// Language this slot serves.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Whether the handle has been constructed.
    #[must_use]
    pub fn is_constructed(&self) -> bool {
        self.slot.is_filled()
    }

    /// Run `f` against the cached handle, constructing it first if needed.
    ///
    /// Only the first successful call allocates a handle and binds the
    /// grammar; every later call reuses the cached handle. The closure
    /// receives an exclusive borrow because parsing mutates engine-internal
    /// state.
    ///
    /// # Errors
    ///
    /// Returns [`InitializationError`] if the engine rejects the grammar.
    /// Nothing is cached in that case; a later call retries.
    pub fn with_parser<T>(&self, f: impl FnOnce(&mut tree_sitter::Parser) -> T) -> Result<T> {
        let language = self.language;
        Ok(self.slot.with(|| construct(language), f)?)
    }
}

/// Allocate a fresh handle and bind the language's grammar to it.
fn construct(language: Language) -> std::result::Result<tree_sitter::Parser, InitializationError> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&grammar_for(language))
        .map_err(|e| InitializationError::new(language, e.to_string()))?;
    debug!(language = %language, "constructed parser handle");
    Ok(parser)
}

/// Process-wide pool of per-language parser handles.
///
/// Owns one [`LazyParser`] slot per registry entry. At most one handle is
/// ever created per language for the lifetime of the pool; all callers
/// requesting the same language share it.
pub struct ParserPool {
    slots: [LazyParser; Language::ALL.len()],
}

impl ParserPool {
    /// Create a pool with every slot empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Language::ALL.map(LazyParser::new),
        }
    }

    /// Run `f` against the pooled handle for `language`.
    ///
    /// # Errors
    ///
    /// Returns [`InitializationError`] if the handle cannot be constructed.
    pub fn with_parser<T>(
        &self,
        language: Language,
        f: impl FnOnce(&mut tree_sitter::Parser) -> T,
    ) -> Result<T> {
        self.slot(language).with_parser(f)
    }

    /// Languages whose handles have been constructed so far.
    #[must_use]
    pub fn constructed(&self) -> Vec<Language> {
        self.slots
            .iter()
            .filter(|slot| slot.is_constructed())
            .map(LazyParser::language)
            .collect()
    }

    fn slot(&self, language: Language) -> &LazyParser {
        // Language::ALL is in discriminant order (asserted in types tests)
        &self.slots[language as usize]
    }
}

impl Default for ParserPool {
    fn default() -> Self {
        Self::new()
    }
}

/// Global pool singleton — handles are constructed once and shared across
/// all call sites for the lifetime of the process.
static POOL: OnceLock<ParserPool> = OnceLock::new();

/// Get the process-wide parser pool.
pub fn pool() -> &'static ParserPool {
    POOL.get_or_init(ParserPool::new)
}
