//! Locale facet registry
//!
//! Holds the active [`BoundaryAnalyzer`](breakdex_core::BoundaryAnalyzer) for each (locale, code-unit width)
//! pair. Every width has its own slot, so installing or replacing the UTF-8
//! analyzer of a locale leaves its UTF-16 analyzer untouched.
//!
//! Lookups hand out a clone of the shared handle. A caller that obtained an
//! analyzer keeps using it for as long as it likes, even if the slot is
//! replaced or cleared in the meantime.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use breakdex_core::{
    BoundaryError, BoundaryKind, BreakIndex, CharWidth, CodeUnit, Result, SharedAnalyzer,
};
use breakdex_rules::{embedded_codes, embedded_rule_set, RuleSet, UnicodeAnalyzer};

use crate::locale::Locale;

/// Type-erased `SharedAnalyzer<U>`; the slot position says which `U`
type Slot = Box<dyn Any + Send + Sync>;

/// One slot per width, in [`CharWidth::ALL`] order
type Slots = [Option<Slot>; 4];

/// Registry of boundary analyzers keyed by locale and width
#[derive(Default)]
pub struct FacetRegistry {
    locales: RwLock<HashMap<Locale, Slots>>,
}

static GLOBAL: OnceLock<FacetRegistry> = OnceLock::new();

impl FacetRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in analyzers of every embedded locale
    pub fn with_builtin_locales() -> Result<Self> {
        let registry = Self::new();
        for code in embedded_codes() {
            registry.install_builtin(&Locale::parse(code)?)?;
        }
        Ok(registry)
    }

    /// Process-wide registry, populated with the built-in locales on first use
    pub fn global() -> &'static FacetRegistry {
        GLOBAL.get_or_init(|| {
            let registry = Self::new();
            for code in embedded_codes() {
                let installed = Locale::parse(code).and_then(|l| registry.install_builtin(&l));
                if let Err(e) = installed {
                    log::warn!("failed to register built-in locale '{code}': {e}");
                }
            }
            registry
        })
    }

    /// Make `analyzer` the active one for `locale` at width `U`
    ///
    /// Returns the analyzer it replaced, if any.
    pub fn install<U: CodeUnit>(
        &self,
        locale: &Locale,
        analyzer: SharedAnalyzer<U>,
    ) -> Option<SharedAnalyzer<U>> {
        let mut locales = self.locales.write().unwrap_or_else(PoisonError::into_inner);
        let slots = locales.entry(locale.clone()).or_default();
        let previous = slots[slot_index(U::WIDTH)].replace(Box::new(analyzer));
        drop(locales);

        match previous {
            Some(_) => log::debug!("replaced {} boundary analyzer for '{locale}'", U::WIDTH),
            None => log::debug!("installed {} boundary analyzer for '{locale}'", U::WIDTH),
        }
        previous.and_then(downcast::<U>)
    }

    /// Remove the analyzer for `locale` at width `U`
    pub fn uninstall<U: CodeUnit>(&self, locale: &Locale) -> Option<SharedAnalyzer<U>> {
        let mut locales = self.locales.write().unwrap_or_else(PoisonError::into_inner);
        let slots = locales.get_mut(locale)?;
        let removed = slots[slot_index(U::WIDTH)].take();
        if slots.iter().all(Option::is_none) {
            locales.remove(locale);
        }
        drop(locales);

        if removed.is_some() {
            log::debug!("removed {} boundary analyzer for '{locale}'", U::WIDTH);
        }
        removed.and_then(downcast::<U>)
    }

    /// The active analyzer for `locale` at width `U`
    ///
    /// # Errors
    /// [`BoundaryError::NoAnalyzerAvailable`] when nothing is installed; no
    /// other locale or width is tried instead.
    pub fn analyzer<U: CodeUnit>(&self, locale: &Locale) -> Result<SharedAnalyzer<U>> {
        self.locales
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(locale)
            .and_then(|slots| slots[slot_index(U::WIDTH)].as_ref())
            .and_then(|slot| slot.downcast_ref::<SharedAnalyzer<U>>())
            .cloned()
            .ok_or_else(|| BoundaryError::NoAnalyzerAvailable {
                locale: locale.to_string(),
                width: U::WIDTH,
            })
    }

    /// Look up the analyzer for `locale` and index `text` with it
    pub fn map<U: CodeUnit>(
        &self,
        locale: &Locale,
        kind: BoundaryKind,
        text: &[U],
    ) -> Result<BreakIndex> {
        // The lock is released before mapping
        let analyzer = self.analyzer::<U>(locale)?;
        analyzer.map(kind, text)
    }

    /// Install a built-in [`UnicodeAnalyzer`] for every width
    ///
    /// The rules come from the embedded table whose code is the locale's
    /// language. Each width gets its own analyzer instance, and all four are
    /// published together.
    ///
    /// # Errors
    /// [`BoundaryError::Config`] when no embedded table has that code.
    pub fn install_builtin(&self, locale: &Locale) -> Result<()> {
        let rules = embedded_rule_set(locale.language())?;
        if rules.code() != locale.language() {
            return Err(BoundaryError::Config(format!(
                "'{}' names the '{}' rule set; use its code",
                locale.language(),
                rules.code()
            )));
        }

        let slots: Slots = [
            Some(builtin_slot::<u8>(&rules)),
            Some(builtin_slot::<u16>(&rules)),
            Some(builtin_slot::<u32>(&rules)),
            Some(builtin_slot::<char>(&rules)),
        ];
        self.locales
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(locale.clone(), slots);
        log::debug!("registered built-in analyzers for '{locale}'");
        Ok(())
    }

    /// Whether an analyzer is installed for `locale` at `width`
    pub fn is_installed(&self, locale: &Locale, width: CharWidth) -> bool {
        self.locales
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(locale)
            .is_some_and(|slots| slots[slot_index(width)].is_some())
    }

    /// Widths with an analyzer installed for `locale`, narrowest first
    pub fn widths(&self, locale: &Locale) -> Vec<CharWidth> {
        let locales = self.locales.read().unwrap_or_else(PoisonError::into_inner);
        let Some(slots) = locales.get(locale) else {
            return Vec::new();
        };
        CharWidth::ALL
            .into_iter()
            .zip(slots)
            .filter_map(|(width, slot)| slot.as_ref().map(|_| width))
            .collect()
    }

    /// Locales with at least one analyzer installed, sorted
    pub fn locales(&self) -> Vec<Locale> {
        let locales = self.locales.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<Locale> = locales.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of installed (locale, width) slots
    pub fn len(&self) -> usize {
        self.locales
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(|slots| slots.iter().flatten().count())
            .sum()
    }

    /// Whether no analyzer is installed at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for FacetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FacetRegistry")
            .field("slots", &self.len())
            .finish()
    }
}

fn slot_index(width: CharWidth) -> usize {
    match width {
        CharWidth::Utf8 => 0,
        CharWidth::Utf16 => 1,
        CharWidth::Utf32 => 2,
        CharWidth::Scalar => 3,
    }
}

fn builtin_slot<U: CodeUnit>(rules: &Arc<RuleSet>) -> Slot {
    let analyzer: SharedAnalyzer<U> = Arc::new(UnicodeAnalyzer::new(Arc::clone(rules)));
    Box::new(analyzer)
}

fn downcast<U: CodeUnit>(slot: Slot) -> Option<SharedAnalyzer<U>> {
    slot.downcast::<SharedAnalyzer<U>>().ok().map(|boxed| *boxed)
}
