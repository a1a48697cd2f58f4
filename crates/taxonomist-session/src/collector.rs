//! InputCollector — dumb storage for raw indicator text.

use std::fmt;
use std::sync::Arc;

use taxonomist_core::errors::TaxonomistResult;
use taxonomist_core::models::{IndicatorField, IndicatorSet};

/// Called after every update with the changed field and the full set.
pub type InputListener = Box<dyn Fn(IndicatorField, &IndicatorSet) + Send + Sync>;

type SharedInputListener = Arc<dyn Fn(IndicatorField, &IndicatorSet) + Send + Sync>;

/// One update waiting to be delivered. Owns everything it needs, so the
/// collector can be unlocked before listeners run.
#[must_use]
pub(crate) struct InputNotice {
    field: IndicatorField,
    indicators: IndicatorSet,
    listeners: Vec<SharedInputListener>,
}

impl InputNotice {
    pub(crate) fn deliver(self) {
        for listener in &self.listeners {
            listener(self.field, &self.indicators);
        }
    }
}

/// Holds the six raw values. Never validates, never fails for a typed field.
#[derive(Default)]
pub struct InputCollector {
    indicators: IndicatorSet,
    listeners: Vec<SharedInputListener>,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current raw values.
    pub fn indicators(&self) -> &IndicatorSet {
        &self.indicators
    }

    pub fn get(&self, field: IndicatorField) -> &str {
        self.indicators.get(field)
    }

    /// Replace exactly one value and notify listeners.
    pub fn set_field(&mut self, field: IndicatorField, value: impl Into<String>) {
        self.store(field, value).deliver();
    }

    /// Replace one value and hand back the notice instead of delivering it.
    pub(crate) fn store(&mut self, field: IndicatorField, value: impl Into<String>) -> InputNotice {
        self.indicators.set(field, value);
        InputNotice {
            field,
            indicators: self.indicators.clone(),
            listeners: self.listeners.clone(),
        }
    }

    /// Same as [`InputCollector::set_field`], keyed by the camelCase form name.
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> TaxonomistResult<()> {
        let field: IndicatorField = name.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Clear every value back to empty.
    pub fn reset(&mut self) {
        for notice in self.clear() {
            notice.deliver();
        }
    }

    pub(crate) fn clear(&mut self) -> Vec<InputNotice> {
        IndicatorField::ALL
            .into_iter()
            .map(|field| self.store(field, String::new()))
            .collect()
    }

    pub fn subscribe(&mut self, listener: InputListener) {
        self.listeners.push(Arc::from(listener));
    }
}

impl fmt::Debug for InputCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputCollector")
            .field("indicators", &self.indicators)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
