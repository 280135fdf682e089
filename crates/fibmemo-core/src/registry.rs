//! Calculator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::calculator::{Calculator, FibError};
use crate::checked::CheckedU64;
use crate::doubling::MemoizedFastDoubling;
use crate::iterative::Iterative;

/// Factory trait for creating calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a calculator by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError>;

    /// List all available calculator names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
///
/// A cached `MemoizedFastDoubling` keeps its memo table, so repeated
/// lookups of "fast" share one process-lifetime cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Calculator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_calculator(name: &str) -> Result<Arc<dyn Calculator>, FibError> {
        match name {
            "fast" | "fastdoubling" | "memo" => Ok(Arc::new(MemoizedFastDoubling::new())),
            "iterative" | "iter" => Ok(Arc::new(Iterative::new())),
            "checked" | "u64" => Ok(Arc::new(CheckedU64::new())),
            _ => Err(FibError::Config(format!("unknown calculator: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError> {
        // Check cache first
        if let Some(calc) = self.cache.read().get(name) {
            return Ok(Arc::clone(calc));
        }

        // Create and cache
        let calc = Self::create_calculator(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&calc));
        Ok(calc)
    }

    fn available(&self) -> Vec<&str> {
        vec!["fast", "iterative", "checked"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_creates_fast_doubling() {
        let factory = DefaultFactory::new();
        let calc = factory.get("fast");
        assert!(calc.is_ok());
        assert_eq!(calc.unwrap().name(), "MemoizedFastDoubling");
    }

    #[test]
    fn factory_creates_iterative() {
        let factory = DefaultFactory::new();
        let calc = factory.get("iterative");
        assert!(calc.is_ok());
        assert_eq!(calc.unwrap().name(), "Iterative");
    }

    #[test]
    fn factory_creates_checked() {
        let factory = DefaultFactory::new();
        let calc = factory.get("checked");
        assert!(calc.is_ok());
        assert_eq!(calc.unwrap().name(), "CheckedU64");
    }

    #[test]
    fn factory_caches() {
        let factory = DefaultFactory::new();
        let calc1 = factory.get("fast").unwrap();
        let calc2 = factory.get("fast").unwrap();
        assert!(Arc::ptr_eq(&calc1, &calc2));
    }

    #[test]
    fn factory_unknown_name() {
        let factory = DefaultFactory::new();
        assert!(matches!(
            factory.get("nonexistent"),
            Err(FibError::Config(_))
        ));
    }

    #[test]
    fn factory_available() {
        let factory = DefaultFactory::new();
        let available = factory.available();
        assert!(available.contains(&"fast"));
        assert!(available.contains(&"iterative"));
        assert!(available.contains(&"checked"));
    }
}
