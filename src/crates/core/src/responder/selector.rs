use crate::responder::catalog::ResponseCatalog;
use crate::responder::classifier::{classify, Category};
use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks a full response text for a user utterance.
///
/// Classification is deterministic; only the variant pick inside the
/// question/general categories draws from the RNG. The RNG is injected at
/// construction so tests can seed it.
pub struct ResponseSelector {
    catalog: ResponseCatalog,
    rng: StdRng,
}

impl ResponseSelector {
    pub fn new() -> Self {
        Self {
            catalog: ResponseCatalog::default(),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            catalog: ResponseCatalog::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn catalog(&self) -> &ResponseCatalog {
        &self.catalog
    }

    /// Always returns a catalog entry; never fails.
    pub fn select(&mut self, input: &str) -> &'static str {
        let category = classify(input);
        let index = match category {
            Category::Greeting => 0,
            // Uniform over everything but the greeting.
            Category::Question => self.rng.gen_range(1..self.catalog.len()),
            Category::General => self.rng.gen_range(0..self.catalog.len()),
        };
        trace!("Selected response: category={:?}, index={}", category, index);
        self.catalog
            .get(index)
            .unwrap_or_else(|| self.catalog.greeting())
    }
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_is_deterministic_across_seeds() {
        for seed in 0..16 {
            let mut selector = ResponseSelector::with_seed(seed);
            let catalog = ResponseCatalog::default();
            assert_eq!(selector.select("你好"), catalog.greeting());
            assert_eq!(selector.select("hello world"), catalog.greeting());
        }
    }

    #[test]
    fn question_never_returns_greeting() {
        let catalog = ResponseCatalog::default();
        for seed in 0..16 {
            let mut selector = ResponseSelector::with_seed(seed);
            for _ in 0..32 {
                let picked = selector.select("这个方案可行吗？");
                assert_ne!(picked, catalog.greeting());
            }
        }
    }

    #[test]
    fn empty_input_stays_in_catalog() {
        let catalog = ResponseCatalog::default();
        let mut selector = ResponseSelector::with_seed(7);
        for _ in 0..32 {
            let picked = selector.select("");
            assert!(catalog.entries().contains(&picked));
        }
    }
}
