use rand::Rng;
use serde::{Deserialize, Serialize};

/// Ordered list of affirmation texts. Firing picks one uniformly at
/// random; the list order only matters for display and for removal by
/// index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AffirmationSet {
    texts: Vec<String>,
}

impl AffirmationSet {
    pub fn new(texts: Vec<String>) -> Self {
        Self { texts }
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.texts.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0..self.texts.len());
        Some(&self.texts[idx])
    }

    pub fn push(&mut self, text: impl Into<String>) {
        self.texts.push(text.into());
    }

    /// Remove by position. Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.texts.len() {
            Some(self.texts.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.texts.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;

    #[test]
    fn pick_from_empty_set_is_none() {
        let set = AffirmationSet::default();
        let mut rng = Mcg128Xsl64::seed_from_u64(1);
        assert!(set.pick(&mut rng).is_none());
    }

    #[test]
    fn pick_from_singleton_always_returns_it() {
        let set = AffirmationSet::new(vec!["keep going".into()]);
        let mut rng = Mcg128Xsl64::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(set.pick(&mut rng), Some("keep going"));
        }
    }

    #[test]
    fn pick_eventually_covers_the_whole_set() {
        let set = AffirmationSet::new(vec!["a".into(), "b".into(), "c".into()]);
        let mut rng = Mcg128Xsl64::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(set.pick(&mut rng).unwrap().to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn remove_out_of_range_is_ignored() {
        let mut set = AffirmationSet::new(vec!["a".into()]);
        assert!(set.remove(5).is_none());
        assert_eq!(set.len(), 1);
        assert_eq!(set.remove(0).as_deref(), Some("a"));
        assert!(set.is_empty());
    }
}
