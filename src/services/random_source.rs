use rand::{Rng, RngCore};

/// Source of uniform draws for itinerary synthesis.
///
/// Any `rand` generator qualifies, so tests pass a seeded `StdRng` and the
/// service passes one seeded from entropy.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_float(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        let index = (self.next_float() * len as f64) as usize;
        index.min(len.saturating_sub(1))
    }
}

impl<R: RngCore> RandomSource for R {
    fn next_float(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Uniform pick from `items`, `None` when empty.
pub fn choose<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.pick_index(items.len()))
}
