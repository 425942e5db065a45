/// Source of uniformly distributed numbers in `[0, 1)`.
///
/// Template and glyph selection go through this so tests can swap in a
/// seeded generator.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Browser `Math.random()`.
#[derive(Default)]
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_unit(&mut self) -> f64 {
        web_sys::js_sys::Math::random()
    }
}

/// Index in `0..len`, uniform. `len` must be non-zero.
pub fn pick_index(random: &mut dyn RandomSource, len: usize) -> usize {
    let index = (random.next_unit() * len as f64).floor() as usize;
    // next_unit is half-open but guard against a source returning 1.0
    index.min(len - 1)
}

pub fn pick<'a, T>(random: &mut dyn RandomSource, items: &'a [T]) -> &'a T {
    &items[pick_index(random, items.len())]
}
