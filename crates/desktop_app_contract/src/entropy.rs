//! Randomness sources for synthetic content generators.

/// Uniform source of values in `[0, 1)`.
pub trait Entropy {
    /// Returns the next value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Returns an integer in `0..bound`. A zero bound always yields `0`.
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        let value = (self.next_unit() * f64::from(bound)).floor() as u32;
        value.min(bound - 1)
    }

    /// Returns `true` with probability `1 - threshold`, i.e. when the next draw exceeds it.
    fn exceeds(&mut self, threshold: f64) -> bool {
        self.next_unit() > threshold
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser `Math.random()` source. Non-browser builds return a fixed midpoint.
pub struct BrowserEntropy;

impl Entropy for BrowserEntropy {
    fn next_unit(&mut self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            return js_sys::Math::random();
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            0.5
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Replays a fixed sequence of draws, cycling when exhausted.
pub struct ScriptedEntropy {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedEntropy {
    /// Creates a source that replays `values` in order. Values are clamped into `[0, 1)`.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let values = values
            .into_iter()
            .map(|value| value.clamp(0.0, 0.999_999))
            .collect::<Vec<_>>();
        Self { values, cursor: 0 }
    }
}

impl Entropy for ScriptedEntropy {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_stays_inside_bound() {
        let mut entropy = ScriptedEntropy::new([0.0, 0.5, 1.0]);
        assert_eq!(entropy.below(30), 0);
        assert_eq!(entropy.below(30), 15);
        assert_eq!(entropy.below(30), 29);
        assert_eq!(entropy.below(0), 0);
    }

    #[test]
    fn scripted_values_cycle() {
        let mut entropy = ScriptedEntropy::new([0.25, 0.75]);
        assert!(!entropy.exceeds(0.5));
        assert!(entropy.exceeds(0.5));
        assert!(!entropy.exceeds(0.5));
    }
}
