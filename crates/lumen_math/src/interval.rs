/// A closed range of ray parameters (or any other reals).
///
/// `min > max` denotes an empty interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Contains nothing.
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    /// Contains every real.
    pub const UNIVERSE: Interval = Interval {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };

    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Width of the interval (max - min).
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// True if `min <= x <= max`.
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// True if `min < x < max`.
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamp x into `[min, max]`.
    ///
    /// Unlike `f32::clamp` this never panics, so it is safe to call on
    /// `EMPTY`; the result is then meaningless.
    pub fn clamp(&self, x: f32) -> f32 {
        if x < self.min {
            self.min
        } else if x > self.max {
            self.max
        } else {
            x
        }
    }

    /// Copy of this interval with `max` replaced, used to shrink the search
    /// range as closer hits are found.
    pub fn with_max(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_size() {
        assert_eq!(Interval::new(2.0, 7.0).size(), 5.0);
        assert_eq!(Interval::new(-5.0, 5.0).size(), 10.0);
    }

    #[test]
    fn test_endpoints_contained_but_not_surrounded() {
        let interval = Interval::new(0.001, 10.0);

        assert!(interval.contains(interval.min));
        assert!(interval.contains(interval.max));
        assert!(!interval.surrounds(interval.min));
        assert!(!interval.surrounds(interval.max));

        assert!(interval.surrounds(5.0));
        assert!(!interval.contains(-0.1));
        assert!(!interval.surrounds(10.1));
    }

    #[test]
    fn test_clamp_stays_in_range() {
        let interval = Interval::new(0.0, 0.999);

        for x in [-100.0, -0.5, 0.0, 0.25, 0.999, 1.0, 42.0, f32::INFINITY] {
            let clamped = interval.clamp(x);
            assert!(interval.contains(clamped), "clamp({x}) = {clamped}");
        }
        assert_eq!(interval.clamp(0.5), 0.5);
        assert_eq!(interval.clamp(2.0), 0.999);
        assert_eq!(interval.clamp(-2.0), 0.0);
    }

    #[test]
    fn test_empty_and_universe() {
        let empty = Interval::EMPTY;
        assert!(empty.min > empty.max);
        assert!(!empty.contains(0.0));
        assert!(!empty.surrounds(0.0));
        assert_eq!(Interval::default(), empty);

        let universe = Interval::UNIVERSE;
        assert!(universe.contains(0.0));
        assert!(universe.surrounds(-1e30));
        assert_eq!(universe.size(), f32::INFINITY);
    }

    #[test]
    fn test_with_max() {
        let narrowed = Interval::new(0.001, f32::INFINITY).with_max(3.0);
        assert_eq!(narrowed, Interval::new(0.001, 3.0));
    }
}
