use core::ops::Range;

/// Source of uniform random integers used by the randomized styles
pub trait RandomSource {
    /// Uniform value in a non-empty half-open range
    fn next_in(&mut self, range: Range<u8>) -> u8;

    /// Fair coin flip
    fn next_bool(&mut self) -> bool {
        self.next_in(0..2) == 1
    }
}

impl RandomSource for fastrand::Rng {
    fn next_in(&mut self, range: Range<u8>) -> u8 {
        self.u8(range)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_in(&mut self, range: Range<u8>) -> u8 {
        (**self).next_in(range)
    }
}
