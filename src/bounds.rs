/// View of the light array handed to a style on every tick
///
/// Holds the whole strip, but styles address only the active range
/// `[0, limit)`. Only [`LightFrame::clear_all`] reaches lights past the limit.
#[derive(Debug)]
pub struct LightFrame<'a> {
    lights: &'a mut [bool],
    limit: usize,
}

impl<'a> LightFrame<'a> {
    /// Create a frame over `lights`, clamping `limit` to the strip length
    pub fn new(lights: &'a mut [bool], limit: usize) -> Self {
        let limit = limit.min(lights.len());
        Self { lights, limit }
    }

    /// Number of lights in the active range
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Get the lights within the active range
    pub fn active(&mut self) -> &mut [bool] {
        &mut self.lights[..self.limit]
    }

    /// Set a single light inside the active range
    ///
    /// Writes outside the active range are ignored.
    pub fn set(&mut self, index: usize, value: bool) {
        if let Some(light) = self.active().get_mut(index) {
            *light = value;
        }
    }

    /// Set a light and its mirror around the center of the active range
    pub fn set_mirrored(&mut self, index: usize, value: bool) {
        if index < self.limit {
            let mirror = mirror_of(index, self.limit);
            self.set(index, value);
            self.set(mirror, value);
        }
    }

    /// Set every light in the active range
    pub fn fill(&mut self, value: bool) {
        self.active().fill(value);
    }

    /// Turn off every light of the strip, including ones past the limit
    pub fn clear_all(&mut self) {
        self.lights.fill(false);
    }
}

/// Index mirrored around the center of a range of `count` lights
pub const fn mirror_of(index: usize, count: usize) -> usize {
    count - 1 - index
}

/// Number of mirrored pairs in a range of `count` lights
///
/// The middle light of an odd range counts as its own pair.
pub const fn center_of(count: usize) -> usize {
    let mut center_len = count / 2;
    if !count.is_multiple_of(2) {
        center_len += 1;
    }

    if center_len <= count {
        return center_len;
    }
    count
}
