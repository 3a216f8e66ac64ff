//! Test case module - an identified (width, height) pair

/// A single generated test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase {
    /// 1-based sequential identifier, assigned in emission order
    pub id: u32,
    /// Width test value
    pub width: i64,
    /// Height test value
    pub height: i64,
}

impl TestCase {
    /// Create a test case.
    pub fn new(id: u32, width: i64, height: i64) -> Self {
        Self { id, width, height }
    }

    /// Triangle area for this case: (width * height) / 2.
    ///
    /// The product is taken in i128 (any pair of i64 values fits), then
    /// halved in f64 so odd products keep their .5 and negative robust
    /// values keep their sign.
    pub fn area(&self) -> f64 {
        (self.width as i128 * self.height as i128) as f64 / 2.0
    }
}
