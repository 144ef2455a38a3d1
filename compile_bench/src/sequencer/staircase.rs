//!
//! The program size staircase.
//!

///
/// The arithmetic sequence of function counts: `start`, `start + increment`, ...
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Staircase {
    /// The first size.
    start: usize,
    /// The number of sizes.
    steps: usize,
    /// The difference between consecutive sizes.
    increment: usize,
}

impl Staircase {
    ///
    /// Validates and creates the staircase.
    ///
    /// # Errors
    /// If there are no steps, if the sizes would not be strictly ascending,
    /// or if the last size overflows.
    ///
    pub fn new(start: usize, steps: usize, increment: usize) -> anyhow::Result<Self> {
        if steps == 0 {
            anyhow::bail!("The staircase must have at least one step");
        }
        if steps > 1 && increment == 0 {
            anyhow::bail!("The size increment must be positive when there is more than one step");
        }
        (steps - 1)
            .checked_mul(increment)
            .and_then(|span| span.checked_add(start))
            .ok_or_else(|| anyhow::anyhow!("The largest program size overflows"))?;

        Ok(Self {
            start,
            steps,
            increment,
        })
    }

    ///
    /// Iterates over the sizes in strictly ascending order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        let Self {
            start, increment, ..
        } = *self;
        (0..self.steps).map(move |step| start + step * increment)
    }

    ///
    /// The number of sizes.
    ///
    pub fn len(&self) -> usize {
        self.steps
    }

    ///
    /// Always `false`, as a staircase has at least one step.
    ///
    pub fn is_empty(&self) -> bool {
        false
    }
}
