//! The rounding-mode vocabulary shared by every context and projection.

/// How to resolve a remainder when an exact amount doesn't fit a target
/// scale or step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round away from zero.
    Up,
    /// Round toward zero (truncate).
    Down,
    /// Round toward positive infinity.
    Ceiling,
    /// Round toward negative infinity.
    Floor,
    /// Round to the nearest neighbour; ties round away from zero.
    HalfUp,
    /// Round to the nearest neighbour; ties round toward zero.
    HalfDown,
    /// Round to the nearest neighbour; ties round to the even neighbour
    /// (banker's rounding).
    HalfEven,
    /// Demand the value is already exact at the target scale/step; fail
    /// with [`crate::error::MoneyError::RoundingNecessary`] otherwise.
    Unnecessary,
}
