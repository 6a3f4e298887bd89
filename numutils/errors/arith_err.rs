use error_stack::Context;

/// The ways a checked arithmetic operation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithErr {
    /// An integer result didn't fit in the operand type.
    Overflow,
    /// Finite float operands produced an infinite result.
    NonFinite,
}

impl std::fmt::Display for ArithErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithErr::Overflow => write!(f, "arithmetic overflow"),
            ArithErr::NonFinite => write!(f, "non-finite result from finite operands"),
        }
    }
}

impl Context for ArithErr {}
