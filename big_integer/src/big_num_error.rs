#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BigIntError {
    #[error("invalid integer literal: {input:?}")]
    Parse { input: String },
    #[error("attempt to divide by zero")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, BigIntError>;
