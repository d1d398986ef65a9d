/// Errors reported by generators and bit column matrices.
///
/// Every error is a caller mistake detected at the offending call:
/// there is no I/O in this crate and nothing is worth retrying.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// Two matrices of different widths were combined.
    #[error("bit column matrices are not of same width ({left} vs {right})")]
    WidthMismatch { left: usize, right: usize },

    /// Wrong number of seed values for a generator.
    #[error("{generator} takes {expected} seed values, got {actual}")]
    SeedCount { generator: &'static str, expected: usize, actual: usize },

    /// A captured state does not have the generator's shape.
    #[error("{generator} state has {expected} words, got {actual}")]
    StateShape { generator: &'static str, expected: usize, actual: usize },

    /// A captured state holds a value its generator can never reach from a seed.
    #[error("{generator} state value {value:#x} is not below its modulus {modulo:#x}")]
    StateValue { generator: &'static str, value: u64, modulo: u64 },

    /// The generator has no closed form for the operation.
    #[error("{generator} does not support {operation}")]
    Unsupported { generator: &'static str, operation: &'static str },
}
