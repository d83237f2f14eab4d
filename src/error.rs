use crate::params::StepParameter;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StudioError {
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("unknown harmony: {0}")]
    UnknownHarmony(String),

    #[error("{parameter} index {index} out of range (expected 0..{levels})")]
    ParameterIndexOutOfRange {
        parameter: StepParameter,
        index: i64,
        levels: usize,
    },

    /// Raised by the renderer when compiling or linking generated source fails.
    #[error("shader build failed: {0}")]
    BuildFailure(String),
}

pub type Result<T> = std::result::Result<T, StudioError>;
