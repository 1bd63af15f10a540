//! Configuration errors shared by all blackhole crates

/// Rejected configuration.
///
/// The simulation has no recoverable runtime errors. Everything that can go
/// wrong is a bad parameter, caught when the owning value is constructed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be finite and positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("particle count must be at least 1")]
    EmptyField,

    #[error("sphere mesh needs at least 3 slices and 2 stacks, got {slices}x{stacks}")]
    MeshResolution { slices: u32, stacks: u32 },

    #[error("invalid projection: {0}")]
    Projection(String),

    #[error("degenerate look-at basis: {0}")]
    DegenerateBasis(&'static str),
}

/// Validate that `value` is finite and strictly positive.
pub fn ensure_positive(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}
