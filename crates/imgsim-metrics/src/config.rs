use crate::parallel::ExecutionStrategy;

/// The set of channels that take part in a comparison.
///
/// The pixel data always stores 4 samples per pixel; `Rgb` simply skips the
/// alpha sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channels {
    /// Red, green and blue only.
    Rgb,
    /// Red, green, blue and alpha.
    #[default]
    Rgba,
}

impl Channels {
    /// Select the channel set from an alpha inclusion flag.
    pub fn from_alpha(include_alpha: bool) -> Self {
        if include_alpha {
            Channels::Rgba
        } else {
            Channels::Rgb
        }
    }

    /// Get the number of channels compared per pixel.
    pub fn count(&self) -> usize {
        match self {
            Channels::Rgb => 3,
            Channels::Rgba => 4,
        }
    }
}

/// Options controlling how image metrics are computed.
///
/// # Examples
///
/// ```
/// use imgsim_metrics::{Channels, ExecutionStrategy, MetricsConfig};
///
/// let config = MetricsConfig::default()
///     .with_include_alpha(false)
///     .with_strategy(ExecutionStrategy::ParallelRows);
///
/// assert_eq!(config.channels(), Channels::Rgb);
/// assert_eq!(config.strategy, ExecutionStrategy::ParallelRows);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MetricsConfig {
    /// Whether the alpha channel takes part in the comparison.
    pub include_alpha: bool,
    /// How the pixel rows are traversed.
    pub strategy: ExecutionStrategy,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            include_alpha: true,
            strategy: ExecutionStrategy::default(),
        }
    }
}

impl MetricsConfig {
    /// Set whether the alpha channel takes part in the comparison.
    pub fn with_include_alpha(mut self, include_alpha: bool) -> Self {
        self.include_alpha = include_alpha;
        self
    }

    /// Set the execution strategy.
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Get the channel set selected by this configuration.
    pub fn channels(&self) -> Channels {
        Channels::from_alpha(self.include_alpha)
    }
}
