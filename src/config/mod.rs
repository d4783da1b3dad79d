//! Configuration for the intermediate buffer pool.
//!
//! - [`PoolConfig`] - Controls buffer sizing and how many idle buffers are kept
//!
//! # Example
//!
//! ```
//! use structclone::PoolConfig;
//!
//! // Custom sizing
//! let config = PoolConfig::new(1024, 64 * 1024, 8)?;
//!
//! // Builder pattern
//! let config = PoolConfig::default().with_max_idle(16);
//!
//! # Ok::<(), structclone::PoolConfigError>(())
//! ```

use crate::error::PoolConfigError;

/// Default capacity of a freshly allocated buffer (4 KiB).
pub const DEFAULT_INITIAL_CAPACITY: usize = 4 * 1024;

/// Default capacity above which a released buffer is dropped (1 MiB).
pub const DEFAULT_MAX_RETAINED_CAPACITY: usize = 1024 * 1024;

/// Default number of idle buffers kept by a pool.
pub const DEFAULT_MAX_IDLE: usize = 64;

/// Configuration for a [`BufferPool`](crate::BufferPool).
///
/// - `initial_capacity` - Capacity of buffers the pool allocates
/// - `max_retained_capacity` - Buffers that grew past this are not pooled again
/// - `max_idle` - Upper bound on idle buffers held by the pool
///
/// A `max_idle` of zero is valid and disables reuse entirely, which is
/// useful for deterministic tests.
///
/// # Example
///
/// ```
/// use structclone::PoolConfig;
///
/// let config = PoolConfig::default()
///     .with_initial_capacity(512)
///     .with_max_retained_capacity(8192)
///     .with_max_idle(2);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolConfig {
    initial_capacity: usize,
    max_retained_capacity: usize,
    max_idle: usize,
}

impl PoolConfig {
    /// Creates a new configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PoolConfigError::ZeroCapacity`] if either capacity is zero
    /// and [`PoolConfigError::CapacityOrder`] if `initial_capacity` exceeds
    /// `max_retained_capacity`.
    pub fn new(
        initial_capacity: usize,
        max_retained_capacity: usize,
        max_idle: usize,
    ) -> Result<Self, PoolConfigError> {
        if initial_capacity == 0 || max_retained_capacity == 0 {
            return Err(PoolConfigError::ZeroCapacity);
        }

        if initial_capacity > max_retained_capacity {
            return Err(PoolConfigError::CapacityOrder {
                initial: initial_capacity,
                max_retained: max_retained_capacity,
            });
        }

        Ok(Self {
            initial_capacity,
            max_retained_capacity,
            max_idle,
        })
    }

    /// Sets the capacity of freshly allocated buffers.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`PoolConfig::validate`] to check it.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the capacity above which released buffers are dropped.
    ///
    /// Note: This does not validate the configuration.
    pub fn with_max_retained_capacity(mut self, capacity: usize) -> Self {
        self.max_retained_capacity = capacity;
        self
    }

    /// Sets the maximum number of idle buffers.
    pub fn with_max_idle(mut self, max_idle: usize) -> Self {
        self.max_idle = max_idle;
        self
    }

    /// Returns the capacity of freshly allocated buffers.
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Returns the capacity above which released buffers are dropped.
    pub fn max_retained_capacity(&self) -> usize {
        self.max_retained_capacity
    }

    /// Returns the maximum number of idle buffers.
    pub fn max_idle(&self) -> usize {
        self.max_idle
    }

    /// Validates the current configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use structclone::PoolConfig;
    ///
    /// let config = PoolConfig::default().with_initial_capacity(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), PoolConfigError> {
        Self::new(
            self.initial_capacity,
            self.max_retained_capacity,
            self.max_idle,
        )
        .map(|_| ())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_retained_capacity: DEFAULT_MAX_RETAINED_CAPACITY,
            max_idle: DEFAULT_MAX_IDLE,
        }
    }
}
