//! Cache configuration options

/// Configuration for function result caching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries in the result cache
    pub result_cache_size: usize,

    /// Whether to enable result caching for pure functions
    pub enable_result_caching: bool,
}

impl CacheConfig {
    /// Create a new cache configuration with custom settings
    pub fn new(result_cache_size: usize, enable_result_caching: bool) -> Self {
        Self {
            result_cache_size,
            enable_result_caching,
        }
    }

    /// Create a configuration with caching disabled
    pub fn disabled() -> Self {
        Self {
            result_cache_size: 0,
            enable_result_caching: false,
        }
    }

    /// Create a small configuration for testing
    pub fn testing() -> Self {
        Self {
            result_cache_size: 16,
            enable_result_caching: true,
        }
    }

    /// Whether results will actually be cached with these settings
    pub fn is_enabled(&self) -> bool {
        self.enable_result_caching && self.result_cache_size > 0
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            result_cache_size: 1_000,
            enable_result_caching: true,
        }
    }
}
