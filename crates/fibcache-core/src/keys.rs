//! Cache key namespace for Fibonacci entries.

/// Prefix under which every Fibonacci entry lives.
pub const FIB_KEY_PREFIX: &str = "fib:";

/// Glob pattern matching every key in the Fibonacci namespace.
pub const FIB_KEY_PATTERN: &str = "fib:*";

/// Returns the cache key for the given index.
pub fn entry_key(index: u64) -> String {
    format!("{FIB_KEY_PREFIX}{index}")
}

/// Extracts the index from a cache key, if it belongs to the namespace.
pub fn parse_entry_key(key: &str) -> Option<u64> {
    key.strip_prefix(FIB_KEY_PREFIX)?.parse().ok()
}
