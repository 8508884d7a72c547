//! Environment variable utilities
//!
//! Small typed accessors used for diagnostic configuration
//! (`GCH_LOG_LEVEL`, `GCH_FLUSH_EPRINT`). The example programs have no
//! functional configuration surface.

use std::str::FromStr;

/// Get an environment variable parsed as `T`, or the default
///
/// Unset or unparseable values fall back to the default.
///
/// ```ignore
/// let spins: u32 = env_get("GCH_SPIN_LIMIT", 128);
/// ```
#[inline]
pub fn env_get<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(v) => v.parse().unwrap_or(default),
        Err(_) => default,
    }
}

/// Get an environment variable as a boolean
///
/// Accepts "1", "true", "yes", "on" (case-insensitive) as true;
/// anything else set is false; unset returns the default.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(v) => ["1", "true", "yes", "on"]
            .iter()
            .any(|t| v.eq_ignore_ascii_case(t)),
        Err(_) => default,
    }
}

/// Get an environment variable as a string, or the default
#[inline]
pub fn env_get_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Check whether an environment variable is set at all
#[inline]
pub fn env_is_set(key: &str) -> bool {
    std::env::var_os(key).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_defaults() {
        let v: usize = env_get("__GCH_TEST_UNSET__", 42);
        assert_eq!(v, 42);
        assert!(env_get_bool("__GCH_TEST_UNSET__", true));
        assert!(!env_get_bool("__GCH_TEST_UNSET__", false));
        assert_eq!(env_get_str("__GCH_TEST_UNSET__", "fallback"), "fallback");
        assert!(!env_is_set("__GCH_TEST_UNSET__"));
    }

    #[test]
    fn test_set_and_parse() {
        std::env::set_var("__GCH_TEST_NUM__", "123");
        let v: usize = env_get("__GCH_TEST_NUM__", 0);
        assert_eq!(v, 123);

        std::env::set_var("__GCH_TEST_NUM__", "not-a-number");
        let v: usize = env_get("__GCH_TEST_NUM__", 9);
        assert_eq!(v, 9);
        std::env::remove_var("__GCH_TEST_NUM__");
    }

    #[test]
    fn test_bool_variants() {
        for truthy in ["1", "true", "TRUE", "yes", "On"] {
            std::env::set_var("__GCH_TEST_BOOL__", truthy);
            assert!(env_get_bool("__GCH_TEST_BOOL__", false), "{}", truthy);
        }
        for falsy in ["0", "false", "garbage"] {
            std::env::set_var("__GCH_TEST_BOOL__", falsy);
            assert!(!env_get_bool("__GCH_TEST_BOOL__", true), "{}", falsy);
        }
        std::env::remove_var("__GCH_TEST_BOOL__");
    }
}
