//! Debug-checked, release-unchecked slice access.
//!
//! The slider's offset loop runs on every animation frame and inside
//! unthrottled pointer-move handlers, so indexing there must not pay for
//! bounds checks in release builds. In debug builds the same sites panic
//! with a useful message instead.
//!
//! Usage:
//! ```rust
//! use vitrine_engine::fast;
//!
//! let i = 2;
//!
//! let offsets = vec![0.0f32, 4.0, 8.0];
//! // Read: fast!(slice, [index])
//! let off = *fast!(offsets, [i]);
//! assert_eq!(off, 8.0);
//!
//! let mut offsets = vec![0.0f32; 3];
//! // Write: fast!(slice, [index] = value)
//! fast!(offsets, [i] = -12.5);
//! assert_eq!(offsets[i], -12.5);
//! ```

/// Zero-cost bounds checking macro
///
/// - Debug: normal indexing with bounds checks
/// - Release: `get_unchecked`/`get_unchecked_mut`
///
/// Callers must guarantee the index is in range; every use in this crate
/// indexes with a loop variable bounded by the slice length.
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_fast_read() {
        let offsets = vec![0.0f32, 4.0, 8.0];
        let val = *fast!(offsets, [2]);
        assert_eq!(val, 8.0);
    }

    #[test]
    fn test_fast_write() {
        let mut offsets = vec![0.0f32; 5];
        fast!(offsets, [2] = -7.5);
        assert_eq!(offsets[2], -7.5);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_fast_bounds_check_debug() {
        let offsets = vec![0.0f32; 3];
        let _ = *fast!(offsets, [10]); // Should panic in debug
    }
}
