//! Exit code constants for the scopediff CLI.
//!
//! - 0: Success (including "no changes detected")
//! - 1: User error (bad args, invalid config)
//! - 2: Missing input (no diff text could be obtained)
//! - 3: Git operation failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an invalid configuration file.
pub const USER_ERROR: i32 = 1;

/// Missing input: the diff source or a compared file is unavailable.
pub const MISSING_INPUT: i32 = 2;

/// Git operation failure: `git diff` could not be run or failed.
pub const GIT_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, MISSING_INPUT, GIT_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
