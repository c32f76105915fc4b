//! # Variable-Length Format Check
//!
//! Checks that variable-length driver formats are parseable. A format with
//! `size` 0 has its extent determined at parse time, so it must be the last
//! format specified in the format list, or else consumers won't be able to
//! tell one format from another.

use serde_json::Value;

use crate::checker::FormatChecker;
use crate::error::FormatError;

/// Registration name for the variable-length format check.
pub const VARLEN_FMT: &str = "varlen-fmt";

/// Checker enforcing that a size-0 format appears only in last position.
///
/// Registered under [`VARLEN_FMT`]; the scan itself is [`check`].
#[derive(Debug, Clone, Copy, Default)]
pub struct VarlenFmtChecker;

impl FormatChecker for VarlenFmtChecker {
    fn name(&self) -> &'static str {
        VARLEN_FMT
    }

    fn check(&self, fmt_list: &[Value]) -> Result<(), FormatError> {
        check(fmt_list)
    }
}

/// Scan a format list for a misplaced variable-length format.
///
/// Returns `Ok(())` if the list has no variable-length formats other than
/// possibly the last format in the list. Fails with
/// [`FormatError::MisplacedVarlenFormat`] at the first offending index
/// otherwise.
///
/// Only a `size` equal to integer 0 marks a format as variable-length.
/// Descriptors without a `size` key are skipped (as are non-object
/// entries, which cannot carry one), and non-integer values such as `0.0`
/// or `"0"` do not match.
pub fn check(fmt_list: &[Value]) -> Result<(), FormatError> {
    for (i, fmt) in fmt_list.iter().enumerate() {
        let Some(size) = fmt.get("size") else {
            continue;
        };

        if size.as_u64() == Some(0) && i + 1 != fmt_list.len() {
            return Err(FormatError::MisplacedVarlenFormat {
                index: i,
                fmt: fmt.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_varlen_last_is_valid() {
        let fmts = vec![json!({"size": 4}), json!({"size": 0})];
        check(&fmts).unwrap();
    }

    #[test]
    fn test_varlen_first_is_rejected() {
        let fmts = vec![json!({"size": 0}), json!({"size": 4})];
        let err = check(&fmts).unwrap_err();
        match err {
            FormatError::MisplacedVarlenFormat { index, fmt } => {
                assert_eq!(index, 0);
                assert_eq!(fmt, json!({"size": 0}));
            }
            other => panic!("Expected MisplacedVarlenFormat, got: {other}"),
        }
    }

    #[test]
    fn test_no_size_keys_is_valid() {
        let fmts = vec![json!({"name": "a"}), json!({"name": "b"})];
        check(&fmts).unwrap();
    }

    #[test]
    fn test_empty_list_is_valid() {
        check(&[]).unwrap();
    }

    #[test]
    fn test_sole_varlen_is_valid() {
        let fmts = vec![json!({"size": 0})];
        check(&fmts).unwrap();
    }

    #[test]
    fn test_multiple_varlen_fails_at_lowest_index() {
        let fmts = vec![json!({"size": 0}), json!({"size": 0}), json!({"size": 4})];
        let err = check(&fmts).unwrap_err();
        match err {
            FormatError::MisplacedVarlenFormat { index, .. } => assert_eq!(index, 0),
            other => panic!("Expected MisplacedVarlenFormat, got: {other}"),
        }
    }

    #[test]
    fn test_error_carries_full_descriptor() {
        let offending = json!({"name": "payload", "unit": "none", "type": "bytes", "size": 0});
        let fmts = vec![offending.clone(), json!({"name": "crc", "size": 4})];
        let err = check(&fmts).unwrap_err();
        match err {
            FormatError::MisplacedVarlenFormat { fmt, .. } => assert_eq!(fmt, offending),
            other => panic!("Expected MisplacedVarlenFormat, got: {other}"),
        }
    }

    #[test]
    fn test_only_integer_zero_marks_varlen() {
        // None of these size values is the integer 0, so none may trigger
        // the check regardless of position.
        let fmts = vec![
            json!({"size": 0.0}),
            json!({"size": null}),
            json!({"size": "0"}),
            json!({"size": false}),
            json!({"size": 4}),
        ];
        check(&fmts).unwrap();
    }

    #[test]
    fn test_non_object_entries_are_skipped() {
        let fmts = vec![json!("not-a-mapping"), json!(7), json!({"size": 4})];
        check(&fmts).unwrap();
    }

    #[test]
    fn test_check_is_idempotent() {
        let fmts = vec![json!({"size": 0}), json!({"size": 4})];
        let first = check(&fmts).unwrap_err().to_string();
        let second = check(&fmts).unwrap_err().to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_checker_name() {
        assert_eq!(VarlenFmtChecker.name(), VARLEN_FMT);
        assert_eq!(VARLEN_FMT, "varlen-fmt");
    }

    #[test]
    fn test_trait_impl_delegates_to_scan() {
        let fmts = vec![json!({"size": 0}), json!({"size": 4})];
        let err = VarlenFmtChecker.check(&fmts).unwrap_err();
        assert!(matches!(
            err,
            FormatError::MisplacedVarlenFormat { index: 0, .. }
        ));
    }
}
