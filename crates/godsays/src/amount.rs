use crate::error::{InvalidAmount, Result};

/// Smallest number of entries a phrase may be built from.
pub const MIN_AMOUNT: usize = 1;

/// Largest number of entries a phrase may be built from.
pub const MAX_AMOUNT: usize = 1000;

/// Sample count used when the caller does not ask for one.
pub const DEFAULT_AMOUNT: usize = 32;

/// Checks that `amount` lies within [`MIN_AMOUNT`]..=[`MAX_AMOUNT`].
///
/// Takes a signed value so that negative user input can be reported as such
/// instead of wrapping around.
///
/// # Errors
/// - [`InvalidAmount::BelowMinimum`] if `amount < MIN_AMOUNT`
/// - [`InvalidAmount::AboveMaximum`] if `amount > MAX_AMOUNT`
///
/// # Example
/// ```
/// use godsays::{validate_amount, InvalidAmount};
///
/// assert_eq!(validate_amount(10), Ok(10));
/// assert!(matches!(validate_amount(0), Err(InvalidAmount::BelowMinimum { .. })));
/// ```
pub fn validate_amount(amount: i64) -> Result<usize, InvalidAmount> {
    if amount < MIN_AMOUNT as i64 {
        return Err(InvalidAmount::BelowMinimum {
            value: amount,
            min: MIN_AMOUNT,
        });
    }
    if amount > MAX_AMOUNT as i64 {
        return Err(InvalidAmount::AboveMaximum {
            value: amount,
            max: MAX_AMOUNT,
        });
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(amount as usize)
}

/// Parses user supplied text (a CLI flag or a query parameter) into a
/// validated amount.
///
/// Surrounding whitespace is ignored. Anything that is not a plain base-10
/// integer, including decimals like `"10.5"`, is rejected as
/// [`InvalidAmount::NotANumber`].
///
/// # Errors
/// Returns [`InvalidAmount`] if the text is not an integer or is out of range.
pub fn parse_amount(input: &str) -> Result<usize> {
    let value = input
        .trim()
        .parse::<i64>()
        .map_err(|_| InvalidAmount::NotANumber {
            input: input.to_owned(),
        })?;
    Ok(validate_amount(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn accepts_bounds_inclusive() {
        assert_eq!(validate_amount(1), Ok(1));
        assert_eq!(validate_amount(1000), Ok(1000));
        assert_eq!(validate_amount(DEFAULT_AMOUNT as i64), Ok(DEFAULT_AMOUNT));
    }

    #[test]
    fn rejects_out_of_range_with_violated_bound() {
        assert_eq!(
            validate_amount(0),
            Err(InvalidAmount::BelowMinimum { value: 0, min: 1 })
        );
        assert_eq!(
            validate_amount(-1),
            Err(InvalidAmount::BelowMinimum { value: -1, min: 1 })
        );
        assert_eq!(
            validate_amount(1001),
            Err(InvalidAmount::AboveMaximum {
                value: 1001,
                max: 1000
            })
        );
    }

    #[test]
    fn error_message_names_both_bounds() {
        let msg = validate_amount(5000).unwrap_err().to_string();
        assert!(msg.contains('1'), "{msg}");
        assert!(msg.contains("1000"), "{msg}");
    }

    #[test]
    fn parses_numeric_text() {
        assert_eq!(parse_amount("1"), Ok(1));
        assert_eq!(parse_amount("100"), Ok(100));
        assert_eq!(parse_amount(" 42 "), Ok(42));
    }

    #[test]
    fn rejects_non_numeric_text() {
        for input in ["abc", "10.5", "", "1e3"] {
            assert!(
                matches!(
                    parse_amount(input),
                    Err(Error::InvalidAmount(InvalidAmount::NotANumber { .. }))
                ),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn rejects_numeric_text_out_of_range() {
        for input in ["0", "-1", "1001"] {
            assert!(
                matches!(parse_amount(input), Err(Error::InvalidAmount(_))),
                "{input:?} should be out of range"
            );
        }
    }
}
