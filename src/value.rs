use thiserror::Error;

/// Error produced when a raw token cannot be converted into the target value type.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert '{token}' to {type_name}.")]
pub struct InvalidToken {
    pub(crate) token: String,
    pub(crate) type_name: &'static str,
}

impl InvalidToken {
    fn new<T>(token: &str) -> Self {
        Self {
            token: token.to_string(),
            type_name: std::any::type_name::<T>(),
        }
    }
}

/// Behaviour to convert a raw command line token into a typed value.
///
/// Conversions are strict and locale-independent.
/// The `Default` bound supplies the initial contents of a [`ValueFlag`](crate::ValueFlag)'s
/// slots before (or in spite of) a failed match.
pub trait FlagValue: Sized + Default + Clone {
    /// Convert `token` into the target type.
    fn convert(token: &str) -> Result<Self, InvalidToken>;
}

impl FlagValue for String {
    fn convert(token: &str) -> Result<Self, InvalidToken> {
        Ok(token.to_string())
    }
}

macro_rules! convert_via_from_str {
    ($($t:ty),* $(,)?) => {$(
        impl FlagValue for $t {
            fn convert(token: &str) -> Result<Self, InvalidToken> {
                token.parse().map_err(|_| InvalidToken::new::<$t>(token))
            }
        }
    )*};
}

// Signed integers take decimal notation only.
convert_via_from_str!(i8, i16, i32, i64, i128, isize, f32, f64);

macro_rules! convert_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl FlagValue for $t {
            fn convert(token: &str) -> Result<Self, InvalidToken> {
                let result = match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
                    Some(hex) => <$t>::from_str_radix(hex, 16),
                    None => token.parse(),
                };
                result.map_err(|_| InvalidToken::new::<$t>(token))
            }
        }
    )*};
}

// Unsigned integers additionally accept the '0x'/'0X' hexadecimal prefix.
convert_unsigned!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", 0)]
    #[case("-12", -12)]
    #[case("127", 127)]
    fn convert_signed(#[case] token: &str, #[case] expected: i32) {
        assert_eq!(i32::convert(token).unwrap(), expected);
    }

    #[rstest]
    #[case("0", 0)]
    #[case("255", 255)]
    #[case("0x10", 16)]
    #[case("0XfF", 255)]
    fn convert_unsigned(#[case] token: &str, #[case] expected: u32) {
        assert_eq!(u32::convert(token).unwrap(), expected);
    }

    #[rstest]
    #[case(".558", 0.558)]
    #[case("0.89", 0.89)]
    #[case("-1.5", -1.5)]
    #[case("2", 2.0)]
    fn convert_float(#[case] token: &str, #[case] expected: f64) {
        assert_eq!(f64::convert(token).unwrap(), expected);
    }

    #[test]
    fn convert_string() {
        assert_eq!(String::convert("in.txt").unwrap(), "in.txt".to_string());
        assert_eq!(String::convert("").unwrap(), "".to_string());
    }

    #[rstest]
    #[case("notanumber")]
    #[case("12.5")]
    #[case("")]
    fn convert_signed_invalid(#[case] token: &str) {
        let error = i64::convert(token).unwrap_err();
        assert_matches!(error, InvalidToken { token: t, type_name } => {
            assert_eq!(t, token.to_string());
            assert_eq!(type_name, "i64");
        });
    }

    #[rstest]
    #[case("notanumber")]
    #[case("-1")]
    #[case("0xzz")]
    #[case("0x")]
    fn convert_unsigned_invalid(#[case] token: &str) {
        let error = u32::convert(token).unwrap_err();
        assert_eq!(
            error.to_string(),
            format!("cannot convert '{token}' to u32.")
        );
    }

    #[test]
    fn convert_float_invalid() {
        assert_matches!(f32::convert("1.2.3"), Err(InvalidToken { .. }));
    }
}
