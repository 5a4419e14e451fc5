//! Macro for wire-name conversions on small protocol enums
//!
//! Regions, push target actions and query types all travel as short lowercase
//! tokens. This macro gives each enum `as_str`, `Display` and a
//! case-insensitive `FromStr` from a single mapping table.
//!
//! # Example
//!
//! ```rust
//! use clevertap_domain::impl_wire_name_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Channel {
//!     Push,
//!     Email,
//! }
//!
//! impl_wire_name_conversions!(Channel {
//!     Push => "push",
//!     Email => "email",
//! });
//!
//! assert_eq!(Channel::Push.as_str(), "push");
//! assert_eq!("EMAIL".parse::<Channel>().unwrap(), Channel::Email);
//! ```

/// Implements `as_str`, `Display` and `FromStr` for wire-level enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase wire
///   token
///
/// Parsing is case-insensitive; the error names the enum and echoes the input.
#[macro_export]
macro_rules! impl_wire_name_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Wire token for this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestRegion {
        Europe,
        India,
    }

    impl_wire_name_conversions!(TestRegion {
        Europe => "eu1",
        India => "in1",
    });

    #[test]
    fn test_display_uses_wire_token() {
        assert_eq!(TestRegion::Europe.to_string(), "eu1");
        assert_eq!(TestRegion::India.as_str(), "in1");
    }

    #[test]
    fn test_fromstr_is_case_insensitive() {
        assert_eq!(TestRegion::from_str("EU1").unwrap(), TestRegion::Europe);
        assert_eq!(TestRegion::from_str(" in1 ").unwrap(), TestRegion::India);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestRegion::from_str("mars1");
        assert!(result.unwrap_err().contains("Invalid TestRegion: mars1"));
        assert!(TestRegion::from_str("").is_err());
    }
}
