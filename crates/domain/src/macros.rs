//! Macro for string conversions of closed tag enums
//!
//! Tag enums (`Service`, `ErrorType`, `ItemStatus`, `UserRole`) travel as
//! lowercase strings in logs, headers, and JSON. This macro generates
//! `as_str`, `Display`, and a case-insensitive `FromStr` from one mapping.
//!
//! # Example
//!
//! ```rust
//! use portalkit_domain::impl_tag_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Channel {
//!     Email,
//!     Sms,
//! }
//!
//! impl_tag_conversions!(Channel {
//!     Email => "email",
//!     Sms => "sms",
//! });
//!
//! assert_eq!(Channel::Sms.as_str(), "sms");
//! assert_eq!("EMAIL".parse::<Channel>().unwrap(), Channel::Email);
//! ```

/// Implements `as_str`, `Display`, and `FromStr` for a tag enum.
///
/// Parsing is case-insensitive; unknown input yields a descriptive `String`
/// error naming the enum.
#[macro_export]
macro_rules! impl_tag_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Stable lowercase wire name.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
