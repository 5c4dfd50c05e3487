#[doc(hidden)]
pub mod __private {
    pub use serde::{Deserialize, Deserializer, Serialize, Serializer};
    pub use smol_str::SmolStr;
}

#[doc(hidden)]
#[macro_export]
macro_rules! __match_ignore_ascii_case_str {
    (match ($s:expr) { $caseA:literal $(| $caseAVar:literal)* => $retA:expr $(, $caseB:literal $(| $caseBVar:literal)* => $retB:expr)*, _ => $fallback:expr $(,)? }) => {
        {
            let s = ($s).trim();
            if s.eq_ignore_ascii_case($caseA) $(|| s.eq_ignore_ascii_case($caseAVar))* {
                $retA
            }
            $(
                else if s.eq_ignore_ascii_case($caseB) $(|| s.eq_ignore_ascii_case($caseBVar))* {
                    $retB
                }
            )*
            else {
                $fallback
            }
        }
    };
}
#[doc(inline)]
pub(crate) use crate::__match_ignore_ascii_case_str as match_ignore_ascii_case_str;

#[doc(hidden)]
#[macro_export]
/// Defines an extensible classification tag.
///
/// Each known variant maps to its canonical label (used for display and
/// serialization) and optional aliases accepted when parsing. Unrecognised
/// labels are preserved in the generated `Other(String)` variant.
macro_rules! __tag_enum {
    (
        $(#[$m:meta])*
        $enum_vis:vis enum $enum_name:ident
        { $( $(#[$enum_meta:meta])* $enum_var:ident => $enum_val:literal $(| $enum_val_alt:literal)* ),* $(,)? }
    ) => {
        $(#[$m])*
        #[derive(Debug, PartialEq, Eq, Clone, Hash)]
        $enum_vis enum $enum_name {
            $(
                $(#[$enum_meta])*
                $enum_var
            ),*
            ,
            /// A label not known to this crate.
            Other(String)
        }

        impl $enum_name {
            /// Returns the canonical label of this tag.
            #[must_use]
            $enum_vis fn as_str(&self) -> &str {
                match self {
                    $( Self::$enum_var => $enum_val),*
                    ,Self::Other(v) => v,
                }
            }

            /// Returns the canonical label of this tag as a [`SmolStr`](smol_str::SmolStr).
            #[must_use]
            $enum_vis fn as_smol_str(&self) -> $crate::macros::__private::SmolStr {
                match self {
                    $( Self::$enum_var => $crate::macros::__private::SmolStr::new_static($enum_val)),*
                    ,Self::Other(v) => $crate::macros::__private::SmolStr::new(v),
                }
            }

            /// Same as `FromStr` or `From<&str>` but returning
            /// `None` for unknown values.
            #[must_use]
            $enum_vis fn strict_parse(s: &str) -> Option<Self> {
                $crate::macros::match_ignore_ascii_case_str!(match(s) {
                    $($enum_val $(| $enum_val_alt)* => Some(Self::$enum_var)),*
                    , _ => None,
                })
            }
        }

        impl<'a> From<&'a str> for $enum_name {
            fn from(s: &'a str) -> Self {
                Self::strict_parse(s).unwrap_or_else(|| Self::Other(s.trim().to_owned()))
            }
        }

        impl From<String> for $enum_name {
            fn from(s: String) -> Self {
                match Self::strict_parse(&s) {
                    Some(tag) => tag,
                    None => Self::Other(s),
                }
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(s.into())
            }
        }

        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::macros::__private::Serialize for $enum_name {
            #[inline]
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::macros::__private::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::macros::__private::Deserialize<'de> for $enum_name {
            #[inline]
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::macros::__private::Deserializer<'de>,
            {
                let s = <::std::borrow::Cow<'de, str> as $crate::macros::__private::Deserialize<'de>>::deserialize(deserializer)?;
                Ok(Self::from(&*s))
            }
        }
    };
}
#[doc(inline)]
pub(crate) use crate::__tag_enum as tag_enum;
