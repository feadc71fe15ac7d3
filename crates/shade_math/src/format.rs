//! Text formatting and parsing
//!
//! Vectors print as their components joined by a separator, `"1, 2, 3"` by
//! default, and parse back from the same shape. `parse_with` is strict and
//! reports what went wrong; `try_parse` never fails and falls back to the
//! default (all zero / all `false`) vector.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseVectorError;
use crate::vector::{Vec2, Vec3, Vec4};

/// Separator used by `Display` and by `to_string_with` callers that have no preference
pub const DEFAULT_SEPARATOR: &str = ", ";

/// Write `parts` joined by `sep`, forwarding the formatter's precision to each part.
fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, parts: &[T], sep: &str) -> fmt::Result {
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, part)?,
            None => write!(f, "{}", part)?,
        }
    }
    Ok(())
}

/// Split `s` into trimmed parts. An empty separator splits on runs of whitespace.
fn split_parts<'a>(s: &'a str, sep: &str) -> Vec<&'a str> {
    if sep.is_empty() {
        s.split_whitespace().collect()
    } else {
        s.split(sep).map(str::trim).collect()
    }
}

fn parse_components<T: FromStr, const N: usize>(s: &str, sep: &str) -> Result<[T; N], ParseVectorError> {
    let parts = split_parts(s, sep);
    if parts.len() != N {
        return Err(ParseVectorError::WrongArity { expected: N, found: parts.len() });
    }

    let mut values = Vec::with_capacity(N);
    for (index, text) in parts.into_iter().enumerate() {
        let value = text.parse::<T>().map_err(|_| ParseVectorError::InvalidComponent {
            index,
            text: text.to_string(),
        })?;
        values.push(value);
    }

    // Length checked above
    values.try_into().map_err(|rest: Vec<T>| ParseVectorError::WrongArity { expected: N, found: rest.len() })
}

/// Formatter adapter returned by `display_with`
pub struct Joined<'a, V> {
    vector: &'a V,
    sep: &'a str,
}

macro_rules! impl_format {
    ($($V:ident, $n:literal);+ $(;)?) => {
        $(
            impl<T: fmt::Display> fmt::Display for $V<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&self.display_with(DEFAULT_SEPARATOR), f)
                }
            }

            impl<'a, T: fmt::Display> fmt::Display for Joined<'a, $V<T>> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let v = self.vector;
                    write_joined(f, &v.as_refs(), self.sep)
                }
            }

            impl<T: fmt::Display> $V<T> {
                /// Lazily formatted view with a custom separator
                #[inline]
                pub fn display_with<'a>(&'a self, sep: &'a str) -> Joined<'a, Self> {
                    Joined { vector: self, sep }
                }

                pub fn to_string_with(&self, sep: &str) -> String {
                    self.display_with(sep).to_string()
                }
            }

            impl<T: FromStr> $V<T> {
                /// Parse exactly as many `sep`-separated parts as the vector has components.
                ///
                /// Parts are trimmed, so `"1,2"` and `"1, 2"` both parse with `","`.
                pub fn parse_with(s: &str, sep: &str) -> Result<Self, ParseVectorError> {
                    parse_components::<T, $n>(s, sep).map(Self::from_array)
                }
            }

            impl<T: FromStr + Default> $V<T> {
                /// Permissive parse: `(true, value)` on success, `(false, default)` otherwise
                pub fn try_parse(s: &str, sep: &str) -> (bool, Self) {
                    match Self::parse_with(s, sep) {
                        Ok(v) => (true, v),
                        Err(err) => {
                            log::debug!("Rejected {} input {:?}: {}", stringify!($V), s, err);
                            (false, Self::default())
                        }
                    }
                }
            }

            impl<T: FromStr> FromStr for $V<T> {
                type Err = ParseVectorError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::parse_with(s, ",")
                }
            }
        )+
    };
}

impl<T> Vec2<T> {
    fn as_refs(&self) -> [&T; 2] {
        [&self.x, &self.y]
    }
}

impl<T> Vec3<T> {
    fn as_refs(&self) -> [&T; 3] {
        [&self.x, &self.y, &self.z]
    }
}

impl<T> Vec4<T> {
    fn as_refs(&self) -> [&T; 4] {
        [&self.x, &self.y, &self.z, &self.w]
    }
}

impl_format!(Vec2, 2; Vec3, 3; Vec4, 4);
