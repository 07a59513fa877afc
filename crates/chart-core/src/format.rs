// File: crates/chart-core/src/format.rs
// Summary: Label format templates applied to axis values.

use std::borrow::Cow;
use std::str::FromStr;

use crate::error::{ChartError, Result};

/// How an axis turns a tick value into label text.
#[derive(Clone, Debug)]
pub enum LabelFormat {
    /// Fixed number of decimals followed by a literal suffix, e.g. `"12 ms"`.
    Numeric {
        decimals: usize,
        suffix: Cow<'static, str>,
    },
    /// Up to one decimal and a literal `%`. Zero renders as `"0"`.
    /// The value is printed as-is, not multiplied by 100.
    Percent,
    /// Magnitude rounded to an integer plus a unit (`-30` → `"30s"`); zero renders as `"0"`.
    TimeOffset { unit: Cow<'static, str> },
    Custom(fn(f64) -> String),
}

impl LabelFormat {
    /// Plain integer labels without suffix.
    pub const fn integer() -> Self {
        LabelFormat::Numeric { decimals: 0, suffix: Cow::Borrowed("") }
    }

    pub const fn seconds_ago() -> Self {
        LabelFormat::TimeOffset { unit: Cow::Borrowed("s") }
    }

    pub fn numeric(decimals: usize, suffix: impl Into<Cow<'static, str>>) -> Self {
        LabelFormat::Numeric { decimals, suffix: suffix.into() }
    }

    pub fn apply(&self, value: f64) -> String {
        // fold -0.0 into 0.0 so it never prints a sign
        let value = value + 0.0;
        match self {
            LabelFormat::Numeric { decimals, suffix } => {
                let decimals = *decimals;
                format!("{value:.decimals$}{suffix}")
            }
            LabelFormat::Percent => {
                if value == 0.0 {
                    "0".to_string()
                } else {
                    format!("{}%", one_decimal(value))
                }
            }
            LabelFormat::TimeOffset { unit } => {
                if value == 0.0 {
                    "0".to_string()
                } else {
                    format!("{}{unit}", value.abs().round())
                }
            }
            LabelFormat::Custom(f) => f(value),
        }
    }

    /// Parse a compact template.
    ///
    /// Accepted shapes: `{}` / `{}suffix` (integer), `{:.N}` / `{:.N}suffix`,
    /// `{:%}` (percent) and `{:ago}unit` (time offset).
    pub fn parse(template: &str) -> Result<Self> {
        let invalid = || ChartError::InvalidFormat(template.to_string());
        let rest = template.strip_prefix('{').ok_or_else(invalid)?;
        let close = rest.find('}').ok_or_else(invalid)?;
        let (spec, suffix) = (&rest[..close], &rest[close + 1..]);
        let suffix: Cow<'static, str> = Cow::Owned(suffix.to_string());
        match spec {
            "" => Ok(LabelFormat::Numeric { decimals: 0, suffix }),
            ":%" if suffix.is_empty() => Ok(LabelFormat::Percent),
            ":ago" => Ok(LabelFormat::TimeOffset { unit: suffix }),
            _ => {
                let digits = spec.strip_prefix(":.").ok_or_else(invalid)?;
                let decimals = digits.parse::<usize>().map_err(|_| invalid())?;
                Ok(LabelFormat::Numeric { decimals, suffix })
            }
        }
    }
}

/// `Custom` formats never compare equal; function pointer identity is not stable.
impl PartialEq for LabelFormat {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LabelFormat::Numeric { decimals: a, suffix: sa }, LabelFormat::Numeric { decimals: b, suffix: sb }) => {
                a == b && sa == sb
            }
            (LabelFormat::Percent, LabelFormat::Percent) => true,
            (LabelFormat::TimeOffset { unit: a }, LabelFormat::TimeOffset { unit: b }) => a == b,
            _ => false,
        }
    }
}

impl Default for LabelFormat {
    fn default() -> Self {
        LabelFormat::integer()
    }
}

impl FromStr for LabelFormat {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        LabelFormat::parse(s)
    }
}

/// Round to one decimal and drop a trailing `.0`.
pub fn one_decimal(value: f64) -> String {
    let r = (value * 10.0).round() / 10.0 + 0.0;
    if r.fract() == 0.0 {
        format!("{r:.0}")
    } else {
        format!("{r:.1}")
    }
}
