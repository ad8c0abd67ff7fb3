//! Option type (Call / Put) definitions.

use std::fmt;
use std::str::FromStr;

use crate::analytical::AnalyticalError;

/// Type of option payoff.
///
/// # Variants
/// - `Call`: max(S - K, 0) at expiry
/// - `Put`: max(K - S, 0) at expiry
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// let put: OptionType = "Put".parse().unwrap();
/// assert_eq!(put, OptionType::Put);
/// assert_eq!(put.intrinsic(90.0, 100.0), 10.0);
///
/// // No silent default for anything else.
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Sign applied to d₁, d₂ and the valuation terms: +1 for a call, -1 for a put.
    ///
    /// A put is the call formula evaluated at (-d₁, -d₂) with every term negated.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Payoff at expiry: max(ω(S - K), 0).
    ///
    /// NaN inputs produce NaN.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        positive_part(self.sign() * (spot - strike))
    }

    /// Returns true for [`OptionType::Call`].
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Display name ("Call" / "Put").
    pub fn name(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

/// max(x, 0) that keeps NaN instead of collapsing it to zero.
#[inline]
pub(crate) fn positive_part(x: f64) -> f64 {
    if x > 0.0 || x.is_nan() {
        x
    } else {
        0.0
    }
}

impl FromStr for OptionType {
    type Err = AnalyticalError;

    /// Accepts "call"/"c" and "put"/"p", case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(AnalyticalError::UnknownOptionType {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for OptionType {
    type Error = AnalyticalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OptionType> for String {
    fn from(value: OptionType) -> Self {
        value.name().to_string()
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
