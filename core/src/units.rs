//! Smallest-unit integer amounts and their decimal renderings.
//!
//! Contract reads return raw `uint256` values scaled by `10^decimals`.
//! Everything here works on the integer first, so a float only ever
//! appears as the final step of a conversion.

use std::fmt;
use std::num::ParseFloatError;

use ethers::types::U256;
use thiserror::Error;

/// Scaling exponent of "ether"-style tokens.
pub const ETHER_DECIMALS: u32 = 18;

/// `10^77` is the largest power of ten a `U256` can hold.
pub const MAX_DECIMALS: u32 = 77;

#[derive(Error, Debug)]
pub enum UnitsError {
    #[error("decimal exponent {0} exceeds {MAX_DECIMALS}")]
    DecimalsOutOfRange(u32),

    #[error("decimal string is not a number: {0}")]
    NotANumber(#[from] ParseFloatError),
}

/// A token quantity in its smallest unit together with the token's exponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenAmount {
    raw: U256,
    decimals: u32,
}

impl TokenAmount {
    pub fn new(raw: U256, decimals: u32) -> Result<Self, UnitsError> {
        if decimals > MAX_DECIMALS {
            return Err(UnitsError::DecimalsOutOfRange(decimals));
        }
        Ok(Self { raw, decimals })
    }

    /// Shorthand for an 18-decimal amount.
    pub fn ether(raw: U256) -> Self {
        Self {
            raw,
            decimals: ETHER_DECIMALS,
        }
    }

    pub fn raw(&self) -> U256 {
        self.raw
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Exact decimal rendering with every fractional digit,
    /// e.g. `1500000000000000000` at 18 decimals is `"1.500000000000000000"`.
    pub fn to_decimal_string(&self) -> String {
        if self.decimals == 0 {
            return self.raw.to_string();
        }
        let (int, frac) = self.raw.div_mod(U256::exp10(self.decimals as usize));
        format!(
            "{}.{:0>width$}",
            int,
            frac.to_string(),
            width = self.decimals as usize
        )
    }

    /// Round half-up to `places` fractional digits using integer arithmetic only.
    pub fn to_fixed(&self, places: u32) -> String {
        let places = places as usize;
        let decimals = self.decimals as usize;

        if places >= decimals {
            let mut s = self.to_decimal_string();
            if places > 0 {
                if decimals == 0 {
                    s.push('.');
                }
                s.extend(std::iter::repeat_n('0', places - decimals));
            }
            return s;
        }

        let divisor = U256::exp10(decimals - places);
        let (mut scaled, rem) = self.raw.div_mod(divisor);
        // rem >= divisor / 2, written so odd divisors round the same way
        if rem >= divisor - rem {
            scaled += U256::one();
        }

        if places == 0 {
            return scaled.to_string();
        }
        let (int, frac) = scaled.div_mod(U256::exp10(places));
        format!("{}.{:0>width$}", int, frac.to_string(), width = places)
    }

    /// Nearest `f64` to the exact decimal value.
    pub fn to_f64(&self) -> Result<f64, UnitsError> {
        Ok(self.to_decimal_string().parse::<f64>()?)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

// Digits past `places` inspected for an exact tie. Any finite f64 >= 0.001 that
// is not exactly on a tie differs from it within the first 22 of them.
const TIE_CHECK_DIGITS: usize = 40;

/// Format `x` with `places` fractional digits, rounding exact ties away from zero.
///
/// `{:.N}` rounds ties to even, so `0.125` would become `"0.12"`; this gives
/// `"0.13"`, the same half-up rule [`TokenAmount::to_fixed`] uses.
pub fn format_fixed(x: f64, places: usize) -> String {
    let rounded = format!("{:.*}", places, x);
    if !x.is_finite() {
        return rounded;
    }

    let exact = format!("{:.*}", places + TIE_CHECK_DIGITS, x);
    let (head, tail) = exact.split_at(exact.len() - TIE_CHECK_DIGITS);
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return rounded;
    }

    increment_last_digit(head.trim_end_matches('.'))
}

/// Add one unit in the last place to a plain decimal string, keeping its sign.
fn increment_last_digit(s: &str) -> String {
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };

    let mut out: Vec<u8> = digits.bytes().collect();
    let mut carry = true;
    for b in out.iter_mut().rev() {
        if !carry {
            break;
        }
        match *b {
            b'.' => continue,
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                carry = false;
            }
        }
    }
    if carry {
        out.insert(0, b'1');
    }

    format!("{sign}{}", String::from_utf8_lossy(&out))
}
