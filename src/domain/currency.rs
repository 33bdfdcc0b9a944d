//! Currency formatting for referral amounts

use crate::error::{MailtagsError, Result};
use serde::{Deserialize, Serialize};

/// Most decimal places a minor-unit amount can carry in an `i64`
pub const MAX_DECIMALS: u32 = 18;

/// Where the currency symbol goes relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    #[default]
    Before,
    After,
}

/// Currency display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    pub symbol: String,
    pub position: SymbolPosition,
    pub decimals: u32,
    pub thousands_separator: String,
    pub decimal_separator: String,
}

impl Default for Currency {
    fn default() -> Self {
        Currency {
            symbol: "$".to_string(),
            position: SymbolPosition::Before,
            decimals: 2,
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
        }
    }
}

impl Currency {
    /// Reject settings the formatter cannot represent
    pub fn validate(&self) -> Result<()> {
        if self.decimals > MAX_DECIMALS {
            return Err(MailtagsError::Config(format!(
                "currency.decimals must be at most {}, got {}",
                MAX_DECIMALS, self.decimals
            )));
        }
        Ok(())
    }

    /// Format an amount given in minor units (cents for two decimals)
    pub fn format_minor(&self, minor: i64) -> String {
        let scale = 10u64.pow(self.decimals.min(MAX_DECIMALS));
        let negative = minor < 0;
        let abs = minor.unsigned_abs();
        let whole = abs / scale;
        let fraction = abs % scale;
        self.assemble(negative, whole, fraction)
    }

    /// Format an amount given in major units, rounded to the configured decimals
    pub fn format(&self, major: f64) -> String {
        let scale = 10f64.powi(self.decimals as i32);
        let minor = (major * scale).round() as i64;
        self.format_minor(minor)
    }

    fn assemble(&self, negative: bool, whole: u64, fraction: u64) -> String {
        let mut number = group_thousands(whole, &self.thousands_separator);
        if self.decimals > 0 {
            number.push_str(&self.decimal_separator);
            number.push_str(&format!(
                "{:0width$}",
                fraction,
                width = self.decimals as usize
            ));
        }

        let sign = if negative { "-" } else { "" };
        match self.position {
            SymbolPosition::Before => format!("{}{}{}", sign, self.symbol, number),
            SymbolPosition::After => format!("{}{}{}", sign, number, self.symbol),
        }
    }
}

fn group_thousands(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
