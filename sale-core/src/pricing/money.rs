use rust_decimal::Decimal;

use super::totals::round_half_up;

/// Currency display configuration for the total field.
///
/// The default matches the deployment the engine was written for: Brazilian
/// real, comma decimal separator, dot thousands grouping (`R$ 1.234,56`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Prefix printed before the amount, e.g. `"R$"`.
    pub symbol: String,
    /// Separator between the integer and fractional parts.
    pub decimal_separator: char,
    /// Thousands grouping separator.
    pub group_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "R$".to_string(),
            decimal_separator: ',',
            group_separator: '.',
        }
    }
}

impl CurrencyFormat {
    /// Formats an amount as a currency-prefixed string with exactly two
    /// decimal digits and thousands separators.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use sale_core::pricing::CurrencyFormat;
    ///
    /// let format = CurrencyFormat::default();
    ///
    /// assert_eq!(format.format(dec!(2469)), "R$ 2.469,00");
    /// assert_eq!(format.format(dec!(0.5)), "R$ 0,50");
    /// ```
    pub fn format(
        &self,
        amount: Decimal,
    ) -> String {
        let rounded = round_half_up(amount);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let plain = format!("{:.2}", rounded.abs());
        let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        let mut out = String::with_capacity(self.symbol.len() + plain.len() + 4);
        out.push_str(&self.symbol);
        out.push(' ');
        if negative {
            out.push('-');
        }
        group_digits(int_part, self.group_separator, &mut out);
        out.push(self.decimal_separator);
        out.push_str(frac_part);
        out
    }

    /// Canonical zero amount, displayed whenever a total cannot be computed.
    pub fn zero(&self) -> String {
        self.format(Decimal::ZERO)
    }
}

fn group_digits(
    digits: &str,
    separator: char,
    out: &mut String,
) {
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
}

/// Parses user-entered amount text into a [`Decimal`].
///
/// Accepts both comma-decimal input (`"1.234,56"`, dots as grouping) and
/// dot-decimal input (`"1234.56"`). Empty or whitespace-only input is `None`;
/// anything unparseable is `None` as well (logged), never an error, so a bad
/// amount simply zeroes the total downstream.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = if trimmed.contains(',') {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.to_string()
    };

    match normalized.parse::<Decimal>() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(input = %s, "unparseable amount: {}", e);
            None
        }
    }
}

/// Formats a resolved price for the price *input* field: plain two-decimal
/// text with a dot separator (`"19.90"`), the shape the field submits.
pub fn format_price_field(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}
