use alloc::format;
use alloc::string::{String, ToString};

use infocard::MoneyFormatter;

const NBSP: char = '\u{a0}';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CurrencySpec {
    code: &'static str,
    symbol: &'static str,
    /// Number of minor-unit digits.
    exponent: u32,
}

const CURRENCIES: &[CurrencySpec] = &[
    CurrencySpec { code: "USD", symbol: "$", exponent: 2 },
    CurrencySpec { code: "EUR", symbol: "€", exponent: 2 },
    CurrencySpec { code: "GBP", symbol: "£", exponent: 2 },
    CurrencySpec { code: "JPY", symbol: "¥", exponent: 0 },
    CurrencySpec { code: "AUD", symbol: "A$", exponent: 2 },
    CurrencySpec { code: "CAD", symbol: "CA$", exponent: 2 },
    CurrencySpec { code: "CHF", symbol: "CHF", exponent: 2 },
    CurrencySpec { code: "SEK", symbol: "kr", exponent: 2 },
    CurrencySpec { code: "NOK", symbol: "kr", exponent: 2 },
    CurrencySpec { code: "DKK", symbol: "kr", exponent: 2 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct LocaleStyle {
    group: char,
    decimal: char,
    symbol_first: bool,
}

impl LocaleStyle {
    fn for_locale(locale: &str) -> Self {
        let language = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "de" | "nl" | "es" | "it" | "pt" | "da" => Self {
                group: '.',
                decimal: ',',
                symbol_first: false,
            },
            "fi" | "fr" | "sv" | "nb" | "no" | "pl" | "cs" | "ru" => Self {
                group: NBSP,
                decimal: ',',
                symbol_first: false,
            },
            _ => Self {
                group: ',',
                decimal: '.',
                symbol_first: true,
            },
        }
    }
}

/// Formats amounts given in minor units (cents) with a small built-in currency table.
///
/// Unknown currencies use their code as the symbol and two decimals. The locale's language
/// subtag picks separators and whether the symbol leads or trails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MinorUnitFormatter;

impl MinorUnitFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl MoneyFormatter for MinorUnitFormatter {
    fn format_money(&self, amount: i64, currency: &str, locale: &str) -> String {
        let spec = CURRENCIES
            .iter()
            .copied()
            .find(|c| c.code.eq_ignore_ascii_case(currency))
            .unwrap_or(CurrencySpec {
                code: "",
                symbol: "",
                exponent: 2,
            });
        let symbol = if spec.symbol.is_empty() {
            currency
        } else {
            spec.symbol
        };
        let style = LocaleStyle::for_locale(locale);

        let divisor = 10u64.pow(spec.exponent);
        let abs = amount.unsigned_abs();
        let mut number = group_digits(abs / divisor, style.group);
        if spec.exponent > 0 {
            number.push(style.decimal);
            number.push_str(&format!(
                "{:0width$}",
                abs % divisor,
                width = spec.exponent as usize
            ));
        }

        let sign = if amount < 0 { "-" } else { "" };
        if !style.symbol_first {
            format!("{sign}{number}{NBSP}{symbol}")
        } else if symbol.chars().all(|c| c.is_ascii_alphabetic()) {
            format!("{sign}{symbol}{NBSP}{number}")
        } else {
            format!("{sign}{symbol}{number}")
        }
    }
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
