use crate::i18n::Language;

struct MoneyStyle {
    symbol: &'static str,
    spaced: bool,
    rate: f64,
    group_separator: char,
    decimal_separator: char,
    /// Integer digits needed before grouping kicks in.
    min_grouping_digits: usize,
}

fn style(language: Language) -> MoneyStyle {
    match language {
        Language::PtBr => MoneyStyle {
            symbol: "R$",
            spaced: true,
            rate: 1.0,
            group_separator: '.',
            decimal_separator: ',',
            min_grouping_digits: 4,
        },
        Language::En => MoneyStyle {
            symbol: "$",
            spaced: false,
            rate: 0.20,
            group_separator: ',',
            decimal_separator: '.',
            min_grouping_digits: 4,
        },
        Language::Es => MoneyStyle {
            symbol: "$",
            spaced: false,
            rate: 0.20,
            group_separator: '.',
            decimal_separator: ',',
            min_grouping_digits: 5,
        },
    }
}

/// BRL amount converted to the language's display currency.
pub fn convert(amount_brl: f64, language: Language) -> f64 {
    amount_brl * style(language).rate
}

/// Formats a BRL amount for display in `language`'s currency.
///
/// Amounts of a million or more are shortened to whole millions (`R$ 290M`).
pub fn format_currency(amount_brl: f64, language: Language) -> String {
    let converted = convert(amount_brl, language);
    let style = style(language);
    let prefix = if style.spaced {
        format!("{} ", style.symbol)
    } else {
        style.symbol.to_string()
    };

    if converted >= 1_000_000.0 {
        let millions = (converted / 1_000_000.0).round();
        return format!("{}{}M", prefix, millions as i64);
    }

    format!(
        "{}{}",
        prefix,
        format_number(
            converted,
            style.group_separator,
            style.decimal_separator,
            style.min_grouping_digits
        )
    )
}

/// Up to three fraction digits, trailing zeros dropped.
fn format_number(value: f64, group: char, decimal: char, min_grouping_digits: usize) -> String {
    let negative = value < 0.0;
    let scaled = (value.abs() * 1000.0).round() as u64;
    let integer = (scaled / 1000).to_string();
    let fraction = format!("{:03}", scaled % 1000);
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::new();
    if negative && scaled != 0 {
        out.push('-');
    }
    if integer.len() >= min_grouping_digits {
        for (i, digit) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                out.push(group);
            }
            out.push(digit);
        }
    } else {
        out.push_str(&integer);
    }
    if !fraction.is_empty() {
        out.push(decimal);
        out.push_str(fraction);
    }
    out
}

/// Headline addressable-market figure shown for each audience.
pub fn market_size(language: Language) -> &'static str {
    match language {
        Language::PtBr => "57M",
        Language::En => "150M",
        Language::Es => "120M",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portuguese_uses_reais_with_dot_grouping() {
        assert_eq!(format_currency(500_000.0, Language::PtBr), "R$ 500.000");
        assert_eq!(format_currency(996_550.0, Language::PtBr), "R$ 996.550");
        assert_eq!(format_currency(1_234.5, Language::PtBr), "R$ 1.234,5");
    }

    #[test]
    fn english_converts_to_dollars() {
        assert_eq!(format_currency(500_000.0, Language::En), "$100,000");
        assert_eq!(format_currency(996_550.0, Language::En), "$199,310");
    }

    #[test]
    fn spanish_skips_grouping_for_four_digit_amounts() {
        assert_eq!(format_currency(5_000.0, Language::Es), "$1000");
        assert_eq!(format_currency(500_000.0, Language::Es), "$100.000");
    }

    #[test]
    fn millions_are_abbreviated() {
        assert_eq!(format_currency(290_000_000.0, Language::PtBr), "R$ 290M");
        assert_eq!(format_currency(290_000_000.0, Language::En), "$58M");
        assert_eq!(format_currency(10_000_000.0, Language::Es), "$2M");
        assert_eq!(format_currency(1_495_000.0, Language::PtBr), "R$ 1M");
    }

    #[test]
    fn fraction_digits_are_capped_at_three() {
        assert_eq!(format_number(12.34567, ',', '.', 4), "12.346");
        assert_eq!(format_number(12.5, ',', '.', 4), "12.5");
        assert_eq!(format_number(0.0, ',', '.', 4), "0");
    }

    #[test]
    fn conversion_rate_applies_outside_portuguese() {
        assert!((convert(996_550.0, Language::En) - 199_310.0).abs() < 1e-6);
        assert!((convert(996_550.0, Language::PtBr) - 996_550.0).abs() < 1e-6);
    }

    #[test]
    fn market_size_differs_per_audience() {
        assert_eq!(market_size(Language::PtBr), "57M");
        assert_eq!(market_size(Language::En), "150M");
        assert_eq!(market_size(Language::Es), "120M");
    }
}
