use std::cmp::Ordering;

use colored::Colorize;
use rust_decimal::{Decimal, RoundingStrategy};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};
use unicode_width::UnicodeWidthStr;

use crate::storage::models::Fiat;

/// Format a fiat amount with symbol, grouping and the currency's precision.
pub fn format_fiat(amount: Decimal, fiat: Fiat) -> String {
    let places = match fiat {
        Fiat::Jpy => 0,
        _ => 2,
    };
    let rounded = amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let plain = format!("{:.*}", places as usize, rounded.abs());

    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}{}.{}", sign, fiat.symbol(), grouped, frac),
        None => format!("{}{}{}", sign, fiat.symbol(), grouped),
    }
}

/// Shorten an address for compact display
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 12 {
        address.to_string()
    } else {
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}…{}", head, tail)
    }
}

/// Collation-style ordering: base letters first (accents and case ignored),
/// then accents, then case with lower case ahead of upper case.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| b.cmp(a))
}

fn primary_key(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase)
}

fn folded(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd().flat_map(char::to_lowercase)
}

/// Format timestamp in human-readable format
pub fn format_timestamp(timestamp: &chrono::DateTime<chrono::Local>) -> String {
    timestamp.format("%H:%M:%S").to_string()
}

/// Format a fiat total for the terminal
pub fn format_fiat_colored(amount: Decimal, fiat: Fiat) -> String {
    format_fiat(amount, fiat).yellow().to_string()
}

/// Print a formatted table border
pub fn print_table_border(width: usize) {
    println!("{}", "=".repeat(width));
}

/// Print a table row with columns padded to display width
pub fn print_table_row(columns: &[&str], widths: &[usize]) {
    let mut row = String::new();
    for (col, width) in columns.iter().zip(widths) {
        row.push_str(&pad_to_width(col, *width));
        row.push_str("  ");
    }
    println!("{}", row.trim_end());
}

/// Pad (or cut) a string to a terminal display width.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let visible = text.width();
    if visible >= width {
        let mut out = String::new();
        for ch in text.chars() {
            if (out.as_str().width() + ch.to_string().as_str().width()) > width {
                break;
            }
            out.push(ch);
        }
        let fill = width - out.as_str().width();
        out.push_str(&" ".repeat(fill));
        out
    } else {
        format!("{}{}", text, " ".repeat(width - visible))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fiat_groups_thousands() {
        assert_eq!(format_fiat(Decimal::new(123456789, 2), Fiat::Usd), "$1,234,567.89");
        assert_eq!(format_fiat(Decimal::new(5, 1), Fiat::Eur), "€0.50");
        assert_eq!(format_fiat(Decimal::ZERO, Fiat::Gbp), "£0.00");
        assert_eq!(format_fiat(Decimal::new(-1500, 0), Fiat::Usd), "-$1,500.00");
    }

    #[test]
    fn test_format_fiat_rounds_half_away_from_zero() {
        assert_eq!(format_fiat(Decimal::new(125, 3), Fiat::Usd), "$0.13");
        assert_eq!(format_fiat(Decimal::new(-125, 3), Fiat::Usd), "-$0.13");
        assert_eq!(format_fiat(Decimal::new(25, 1), Fiat::Jpy), "¥3");
    }

    #[test]
    fn test_format_fiat_yen_has_no_decimals() {
        assert_eq!(format_fiat(Decimal::new(123456, 1), Fiat::Jpy), "¥12,346");
    }

    #[test]
    fn test_shorten_address() {
        assert_eq!(
            shorten_address("0x82D69476357A03415E92B5780C89e5E9e972Ce75"),
            "0x82D6…Ce75"
        );
        assert_eq!(shorten_address("0xabc"), "0xabc");
    }

    #[test]
    fn test_locale_compare_ignores_case_first() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("Zebra", "alpha"), Ordering::Greater);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_locale_compare_accents_sort_with_base_letter() {
        let mut labels = vec!["Zoe", "Émile", "Adam", "éclair", "Ethan"];
        labels.sort_by(|a, b| locale_compare(a, b));
        assert_eq!(labels, vec!["Adam", "éclair", "Émile", "Ethan", "Zoe"]);

        assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_compare("résumé", "Résumé"), Ordering::Less);
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("abc", 5), "abc  ");
        assert_eq!(pad_to_width("abcdef", 4), "abcd");
    }
}
