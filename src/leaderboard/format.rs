//! Display formatting for addresses and USD amounts.

use num_format::{Locale, ToFormattedString};

/// Address page on the Base block explorer.
pub const EXPLORER_ADDRESS_URL: &str = "https://basescan.org/address/";

const ADDRESS_HEAD: usize = 6;
const ADDRESS_TAIL: usize = 4;

/// Shorten an address to its first 6 and last 4 characters,
/// e.g. `0x742d…bEb1`.
///
/// Short inputs are not special-cased: head and tail may overlap.
pub fn truncate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    let head: String = chars.iter().take(ADDRESS_HEAD).collect();
    let tail: String = chars[chars.len().saturating_sub(ADDRESS_TAIL)..]
        .iter()
        .collect();
    format!("{head}…{tail}")
}

/// Explorer link for a raw address.
pub fn explorer_url(address: &str) -> String {
    format!("{EXPLORER_ADDRESS_URL}{address}")
}

/// `$<value in millions>M` with two decimals, e.g. `$113.50M`.
pub fn format_millions(value: f64) -> String {
    format!("${}M", to_cents(value / 1_000_000.0))
}

/// Two decimals, no grouping.
pub fn format_fixed(value: f64) -> String {
    to_cents(value)
}

/// `$` amount with thousands separators and exactly two decimals,
/// e.g. `$24,500,000.50`.
pub fn format_usd(value: f64) -> String {
    let cents = to_cents(value);
    let (sign, unsigned) = match cents.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", cents.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let grouped = match int_part.parse::<u128>() {
        Ok(n) => n.to_formatted_string(&Locale::en),
        Err(_) => int_part.to_string(),
    };
    format!("${sign}{grouped}.{frac_part}")
}

/// Two-decimal string with ties rounded away from zero (`12.125` → `12.13`).
///
/// `{:.2}` alone rounds exact binary ties to even.
fn to_cents(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.is_finite() {
        format!("{rounded:.2}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_address() {
        assert_eq!(
            truncate_address("0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb1"),
            "0x742d…bEb1"
        );
        assert_eq!(
            truncate_address("0xd0b53d9277642d899df5c87a3966a349a798f224"),
            "0xd0b5…f224"
        );
        // Overlapping head and tail on short ids
        assert_eq!(truncate_address("0x1"), "0x1…0x1");
        assert_eq!(truncate_address(""), "…");
    }

    #[test]
    fn test_explorer_url() {
        assert_eq!(
            explorer_url("0x1111111111111111111111111111111111111111"),
            "https://basescan.org/address/0x1111111111111111111111111111111111111111"
        );
    }

    #[test]
    fn test_format_millions() {
        assert_eq!(format_millions(0.0), "$0.00M");
        assert_eq!(format_millions(113_500_004.70), "$113.50M");
        assert_eq!(format_millions(4_900_000.15), "$4.90M");
        assert_eq!(format_millions(1_125_000.0), "$1.13M");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(24_500_000.5), "$24,500,000.50");
        assert_eq!(format_usd(12_300_000.0), "$12,300,000.00");
        assert_eq!(format_usd(999.999), "$1,000.00");
        assert_eq!(format_usd(100.0), "$100.00");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(-1234.5), "$-1,234.50");
        assert_eq!(format_usd(0.125), "$0.13");
        // Beyond u128 the integer part is left ungrouped
        assert!(format_usd(1e40).starts_with("$10000000000"));
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(12450.25), "12450.25");
        assert_eq!(format_fixed(4321.0), "4321.00");
    }

    #[test]
    fn test_ties_round_up() {
        assert_eq!(format_fixed(12.125), "12.13");
        assert_eq!(format_fixed(0.125), "0.13");
        assert_eq!(format_fixed(-0.125), "-0.13");
        // 1.005 is stored just below the tie
        assert_eq!(format_fixed(1.005), "1.00");
    }
}
