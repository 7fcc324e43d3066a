//! # Localized Pricing
//!
//! Static price lookup for the marketing site's pricing section. The table is
//! compiled in; nothing here touches the network or storage.

use once_cell::sync::Lazy;
use std::cmp::Ordering;
use std::collections::HashMap;

use shared::{CountryPricing, PricingRecord};

use super::pricing_table::{CURRENCY_SYMBOLS, PRICE_ROWS};

/// Currencies the store lists without minor units
const NO_DECIMAL_CURRENCIES: [&str; 11] = [
    "JPY", "KRW", "VND", "CLP", "IDR", "HUF", "TWD", "CZK", "PKR", "NGN", "TZS",
];

static PRICING_BY_COUNTRY: Lazy<HashMap<&'static str, PricingRecord>> = Lazy::new(|| {
    PRICE_ROWS
        .iter()
        .map(|(code, country, currency, price, numeric)| {
            (
                *code,
                PricingRecord {
                    country: country.to_string(),
                    currency_code: currency.to_string(),
                    price: price.to_string(),
                    numeric_price: *numeric,
                },
            )
        })
        .collect()
});

static SYMBOLS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| CURRENCY_SYMBOLS.iter().copied().collect());

/// United States pricing, used whenever a country is unknown
pub fn default_pricing() -> PricingRecord {
    PricingRecord {
        country: "United States".to_string(),
        currency_code: "USD".to_string(),
        price: "2.99".to_string(),
        numeric_price: 2.99,
    }
}

/// Trimmed, upper-cased `country_code` if the table lists it
pub fn known_country_code(country_code: &str) -> Option<String> {
    let code = country_code.trim().to_ascii_uppercase();
    PRICING_BY_COUNTRY.contains_key(code.as_str()).then_some(code)
}

/// Price for `country_code` (case-insensitive), falling back to US pricing
pub fn get_localized_pricing(country_code: Option<&str>) -> PricingRecord {
    country_code
        .and_then(known_country_code)
        .and_then(|code| PRICING_BY_COUNTRY.get(code.as_str()).cloned())
        .unwrap_or_else(default_pricing)
}

/// Every listed country, ordered by country name
pub fn get_all_countries() -> Vec<CountryPricing> {
    let mut countries: Vec<CountryPricing> = PRICING_BY_COUNTRY
        .iter()
        .map(|(code, data)| CountryPricing {
            code: code.to_string(),
            data: data.clone(),
        })
        .collect();

    countries.sort_by(|a, b| compare_country_names(&a.data.country, &b.data.country));
    countries
}

/// Price with its currency symbol, e.g. "NZ$4.99" or "₩4,400"
pub fn format_price(pricing: &PricingRecord) -> String {
    let code = pricing.currency_code.as_str();
    let symbol = SYMBOLS.get(code).copied().unwrap_or(code);

    if NO_DECIMAL_CURRENCIES.contains(&code) {
        let rounded = pricing.numeric_price.round().max(0.0) as u64;
        return format!("{}{}", symbol, group_thousands(rounded));
    }

    format!("{}{}", symbol, pricing.price)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Accent- and case-insensitive comparison, so "Côte d'Ivoire" sits next to "Costa Rica"
fn compare_country_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' | 'ã' | 'Á' | 'À' | 'Ä' | 'Â' | 'Ã' => 'a',
            'é' | 'è' | 'ë' | 'ê' | 'É' | 'È' | 'Ë' | 'Ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' | 'Í' | 'Ì' | 'Ï' | 'Î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' | 'õ' | 'Ó' | 'Ò' | 'Ö' | 'Ô' | 'Õ' => 'o',
            'ú' | 'ù' | 'ü' | 'û' | 'Ú' | 'Ù' | 'Ü' | 'Û' => 'u',
            'ñ' | 'Ñ' => 'n',
            'ç' | 'Ç' => 'c',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}
