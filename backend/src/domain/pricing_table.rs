//! Tier 3 App Store prices by ISO 3166-1 alpha-2 country code.

/// (code, country, currency, listed price, numeric price)
pub(super) type PriceRow = (&'static str, &'static str, &'static str, &'static str, f64);

pub(super) const PRICE_ROWS: &[PriceRow] = &[
    ("NZ", "New Zealand", "NZD", "4.99", 4.99),
    ("AF", "Afghanistan", "USD", "2.99", 2.99),
    ("AL", "Albania", "USD", "3.99", 3.99),
    ("DZ", "Algeria", "USD", "2.99", 2.99),
    ("AO", "Angola", "USD", "2.99", 2.99),
    ("AI", "Anguilla", "USD", "2.99", 2.99),
    ("AG", "Antigua and Barbuda", "USD", "2.99", 2.99),
    ("AR", "Argentina", "USD", "2.99", 2.99),
    ("AM", "Armenia", "USD", "3.99", 3.99),
    ("AU", "Australia", "AUD", "4.99", 4.99),
    ("AT", "Austria", "EUR", "2.99", 2.99),
    ("AZ", "Azerbaijan", "USD", "3.99", 3.99),
    ("BS", "Bahamas", "USD", "2.99", 2.99),
    ("BH", "Bahrain", "USD", "2.99", 2.99),
    ("BB", "Barbados", "USD", "3.99", 3.99),
    ("BY", "Belarus", "USD", "3.99", 3.99),
    ("BE", "Belgium", "EUR", "2.99", 2.99),
    ("BZ", "Belize", "USD", "2.99", 2.99),
    ("BJ", "Benin", "USD", "3.99", 3.99),
    ("BM", "Bermuda", "USD", "2.99", 2.99),
    ("BT", "Bhutan", "USD", "2.99", 2.99),
    ("BO", "Bolivia", "USD", "2.99", 2.99),
    ("BA", "Bosnia and Herzegovina", "EUR", "2.99", 2.99),
    ("BW", "Botswana", "USD", "2.99", 2.99),
    ("BR", "Brazil", "BRL", "19.90", 19.90),
    ("VG", "British Virgin Islands", "USD", "2.99", 2.99),
    ("BN", "Brunei", "USD", "2.99", 2.99),
    ("BG", "Bulgaria", "BGN", "6.99", 6.99),
    ("BF", "Burkina Faso", "USD", "2.99", 2.99),
    ("KH", "Cambodia", "USD", "2.99", 2.99),
    ("CM", "Cameroon", "USD", "3.99", 3.99),
    ("CA", "Canada", "CAD", "3.99", 3.99),
    ("CV", "Cape Verde", "USD", "2.99", 2.99),
    ("KY", "Cayman Islands", "USD", "2.99", 2.99),
    ("TD", "Chad", "USD", "2.99", 2.99),
    ("CL", "Chile", "CLP", "2990", 2990.0),
    ("CN", "China mainland", "CNY", "22.00", 22.00),
    ("CO", "Colombia", "COP", "14900", 14900.0),
    ("CD", "Congo, Democratic Republic of the", "USD", "2.99", 2.99),
    ("CG", "Congo, Republic of the", "USD", "2.99", 2.99),
    ("CR", "Costa Rica", "USD", "2.99", 2.99),
    ("CI", "Côte d'Ivoire", "USD", "3.99", 3.99),
    ("HR", "Croatia", "EUR", "2.99", 2.99),
    ("CY", "Cyprus", "EUR", "2.99", 2.99),
    ("CZ", "Czech Republic", "CZK", "79", 79.0),
    ("DK", "Denmark", "DKK", "29", 29.0),
    ("DM", "Dominica", "USD", "2.99", 2.99),
    ("DO", "Dominican Republic", "USD", "2.99", 2.99),
    ("EC", "Ecuador", "USD", "2.99", 2.99),
    ("EG", "Egypt", "EGP", "149.99", 149.99),
    ("SV", "El Salvador", "USD", "2.99", 2.99),
    ("EE", "Estonia", "EUR", "2.99", 2.99),
    ("SZ", "Eswatini", "USD", "2.99", 2.99),
    ("FJ", "Fiji", "USD", "2.99", 2.99),
    ("FI", "Finland", "EUR", "2.99", 2.99),
    ("FR", "France", "EUR", "2.99", 2.99),
    ("GA", "Gabon", "USD", "2.99", 2.99),
    ("GM", "Gambia", "USD", "2.99", 2.99),
    ("GE", "Georgia", "USD", "3.99", 3.99),
    ("DE", "Germany", "EUR", "2.99", 2.99),
    ("GH", "Ghana", "USD", "3.99", 3.99),
    ("GR", "Greece", "EUR", "2.99", 2.99),
    ("GD", "Grenada", "USD", "2.99", 2.99),
    ("GT", "Guatemala", "USD", "2.99", 2.99),
    ("GW", "Guinea-Bissau", "USD", "2.99", 2.99),
    ("GY", "Guyana", "USD", "2.99", 2.99),
    ("HN", "Honduras", "USD", "2.99", 2.99),
    ("HK", "Hong Kong", "HKD", "22", 22.0),
    ("HU", "Hungary", "HUF", "1490", 1490.0),
    ("IS", "Iceland", "USD", "3.99", 3.99),
    ("IN", "India", "INR", "299", 299.0),
    ("ID", "Indonesia", "IDR", "49000", 49000.0),
    ("IQ", "Iraq", "USD", "2.99", 2.99),
    ("IE", "Ireland", "EUR", "2.99", 2.99),
    ("IL", "Israel", "ILS", "9.90", 9.90),
    ("IT", "Italy", "EUR", "2.99", 2.99),
    ("JM", "Jamaica", "USD", "2.99", 2.99),
    ("JP", "Japan", "JPY", "500", 500.0),
    ("JO", "Jordan", "USD", "2.99", 2.99),
    ("KZ", "Kazakhstan", "KZT", "1790", 1790.0),
    ("KE", "Kenya", "USD", "3.99", 3.99),
    ("KR", "Korea, Republic of", "KRW", "4400", 4400.0),
    ("XK", "Kosovo", "EUR", "2.99", 2.99),
    ("KW", "Kuwait", "USD", "2.99", 2.99),
    ("KG", "Kyrgyzstan", "USD", "2.99", 2.99),
    ("LA", "Laos", "USD", "2.99", 2.99),
    ("LV", "Latvia", "EUR", "2.99", 2.99),
    ("LB", "Lebanon", "USD", "2.99", 2.99),
    ("LR", "Liberia", "USD", "2.99", 2.99),
    ("LY", "Libya", "USD", "2.99", 2.99),
    ("LT", "Lithuania", "EUR", "2.99", 2.99),
    ("LU", "Luxembourg", "EUR", "2.99", 2.99),
    ("MO", "Macau", "USD", "2.99", 2.99),
    ("MG", "Madagascar", "USD", "2.99", 2.99),
    ("MW", "Malawi", "USD", "2.99", 2.99),
    ("MY", "Malaysia", "MYR", "14.90", 14.90),
    ("MV", "Maldives", "USD", "2.99", 2.99),
    ("ML", "Mali", "USD", "2.99", 2.99),
    ("MT", "Malta", "EUR", "2.99", 2.99),
    ("MR", "Mauritania", "USD", "2.99", 2.99),
    ("MU", "Mauritius", "USD", "2.99", 2.99),
    ("MX", "Mexico", "MXN", "69", 69.0),
    ("FM", "Micronesia", "USD", "2.99", 2.99),
    ("MD", "Moldova", "USD", "3.99", 3.99),
    ("MN", "Mongolia", "USD", "2.99", 2.99),
    ("ME", "Montenegro", "EUR", "2.99", 2.99),
    ("MS", "Montserrat", "USD", "2.99", 2.99),
    ("MA", "Morocco", "USD", "2.99", 2.99),
    ("MZ", "Mozambique", "USD", "2.99", 2.99),
    ("MM", "Myanmar", "USD", "2.99", 2.99),
    ("NA", "Namibia", "USD", "2.99", 2.99),
    ("NR", "Nauru", "USD", "2.99", 2.99),
    ("NP", "Nepal", "USD", "3.99", 3.99),
    ("NL", "Netherlands", "EUR", "2.99", 2.99),
    ("NI", "Nicaragua", "USD", "2.99", 2.99),
    ("NE", "Niger", "USD", "2.99", 2.99),
    ("NG", "Nigeria", "NGN", "4900", 4900.0),
    ("MK", "North Macedonia", "USD", "2.99", 2.99),
    ("NO", "Norway", "NOK", "39", 39.0),
    ("OM", "Oman", "USD", "2.99", 2.99),
    ("PK", "Pakistan", "PKR", "900", 900.0),
    ("PW", "Palau", "USD", "2.99", 2.99),
    ("PA", "Panama", "USD", "2.99", 2.99),
    ("PG", "Papua New Guinea", "USD", "2.99", 2.99),
    ("PY", "Paraguay", "USD", "2.99", 2.99),
    ("PE", "Peru", "PEN", "12.90", 12.90),
    ("PH", "Philippines", "PHP", "199", 199.0),
    ("PL", "Poland", "PLN", "14.99", 14.99),
    ("PT", "Portugal", "EUR", "2.99", 2.99),
    ("QA", "Qatar", "QAR", "9.99", 9.99),
    ("RO", "Romania", "RON", "14.99", 14.99),
    ("RU", "Russia", "RUB", "249", 249.0),
    ("RW", "Rwanda", "USD", "2.99", 2.99),
    ("ST", "São Tomé and Príncipe", "USD", "2.99", 2.99),
    ("SA", "Saudi Arabia", "SAR", "12.99", 12.99),
    ("SN", "Senegal", "USD", "3.99", 3.99),
    ("RS", "Serbia", "EUR", "2.99", 2.99),
    ("SC", "Seychelles", "USD", "2.99", 2.99),
    ("SL", "Sierra Leone", "USD", "2.99", 2.99),
    ("SG", "Singapore", "SGD", "3.98", 3.98),
    ("SK", "Slovakia", "EUR", "2.99", 2.99),
    ("SI", "Slovenia", "EUR", "2.99", 2.99),
    ("SB", "Solomon Islands", "USD", "2.99", 2.99),
    ("ZA", "South Africa", "ZAR", "59.99", 59.99),
    ("ES", "Spain", "EUR", "2.99", 2.99),
    ("LK", "Sri Lanka", "USD", "2.99", 2.99),
    ("KN", "St. Kitts and Nevis", "USD", "2.99", 2.99),
    ("LC", "St. Lucia", "USD", "2.99", 2.99),
    ("VC", "St. Vincent and the Grenadines", "USD", "2.99", 2.99),
    ("SR", "Suriname", "USD", "2.99", 2.99),
    ("SE", "Sweden", "SEK", "39", 39.0),
    ("CH", "Switzerland", "CHF", "3.00", 3.00),
    ("TW", "Taiwan", "TWD", "90", 90.0),
    ("TJ", "Tajikistan", "USD", "2.99", 2.99),
    ("TZ", "Tanzania", "TZS", "9900", 9900.0),
    ("TH", "Thailand", "THB", "99", 99.0),
    ("TO", "Tonga", "USD", "2.99", 2.99),
    ("TT", "Trinidad and Tobago", "USD", "2.99", 2.99),
    ("TN", "Tunisia", "USD", "2.99", 2.99),
    ("TR", "Türkiye", "TRY", "149.99", 149.99),
    ("TM", "Turkmenistan", "USD", "2.99", 2.99),
    ("TC", "Turks and Caicos Islands", "USD", "2.99", 2.99),
    ("UG", "Uganda", "USD", "3.99", 3.99),
    ("UA", "Ukraine", "USD", "3.99", 3.99),
    ("AE", "United Arab Emirates", "AED", "12.99", 12.99),
    ("GB", "United Kingdom", "GBP", "2.99", 2.99),
    ("US", "United States", "USD", "2.99", 2.99),
    ("UY", "Uruguay", "USD", "2.99", 2.99),
    ("UZ", "Uzbekistan", "USD", "2.99", 2.99),
    ("VU", "Vanuatu", "USD", "2.99", 2.99),
    ("VE", "Venezuela", "USD", "2.99", 2.99),
    ("VN", "Vietnam", "VND", "99000", 99000.0),
    ("YE", "Yemen", "USD", "2.99", 2.99),
    ("ZM", "Zambia", "USD", "3.99", 3.99),
    ("ZW", "Zimbabwe", "USD", "3.99", 3.99),
];

pub(super) const CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("CNY", "¥"),
    ("AUD", "A$"),
    ("CAD", "C$"),
    ("NZD", "NZ$"),
    ("SGD", "S$"),
    ("HKD", "HK$"),
    ("INR", "₹"),
    ("KRW", "₩"),
    ("BRL", "R$"),
    ("MXN", "Mex$"),
    ("ZAR", "R"),
    ("SEK", "kr"),
    ("NOK", "kr"),
    ("DKK", "kr"),
    ("CHF", "CHF"),
    ("PLN", "zł"),
    ("THB", "฿"),
    ("IDR", "Rp"),
    ("MYR", "RM"),
    ("PHP", "₱"),
    ("VND", "₫"),
    ("TRY", "₺"),
    ("RUB", "₽"),
    ("AED", "AED"),
    ("SAR", "SR"),
    ("ILS", "₪"),
    ("CZK", "Kč"),
    ("HUF", "Ft"),
    ("RON", "lei"),
    ("BGN", "лв"),
    ("QAR", "QR"),
    ("KZT", "₸"),
    ("NGN", "₦"),
    ("EGP", "E£"),
    ("CLP", "$"),
    ("COP", "$"),
    ("PEN", "S/"),
    ("PKR", "Rs"),
    ("TWD", "NT$"),
    ("TZS", "TSh"),
];
