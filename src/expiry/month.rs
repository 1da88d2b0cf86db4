/// English three-letter month abbreviations and their two-digit numbers.
///
/// OpenSSL renders dates through the C locale of the host it runs on, so a
/// name that is not in this table means the output format is not one we know.
pub const MONTHS: [(&str, &str); 12] = [
    ("Jan", "01"),
    ("Feb", "02"),
    ("Mar", "03"),
    ("Apr", "04"),
    ("May", "05"),
    ("Jun", "06"),
    ("Jul", "07"),
    ("Aug", "08"),
    ("Sep", "09"),
    ("Oct", "10"),
    ("Nov", "11"),
    ("Dec", "12"),
];

/// Two-digit month number for `abbrev`, `None` if it is not an English abbreviation
#[must_use]
pub fn month_number(abbrev: &str) -> Option<&'static str> {
    MONTHS
        .iter()
        .find(|(name, _)| *name == abbrev)
        .map(|(_, number)| *number)
}
