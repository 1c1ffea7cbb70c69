use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

/// Source hint derived from the original filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Screenshot,
    Whatsapp,
    Signal,
}

impl Indicator {
    pub fn label(self) -> &'static str {
        match self {
            Indicator::Screenshot => "Screenshot",
            Indicator::Whatsapp => "Whatsapp",
            Indicator::Signal => "Signal",
        }
    }
}

static RE_SCREENSHOT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)screenshot").unwrap());
// "-WA" is matched case-sensitively (WhatsApp's IMG-20200101-WA0001.jpg)
static RE_WHATSAPP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i:_whatsapp)|-WA").unwrap());
static RE_SIGNAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)signal").unwrap());

/// Output order is fixed; detection of each entry is independent.
static INDICATORS: &[(&LazyLock<Regex>, Indicator)] = &[
    (&RE_SCREENSHOT, Indicator::Screenshot),
    (&RE_WHATSAPP, Indicator::Whatsapp),
    (&RE_SIGNAL, Indicator::Signal),
];

pub fn detect_indicators(filename: &str) -> Vec<Indicator> {
    INDICATORS
        .iter()
        .filter(|(re, _)| re.is_match(filename))
        .map(|&(_, indicator)| indicator)
        .collect()
}

pub fn format_date(date: &NaiveDateTime) -> String {
    date.format("%Y%m%d_%H%M%S").to_string()
}

/// `{date}_{size}[_{tags}]`, without extension.
pub fn base_name(date: &NaiveDateTime, size: u64, filename: &str) -> String {
    let mut name = format!("{}_{}", format_date(date), size);
    let tags: Vec<&str> = detect_indicators(filename).into_iter().map(Indicator::label).collect();
    if !tags.is_empty() {
        name.push('_');
        name.push_str(&tags.join("_"));
    }
    name
}
