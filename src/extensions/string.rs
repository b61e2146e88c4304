use std::cmp::Ordering;

/// Sort key for room identifiers: group prefix, then numeric suffix.
/// "P4/2" sorts before "P4/10". Names without a numeric suffix sort as 0.
pub fn natural_key(name: &str) -> (String, u32) {
    match name.split_once('/') {
        Some((prefix, suffix)) => (
            prefix.to_string(),
            suffix.trim().parse::<u32>().unwrap_or(0),
        ),
        None => (name.to_string(), 0),
    }
}

pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a).cmp(&natural_key(b)).then_with(|| a.cmp(b))
}

/// The grade level is the part before '/': "P4" for "P4/10".
pub fn grade_level(name: &str) -> &str {
    name.split_once('/').map(|(prefix, _)| prefix).unwrap_or(name)
}

pub trait ToDashSeparators {
    /// Returns a copy with all `/` replaced by `-` and leading/trailing
    /// whitespace trimmed.
    fn to_dash_separators(&self) -> String;
}

impl ToDashSeparators for str {
    fn to_dash_separators(&self) -> String {
        self.trim().replace('/', "-")
    }
}

impl ToDashSeparators for String {
    fn to_dash_separators(&self) -> String {
        self.as_str().to_dash_separators()
    }
}
