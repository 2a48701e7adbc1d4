//! Format inference and value rendering for stat displays

/// Currency symbols recognized in authored stat text
const CURRENCY_SYMBOLS: [char; 4] = ['₹', '$', '€', '£'];

/// Display format of a stat, inferred once from its authored text
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatFormat {
    /// "10M" style: counts up and renders through the M/K magnitude rule
    Magnitude { target: f64 },
    /// "500+" style: counts up in fixed steps with a trailing '+'
    PlusCount { target: u64 },
    /// "₹0" style: no count-up, renders once as symbol + "0"
    Currency { symbol: char },
    /// Anything else: left as authored
    Plain,
}

/// Infer the display format from authored text
///
/// Precedence follows the authored patterns: an 'M' wins over a '+', which
/// wins over a currency symbol. Unparseable numeric text yields a zero
/// target; that run completes on its first tick. Accepted, not guarded.
pub fn infer_format(raw: &str) -> StatFormat {
    if raw.contains('M') {
        StatFormat::Magnitude {
            target: float_prefix(raw) * 1_000_000.0,
        }
    } else if raw.contains('+') {
        StatFormat::PlusCount {
            target: int_prefix(raw),
        }
    } else if let Some(symbol) = raw.chars().find(|c| CURRENCY_SYMBOLS.contains(c)) {
        StatFormat::Currency { symbol }
    } else {
        StatFormat::Plain
    }
}

/// Render a value through the magnitude rule
///
/// Values of a million or more render as `round(v/1e6)` + "M", a thousand or
/// more as `round(v/1e3)` + "K", everything else as a plain integer.
/// Rounding is half away from zero, matching the authored formatting.
pub fn format_magnitude(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{}M", (value / 1_000_000.0).round() as i64)
    } else if value >= 1_000.0 {
        format!("{}K", (value / 1_000.0).round() as i64)
    } else {
        format!("{}", value as i64)
    }
}

/// Leading float prefix of the text, 0.0 when there is none
///
/// Lenient prefix parsing: an optional sign, digits, at most one dot, and
/// everything after the first non-numeric character ignored ("1.5M" is 1.5).
fn float_prefix(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in trimmed.char_indices() {
        match c {
            '+' | '-' if i == 0 => end = i + c.len_utf8(),
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            '0'..='9' => end = i + 1,
            _ => break,
        }
    }
    trimmed[..end].parse().unwrap_or(0.0)
}

/// Leading unsigned integer prefix of the text, 0 when there is none
fn int_prefix(raw: &str) -> u64 {
    let trimmed = raw.trim_start();
    let end = trimmed
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit())
        .map(|(i, _)| i + 1)
        .last()
        .unwrap_or(0);
    trimmed[..end].parse().unwrap_or(0)
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod format_tests;
