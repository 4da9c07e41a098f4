//! Shared formatting utilities for figures and console output

use console::Emoji;

/// Rocket emoji for launch/start operations
pub const ROCKET: Emoji = Emoji("🚀", ">");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Sparkles emoji for completion/success
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Factory emoji for machine listings
pub const FACTORY: Emoji = Emoji("🏭", "#");

/// Cloud emoji for emission figures
pub const CLOUD: Emoji = Emoji("☁️", "~");

/// Light bulb emoji for recommendations
pub const BULB: Emoji = Emoji("💡", "*");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Fractional digits that hold the exact decimal expansion of any finite `f64`
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Format a number with a fixed count of decimals, rounding exact ties away from zero
///
/// Rounding works on the exact binary value, so `2.05` (stored as
/// 2.04999...) gives `"2.0"` while the exactly representable `2.25`
/// gives `"2.3"`.
///
/// # Examples
///
/// ```
/// use carbontrack::fmt::to_fixed;
///
/// assert_eq!(to_fixed(2.25, 1), "2.3");
/// assert_eq!(to_fixed(2.05, 1), "2.0");
/// assert_eq!(to_fixed(12750.0, 0), "12750");
/// assert_eq!(to_fixed(0.5, 0), "1");
/// ```
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    let mut fixed = if is_exact_tie(magnitude, digits) {
        round_tie_up(magnitude, digits)
    } else {
        format!("{:.*}", digits, magnitude)
    };

    // No "-0.0"
    if value.is_sign_negative() && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        fixed.insert(0, '-');
    }
    fixed
}

/// Whether the digits after position `digits` are exactly `5000...`
fn tail_is_half(expansion: &str, digits: usize) -> bool {
    let fraction = expansion.split_once('.').map_or("", |(_, f)| f);
    match fraction.get(digits..) {
        Some(tail) => tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0'),
        None => false,
    }
}

fn is_exact_tie(magnitude: f64, digits: usize) -> bool {
    // Every true tie passes the short check; the exact expansion rules out near misses
    tail_is_half(&format!("{:.*}", digits + 30, magnitude), digits)
        && tail_is_half(&format!("{:.*}", EXACT_FRACTION_DIGITS, magnitude), digits)
}

/// Drop the trailing 5 of an exact tie and carry one into the last kept digit
fn round_tie_up(magnitude: f64, digits: usize) -> String {
    let mut kept = format!("{:.*}", digits + 1, magnitude).into_bytes();
    kept.pop();
    if kept.last() == Some(&b'.') {
        kept.pop();
    }

    let mut carry = true;
    for byte in kept.iter_mut().rev() {
        match *byte {
            b'.' => continue,
            b'9' => *byte = b'0',
            _ => {
                *byte += 1;
                carry = false;
                break;
            }
        }
    }
    if carry {
        kept.insert(0, b'1');
    }

    String::from_utf8_lossy(&kept).into_owned()
}

/// Format a kilogram figure, e.g. `"425.0 kg"`
pub fn format_kg(kg: f64, digits: usize) -> String {
    format!("{} kg", to_fixed(kg, digits))
}

/// Shorten a label to `max_chars` characters, appending `…` when cut
///
/// # Examples
///
/// ```
/// use carbontrack::fmt::truncate_label;
///
/// assert_eq!(truncate_label("Press", 12), "Press");
/// assert_eq!(truncate_label("Hydraulic Press Line 4", 12), "Hydraulic Pr…");
/// ```
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() > max_chars {
        let mut short: String = label.chars().take(max_chars).collect();
        short.push('…');
        short
    } else {
        label.to_string()
    }
}
