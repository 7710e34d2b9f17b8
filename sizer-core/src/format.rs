//! Byte count formatting.
//!
//! Produces the human-readable size strings used by the `formatted` and
//! `both` output paths: base-1024 units with two decimal places and
//! thousands grouping on the integer part, plain integer counts below 1 KB.

/// Formats bytes with appropriate base-1024 units (bytes, KB, MB, GB).
///
/// Values of at least 1 KB are scaled and printed with two decimal places,
/// grouping the integer part with commas (e.g. `"1,023.00 KB"`). Smaller
/// values are printed as a plain integer count with a " bytes" suffix.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{} GB", format_scaled(bytes, GB))
    } else if bytes >= MB {
        format!("{} MB", format_scaled(bytes, MB))
    } else if bytes >= KB {
        format!("{} KB", format_scaled(bytes, KB))
    } else {
        format!("{bytes} bytes")
    }
}

/// Divides `bytes` by `unit` and renders the quotient with two decimal
/// places and a grouped integer part.
fn format_scaled(bytes: u64, unit: u64) -> String {
    let value = bytes as f64 / unit as f64;
    let rendered = format!("{value:.2}");
    match rendered.split_once('.') {
        Some((int_part, frac_part)) => {
            format!("{}.{}", group_thousands(int_part), frac_part)
        }
        None => group_thousands(&rendered),
    }
}

/// Inserts comma separators every three digits, counting from the right.
/// Input is a plain ASCII digit string produced by integer/float formatting.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
