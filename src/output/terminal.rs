//! Terminal output utilities.
//!
//! Results are printed as a row of quoted, comma separated fields.

use super::Report;
use crate::models::AddressFamily;
use colored::Colorize;

/// Wrap `value` in double quotes and pad it on the left to `width` columns,
/// so rows printed one after another line up. Longer values are never cut.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value = value.to_string();
    let quoted = format!("\"{value}\"");
    format!("{quoted:>width$}")
}

/// Family label, green for IPv4 and blue for IPv6 when `color` is set.
pub fn format_family(family: AddressFamily, color: bool) -> String {
    let label = family.to_string();
    if !color {
        return label;
    }
    match family {
        AddressFamily::V4 => label.green().to_string(),
        AddressFamily::V6 => label.blue().to_string(),
    }
}

/// Render a [`Report`] as one output row.
///
/// Bare values (parsed with a known family) print just the number.
pub fn to_row(report: &Report, color: bool) -> String {
    match report {
        Report::Detected { address } => format!(
            "{},{}",
            format_field(format_family(address.family(), color), 6),
            format_field(address.as_u128(), 12)
        ),
        Report::Value { value, .. } => value.to_string(),
        Report::Text { text, .. } => text.clone(),
        Report::Range {
            family,
            prefix_len,
            start,
            end,
            start_text,
            end_text,
        } => [
            format_field(format_family(*family, color), 6),
            format_field(prefix_len, 5),
            format_field(start_text, 17),
            format_field(end_text, 17),
            format_field(start, 12),
            format_field(end, 12),
        ]
        .join(","),
        Report::Contains {
            family,
            network,
            address,
            contained,
        } => [
            format_field(format_family(*family, color), 6),
            format_field(network, 20),
            format_field(address, 17),
            format_field(contained, 7),
        ]
        .join(","),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParsedAddress;

    #[test]
    fn test_format_field_pads_to_width() {
        assert_eq!(format_field("10.0.0.1", 12), "  \"10.0.0.1\"");
        assert_eq!(format_field(32u32, 5), " \"32\"");
    }

    #[test]
    fn test_format_field_keeps_wide_values() {
        assert_eq!(format_field("::ffff:c0a8:1", 4), "\"::ffff:c0a8:1\"");
        assert_eq!(format_field("", 0), "\"\"");
    }

    #[test]
    fn test_format_family_plain() {
        assert_eq!(format_family(AddressFamily::V4, false), "IPv4");
        assert_eq!(format_family(AddressFamily::V6, false), "IPv6");
    }

    #[test]
    fn test_row_detected() {
        let report = Report::Detected {
            address: ParsedAddress::V4(16909060),
        };
        assert_eq!(to_row(&report, false), "\"IPv4\",  \"16909060\"");
    }

    #[test]
    fn test_row_value_and_text() {
        let report = Report::Value {
            family: AddressFamily::V4,
            value: 4294901760,
        };
        assert_eq!(to_row(&report, false), "4294901760");
        let report = Report::Text {
            family: AddressFamily::V6,
            text: "1234::ff".to_string(),
        };
        assert_eq!(to_row(&report, false), "1234::ff");
    }

    #[test]
    fn test_row_range() {
        let report = Report::Range {
            family: AddressFamily::V4,
            prefix_len: 12,
            start: 2886729728,
            end: 2887778303,
            start_text: "172.16.0.0".to_string(),
            end_text: "172.31.255.255".to_string(),
        };
        assert_eq!(
            to_row(&report, false),
            r#""IPv4", "12",     "172.16.0.0", "172.31.255.255","2886729728","2887778303""#
        );
    }

    #[test]
    fn test_row_contains() {
        let report = Report::Contains {
            family: AddressFamily::V4,
            network: "172.16.0.0/12".to_string(),
            address: "172.20.1.1".to_string(),
            contained: true,
        };
        assert_eq!(
            to_row(&report, false),
            r#""IPv4",     "172.16.0.0/12",     "172.20.1.1", "true""#
        );
    }
}
