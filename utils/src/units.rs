pub const WATT_HOUR_SUFFIX: &str = "Wh";

pub fn format_watt_hours(watt_hours: u32) -> String {
    format!("{} {}", watt_hours, WATT_HOUR_SUFFIX)
}

/// Strips a trailing "Wh" unit from a capacity label, leaving the number.
/// "640 Wh" -> "640", "640Wh" -> "640", "640" -> "640"
pub fn strip_watt_hour_suffix(label: &str) -> &str {
    let trimmed = label.trim();
    match trimmed.strip_suffix(WATT_HOUR_SUFFIX) {
        Some(number) => number.trim_end(),
        None => trimmed
    }
}

pub fn km_to_miles(km: f64) -> f64 {
    km * 0.621371
}
