//! Runtime configuration constants and environment toggles.

/// Plan file read when no path argument is given.
pub const DEFAULT_PLAN_FILE: &str = "subnet_plan.json";

/// Environment variable that enables CSV file export.
pub const CSV_EXPORT_ENV: &str = "SUBNET_CALC_CSV";

/// Whether CSV file export is switched on via [`CSV_EXPORT_ENV`].
///
/// Accepts "1", "true" or "yes" (case-insensitive).
pub fn csv_export_enabled() -> bool {
    match std::env::var(CSV_EXPORT_ENV) {
        Ok(value) => matches!(
            value.trim().to_lowercase().as_str(),
            "1" | "true" | "yes"
        ),
        Err(_) => false,
    }
}
