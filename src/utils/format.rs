const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Format a byte count as megabytes (MiB) with two decimals, e.g. `"1.50"`
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / BYTES_PER_MEGABYTE)
}
