/// Parse a decimal string coming from the subgraph.
///
/// Monetary fields arrive as strings to avoid precision loss upstream.
/// Anything that does not parse to a finite number counts as zero.
pub fn parse_decimal(s: &str) -> f64 {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}
