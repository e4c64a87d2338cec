//! Human-readable rendering shared by the subcommands and the interactive menu

use std::io::{self, Write};

use campus_route_core::graph::{hop_count, VertexId, WeightedPath};
use campus_route_core::map::CampusMap;

pub const WEIGHTED_HEADER: &str = "Shortest path (by distance):";
pub const HOPS_HEADER: &str = "Shortest path (by number of hops):";

pub fn avoid_header(block_from: &str, block_to: &str) -> String {
    format!(
        "Shortest path avoiding blocked road {} <-> {}:",
        block_from, block_to
    )
}

/// Significant digits for printed distances
const DISTANCE_PRECISION: usize = 6;

/// Format a distance like C's `%g`: six significant digits, trailing zeros dropped.
///
/// `1.0499999999999998` prints as `1.05`, `3.0` as `3`, `1234567.0` as `1.23457e+06`.
pub fn format_distance(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // Round to the target precision first; the exponent of the rounded value picks the style
    let scientific = format!("{:.*e}", DISTANCE_PRECISION - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if exponent < -4 || exponent >= DISTANCE_PRECISION as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (DISTANCE_PRECISION as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// `A -> B -> C`, or `No path found.` for an empty path
pub fn write_path<W: Write>(out: &mut W, map: &CampusMap, path: &[VertexId]) -> io::Result<()> {
    if path.is_empty() {
        writeln!(out, "No path found.")
    } else {
        writeln!(out, "{}", map.path_names(path).join(" -> "))
    }
}

pub fn write_weighted<W: Write>(
    out: &mut W,
    map: &CampusMap,
    result: &WeightedPath,
) -> io::Result<()> {
    write_path(out, map, &result.path)?;
    if result.found() {
        writeln!(out, "Total distance: {}", format_distance(result.total_weight))?;
    }
    Ok(())
}

pub fn write_hops<W: Write>(out: &mut W, map: &CampusMap, path: &[VertexId]) -> io::Result<()> {
    write_path(out, map, path)?;
    if let Some(hops) = hop_count(path) {
        writeln!(out, "Number of hops: {}", hops)?;
    }
    Ok(())
}

pub fn write_locations<W: Write>(out: &mut W, map: &CampusMap) -> io::Result<()> {
    writeln!(out, "Locations:")?;
    for (id, name) in map.locations() {
        writeln!(out, "{}: {}", id, name)?;
    }
    Ok(())
}

pub fn write_connectivity<W: Write>(out: &mut W, connected: bool) -> io::Result<()> {
    if connected {
        writeln!(out, "The campus map graph is connected.")
    } else {
        writeln!(out, "The campus map graph is NOT fully connected.")
    }
}
