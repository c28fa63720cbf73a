//! Cell parsing helpers for the skyscraper CSV.
//!
//! Blank numeric cells map to the `0` sentinel. Cells that are present but
//! not numbers are errors, and the row they belong to is skipped.

/// Parses a year cell. Blank means unknown (`0`).
///
/// Accepts integral floats such as `"1931.0"`, which spreadsheet exports
/// produce for integer columns that contain blanks.
///
/// Returns `None` if the cell is not a whole number.
#[must_use]
pub fn parse_year(cell: &str) -> Option<i32> {
    parse_whole(cell)
}

/// Parses a non-negative count cell such as rank or floors. Blank means
/// `0`.
#[must_use]
pub fn parse_count(cell: &str) -> Option<u32> {
    parse_whole(cell)
}

/// Parses a coordinate cell. Blank means unknown (`0.0`).
#[must_use]
pub fn parse_coordinate(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Some(0.0);
    }
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a required finite float (e.g. height). Blank is an error.
#[must_use]
pub fn parse_required_float(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a boolean purpose flag. Blank and unrecognized values are
/// `false`.
#[must_use]
pub fn parse_flag(cell: &str) -> bool {
    matches!(
        cell.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "1.0" | "yes" | "y" | "t"
    )
}

#[allow(clippy::float_cmp)]
fn parse_whole<T>(cell: &str) -> Option<T>
where
    T: std::str::FromStr + TryFrom<i64> + Default,
{
    let cell = cell.trim();
    if cell.is_empty() {
        return Some(T::default());
    }
    if let Ok(value) = cell.parse::<T>() {
        return Some(value);
    }

    let float = cell.parse::<f64>().ok()?;
    if !float.is_finite() || float.fract() != 0.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    T::try_from(float as i64).ok()
}
