use crate::error::PlotError;

// ---------------------------------------------------------------------------
// Reference-line input fields
// ---------------------------------------------------------------------------

/// One checkbox + text field pair as the user left it.
#[derive(Debug, Clone, Default)]
pub struct RefLineField {
    pub enabled: bool,
    pub text: String,
}

/// A validated reference line. `index` is the 1-based field it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefLine {
    pub index: usize,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// PlotConfig
// ---------------------------------------------------------------------------

/// A fully validated plot request. Built fresh for every invocation and
/// never stored.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Selected column names, in plot order. Non-empty.
    pub columns: Vec<String>,
    /// Enabled reference lines, field 1 first. At most two.
    pub ref_lines: Vec<RefLine>,
    pub separate_scales: bool,
}

/// Validate the raw UI inputs into a [`PlotConfig`].
///
/// The selection is checked first; reference-line fields are then checked
/// in order, each independently of the other, so an invalid field 1 is
/// reported even when field 2 is fine (or disabled).
pub fn resolve_config(
    columns: Vec<String>,
    ref_fields: &[RefLineField; 2],
    separate_scales: bool,
) -> Result<PlotConfig, PlotError> {
    if columns.is_empty() {
        return Err(PlotError::NoSelection);
    }

    let mut ref_lines = Vec::new();
    for (i, field) in ref_fields.iter().enumerate() {
        if !field.enabled {
            continue;
        }
        let value = field
            .text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| PlotError::BadReferenceLine {
                index: i + 1,
                input: field.text.clone(),
            })?;
        ref_lines.push(RefLine {
            index: i + 1,
            value,
        });
    }

    Ok(PlotConfig {
        columns,
        ref_lines,
        separate_scales,
    })
}
