//! Text, CSV and JSON renderings of price grids
//!
//! The text heatmap mirrors the dashboard figure: row 0 (lowest σ) on top,
//! at most five rounded ticks per axis and a `"<Model> - <Call|Put>"` title.

use std::io;

use pricer_core::types::OptionType;
use pricer_grid::axis::{ticks, DEFAULT_MAX_TICKS};
use pricer_grid::{ContractTerms, PriceGrid};
use pricer_models::PricingModel;
use serde::Serialize;

/// Shades from cheapest to most expensive cell.
pub const SHADE_RAMP: [char; 10] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Characters drawn per grid cell.
const CELL_WIDTH: usize = 2;

/// Horizontal axis label.
pub const SPOT_AXIS_LABEL: &str = "Spot Price (S)";

/// Vertical axis label.
pub const VOL_AXIS_LABEL: &str = "Volatility (σ)";

/// Heatmap title, e.g. `"Black-Scholes - Call"`.
pub fn title(model: &PricingModel, option_type: OptionType) -> String {
    format!("{} - {}", model.model_name(), option_type.label())
}

/// Ramp character for `value` scaled linearly between `lo` and `hi`.
pub fn shade(value: f64, lo: f64, hi: f64) -> char {
    let span = hi - lo;
    if span.is_nan() || span <= 0.0 || !value.is_finite() {
        return SHADE_RAMP[0];
    }
    let top = SHADE_RAMP.len() - 1;
    let position = ((value - lo) / span * top as f64).round();
    SHADE_RAMP[(position.max(0.0) as usize).min(top)]
}

/// Renders a grid as a character heatmap.
pub fn render_heatmap(grid: &PriceGrid, title: &str) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');

    let (lo, hi) = match grid.value_range() {
        Some(range) => range,
        None => {
            out.push_str("(empty grid)\n");
            return out;
        }
    };

    let vol_ticks = ticks(grid.vol_values(), DEFAULT_MAX_TICKS);
    let labels: Vec<(usize, String)> = vol_ticks
        .iter()
        .map(|tick| (tick.index, tick.value.to_string()))
        .collect();
    let margin = labels
        .iter()
        .map(|(_, label)| label.chars().count())
        .max()
        .unwrap_or(0)
        .max(VOL_AXIS_LABEL.chars().count());

    out.push_str(&format!("{:>width$}\n", VOL_AXIS_LABEL, width = margin));
    for (i, row) in grid.prices().iter().enumerate() {
        let label = labels
            .iter()
            .find(|(index, _)| *index == i)
            .map(|(_, label)| label.as_str())
            .unwrap_or("");
        let cells: String = row
            .iter()
            .flat_map(|&price| std::iter::repeat(shade(price, lo, hi)).take(CELL_WIDTH))
            .collect();
        out.push_str(&format!("{:>width$} |{}\n", label, cells, width = margin));
    }

    out.push_str(&format!(
        "{:>width$} +{}\n",
        "",
        "-".repeat(grid.cols() * CELL_WIDTH),
        width = margin
    ));

    // Spot labels start under their column and never overlap
    let mut axis = String::new();
    for tick in ticks(grid.spot_values(), DEFAULT_MAX_TICKS) {
        let column = tick.index * CELL_WIDTH;
        let used = axis.chars().count();
        if used > 0 && used >= column {
            axis.push(' ');
        } else {
            axis.push_str(&" ".repeat(column - used));
        }
        axis.push_str(&tick.value.to_string());
    }
    out.push_str(&format!("{:>width$}  {}\n", "", axis, width = margin));
    out.push_str(&format!("{:>width$}  {}\n", "", SPOT_AXIS_LABEL, width = margin));
    out.push_str(&format!(
        "Scale: '{}' = {:.2} .. '{}' = {:.2}\n",
        SHADE_RAMP[0],
        lo,
        SHADE_RAMP[SHADE_RAMP.len() - 1],
        hi
    ));

    out
}

/// Writes the grid as CSV: a `volatility` column followed by one column per spot.
pub fn write_csv<W: io::Write>(grid: &PriceGrid, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let header = std::iter::once("volatility".to_string())
        .chain(grid.spot_values().iter().map(|spot| spot.to_string()));
    csv_writer.write_record(header)?;

    for (volatility, row) in grid.vol_values().iter().zip(grid.prices()) {
        let record = std::iter::once(volatility.to_string())
            .chain(row.iter().map(|price| price.to_string()));
        csv_writer.write_record(record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// JSON document for one grid.
#[derive(Debug, Serialize)]
pub struct GridDocument<'a> {
    /// Heatmap title
    pub title: String,
    /// Model that priced the grid
    pub model: &'a PricingModel,
    /// Terms held fixed across cells
    pub terms: &'a ContractTerms,
    /// Axes and prices
    pub grid: &'a PriceGrid,
}

/// Pretty-printed JSON for one grid.
pub fn to_json(
    grid: &PriceGrid,
    model: &PricingModel,
    terms: &ContractTerms,
) -> Result<String, serde_json::Error> {
    let document = GridDocument {
        title: title(model, terms.option_type),
        model,
        terms,
        grid,
    };
    serde_json::to_string_pretty(&document)
}

/// Aligned numeric table: one row per volatility, one column per spot.
pub fn render_table(grid: &PriceGrid, title: &str) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');

    out.push_str(&format!("{:>8}", "σ \\ S"));
    for spot in grid.spot_values() {
        out.push_str(&format!(" {:>8.2}", spot));
    }
    out.push('\n');

    for (volatility, row) in grid.vol_values().iter().zip(grid.prices()) {
        out.push_str(&format!("{:>8.4}", volatility));
        for price in row {
            out.push_str(&format!(" {:>8.4}", price));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_grid() -> PriceGrid {
        PriceGrid::new(
            vec![99.0, 100.0, 101.0],
            vec![0.1, 0.2],
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 10.0]],
        )
        .unwrap()
    }

    #[test]
    fn test_title() {
        assert_eq!(
            title(&PricingModel::Analytic, OptionType::Call),
            "Black-Scholes - Call"
        );
        assert_eq!(
            title(&PricingModel::Lattice { steps: 50 }, OptionType::Put),
            "Binomial Tree - Put"
        );
    }

    #[test]
    fn test_shade_endpoints() {
        assert_eq!(shade(1.0, 1.0, 10.0), ' ');
        assert_eq!(shade(10.0, 1.0, 10.0), '@');
        // (5.5 - 1) / 9 * 9 = 4.5 rounds up to the sixth shade
        assert_eq!(shade(5.5, 1.0, 10.0), '+');
        // Flat grids use the first shade
        assert_eq!(shade(3.0, 3.0, 3.0), ' ');
        assert_eq!(shade(f64::NAN, 0.0, 1.0), ' ');
    }

    #[test]
    fn test_render_heatmap_layout() {
        let text = render_heatmap(&small_grid(), "Black-Scholes - Call");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Black-Scholes - Call");
        assert!(lines[1].ends_with(VOL_AXIS_LABEL));
        assert!(lines[2].trim_start().starts_with("0.1 |"));
        assert!(lines[3].trim_start().starts_with("0.2 |"));
        assert!(lines[3].ends_with("@@"));
        assert!(lines[5].contains("99") && lines[5].contains("101"));
        assert!(lines[6].ends_with(SPOT_AXIS_LABEL));
        assert_eq!(lines[7], "Scale: ' ' = 1.00 .. '@' = 10.00");
    }

    #[test]
    fn test_render_heatmap_labels_at_most_five_ticks() {
        let spots: Vec<f64> = (90..=110).map(f64::from).collect();
        let vols: Vec<f64> = (0..20).map(|i| 0.1 + 0.01 * f64::from(i)).collect();
        let prices = vec![vec![1.0; spots.len()]; vols.len()];
        let grid = PriceGrid::new(spots, vols, prices).unwrap();

        let text = render_heatmap(&grid, "t");
        let labelled_rows = text
            .lines()
            .filter(|line| line.contains('|') && !line.trim_start().starts_with('|'))
            .count();
        assert_eq!(labelled_rows, 5);
    }

    #[test]
    fn test_render_empty_grid() {
        let grid = PriceGrid::new(vec![], vec![], vec![]).unwrap();
        assert_eq!(render_heatmap(&grid, "t"), "t\n(empty grid)\n");
    }

    #[test]
    fn test_write_csv() {
        let mut buffer = Vec::new();
        write_csv(&small_grid(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "volatility,99,100,101\n0.1,1,2,3\n0.2,4,5,10\n"
        );
    }

    #[test]
    fn test_to_json() {
        let terms = ContractTerms::new(100.0, 1.0, 0.05, OptionType::Put);
        let model = PricingModel::Lattice { steps: 50 };
        let json = to_json(&small_grid(), &model, &terms).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "Binomial Tree - Put");
        assert_eq!(value["model"]["model"], "lattice");
        assert_eq!(value["model"]["steps"], 50);
        assert_eq!(value["terms"]["option_type"], "put");
        assert_eq!(value["grid"]["prices"][1][2], 10.0);
        assert_eq!(value["grid"]["spot_values"][0], 99.0);
    }

    #[test]
    fn test_render_table() {
        let text = render_table(&small_grid(), "Black-Scholes - Call");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("99.00"));
        assert!(lines[3].starts_with("  0.2000"));
        assert!(lines[3].ends_with("10.0000"));
    }
}
