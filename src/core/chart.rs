// BuildSleuth - core/chart.rs
//
// Pie/donut chart data in the shape Chart.js consumes:
//   { "labels": [...], "datasets": [{ "backgroundColor": [...], "data": [...] }] }

use crate::util::constants::{PLACEHOLDER_COLOUR, PLACEHOLDER_LABEL};
use serde::Serialize;

/// Slice colours, assigned in order and repeated when there are more
/// slices than colours.
pub const CHART_PALETTE: [&str; 11] = [
    "#008B8B", // dark cyan
    "#8A2BE2", // blue violet
    "#A52A2A", // brown
    "#D2691E", // chocolate
    "#FF7F50", // coral
    "#006400", // dark green
    "#483D8B", // dark slate blue
    "#DAA520", // goldenrod
    "#4B0082", // indigo
    "#90EE90", // light green
    "#EE82EE", // violet
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub background_color: Vec<String>,
    pub data: Vec<f64>,
}

impl ChartData {
    /// Single black "None" slice, shown before any report is loaded.
    pub fn placeholder() -> Self {
        Self {
            labels: vec![PLACEHOLDER_LABEL.to_string()],
            datasets: vec![ChartDataset {
                background_color: vec![PLACEHOLDER_COLOUR.to_string()],
                data: vec![1.0],
            }],
        }
    }
}

impl Default for ChartData {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// Build a single-dataset chart, one palette colour per label.
pub fn build_chart_data(labels: Vec<String>, data: Vec<f64>) -> ChartData {
    debug_assert_eq!(labels.len(), data.len());
    let background_color = CHART_PALETTE
        .iter()
        .cycle()
        .take(labels.len())
        .map(|c| (*c).to_string())
        .collect();

    ChartData {
        labels,
        datasets: vec![ChartDataset {
            background_color,
            data,
        }],
    }
}
