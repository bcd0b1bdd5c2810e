//! Plotly-compatible line chart of closing prices.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::history::PriceSeries;

/// Visual theme for the price chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartTheme {
    /// White plot on light grey paper with light grid lines.
    #[default]
    Light,
    /// Transparent backgrounds for a dark page.
    Dark,
}

struct Palette {
    grid: &'static str,
    plot_bg: &'static str,
    paper_bg: &'static str,
    font: &'static str,
}

impl ChartTheme {
    fn palette(self) -> Palette {
        match self {
            ChartTheme::Light => Palette {
                grid: "LightGrey",
                plot_bg: "rgba(255, 255, 255, 1)",
                paper_bg: "rgba(240, 242, 246, 1)",
                font: "#2a3f5f",
            },
            ChartTheme::Dark => Palette {
                grid: "#444444",
                plot_bg: "rgba(0, 0, 0, 0)",
                paper_bg: "rgba(0, 0, 0, 0)",
                font: "#f2f5fa",
            },
        }
    }
}

impl fmt::Display for ChartTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartTheme::Light => write!(f, "light"),
            ChartTheme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for ChartTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ChartTheme::Light),
            "dark" => Ok(ChartTheme::Dark),
            other => Err(format!("unknown theme '{}': expected light or dark", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub name: &'static str,
    /// ISO-8601 trading dates.
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub plot_bgcolor: &'static str,
    pub paper_bgcolor: &'static str,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
    pub showgrid: bool,
    pub gridcolor: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub color: &'static str,
}

fn title(text: impl Into<String>) -> Title {
    Title { text: text.into() }
}

/// Single-series close-price figure, or `None` when there is nothing to plot.
pub fn build_figure(symbol: &str, series: &PriceSeries, theme: ChartTheme) -> Option<Figure> {
    if series.is_empty() {
        return None;
    }
    let palette = theme.palette();
    let axis = |text: &str| Axis {
        title: title(text),
        showgrid: true,
        gridcolor: palette.grid,
    };

    Some(Figure {
        data: vec![Trace {
            kind: "scatter",
            mode: "lines",
            name: "Close Price",
            x: series.dates().iter().map(|d| d.to_string()).collect(),
            y: series.closes(),
        }],
        layout: Layout {
            title: title(format!("{} Closing Prices", symbol)),
            xaxis: axis("Date"),
            yaxis: axis("Close Price"),
            plot_bgcolor: palette.plot_bg,
            paper_bgcolor: palette.paper_bg,
            font: Font {
                color: palette.font,
            },
        },
    })
}
