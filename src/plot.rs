//! Trade-space line charts.
//!
//! The output extension picks the backend: `.svg` renders vector output, any
//! other extension goes through the bitmap encoder.

use std::fs;
use std::path::Path;

use lunar_mission::TradeGrid;
use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("failed to prepare output directory: {0}")]
    Io(#[from] std::io::Error),
    #[error("nothing to plot: {0}")]
    Empty(&'static str),
    #[error("rendering failed: {0}")]
    Render(String),
}

/// One labelled curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// A chart's worth of curves and axis descriptions.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSet {
    pub caption: String,
    pub x_desc: String,
    pub y_desc: String,
    pub curves: Vec<Curve>,
}

/// Payload against launch mass, one curve per thrust level.
pub fn payload_vs_launch_mass(grid: &TradeGrid) -> CurveSet {
    let curves = grid
        .thrusts_n
        .iter()
        .enumerate()
        .map(|(j, thrust)| Curve {
            label: format!("Thrust={:6.0} N", thrust),
            points: grid.payload_by_launch_mass(j),
        })
        .collect();
    CurveSet {
        caption: "Payload vs start mass".to_string(),
        x_desc: "Start Mass (kg)".to_string(),
        y_desc: "Payload (kg)".to_string(),
        curves,
    }
}

/// Payload against thrust-to-weight at PDI start, one curve per launch mass.
pub fn payload_vs_thrust_to_weight(grid: &TradeGrid) -> CurveSet {
    let curves = grid
        .launch_masses_kg
        .iter()
        .enumerate()
        .map(|(i, mass)| Curve {
            label: format!("Start Mass={:5.0} kg", mass),
            points: grid.payload_by_thrust_to_weight(i),
        })
        .collect();
    CurveSet {
        caption: "Payload vs thrust/weight".to_string(),
        x_desc: "Thrust/Weight Ratio at PDI Start".to_string(),
        y_desc: "Payload (kg)".to_string(),
        curves,
    }
}

/// Render a curve set to `path`, creating parent directories as needed.
pub fn render(path: &Path, set: &CurveSet, size: (u32, u32)) -> Result<(), PlotError> {
    let (x_range, y_range) = bounds(set).ok_or(PlotError::Empty("no finite points"))?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let is_svg = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);
    if is_svg {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw_curves(&root, set, x_range, y_range).map_err(|err| PlotError::Render(err.to_string()))
    } else {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        draw_curves(&root, set, x_range, y_range).map_err(|err| PlotError::Render(err.to_string()))
    }
}

fn draw_curves<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    set: &CurveSet,
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 16.0, FontStyle::Normal);

    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .caption(set.caption.as_str(), caption_font)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)?;

    chart
        .configure_mesh()
        .x_desc(set.x_desc.as_str())
        .y_desc(set.y_desc.as_str())
        .label_style(label_font.clone())
        .axis_desc_style(label_font.clone())
        .draw()?;

    for (idx, curve) in set.curves.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let points: Vec<(f64, f64)> = curve
            .points
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect();
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(3)))?
            .label(curve.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(label_font)
        .draw()?;

    root.present()?;
    Ok(())
}

fn bounds(set: &CurveSet) -> Option<((f64, f64), (f64, f64))> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(x, y) in set.curves.iter().flat_map(|c| c.points.iter()) {
        if x.is_finite() && y.is_finite() {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    if !x_min.is_finite() {
        return None;
    }
    Some((pad(x_min, x_max), pad(y_min, y_max)))
}

// Keep a single point (or a flat curve) from collapsing the axis.
fn pad(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    if span.abs() < f64::EPSILON {
        let half = (min.abs() * 0.05).max(1.0);
        (min - half, max + half)
    } else {
        (min - 0.05 * span, max + 0.05 * span)
    }
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}
