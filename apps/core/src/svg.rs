//! SVG and standalone HTML output of a built chart.
//!
//! Cells carry `data-year`, `data-month` and `data-temp` attributes and a
//! `<title>` with the tooltip text. The HTML page adds a `#tooltip` element
//! that is shown on `mouseover` and hidden on `mouseout`.

use std::fmt::Write as _;

use crate::axis::{Axis, AxisOrientation};
use crate::chart::HeatmapChart;
use crate::tooltip::tooltip_text;

const TICK_SIZE: f64 = 6.0;
const LEGEND_SWATCH: f64 = 20.0;

/// Renders the chart as a self-contained `<svg>` element.
pub fn render_svg(chart: &HeatmapChart) -> String {
    let canvas = chart.canvas();
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" font-family="sans-serif" font-size="10">"#,
        canvas.width, canvas.height
    );

    for cell in chart.cells() {
        let _ = writeln!(
            out,
            r#"  <rect class="cell" fill="{fill}" data-year="{year}" data-month="{month}" data-temp="{temp}" x="{x}" y="{y}" width="{width}" height="{height}"><title>{title}</title></rect>"#,
            fill = cell.bucket.css_name(),
            year = cell.year,
            month = cell.month,
            temp = cell.temperature,
            x = cell.x,
            y = cell.y,
            width = cell.width,
            height = cell.height,
            title = escape(&tooltip_text(&cell.record)),
        );
    }

    render_axis(&mut out, chart.x_axis());
    render_axis(&mut out, chart.y_axis());
    render_legend(&mut out, chart);

    out.push_str("</svg>\n");
    out
}

fn render_axis(out: &mut String, axis: &Axis) {
    let _ = writeln!(
        out,
        r#"  <g id="{}" transform="{}" fill="none">"#,
        axis.id,
        axis.transform()
    );

    let (start, end) = axis.extent;
    match axis.orientation {
        AxisOrientation::Bottom => {
            let _ = writeln!(
                out,
                r#"    <path class="domain" stroke="currentColor" d="M{start},0H{end}"/>"#
            );
            for tick in &axis.ticks {
                let _ = writeln!(
                    out,
                    r#"    <g class="tick" transform="translate({}, 0)"><line stroke="currentColor" y2="{TICK_SIZE}"/><text fill="currentColor" y="9" dy="0.71em" text-anchor="middle">{}</text></g>"#,
                    tick.position,
                    escape(&tick.label)
                );
            }
        }
        AxisOrientation::Left => {
            let _ = writeln!(
                out,
                r#"    <path class="domain" stroke="currentColor" d="M0,{start}V{end}"/>"#
            );
            for tick in &axis.ticks {
                let _ = writeln!(
                    out,
                    r#"    <g class="tick" transform="translate(0, {})"><line stroke="currentColor" x2="-{TICK_SIZE}"/><text fill="currentColor" x="-9" dy="0.32em" text-anchor="end">{}</text></g>"#,
                    tick.position,
                    escape(&tick.label)
                );
            }
        }
    }

    out.push_str("  </g>\n");
}

fn render_legend(out: &mut String, chart: &HeatmapChart) {
    let canvas = chart.canvas();
    let top = (canvas.padding - LEGEND_SWATCH) / 2.0;

    let _ = writeln!(
        out,
        r#"  <g id="legend" transform="translate({}, {top})">"#,
        canvas.left()
    );
    for (index, entry) in chart.legend().iter().enumerate() {
        let x = index as f64 * LEGEND_SWATCH * 4.0;
        let _ = writeln!(
            out,
            r#"    <rect fill="{color}" x="{x}" y="0" width="{LEGEND_SWATCH}" height="{LEGEND_SWATCH}"/><text x="{text_x}" y="14">{label}</text>"#,
            color = entry.color,
            text_x = x + LEGEND_SWATCH + 4.0,
            label = escape(entry.label),
        );
    }
    out.push_str("  </g>\n");
}

/// Renders a standalone page with title, description, chart and tooltip.
pub fn render_html(chart: &HeatmapChart) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <h1 id="title">{title}</h1>
    <h2 id="description">{description}</h2>
    <div id="tooltip" style="visibility: hidden"></div>
{svg}
    <script>{js}</script>
</body>
</html>
"#,
        title = escape(chart.title()),
        description = escape(&chart.description()),
        css = inline_css(),
        svg = render_svg(chart),
        js = inline_javascript(),
    )
}

const fn inline_css() -> &'static str {
    r"
        body { font-family: sans-serif; text-align: center; }
        #tooltip { position: absolute; padding: 4px 8px; background: #222; color: #fff; border-radius: 4px; pointer-events: none; }
        .cell:hover { stroke: #000; }
    "
}

const fn inline_javascript() -> &'static str {
    r"
        const tooltip = document.getElementById('tooltip');
        document.querySelectorAll('rect.cell').forEach((cell) => {
            cell.addEventListener('mouseover', (event) => {
                tooltip.textContent = cell.querySelector('title').textContent;
                tooltip.setAttribute('data-year', cell.getAttribute('data-year'));
                tooltip.style.left = event.pageX + 10 + 'px';
                tooltip.style.top = event.pageY - 28 + 'px';
                tooltip.style.visibility = 'visible';
            });
            cell.addEventListener('mouseout', () => {
                tooltip.style.visibility = 'hidden';
            });
        });
    "
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, Record};
    use crate::geometry::Canvas;

    fn chart() -> HeatmapChart {
        let records = vec![
            Record {
                year: 1900,
                month: 1,
                variance: -0.5,
            },
            Record {
                year: 2000,
                month: 6,
                variance: 1.5,
            },
        ];
        HeatmapChart::build(&Dataset::new(8.66, records).unwrap(), Canvas::default()).unwrap()
    }

    #[test]
    fn svg_contains_cells_with_metadata() {
        let svg = render_svg(&chart());

        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches(r#"class="cell""#).count(), 2);
        assert!(svg.contains(r#"data-year="1900" data-month="0""#));
        assert!(svg.contains(r#"fill="Crimson""#));
        assert!(svg.contains("<title>1900 January : -0.5</title>"));
    }

    #[test]
    fn svg_contains_axes_and_legend() {
        let svg = render_svg(&chart());

        assert!(svg.contains(r#"id="x-axis" transform="translate(0, 550)""#));
        assert!(svg.contains(r#"id="y-axis" transform="translate(50, 0)""#));
        assert!(svg.contains(">December</text>"));
        assert!(svg.contains(r#"id="legend""#));
    }

    #[test]
    fn html_wraps_svg_with_tooltip() {
        let html = render_html(&chart());

        assert!(html.contains(r#"<div id="tooltip" style="visibility: hidden">"#));
        assert!(html.contains("1900 - 2000: base temperature 8.66℃"));
        assert!(html.contains("mouseout"));
    }

    #[test]
    fn escape_replaces_markup() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }
}
