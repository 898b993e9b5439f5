//! SVG charts for the analytics tab.
//!
//! Markup is generated as plain strings from typed data so it can be checked
//! natively; [`SvgChart`] only injects the result into its container.

use shared::{AnalyticsSnapshot, DailyCount, TopUser};
use std::f64::consts::PI;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::theme::Palette;

pub const CHART_WIDTH: u32 = 480;
pub const CHART_HEIGHT: u32 = 280;
const PADDING: f64 = 40.0;

#[derive(Properties, PartialEq)]
pub struct SvgChartProps {
    pub title: AttrValue,
    /// Generated SVG markup; empty shows the no-data message
    pub svg: AttrValue,
    pub palette: &'static Palette,
}

#[function_component(SvgChart)]
pub fn svg_chart(props: &SvgChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        use_effect_with(props.svg.clone(), move |svg| {
            if let Some(container) = container_ref.cast::<HtmlElement>() {
                container.set_inner_html(svg);
            }
            || ()
        });
    }

    html! {
        <div class={classes!("p-4", props.palette.panel)}>
            <h3 class={classes!("text-lg", "font-semibold", "mb-3", props.palette.heading)}>
                { props.title.clone() }
            </h3>
            if props.svg.is_empty() {
                <p class={classes!("text-sm", props.palette.muted)}>{ "No data available" }</p>
            } else {
                <div class="chart-container overflow-x-auto" ref={container_ref}></div>
            }
        </div>
    }
}

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn svg_open() -> String {
    format!(
        r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#,
        w = CHART_WIDTH,
        h = CHART_HEIGHT
    )
}

fn axes(palette: &Palette) -> String {
    let bottom = CHART_HEIGHT as f64 - PADDING;
    let right = CHART_WIDTH as f64 - PADDING / 2.0;
    format!(
        r#"<g class="chart-axes" stroke="{c}" stroke-width="1"><line x1="{p}" y1="{t}" x2="{p}" y2="{b}"/><line x1="{p}" y1="{b}" x2="{r}" y2="{b}"/></g>"#,
        c = palette.axis,
        p = PADDING,
        t = PADDING / 2.0,
        b = bottom,
        r = right
    )
}

/// Plot coordinates for a series of values, left to right.
fn line_points(values: &[u64]) -> Vec<(f64, f64)> {
    let max = values.iter().copied().max().unwrap_or(0).max(1) as f64;
    let plot_width = CHART_WIDTH as f64 - PADDING * 1.5;
    let plot_height = CHART_HEIGHT as f64 - PADDING * 1.5;
    let bottom = CHART_HEIGHT as f64 - PADDING;
    let step = if values.len() > 1 {
        plot_width / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = if values.len() > 1 {
                PADDING + step * i as f64
            } else {
                PADDING + plot_width / 2.0
            };
            let y = bottom - (*value as f64 / max) * plot_height;
            (x, y)
        })
        .collect()
}

/// Daily activity as a line. Empty input yields an empty string.
pub fn line_chart_svg(days: &[DailyCount], palette: &Palette) -> String {
    if days.is_empty() {
        return String::new();
    }

    let values: Vec<u64> = days.iter().map(|d| d.count).collect();
    let points = line_points(&values);
    let path = points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" L ");
    let color = palette.series_color(0);

    let markers: String = points
        .iter()
        .zip(days)
        .map(|((x, y), day)| {
            format!(
                r#"<circle cx="{:.1}" cy="{:.1}" r="3" fill="{}"><title>{}: {}</title></circle>"#,
                x,
                y,
                color,
                escape_html(&day.date),
                day.count
            )
        })
        .collect();

    // First and last dates only; the axis is too narrow for every label.
    let label_y = CHART_HEIGHT as f64 - PADDING / 2.0;
    let mut labels = String::new();
    if let (Some(first), Some((fx, _))) = (days.first(), points.first()) {
        labels.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" text-anchor="start" font-size="11" fill="{}">{}</text>"#,
            fx,
            label_y,
            palette.chart_text,
            escape_html(&first.date)
        ));
    }
    if days.len() > 1 {
        if let (Some(last), Some((lx, _))) = (days.last(), points.last()) {
            labels.push_str(&format!(
                r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="11" fill="{}">{}</text>"#,
                lx,
                label_y,
                palette.chart_text,
                escape_html(&last.date)
            ));
        }
    }

    format!(
        r#"{}{}<g class="chart-area"><path d="M {}" fill="none" stroke="{}" stroke-width="2" class="line-series"/>{}</g>{}</svg>"#,
        svg_open(),
        axes(palette),
        path,
        color,
        markers,
        labels
    )
}

/// `"<display name> <percent>%"` for one model's slice.
pub fn pie_slice_label(snapshot: &AnalyticsSnapshot, index: usize) -> Option<String> {
    snapshot.chats_by_model.get(index).map(|model| {
        format!(
            "{} {}%",
            model.display_name(),
            snapshot.model_share_percent(model.count)
        )
    })
}

/// Chats per model as a pie. Models with zero chats get no slice; an
/// all-zero breakdown yields an empty string.
pub fn pie_chart_svg(snapshot: &AnalyticsSnapshot, palette: &Palette) -> String {
    let total = snapshot.model_chat_total();
    if total == 0 {
        return String::new();
    }

    let cx = CHART_WIDTH as f64 / 2.0;
    let cy = CHART_HEIGHT as f64 / 2.0;
    let radius = (CHART_WIDTH.min(CHART_HEIGHT) as f64 / 2.0) * 0.8;
    let mut angle = -PI / 2.0;
    let mut slices = String::new();

    for (i, model) in snapshot.chats_by_model.iter().enumerate() {
        if model.count == 0 {
            continue;
        }
        let sweep = model.count as f64 / total as f64 * 2.0 * PI;
        let end = angle + sweep;
        let color = palette.series_color(i);
        let label = pie_slice_label(snapshot, i).unwrap_or_default();

        let shape = if model.count == total {
            format!(r#"<circle cx="{}" cy="{}" r="{}" fill="{}" class="slice"/>"#, cx, cy, radius, color)
        } else {
            let (x1, y1) = (cx + radius * angle.cos(), cy + radius * angle.sin());
            let (x2, y2) = (cx + radius * end.cos(), cy + radius * end.sin());
            let large_arc = if sweep > PI { 1 } else { 0 };
            format!(
                r#"<path d="M {cx},{cy} L {x1:.2},{y1:.2} A {r},{r} 0 {large},1 {x2:.2},{y2:.2} Z" fill="{color}" class="slice"/>"#,
                cx = cx,
                cy = cy,
                x1 = x1,
                y1 = y1,
                r = radius,
                large = large_arc,
                x2 = x2,
                y2 = y2,
                color = color
            )
        };

        let mid = angle + sweep / 2.0;
        slices.push_str(&format!(
            r#"<g class="pie-slice">{}<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="11" fill="{}" class="slice-label">{}</text></g>"#,
            shape,
            cx + radius * 0.65 * mid.cos(),
            cy + radius * 0.65 * mid.sin(),
            palette.chart_text,
            escape_html(&label)
        ));
        angle = end;
    }

    format!(r#"{}<g class="chart-area">{}</g></svg>"#, svg_open(), slices)
}

/// Top users by chat count as vertical bars, in the order given.
pub fn bar_chart_svg(users: &[TopUser], palette: &Palette) -> String {
    if users.is_empty() {
        return String::new();
    }

    let max = users.iter().map(|u| u.chat_count).max().unwrap_or(0).max(1) as f64;
    let plot_width = CHART_WIDTH as f64 - PADDING * 1.5;
    let plot_height = CHART_HEIGHT as f64 - PADDING * 1.5;
    let bottom = CHART_HEIGHT as f64 - PADDING;
    let slot = plot_width / users.len() as f64;
    let bar_width = slot * 0.7;

    let bars: String = users
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let height = user.chat_count as f64 / max * plot_height;
            let x = PADDING + slot * i as f64 + (slot - bar_width) / 2.0;
            let center = x + bar_width / 2.0;
            format!(
                r#"<g class="bar"><rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"><title>{}: {}</title></rect><text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="10" fill="{}">{}</text><text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="10" fill="{}">{}</text></g>"#,
                x,
                bottom - height,
                bar_width,
                height,
                palette.series_color(0),
                escape_html(&user.user_id),
                user.chat_count,
                center,
                bottom - height - 4.0,
                palette.chart_text,
                user.chat_count,
                center,
                bottom + 14.0,
                palette.chart_text,
                escape_html(&user.user_id)
            )
        })
        .collect();

    format!(
        r#"{}{}<g class="chart-area">{}</g></svg>"#,
        svg_open(),
        axes(palette),
        bars
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{DAYLIGHT, EMBER};
    use pretty_assertions::assert_eq;
    use shared::ModelCount;

    fn models(counts: &[(&str, u64)]) -> AnalyticsSnapshot {
        AnalyticsSnapshot {
            chats_by_model: counts
                .iter()
                .map(|(model, count)| ModelCount {
                    model: model.to_string(),
                    count: *count,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_series_render_nothing() {
        assert_eq!(line_chart_svg(&[], &EMBER), "");
        assert_eq!(bar_chart_svg(&[], &EMBER), "");
        assert_eq!(pie_chart_svg(&AnalyticsSnapshot::default(), &EMBER), "");
        assert_eq!(pie_chart_svg(&models(&[("groq", 0)]), &EMBER), "");
    }

    #[test]
    fn test_pie_labels_use_display_names_and_percentages() {
        let snapshot = models(&[("gemini", 3), ("groq", 1)]);
        assert_eq!(pie_slice_label(&snapshot, 0).as_deref(), Some("neura.essence1.o 75%"));
        assert_eq!(pie_slice_label(&snapshot, 1).as_deref(), Some("neura.swift1.o 25%"));
        assert_eq!(pie_slice_label(&snapshot, 2), None);

        let svg = pie_chart_svg(&snapshot, &EMBER);
        assert!(svg.contains("neura.essence1.o 75%"));
        assert!(svg.contains("neura.swift1.o 25%"));
        assert!(!svg.contains(">gemini"));
        assert_eq!(svg.matches("class=\"slice\"").count(), 2);
    }

    #[test]
    fn test_single_model_is_full_circle() {
        let svg = pie_chart_svg(&models(&[("other-model", 7)]), &DAYLIGHT);
        assert!(svg.contains("<circle"));
        assert!(svg.contains("other-model 100%"));
        assert!(svg.contains(DAYLIGHT.series_color(0)));
    }

    #[test]
    fn test_line_chart_has_point_per_day() {
        let days = vec![
            DailyCount { date: "2024-05-01".into(), count: 2 },
            DailyCount { date: "2024-05-02".into(), count: 5 },
            DailyCount { date: "2024-05-03".into(), count: 0 },
        ];
        let svg = line_chart_svg(&days, &EMBER);
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains(">2024-05-01</text>"));
        assert!(svg.contains(">2024-05-03</text>"));
        assert!(svg.contains(EMBER.series_color(0)));
    }

    #[test]
    fn test_line_points_scale_to_max() {
        let points = line_points(&[0, 10]);
        let bottom = CHART_HEIGHT as f64 - PADDING;
        assert_eq!(points[0].1, bottom);
        assert!(points[1].1 < points[0].1);
        assert!(points[1].0 > points[0].0);
    }

    #[test]
    fn test_bar_chart_escapes_user_ids() {
        let users = vec![
            TopUser { user_id: "<bob>".into(), chat_count: 9 },
            TopUser { user_id: "alice".into(), chat_count: 4 },
        ];
        let svg = bar_chart_svg(&users, &EMBER);
        assert_eq!(svg.matches("<rect").count(), 2);
        assert!(svg.contains("&lt;bob&gt;"));
        assert!(!svg.contains("<bob>"));
    }
}
