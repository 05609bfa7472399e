//! Shape decoders: turn geometric SVG primitives into path data.

use crate::ast::Element;
use crate::attr::{format_number as n, numeric_attributes, parse_float, resolve_value};

/// The shapes we know how to turn into path data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Path,
    Circle,
    Ellipse,
    Polygon,
    Polyline,
    Rect,
    Line,
}

impl Shape {
    /// Look up the decoder for a tag name.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "path" => Shape::Path,
            "circle" => Shape::Circle,
            "ellipse" => Shape::Ellipse,
            "polygon" => Shape::Polygon,
            "polyline" => Shape::Polyline,
            "rect" => Shape::Rect,
            "line" => Shape::Line,
            _ => return None,
        })
    }

    /// Produce path data for `elem`, read as this shape.
    pub fn decode(self, elem: &Element) -> String {
        match self {
            Shape::Path => decode_path(elem),
            Shape::Circle => decode_circle(elem),
            Shape::Ellipse => decode_ellipse(elem),
            Shape::Polygon => decode_polygon(elem),
            Shape::Polyline => decode_polyline(elem),
            Shape::Rect => decode_rect(elem),
            Shape::Line => decode_line(elem),
        }
    }
}

fn decode_path(elem: &Element) -> String {
    let d = elem.get_attr("d").unwrap_or_default();
    // Relative-only paths get an absolute anchor subpath up front
    if d.starts_with('m') {
        format!("M0 0z{}", d)
    } else {
        d.to_string()
    }
}

fn decode_circle(elem: &Element) -> String {
    let [cx, cy, r] = numeric_attributes(elem, ["cx", "cy", "r"]);
    format!(
        "M{} {} m-{},0 a{},{} 0 1,0 {},0 a{},{} 0 1,0 {},0",
        n(cx),
        n(cy),
        n(r),
        n(r),
        n(r),
        n(r * 2.0),
        n(r),
        n(r),
        n(r * -2.0),
    )
}

fn decode_ellipse(elem: &Element) -> String {
    let [cx, cy, rx, ry] = numeric_attributes(elem, ["cx", "cy", "rx", "ry"]);
    format!(
        "M{},{}a{},{} 0 1,0 {},0a{},{} 0 1,0{},0Z",
        n(cx - rx),
        n(cy),
        n(rx),
        n(ry),
        n(2.0 * rx),
        n(rx),
        n(ry),
        n(-2.0 * rx),
    )
}

fn decode_polygon(elem: &Element) -> String {
    decode_polyline(elem) + "z"
}

fn decode_polyline(elem: &Element) -> String {
    let points = elem.get_attr("points").unwrap_or_default().replace("  ", " ");
    let tokens: Vec<&str> = points
        .trim()
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    tokens
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{}{} {}", cmd, pair[0], pair[1])
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A corner radius attribute, `None` when missing, zero or non-numeric
/// (`auto` included).
fn radius_attr<'a>(elem: &'a Element, name: &str) -> Option<&'a str> {
    elem.get_attr(name).filter(|v| {
        let r = parse_float(v);
        !r.is_nan() && r != 0.0
    })
}

fn decode_rect(elem: &Element) -> String {
    let [x, y, w, h] = numeric_attributes(elem, ["x", "y", "width", "height"]);
    let x = if x.is_nan() { 0.0 } else { x };
    let y = if y.is_nan() { 0.0 } else { y };

    // A lone radius mirrors onto the other axis, resolved against its own
    // axis's dimension.
    let (rx, ry) = match (radius_attr(elem, "rx"), radius_attr(elem, "ry")) {
        (None, None) => (0.0, 0.0),
        (Some(rx), None) => {
            let r = resolve_value(rx, w);
            (r, r)
        }
        (None, Some(ry)) => {
            let r = resolve_value(ry, h);
            (r, r)
        }
        (Some(rx), Some(ry)) => (resolve_value(rx, w), resolve_value(ry, h)),
    };
    let rx = if rx > w / 2.0 { w / 2.0 } else { rx };
    let ry = if ry > h / 2.0 { h / 2.0 } else { ry };

    let has_curves = rx > 0.0 && ry > 0.0;
    let arc = |end_x: f64, end_y: f64| {
        has_curves.then(|| format!("A{} {} 0 0 1 {} {}", n(rx), n(ry), n(end_x), n(end_y)))
    };

    [
        Some(format!("M{} {}", n(x + rx), n(y))),
        Some(format!("H{}", n(x + w - rx))),
        arc(x + w, y + ry),
        Some(format!("V{}", n(y + h - ry))),
        arc(x + w - rx, y + h),
        Some(format!("H{}", n(x + rx))),
        arc(x, y + h - ry),
        Some(format!("V{}", n(y + ry))),
        arc(x + rx, y),
        Some("Z".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ")
}

fn decode_line(elem: &Element) -> String {
    let [x1, y1, x2, y2] = numeric_attributes(elem, ["x1", "y1", "x2", "y2"]);
    format!("M{},{}L{},{}", n(x1), n(y1), n(x2), n(y2))
}
