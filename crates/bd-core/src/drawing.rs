//! 2D engineering-drawing layout
//!
//! `build_frame` lays out one complete drawing pass - grid, side view,
//! front view, dimension lines, title, and specification block - as typed
//! shapes in surface pixel coordinates. The frontend rasterizes the frame
//! with its painter; nothing here touches the UI. A frame lives for one
//! render pass and is rebuilt from the current parameters every time.

use std::f32::consts::PI;

use crate::constants::{COLLAR_LENGTH, GRIP_RING_COUNT, TOLERANCE_MM};
use crate::params::{DesignParameters, GripType};

/// Fixed pixel scale applied to millimeter values
pub const PX_PER_MM: f32 = 8.0;

/// Grid spacing in millimeters
const GRID_STEP_MM: f32 = 5.0;

/// Side view sits above the surface center, front view below
const SIDE_VIEW_LIFT: f32 = 100.0;
const FRONT_VIEW_DROP: f32 = 150.0;

/// Samples per quadratic curve when flattening the torpedo outline
const CURVE_SAMPLES: u32 = 16;

/// Side-view cut window: 12 lines starting at -length/3, stepped length/18
const SIDE_CUT_COUNT: u32 = 12;

/// Front-view tick count and radial window
const FRONT_TICK_COUNT: u32 = 16;
const FRONT_TICK_INNER: f32 = 0.8;
const FRONT_TICK_OUTER: f32 = 1.1;

pub type Point = [f32; 2];
pub type Rgb = [f32; 3];

/// Ink colors (sRGB)
pub const GRID_COLOR: Rgb = [0.878, 0.878, 0.878];
pub const CENTERLINE_COLOR: Rgb = [0.6, 0.6, 0.6];
pub const INK_COLOR: Rgb = [0.2, 0.2, 0.2];
pub const RING_COLOR: Rgb = [0.267, 0.267, 0.267];
pub const CUT_COLOR: Rgb = [0.4, 0.4, 0.4];

/// Stroked line segment
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub a: Point,
    pub b: Point,
    pub width: f32,
    pub color: Rgb,
    pub dashed: bool,
}

impl Line {
    fn solid(a: Point, b: Point, width: f32, color: Rgb) -> Self {
        Self {
            a,
            b,
            width,
            color,
            dashed: false,
        }
    }

    fn dashed(a: Point, b: Point, width: f32, color: Rgb) -> Self {
        Self {
            a,
            b,
            width,
            color,
            dashed: true,
        }
    }
}

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Positioned text run
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub pos: Point,
    pub text: String,
    pub size: f32,
    pub align: TextAlign,
    pub color: Rgb,
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    pub min: Point,
    pub max: Point,
    pub fill: Option<Rgb>,
    pub stroke_width: f32,
    pub stroke: Rgb,
}

/// Closed polygon (already flattened)
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
    pub fill: Option<Rgb>,
    pub stroke_width: f32,
    pub stroke: Rgb,
}

/// Stroked circle
#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    pub center: Point,
    pub radius: f32,
    pub stroke_width: f32,
    pub stroke: Rgb,
}

/// Body outline of the side view
#[derive(Debug, Clone, PartialEq)]
pub enum BodyOutline {
    /// Straight and scallop bodies
    Straight(RectShape),
    /// Torpedo body, bulged quadratic path flattened to a polygon
    Torpedo(Polygon),
}

/// Double-wing arrowhead at a dimension line end
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrowhead {
    pub origin: Point,
    pub delta: Point,
}

/// Dimension line with arrowheads at both ends and a value label
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionLine {
    pub line: Line,
    pub arrows: [Arrowhead; 2],
    pub label: Text,
}

/// Side (profile) view of the barrel
#[derive(Debug, Clone, PartialEq)]
pub struct SideView {
    pub centerline: Line,
    pub body: BodyOutline,
    /// One tick per grip ring, at the 3D ring positions
    pub ring_ticks: Vec<Line>,
    /// Scallop cut lines; empty for other grip types
    pub cut_lines: Vec<Line>,
    pub collar: RectShape,
    pub tip: Polygon,
}

/// Front (cross-section) view
#[derive(Debug, Clone, PartialEq)]
pub struct FrontView {
    pub outline: CircleShape,
    pub centerlines: [Line; 2],
    /// Scallop grip ticks; empty for other grip types
    pub grip_ticks: Vec<Line>,
    pub caption: Text,
}

/// One complete drawing pass
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingFrame {
    pub grid: Vec<Line>,
    pub title: Text,
    pub side: SideView,
    pub front: FrontView,
    pub length_dim: DimensionLine,
    pub diameter_dim: DimensionLine,
    pub spec: Vec<Text>,
}

/// Lay out one drawing pass for the given parameters and surface size
pub fn build_frame(params: &DesignParameters, width: f32, height: f32) -> DrawingFrame {
    let cx = width / 2.0;
    let cy = height / 2.0;
    let side_center = [cx, cy - SIDE_VIEW_LIFT];
    let front_center = [cx, cy + FRONT_VIEW_DROP];

    DrawingFrame {
        grid: build_grid(width, height),
        title: Text {
            pos: [cx, 50.0],
            text: "Dart Barrel Drawing".to_string(),
            size: 24.0,
            align: TextAlign::Center,
            color: INK_COLOR,
        },
        side: build_side_view(params, side_center),
        front: build_front_view(params, front_center),
        length_dim: build_length_dimension(params, side_center),
        diameter_dim: build_diameter_dimension(params, side_center),
        spec: build_spec_block(params, [50.0, 100.0]),
    }
}

fn build_grid(width: f32, height: f32) -> Vec<Line> {
    let step = PX_PER_MM * GRID_STEP_MM;
    let mut lines = Vec::new();

    let mut x = 0.0;
    while x < width {
        lines.push(Line::solid([x, 0.0], [x, height], 0.5, GRID_COLOR));
        x += step;
    }
    let mut y = 0.0;
    while y < height {
        lines.push(Line::solid([0.0, y], [width, y], 0.5, GRID_COLOR));
        y += step;
    }

    lines
}

fn build_side_view(params: &DesignParameters, [cx, cy]: Point) -> SideView {
    let bl = params.length_mm * PX_PER_MM;
    let bd = params.diameter_mm * PX_PER_MM;
    let half_l = bl / 2.0;
    let half_d = bd / 2.0;
    let fill = params.material.properties().base_color;

    let centerline = Line::dashed(
        [cx - half_l - 20.0, cy],
        [cx + half_l + 20.0, cy],
        1.0,
        CENTERLINE_COLOR,
    );

    let body = match params.grip {
        GripType::Torpedo => BodyOutline::Torpedo(torpedo_outline([cx, cy], bl, bd, fill)),
        GripType::Straight | GripType::Scallop => BodyOutline::Straight(RectShape {
            min: [cx - half_l, cy - half_d],
            max: [cx + half_l, cy + half_d],
            fill: Some(fill),
            stroke_width: 2.0,
            stroke: INK_COLOR,
        }),
    };

    // Ring ticks sit at the same axial positions as the 3D grip rings,
    // slightly overshooting the outline
    let ring_ticks = (0..GRIP_RING_COUNT)
        .map(|i| {
            let x = cx - bl / 4.0 + i as f32 * bl / 16.0;
            Line::solid(
                [x, cy - half_d - 2.0],
                [x, cy + half_d + 2.0],
                2.0,
                RING_COLOR,
            )
        })
        .collect();

    let cut_lines = if params.grip == GripType::Scallop {
        (0..SIDE_CUT_COUNT)
            .map(|i| {
                let x = cx - bl / 3.0 + i as f32 * bl / 18.0;
                Line::solid([x, cy - half_d], [x, cy + half_d], 1.0, CUT_COLOR)
            })
            .collect()
    } else {
        Vec::new()
    };

    let collar = RectShape {
        min: [cx + half_l, cy - half_d + 2.0],
        max: [cx + half_l + COLLAR_LENGTH * PX_PER_MM, cy + half_d - 2.0],
        fill: Some(INK_COLOR),
        stroke_width: 1.0,
        stroke: INK_COLOR,
    };

    let tip = Polygon {
        points: vec![
            [cx - half_l, cy - half_d + 3.0],
            [cx - half_l - 2.0 * PX_PER_MM, cy],
            [cx - half_l, cy + half_d - 3.0],
        ],
        fill: Some(INK_COLOR),
        stroke_width: 1.0,
        stroke: INK_COLOR,
    };

    SideView {
        centerline,
        body,
        ring_ticks,
        cut_lines,
        collar,
        tip,
    }
}

/// Closed torpedo outline: four quadratic curves bulging to 1.3x radius at
/// the midline, flattened for the painter. The 3D lathe is sinusoidal with
/// the same 1.3 peak; the two profiles agree at the midpoint only, which is
/// the intended approximate correspondence.
fn torpedo_outline([cx, cy]: Point, bl: f32, bd: f32, fill: Rgb) -> Polygon {
    let half_l = bl / 2.0;
    let quarter_l = bl / 4.0;
    let r = bd / 2.0;
    let bulge = r * 1.3;

    let mut points = Vec::new();
    let mut curve = |p0: Point, cp: Point, p1: Point| {
        for i in 0..=CURVE_SAMPLES {
            let t = i as f32 / CURVE_SAMPLES as f32;
            points.push(sample_quadratic(p0, cp, p1, t));
        }
    };

    // Top edge, left to right
    curve(
        [cx - half_l, cy - r],
        [cx - quarter_l, cy - bulge],
        [cx, cy - bulge],
    );
    curve(
        [cx, cy - bulge],
        [cx + quarter_l, cy - bulge],
        [cx + half_l, cy - r],
    );
    // Bottom edge, right to left
    curve(
        [cx + half_l, cy + r],
        [cx + quarter_l, cy + bulge],
        [cx, cy + bulge],
    );
    curve(
        [cx, cy + bulge],
        [cx - quarter_l, cy + bulge],
        [cx - half_l, cy + r],
    );

    Polygon {
        points,
        fill: Some(fill),
        stroke_width: 2.0,
        stroke: INK_COLOR,
    }
}

fn sample_quadratic(p0: Point, cp: Point, p1: Point, t: f32) -> Point {
    let u = 1.0 - t;
    [
        u * u * p0[0] + 2.0 * u * t * cp[0] + t * t * p1[0],
        u * u * p0[1] + 2.0 * u * t * cp[1] + t * t * p1[1],
    ]
}

fn build_front_view(params: &DesignParameters, [cx, cy]: Point) -> FrontView {
    let radius = params.diameter_mm * PX_PER_MM / 2.0;

    let outline = CircleShape {
        center: [cx, cy],
        radius,
        stroke_width: 2.0,
        stroke: INK_COLOR,
    };

    let centerlines = [
        Line::dashed(
            [cx - radius - 10.0, cy],
            [cx + radius + 10.0, cy],
            1.0,
            CENTERLINE_COLOR,
        ),
        Line::dashed(
            [cx, cy - radius - 10.0],
            [cx, cy + radius + 10.0],
            1.0,
            CENTERLINE_COLOR,
        ),
    ];

    let grip_ticks = if params.grip == GripType::Scallop {
        (0..FRONT_TICK_COUNT)
            .map(|i| {
                let angle = i as f32 * 2.0 * PI / FRONT_TICK_COUNT as f32;
                let (sin, cos) = angle.sin_cos();
                Line::solid(
                    [
                        cx + cos * radius * FRONT_TICK_INNER,
                        cy + sin * radius * FRONT_TICK_INNER,
                    ],
                    [
                        cx + cos * radius * FRONT_TICK_OUTER,
                        cy + sin * radius * FRONT_TICK_OUTER,
                    ],
                    1.0,
                    CUT_COLOR,
                )
            })
            .collect()
    } else {
        Vec::new()
    };

    FrontView {
        outline,
        centerlines,
        grip_ticks,
        caption: Text {
            pos: [cx, cy + radius + 30.0],
            text: "Front view".to_string(),
            size: 14.0,
            align: TextAlign::Center,
            color: INK_COLOR,
        },
    }
}

fn build_length_dimension(params: &DesignParameters, [cx, cy]: Point) -> DimensionLine {
    let half_l = params.length_mm * PX_PER_MM / 2.0;
    let half_d = params.diameter_mm * PX_PER_MM / 2.0;
    let y = cy + half_d + 30.0;

    DimensionLine {
        line: Line::solid([cx - half_l, y], [cx + half_l, y], 1.0, INK_COLOR),
        arrows: [
            Arrowhead {
                origin: [cx - half_l, y],
                delta: [-5.0, 0.0],
            },
            Arrowhead {
                origin: [cx + half_l, y],
                delta: [5.0, 0.0],
            },
        ],
        label: Text {
            pos: [cx, y - 5.0],
            text: format!("{}mm", format_value(params.length_mm)),
            size: 12.0,
            align: TextAlign::Center,
            color: INK_COLOR,
        },
    }
}

fn build_diameter_dimension(params: &DesignParameters, [cx, cy]: Point) -> DimensionLine {
    let half_l = params.length_mm * PX_PER_MM / 2.0;
    let half_d = params.diameter_mm * PX_PER_MM / 2.0;
    let x = cx + half_l + 40.0;

    DimensionLine {
        line: Line::solid([x, cy - half_d], [x, cy + half_d], 1.0, INK_COLOR),
        arrows: [
            Arrowhead {
                origin: [x, cy - half_d],
                delta: [0.0, -5.0],
            },
            Arrowhead {
                origin: [x, cy + half_d],
                delta: [0.0, 5.0],
            },
        ],
        label: Text {
            pos: [x + 10.0, cy],
            text: format!("\u{2300}{}mm", format_value(params.diameter_mm)),
            size: 12.0,
            align: TextAlign::Left,
            color: INK_COLOR,
        },
    }
}

fn build_spec_block(params: &DesignParameters, [x, y]: Point) -> Vec<Text> {
    let line = |dy: f32, size: f32, text: String| Text {
        pos: [x, y + dy],
        text,
        size,
        align: TextAlign::Left,
        color: INK_COLOR,
    };

    vec![
        line(0.0, 16.0, "Specifications".to_string()),
        line(
            25.0,
            14.0,
            format!("Length: {}mm", format_value(params.length_mm)),
        ),
        line(
            45.0,
            14.0,
            format!("Diameter: \u{2300}{}mm", format_value(params.diameter_mm)),
        ),
        line(
            65.0,
            14.0,
            format!("Weight: {}g", format_value(params.weight_g)),
        ),
        line(
            85.0,
            14.0,
            format!("Material: {}", params.material.display_name()),
        ),
        line(105.0, 14.0, format!("Grip: {}", params.grip.display_name())),
        line(
            130.0,
            14.0,
            format!("Tolerance: \u{00b1}{}mm", format_value(TOLERANCE_MM)),
        ),
    ]
}

/// Format a slider value, dropping a trailing ".0"
fn format_value(value: f32) -> String {
    if (value - value.round()).abs() < 1e-4 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;

    const W: f32 = 1280.0;
    const H: f32 = 720.0;

    fn frame(grip: GripType) -> DrawingFrame {
        let params = DesignParameters {
            grip,
            ..DesignParameters::default()
        };
        build_frame(&params, W, H)
    }

    #[test]
    fn test_ring_ticks_always_eight() {
        for &grip in GripType::all() {
            assert_eq!(frame(grip).side.ring_ticks.len(), 8);
        }
    }

    #[test]
    fn test_scallop_marks_present_iff_scallop() {
        let scallop = frame(GripType::Scallop);
        assert_eq!(scallop.side.cut_lines.len(), 12);
        assert_eq!(scallop.front.grip_ticks.len(), 16);

        for grip in [GripType::Straight, GripType::Torpedo] {
            let f = frame(grip);
            assert!(f.side.cut_lines.is_empty());
            assert!(f.front.grip_ticks.is_empty());
        }
    }

    #[test]
    fn test_dimension_labels() {
        let params = DesignParameters {
            length_mm: 40.0,
            diameter_mm: 6.0,
            weight_g: 20.0,
            grip: GripType::Torpedo,
            material: Material::Brass,
        };
        let frame = build_frame(&params, W, H);
        assert_eq!(frame.length_dim.label.text, "40mm");
        assert_eq!(frame.diameter_dim.label.text, "\u{2300}6mm");
    }

    #[test]
    fn test_torpedo_outline_peaks_at_midline() {
        let params = DesignParameters {
            length_mm: 40.0,
            diameter_mm: 6.0,
            grip: GripType::Torpedo,
            ..DesignParameters::default()
        };
        let frame = build_frame(&params, W, H);
        let BodyOutline::Torpedo(ref outline) = frame.side.body else {
            panic!("expected torpedo outline");
        };

        let cy = H / 2.0 - 100.0;
        let peak = (params.diameter_mm * PX_PER_MM / 2.0) * 1.3;
        let top = outline
            .points
            .iter()
            .map(|p| p[1])
            .fold(f32::MAX, f32::min);
        assert!((cy - top - peak).abs() < 1e-3);

        // Ends stay at nominal radius
        let left_y: Vec<f32> = outline
            .points
            .iter()
            .filter(|p| (p[0] - (W / 2.0 - 160.0)).abs() < 1e-3)
            .map(|p| p[1])
            .collect();
        assert!(!left_y.is_empty());
        for y in left_y {
            assert!(((y - cy).abs() - params.diameter_mm * PX_PER_MM / 2.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_straight_body_is_rectangle_of_scaled_size() {
        let f = frame(GripType::Straight);
        let BodyOutline::Straight(ref rect) = f.side.body else {
            panic!("expected rectangle outline");
        };
        let params = DesignParameters::default();
        assert!(
            ((rect.max[0] - rect.min[0]) - params.length_mm * PX_PER_MM).abs() < 1e-3
        );
        assert!(
            ((rect.max[1] - rect.min[1]) - params.diameter_mm * PX_PER_MM).abs() < 1e-3
        );
    }

    #[test]
    fn test_spec_block_contents() {
        let f = frame(GripType::Scallop);
        let lines: Vec<&str> = f.spec.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(lines[0], "Specifications");
        assert!(lines.contains(&"Material: Tungsten"));
        assert!(lines.contains(&"Grip: Scallop"));
        assert!(lines.contains(&"Tolerance: \u{00b1}0.1mm"));
    }

    #[test]
    fn test_grid_spacing() {
        let f = frame(GripType::Straight);
        assert!(!f.grid.is_empty());
        let verticals: Vec<&Line> = f.grid.iter().filter(|l| l.a[0] == l.b[0]).collect();
        assert!((verticals[1].a[0] - verticals[0].a[0] - 40.0).abs() < 1e-3);
    }

    #[test]
    fn test_resize_keeps_parameter_geometry() {
        let params = DesignParameters::default();
        let small = build_frame(&params, 800.0, 600.0);
        let large = build_frame(&params, 1920.0, 1080.0);

        // The views recenter on the new surface but everything derived
        // from the parameters is unchanged
        assert_eq!(small.length_dim.label.text, large.length_dim.label.text);
        assert_eq!(small.diameter_dim.label.text, large.diameter_dim.label.text);
        let width_of = |f: &DrawingFrame| match f.side.body {
            BodyOutline::Straight(ref rect) => rect.max[0] - rect.min[0],
            BodyOutline::Torpedo(_) => unreachable!(),
        };
        assert!((width_of(&small) - width_of(&large)).abs() < 1e-3);
        assert_ne!(small.front.outline.center, large.front.outline.center);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(40.0), "40");
        assert_eq!(format_value(6.5), "6.5");
    }
}
