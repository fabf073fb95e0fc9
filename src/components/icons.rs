use dioxus::prelude::*;

/// One primitive of a 24x24 icon.
#[derive(Clone, Copy, PartialEq)]
enum Shape {
    Path(&'static str),
    Poly(&'static str),
    Line(u8, u8, u8, u8),
    Circle(u8, u8, u8),
    Bar(u8, u8, u8, u8),
}

/// How the shapes of an icon are painted.
#[derive(Clone, Copy, PartialEq)]
enum Paint {
    Outline,
    Solid,
}

struct Glyph {
    paint: Paint,
    shapes: &'static [Shape],
}

const FALLBACK: Glyph = Glyph {
    paint: Paint::Outline,
    shapes: &[Shape::Circle(12, 12, 10)],
};

fn glyph(name: &str) -> Glyph {
    use Shape::*;
    match name {
        "play" => Glyph {
            paint: Paint::Solid,
            shapes: &[Poly("6 4 19 12 6 20")],
        },
        "pause" => Glyph {
            paint: Paint::Solid,
            shapes: &[Bar(6, 5, 4, 14), Bar(14, 5, 4, 14)],
        },
        "prev" => Glyph {
            paint: Paint::Solid,
            shapes: &[Poly("18 5 9 12 18 19"), Line(6, 5, 6, 19)],
        },
        "next" => Glyph {
            paint: Paint::Solid,
            shapes: &[Poly("6 5 15 12 6 19"), Line(18, 5, 18, 19)],
        },
        "shuffle" => Glyph {
            paint: Paint::Outline,
            shapes: &[
                Poly("16 4 20 4 20 8"),
                Line(4, 20, 20, 4),
                Poly("20 16 20 20 16 20"),
                Line(14, 14, 20, 20),
                Line(4, 4, 9, 9),
            ],
        },
        "repeat" => Glyph {
            paint: Paint::Outline,
            shapes: &[
                Path("M17 2l4 4-4 4"),
                Path("M3 11V10a4 4 0 0 1 4-4h14"),
                Path("M7 22l-4-4 4-4"),
                Path("M21 13v1a4 4 0 0 1-4 4H3"),
            ],
        },
        "queue" => Glyph {
            paint: Paint::Outline,
            shapes: &[
                Line(9, 6, 21, 6),
                Line(9, 12, 21, 12),
                Line(9, 18, 21, 18),
                Circle(4, 6, 1),
                Circle(4, 12, 1),
                Circle(4, 18, 1),
            ],
        },
        "music" => Glyph {
            paint: Paint::Outline,
            shapes: &[
                Path("M9 17V5l11-2v12"),
                Circle(6, 17, 3),
                Circle(17, 15, 3),
            ],
        },
        "plus" => Glyph {
            paint: Paint::Outline,
            shapes: &[Line(12, 5, 12, 19), Line(5, 12, 19, 12)],
        },
        "x" => Glyph {
            paint: Paint::Outline,
            shapes: &[Line(6, 6, 18, 18), Line(18, 6, 6, 18)],
        },
        "trash" => Glyph {
            paint: Paint::Outline,
            shapes: &[
                Line(3, 6, 21, 6),
                Path("M8 6V4h8v2"),
                Path("M19 6l-1 14H6L5 6"),
            ],
        },
        "loader" => Glyph {
            paint: Paint::Outline,
            shapes: &[Path("M12 2a10 10 0 0 1 10 10")],
        },
        _ => FALLBACK,
    }
}

fn render_shape(shape: Shape) -> Element {
    match shape {
        Shape::Path(d) => rsx! { path { d } },
        Shape::Poly(points) => rsx! { polyline { points } },
        Shape::Line(x1, y1, x2, y2) => rsx! {
            line {
                x1: "{x1}",
                y1: "{y1}",
                x2: "{x2}",
                y2: "{y2}",
            }
        },
        Shape::Circle(cx, cy, r) => rsx! {
            circle { cx: "{cx}", cy: "{cy}", r: "{r}" }
        },
        Shape::Bar(x, y, width, height) => rsx! {
            rect {
                x: "{x}",
                y: "{y}",
                width: "{width}",
                height: "{height}",
                rx: "1",
            }
        },
    }
}

/// Inline SVG icons used by the player.
#[component]
pub fn Icon(name: String, class: String) -> Element {
    let glyph = glyph(&name);
    let class = if name == "loader" {
        format!("{class} animate-spin")
    } else {
        class
    };
    let fill = match glyph.paint {
        Paint::Solid => "currentColor",
        Paint::Outline => "none",
    };

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill,
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for shape in glyph.shapes.iter().copied() {
                {render_shape(shape)}
            }
        }
    }
}
