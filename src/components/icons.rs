use dioxus::prelude::*;

/// Outline icons on a 24x24 grid. The transport arrows are drawn filled.
#[component]
pub fn Icon(name: String, class: String) -> Element {
    let filled = matches!(name.as_str(), "prev" | "next");
    let class = if name == "loader" {
        format!("{class} animate-spin")
    } else {
        class
    };

    let shapes = match name.as_str() {
        "home" => rsx! {
            path { d: "M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
            polyline { points: "9 22 9 12 15 12 15 22" }
        },
        "prev" => rsx! {
            polygon { points: "19 20 9 12 19 4 19 20" }
            line { x1: "5", y1: "19", x2: "5", y2: "5" }
        },
        "next" => rsx! {
            polygon { points: "5 4 15 12 5 20 5 4" }
            line { x1: "19", y1: "5", x2: "19", y2: "19" }
        },
        "volume" => rsx! {
            polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
            path { d: "M15.54 8.46a5 5 0 0 1 0 7.07" }
            path { d: "M19.07 4.93a10 10 0 0 1 0 14.14" }
        },
        "volume-off" => rsx! {
            polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
            line { x1: "23", y1: "9", x2: "17", y2: "15" }
            line { x1: "17", y1: "9", x2: "23", y2: "15" }
        },
        "expand" => rsx! {
            polyline { points: "18 15 12 9 6 15" }
        },
        "collapse" => rsx! {
            polyline { points: "6 9 12 15 18 9" }
        },
        "music" => rsx! {
            path { d: "M9 18V5l12-2v13" }
            circle { cx: "6", cy: "18", r: "3" }
            circle { cx: "18", cy: "16", r: "3" }
        },
        "x" => rsx! {
            line { x1: "18", y1: "6", x2: "6", y2: "18" }
            line { x1: "6", y1: "6", x2: "18", y2: "18" }
        },
        "loader" => rsx! {
            circle { cx: "12", cy: "12", r: "10", opacity: "0.25" }
            path { d: "M12 2a10 10 0 0 1 10 10", opacity: "0.75" }
        },
        "clock" => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            polyline { points: "12 6 12 12 16 14" }
        },
        _ => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
        },
    };

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: if filled { "currentColor" } else { "none" },
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {shapes}
        }
    }
}
