use crate::config::settings;
use crate::data::fixtures;
use crate::models::{ImageMarker, LabelPlacement, LonLat};
use crate::services::browser::open_in_new_tab;
use dioxus::prelude::*;
use statemap_common::labels::leader_path;
use statemap_common::{normalize_asset_path, AlbersUsa};

const IMAGE_SIZE: &str = "15";
const LINE_HEIGHT: &str = "5";

/// Group translated to the projected coordinates. Points the projection
/// cannot place render nothing.
#[component]
fn Marker(projection: AlbersUsa, coordinates: LonLat, children: Element) -> Element {
    let Some([x, y]) = projection.project(coordinates) else {
        return rsx! {};
    };
    let transform = format!("translate({x:.2} {y:.2})");
    rsx! {
        g { class: "rsm-marker", transform: "{transform}", {children} }
    }
}

#[component]
fn MultilineText(lines: Vec<String>) -> Element {
    rsx! {
        for (idx, line) in lines.iter().enumerate() {
            tspan {
                key: "{idx}",
                x: "0",
                dy: if idx == 0 { "0" } else { LINE_HEIGHT },
                "{line}"
            }
        }
    }
}

fn owned(lines: Vec<&str>) -> Vec<String> {
    lines.into_iter().map(str::to_string).collect()
}

#[component]
pub fn RegionLabel(projection: AlbersUsa, label: LabelPlacement) -> Element {
    let Some([x, y]) = projection.project(label.anchor()) else {
        return rsx! {};
    };
    match label {
        LabelPlacement::Centroid { name, .. } => {
            let transform = format!("translate({x:.2} {y:.2})");
            rsx! {
                g { class: "rsm-marker", transform: "{transform}",
                    text {
                        y: "2",
                        font_size: "5",
                        font_weight: "700",
                        text_anchor: "middle",
                        "{name}"
                    }
                }
            }
        }
        LabelPlacement::Annotated { name, dx, dy, .. } => {
            let transform = format!("translate({:.2} {:.2})", x + dx, y + dy);
            let leader = leader_path(dx, dy);
            rsx! {
                g { class: "rsm-annotation", transform: "{transform}",
                    path {
                        d: "{leader}",
                        fill: "transparent",
                        stroke: "#000",
                        stroke_width: "0.5",
                    }
                    text {
                        x: "0",
                        y: "-5",
                        font_size: "5",
                        font_weight: "700",
                        alignment_baseline: "middle",
                        "{name}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn UniversityLayer(projection: AlbersUsa) -> Element {
    rsx! {
        for (index, item) in fixtures().universities.iter().enumerate() {
            {
                let url = settings().asset_url(&item.link);
                rsx! {
                    Marker { key: "uni-{index}", projection, coordinates: item.coordinates(),
                        text {
                            class: "marker",
                            text_anchor: "middle",
                            font_weight: "530",
                            style: "fill: {item.colour}; cursor: pointer;",
                            onclick: move |_| open_in_new_tab(&url),
                            MultilineText { lines: owned(item.lines()) }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CityLayer(projection: AlbersUsa) -> Element {
    rsx! {
        for (index, item) in fixtures().cities.iter().enumerate() {
            Marker { key: "city-{index}", projection, coordinates: item.coordinates(),
                text {
                    class: "marker",
                    text_anchor: "middle",
                    font_weight: "700",
                    font_size: "5",
                    style: "fill: black;",
                    "{item.name}"
                }
            }
        }
    }
}

#[component]
pub fn TextLayer(projection: AlbersUsa) -> Element {
    rsx! {
        for (index, item) in fixtures().text.iter().enumerate() {
            Marker { key: "text-{index}", projection, coordinates: item.coordinates(),
                text {
                    class: "marker",
                    text_anchor: "middle",
                    font_weight: "500",
                    font_size: "5",
                    style: "fill: black;",
                    MultilineText { lines: owned(item.lines()) }
                }
            }
        }
    }
}

/// Logos and icons share one fixture shape; `prefix` keeps their keys apart.
#[component]
pub fn ImageLayer(projection: AlbersUsa, items: Vec<ImageMarker>, prefix: &'static str) -> Element {
    rsx! {
        for (index, item) in items.iter().enumerate() {
            {
                let href = settings().asset_url(&normalize_asset_path(&item.logo));
                rsx! {
                    Marker { key: "{prefix}-{index}", projection, coordinates: item.coordinates(),
                        image {
                            class: "marker",
                            href: "{href}",
                            width: IMAGE_SIZE,
                            height: IMAGE_SIZE,
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn MarkerLayers(projection: AlbersUsa) -> Element {
    rsx! {
        UniversityLayer { projection }
        CityLayer { projection }
        TextLayer { projection }
        ImageLayer { projection, items: fixtures().logos.clone(), prefix: "logo" }
        ImageLayer { projection, items: fixtures().icons.clone(), prefix: "icon" }
    }
}
