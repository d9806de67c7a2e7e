use crate::components::markers::{MarkerLayers, RegionLabel};
use crate::components::StateModal;
use crate::config::settings;
use crate::hooks::{use_map, use_map_features, FeaturesResource};
use crate::models::{CanvasFit, MapFeature, Phase};
use crate::services::topology::projection_for;
use crate::state::MapState;
use dioxus::prelude::*;
use statemap_common::AlbersUsa;
use std::rc::Rc;

#[component]
pub fn UsMap() -> Element {
    let features = use_map_features();
    rsx! {
        MapView { features }
    }
}

/// The map surface with an already-started topology load. Split from
/// [`UsMap`] so a different feature source can be plugged in.
#[component]
pub fn MapView(features: FeaturesResource) -> Element {
    let state = use_context::<MapState>();
    let map = use_map();
    let settings = settings();
    let projection = use_hook(|| projection_for(settings));
    let canvas = [settings.width, settings.height];
    let mut svg = use_signal(|| Option::<Rc<MountedData>>::None);
    let mut fit = use_signal(CanvasFit::default);

    let modal_content = use_memo(move || match state.selection.read().phase() {
        Phase::ModalOpen(record) => Some(record.clone()),
        _ => None,
    });
    let content = modal_content();
    let modal_visible = content.is_some();

    // Page pixels to view box units for the rendered size of the map.
    let measure = move || async move {
        let Some(el) = svg.peek().clone() else {
            return;
        };
        if let Ok(rect) = el.get_client_rect().await {
            let origin = [rect.origin.x, rect.origin.y];
            let rendered = [rect.size.width, rect.size.height];
            if let Some(next) = CanvasFit::new(origin, rendered, canvas) {
                fit.set(next);
            }
        }
    };

    let transform = state.viewport.read().transform();
    let view_box = format!("0 0 {} {}", settings.width, settings.height);

    rsx! {
        div { class: if modal_visible { "map-container blurred" } else { "map-container" },
            svg {
                class: "composable-map",
                view_box: "{view_box}",
                onmounted: move |e| {
                    svg.set(Some(e.data()));
                    spawn(measure());
                },
                onresize: move |_| {
                    spawn(measure());
                },
                onwheel: move |e| {
                    e.prevent_default();
                    let delta = e.delta().strip_units();
                    let p = e.client_coordinates();
                    map.wheel(delta.y, [p.x, p.y], fit());
                },
                onmousedown: move |e| {
                    spawn(measure());
                    let p = e.client_coordinates();
                    map.press([p.x, p.y]);
                },
                onmousemove: move |e| {
                    let p = e.client_coordinates();
                    map.drag_to([p.x, p.y], fit());
                },
                onmouseup: move |_| map.release(),
                onmouseleave: move |_| map.release(),
                ondoubleclick: move |_| map.reset_view(),
                g { class: "rsm-zoomable-group", transform: "{transform}",
                    Geographies { projection, features }
                    MarkerLayers { projection }
                }
            }
            if let Some(Err(message)) = &*features.read() {
                div { class: "map-notice", "{message}" }
            }
        }
        StateModal {
            show: modal_visible,
            content,
            onhide: move |_| map.close(),
        }
    }
}

/// Region outlines first, labels on top. Takes the resource itself so
/// re-renders of the map surface do not copy the outlines.
#[component]
fn Geographies(projection: AlbersUsa, features: FeaturesResource) -> Element {
    let loaded = features.read();
    let Some(Ok(list)) = &*loaded else {
        return rsx! {};
    };

    rsx! {
        for feature in list.iter().cloned() {
            Geography { key: "{feature.key}", feature }
        }
        for feature in list.iter() {
            if let Some(label) = feature.label.clone() {
                g { key: "{feature.key}-name",
                    RegionLabel { projection, label }
                }
            }
        }
    }
}

#[component]
fn Geography(feature: MapFeature) -> Element {
    let map = use_map();
    let eligible = map.is_eligible(&feature.id);
    let class = map.hover_state(&feature.id).class();
    let cursor = if eligible { "pointer" } else { "default" };

    let enter_id = feature.id.clone();
    let click_id = feature.id.clone();

    rsx! {
        path {
            d: "{feature.path}",
            class,
            style: "cursor: {cursor}; outline: none;",
            onmouseenter: move |_| map.hover(&enter_id),
            onmouseleave: move |_| map.leave(),
            onclick: move |_| map.click(&click_id),
        }
    }
}
