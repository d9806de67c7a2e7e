use crate::config::settings;
use crate::data::fixtures;
use crate::models::{CanvasFit, ContentView, HoverState, LoadError, MapFeature};
use crate::services::browser::resource_exists;
use crate::services::topology::{build_map_features, projection_for};
use crate::services::{ProductionTopologyService, TopologyService};
use crate::state::MapState;
use dioxus::core::Task;
use dioxus::prelude::*;
use tracing::{debug, error, info};

/// Map interactions routed through the shared selection state.
#[derive(Clone, Copy)]
pub struct MapController {
    state: MapState,
}

impl MapController {
    pub fn hover(&self, val: &str) {
        let mut selection = self.state.selection;
        selection.write().hover(val);
    }

    pub fn leave(&self) {
        let mut selection = self.state.selection;
        selection.write().leave();
    }

    pub fn hover_state(&self, val: &str) -> HoverState {
        let eligibility = self.state.eligibility.read();
        self.state.selection.read().hover_state(val, &eligibility)
    }

    pub fn is_eligible(&self, val: &str) -> bool {
        self.state.eligibility.read().is_eligible(val)
    }

    /// Opens the content modal for an eligible region; anything else leaves
    /// the selection untouched. The click that ends a drag is ignored.
    pub fn click(&self, val: &str) {
        let mut drag = self.state.drag;
        if drag.write().take_dragged() {
            return;
        }
        let mut selection = self.state.selection;
        let mut next = selection.peek().clone();
        let opened = {
            let eligibility = self.state.eligibility.peek();
            next.click(val, &eligibility, &fixtures().regions)
        };
        if opened {
            if let Some(record) = &next.content {
                info!("Opening content for {}", record.name);
            }
            selection.set(next);
        }
    }

    pub fn close(&self) {
        let mut selection = self.state.selection;
        selection.write().close();
    }

    /// `client` is in page pixels; `fit` maps it onto the view box.
    pub fn wheel(&self, delta: f64, client: [f64; 2], fit: CanvasFit) {
        let [cx, cy] = fit.to_canvas(client);
        let mut viewport = self.state.viewport;
        viewport.write().wheel(delta, cx, cy);
    }

    pub fn press(&self, client: [f64; 2]) {
        let mut drag = self.state.drag;
        drag.write().press(client);
    }

    pub fn drag_to(&self, client: [f64; 2], fit: CanvasFit) {
        let mut drag = self.state.drag;
        if !drag.peek().is_pressed() {
            return;
        }
        let Some(delta) = drag.write().move_to(client) else {
            return;
        };
        let [dx, dy] = fit.to_canvas_delta(delta);
        let mut viewport = self.state.viewport;
        viewport.write().pan(dx, dy);
    }

    pub fn release(&self) {
        let mut drag = self.state.drag;
        drag.write().release();
    }

    pub fn reset_view(&self) {
        let mut viewport = self.state.viewport;
        viewport.write().reset();
    }
}

pub fn use_map() -> MapController {
    let state = use_context::<MapState>();
    MapController { state }
}

/// Projected map features, or a user-facing message when the topology could
/// not be loaded.
pub type FeaturesResource = Resource<Result<Vec<MapFeature>, String>>;

pub fn use_map_features() -> FeaturesResource {
    let service = use_hook(ProductionTopologyService::from_settings);
    use_map_features_internal(service)
}

pub fn use_map_features_with_service<S: TopologyService>(service: S) -> FeaturesResource {
    use_map_features_internal(service)
}

fn use_map_features_internal<S: TopologyService>(service: S) -> FeaturesResource {
    use_resource(move || {
        let service = service.clone();
        async move {
            match service.load_features().await {
                Ok(features) => {
                    let projection = projection_for(settings());
                    Ok(build_map_features(&features, fixtures(), &projection))
                }
                Err(e) => {
                    error!("Failed to load map topology: {}", e);
                    Err(e.user_friendly_message())
                }
            }
        }
    })
}

/// Load-failure state for the content on screen. Each new record starts
/// clean and gets one existence check; the check for the previous record is
/// cancelled.
pub fn use_content_load_error(view: Option<ContentView>) -> Signal<LoadError> {
    let mut load_error = use_signal(LoadError::default);
    let mut check = use_signal(|| Option::<Task>::None);

    use_effect(use_reactive!(|view| {
        if let Some(task) = check.write().take() {
            task.cancel();
        }
        load_error
            .write()
            .watch(view.as_ref().map(|v| v.path.as_str()));

        let Some(view) = view else {
            return;
        };
        let task = spawn(async move {
            match resource_exists(&view.path).await {
                Ok(true) => {}
                Ok(false) => {
                    if load_error.write().fail(&view.path) {
                        error!("Failed to load PDF for {}", view.title);
                    }
                }
                Err(e) => debug!("Skipping content check: {}", e),
            }
        });
        check.set(Some(task));
    }));

    load_error
}

#[cfg(test)]
mod tests;
