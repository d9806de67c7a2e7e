use crate::data::fixtures;
use crate::models::{DragGesture, Eligibility, Selection, Viewport};
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct MapState {
    pub selection: Signal<Selection>,
    pub eligibility: Signal<Eligibility>,
    pub viewport: Signal<Viewport>,
    pub drag: Signal<DragGesture>,
}

#[component]
pub fn MapStateProvider(children: Element) -> Element {
    let selection = use_signal(Selection::default);
    let eligibility = use_signal(|| {
        let regions = &fixtures().regions;
        let eligibility = Eligibility::derive(regions);
        tracing::info!(
            "{} of {} regions have content",
            eligibility.eligible_count(),
            eligibility.len()
        );
        eligibility
    });
    let viewport = use_signal(Viewport::default);
    let drag = use_signal(DragGesture::default);

    use_context_provider(|| MapState {
        selection,
        eligibility,
        viewport,
        drag,
    });

    rsx! {
        {children}
    }
}
