#[cfg(test)]
mod tests {
    use crate::error::AppError;
    use crate::hooks::{use_content_load_error, use_map, use_map_features_with_service};
    use crate::models::{
        CanvasFit, ContentView, Feature, LoadError, MapFeature, RegionRecord, Selection, Viewport,
    };
    use crate::services::TopologyService;
    use crate::state::{MapState, MapStateProvider};
    use async_trait::async_trait;
    use dioxus::prelude::*;
    use statemap_common::Geometry;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Clone)]
    struct Recorder<T>(Arc<Mutex<Vec<T>>>);

    impl<T> Default for Recorder<T> {
        fn default() -> Self {
            Self(Arc::new(Mutex::new(Vec::new())))
        }
    }

    impl<T> PartialEq for Recorder<T> {
        fn eq(&self, other: &Self) -> bool {
            Arc::ptr_eq(&self.0, &other.0)
        }
    }

    impl<T: Clone> Recorder<T> {
        fn push(&self, value: T) {
            self.0.lock().unwrap().push(value);
        }

        fn values(&self) -> Vec<T> {
            self.0.lock().unwrap().clone()
        }
    }

    #[derive(Clone, PartialEq)]
    struct MockTopologyService {
        fail: bool,
    }

    #[async_trait(?Send)]
    impl TopologyService for MockTopologyService {
        async fn load_features(&self) -> Result<Vec<Feature>, AppError> {
            if self.fail {
                return Err(AppError::Probe("offline".to_string()));
            }
            Ok(vec![
                Feature {
                    id: "48".to_string(),
                    name: Some("Texas".to_string()),
                    geometry: Geometry::Polygon(vec![vec![
                        [-100.0, 30.0],
                        [-100.0, 34.0],
                        [-95.0, 34.0],
                        [-95.0, 30.0],
                        [-100.0, 30.0],
                    ]]),
                },
                Feature {
                    id: "25".to_string(),
                    name: Some("Massachusetts".to_string()),
                    geometry: Geometry::Polygon(vec![vec![
                        [-73.0, 41.5],
                        [-73.0, 42.7],
                        [-70.5, 42.7],
                        [-70.5, 41.5],
                        [-73.0, 41.5],
                    ]]),
                },
            ])
        }
    }

    #[component]
    fn ClickDriver(clicks: Vec<String>, close: bool, recorder: Recorder<Selection>) -> Element {
        let map = use_map();
        let state = use_context::<MapState>();

        use_hook(move || {
            for val in &clicks {
                map.click(val);
                recorder.push(state.selection.peek().clone());
            }
            if close {
                map.close();
                recorder.push(state.selection.peek().clone());
            }
        });

        rsx! {}
    }

    #[derive(Props, Clone, PartialEq)]
    struct DriverAppProps {
        clicks: Vec<String>,
        close: bool,
        recorder: Recorder<Selection>,
    }

    fn driver_app(props: DriverAppProps) -> Element {
        rsx! {
            MapStateProvider {
                ClickDriver {
                    clicks: props.clicks,
                    close: props.close,
                    recorder: props.recorder,
                }
            }
        }
    }

    fn run_clicks(clicks: &[&str], close: bool) -> Vec<Selection> {
        let recorder = Recorder::default();
        let mut dom = VirtualDom::new_with_props(
            driver_app,
            DriverAppProps {
                clicks: clicks.iter().map(|c| c.to_string()).collect(),
                close,
                recorder: recorder.clone(),
            },
        );
        dom.rebuild_in_place();
        recorder.values()
    }

    #[test]
    fn test_click_without_content_keeps_modal_closed() {
        // Texas has no content PDF.
        let states = run_clicks(&["48"], false);
        assert_eq!(states, vec![Selection::default()]);
    }

    #[test]
    fn test_click_with_content_opens_modal() {
        let states = run_clicks(&["06"], false);
        let selection = &states[0];
        assert!(selection.modal_visible);
        let record = selection.content.as_ref().expect("record");
        assert_eq!(record.id, "CA");
        assert_eq!(record.name, "California");
        assert_eq!(record.val, "06");
    }

    #[test]
    fn test_ineligible_click_does_not_replace_open_content() {
        let states = run_clicks(&["36", "48"], false);
        assert_eq!(states[0], states[1]);
        assert_eq!(
            states[1].content.as_ref().map(|r| r.name.as_str()),
            Some("New York")
        );
    }

    #[test]
    fn test_close_clears_content() {
        let states = run_clicks(&["39"], true);
        assert!(states[0].modal_visible);
        assert_eq!(states[1], Selection::default());
    }

    #[component]
    fn FeatureDriver(
        service: MockTopologyService,
        recorder: Recorder<Result<Vec<MapFeature>, String>>,
    ) -> Element {
        let features = use_map_features_with_service(service);
        if let Some(result) = &*features.read() {
            recorder.push(result.clone());
        }
        rsx! {}
    }

    async fn load_with(service: MockTopologyService) -> Result<Vec<MapFeature>, String> {
        #[derive(Props, Clone, PartialEq)]
        struct AppProps {
            service: MockTopologyService,
            recorder: Recorder<Result<Vec<MapFeature>, String>>,
        }

        fn app(props: AppProps) -> Element {
            rsx! {
                MapStateProvider {
                    FeatureDriver { service: props.service, recorder: props.recorder }
                }
            }
        }

        let recorder = Recorder::default();
        let mut dom = VirtualDom::new_with_props(
            app,
            AppProps {
                service,
                recorder: recorder.clone(),
            },
        );
        dom.rebuild_in_place();

        for _ in 0..40 {
            if let Some(result) = recorder.values().pop() {
                return result;
            }
            tokio::time::timeout(std::time::Duration::from_millis(50), dom.wait_for_work())
                .await
                .ok();
            dom.render_immediate_to_vec();
        }
        panic!("topology resource never resolved");
    }

    #[tokio::test]
    async fn test_features_are_projected_and_labelled() {
        let features = load_with(MockTopologyService { fail: false })
            .await
            .expect("features");
        assert_eq!(features.len(), 2);

        let texas = features.iter().find(|f| f.id == "48").unwrap();
        assert!(texas.path.starts_with('M') && texas.path.ends_with('Z'));
        let label = texas.label.as_ref().expect("texas label");
        assert_eq!(label.name(), "Texas");
        assert!(!label.has_leader());

        let ma = features.iter().find(|f| f.id == "25").unwrap();
        assert!(ma.label.as_ref().expect("ma label").has_leader());
    }

    #[tokio::test]
    async fn test_failed_topology_reports_message() {
        let result = load_with(MockTopologyService { fail: true }).await;
        assert_eq!(result, Err("Content probe failed: offline".to_string()));
    }

    #[component]
    fn DragThenClick(recorder: Recorder<(Selection, Viewport)>) -> Element {
        let map = use_map();
        let state = use_context::<MapState>();

        use_hook(move || {
            map.press([0.0, 0.0]);
            map.drag_to([40.0, 10.0], CanvasFit::default());
            map.release();
            map.click("06");
            recorder.push((state.selection.peek().clone(), *state.viewport.peek()));

            map.press([40.0, 10.0]);
            map.release();
            map.click("06");
            recorder.push((state.selection.peek().clone(), *state.viewport.peek()));
        });

        rsx! {}
    }

    #[test]
    fn test_click_ending_a_drag_is_ignored() {
        #[derive(Props, Clone, PartialEq)]
        struct AppProps {
            recorder: Recorder<(Selection, Viewport)>,
        }

        fn app(props: AppProps) -> Element {
            rsx! {
                MapStateProvider {
                    DragThenClick { recorder: props.recorder }
                }
            }
        }

        let recorder = Recorder::default();
        let mut dom = VirtualDom::new_with_props(
            app,
            AppProps {
                recorder: recorder.clone(),
            },
        );
        dom.rebuild_in_place();

        let steps = recorder.values();
        let (after_drag, viewport) = &steps[0];
        assert!(!after_drag.modal_visible);
        assert_eq!((viewport.x, viewport.y), (40.0, 10.0));

        let (after_click, _) = &steps[1];
        assert!(after_click.modal_visible);
    }

    fn record(id: &str, val: &str, name: &str) -> RegionRecord {
        RegionRecord {
            id: id.to_string(),
            val: val.to_string(),
            name: name.to_string(),
        }
    }

    #[derive(Clone, Copy)]
    struct ContentHandles {
        content: Signal<Option<RegionRecord>>,
        load_error: Signal<LoadError>,
    }

    #[component]
    fn ContentFrame(handles: Recorder<ContentHandles>) -> Element {
        let content = use_signal(|| Some(record("OH", "39", "Ohio")));
        let view = ContentView::for_record("", content.read().as_ref());
        let load_error = use_content_load_error(view);
        use_hook(|| handles.push(ContentHandles { content, load_error }));
        rsx! {}
    }

    async fn settle(dom: &mut VirtualDom) {
        for _ in 0..5 {
            tokio::time::timeout(Duration::from_millis(20), dom.wait_for_work())
                .await
                .ok();
            dom.render_immediate_to_vec();
        }
    }

    #[tokio::test]
    async fn test_record_change_keeps_failure_of_current_record() {
        let ohio = ContentView::for_record("", Some(&record("OH", "39", "Ohio"))).unwrap();
        let utah = ContentView::for_record("", Some(&record("UT", "49", "Utah"))).unwrap();

        let handles = Recorder::default();
        let mut dom = VirtualDom::new_with_props(
            ContentFrame,
            ContentFrameProps {
                handles: handles.clone(),
            },
        );
        dom.rebuild_in_place();
        settle(&mut dom).await;

        let ContentHandles {
            mut content,
            mut load_error,
        } = handles.values()[0];

        let watched = dom.in_runtime(|| load_error.peek().watching().map(str::to_string));
        assert_eq!(watched.as_deref(), Some(ohio.path.as_str()));

        dom.in_runtime(|| load_error.write().fail(&ohio.path));
        assert!(dom.in_runtime(|| load_error.peek().is_failed(&ohio.path)));

        dom.in_runtime(|| content.set(Some(record("UT", "49", "Utah"))));
        settle(&mut dom).await;

        dom.in_runtime(|| {
            let error = load_error.peek();
            assert_eq!(error.watching(), Some(utah.path.as_str()));
            assert!(!error.is_failed(&utah.path));
            assert!(!error.is_failed(&ohio.path));
        });

        // Utah fails, then Ohio's answer arrives late.
        dom.in_runtime(|| {
            assert!(load_error.write().fail(&utah.path));
            assert!(!load_error.write().fail(&ohio.path));
        });
        assert!(dom.in_runtime(|| load_error.peek().is_failed(&utah.path)));
    }
}
