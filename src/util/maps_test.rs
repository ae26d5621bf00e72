use std::cell::RefCell;
use std::rc::Rc;

use super::*;

#[test]
fn script_url_carries_key() {
    assert_eq!(
        maps_script_url("AIza-key_1"),
        "https://maps.googleapis.com/maps/api/js?key=AIza-key_1&v=weekly"
    );
}

fn recorder() -> (Rc<RefCell<Vec<bool>>>, impl Fn() -> ReadyCallback) {
    let outcomes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&outcomes);
    (outcomes, move || {
        let sink = Rc::clone(&sink);
        Box::new(move |loaded| sink.borrow_mut().push(loaded))
    })
}

#[test]
fn loader_injects_once_and_queues_waiters() {
    let (outcomes, callback) = recorder();
    let mut loader = MapsLoader::default();

    assert_eq!(loader.request(callback()).0, LoadStep::Inject);
    assert_eq!(loader.request(callback()).0, LoadStep::Wait);
    assert_eq!(loader.waiting(), 2);

    for ready in loader.finish(true) {
        ready(true);
    }
    assert_eq!(*outcomes.borrow(), vec![true, true]);
    assert!(loader.is_loaded());

    let (step, ready) = loader.request(callback());
    assert_eq!(step, LoadStep::Ready);
    ready.expect("callback handed back")(true);
    assert_eq!(outcomes.borrow().len(), 3);
}

#[test]
fn failed_load_reports_and_retries_on_next_request() {
    let (outcomes, callback) = recorder();
    let mut loader = MapsLoader::default();

    assert_eq!(loader.request(callback()).0, LoadStep::Inject);
    for ready in loader.finish(false) {
        ready(false);
    }
    assert_eq!(*outcomes.borrow(), vec![false]);
    assert!(!loader.is_loaded());
    assert_eq!(loader.waiting(), 0);

    // A later mount must not wait on the dead script.
    assert_eq!(loader.request(callback()).0, LoadStep::Inject);
    assert_eq!(loader.waiting(), 1);
}

#[test]
fn options_prefer_pano_over_position() {
    let view = PanoramaView {
        pano: Some("abc".into()),
        location: Some(Location { lng: 139.0, lat: 35.0, height: None }),
        heading_pitch: Some(HeadingPitch { heading: 90.0, pitch: 10.0 }),
        zoom: Some(2.0),
    };
    let options = view.options();
    assert_eq!(options["pano"], "abc");
    assert!(options.get("position").is_none());
    assert_eq!(options["pov"]["heading"], 90.0);
    assert_eq!(options["zoom"], 2.0);
    assert_eq!(options["addressControl"], false);
}

#[test]
fn options_fall_back_to_position() {
    let view = PanoramaView { location: Some(Location { lng: 139.0, lat: 35.0, height: None }), ..Default::default() };
    let options = view.options();
    assert_eq!(options["position"]["lat"], 35.0);
    assert_eq!(options["position"]["lng"], 139.0);
    assert_eq!(options["pov"]["pitch"], 0.0);
    assert!(options.get("zoom").is_none());
}

#[test]
fn view_from_cells_drops_unavailable_pano() {
    let cells = PedestrianContent::default();
    cells.pano.set(PanoState::Unavailable);
    cells.location.set(Some(Location { lng: 1.0, lat: 2.0, height: None }));

    let view = PanoramaView::from_cells(&cells);
    assert_eq!(view.pano, None);
    assert!(has_view(&cells.pano.get(), view.location));
    assert!(!has_view(&PanoState::Unset, None));
    assert!(has_view(&PanoState::Id("x".into()), None));
}
