use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;
use crate::content::frame::ManualFrames;
use crate::host::fake::{Call, FakeHost};

fn loc(lng: f64, lat: f64) -> Location {
    Location { lng, lat, height: None }
}

fn hp(heading: f64, pitch: f64) -> HeadingPitch {
    HeadingPitch { heading, pitch }
}

fn mount(cells: &PedestrianContent, host: Host) -> (StreetViewController, Rc<ManualFrames>, Rc<RefCell<Vec<f64>>>) {
    let frames = Rc::new(ManualFrames::default());
    let settled = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&settled);
    let controller = StreetViewController::new(
        cells,
        host,
        Rc::clone(&frames) as Rc<dyn FrameScheduler>,
        Rc::new(move |zoom: f64| sink.borrow_mut().push(zoom)),
    );
    (controller, frames, settled)
}

// =============================================================
// Widget callbacks
// =============================================================

#[test]
fn on_load_sets_all_four_cells_before_notifying() {
    let cells = PedestrianContent::default();
    let (controller, _, _) = mount(&cells, Host::absent());

    // Every observer must already see the complete load.
    let observed = Rc::new(RefCell::new(Vec::new()));
    let subs: Vec<_> = [
        {
            let (c, o) = (cells.clone(), Rc::clone(&observed));
            cells.pano.subscribe(move |_| o.borrow_mut().push(snapshot(&c)))
        },
        {
            let (c, o) = (cells.clone(), Rc::clone(&observed));
            cells.zoom.subscribe(move |_| o.borrow_mut().push(snapshot(&c)))
        },
    ]
    .into_iter()
    .collect();

    controller.on_load("pano-1".into(), loc(139.7, 35.6), hp(90.0, 5.0), 2.0);

    let expected = (
        PanoState::Id("pano-1".into()),
        Some(loc(139.7, 35.6)),
        Some(hp(90.0, 5.0)),
        Some(2.0),
    );
    assert_eq!(snapshot(&cells), expected);
    assert_eq!(*observed.borrow(), vec![expected.clone(), expected]);
    assert_eq!(controller.widget().get(), WidgetState::Ready);
    drop(subs);
}

type Snapshot = (PanoState, Option<Location>, Option<HeadingPitch>, Option<f64>);

fn snapshot(cells: &PedestrianContent) -> Snapshot {
    (cells.pano.get(), cells.location.get(), cells.heading_pitch.get(), cells.zoom.get())
}

#[test]
fn on_location_change_updates_only_pano_and_location() {
    let cells = PedestrianContent::default();
    let (controller, _, _) = mount(&cells, Host::absent());
    controller.on_load("a".into(), loc(1.0, 1.0), hp(10.0, 0.0), 1.0);

    controller.on_location_change("b".into(), loc(2.0, 2.0));

    assert_eq!(cells.pano.get(), PanoState::Id("b".into()));
    assert_eq!(cells.location.get(), Some(loc(2.0, 2.0)));
    assert_eq!(cells.heading_pitch.get(), Some(hp(10.0, 0.0)));
    assert_eq!(cells.zoom.get(), Some(1.0));
}

#[test]
fn on_error_clears_pano_only() {
    let cells = PedestrianContent::default();
    let (controller, _, _) = mount(&cells, Host::absent());
    controller.on_load("a".into(), loc(1.0, 1.0), hp(10.0, 0.0), 1.0);

    controller.on_error();

    assert_eq!(cells.pano.get(), PanoState::Unavailable);
    assert_eq!(cells.location.get(), Some(loc(1.0, 1.0)));
    assert_eq!(cells.heading_pitch.get(), Some(hp(10.0, 0.0)));
    assert_eq!(cells.zoom.get(), Some(1.0));
    assert_eq!(controller.widget().get(), WidgetState::Failed);

    controller.on_location_change("c".into(), loc(3.0, 3.0));
    assert_eq!(controller.widget().get(), WidgetState::Ready);
}

#[test]
fn error_is_distinct_from_never_loaded() {
    let cells = PedestrianContent::default();
    let (controller, _, _) = mount(&cells, Host::absent());
    assert_eq!(cells.pano.get(), PanoState::Unset);
    controller.on_error();
    assert_ne!(cells.pano.get(), PanoState::Unset);
    assert!(cells.pano.get().id().is_none());
}

#[test]
fn heading_pitch_change_is_independent() {
    let cells = PedestrianContent::default();
    let (controller, _, _) = mount(&cells, Host::absent());
    controller.on_heading_pitch_change(hp(45.0, -10.0));
    assert_eq!(cells.heading_pitch.get(), Some(hp(45.0, -10.0)));
    assert!(cells.location.get().is_none());
}

// =============================================================
// Zoom deferral
// =============================================================

#[test]
fn zoom_callback_runs_on_next_frame_with_new_zoom() {
    let cells = PedestrianContent::default();
    cells.zoom.set(Some(1.0));
    let (controller, frames, settled) = mount(&cells, Host::absent());

    controller.on_zoom_change(12.0);

    assert_eq!(cells.zoom.get(), Some(12.0));
    assert!(settled.borrow().is_empty());
    assert_eq!(frames.pending(), 1);

    frames.advance();
    assert_eq!(*settled.borrow(), vec![12.0]);
}

#[test]
fn zoom_callback_runs_after_synchronous_rerender() {
    let cells = PedestrianContent::default();
    let (controller, frames, settled) = mount(&cells, Host::absent());

    let rendered_before_settle = Rc::new(Cell::new(false));
    let flag = Rc::clone(&rendered_before_settle);
    let log = Rc::clone(&settled);
    let _sub = cells.zoom.subscribe(move |_| flag.set(log.borrow().is_empty()));

    controller.on_zoom_change(3.0);
    frames.advance();

    assert!(rendered_before_settle.get());
    assert_eq!(*settled.borrow(), vec![3.0]);
}

// =============================================================
// Synchronization
// =============================================================

#[test]
fn drop_always_desynchronizes() {
    for before in [false, true] {
        let cells = PedestrianContent::default();
        cells.synchronized.set(before);
        let (controller, _, _) = mount(&cells, Host::absent());
        drop(controller);
        assert!(!cells.synchronized.get());
    }
}

#[test]
fn synchronize_moves_camera_to_panorama() {
    let fake = FakeHost::new();
    let cells = PedestrianContent::default();
    let (controller, _, _) = mount(&cells, FakeHost::host(&fake));
    controller.on_load("a".into(), loc(139.0, 35.0), hp(90.0, 0.0), 1.0);
    assert!(fake.calls().is_empty());

    controller.on_synchronize();

    assert!(cells.synchronized.get());
    let Some(Call::SetView(view)) = fake.calls().last().cloned() else {
        panic!("expected SetView, got {:?}", fake.calls());
    };
    assert_eq!((view.lng, view.lat), (139.0, 35.0));
    assert!((view.heading - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    assert!((view.fov.expect("fov") - 90f64.to_radians()).abs() < 1e-9);
}

#[test]
fn synchronized_writes_follow_the_panorama() {
    let fake = FakeHost::new();
    let cells = PedestrianContent::default();
    let (controller, _, _) = mount(&cells, FakeHost::host(&fake));
    controller.on_load("a".into(), loc(1.0, 1.0), hp(0.0, 0.0), 0.0);
    controller.on_synchronize();
    fake.calls.borrow_mut().clear();

    controller.on_location_change("b".into(), loc(2.0, 2.0));

    assert!(fake.calls().iter().any(|c| matches!(c, Call::SetView(v) if v.lng == 2.0)));
}

#[test]
fn unsynchronized_writes_leave_camera_alone() {
    let fake = FakeHost::new();
    let cells = PedestrianContent::default();
    let (controller, _, _) = mount(&cells, FakeHost::host(&fake));
    controller.on_load("a".into(), loc(1.0, 1.0), hp(0.0, 0.0), 0.0);
    controller.on_location_change("b".into(), loc(2.0, 2.0));
    drop(controller);
    assert!(fake.calls().is_empty());
}

#[test]
fn fov_halves_per_zoom_level() {
    assert_eq!(zoom_to_fov_degrees(0.0), 180.0);
    assert_eq!(zoom_to_fov_degrees(1.0), 90.0);
    assert_eq!(zoom_to_fov_degrees(2.0), 45.0);
}
