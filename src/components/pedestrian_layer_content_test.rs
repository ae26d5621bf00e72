use super::*;

#[test]
fn aspect_follows_breakpoint_and_settled_zoom() {
    let owner = Owner::new();
    owner.set();

    let mobile = RwSignal::new(false);
    let zoom = RwSignal::new(0.0);
    let camera = RwSignal::new(Some(1.5));
    let aspect = street_view_aspect(mobile.into(), zoom.read_only(), move || camera.get_untracked());
    assert_eq!(aspect.get(), 1.5);

    mobile.set(true);
    assert_eq!(aspect.get(), 2.0);

    // The camera aspect is only re-read once a zoom settles.
    camera.set(Some(2.5));
    assert_eq!(aspect.get(), 2.0);
    zoom.set(3.0);
    assert_eq!(aspect.get(), 2.5);

    mobile.set(false);
    assert_eq!(aspect.get(), 2.5);
}
