use tinct_core::{Rect, Size};
use tinct_overlay::{calculate_position, Align, PlacementOptions, Side};

const VIEWPORT: Size = Size::new(400.0, 800.0);

#[test]
fn top_and_bottom_are_symmetric() {
    let anchor = Rect::new(180.0, 380.0, 40.0, 24.0);
    let content = Size::new(120.0, 36.0);
    for side_offset in [0.0, 4.0, 8.0, 13.5] {
        let options = PlacementOptions::tooltip().side_offset(side_offset);
        let bottom = calculate_position(anchor, content, VIEWPORT, &options.side(Side::Bottom));
        let top = calculate_position(anchor, content, VIEWPORT, &options.side(Side::Top));
        assert_eq!(bottom.actual_side, Side::Bottom);
        assert_eq!(top.actual_side, Side::Top);
        assert_eq!(
            bottom.top - top.top,
            anchor.height() + content.height + 2.0 * side_offset
        );
    }
}

#[test]
fn bottom_overflow_flips_only_when_avoiding() {
    let anchor = Rect::new(100.0, 760.0, 40.0, 20.0);
    let content = Size::new(120.0, 60.0);
    let options = PlacementOptions::tooltip().side(Side::Bottom);

    let avoided = calculate_position(anchor, content, VIEWPORT, &options);
    assert_eq!(avoided.actual_side, Side::Top);
    assert_eq!(avoided.top, 760.0 - 60.0 - 8.0);

    let raw = calculate_position(anchor, content, VIEWPORT, &options.avoid_collisions(false));
    assert_eq!(raw.actual_side, Side::Bottom);
    assert!(raw.top + content.height > VIEWPORT.height);
}

#[test]
fn cross_axis_is_clamped_inside_viewport() {
    let anchor = Rect::new(300.0, 100.0, 40.0, 20.0);
    let content = Size::new(150.0, 30.0);
    for avoid in [true, false] {
        let options = PlacementOptions::context_menu()
            .align(Align::Start)
            .align_offset(500.0)
            .avoid_collisions(avoid);
        let pos = calculate_position(anchor, content, VIEWPORT, &options);
        assert!(pos.left + content.width <= VIEWPORT.width);
        assert_eq!(pos.left, 250.0);
    }
}

#[test]
fn in_bounds_when_avoiding_and_content_fits() {
    let content = Size::new(120.0, 60.0);
    let options = PlacementOptions::tooltip();
    for x in [0.0, 50.0, 200.0, 380.0] {
        for y in [10.0, 100.0, 400.0, 780.0] {
            let anchor = Rect::new(x, y, 20.0, 20.0);
            let pos = calculate_position(anchor, content, VIEWPORT, &options);
            let placed = pos.rect(content);
            assert!(
                VIEWPORT.to_rect().contains_rect(&placed),
                "anchor at ({x}, {y}) placed at {placed:?}"
            );
        }
    }
}
