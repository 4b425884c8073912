//! Integration tests for stack and box layout.
//!
//! These drive the public API the way a host toolkit would: content lives in
//! shared handles owned by the host, and the engines only see them through
//! [`LayoutContent`].

use std::cell::RefCell;
use std::rc::Rc;

use trellis::{
    BoxAlignment, BoxElement, BoxLayout, BoxSize, BoxView, Direction, ElementKind, LayoutContent,
    LayoutDocument, Rect, StackAlignment, StackArrangement, StackElement, StackLayout, StackSize,
    StackView, Surface,
};

type Handle = Rc<RefCell<Surface>>;

fn handle() -> Handle {
    Rc::new(RefCell::new(Surface::default()))
}

fn fixed(handle: &Handle, main: f32) -> StackElement<Handle> {
    StackElement::new(handle.clone()).main_size(StackSize::Fixed(main))
}

const ALL_ARRANGEMENTS: [StackArrangement; 6] = [
    StackArrangement::Start,
    StackArrangement::Center,
    StackArrangement::End,
    StackArrangement::SpaceBetween,
    StackArrangement::SpaceAround,
    StackArrangement::SpaceEvenly,
];

#[test]
fn test_shared_handles_receive_frames() {
    let a = handle();
    let b = handle();
    let mut elements = vec![fixed(&a, 30.0), StackElement::new(b.clone())];

    StackLayout::vertical().apply(&mut elements, Rect::new(0.0, 0.0, 50.0, 100.0));

    assert_eq!(a.borrow().frame(), Rect::new(0.0, 0.0, 50.0, 30.0));
    assert_eq!(b.borrow().frame(), Rect::new(0.0, 30.0, 50.0, 70.0));
}

#[test]
fn test_frames_tile_main_axis_without_overlap() {
    for arrangement in ALL_ARRANGEMENTS {
        let elements: Vec<StackElement<Surface>> = [12.0, 7.0, 20.0]
            .into_iter()
            .map(|main| StackElement::new(Surface::default()).main_size(StackSize::Fixed(main)))
            .collect();
        let pass = StackLayout::horizontal()
            .arrangement(arrangement)
            .compute(&elements, Rect::new(0.0, 0.0, 200.0, 10.0));

        let mut offset = 0.0;
        for placement in &pass.placements {
            assert!(
                (placement.frame.x - offset).abs() < 1e-4,
                "{arrangement:?}: gap or overlap at {offset}"
            );
            offset = placement.frame.right();
        }
        // Fillers absorb all free space when there is any.
        assert!((offset - 200.0).abs() < 1e-4, "{arrangement:?}: ends at {offset}");
    }
}

#[test]
fn test_fillers_never_alias_caller_content() {
    let handles: Vec<Handle> = (0..3).map(|_| handle()).collect();
    let mut elements: Vec<_> = handles.iter().map(|h| fixed(h, 10.0)).collect();

    let pass = StackLayout::horizontal()
        .arrangement(StackArrangement::SpaceAround)
        .apply(&mut elements, Rect::new(0.0, 0.0, 120.0, 10.0));

    assert_eq!(pass.filler_frames().count(), 6);
    assert_eq!(elements.len(), 3);
    assert!(elements.iter().all(|el| el.kind() == ElementKind::UserCreated));
    // 90 free over 6 fillers of 15 each.
    assert_eq!(handles[0].borrow().frame.x, 15.0);
    assert_eq!(handles[1].borrow().frame.x, 55.0);
    assert_eq!(handles[2].borrow().frame.x, 95.0);
}

#[test]
fn test_repeated_passes_are_stable() {
    let a = handle();
    let b = handle();
    let mut elements = vec![fixed(&a, 10.0), fixed(&b, 10.0)];
    let layout = StackLayout::horizontal().arrangement(StackArrangement::SpaceEvenly);
    let parent = Rect::new(0.0, 0.0, 50.0, 10.0);

    let first = layout.apply(&mut elements, parent);
    let second = layout.apply(&mut elements, parent);

    assert_eq!(first, second);
    assert_eq!(second.arranged().len(), 5);
    assert_eq!(a.borrow().frame.x, 10.0);
    assert_eq!(b.borrow().frame.x, 30.0);
}

#[test]
fn test_weighted_shares_follow_weights() {
    let elements: Vec<StackElement<Surface>> = [1.0, 2.0, 5.0]
        .into_iter()
        .map(|w| StackElement::new(Surface::default()).main_size(StackSize::Weighted(w)))
        .collect();
    let pass = StackLayout::horizontal().compute(&elements, Rect::new(0.0, 0.0, 80.0, 10.0));

    let widths: Vec<f32> = pass.element_frames().map(|(_, f)| f.width).collect();
    assert_eq!(widths, vec![10.0, 20.0, 50.0]);
    assert_eq!(pass.total_weight, 8.0);
    assert_eq!(pass.filler_frames().count(), 0);
}

#[test]
fn test_overflow_keeps_fixed_lengths() {
    let elements = vec![
        StackElement::new(Surface::default()).main_size(StackSize::Fixed(80.0)),
        StackElement::new(Surface::default()).main_size(StackSize::Fixed(40.0)),
        StackElement::new(Surface::default()),
    ];
    let pass = StackLayout::horizontal().compute(&elements, Rect::new(0.0, 0.0, 100.0, 10.0));

    assert_eq!(pass.remaining, -20.0);
    assert_eq!(pass.frame_of(1), Some(Rect::new(80.0, 0.0, 40.0, 10.0)));
    assert_eq!(pass.frame_of(2), Some(Rect::new(120.0, 0.0, -20.0, 10.0)));
}

#[test]
fn test_hiding_and_showing() {
    let a = handle();
    let b = handle();
    let mut view = StackView::new(Direction::Horizontal)
        .frame(Rect::new(0.0, 0.0, 100.0, 10.0))
        .arrangement(StackArrangement::Start)
        .push(fixed(&a, 30.0))
        .push(fixed(&b, 30.0));

    view.elements_mut()[0].hidden = true;
    view.relayout();
    assert!(a.borrow().is_hidden());
    assert_eq!(b.borrow().frame.x, 0.0);

    view.elements_mut()[0].hidden = false;
    view.relayout();
    assert!(!a.borrow().is_hidden());
    assert_eq!(b.borrow().frame.x, 30.0);
}

#[test]
fn test_cross_alignment_override() {
    let mut view = StackView::new(Direction::Vertical)
        .frame(Rect::new(0.0, 0.0, 100.0, 100.0))
        .arrangement(StackArrangement::Start)
        .alignment(StackAlignment::Start)
        .push(
            StackElement::new(Surface::default())
                .main_size(StackSize::Fixed(10.0))
                .cross_size(StackSize::Fixed(20.0)),
        )
        .push(
            StackElement::new(Surface::default())
                .main_size(StackSize::Fixed(10.0))
                .cross_size(StackSize::Fixed(20.0))
                .alignment(StackAlignment::End),
        );
    view.relayout();

    assert_eq!(view.elements()[0].content.frame, Rect::new(0.0, 0.0, 20.0, 10.0));
    assert_eq!(view.elements()[1].content.frame, Rect::new(80.0, 10.0, 20.0, 10.0));
}

#[test]
fn test_direction_change_transposes() {
    let mut view = StackView::new(Direction::Horizontal)
        .frame(Rect::new(0.0, 0.0, 100.0, 100.0))
        .push(StackElement::new(Surface::default()).main_size(StackSize::Fixed(25.0)))
        .push(StackElement::new(Surface::default()));
    view.relayout();
    assert_eq!(view.elements()[1].content.frame, Rect::new(25.0, 0.0, 75.0, 100.0));

    view.set_direction(Direction::Vertical);
    view.relayout();
    assert_eq!(view.elements()[1].content.frame, Rect::new(0.0, 25.0, 100.0, 75.0));
}

#[test]
fn test_gap_and_separator_elements() {
    let elements: Vec<StackElement<Surface>> = vec![
        StackElement::new(Surface::default()).main_size(StackSize::Fixed(10.0)),
        StackElement::gap(6.0),
        StackElement::separator(trellis::Color::SYSTEM_GRAY),
        StackElement::new(Surface::default()).main_size(StackSize::Fixed(10.0)),
    ];
    let pass = StackLayout::horizontal()
        .arrangement(StackArrangement::Start)
        .compute(&elements, Rect::new(0.0, 0.0, 100.0, 8.0));

    assert_eq!(pass.frame_of(1), Some(Rect::new(10.0, 4.0, 6.0, 0.0)));
    assert_eq!(pass.frame_of(2), Some(Rect::new(16.0, 0.0, 1.0, 8.0)));
    assert_eq!(pass.frame_of(3).map(|f| f.x), Some(17.0));
    assert_eq!(elements[2].tint, Some(trellis::Color::SYSTEM_GRAY));
}

#[test]
fn test_box_layout_with_handles() {
    let badge = handle();
    let background = handle();
    let mut elements = vec![
        BoxElement::new(background.clone()),
        BoxElement::new(badge.clone())
            .width(BoxSize::Fixed(16.0))
            .height(BoxSize::Fixed(16.0))
            .alignment(BoxAlignment::TopEnd),
    ];

    let pass = BoxLayout::default().apply(&mut elements, Rect::new(100.0, 100.0, 64.0, 48.0));

    assert_eq!(pass.frames.len(), 2);
    assert_eq!(background.borrow().frame, Rect::new(0.0, 0.0, 64.0, 48.0));
    assert_eq!(badge.borrow().frame, Rect::new(48.0, 0.0, 16.0, 16.0));
}

#[test]
fn test_box_view_hidden_element() {
    let mut view = BoxView::new()
        .frame(Rect::new(0.0, 0.0, 40.0, 40.0))
        .push(BoxElement::new(Surface::default()).hidden(true));
    let pass = view.relayout();
    assert_eq!(pass.hidden, vec![0]);
    assert!(view.elements()[0].content.is_hidden());
}

#[test]
fn test_document_round_trip_through_run() {
    let json = r#"{
        "mode": "stack",
        "frame": { "x": 0, "y": 0, "width": 60, "height": 30 },
        "direction": "vertical",
        "arrangement": "center",
        "elements": [
            { "name": "a", "main_size": { "fixed": 10 } },
            { "name": "b", "main_size": { "relative": { "ratio": 0.5, "axis": "opposite" } } }
        ]
    }"#;
    let report = LayoutDocument::parse(json).unwrap().run().unwrap();

    // 10 + 30 = 40 > 30: the two centering fillers split -10.
    assert_eq!(report.elements[0].frame, Rect::new(0.0, -5.0, 60.0, 10.0));
    assert_eq!(report.elements[1].frame, Rect::new(0.0, 5.0, 60.0, 30.0));
    assert_eq!(report.fillers.len(), 2);

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["mode"], "stack");
    assert_eq!(value["elements"][1]["name"], "b");
}

#[test]
fn test_load_document_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("badge.json");
    std::fs::write(
        &path,
        r#"{
            "mode": "box",
            "frame": { "x": 0, "y": 0, "width": 40, "height": 40 },
            "elements": [ { "width": { "fixed": 10 }, "height": "copy",
                            "content": { "frame": { "x": 0, "y": 0, "width": 0, "height": 6 } } } ]
        }"#,
    )
    .unwrap();

    let report = LayoutDocument::load(&path).unwrap().run().unwrap();
    assert_eq!(report.elements[0].frame, Rect::new(15.0, 17.0, 10.0, 6.0));
}
