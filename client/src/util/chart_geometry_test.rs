use super::*;

#[test]
fn pie_arcs_cover_a_full_turn_in_order() {
    let arcs = pie_arcs(&[3.0, 1.0], 100.0, 100.0, 80.0);
    assert_eq!(arcs.len(), 2);
    assert!(arcs[0].start.abs() < 1e-12);
    assert!((arcs[0].end - arcs[1].start).abs() < 1e-12);
    assert!((arcs[1].end - TAU).abs() < 1e-9);
    assert!((arcs[0].fraction - 0.75).abs() < 1e-12);
    assert!((arcs[1].fraction - 0.25).abs() < 1e-12);
}

#[test]
fn large_wedges_set_the_large_arc_flag() {
    let arcs = pie_arcs(&[3.0, 1.0], 100.0, 100.0, 80.0);
    assert!(arcs[0].path.contains(" 0 1 1 "));
    assert!(arcs[1].path.contains(" 0 0 1 "));
    assert!(arcs[0].path.starts_with("M 100.00 100.00 L 100.00 20.00"));
}

#[test]
fn single_wedge_draws_full_circle() {
    let arcs = pie_arcs(&[0.0, 5.0], 50.0, 50.0, 40.0);
    assert_eq!(arcs.len(), 2);
    assert_eq!(arcs[0].fraction, 0.0);
    assert_eq!(arcs[1].fraction, 1.0);
    assert_eq!(
        arcs[1].path,
        "M 50.00 10.00 A 40.00 40.00 0 1 1 50.00 90.00 A 40.00 40.00 0 1 1 50.00 10.00 Z"
    );
}

#[test]
fn zero_total_yields_no_arcs() {
    assert!(pie_arcs(&[], 0.0, 0.0, 10.0).is_empty());
    assert!(pie_arcs(&[0.0, 0.0], 0.0, 0.0, 10.0).is_empty());
    assert!(pie_arcs(&[-2.0], 0.0, 0.0, 10.0).is_empty());
}

#[test]
fn labels_sit_inside_the_wedge() {
    let arcs = pie_arcs(&[1.0, 1.0], 0.0, 0.0, 100.0);
    // First half spans 12 to 6 o'clock on the right side.
    assert!(arcs[0].label_x > 60.0);
    assert!(arcs[0].label_y.abs() < 1e-9);
    assert!(arcs[1].label_x < -60.0);
}

#[test]
fn bar_extent_scales_to_max() {
    assert_eq!(bar_extent(5.0, 10.0), 0.5);
    assert_eq!(bar_extent(10.0, 10.0), 1.0);
    assert_eq!(bar_extent(3.0, 0.0), 0.0);
    assert_eq!(bar_extent(-1.0, 10.0), 0.0);
}

#[test]
fn bar_opacity_ranges_from_floor_to_one() {
    assert_eq!(bar_opacity(0.0), MIN_BAR_OPACITY);
    assert!((bar_opacity(1.0) - 1.0).abs() < 1e-12);
    assert!((bar_opacity(0.5) - 0.65).abs() < 1e-12);
}
