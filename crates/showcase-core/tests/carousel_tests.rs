// Host-side tests for carousel index arithmetic and position slots.

use showcase_core::Carousel;

fn slots(c: &Carousel) -> Vec<i32> {
    (0..c.total()).map(|i| c.slot(i)).collect()
}

#[test]
fn starts_at_slide_zero() {
    let c = Carousel::new(5);
    assert_eq!(c.index(), 0);
}

#[test]
fn go_to_normalizes_into_range() {
    let mut c = Carousel::new(5);
    c.go_to(7);
    assert_eq!(c.index(), 2);
    c.go_to(-1);
    assert_eq!(c.index(), 4);
    c.go_to(-6);
    assert_eq!(c.index(), 4);
}

#[test]
fn go_to_is_idempotent_under_modulo() {
    let mut a = Carousel::new(5);
    let mut b = Carousel::new(5);
    a.go_to(3);
    b.go_to(3 + 5);
    assert_eq!(a.index(), b.index());
    b.go_to(3 - 5);
    assert_eq!(a.index(), b.index());
}

#[test]
fn step_wraps_both_directions() {
    let mut c = Carousel::new(3);
    c.step(-1);
    assert_eq!(c.index(), 2);
    c.step(1);
    assert_eq!(c.index(), 0);
}

#[test]
fn wrap_shortcut_picks_the_near_side() {
    // index 0 of 5: slide 4 is one step behind, not four ahead.
    let c = Carousel::new(5);
    assert_eq!(c.slot(4), -1);
    assert_eq!(c.slot(1), 1);
}

#[test]
fn every_slide_gets_exactly_one_slot() {
    for total in 1..=8 {
        let mut c = Carousel::new(total);
        for start in 0..total {
            c.go_to(start as isize);
            let all = slots(&c);
            assert_eq!(all.len(), total);
            for slot in all {
                assert!((-2..=2).contains(&slot));
            }
            assert_eq!(c.slot(c.index()), 0);
        }
    }
}

#[test]
fn advance_scenario_five_slides() {
    // 5 slides, start at 2, step forward once.
    let mut c = Carousel::new(5);
    c.go_to(2);
    c.step(1);
    assert_eq!(c.index(), 3);
    assert_eq!(c.slot(3), 0);
    assert_eq!(c.slot(4), 1);
    assert_eq!(c.slot(0), 2);
    assert_eq!(c.slot(1), -2);
    assert_eq!(c.slot(2), -1);
}

#[test]
fn distant_slides_clamp_to_two() {
    let c = Carousel::new(9);
    assert_eq!(c.slot(3), 2);
    assert_eq!(c.slot(4), 2);
    assert_eq!(c.slot(6), -2);
    assert_eq!(c.slot(5), -2);
}

#[test]
fn empty_carousel_is_inert() {
    let mut c = Carousel::new(0);
    c.go_to(3);
    c.step(1);
    assert_eq!(c.index(), 0);
    assert_eq!(c.slot(0), 0);
}

#[test]
fn single_slide_is_inert() {
    let mut c = Carousel::new(1);
    c.step(1);
    assert_eq!(c.index(), 0);
    c.step(-1);
    assert_eq!(c.index(), 0);
    assert_eq!(c.slot(0), 0);
}
