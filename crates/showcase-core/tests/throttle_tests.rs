// Host-side tests for the cooldown gate. The timer itself lives in the web
// layer; these cover the gate's claim/reopen state machine.

use showcase_core::Gate;

#[test]
fn gate_starts_open() {
    let gate = Gate::new();
    assert!(gate.is_open());
}

#[test]
fn second_claim_within_a_window_is_dropped() {
    let mut gate = Gate::new();
    assert!(gate.try_close());
    // Still inside the cooldown: the request is dropped, not queued.
    assert!(!gate.try_close());
    assert!(!gate.try_close());
}

#[test]
fn reopen_allows_exactly_one_more_claim() {
    let mut gate = Gate::new();
    assert!(gate.try_close());
    gate.reopen();
    assert!(gate.try_close());
    assert!(!gate.try_close());
}

#[test]
fn independent_gates_do_not_interfere() {
    let mut carousel_gate = Gate::new();
    let mut step_gate = Gate::new();
    assert!(carousel_gate.try_close());
    assert!(step_gate.try_close());
    carousel_gate.reopen();
    assert!(carousel_gate.try_close());
    assert!(!step_gate.try_close());
}
