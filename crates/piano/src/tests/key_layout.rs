use crate::key_layout::key_index_at;

/// WHAT: Positions map to equal-width keys left to right
/// WHY: Clicking or touching a key must play that key
#[test]
fn given_twelve_keys_when_hit_testing_then_equal_slices() {
    // Given: A 1200px window with twelve keys
    let width = 1200.0;

    // When/Then: Edges and interior points
    assert_eq!(key_index_at(0.0, width, 12), Some(0));
    assert_eq!(key_index_at(99.9, width, 12), Some(0));
    assert_eq!(key_index_at(100.0, width, 12), Some(1));
    assert_eq!(key_index_at(1_150.0, width, 12), Some(11));
    assert_eq!(key_index_at(1_199.999, width, 12), Some(11));
}

/// WHAT: Out-of-window positions and degenerate layouts hit nothing
/// WHY: Stray pointer events must not play a note
#[test]
fn given_out_of_range_positions_when_hit_testing_then_none() {
    // Given/When/Then: Outside the window, zero width, no keys
    assert_eq!(key_index_at(-1.0, 1200.0, 12), None);
    assert_eq!(key_index_at(1200.0, 1200.0, 12), None);
    assert_eq!(key_index_at(10.0, 0.0, 12), None);
    assert_eq!(key_index_at(10.0, 1200.0, 0), None);
    assert_eq!(key_index_at(f64::NAN, 1200.0, 12), None);
}
