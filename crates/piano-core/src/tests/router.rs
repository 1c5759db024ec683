use crate::{InputRouter, KeyElement, KeyIdentity, KeyMap, PointerKind};

/// WHAT: Held-key repeats never produce a note
/// WHY: A held key must not create duplicate notes or recorded entries
#[test]
fn given_mapped_key_when_repeat_event_then_ignored() {
    // Given: The default router where "A" is mapped
    let router = InputRouter::default();
    assert!(router.handle_physical_key("a", false).is_some());

    // When: The same key arrives as a repeat
    let routed = router.handle_physical_key("a", true);

    // Then: Nothing is routed
    assert!(routed.is_none());
}

/// WHAT: Physical keys match case-insensitively
/// WHY: Caps lock or shift must not change which note plays
#[test]
#[allow(clippy::unwrap_used)]
fn given_upper_and_lower_case_when_pressed_then_same_note() {
    // Given: The default router
    let router = InputRouter::default();

    // When: Pressing "h" and "H"
    let lower = router.handle_physical_key("h", false).unwrap();
    let upper = router.handle_physical_key("H", false).unwrap();

    // Then: Both route to key H at 440Hz without suppressing defaults
    assert_eq!(lower, upper);
    assert_eq!(lower.request.key, KeyIdentity::new("H"));
    assert_eq!(lower.request.frequency, Some(440.0));
    assert!(!lower.prevent_default);
}

/// WHAT: Unmapped characters and named keys are ignored
/// WHY: Only keys in the fixed lookup may trigger notes
#[test]
fn given_unmapped_keys_when_pressed_then_ignored() {
    // Given: The default router
    let router = InputRouter::default();

    // When/Then: Unmapped letter, digit, named key and empty text
    for key in ["q", "1", "Shift", "Enter", ""] {
        assert!(router.handle_physical_key(key, false).is_none(), "{key}");
    }
}

/// WHAT: Touch and pointer presses suppress platform defaults
/// WHY: Touch must not scroll or zoom the page while playing
#[test]
fn given_key_element_when_pointer_like_press_then_default_suppressed_for_touch() {
    // Given: A key element
    let router = InputRouter::default();
    let element = KeyElement::new(KeyIdentity::new("S"), Some(293.66));

    // When: Pressed by each pointer kind
    let touch = router.handle_pointer(PointerKind::Touch, &element);
    let pointer = router.handle_pointer(PointerKind::Pointer, &element);
    let mouse = router.handle_pointer(PointerKind::Mouse, &element);

    // Then: Same request; touch and pointer suppress defaults
    assert!(touch.prevent_default);
    assert!(pointer.prevent_default);
    assert!(!mouse.prevent_default);
    assert_eq!(touch.request, mouse.request);
    assert_eq!(touch.request.frequency, Some(293.66));
}

/// WHAT: Malformed key data becomes a missing frequency
/// WHY: Bad data must reach the trigger guard, not crash the router
#[test]
fn given_malformed_note_data_when_routed_then_frequency_missing() {
    // Given: Elements with unparseable and empty note data
    let router = InputRouter::new(KeyMap::new(vec![
        KeyElement::from_data(KeyIdentity::new("Z"), "abc"),
        KeyElement::from_data(KeyIdentity::new("X"), ""),
        KeyElement::from_data(KeyIdentity::new("C"), " 261.63 "),
    ]));

    // When: Routing each key
    let z = router.handle_physical_key("z", false);
    let x = router.handle_physical_key("x", false);
    let c = router.handle_physical_key("c", false);

    // Then: Bad data has no frequency, good data parses
    assert_eq!(z.map(|r| r.request.frequency), Some(None));
    assert_eq!(x.map(|r| r.request.frequency), Some(None));
    assert_eq!(c.map(|r| r.request.frequency), Some(Some(261.63)));
}

/// WHAT: Default layout is the twelve-key chromatic octave
/// WHY: Display order drives pointer hit-testing
#[test]
fn given_default_layout_when_inspected_then_twelve_keys_in_order() {
    // Given/When: The default key map
    let keymap = KeyMap::default();

    // Then: Twelve keys, A first, J last, strictly rising pitch
    let keys: String = keymap
        .elements()
        .iter()
        .map(|e| e.identity().as_str())
        .collect();
    assert_eq!(keys, "AWSEDFTGYHUJ");
    assert!(
        keymap
            .elements()
            .windows(2)
            .all(|w| w[0].frequency() < w[1].frequency())
    );
    assert_eq!(keymap.get(9).map(|e| e.frequency()), Some(Some(440.0)));
}
