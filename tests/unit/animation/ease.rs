use super::*;

#[test]
fn both_curves_start_at_zero_and_finish_at_one() {
    for ease in [Ease::Linear, Ease::OutQuad] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
    }
}

#[test]
fn out_quad_leads_linear_in_between() {
    for t in [0.1, 0.25, 0.5, 0.75, 0.9] {
        assert!(Ease::OutQuad.apply(t) > Ease::Linear.apply(t));
    }
    assert_eq!(Ease::OutQuad.apply(0.5), 0.75);
    assert_eq!(Ease::Linear.apply(0.5), 0.5);
}

#[test]
fn lerp_clamps_past_the_end() {
    assert_eq!(Ease::OutQuad.lerp(10.0, 20.0, 1.0), 20.0);
    assert_eq!(Ease::OutQuad.lerp(10.0, 20.0, 2.0), 20.0);
    assert_eq!(Ease::Linear.lerp(4.0, 8.0, 0.25), 5.0);
}

#[test]
fn wire_names_are_snake_case() {
    assert_eq!(serde_json::to_string(&Ease::OutQuad).unwrap(), "\"out_quad\"");
    let ease: Ease = serde_json::from_str("\"linear\"").unwrap();
    assert_eq!(ease, Ease::Linear);
    assert!(serde_json::from_str::<Ease>("\"in_cubic\"").is_err());
}
