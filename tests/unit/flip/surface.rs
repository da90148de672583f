use super::*;

#[test]
fn require_names_the_missing_flap() {
    let mut m = SurfaceMount::default();
    m.mount(SurfaceRole::FoldTop);
    m.mount(SurfaceRole::FoldBottom);
    m.mount(SurfaceRole::UnfoldBottom);
    assert!(!m.is_complete());

    let err = m.require().unwrap_err();
    assert!(matches!(err, FlapError::ResourceUnavailable(_)));
    assert!(err.to_string().contains("unfold_top"));

    m.mount_all();
    assert!(m.is_complete());
    assert!(m.require().is_ok());
}

#[test]
fn bind_pair_and_pose_drive_all_four_flaps() {
    let mut m = SurfaceMount::mounted();
    {
        let mut s = m.require().unwrap();
        s.bind_pair('a', 'b');
        s.pose(0.25);
    }
    let fold_top = m.get(SurfaceRole::FoldTop).unwrap();
    assert_eq!(fold_top.symbol, 'a');
    assert_eq!(fold_top.rotate_x_deg, -45.0);
    assert_eq!(m.get(SurfaceRole::FoldBottom).unwrap().brightness, 0.75);
    assert_eq!(m.get(SurfaceRole::UnfoldTop).unwrap().brightness, 0.25);
    let unfold_bottom = m.get(SurfaceRole::UnfoldBottom).unwrap();
    assert_eq!(unfold_bottom.symbol, 'b');
    assert_eq!(unfold_bottom.rotate_x_deg, 135.0);

    m.require().unwrap().clear_props();
    assert_eq!(*m.get(SurfaceRole::FoldTop).unwrap(), Surface {
        symbol: 'a',
        rotate_x_deg: 0.0,
        brightness: 1.0,
    });
}

#[test]
fn unmount_clears_everything() {
    let mut m = SurfaceMount::mounted();
    m.unmount_all();
    assert_eq!(m, SurfaceMount::default());
    assert!(m.get(SurfaceRole::FoldTop).is_none());
}
