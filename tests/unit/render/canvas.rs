use super::*;

fn vp(w: u32, h: u32) -> Viewport {
    Viewport {
        width: w,
        height: h,
    }
}

#[test]
fn new_canvas_is_transparent() {
    let c = CpuCanvas::new(vp(8, 4)).unwrap();
    let f = c.snapshot();
    assert_eq!((f.width, f.height), (8, 4));
    assert_eq!(f.data.len(), 8 * 4 * 4);
    assert!(f.is_blank());
}

#[test]
fn redraw_fills_and_clear_resets() {
    let mut c = CpuCanvas::new(vp(16, 16)).unwrap();
    c.redraw(|ctx| {
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 0, 0, 255));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, 16.0, 16.0));
        Ok(())
    })
    .unwrap();
    let f = c.snapshot();
    assert_eq!(&f.data[0..4], &[255, 0, 0, 255]);
    c.clear();
    assert!(c.snapshot().is_blank());
}

#[test]
fn over_blends_premultiplied() {
    let mut dst = FrameRGBA::solid(1, 1, Color::rgba8(0, 0, 255, 1.0));
    let src = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![128, 0, 0, 128],
        premultiplied: true,
    };
    dst.over(&src).unwrap();
    assert_eq!(dst.data, vec![128, 0, 127, 255]);

    let wrong = FrameRGBA::solid(2, 1, Color::rgba8(0, 0, 0, 1.0));
    assert!(dst.over(&wrong).is_err());
}

#[test]
fn resize_reallocates() {
    let mut c = CpuCanvas::new(vp(4, 4)).unwrap();
    c.resize(vp(6, 2)).unwrap();
    assert_eq!((c.width(), c.height()), (6, 2));
    assert!(c.resize(vp(0, 2)).is_err());
}
