use super::*;

fn vp(width: u32, height: u32) -> Viewport {
    Viewport { width, height }
}

#[test]
fn pool_size_follows_area_with_cap() {
    let cfg = ParticleConfig::default();
    assert_eq!(pool_size(vp(1200, 800), &cfg), 80);
    assert_eq!(pool_size(vp(1920, 1080), &cfg), 140);
    assert_eq!(pool_size(vp(100, 100), &cfg), 0);
}

#[test]
fn spawned_attributes_are_in_range() {
    let field = ParticleField::new(vp(1200, 800), 9, ParticleConfig::default()).unwrap();
    assert_eq!(field.particles().len(), 80);
    for p in field.particles() {
        assert!((0.0..1200.0).contains(&p.pos.x));
        assert!((0.0..800.0).contains(&p.pos.y));
        assert!((-0.3..0.3).contains(&p.vel.x));
        assert!((-0.3..0.3).contains(&p.vel.y));
        assert!((0.5..2.9).contains(&p.size));
        assert!((0.0..360.0).contains(&p.hue));
        assert!((0.4..1.0).contains(&p.alpha));
    }
}

#[test]
fn update_integrates_velocity() {
    let mut field = ParticleField::new(vp(200, 120), 1, ParticleConfig::default()).unwrap();
    let p = Particle {
        pos: Point::new(50.0, 50.0),
        vel: Vec2::new(0.25, -0.125),
        size: 1.0,
        hue: 10.0,
        alpha: 0.5,
    };
    field.set_particle(0, p);
    field.update();
    field.update();
    let q = field.particles()[0];
    assert_eq!(q.pos, Point::new(50.5, 49.75));
    assert_eq!(q.hue, 10.0);
}

#[test]
fn leaving_the_margin_recycles_in_place() {
    let mut field = ParticleField::new(vp(200, 120), 1, ParticleConfig::default()).unwrap();
    let n = field.particles().len();
    field.set_particle(
        0,
        Particle {
            pos: Point::new(219.9, 60.0),
            vel: Vec2::new(0.2, 0.0),
            size: 1.0,
            hue: 0.0,
            alpha: 1.0,
        },
    );
    field.update();
    let q = field.particles()[0];
    assert_eq!(field.particles().len(), n);
    assert!((0.0..200.0).contains(&q.pos.x));
    assert!((0.0..120.0).contains(&q.pos.y));
}

#[test]
fn inside_margin_is_not_recycled() {
    let mut field = ParticleField::new(vp(200, 120), 1, ParticleConfig::default()).unwrap();
    field.set_particle(
        0,
        Particle {
            pos: Point::new(-19.0, 60.0),
            vel: Vec2::new(-0.5, 0.0),
            size: 1.0,
            hue: 0.0,
            alpha: 1.0,
        },
    );
    field.update();
    assert_eq!(field.particles()[0].pos, Point::new(-19.5, 60.0));
}

#[test]
fn resize_rebuilds_pool() {
    let mut field = ParticleField::new(vp(1200, 800), 3, ParticleConfig::default()).unwrap();
    field.resize(vp(600, 400)).unwrap();
    assert_eq!(field.particles().len(), 20);
    assert_eq!(field.frame().width, 600);
}

#[test]
fn same_seed_same_pool() {
    let a = ParticleField::new(vp(640, 480), 5, ParticleConfig::default()).unwrap();
    let b = ParticleField::new(vp(640, 480), 5, ParticleConfig::default()).unwrap();
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn render_draws_something() {
    let mut field = ParticleField::new(vp(240, 200), 11, ParticleConfig::default()).unwrap();
    assert!(field.frame().is_blank());
    field.render().unwrap();
    assert!(!field.frame().is_blank());
}
