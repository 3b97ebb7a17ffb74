use vigil_base::Vec2;

#[test]
fn test_new() {
    let v = Vec2::new(3.0_f32, 4.0);
    assert_eq!(v.x, 3.0);
    assert_eq!(v.y, 4.0);
}

#[test]
fn test_zero() {
    let v = Vec2::<f32>::zero();
    assert_eq!(v, Vec2::new(0.0, 0.0));
}

#[test]
fn test_add() {
    let a = Vec2::new(1.0_f32, 2.0);
    let b = Vec2::new(3.0, 4.0);
    assert_eq!(a + b, Vec2::new(4.0, 6.0));
}

#[test]
fn test_sub() {
    let a = Vec2::new(5.0_f32, 7.0);
    let b = Vec2::new(3.0, 4.0);
    assert_eq!(a - b, Vec2::new(2.0, 3.0));
}

#[test]
fn test_scalar_mul() {
    let v = Vec2::new(2.0_f32, 3.0);
    assert_eq!(v * 2.0, Vec2::new(4.0, 6.0));
}
