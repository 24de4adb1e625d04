use super::*;
use realcurve::{Curve, LineKind, Point};

fn on_curve_session() -> Session {
    let (session, _) = Session::default().with_point(Slot::P, Point::new(0.0, 1.0));
    let (session, _) = session.with_point(Slot::Q, Point::new(1.0, 1.0));
    session
}

#[test]
fn test_default_session_is_empty() {
    let session = Session::default();
    assert_eq!(session.curve(), &Curve::new(DEFAULT_A, DEFAULT_B));
    assert_eq!(session.point(Slot::P), None);
    assert_eq!(session.point(Slot::Q), None);
    assert!(session.outcome().is_none());
    assert!(!session.can_add());
    assert!(!session.can_double());
}

#[test]
fn test_add_records_construction() {
    let session = on_curve_session();
    assert!(session.can_add());

    let next = session.add().expect("add");
    let outcome = next.outcome().expect("outcome");
    assert_eq!(outcome.operation, Operation::Add);
    assert_eq!(outcome.result, Point::new(-1.0, -1.0));
    assert_eq!(outcome.intermediate, Some(Point::new(-1.0, 1.0)));
    assert_eq!(outcome.line.map(|l| l.kind), Some(LineKind::Secant));

    // The previous session is untouched.
    assert!(session.outcome().is_none());
}

#[test]
fn test_scalar_multiply_has_no_construction() {
    let next = on_curve_session().scalar_multiply(3.0).expect("multiply");
    let outcome = next.outcome().expect("outcome");
    assert_eq!(outcome.operation, Operation::ScalarMultiply { k: 3 });
    assert_eq!(outcome.intermediate, None);
    assert_eq!(outcome.line, None);
}

#[test]
fn test_scalar_multiply_rejects_non_finite() {
    let err = on_curve_session()
        .scalar_multiply(f64::INFINITY)
        .expect_err("infinite scalar");
    assert_eq!(err, SessionError::InvalidScalar(f64::INFINITY));
}

#[test]
fn test_negative_scalar() {
    let session = on_curve_session();
    let neg = session.scalar_multiply(-2.0).expect("multiply");
    let pos = session.scalar_multiply(2.0).expect("multiply");
    let neg = neg.outcome().expect("outcome").result;
    let pos = pos.outcome().expect("outcome").result;
    assert!(neg.approx_eq(&pos.negate()));
}

#[test]
fn test_operations_need_points() {
    let session = Session::default();
    assert_eq!(session.add(), Err(SessionError::MissingPoint(Slot::P)));
    assert_eq!(session.double(), Err(SessionError::MissingPoint(Slot::P)));

    let (session, _) = session.with_point(Slot::P, Point::new(0.0, 1.0));
    assert_eq!(session.add(), Err(SessionError::MissingPoint(Slot::Q)));
    assert!(session.double().is_ok());
}

#[test]
fn test_operations_refuse_infinity_and_off_curve_points() {
    let (session, placement) = Session::default().with_point(Slot::P, Point::Infinity);
    assert!(placement.on_curve);
    assert_eq!(session.double(), Err(SessionError::PointAtInfinity(Slot::P)));

    let (session, placement) = session.with_point(Slot::P, Point::new(0.0, 2.0));
    assert!(!placement.on_curve);
    assert_eq!(session.point(Slot::P), Some(Point::new(0.0, 2.0)));
    assert_eq!(session.double(), Err(SessionError::NotOnCurve(Slot::P)));
    assert_eq!(
        session.scalar_multiply(2.0),
        Err(SessionError::NotOnCurve(Slot::P))
    );
}

#[test]
fn test_placing_a_point_clears_the_outcome() {
    let session = on_curve_session().add().expect("add");
    assert!(session.outcome().is_some());

    let (session, _) = session.with_point(Slot::Q, Point::new(1.0, -1.0));
    assert!(session.outcome().is_none());
}

#[test]
fn test_new_curve_drops_points() {
    let session = on_curve_session().add().expect("add");
    let session = session.with_curve(Curve::new(2.0, 3.0));
    assert_eq!(session.curve().a(), 2.0);
    assert_eq!(session.point(Slot::P), None);
    assert_eq!(session.point(Slot::Q), None);
    assert!(session.outcome().is_none());
}

#[test]
fn test_select_fills_p_then_q() {
    let (session, first) = Session::default().select_at(0.0, 0.8).expect("snap");
    assert_eq!(first.slot, Slot::P);
    assert_eq!(first.point, Point::new(0.0, 1.0));

    let (session, second) = session.select_at(1.0, -0.9).expect("snap");
    assert_eq!(second.slot, Slot::Q);
    assert_eq!(second.point, Point::new(1.0, -1.0));

    // P and Q are now set; further picks keep replacing Q.
    let (session, third) = session.select_at(0.0, -3.0).expect("snap");
    assert_eq!(third.slot, Slot::Q);
    assert_eq!(session.point(Slot::P), Some(Point::new(0.0, 1.0)));
}

#[test]
fn test_select_replaces_off_curve_p() {
    let (session, _) = Session::default().with_point(Slot::P, Point::new(4.0, 4.0));
    let (session, placement) = session.select_at(0.0, 1.0).expect("snap");
    assert_eq!(placement.slot, Slot::P);
    assert_eq!(session.point(Slot::P), Some(Point::new(0.0, 1.0)));
}

#[test]
fn test_select_off_curve_position() {
    let err = Session::default().select_at(-3.0, 0.0).expect_err("no point");
    assert_eq!(err, SessionError::NoCurvePointAt { x: -3.0 });
}

#[test]
fn test_select_non_finite_position() {
    let err = Session::default().select_at(f64::NAN, 0.0).expect_err("no point");
    assert!(matches!(err, SessionError::NoCurvePointAt { x } if x.is_nan()));
    assert!(Session::default().select_at(f64::INFINITY, 0.0).is_err());
}

#[test]
fn test_reset() {
    let session = on_curve_session().with_curve(Curve::new(0.0, 7.0));
    assert_eq!(Session::reset(), Session::default());
    assert_ne!(session, Session::reset());
}

#[test]
fn test_session_serde_round_trip() {
    let session = on_curve_session().double().expect("double");
    let json = serde_json::to_string(&session).expect("serialize");
    let back: Session = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, session);
}
