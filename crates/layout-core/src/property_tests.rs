use proptest::prelude::*;

use crate::{
    apply::steps,
    geom::Rect,
    plan::GeometryPlan,
    resolve::{resolve_position, resolve_size},
    token::Token,
};

fn pct(p: i64) -> Token {
    Token::parse(&format!("{p}%"))
}

fn opt_strategy() -> impl Strategy<Value = Option<i32>> {
    prop::option::of(-4000i32..4000)
}

proptest! {
    #[test]
    fn percent_size_is_floor_and_monotonic(total in 0i32..10_000, p in 0i64..100) {
        let a = resolve_size(&pct(p), total).unwrap();
        let b = resolve_size(&pct(p + 1), total).unwrap();
        prop_assert_eq!(i64::from(a), i64::from(total) * p / 100);
        prop_assert!(a <= b);
        prop_assert!(b <= total);
    }

    #[test]
    fn center_equals_middle(total in 0i32..10_000, size in 0i32..10_000) {
        prop_assume!(size <= total);
        let c = resolve_position(&Token::parse("center"), total, size).unwrap();
        let m = resolve_position(&Token::parse("middle"), total, size).unwrap();
        prop_assert_eq!(c, m);
        prop_assert_eq!(c, (total - size) / 2);
    }

    #[test]
    fn right_and_bottom_never_negative(total in 0i32..10_000, size in 0i32..20_000) {
        let r = resolve_position(&Token::parse("right"), total, size).unwrap();
        let b = resolve_position(&Token::parse("bottom"), total, size).unwrap();
        prop_assert!(r >= 0);
        prop_assert_eq!(r, b);
        if size <= total {
            prop_assert_eq!(r + size, total);
        }
    }

    #[test]
    fn steps_follow_plan_presence(
        x in opt_strategy(),
        y in opt_strategy(),
        width in prop::option::of(0i32..4000),
        height in prop::option::of(0i32..4000),
    ) {
        let plan = GeometryPlan { x, y, width, height };
        let frame = Rect::new(10, 20, 300, 200);
        let wa = Rect::new(0, 32, 1920, 1048);
        let s = steps(&plan, &frame, &wa);
        prop_assert_eq!(s.moved.is_some(), x.is_some() || y.is_some());
        prop_assert_eq!(s.resized.is_some(), width.is_some() && height.is_some());
        if let Some(m) = s.moved {
            // A move never changes the size.
            prop_assert_eq!((m.width, m.height), (frame.width, frame.height));
        }
    }
}
