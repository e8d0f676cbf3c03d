use proptest::prelude::*;
use wayfinder::{NavigationError, NavigationRoute, NavigationState};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Screen(u8);

impl NavigationRoute for Screen {
    type Action = ();
}

#[derive(Debug, Clone)]
enum Op {
    Push(u8),
    Pop,
    PopToRoot,
    Sheet(u8),
    FullScreen(u8),
    TrySheet(u8),
    TryFullScreen(u8),
    DismissSheet,
    DismissFullScreen,
    Start(u8),
    Cleanup,
}

fn op() -> impl Strategy<Value = Op> {
    // Few distinct screens so duplicates and conflicts actually happen.
    let screen = 0u8..4;
    prop_oneof![
        4 => screen.clone().prop_map(Op::Push),
        2 => Just(Op::Pop),
        1 => Just(Op::PopToRoot),
        1 => screen.clone().prop_map(Op::Sheet),
        1 => screen.clone().prop_map(Op::FullScreen),
        1 => screen.clone().prop_map(Op::TrySheet),
        1 => screen.clone().prop_map(Op::TryFullScreen),
        1 => Just(Op::DismissSheet),
        1 => Just(Op::DismissFullScreen),
        1 => screen.prop_map(Op::Start),
        1 => Just(Op::Cleanup),
    ]
}

fn apply(nav: &mut NavigationState<Screen>, op: Op) {
    let _ = match op {
        Op::Push(s) => nav.push(Screen(s)),
        Op::Pop => nav.pop().map(|_| ()),
        Op::PopToRoot => {
            nav.pop_to_root();
            Ok(())
        }
        Op::Sheet(s) => nav.present_sheet(Screen(s)),
        Op::FullScreen(s) => nav.present_full_screen(Screen(s)),
        Op::TrySheet(s) => {
            nav.try_present_sheet(Screen(s));
            Ok(())
        }
        Op::TryFullScreen(s) => {
            nav.try_present_full_screen(Screen(s));
            Ok(())
        }
        Op::DismissSheet => {
            nav.dismiss_sheet();
            Ok(())
        }
        Op::DismissFullScreen => {
            nav.dismiss_full_screen();
            Ok(())
        }
        Op::Start(s) => nav.start(Screen(s)),
        Op::Cleanup => {
            nav.cleanup();
            Ok(())
        }
    };
}

proptest! {
    #[test]
    fn test_depth_never_exceeds_max(
        max_depth in 0usize..8,
        ops in prop::collection::vec(op(), 0..64)
    ) {
        let mut nav = NavigationState::builder().max_depth(max_depth).build();
        for op in ops {
            apply(&mut nav, op);
            prop_assert!(nav.depth() <= max_depth);
        }
    }

    #[test]
    fn test_sheet_and_full_screen_never_both_set(ops in prop::collection::vec(op(), 0..64)) {
        let mut nav = NavigationState::new();
        for op in ops {
            apply(&mut nav, op);
            prop_assert!(!(nav.sheet().is_some() && nav.full_screen().is_some()));
        }
    }

    #[test]
    fn test_overflowing_push_leaves_stack_unchanged(
        max_depth in 1usize..6,
        fill in prop::collection::vec(0u8..200, 0..12),
        extra in 200u8..=255,
    ) {
        let mut nav = NavigationState::builder().max_depth(max_depth).build();
        for s in fill {
            let _ = nav.push(Screen(s));
        }
        if nav.depth() == max_depth {
            let before = nav.stack().to_vec();
            prop_assert_eq!(
                nav.push(Screen(extra)),
                Err(NavigationError::StackOverflow { max_depth })
            );
            prop_assert_eq!(nav.stack(), before.as_slice());
        }
    }

    #[test]
    fn test_pushing_top_again_is_a_successful_noop(ops in prop::collection::vec(op(), 0..32)) {
        let mut nav = NavigationState::new();
        for op in ops {
            apply(&mut nav, op);
        }
        if let Some(top) = nav.current_route().cloned() {
            let before = nav.stack().to_vec();
            prop_assert_eq!(nav.push(top), Ok(()));
            prop_assert_eq!(nav.stack(), before.as_slice());
        }
    }

    #[test]
    fn test_failed_operations_leave_state_untouched(ops in prop::collection::vec(op(), 0..48)) {
        let mut nav = NavigationState::builder().max_depth(4).build();
        for op in ops {
            let before = nav.snapshot();
            let failed = match op.clone() {
                Op::Push(s) => nav.push(Screen(s)).is_err(),
                Op::Pop => nav.pop().is_err(),
                Op::Sheet(s) => nav.present_sheet(Screen(s)).is_err(),
                Op::FullScreen(s) => nav.present_full_screen(Screen(s)).is_err(),
                other => {
                    apply(&mut nav, other);
                    false
                }
            };
            if failed {
                prop_assert_eq!(nav.snapshot(), before);
            }
        }
    }

    #[test]
    fn test_cleanup_is_idempotent(ops in prop::collection::vec(op(), 0..32)) {
        let mut nav = NavigationState::new();
        for op in ops {
            apply(&mut nav, op);
        }
        nav.cleanup();
        let once = nav.snapshot();
        nav.cleanup();
        prop_assert_eq!(nav.snapshot(), once);
        prop_assert!(nav.is_empty());
        prop_assert!(!nav.has_presentation());
    }
}
