//! Property-based invariant tests for the tab model and layout.
//!
//! 1. At least one group exists; only a sole group may be empty
//! 2. The active selection resolves whenever any tab exists
//! 3. Reorders and group moves never create or lose tabs
//! 4. Layout is idempotent and keeps tabs inside their group
//! 5. Hit-testing agrees with the laid-out rectangles
//! 6. Arbitrary pointer sequences never break the model

mod common;

use common::{MockHost, check_invariants, fixed_config};
use explorer_tabs::config::{Config, palette_color};
use explorer_tabs::tab::{Location, Tab, TabGroupManager};
use explorer_tabs::tab_bar_ui::HitTarget;
use explorer_tabs::{Modifiers, Point, TabBar};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Add(u8, bool),
    Remove(usize, usize),
    NewGroup(usize, usize),
    ReorderTab(usize, usize, usize, usize),
    ReorderGroup(usize, usize),
    Activate(usize, usize),
    Recolor(usize, usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u8..12, any::<bool>()).prop_map(|(n, a)| Op::Add(n, a)),
        1 => (0usize..5, 0usize..6).prop_map(|(g, t)| Op::Remove(g, t)),
        1 => (0usize..5, 0usize..6).prop_map(|(g, t)| Op::NewGroup(g, t)),
        2 => (0usize..5, 0usize..6, 0usize..5, 0usize..7)
            .prop_map(|(sg, st, dg, dt)| Op::ReorderTab(sg, st, dg, dt)),
        1 => (0usize..5, 0usize..6).prop_map(|(s, d)| Op::ReorderGroup(s, d)),
        1 => (0usize..5, 0usize..6).prop_map(|(g, t)| Op::Activate(g, t)),
        1 => (0usize..5, 0usize..8).prop_map(|(g, c)| Op::Recolor(g, c)),
    ]
}

#[derive(Debug, Clone)]
enum Pointer {
    Down(i32, i32),
    Move(i32, i32),
    Up(i32, i32),
    CaptureLost,
}

fn pointer_strategy() -> impl Strategy<Value = Pointer> {
    prop_oneof![
        1 => (-50i32..700, -100i32..200).prop_map(|(x, y)| Pointer::Down(x, y)),
        3 => (-50i32..700, -100i32..200).prop_map(|(x, y)| Pointer::Move(x, y)),
        1 => (-50i32..700, -100i32..200).prop_map(|(x, y)| Pointer::Up(x, y)),
        1 => Just(Pointer::CaptureLost),
    ]
}

fn apply(model: &mut TabGroupManager, op: &Op) {
    match *op {
        Op::Add(n, activate) => {
            let tab = Tab::new(Location::new(format!("/t{}", n)), format!("t{}", n));
            model.add_tab(tab, activate, None);
        }
        Op::Remove(g, t) => {
            model.remove_tab(g, t);
        }
        Op::NewGroup(g, t) => {
            model.move_tab_to_new_group(g, t);
        }
        Op::ReorderTab(sg, st, dg, dt) => {
            model.reorder_tab(sg, st, dg, dt);
        }
        Op::ReorderGroup(s, d) => {
            model.reorder_group(s, d);
        }
        Op::Activate(g, t) => {
            model.activate(g, t);
        }
        Op::Recolor(g, c) => {
            model.set_group_color(g, palette_color(c));
        }
    }
}

fn bar_from_ops(ops: &[Op], config: &Config, width: i32) -> TabBar<MockHost> {
    let mut bar = TabBar::new(MockHost::default(), config);
    bar.resize(width, 44);
    for op in ops {
        match *op {
            Op::Add(n, activate) => {
                bar.add_tab_for_location(Location::new(format!("/t{}", n)), activate, false, None);
            }
            Op::Remove(g, t) => {
                bar.close_tab(g, t);
            }
            Op::NewGroup(g, t) => {
                bar.move_tab_to_new_group(g, t);
            }
            Op::Activate(g, t) => {
                bar.activate_tab(g, t, false);
            }
            Op::Recolor(g, c) => {
                bar.set_group_color(g, palette_color(c));
            }
            // Reorders only reach the bar through drags
            Op::ReorderTab(..) | Op::ReorderGroup(..) => {}
        }
    }
    bar
}

// ═══════════════════════════════════════════════════════════════════════
// 1-2. Structural invariants after any operation
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn model_invariants_hold_after_every_op(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut model = TabGroupManager::new();
        prop_assert!(check_invariants(&model).is_ok());
        for op in &ops {
            apply(&mut model, op);
            if let Err(violation) = check_invariants(&model) {
                prop_assert!(false, "after {:?}: {}", op, violation);
            }
        }
    }

    #[test]
    fn active_flags_mark_exactly_the_selection(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let mut model = TabGroupManager::new();
        for op in &ops {
            apply(&mut model, op);
        }
        model.refresh_active_flags();
        let flagged: Vec<(usize, usize)> = model
            .groups()
            .iter()
            .enumerate()
            .flat_map(|(g, group)| {
                group
                    .tabs
                    .iter()
                    .enumerate()
                    .filter(|(_, tab)| tab.is_active)
                    .map(move |(t, _)| (g, t))
            })
            .collect();
        if model.is_empty() {
            prop_assert!(flagged.is_empty());
        } else {
            prop_assert_eq!(flagged, vec![model.active_indices()]);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. Moves conserve tabs
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reorders_conserve_tabs(
        setup in prop::collection::vec(op_strategy(), 0..30),
        moves in prop::collection::vec(
            (0usize..5, 0usize..6, 0usize..5, 0usize..7, 0usize..5, 0usize..5),
            1..20,
        ),
    ) {
        let mut model = TabGroupManager::new();
        for op in &setup {
            apply(&mut model, op);
        }
        let mut before: Vec<String> = model
            .groups()
            .iter()
            .flat_map(|g| g.tabs.iter().map(|t| t.location.to_string()))
            .collect();
        before.sort();

        for (sg, st, dg, dt, gs, gd) in moves {
            model.reorder_tab(sg, st, dg, dt);
            model.reorder_group(gs, gd);
            model.move_tab_to_new_group(sg, st);
            prop_assert!(check_invariants(&model).is_ok());
        }

        let mut after: Vec<String> = model
            .groups()
            .iter()
            .flat_map(|g| g.tabs.iter().map(|t| t.location.to_string()))
            .collect();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn successful_tab_reorder_selects_moved_tab(
        setup in prop::collection::vec(op_strategy(), 1..30),
        sg in 0usize..5, st in 0usize..6, dg in 0usize..5, dt in 0usize..7,
    ) {
        let mut model = TabGroupManager::new();
        for op in &setup {
            apply(&mut model, op);
        }
        let moved = model.tab(sg, st).map(|t| t.location.clone());
        if let Some((g, t)) = model.reorder_tab(sg, st, dg, dt) {
            prop_assert_eq!(model.active_indices(), (g, t));
            prop_assert_eq!(model.tab(g, t).map(|t| t.location.clone()), moved);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4-5. Layout and hit-testing
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn layout_is_idempotent(
        ops in prop::collection::vec(op_strategy(), 0..40),
        width in 100i32..1600,
        auto in any::<bool>(),
    ) {
        let config = if auto { Config::default() } else { fixed_config() };
        let mut bar = bar_from_ops(&ops, &config, width);
        let first = bar.model().groups().to_vec();
        let height = bar.total_height();
        bar.layout();
        prop_assert_eq!(bar.model().groups(), first.as_slice());
        prop_assert_eq!(bar.total_height(), height);
    }

    #[test]
    fn tabs_sit_inside_their_group_in_order(
        ops in prop::collection::vec(op_strategy(), 0..40),
        width in 100i32..1600,
    ) {
        let bar = bar_from_ops(&ops, &Config::default(), width);
        let params = bar.layout_params();
        for group in bar.model().groups().iter().filter(|g| !g.is_empty()) {
            prop_assert_eq!(group.bounds.height(), params.row_height);
            let mut previous_right = group.bounds.left + params.handle_width;
            for tab in &group.tabs {
                prop_assert!(tab.bounds.left >= previous_right);
                prop_assert!(tab.bounds.right <= group.bounds.right);
                prop_assert_eq!(tab.bounds.top, group.bounds.top);
                prop_assert!(tab.bounds.width() >= params.min_tab_width);
                prop_assert!(tab.bounds.width() <= params.max_tab_width);
                previous_right = tab.bounds.right;
            }
        }
    }

    #[test]
    fn hit_test_agrees_with_rectangles(
        ops in prop::collection::vec(op_strategy(), 0..40),
        x in -20i32..1200,
        y in -20i32..200,
    ) {
        let bar = bar_from_ops(&ops, &fixed_config(), 1000);
        let pt = Point::new(x, y);
        let groups = bar.model().groups();
        match bar.hit_test(pt) {
            HitTarget::Tab { group, tab } => {
                prop_assert!(groups[group].tabs[tab].bounds.contains(pt));
            }
            HitTarget::GroupHandle { group } => {
                prop_assert!(groups[group].bounds.contains(pt));
                prop_assert!(groups[group].tabs.iter().all(|t| !t.bounds.contains(pt)));
            }
            HitTarget::None => {
                prop_assert!(groups
                    .iter()
                    .flat_map(|g| g.tabs.iter())
                    .all(|t| !t.bounds.contains(pt)));
            }
        }
        prop_assert_eq!(bar.hit_test(pt), bar.hit_test(pt));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 6. Pointer sequences
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pointer_sequences_preserve_invariants(
        setup in prop::collection::vec(op_strategy(), 1..20),
        events in prop::collection::vec(pointer_strategy(), 0..40),
    ) {
        let mut bar = bar_from_ops(&setup, &fixed_config(), 700);
        for event in events {
            match event {
                Pointer::Down(x, y) => {
                    bar.on_pointer_down(Point::new(x, y), Modifiers::empty());
                }
                Pointer::Move(x, y) => bar.on_pointer_move(Point::new(x, y)),
                Pointer::Up(x, y) => {
                    bar.on_pointer_up(Point::new(x, y));
                }
                Pointer::CaptureLost => bar.on_capture_lost(),
            }
            if let Err(violation) = check_invariants(bar.model()) {
                prop_assert!(false, "after {:?}: {}", event, violation);
            }
        }
    }
}
