use approx::assert_relative_eq;
use glam::DVec2;
use potku_recoil_editor::{
    AppCommand, AppController, AppIntent, AppState, Axis, EditorOptions, Element, RecoilKey,
};

/// Startet eine Sitzung mit einer Element-Simulation und der gegebenen Startkurve.
fn session(coords: &[[f64; 2]]) -> (AppController, AppState) {
    let options = EditorOptions {
        default_curve: coords.to_vec(),
        ..EditorOptions::default()
    };
    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ElementSimulationAddRequested {
                element: Element::new("He", Some(4)),
            },
        )
        .expect("Element-Simulation anlegen sollte funktionieren");
    (controller, state)
}

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

fn xs(state: &AppState) -> Vec<f64> {
    state.active_curve().expect("Kurve aktiv").xs()
}

#[test]
fn test_first_element_simulation_becomes_active() {
    let (controller, state) = session(&[[0.0, 1.0], [35.0, 1.0]]);

    let scene = controller.build_curve_scene(&state);

    assert!(scene.has_curve());
    assert_eq!(scene.points(), vec![[0.0, 1.0], [35.0, 1.0]]);
    assert_eq!(scene.recoil_name.as_deref(), Some("Default"));
    assert!(scene.can_remove_element_simulation);
}

#[test]
fn test_pick_miss_logs_no_command() {
    let (mut controller, mut state) = session(&[[0.0, 1.0], [35.0, 1.0]]);
    let logged_before = state.command_log.len();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointPickRequested {
            position: DVec2::new(17.0, 0.2),
        },
    );

    assert_eq!(state.command_log.len(), logged_before);
    assert!(state.selection.is_empty());
    assert!(state.drag.is_none());
}

#[test]
fn test_pick_selects_point_and_starts_drag() {
    let (mut controller, mut state) = session(&[[0.0, 1.0], [10.0, 0.5], [35.0, 1.0]]);

    send(
        &mut controller,
        &mut state,
        AppIntent::PointPickRequested {
            position: DVec2::new(10.1, 0.505),
        },
    );

    let scene = controller.build_curve_scene(&state);
    assert_eq!(scene.selected_xs, vec![10.0]);
    assert!(scene.dragging);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::BeginDrag { .. } => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_group_drag_is_clamped_at_right_neighbor() {
    let (mut controller, mut state) =
        session(&[[0.0, 1.0], [10.0, 0.5], [20.0, 0.5], [35.0, 1.0]]);

    send(
        &mut controller,
        &mut state,
        AppIntent::SpanSelectRequested {
            xmin: 5.0,
            xmax: 25.0,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointPickRequested {
            position: DVec2::new(10.0, 0.5),
        },
    );
    assert_eq!(state.selection.ids().len(), 2, "Gruppe bleibt selektiert");

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            position: DVec2::new(30.0, 0.5),
        },
    );
    send(&mut controller, &mut state, AppIntent::PointerReleased);

    let moved = xs(&state);
    assert_relative_eq!(moved[1], 24.99, epsilon = 1e-9);
    assert_relative_eq!(moved[2], 34.99, epsilon = 1e-9);
    assert!(state.drag.is_none());

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(xs(&state), vec![0.0, 10.0, 20.0, 35.0]);
}

#[test]
fn test_drag_y_is_floored() {
    let (mut controller, mut state) = session(&[[0.0, 1.0], [10.0, 0.5], [35.0, 1.0]]);

    send(
        &mut controller,
        &mut state,
        AppIntent::PointPickRequested {
            position: DVec2::new(10.0, 0.5),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            position: DVec2::new(10.0, -3.0),
        },
    );

    let y = state.active_curve().expect("Kurve").ys()[1];
    assert_relative_eq!(y, state.options.y_min, epsilon = 1e-12);
}

#[test]
fn test_x_entry_is_clamped_between_neighbors() {
    let (mut controller, mut state) = session(&[[0.0, 1.0], [10.0, 0.5], [35.0, 1.0]]);

    send(
        &mut controller,
        &mut state,
        AppIntent::SpanSelectRequested {
            xmin: 9.0,
            xmax: 11.0,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::CoordinateEntered {
            axis: Axis::X,
            value: 40.0,
        },
    );

    let scene = controller.build_curve_scene(&state);
    assert_relative_eq!(scene.xs[1], 34.99, epsilon = 1e-12);
    assert_eq!(scene.x_entry, Some(scene.xs[1]));
}

#[test]
fn test_multiply_and_undo_coordinate() {
    let (mut controller, mut state) = session(&[[0.0, 1.0], [10.0, 0.5], [35.0, 1.0]]);

    send(
        &mut controller,
        &mut state,
        AppIntent::SpanSelectRequested {
            xmin: 9.0,
            xmax: 11.0,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::ClipboardChanged {
            text: "2".to_string(),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::MultiplyCoordinateRequested { axis: Axis::X },
    );
    assert_relative_eq!(xs(&state)[1], 20.0, epsilon = 1e-12);
    assert!(controller.build_curve_scene(&state).can_undo_x);

    send(
        &mut controller,
        &mut state,
        AppIntent::UndoCoordinateRequested { axis: Axis::X },
    );
    assert_relative_eq!(xs(&state)[1], 10.0, epsilon = 1e-12);
    assert!(!controller.build_curve_scene(&state).can_undo_x);
}

#[test]
fn test_invalid_multiplier_is_reported_and_changes_nothing() {
    let (mut controller, mut state) = session(&[[0.0, 1.0], [10.0, 0.5], [35.0, 1.0]]);
    send(
        &mut controller,
        &mut state,
        AppIntent::SpanSelectRequested {
            xmin: 9.0,
            xmax: 11.0,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::ClipboardChanged {
            text: "zwei".to_string(),
        },
    );
    let before = state.simulation.clone();

    send(
        &mut controller,
        &mut state,
        AppIntent::MultiplyCoordinateRequested { axis: Axis::Y },
    );

    assert!(state.ui.last_error.is_some());
    assert_eq!(*state.simulation, *before);

    // Die Meldung gilt nur bis zum nächsten Intent
    send(&mut controller, &mut state, AppIntent::ClearSelectionRequested);
    assert!(state.ui.last_error.is_none());
}

#[test]
fn test_removing_below_two_points_is_rejected() {
    let (mut controller, mut state) = session(&[[0.0, 1.0], [35.0, 1.0]]);
    send(
        &mut controller,
        &mut state,
        AppIntent::SpanSelectRequested {
            xmin: 30.0,
            xmax: 40.0,
        },
    );

    send(
        &mut controller,
        &mut state,
        AppIntent::RemoveSelectedPointsRequested,
    );

    assert_eq!(xs(&state), vec![0.0, 35.0]);
    assert!(controller.build_curve_scene(&state).last_error.is_some());
}

#[test]
fn test_locked_last_point_keeps_x() {
    let (mut controller, mut state) = session(&[[0.0, 1.0], [35.0, 1.0]]);
    send(&mut controller, &mut state, AppIntent::EditLockRequested);
    send(
        &mut controller,
        &mut state,
        AppIntent::SpanSelectRequested {
            xmin: 30.0,
            xmax: 40.0,
        },
    );

    send(
        &mut controller,
        &mut state,
        AppIntent::CoordinateEntered {
            axis: Axis::X,
            value: 20.0,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::CoordinateEntered {
            axis: Axis::Y,
            value: 0.3,
        },
    );

    let scene = controller.build_curve_scene(&state);
    assert_eq!(scene.points(), vec![[0.0, 1.0], [35.0, 0.3]]);
    assert!(!scene.x_entry_enabled);

    send(&mut controller, &mut state, AppIntent::FullEditUnlockRequested);
    assert!(!state.edit_lock());
}

#[test]
fn test_extra_recoil_lifecycle() {
    let (mut controller, mut state) = session(&[[0.0, 1.0], [35.0, 1.0]]);
    let main = state.active_recoil.expect("Haupt-Element aktiv");

    send(
        &mut controller,
        &mut state,
        AppIntent::RecoilElementAddRequested {
            simulation_id: main.simulation_id,
        },
    );
    let extra = RecoilKey {
        simulation_id: main.simulation_id,
        recoil_id: main.recoil_id + 1,
    };
    send(
        &mut controller,
        &mut state,
        AppIntent::RecoilChosen { key: extra },
    );
    assert_eq!(state.active_recoil, Some(extra));

    // Entfernen der Element-Simulation nur bei aktivem Haupt-Element
    send(
        &mut controller,
        &mut state,
        AppIntent::ElementSimulationRemoveRequested,
    );
    assert_eq!(state.simulation.len(), 1);

    send(
        &mut controller,
        &mut state,
        AppIntent::RecoilElementRemoveRequested { key: extra },
    );
    assert_eq!(state.active_recoil, Some(main));

    send(
        &mut controller,
        &mut state,
        AppIntent::ElementSimulationRemoveRequested,
    );
    assert!(state.simulation.is_empty());
    assert!(!controller.build_curve_scene(&state).has_curve());
}

#[test]
fn test_options_change_without_path_is_session_only() {
    let (mut controller, mut state) = session(&[[0.0, 1.0], [35.0, 1.0]]);
    let options = EditorOptions {
        x_res: 0.5,
        ..state.options.clone()
    };

    send(
        &mut controller,
        &mut state,
        AppIntent::OptionsChanged {
            options: options.clone(),
        },
    );
    assert_eq!(state.options, options);
    assert_relative_eq!(state.limits().x_res, 0.5);

    send(&mut controller, &mut state, AppIntent::ResetOptionsRequested);
    assert_eq!(state.options, EditorOptions::default());
}

#[test]
fn test_start_curve_outside_limits_falls_back_to_default() {
    let (controller, state) = session(&[[-1.0, 0.0], [-0.999, 0.0]]);

    let scene = controller.build_curve_scene(&state);

    assert_eq!(scene.points(), vec![[0.0, 1.0], [35.0, 1.0]]);
}

#[test]
fn test_coarser_resolution_than_curve_spacing_is_rejected() {
    let (mut controller, mut state) = session(&[[0.0, 1.0], [35.0, 1.0]]);
    send(
        &mut controller,
        &mut state,
        AppIntent::PointAddRequested {
            position: DVec2::new(1.0, 1.0),
        },
    );
    send(&mut controller, &mut state, AppIntent::PointerReleased);
    assert_eq!(xs(&state), vec![0.0, 1.0, 35.0]);
    let options_before = state.options.clone();

    send(
        &mut controller,
        &mut state,
        AppIntent::OptionsChanged {
            options: EditorOptions {
                x_res: 5.0,
                ..options_before.clone()
            },
        },
    );

    assert!(state.ui.last_error.is_some());
    assert_eq!(state.options, options_before);
    assert_eq!(xs(&state), vec![0.0, 1.0, 35.0]);
}

#[test]
fn test_ctrl_click_with_selection_is_one_undo_step() {
    let (mut controller, mut state) = session(&[[0.0, 1.0], [35.0, 1.0]]);
    send(
        &mut controller,
        &mut state,
        AppIntent::SpanSelectRequested {
            xmin: 30.0,
            xmax: 40.0,
        },
    );
    let selected_before = state.selection.ids();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointAddRequested {
            position: DVec2::new(10.0, 1.0),
        },
    );
    send(&mut controller, &mut state, AppIntent::PointerReleased);
    assert_eq!(xs(&state), vec![0.0, 10.0, 35.0]);

    send(&mut controller, &mut state, AppIntent::UndoRequested);

    assert_eq!(xs(&state), vec![0.0, 35.0]);
    assert_eq!(state.selection.ids(), selected_before);

    // Der verbleibende Schritt ist die Span-Selektion
    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(state.selection.is_empty());
    assert_eq!(xs(&state), vec![0.0, 35.0]);
}

#[test]
fn test_multiply_undo_waits_while_last_x_is_locked() {
    let (mut controller, mut state) = session(&[[0.0, 1.0], [10.0, 0.5], [35.0, 1.0]]);
    send(
        &mut controller,
        &mut state,
        AppIntent::ClipboardChanged {
            text: "0.5".to_string(),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::SpanSelectRequested {
            xmin: 30.0,
            xmax: 40.0,
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::MultiplyCoordinateRequested { axis: Axis::X },
    );
    assert_relative_eq!(xs(&state)[2], 17.5, epsilon = 1e-12);

    send(&mut controller, &mut state, AppIntent::EditLockRequested);
    send(
        &mut controller,
        &mut state,
        AppIntent::UndoCoordinateRequested { axis: Axis::X },
    );
    assert_relative_eq!(xs(&state)[2], 17.5, epsilon = 1e-12);

    send(&mut controller, &mut state, AppIntent::FullEditUnlockRequested);
    assert!(controller.build_curve_scene(&state).can_undo_x);
    send(
        &mut controller,
        &mut state,
        AppIntent::UndoCoordinateRequested { axis: Axis::X },
    );
    assert_relative_eq!(xs(&state)[2], 35.0, epsilon = 1e-12);
}
