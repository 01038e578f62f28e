//! Tests for core and its testing plugin

use bevy_app::prelude::*;
use bevy_ecs::prelude::*;
use bevy_math::Vec3;

use crate::goals::MovementInput;
use crate::test_utils::DefaultTestPlugin;
use crate::ControlSet;

#[test]
fn movement_input_accumulates_then_consumes() {
    let mut input = MovementInput::default();

    input.add(Vec3::Y, 0.5);
    input.add(Vec3::X, -1.);

    assert_eq!(*input, Vec3::new(-1., 0.5, 0.));

    let taken = input.consume();

    assert_eq!(taken, Vec3::new(-1., 0.5, 0.));
    assert_eq!(*input, Vec3::ZERO);
}

#[derive(Resource, Default)]
struct Order(Vec<ControlSet>);

#[test]
fn control_sets_run_in_order() {
    let mut app = App::new();

    app.add_plugins(DefaultTestPlugin);
    app.init_resource::<Order>();

    // registered in reverse so only the set chain can put them in order
    app.add_systems(
        Update,
        (
            (|mut o: ResMut<Order>| o.0.push(ControlSet::Completed)).in_set(ControlSet::Completed),
            (|mut o: ResMut<Order>| o.0.push(ControlSet::Highlight)).in_set(ControlSet::Highlight),
            (|mut o: ResMut<Order>| o.0.push(ControlSet::Trace)).in_set(ControlSet::Trace),
            (|mut o: ResMut<Order>| o.0.push(ControlSet::Movement)).in_set(ControlSet::Movement),
            (|mut o: ResMut<Order>| o.0.push(ControlSet::Input)).in_set(ControlSet::Input),
        ),
    );

    app.update();

    assert_eq!(
        app.world.resource::<Order>().0,
        vec![
            ControlSet::Input,
            ControlSet::Movement,
            ControlSet::Trace,
            ControlSet::Highlight,
            ControlSet::Completed,
        ]
    );
}
