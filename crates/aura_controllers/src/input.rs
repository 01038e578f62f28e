//! Input mapping: which keys drive which actions
//!
//! Keys are bound to [`InputAction`]s by [`InputMappingContext`]s, which are stacked by priority
//! in [`InputMappingStack`]. Each frame the stack is evaluated against the held keys, and an
//! [`ActionEvent`] is sent for every action that is actuated.

use bevy_ecs::prelude::*;
use bevy_input::{keyboard::KeyCode, Input};
use bevy_log::prelude::*;
use bevy_math::prelude::*;
use bevy_reflect::prelude::*;
use bevy_utils::HashSet;

use crate::ControllerError;

/// Actions the player can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum InputAction {
    /// 2d movement. `y` is forward, `x` is right
    Move,
}

/// Binds one key to an action.
///
/// While `key` is held, `value` is added to the action's value for that frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyMapping {
    pub key: KeyCode,
    pub action: InputAction,
    pub value: Vec2,
}

/// A named set of key mappings that can be added and removed as a unit
#[derive(Debug, Clone, PartialEq)]
pub struct InputMappingContext {
    pub name: Box<str>,
    pub mappings: Vec<KeyMapping>,
}

impl InputMappingContext {
    #[must_use]
    pub fn new(name: impl Into<Box<str>>) -> Self {
        Self {
            name: name.into(),
            mappings: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_mapping(mut self, key: KeyCode, action: InputAction, value: Vec2) -> Self {
        self.mappings.push(KeyMapping { key, action, value });
        self
    }

    /// The default player context: WASD and the arrow keys move
    #[must_use]
    pub fn player() -> Self {
        Self::new("player")
            .with_mapping(KeyCode::W, InputAction::Move, Vec2::Y)
            .with_mapping(KeyCode::S, InputAction::Move, Vec2::NEG_Y)
            .with_mapping(KeyCode::A, InputAction::Move, Vec2::NEG_X)
            .with_mapping(KeyCode::D, InputAction::Move, Vec2::X)
            .with_mapping(KeyCode::Up, InputAction::Move, Vec2::Y)
            .with_mapping(KeyCode::Down, InputAction::Move, Vec2::NEG_Y)
            .with_mapping(KeyCode::Left, InputAction::Move, Vec2::NEG_X)
            .with_mapping(KeyCode::Right, InputAction::Move, Vec2::X)
    }
}

/// The active mapping contexts, highest priority first.
///
/// A key that is held and mapped in one context is consumed by it, and ignored by every context
/// of lower priority.
#[derive(Resource, Debug, Default)]
pub struct InputMappingStack {
    contexts: Vec<(i32, InputMappingContext)>,
}

impl InputMappingStack {
    /// Add `context` at `priority`. Contexts of equal priority are evaluated in the order they
    /// were added.
    ///
    /// # Errors
    /// Fails if a context with the same name has already been added.
    pub fn add_context(
        &mut self,
        context: InputMappingContext,
        priority: i32,
    ) -> Result<(), ControllerError> {
        if self.contains(&context.name) {
            return Err(ControllerError::DuplicateContext(context.name.into()));
        }

        let index = self.contexts.partition_point(|(p, _)| *p >= priority);
        self.contexts.insert(index, (priority, context));

        Ok(())
    }

    /// Remove the context named `name`, returning it if it was present
    pub fn remove_context(&mut self, name: &str) -> Option<InputMappingContext> {
        let index = self.contexts.iter().position(|(_, c)| &*c.name == name)?;

        Some(self.contexts.remove(index).1)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.contexts.iter().any(|(_, c)| &*c.name == name)
    }

    /// Evaluate every action against the keys for which `pressed` is true.
    ///
    /// Returns each actuated action once, with its summed value clamped to -1..=1 on each axis.
    #[must_use]
    pub fn evaluate(&self, pressed: impl Fn(KeyCode) -> bool) -> Vec<(InputAction, Vec2)> {
        let mut consumed: HashSet<KeyCode> = HashSet::default();
        let mut values: Vec<(InputAction, Vec2)> = Vec::new();

        for (_, context) in &self.contexts {
            let held: Vec<&KeyMapping> = context
                .mappings
                .iter()
                .filter(|m| !consumed.contains(&m.key) && pressed(m.key))
                .collect();

            for mapping in &held {
                match values.iter_mut().find(|(a, _)| *a == mapping.action) {
                    Some((_, value)) => *value += mapping.value,
                    None => values.push((mapping.action, mapping.value)),
                }
            }

            consumed.extend(held.iter().map(|m| m.key));
        }

        values
            .into_iter()
            .map(|(action, value)| (action, value.clamp(Vec2::NEG_ONE, Vec2::ONE)))
            .filter(|(_, value)| *value != Vec2::ZERO)
            .collect()
    }
}

/// Sent every frame an action is actuated
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ActionEvent {
    pub action: InputAction,
    pub value: Vec2,
}

/// The mapping context given to the player at startup.
///
/// Insert your own before adding [`crate::Plugin`] to rebind the player.
#[derive(Resource, Debug, Clone)]
pub struct PlayerInputConfig {
    pub context: Option<InputMappingContext>,
    pub priority: i32,
}

impl Default for PlayerInputConfig {
    fn default() -> Self {
        Self {
            context: Some(InputMappingContext::player()),
            priority: 0,
        }
    }
}

pub(super) fn add_player_context(
    config: Res<PlayerInputConfig>,
    mut stack: ResMut<InputMappingStack>,
) {
    let added = config
        .context
        .clone()
        .ok_or(ControllerError::MissingMappingContext)
        .and_then(|context| stack.add_context(context, config.priority));

    if let Err(e) = added {
        error!("{}", e);
    }
}

pub(super) fn evaluate_actions(
    keys: Res<Input<KeyCode>>,
    stack: Res<InputMappingStack>,
    mut actions: EventWriter<ActionEvent>,
) {
    for (action, value) in stack.evaluate(|key| keys.pressed(key)) {
        trace!("{:?} triggered with {}", action, value);
        actions.send(ActionEvent { action, value });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(keys: &'static [KeyCode]) -> impl Fn(KeyCode) -> bool {
        move |key| keys.contains(&key)
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut stack = InputMappingStack::default();
        stack
            .add_context(InputMappingContext::player(), 0)
            .expect("empty stack");

        assert!(stack.evaluate(held(&[KeyCode::A, KeyCode::D])).is_empty());
    }

    #[test]
    fn axes_sum_and_clamp() {
        let mut stack = InputMappingStack::default();
        stack
            .add_context(InputMappingContext::player(), 0)
            .expect("empty stack");

        let actions = stack.evaluate(held(&[KeyCode::W, KeyCode::Up, KeyCode::D]));

        assert_eq!(actions, vec![(InputAction::Move, Vec2::new(1., 1.))]);
    }

    #[test]
    fn higher_priority_consumes_keys() {
        let mut stack = InputMappingStack::default();
        stack
            .add_context(InputMappingContext::player(), 0)
            .expect("empty stack");
        // a context that flips W around, like an inverted-controls debuff
        stack
            .add_context(
                InputMappingContext::new("inverted").with_mapping(
                    KeyCode::W,
                    InputAction::Move,
                    Vec2::NEG_Y,
                ),
                10,
            )
            .expect("different name");

        let actions = stack.evaluate(held(&[KeyCode::W]));
        assert_eq!(actions, vec![(InputAction::Move, Vec2::NEG_Y)]);

        assert!(stack.remove_context("inverted").is_some());

        let actions = stack.evaluate(held(&[KeyCode::W]));
        assert_eq!(actions, vec![(InputAction::Move, Vec2::Y)]);
    }

    #[test]
    fn duplicate_context_is_rejected() {
        let mut stack = InputMappingStack::default();
        stack
            .add_context(InputMappingContext::player(), 0)
            .expect("empty stack");

        let err = stack
            .add_context(InputMappingContext::player(), 5)
            .expect_err("same name twice");

        assert_eq!(err, ControllerError::DuplicateContext("player".into()));
        assert!(stack.remove_context("missing").is_none());
    }

    #[test]
    fn nothing_held_nothing_triggered() {
        let mut stack = InputMappingStack::default();
        stack
            .add_context(InputMappingContext::player(), 0)
            .expect("empty stack");

        assert!(stack.evaluate(|_| false).is_empty());
    }
}
