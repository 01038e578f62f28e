//! Enemies, and the tint that shows one is under the cursor

use bevy::{prelude::*, reflect::GetTypeRegistration};

use aura_core::{interaction::Interactable, ControlSet};
use aura_physics::Collider;

/// enemies are square, this is half of a side
pub const ENEMY_HALF_SIZE: f32 = 24.;

pub const ENEMY_COLOR: Color = Color::rgb(0.6, 0.15, 0.15);
pub const ENEMY_HIGHLIGHT_COLOR: Color = Color::rgb(1., 0.45, 0.2);

#[derive(Clone, Copy, Component, Reflect, Debug, Default)]
#[reflect(Component)]
pub struct Enemy;

/// How an interactable is drawn normally, and while hovered
#[derive(Clone, Copy, Component, Reflect, Debug)]
#[reflect(Component)]
pub struct Outline {
    pub base: Color,
    pub highlight: Color,
    highlighted: bool,
}

impl Outline {
    #[must_use]
    pub fn new(base: Color, highlight: Color) -> Self {
        Self {
            base,
            highlight,
            highlighted: false,
        }
    }

    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    #[must_use]
    pub fn tint(&self) -> Color {
        if self.highlighted {
            self.highlight
        } else {
            self.base
        }
    }
}

impl Default for Outline {
    fn default() -> Self {
        Self::new(ENEMY_COLOR, ENEMY_HIGHLIGHT_COLOR)
    }
}

impl Interactable for Outline {
    fn highlight(&mut self) {
        self.highlighted = true;
    }

    fn unhighlight(&mut self) {
        self.highlighted = false;
    }
}

#[derive(Bundle)]
pub struct EnemyBundle {
    sprite: SpriteBundle,
    enemy: Enemy,
    outline: Outline,
    collider: Collider,
    name: Name,
}

impl EnemyBundle {
    pub fn new(name: impl Into<std::borrow::Cow<'static, str>>, position: Vec2) -> Self {
        let outline = Outline::default();

        Self {
            sprite: SpriteBundle {
                sprite: Sprite {
                    color: outline.tint(),
                    custom_size: Some(Vec2::splat(ENEMY_HALF_SIZE * 2.)),
                    ..default()
                },
                transform: Transform::from_translation(position.extend(1.)),
                ..default()
            },
            enemy: Enemy,
            outline,
            collider: Collider::block_all(Vec3::new(ENEMY_HALF_SIZE, ENEMY_HALF_SIZE, 0.5)),
            name: Name::new(name),
        }
    }
}

/// keep sprites tinted to match their outline
fn sync_outline_tint(mut outlines: Query<(&Outline, &mut Sprite), Changed<Outline>>) {
    for (outline, mut sprite) in &mut outlines {
        trace!("outline highlighted: {}", outline.is_highlighted());
        sprite.color = outline.tint();
    }
}

fn register_types(type_registry: Res<AppTypeRegistry>) {
    let mut type_registry_w = type_registry.write();

    type_registry_w.add_registration(Enemy::get_type_registration());
    type_registry_w.add_registration(Outline::get_type_registration());
}

pub struct Plugin;
impl bevy::prelude::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, register_types)
            .add_systems(Update, sync_outline_tint.in_set(ControlSet::Completed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_controllers::{cursor::CursorHit, HoverPlugin, HoverTracker};
    use aura_core::test_utils::DefaultTestPlugin;
    use aura_physics::Hit;

    fn notify(app: &mut App, entity: Entity, call: fn(&mut Outline)) {
        let mut outline = app.world.get_mut::<Outline>(entity).expect("spawned with an outline");
        call(&mut *outline);
    }

    #[test]
    fn highlight_tints_sprite() {
        let mut app = App::new();

        app.add_plugins(DefaultTestPlugin);
        app.add_plugins(Plugin);

        let base = Color::rgb(0.1, 0.1, 0.1);
        let highlight = Color::rgb(0.9, 0.9, 0.9);

        let enemy = app
            .world
            .spawn((
                Outline::new(base, highlight),
                Sprite {
                    color: base,
                    ..default()
                },
            ))
            .id();

        app.update();
        assert_eq!(app.world.get::<Sprite>(enemy).map(|s| s.color), Some(base));

        notify(&mut app, enemy, Outline::highlight);
        app.update();
        assert_eq!(
            app.world.get::<Sprite>(enemy).map(|s| s.color),
            Some(highlight)
        );

        // repeated calls don't flip anything back
        notify(&mut app, enemy, Outline::highlight);
        app.update();
        assert_eq!(
            app.world.get::<Sprite>(enemy).map(|s| s.color),
            Some(highlight)
        );

        notify(&mut app, enemy, Outline::unhighlight);
        app.update();
        assert_eq!(app.world.get::<Sprite>(enemy).map(|s| s.color), Some(base));
    }

    fn sprite_color(app: &App, entity: Entity) -> Option<Color> {
        app.world.get::<Sprite>(entity).map(|s| s.color)
    }

    fn cursor_over(app: &mut App, entity: Option<Entity>) {
        app.world.resource_mut::<CursorHit>().0 = entity.map(|data| Hit {
            data,
            point: Vec3::ZERO,
            distance: 1.,
        });
    }

    #[test]
    fn hovering_an_enemy_tints_it() {
        let mut app = App::new();

        app.add_plugins(DefaultTestPlugin);
        app.add_plugins((HoverPlugin::<Outline>::default(), Plugin));

        let enemy = app.world.spawn(EnemyBundle::new("Enemy", Vec2::ZERO)).id();
        let floor = app.world.spawn(Name::new("Floor")).id();

        app.update();
        assert_eq!(sprite_color(&app, enemy), Some(ENEMY_COLOR));

        cursor_over(&mut app, Some(enemy));
        app.update();
        assert_eq!(sprite_color(&app, enemy), Some(ENEMY_HIGHLIGHT_COLOR));
        assert_eq!(app.world.resource::<HoverTracker>().current(), Some(enemy));

        // the floor has no outline, so hovering it is hovering nothing
        cursor_over(&mut app, Some(floor));
        app.update();
        assert_eq!(sprite_color(&app, enemy), Some(ENEMY_COLOR));
        assert_eq!(app.world.resource::<HoverTracker>().current(), None);
    }
}
