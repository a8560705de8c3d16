//! Player plugin.
//!
//! Pipeline:
//! - Update: claim singleton → sample input → facing → dash gate → shoot gate → cooldowns
//! - FixedUpdate: step the dash state machine, otherwise apply normal movement
//! - PostUpdate: turn the player's `Died` into `PlayerDied`
//!
//! There is exactly one player. The first `Player` entity is recorded in
//! `PlayerEntity`; any later one is despawned. Other systems reach the player
//! through that handle rather than scanning for it.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{config::PlayerConfig, layers::Layer, state::GameState};
use crate::plugins::combat::{CombatSystems, Died, Health};
use crate::plugins::projectiles::components::ProjectileTemplate;
use crate::plugins::projectiles::messages::SpawnProjectile;

pub mod dash;
pub mod input;

use dash::{Dash, DashStep};
use input::{Aim, PlayerInput};

/// Below this squared length a movement axis counts as "no input".
const MOVE_DEADZONE_SQ: f32 = 0.01;

/// Below this squared distance the cursor sits on the muzzle and there is no aim.
const AIM_DEADZONE_SQ: f32 = 1e-10;

#[derive(Component)]
pub struct Player;

/// Handle to the one live player, if spawned.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerEntity(pub Option<Entity>);

/// Last nonzero movement direction (unit length).
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Facing(pub Vec2);

impl Default for Facing {
    fn default() -> Self {
        Self(Vec2::X)
    }
}

/// Projectile spawn offset from the player's position.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Muzzle {
    pub offset: Vec2,
}

/// Countdown in seconds that never goes below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cooldown(f32);

impl Cooldown {
    #[inline]
    pub fn remaining(self) -> f32 {
        self.0
    }
    #[inline]
    pub fn is_ready(self) -> bool {
        self.0 <= 0.0
    }
    #[inline]
    pub fn arm(&mut self, secs: f32) {
        self.0 = secs.max(0.0);
    }
    #[inline]
    pub fn tick(&mut self, dt: f32) {
        self.0 = (self.0 - dt).max(0.0);
    }
}

#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Cooldowns {
    pub dash: Cooldown,
    pub shoot: Cooldown,
}

/// Game-over hook: written once when the player's health reaches zero.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerDied {
    pub entity: Entity,
}

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSystems {
    Input,
    Act,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<PlayerInput>()
        .init_resource::<Aim>()
        .init_resource::<PlayerEntity>()
        .add_message::<PlayerDied>()
        .add_systems(OnEnter(GameState::InGame), spawn)
        .configure_sets(Update, PlayerSystems::Input.before(PlayerSystems::Act))
        .add_systems(
            Update,
            (claim_player_singleton, input::gather_input, input::update_aim)
                .in_set(PlayerSystems::Input),
        )
        .add_systems(
            Update,
            (track_facing, handle_dash_request, handle_shoot, tick_cooldowns)
                .chain()
                .in_set(PlayerSystems::Act)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(FixedUpdate, drive_player_body.run_if(in_state(GameState::InGame)))
        .add_systems(PostUpdate, report_player_death.after(CombatSystems::ApplyHits));
}

#[inline]
fn config_or_default(config: Option<Res<PlayerConfig>>) -> PlayerConfig {
    config.map(|c| *c).unwrap_or_default()
}

fn spawn(mut commands: Commands, config: Option<Res<PlayerConfig>>) {
    let config = config_or_default(config);
    let layers = CollisionLayers::new(
        Layer::Player,
        [Layer::World, Layer::Enemy, Layer::EnemyBullet],
    );

    commands.spawn((
        Name::new("Player"),
        Player,
        Health::new(config.max_hp),
        Facing::default(),
        Dash::default(),
        Cooldowns::default(),
        Muzzle { offset: Vec2::ZERO },
        Sprite {
            color: Color::srgb(0.2, 0.75, 0.9),
            custom_size: Some(Vec2::splat(0.8)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
        RigidBody::Kinematic,
        Collider::circle(0.4),
        layers,
        LinearVelocity::ZERO,
        TranslationInterpolation,
        DespawnOnExit(GameState::InGame),
    ));
}

fn claim_player_singleton(
    mut commands: Commands,
    mut handle: ResMut<PlayerEntity>,
    q_new: Query<Entity, Added<Player>>,
    q_live: Query<(), With<Player>>,
) {
    if handle.0.is_some_and(|e| !q_live.contains(e)) {
        handle.0 = None;
    }

    let mut fresh: Vec<Entity> = q_new.iter().collect();
    fresh.sort();

    for e in fresh {
        match handle.0 {
            None => handle.0 = Some(e),
            Some(owner) if owner == e => {}
            Some(owner) => {
                warn!("Rejecting duplicate player {e}; {owner} is already the player");
                commands.entity(e).despawn();
            }
        }
    }
}

fn track_facing(input: Res<PlayerInput>, mut q_player: Query<&mut Facing, With<Player>>) {
    let Ok(mut facing) = q_player.single_mut() else {
        return;
    };

    if input.move_axis.length_squared() > MOVE_DEADZONE_SQ {
        facing.0 = input.move_axis.normalize();
    }
}

fn handle_dash_request(
    config: Option<Res<PlayerConfig>>,
    input: Res<PlayerInput>,
    mut q_player: Query<(&Facing, &Cooldowns, &mut Dash, &mut LinearVelocity), With<Player>>,
) {
    if !input.dash_pressed {
        return;
    }

    let Ok((facing, cooldowns, mut dash, mut vel)) = q_player.single_mut() else {
        return;
    };

    if dash.is_dashing() || !cooldowns.dash.is_ready() {
        return;
    }

    let direction = if input.move_axis.length_squared() > MOVE_DEADZONE_SQ {
        input.move_axis.normalize()
    } else {
        facing.0
    };
    if direction.length_squared() <= MOVE_DEADZONE_SQ {
        return;
    }

    let config = config_or_default(config);
    dash.begin(direction, config.dash_distance, config.dash_duration);
    vel.0 = Vec2::ZERO;
}

fn handle_shoot(
    config: Option<Res<PlayerConfig>>,
    template: Option<Res<ProjectileTemplate>>,
    input: Res<PlayerInput>,
    aim: Res<Aim>,
    mut q_player: Query<(Entity, &Transform, Option<&Muzzle>, &mut Cooldowns), With<Player>>,
    mut writer: MessageWriter<SpawnProjectile>,
) {
    if !input.fire_held || template.is_none() {
        return;
    }

    let Ok((player_e, tf, muzzle, mut cooldowns)) = q_player.single_mut() else {
        return;
    };

    if !cooldowns.shoot.is_ready() {
        return;
    }

    let Some(target) = aim.world_cursor else {
        debug!("Fire held without an aim point");
        return;
    };

    let origin = tf.translation.truncate() + muzzle.map_or(Vec2::ZERO, |m| m.offset);
    let offset = target - origin;
    if offset.length_squared() < AIM_DEADZONE_SQ {
        return;
    }

    writer.write(SpawnProjectile {
        origin,
        direction: offset.normalize(),
        owner: Some(player_e),
    });

    cooldowns.shoot.arm(config_or_default(config).shoot_cooldown);
}

fn tick_cooldowns(time: Res<Time>, mut q_player: Query<&mut Cooldowns, With<Player>>) {
    let dt = time.delta_secs();
    for mut cooldowns in &mut q_player {
        cooldowns.dash.tick(dt);
        cooldowns.shoot.tick(dt);
    }
}

fn drive_player_body(
    time: Res<Time<Fixed>>,
    config: Option<Res<PlayerConfig>>,
    input: Res<PlayerInput>,
    mut q_player: Query<(&mut Dash, &mut Cooldowns, &mut LinearVelocity), With<Player>>,
) {
    let Ok((mut dash, mut cooldowns, mut vel)) = q_player.single_mut() else {
        return;
    };
    let config = config_or_default(config);

    match dash.step(time.delta_secs()) {
        DashStep::Moving(v) => vel.0 = v,
        DashStep::Finished => {
            vel.0 = Vec2::ZERO;
            cooldowns.dash.arm(config.dash_cooldown);
        }
        DashStep::Idle => vel.0 = input.move_axis.normalize_or_zero() * config.move_speed,
    }
}

fn report_player_death(
    handle: Res<PlayerEntity>,
    mut died: MessageReader<Died>,
    mut writer: MessageWriter<PlayerDied>,
) {
    let Some(player) = handle.0 else {
        died.clear();
        return;
    };

    for d in died.read().filter(|d| d.entity == player) {
        info!("Player has died.");
        writer.write(PlayerDied { entity: d.entity });
    }
}
