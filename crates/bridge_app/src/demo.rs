//! Demo behaviours and the built-in scene they run in.

use bridge_math::Vector3;
use bridge_scene::Scene;
use bridge_script::{
    Behaviour, CameraComponent, EntityProxy, KeyCode, ScriptContext, SpriteRendererComponent,
    behaviour_variants,
};

/// Moves its entity with WASD. Holding shift doubles the speed.
#[derive(Debug)]
pub struct PlayerController {
    pub speed: f32,
    pub boosting: bool,
}

/// Keeps its camera centred on the entity named `target`.
#[derive(Debug)]
pub struct CameraFollow {
    pub target: String,
    pub base_size: f32,
}

#[derive(Debug)]
pub enum Demo {
    Player(PlayerController),
    Follow(CameraFollow),
}

behaviour_variants!(Demo {
    Player(PlayerController),
    Follow(CameraFollow),
});

impl Behaviour for Demo {
    fn on_create(&mut self, ctx: &mut ScriptContext<'_, Self>) {
        match self {
            Demo::Player(_) => {
                if let Some(sprite) = ctx.entity().add_component::<SpriteRendererComponent>() {
                    sprite.set_texture_path("assets/textures/player.png");
                }
                ctx.log().info("player ready");
            }
            Demo::Follow(follow) => {
                if ctx.find_entity_by_name(&follow.target).is_none() {
                    ctx.log().warning("camera target not found");
                }
            }
        }
    }

    fn on_update(&mut self, ctx: &mut ScriptContext<'_, Self>, ts: f32) {
        match self {
            Demo::Player(player) => player.update(ctx, ts),
            Demo::Follow(follow) => follow.update(ctx),
        }
    }
}

impl PlayerController {
    fn update(&mut self, ctx: &mut ScriptContext<'_, Demo>, ts: f32) {
        let input = ctx.input();
        let mut direction = Vector3::ZERO;
        if input.is_key_down(KeyCode::W) {
            direction.y += 1.0;
        }
        if input.is_key_down(KeyCode::S) {
            direction.y -= 1.0;
        }
        if input.is_key_down(KeyCode::A) {
            direction.x -= 1.0;
        }
        if input.is_key_down(KeyCode::D) {
            direction.x += 1.0;
        }
        self.boosting = input.is_key_down(KeyCode::LEFT_SHIFT);

        let speed = if self.boosting { self.speed * 2.0 } else { self.speed };
        let entity = ctx.entity();
        entity.set_translation(entity.translation() + direction * (speed * ts));
    }
}

impl CameraFollow {
    fn update(&mut self, ctx: &mut ScriptContext<'_, Demo>) {
        let Some(target) = ctx.find_entity_by_name(&self.target) else {
            return;
        };
        let camera = ctx.entity();
        let position = target.translation();
        camera.set_translation(Vector3::new(position.x, position.y, camera.translation().z));

        let boosting = ctx
            .behaviour_ref::<PlayerController>(&target)
            .is_some_and(|player| player.boosting);
        if let Some(lens) = camera.get_component::<CameraComponent>() {
            let size = if boosting { self.base_size * 1.5 } else { self.base_size };
            lens.set_orthographic_size(size);
        }
    }
}

/// The scene used when no scene file is given.
#[must_use]
pub fn default_scene() -> Scene {
    let scene = Scene::new("Demo");
    scene.create_entity("Player");
    let camera = scene.create_entity("Camera");
    if let Some(lens) = EntityProxy::bind(camera, &scene).add_component::<CameraComponent>() {
        lens.set_orthographic_size(10.0);
    }
    scene
}
