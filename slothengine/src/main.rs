use glam::{Vec2, Vec3};
use log::{error, info};
use slothengine::{
    CameraKind, EngineConfig, Geometry, Light, MeshHandle, Node, NodeKind, Scene, TraversalOrder,
    UniformTable,
};

const FRAME_TIME: f32 = 1.0 / 60.0;

fn build_scene() -> slothengine::Result<Scene> {
    let config = EngineConfig::default()
        .with_camera(CameraKind::Target)
        .with_traversal(TraversalOrder::PreOrder)
        .with_orbit_speed(1.0);
    let mut scene = Scene::with_config(&config)?;

    let table = scene.create("table", NodeKind::Geometry(Geometry::new(MeshHandle(0))))?;
    let teapot = scene
        .graph_mut()
        .create_node("teapot", NodeKind::Geometry(Geometry::new(MeshHandle(1))))?;
    scene.graph_mut().add_child(table, teapot)?;
    if let Some(node) = scene.graph_mut().get_mut(teapot) {
        node.transform.set_position(Vec3::new(0.0, 1.0, 0.0));
    }

    let lamp = scene.create("lamp", NodeKind::Light(Light::point(Vec3::ONE, Vec3::ZERO)))?;
    if let Some(node) = scene.graph_mut().get_mut(lamp) {
        node.transform.set_position(Vec3::new(2.0, 4.0, 2.0));
    }
    scene.create("ambient", NodeKind::Light(Light::ambient(Vec3::splat(0.1))))?;

    let camera = scene.camera_mut();
    camera.set_position(Vec3::new(0.0, 2.0, 8.0));
    camera.setup_projection(60.0, 16.0 / 9.0, 0.1, 100.0)?;
    Ok(scene)
}

fn run() -> slothengine::Result<()> {
    let mut scene = build_scene()?;
    let mut uniforms = UniformTable::new();

    for frame in 0..3 {
        if let Some(target) = scene.camera_mut().as_target_mut() {
            target.orbit(Vec2::new(0.5, 0.0));
        }
        scene.update(FRAME_TIME)?;

        let mut names = Vec::new();
        scene.traverse(&mut |node: &Node| names.push(node.name().to_owned()));
        info!("frame {frame}: visited {names:?}");
        info!(
            "frame {frame}: camera at {} looking {}",
            scene.camera().position(),
            scene.camera().direction()
        );

        scene.pass_to_shader(&mut uniforms)?;
        info!(
            "frame {frame}: {} renderable(s), {} uniform(s), {} staged byte(s)",
            scene.renderables().len(),
            uniforms.len(),
            uniforms.staging_bytes().len()
        );
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        error!("{err}");
        std::process::exit(1);
    }
}
