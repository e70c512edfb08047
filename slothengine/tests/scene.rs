use glam::{Mat4, Vec3};
use slothengine::{
    Camera, Depth, DepthFirst, Error, GraphTraversal, Light, Node, NodeId, NodeKind, PreOrder,
    Scene, SceneGraph, UniformTable, UniformValue,
};

fn names(graph: &SceneGraph, ids: &[NodeId]) -> Vec<String> {
    ids.iter()
        .map(|&id| graph.get(id).unwrap().name().to_owned())
        .collect()
}

fn visit(
    traversal: &dyn GraphTraversal,
    graph: &SceneGraph,
    root: NodeId,
    depth: Depth,
) -> Vec<NodeId> {
    let mut visited = Vec::new();
    traversal.traverse_to_depth(
        graph,
        Some(root),
        &mut |node: &Node| visited.push(node.id()),
        depth,
    );
    visited
}

/// Three children per node, four levels deep (40 nodes).
fn wide_tree() -> (SceneGraph, NodeId) {
    let mut graph = SceneGraph::new();
    let root = graph.create_node("n", NodeKind::Group).unwrap();
    let mut frontier = vec![root];
    for _ in 0..3 {
        let mut next = Vec::new();
        for parent in frontier {
            for index in 0..3 {
                let name = format!("{}-{index}", graph.get(parent).unwrap().name());
                let child = graph.create_node(name, NodeKind::Group).unwrap();
                graph.add_child(parent, child).unwrap();
                next.push(child);
            }
        }
        frontier = next;
    }
    (graph, root)
}

#[test]
fn documented_tree_orders() {
    let mut graph = SceneGraph::new();
    let a = graph.create_node("A", NodeKind::Group).unwrap();
    let b = graph.create_node("B", NodeKind::Group).unwrap();
    let c = graph.create_node("C", NodeKind::Group).unwrap();
    let d = graph.create_node("D", NodeKind::Group).unwrap();
    graph.add_child(a, b).unwrap();
    graph.add_child(a, c).unwrap();
    graph.add_child(b, d).unwrap();

    let pre = visit(&PreOrder, &graph, a, Depth::Unbounded);
    assert_eq!(names(&graph, &pre), ["A", "B", "D", "C"]);

    let post = visit(&DepthFirst, &graph, a, Depth::Unbounded);
    assert_eq!(names(&graph, &post), ["D", "B", "C", "A"]);
}

#[test]
fn zero_depth_never_visits() {
    let (graph, root) = wide_tree();
    assert_eq!(graph.len(), 40);
    assert!(visit(&PreOrder, &graph, root, Depth::Limited(0)).is_empty());
    assert!(visit(&DepthFirst, &graph, root, Depth::Limited(0)).is_empty());
}

#[test]
fn depth_bound_holds_on_every_branch() {
    let (graph, root) = wide_tree();
    for limit in 0..6u32 {
        let expected = graph
            .iter()
            .filter(|node| graph.depth(node.id()).unwrap() < limit as usize)
            .count();
        let traversals: [&dyn GraphTraversal; 2] = [&PreOrder, &DepthFirst];
        for traversal in traversals {
            let visited = visit(traversal, &graph, root, Depth::Limited(limit));
            assert_eq!(visited.len(), expected, "limit {limit}");
            assert!(
                visited
                    .iter()
                    .all(|&id| graph.depth(id).unwrap() < limit as usize)
            );
        }
    }
}

#[test]
fn order_relative_to_descendants() {
    let (graph, root) = wide_tree();
    let pre = visit(&PreOrder, &graph, root, Depth::Unbounded);
    let post = visit(&DepthFirst, &graph, root, Depth::Unbounded);
    let position = |order: &[NodeId], id: NodeId| order.iter().position(|&x| x == id).unwrap();

    for node in graph.iter() {
        for ancestor in graph.ancestors(node.id()) {
            assert!(position(&pre, ancestor) < position(&pre, node.id()));
            assert!(position(&post, ancestor) > position(&post, node.id()));
        }
    }
    assert_eq!(pre.len(), graph.len());
    assert_eq!(post.len(), graph.len());
}

#[test]
fn duplicate_child_name_fails() {
    let mut scene = Scene::new();
    let parent = scene.create("parent", NodeKind::Group).unwrap();
    let graph = scene.graph_mut();
    let first = graph.create_node("x", NodeKind::Group).unwrap();
    let second = graph.create_node("x", NodeKind::Group).unwrap();
    graph.add_child(parent, first).unwrap();

    assert!(matches!(
        graph.add_child(parent, second),
        Err(Error::DuplicateName { name, .. }) if name == "x"
    ));
}

#[test]
fn target_camera_scenario() {
    let mut camera = Camera::target(Vec3::ZERO);
    camera.set_position(Vec3::new(0.0, 0.0, 5.0));
    camera.set_up(Vec3::Y);
    camera.update(1.0 / 60.0).unwrap();

    assert!(camera.direction().abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-5));
    assert!(camera.right().abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), 1e-5));
    assert!(camera.derived_up().abs_diff_eq(Vec3::new(0.0, 1.0, 0.0), 1e-5));

    // The world origin ends up five units in front of the camera.
    let origin = camera.view_matrix().transform_point3(Vec3::ZERO);
    assert!(origin.abs_diff_eq(Vec3::new(0.0, 0.0, -5.0), 1e-5));
}

#[test]
fn projection_is_recomputed_only_on_change() {
    let mut camera = Camera::default();
    let revision = camera.projection().revision();

    assert!(camera.setup_projection(60.0, 1.5, 0.1, 300.0).unwrap());
    let matrix = camera.projection_matrix();
    assert!(!camera.setup_projection(60.0, 1.5, 0.1, 300.0).unwrap());

    assert_eq!(camera.projection().revision(), revision + 1);
    assert_eq!(camera.projection_matrix(), matrix);
    assert_ne!(matrix, Mat4::IDENTITY);
}

#[test]
fn full_frame() {
    let mut scene = Scene::new();
    let mut camera = Camera::target(Vec3::ZERO);
    camera.set_position(Vec3::new(4.0, 3.0, 4.0));
    scene.set_camera(camera);

    let lamp = scene
        .create("lamp", NodeKind::Light(Light::point(Vec3::ONE, Vec3::ZERO)))
        .unwrap();
    scene
        .graph_mut()
        .get_mut(lamp)
        .unwrap()
        .transform
        .set_position(Vec3::new(1.0, 2.0, 3.0));
    scene.update(1.0 / 60.0).unwrap();

    let mut uniforms = UniformTable::new();
    scene.pass_to_shader(&mut uniforms).unwrap();
    assert_eq!(uniforms.get("sl_light_count"), Some(UniformValue::Int(1)));
    assert_eq!(
        uniforms.get("sl_lights[0].position"),
        Some(UniformValue::Vec3(Vec3::new(1.0, 2.0, 3.0)))
    );
    assert_eq!(
        uniforms.get("sl_view"),
        Some(UniformValue::Mat4(scene.camera().view_matrix()))
    );

    scene.graph_mut().destroy(lamp).unwrap();
    let mut uniforms = UniformTable::new();
    scene.pass_to_shader(&mut uniforms).unwrap();
    assert_eq!(uniforms.get("sl_light_count"), Some(UniformValue::Int(0)));
}
