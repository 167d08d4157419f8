// ============================================
// Headless Renderer - Сцена без GPU
// ============================================
// Хранит то же состояние, что получил бы настоящий рендерер.
// Используется хостом без окна и в тестах.

use std::collections::HashMap;

use log::debug;
use ultraviolet::{Mat4, Vec3};

use crate::game::blocks::BlockType;

use super::{Drawable, DrawableId, InstanceTransform, Renderer};

/// Зеркало объекта сцены
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneNode {
    pub position: Vec3,
    pub yaw: f32,
}

#[derive(Default)]
pub struct HeadlessRenderer {
    nodes: HashMap<DrawableId, SceneNode>,
    instances: HashMap<BlockType, Vec<InstanceTransform>>,
    instance_updates: u64,
    camera: Option<Mat4>,
    frames: u64,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: DrawableId) -> bool {
        self.nodes.contains_key(&id) || matches!(id, DrawableId::Batch(b) if self.instances.contains_key(&b))
    }

    pub fn node(&self, id: DrawableId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    pub fn instance(&self, block: BlockType, index: usize) -> Option<InstanceTransform> {
        self.instances.get(&block)?.get(index).copied()
    }

    /// Сколько инстансов батча реально рисуется
    pub fn drawn_instances(&self, block: BlockType) -> usize {
        self.instances
            .get(&block)
            .map_or(0, |list| list.iter().filter(|t| !t.is_hidden()).count())
    }

    pub fn instance_updates(&self) -> u64 {
        self.instance_updates
    }

    /// Последняя полученная матрица камеры
    pub fn camera(&self) -> Option<Mat4> {
        self.camera
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for HeadlessRenderer {
    fn add_drawable(&mut self, id: DrawableId, drawable: Drawable<'_>) {
        match drawable {
            Drawable::Batch(batch) => {
                debug!(
                    "Batch {}: {} instances, color {:?}, transparent {}",
                    batch.material.name,
                    batch.len(),
                    batch.material.color.to_rgb(),
                    batch.material.is_transparent()
                );
                let transforms = (0..batch.len()).filter_map(|i| batch.transform(i)).collect();
                self.instances.insert(batch.block, transforms);
            }
            Drawable::Actor { position, yaw, .. } => {
                self.nodes.insert(id, SceneNode { position, yaw });
            }
            Drawable::PowerUp { position } | Drawable::PowerUpOrb { position } => {
                self.nodes.insert(id, SceneNode { position, yaw: 0.0 });
            }
        }
    }

    fn remove_drawable(&mut self, id: DrawableId) {
        match id {
            DrawableId::Batch(block) => {
                self.instances.remove(&block);
            }
            _ => {
                self.nodes.remove(&id);
            }
        }
    }

    fn set_instance_transform(&mut self, block: BlockType, index: usize, transform: InstanceTransform) {
        if let Some(slot) = self.instances.get_mut(&block).and_then(|list| list.get_mut(index)) {
            *slot = transform;
            self.instance_updates += 1;
        }
    }

    fn set_drawable_transform(&mut self, id: DrawableId, position: Vec3, yaw: f32) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.position = position;
            node.yaw = yaw;
        }
    }

    fn set_camera(&mut self, view_projection: Mat4) {
        self.camera = Some(view_projection);
    }

    fn render(&mut self) {
        self.frames += 1;
        if self.frames % 60 == 0 {
            let drawn: usize = BlockType::ALL.iter().map(|b| self.drawn_instances(*b)).sum();
            debug!(
                "Frame {}: {} instances drawn, {} objects, {} instance updates total",
                self.frames,
                drawn,
                self.nodes.len(),
                self.instance_updates
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::actor::ActorKind;
    use crate::game::blocks::block_definition;
    use crate::game::render::InstancedBatch;
    use crate::game::terrain::BlockPos;

    #[test]
    fn tracks_batches_and_nodes() {
        let batch = InstancedBatch::new(
            BlockType::Dirt,
            vec![BlockPos::new(0, 0, 0), BlockPos::new(1, 0, 0)],
            block_definition(BlockType::Dirt),
        );
        let mut renderer = HeadlessRenderer::new();
        renderer.add_drawable(DrawableId::Batch(BlockType::Dirt), Drawable::Batch(&batch));
        renderer.add_drawable(
            DrawableId::Player,
            Drawable::Actor { kind: ActorKind::Player, position: Vec3::zero(), yaw: 0.0 },
        );
        assert_eq!(renderer.drawn_instances(BlockType::Dirt), 2);

        renderer.set_instance_transform(BlockType::Dirt, 1, InstanceTransform::HIDDEN);
        assert_eq!(renderer.drawn_instances(BlockType::Dirt), 1);
        assert_eq!(renderer.instance_updates(), 1);

        renderer.set_drawable_transform(DrawableId::Player, Vec3::new(1.0, 2.0, 3.0), 0.5);
        assert_eq!(renderer.node(DrawableId::Player).map(|n| n.yaw), Some(0.5));

        renderer.remove_drawable(DrawableId::Player);
        assert!(!renderer.contains(DrawableId::Player));
        assert!(renderer.contains(DrawableId::Batch(BlockType::Dirt)));
    }
}
