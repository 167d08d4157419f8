// ============================================
// Camera - Камера от первого лица
// ============================================
// "Глупый" объект: каждый тик копирует глаза и взгляд игрока.

use ultraviolet::{Mat4, Vec3};

use super::player::Player;

pub struct Camera {
    pub position: Vec3,
    forward: Vec3,

    /// Параметры проекции
    pub aspect: f32,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 50.0, 0.0),
            forward: Vec3::new(1.0, 0.0, 0.0),
            aspect,
            fov: 75.0_f32.to_radians(),
            near: 0.1,
            far: 1000.0,
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Обновить камеру по игроку
    pub fn update_from_player(&mut self, player: &Player) {
        self.position = player.eye_position();
        self.forward = player.forward();
    }

    /// Матрица вида
    pub fn view_matrix(&self) -> Mat4 {
        let target = self.position + self.forward;
        Mat4::look_at(self.position, target, Vec3::unit_y())
    }

    /// Матрица проекции
    pub fn projection_matrix(&self) -> Mat4 {
        ultraviolet::projection::perspective_wgpu_dx(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
