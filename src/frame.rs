use instant::Instant;
use std::time::Duration;

use sphereanim_core::{
    draw_bounding_box, draw_grid, AxisGizmo, Camera, Color, Renderer, Scene,
    CONNECTION_THRESHOLD, MAX_POS, MIN_POS, SPHERE_COUNT,
};

use crate::constants::*;
use crate::input::KeyAction;
use crate::overlay::{self, FpsCounter};
use crate::pacing::FramePacer;
use crate::render::{FrameBatch, GpuState};

/// Everything the event loop mutates between frames.
pub struct FrameContext {
    pub scene: Scene,
    pub camera: Camera,
    pub show_grid: bool,
    pub show_box: bool,
    pub gizmo: AxisGizmo,

    batch: FrameBatch,
    pacer: FramePacer,
    fps: FpsCounter,
    last_instant: Instant,
}

impl FrameContext {
    pub fn new(now: Instant) -> Self {
        let pacer = FramePacer::new(TARGET_FPS, now);
        log::info!(
            "[frame] pacing at {} FPS ({:?} per frame)",
            TARGET_FPS,
            pacer.interval()
        );
        Self {
            scene: Scene::new(SPHERE_COUNT, CONNECTION_THRESHOLD),
            camera: Camera::default(),
            show_grid: false,
            show_box: false,
            gizmo: AxisGizmo::default(),
            batch: FrameBatch::default(),
            pacer,
            fps: FpsCounter::new(Duration::from_secs_f32(FPS_AVERAGE_SEC)),
            last_instant: now,
        }
    }

    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Orbit { axis, degrees } => self.camera.orbit(axis, degrees),
            KeyAction::Dolly(delta) => self.camera.dolly_z(delta),
            KeyAction::ResetCamera => {
                self.camera = Camera::default();
                log::info!("[keys] camera reset");
            }
            KeyAction::ToggleGrid => {
                self.show_grid = !self.show_grid;
                log::info!("[keys] grid={}", self.show_grid);
            }
            KeyAction::ToggleBox => {
                self.show_box = !self.show_box;
                log::info!("[keys] box={}", self.show_box);
            }
        }
    }

    #[inline]
    pub fn frame_due(&self, now: Instant) -> bool {
        self.pacer.due(now)
    }

    #[inline]
    pub fn next_deadline(&self) -> Instant {
        self.pacer.deadline()
    }

    /// Step the simulation once and present the result.
    pub fn frame(&mut self, now: Instant, gpu: &mut GpuState) -> Result<(), wgpu::SurfaceError> {
        let dt = now - self.last_instant;
        self.last_instant = now;
        self.pacer.advance(now);

        self.scene.update();

        self.batch.clear();
        self.draw_world();
        let result = gpu.render(self.camera.view_projection(gpu.aspect()), &self.batch);

        if self.fps.tick(dt) {
            let title = overlay::hud_title(
                WINDOW_TITLE,
                self.fps.fps(),
                self.camera.position,
                self.show_grid,
                self.show_box,
            );
            gpu.window().set_title(&title);
        }
        result
    }

    fn draw_world(&mut self) {
        let batch = &mut self.batch;
        self.scene.draw(batch);
        if self.show_grid {
            draw_grid(batch, GRID_SLICES, GRID_SPACING);
            self.gizmo.draw(batch);
            batch.draw_sphere(self.camera.target, MARKER_RADIUS, Color::ORANGE);
        }
        if self.show_box {
            draw_bounding_box(batch, MIN_POS, MAX_POS, Color::YELLOW);
            batch.draw_sphere(MIN_POS, MARKER_RADIUS, Color::GREEN);
            batch.draw_sphere(MAX_POS, MARKER_RADIUS, Color::RED);
        }
    }
}
