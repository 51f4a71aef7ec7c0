use glam::Vec3;
use std::time::Duration;

/// Frames-per-second readout averaged over a fixed window.
#[derive(Clone, Debug)]
pub struct FpsCounter {
    window: Duration,
    elapsed: Duration,
    frames: u32,
    fps: u32,
}

impl FpsCounter {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            elapsed: Duration::ZERO,
            frames: 0,
            fps: 0,
        }
    }

    /// Count one frame. Returns true when the averaged value was refreshed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.frames += 1;
        self.elapsed += dt;
        if self.elapsed < self.window {
            return false;
        }
        self.fps = (self.frames as f32 / self.elapsed.as_secs_f32()).round() as u32;
        self.frames = 0;
        self.elapsed = Duration::ZERO;
        true
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

pub fn camera_readout(position: Vec3) -> String {
    format!(
        "X:{:.2} Y:{:.2} Z:{:.2}",
        position.x, position.y, position.z
    )
}

/// Title-bar HUD: frame rate, camera position and active debug overlays.
pub fn hud_title(base: &str, fps: u32, camera: Vec3, show_grid: bool, show_box: bool) -> String {
    let mut title = format!("{} • {} FPS • {}", base, fps, camera_readout(camera));
    if show_grid {
        title.push_str(" • grid");
    }
    if show_box {
        title.push_str(" • box");
    }
    title
}
