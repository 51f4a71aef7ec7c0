use instant::Instant;
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::{ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowBuilder,
};

mod constants;
mod frame;
mod input;
mod overlay;
mod pacing;
mod render;

use constants::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use frame::FrameContext;
use render::GpuState;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("fatal: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(&window))?;
    let mut ctx = FrameContext::new(Instant::now());

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => gpu.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        repeat,
                        ..
                    },
                ..
            } => {
                if let Some(action) = input::action_for_key(code, state, repeat) {
                    log::debug!("[keys] {action:?}");
                    ctx.handle_action(action);
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            if ctx.frame_due(now) {
                match ctx.frame(now, &mut gpu) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        gpu.resize(gpu.size())
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("[gpu] out of memory, exiting");
                        elwt.exit();
                    }
                    Err(err) => log::warn!("[gpu] frame skipped: {err}"),
                }
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(ctx.next_deadline()));
        }
        _ => {}
    })?;
    Ok(())
}
