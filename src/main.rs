use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use flywheel::camera::Camera;
use flywheel::cli::{Cli, DemoKind};
use flywheel::config::Config;
use flywheel::playback::{CancelToken, FrameSource, Player, ScriptedFrames, SystemFrames};
use flywheel::renderer::Renderer;
use flywheel::{create_crankshaft_demo, create_spheres_demo, Demo as _};

const HEADLESS_STEP: f32 = 1.0 / 60.0;

/// Everything the windowed loop touches, created at startup and dropped
/// together at shutdown.
struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    player: Player,
    camera: Camera,
    frames: SystemFrames,
    token: CancelToken,
    window_config: flywheel::config::WindowConfig,
}

impl App {
    fn new(player: Player, window_config: flywheel::config::WindowConfig) -> Self {
        let camera = Camera::new(player.demo().camera());
        let token = CancelToken::new();
        let frames = SystemFrames::new(token.clone());
        Self {
            window: None,
            renderer: None,
            player,
            camera,
            frames,
            token,
            window_config,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title(&self.window_config.title)
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.window_config.width,
                        self.window_config.height,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(Renderer::new(window.clone())) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                self.token.cancel();
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => self.camera.process_keyboard(&event),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => {
                let Some(frame) = self.frames.next_frame() else {
                    event_loop.exit();
                    return;
                };

                self.player.step(&frame);
                self.camera.update();

                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.render(self.player.scene(), &self.camera) {
                        log::error!("render error: {}", e);
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn run_headless(mut player: Player, frames: u64) {
    let mut source = ScriptedFrames::new(HEADLESS_STEP, frames);
    let played = player.run(&mut source);
    log::info!("headless playback finished after {} frames", played);

    for (i, node) in player.scene().nodes().iter().enumerate() {
        log::info!("node {}: position {:?}", i, node.position);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.validate()?;

    let demo = match cli.demo {
        DemoKind::Spheres => create_spheres_demo(&config),
        DemoKind::Crankshaft => create_crankshaft_demo(&config),
    };
    let player = Player::new(demo)?;

    if let Some(frames) = cli.frames {
        run_headless(player, frames);
        return Ok(());
    }

    log::info!("controls: WASD move, Space/Shift up/down, Q/E turn, Escape quits");
    let event_loop = EventLoop::new()?;
    let mut app = App::new(player, config.window.clone());
    event_loop.run_app(&mut app)?;

    Ok(())
}
