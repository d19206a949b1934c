use std::{sync::Arc, time::Instant};

use log::info;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

mod components;
mod entity;
mod systems;
mod world;

use systems::{InputCommand, InputSystem, PhysicsSystem, Renderer, TimeSystem};
use world::{SCREEN_HEIGHT, SCREEN_WIDTH, World};

struct App {
    // Systems
    renderer: Option<Renderer>,
    timing: TimeSystem,
    physics: PhysicsSystem,
    input: InputSystem,

    // Session state
    world: World,
}

impl App {
    fn new() -> Self {
        Self {
            renderer: None,
            timing: TimeSystem::new(),
            physics: PhysicsSystem::new(),
            input: InputSystem::new(),
            world: World::new(),
        }
    }

    fn handle_input_command(&mut self, event_loop: &ActiveEventLoop, command: InputCommand) {
        match command {
            InputCommand::Exit => {
                info!("exit requested");
                event_loop.exit();
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let attributes = Window::default_attributes()
            .with_title("BreakOut")
            .with_inner_size(LogicalSize::new(SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64));
        let window = Arc::new(event_loop.create_window(attributes).unwrap());

        let renderer = pollster::block_on(Renderer::new(window.clone()));
        self.renderer = Some(renderer);

        window.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                info!("window close requested");
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                renderer.render(&self.world, self.timing.current_fps);
            }

            WindowEvent::Resized(size) => {
                renderer.resize(size);
                renderer.window.request_redraw();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(command) = self.input.handle_key(keycode, event.state) {
                        self.handle_input_command(event_loop, command);
                    }
                }
            }

            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_ref() else {
            return;
        };
        let now = Instant::now();

        let (steps, needs_redraw) = self.timing.tick(now);

        for _ in 0..steps {
            self.physics
                .update(&mut self.world, self.input.left_held, self.input.right_held);
        }

        if needs_redraw {
            renderer.window.request_redraw();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.timing.next_wakeup()));
    }
}

fn main() {
    env_logger::init();

    let event_loop = EventLoop::new().unwrap();
    let mut app = App::new();
    event_loop.run_app(&mut app).unwrap();
}
