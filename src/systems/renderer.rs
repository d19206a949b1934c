use crate::components::{Rect, colors};
use crate::world::{SCREEN_HEIGHT, SCREEN_WIDTH, World};
use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::window::Window;

#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 2],
}

/// One axis-aligned rectangle, already mapped to NDC.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct RectInstance {
    center: [f32; 2],
    half_size: [f32; 2],
    color: [f32; 3],
}

const QUAD_VERTICES: &[Vertex] = &[
    Vertex {
        position: [-1.0, -1.0],
    },
    Vertex {
        position: [1.0, -1.0],
    },
    Vertex {
        position: [1.0, 1.0],
    },
    Vertex {
        position: [-1.0, -1.0],
    },
    Vertex {
        position: [1.0, 1.0],
    },
    Vertex {
        position: [-1.0, 1.0],
    },
];

// 80 bricks + ball + paddle, rounded up
const MAX_INSTANCES: usize = 128;

const HUD_FONT_SIZE: f32 = 20.0;
const GAME_OVER_FONT_SIZE: f32 = 40.0;

fn hud_color() -> glyphon::Color {
    let [r, g, b] = colors::LIGHTGRAY;
    glyphon::Color::rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

/// HUD text placed in playfield coordinates, stretched with the surface.
fn text_area<'a>(
    buffer: &'a glyphon::Buffer,
    x: f32,
    y: f32,
    sx: f32,
    sy: f32,
) -> glyphon::TextArea<'a> {
    glyphon::TextArea {
        buffer,
        left: x * sx,
        top: y * sy,
        scale: sx,
        bounds: glyphon::TextBounds::default(),
        default_color: hud_color(),
        custom_glyphs: &[],
    }
}

/// Map a playfield rect (pixels, y down) to an NDC instance. The logical
/// 1280x720 field stretches to whatever size the surface has.
fn rect_instance(rect: &Rect, color: [f32; 3]) -> RectInstance {
    let cx = (rect.x + rect.width / 2.0) / (SCREEN_WIDTH / 2.0) - 1.0;
    let cy = 1.0 - (rect.y + rect.height / 2.0) / (SCREEN_HEIGHT / 2.0);
    RectInstance {
        center: [cx, cy],
        half_size: [rect.width / SCREEN_WIDTH, rect.height / SCREEN_HEIGHT],
        color,
    }
}

pub struct Renderer {
    pub window: Arc<Window>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    surface_format: wgpu::TextureFormat,
    size: winit::dpi::PhysicalSize<u32>,

    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,

    // Text rendering
    font_system: glyphon::FontSystem,
    swash_cache: glyphon::SwashCache,
    viewport: glyphon::Viewport,
    atlas: glyphon::TextAtlas,
    text_renderer: glyphon::TextRenderer,
    fps_buffer: glyphon::Buffer,
    lives_buffer: glyphon::Buffer,
    score_buffer: glyphon::Buffer,
    game_over_buffer: glyphon::Buffer,
}

impl Renderer {
    pub async fn new(window: Arc<Window>) -> Self {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions::default())
            .await
            .unwrap();
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor::default())
            .await
            .unwrap();

        let size = window.inner_size();
        let surface = instance.create_surface(window.clone()).unwrap();
        let cap = surface.get_capabilities(&adapter);
        let surface_format = cap.formats[0];

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Rect Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shader.wgsl").into()),
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Rect Pipeline"),
            layout: None,
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![0 => Float32x2],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<RectInstance>() as wgpu::BufferAddress,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![
                            1 => Float32x2,
                            2 => Float32x2,
                            3 => Float32x3,
                        ],
                    },
                ],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: bytemuck::cast_slice(QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Instance Buffer"),
            size: (std::mem::size_of::<RectInstance>() * MAX_INSTANCES) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // Text rendering setup
        let mut font_system = glyphon::FontSystem::new();
        let swash_cache = glyphon::SwashCache::new();
        let cache = glyphon::Cache::new(&device);
        let viewport = glyphon::Viewport::new(&device, &cache);
        let mut atlas = glyphon::TextAtlas::new(&device, &queue, &cache, surface_format);
        let text_renderer = glyphon::TextRenderer::new(
            &mut atlas,
            &device,
            wgpu::MultisampleState::default(),
            None,
        );

        let mut hud_buffer = |font_size: f32| {
            let mut buffer = glyphon::Buffer::new(
                &mut font_system,
                glyphon::Metrics::new(font_size, font_size * 1.3),
            );
            buffer.set_size(&mut font_system, None, None);
            buffer
        };

        let fps_buffer = hud_buffer(HUD_FONT_SIZE);
        let lives_buffer = hud_buffer(HUD_FONT_SIZE);
        let score_buffer = hud_buffer(HUD_FONT_SIZE);
        let game_over_buffer = hud_buffer(GAME_OVER_FONT_SIZE);

        let renderer = Self {
            window,
            device,
            queue,
            surface,
            surface_format,
            size,
            render_pipeline,
            vertex_buffer,
            instance_buffer,
            font_system,
            swash_cache,
            viewport,
            atlas,
            text_renderer,
            fps_buffer,
            lives_buffer,
            score_buffer,
            game_over_buffer,
        };

        renderer.configure_surface();
        renderer
    }

    fn configure_surface(&self) {
        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: self.surface_format,
            view_formats: vec![self.surface_format.add_srgb_suffix()],
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            width: self.size.width,
            height: self.size.height,
            desired_maximum_frame_latency: 2,
            present_mode: wgpu::PresentMode::AutoVsync,
        };
        self.surface.configure(&self.device, &surface_config);
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.size = new_size;
        self.configure_surface();
    }

    /// Draw one frame: clear to black, bricks always, ball and paddle only
    /// while lives remain (otherwise the "Game Over" banner), then the HUD.
    pub fn render(&mut self, world: &World, fps: u32) {
        // Collect rect instances from the world
        let mut instances = Vec::with_capacity(world.bricks.len() + 2);
        for brick in &world.bricks {
            instances.push(rect_instance(brick.rect(), brick.color));
        }
        if !world.game_over() {
            instances.push(rect_instance(world.ball.rect(), world.ball.body().color));
            instances.push(rect_instance(
                world.paddle.rect(),
                world.paddle.body().color,
            ));
        }
        instances.truncate(MAX_INSTANCES);

        self.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));

        // HUD strings
        let attrs = glyphon::Attrs::new().family(glyphon::Family::SansSerif);
        let hud_texts = [
            (format!("FPS: {fps}"), &mut self.fps_buffer),
            (
                format!("Lives: {}", world.lives_display()),
                &mut self.lives_buffer,
            ),
            (format!("Score: {}", world.score), &mut self.score_buffer),
            (String::from("Game Over"), &mut self.game_over_buffer),
        ];
        for (text, buffer) in hud_texts {
            buffer.set_text(
                &mut self.font_system,
                &text,
                &attrs,
                glyphon::Shaping::Basic,
                None,
            );
            buffer.shape_until_scroll(&mut self.font_system, false);
        }

        self.viewport.update(
            &self.queue,
            glyphon::Resolution {
                width: self.size.width,
                height: self.size.height,
            },
        );

        let sx = self.size.width as f32 / SCREEN_WIDTH;
        let sy = self.size.height as f32 / SCREEN_HEIGHT;

        let mut text_areas = vec![
            text_area(&self.fps_buffer, 25.0, 25.0, sx, sy),
            text_area(&self.lives_buffer, SCREEN_WIDTH - 100.0, 25.0, sx, sy),
            text_area(&self.score_buffer, SCREEN_WIDTH / 2.0, 25.0, sx, sy),
        ];
        if world.game_over() {
            text_areas.push(text_area(
                &self.game_over_buffer,
                SCREEN_WIDTH / 2.0 - 25.0,
                SCREEN_HEIGHT / 2.0,
                sx,
                sy,
            ));
        }

        self.text_renderer
            .prepare(
                &self.device,
                &self.queue,
                &mut self.font_system,
                &mut self.atlas,
                &self.viewport,
                text_areas,
                &mut self.swash_cache,
            )
            .unwrap();

        let surface_texture = self.surface.get_current_texture().unwrap();
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.device.create_command_encoder(&Default::default());

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: None,
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });

            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            render_pass.draw(0..6, 0..instances.len() as u32);

            self.text_renderer
                .render(&mut self.atlas, &mut self.viewport, &mut render_pass)
                .unwrap();
        }

        self.queue.submit([encoder.finish()]);
        surface_texture.present();
    }
}
