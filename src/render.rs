use glam::Mat4;
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;
use winit::window::Window;

mod batch;
mod helpers;

pub use batch::{FrameBatch, Vertex};
use helpers::PipelineDesc;

use crate::constants::CLEAR_COLOR;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
}

pub struct GpuState<'w> {
    window: &'w Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    // Depth buffer; the texture is kept alive alongside its view
    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    line_pipeline: wgpu::RenderPipeline,
    solid_pipeline: wgpu::RenderPipeline,
    translucent_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    pub async fn new(window: &'w Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let info = adapter.get_info();
        log::info!("[gpu] adapter {} ({:?})", info.name, info.backend);
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        // Colors are authored as plain bytes, so prefer a non-sRGB target
        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("Surface reports no texture formats"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("uniforms"),
            contents: bytemuck::bytes_of(&Uniforms {
                view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let line_pipeline = helpers::make_scene_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            PipelineDesc {
                label: "line_pipeline",
                topology: wgpu::PrimitiveTopology::LineList,
                depth_write: true,
            },
        );
        let solid_pipeline = helpers::make_scene_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            PipelineDesc {
                label: "solid_pipeline",
                topology: wgpu::PrimitiveTopology::TriangleList,
                depth_write: true,
            },
        );
        // Translucent geometry is depth-tested but leaves depth untouched
        let translucent_pipeline = helpers::make_scene_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            PipelineDesc {
                label: "translucent_pipeline",
                topology: wgpu::PrimitiveTopology::TriangleList,
                depth_write: false,
            },
        );

        let (depth_tex, depth_view) =
            helpers::create_depth_texture(&device, config.width, config.height);

        let vertex_capacity = 4096;
        let vertex_buffer = create_vertex_buffer(&device, vertex_capacity);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            _depth_tex: depth_tex,
            depth_view,
            uniform_buffer,
            bind_group,
            line_pipeline,
            solid_pipeline,
            translucent_pipeline,
            vertex_buffer,
            vertex_capacity,
            width: size.width,
            height: size.height,
        })
    }

    pub fn window(&self) -> &'w Window {
        self.window
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        PhysicalSize::new(self.width, self.height)
    }

    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        (self._depth_tex, self.depth_view) =
            helpers::create_depth_texture(&self.device, new_size.width, new_size.height);
        log::debug!("[gpu] resized to {}x{}", new_size.width, new_size.height);
    }

    fn ensure_vertex_capacity(&mut self, needed: usize) {
        if needed <= self.vertex_capacity {
            return;
        }
        self.vertex_capacity = needed.next_power_of_two();
        self.vertex_buffer = create_vertex_buffer(&self.device, self.vertex_capacity);
        log::debug!("[gpu] vertex buffer grown to {}", self.vertex_capacity);
    }

    /// Upload `batch` and draw it: opaque triangles, then lines, then
    /// translucent triangles.
    pub fn render(&mut self, view_proj: Mat4, batch: &FrameBatch) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: view_proj.to_cols_array_2d(),
            }),
        );

        self.ensure_vertex_capacity(batch.vertex_count());
        let ranges = [
            (&self.solid_pipeline, &batch.solid),
            (&self.line_pipeline, &batch.lines),
            (&self.translucent_pipeline, &batch.translucent),
        ];
        let mut offset = 0u64;
        let mut draws = Vec::with_capacity(ranges.len());
        for (pipeline, vertices) in ranges {
            if vertices.is_empty() {
                continue;
            }
            let first = (offset / std::mem::size_of::<Vertex>() as u64) as u32;
            self.queue
                .write_buffer(&self.vertex_buffer, offset, bytemuck::cast_slice(vertices));
            offset += std::mem::size_of_val(vertices.as_slice()) as u64;
            draws.push((pipeline, first..first + vertices.len() as u32));
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            for (pipeline, range) in draws {
                rpass.set_pipeline(pipeline);
                rpass.draw(range, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("vertex_buffer"),
        size: (std::mem::size_of::<Vertex>() * capacity) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
