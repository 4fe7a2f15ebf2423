use smallvec::SmallVec;
use web_sys as web;
use wheel_core::{QuadInstance, Scene, FLOOR_NORMAL_URL, FLOOR_ROUGHNESS_URL};

mod helpers;
mod textures;

// Floor UVs repeat this many times across the plane.
const FLOOR_UV_REPEAT: f32 = 6.0;
const QUAD_VERTS: u32 = 6;
const INITIAL_INSTANCE_CAPACITY: u64 = 128;
const FRAME_QUADS_INLINE: usize = 96;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    fog_color: [f32; 4],
    params: [f32; 4],
    spot: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FloorUniforms {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    params: [f32; 4],
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,

    quad_pipeline: wgpu::RenderPipeline,
    instance_buffer: wgpu::Buffer,
    instance_capacity: u64,

    floor_pipeline: wgpu::RenderPipeline,
    floor_buffer: wgpu::Buffer,
    floor_bg: wgpu::BindGroup,
    _floor_maps: textures::FloorMaps,

    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // Shared globals (camera, fog, lights)
        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[helpers::uniform_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        // Instanced quads: screens, reflections, model box
        let quad_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(wheel_core::SCENE_WGSL.into()),
        });
        let quad_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("quad_pl"),
            bind_group_layouts: &[&globals_bgl],
            push_constant_ranges: &[],
        });
        let instance_attrs = wgpu::vertex_attr_array![
            0 => Float32x4,
            1 => Float32x4,
            2 => Float32x4,
            3 => Float32x4,
            4 => Float32x4
        ];
        let quad_pipeline = helpers::make_blended_pipeline(
            &device,
            "quad_pipeline",
            &quad_pl,
            &quad_shader,
            ("vs_quad", "fs_quad"),
            &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<QuadInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &instance_attrs,
            }],
            format,
        );
        let instance_buffer = create_instance_buffer(&device, INITIAL_INSTANCE_CAPACITY);

        // Floor with roughness/normal maps
        let floor_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("floor_shader"),
            source: wgpu::ShaderSource::Wgsl(wheel_core::FLOOR_WGSL.into()),
        });
        let floor_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("floor_bgl"),
            entries: &[
                helpers::uniform_entry(
                    0,
                    wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ),
                helpers::texture_entry(1),
                helpers::texture_entry(2),
                wgpu::BindGroupLayoutEntry {
                    binding: 3,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let floor_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("floor_pl"),
            bind_group_layouts: &[&globals_bgl, &floor_bgl],
            push_constant_ranges: &[],
        });
        let floor_pipeline = helpers::make_blended_pipeline(
            &device,
            "floor_pipeline",
            &floor_pl,
            &floor_shader,
            ("vs_floor", "fs_floor"),
            &[],
            format,
        );
        let floor_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("floor_uniforms"),
            size: std::mem::size_of::<FloorUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let floor_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("floor_sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let maps =
            textures::load_floor_maps(&device, &queue, FLOOR_ROUGHNESS_URL, FLOOR_NORMAL_URL)
                .await;
        let floor_bg = create_floor_bind_group(&device, &floor_bgl, &floor_buffer, &maps, &floor_sampler);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            globals_buffer,
            globals_bg,
            quad_pipeline,
            instance_buffer,
            instance_capacity: INITIAL_INSTANCE_CAPACITY,
            floor_pipeline,
            floor_buffer,
            floor_bg,
            _floor_maps: maps,
            width,
            height,
        })
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    pub fn resize_if_needed(&mut self, w: u32, h: u32) {
        let (w, h) = (w.max(1), h.max(1));
        if w == self.width && h == self.height {
            return;
        }
        self.width = w;
        self.height = h;
        self.config.width = w;
        self.config.height = h;
        self.surface.configure(&self.device, &self.config);
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let globals = Globals {
            view_proj: scene.camera.view_proj().to_cols_array_2d(),
            eye: scene.camera.eye.extend(1.0).to_array(),
            fog_color: [scene.background[0], scene.background[1], scene.background[2], 1.0],
            params: [
                scene.fog_near,
                scene.fog_far,
                scene.ambient_intensity,
                scene.spot.intensity,
            ],
            spot: scene.spot.position.extend(scene.spot.distance).to_array(),
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        let floor = FloorUniforms {
            model: scene.floor.model.to_cols_array_2d(),
            color: [
                scene.floor.color[0],
                scene.floor.color[1],
                scene.floor.color[2],
                scene.floor.mirror,
            ],
            params: [
                scene.floor.mix_strength,
                scene.floor.normal_scale,
                FLOOR_UV_REPEAT,
                0.0,
            ],
        };
        self.queue
            .write_buffer(&self.floor_buffer, 0, bytemuck::bytes_of(&floor));

        // reflections | model | screens, drawn in that order
        let mut quads: SmallVec<[QuadInstance; FRAME_QUADS_INLINE]> = SmallVec::new();
        quads.extend_from_slice(&scene.reflections);
        let reflections_end = quads.len() as u32;
        quads.extend_from_slice(&scene.model);
        quads.extend_from_slice(&scene.screens);
        let total = quads.len() as u32;
        self.ensure_instance_capacity(total as u64);
        self.queue
            .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&quads[..]));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let bg = scene.background;
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: bg[0] as f64,
                            g: bg[1] as f64,
                            b: bg[2] as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bg, &[]);

            rpass.set_pipeline(&self.quad_pipeline);
            rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
            rpass.draw(0..QUAD_VERTS, 0..reflections_end);

            rpass.set_pipeline(&self.floor_pipeline);
            rpass.set_bind_group(1, &self.floor_bg, &[]);
            rpass.draw(0..QUAD_VERTS, 0..1);

            rpass.set_pipeline(&self.quad_pipeline);
            rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
            rpass.draw(0..QUAD_VERTS, reflections_end..total);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn ensure_instance_capacity(&mut self, needed: u64) {
        if needed <= self.instance_capacity {
            return;
        }
        let cap = needed.next_power_of_two();
        self.instance_buffer = create_instance_buffer(&self.device, cap);
        self.instance_capacity = cap;
        log::debug!("[render] instance buffer grown to {}", cap);
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: u64) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("quad_instances"),
        size: capacity * std::mem::size_of::<QuadInstance>() as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_floor_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    uniforms: &wgpu::Buffer,
    maps: &textures::FloorMaps,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("floor_bg"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniforms.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&maps.roughness.view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::TextureView(&maps.normal.view),
            },
            wgpu::BindGroupEntry {
                binding: 3,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}
