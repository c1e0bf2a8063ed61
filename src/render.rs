use crate::constants::{CLEAR_COLOR, GOD_RAY_STRENGTH};
use crate::instances::SpriteInstance;
use glam::{Vec2, Vec3};
use scene_core::{SceneConfig, SceneState};
use web_sys as web;

mod backdrop;
mod helpers;
mod post;
mod sprites;
mod targets;

use backdrop::{create_backdrop_resources, BackdropResources, BackdropUniforms};
use post::{PostBindGroups, PostPass, PostResources, PostUniforms};
use sprites::{SpriteResources, SpriteUniforms};
use targets::RenderTargets;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    backdrop: BackdropResources,
    sprites: SpriteResources,
    post: PostResources,
    post_groups: PostBindGroups,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    bloom_strength: f32,
    bloom_radius: f32,
    bloom_threshold: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        scene_config: &SceneConfig,
        sprite_capacity: usize,
    ) -> anyhow::Result<Self> {
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
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);
        let linear_sampler = helpers::create_linear_sampler(&device);
        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::shaders::POST_WGSL.into()),
        });
        let post = post::create_post_resources(&device, &post_shader, format);
        let post_groups = post::build_bind_groups(&device, &post, &linear_sampler, &targets);
        let backdrop = create_backdrop_resources(&device);
        let sprites = SpriteResources::new(&device, sprite_capacity);
        log::info!(
            "[render] {}x{} {:?}, sprite capacity {}",
            width,
            height,
            format,
            sprites.capacity
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            linear_sampler,
            backdrop,
            sprites,
            post,
            post_groups,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
            bloom_strength: scene_config.bloom_strength,
            bloom_radius: scene_config.bloom_radius,
            bloom_threshold: scene_config.bloom_threshold,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
            self.post_groups =
                post::build_bind_groups(&self.device, &self.post, &self.linear_sampler, &self.targets);
        }
    }

    /// Draw one frame: backdrop, ornaments, particles, then bloom.
    pub fn render(
        &mut self,
        scene: &SceneState,
        ornaments: &[SpriteInstance],
        particles: &[SpriteInstance],
    ) -> Result<(), wgpu::SurfaceError> {
        let total = ornaments.len() + particles.len();
        self.sprites.ensure_capacity(&self.device, total);
        if !ornaments.is_empty() {
            self.queue
                .write_buffer(&self.sprites.instances, 0, bytemuck::cast_slice(ornaments));
        }
        if !particles.is_empty() {
            let offset = std::mem::size_of_val(ornaments) as u64;
            self.queue
                .write_buffer(&self.sprites.instances, offset, bytemuck::cast_slice(particles));
        }
        self.write_scene_uniforms(scene);

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(e) => {
                if matches!(e, wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) {
                    self.surface.configure(&self.device, &self.config);
                }
                return Err(e);
            }
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.backdrop.pipeline);
            rpass.set_bind_group(0, &self.backdrop.bind_group, &[]);
            rpass.draw(0..3, 0..1);

            rpass.set_vertex_buffer(0, self.sprites.instances.slice(..));
            rpass.set_bind_group(0, &self.sprites.bind_group, &[]);
            let split = ornaments.len() as u32;
            if split > 0 {
                rpass.set_pipeline(&self.sprites.alpha_pipeline);
                rpass.draw(0..6, 0..split);
            }
            if !particles.is_empty() {
                rpass.set_pipeline(&self.sprites.additive_pipeline);
                rpass.draw(0..6, split..total as u32);
            }
        }

        let time = scene.uniforms().time;
        let bloom_res = [
            self.targets.bloom_size[0] as f32,
            self.targets.bloom_size[1] as f32,
        ];
        let uniforms = |blur_dir: [f32; 2]| PostUniforms {
            resolution: bloom_res,
            time,
            radius: self.bloom_radius,
            blur_dir,
            bloom_strength: self.bloom_strength,
            threshold: self.bloom_threshold,
        };
        post::write_post_uniforms(&self.queue, &self.post, PostPass::Bright, uniforms([0.0, 0.0]));
        post::write_post_uniforms(&self.queue, &self.post, PostPass::BlurH, uniforms([1.0, 0.0]));
        post::write_post_uniforms(&self.queue, &self.post, PostPass::BlurV, uniforms([0.0, 1.0]));
        post::write_post_uniforms(&self.queue, &self.post, PostPass::Composite, uniforms([0.0, 0.0]));

        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom[0].view,
            wgpu::Color::BLACK,
            &self.post.bright_pipeline,
            &self.post_groups.bright,
            None,
        );
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom[1].view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.post_groups.blur_h,
            None,
        );
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom[0].view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.post_groups.blur_v,
            None,
        );
        post::blit(
            &mut encoder,
            "composite",
            &view,
            self.clear_color,
            &self.post.composite_pipeline,
            &self.post_groups.composite,
            Some(&self.post_groups.bloom),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn write_scene_uniforms(&self, scene: &SceneState) {
        let camera = scene.camera();
        let u = scene.uniforms();
        let view = camera.view_matrix();
        let right = Vec3::new(view.x_axis.x, view.y_axis.x, view.z_axis.x);
        let up = Vec3::new(view.x_axis.y, view.y_axis.y, view.z_axis.y);
        let sprite_uniforms = SpriteUniforms {
            view_proj: camera.view_proj().to_cols_array_2d(),
            cam_right: right.extend(0.0).to_array(),
            cam_up: up.extend(0.0).to_array(),
            light_pos: u.light_position.extend(u.time).to_array(),
            light_target: u.light_target.extend(u.environment_rotation.y).to_array(),
        };
        self.queue.write_buffer(
            &self.sprites.uniform_buffer,
            0,
            bytemuck::bytes_of(&sprite_uniforms),
        );

        // Off-screen projections fall back to the upper right where the
        // spotlight sits by default.
        let light = camera
            .project(scene.god_ray().position)
            .unwrap_or(Vec2::new(1.2, 1.2));
        let target = camera.project(u.light_target).unwrap_or(Vec2::ZERO);
        let backdrop_uniforms = BackdropUniforms {
            resolution_time: [self.width as f32, self.height as f32, u.time, GOD_RAY_STRENGTH],
            light_ndc: [light.x, light.y, target.x, target.y],
            environment: u.environment_rotation.extend(0.0).to_array(),
        };
        self.queue.write_buffer(
            &self.backdrop.uniform_buffer,
            0,
            bytemuck::bytes_of(&backdrop_uniforms),
        );
    }
}
