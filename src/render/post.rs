use super::helpers::{
    create_uniform_buffer, make_fullscreen_pipeline, sampler_entry, texture_entry, uniform_entry,
};
use super::targets::{RenderTargets, HDR_FORMAT};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    pub(crate) resolution: [f32; 2],
    pub(crate) time: f32,
    pub(crate) radius: f32,
    pub(crate) blur_dir: [f32; 2],
    pub(crate) bloom_strength: f32,
    pub(crate) threshold: f32,
}

/// The four post passes, in submission order.
#[derive(Clone, Copy, Debug)]
pub(crate) enum PostPass {
    Bright = 0,
    BlurH = 1,
    BlurV = 2,
    Composite = 3,
}

pub(crate) struct PostResources {
    pub(crate) bgl0: wgpu::BindGroupLayout,
    pub(crate) bgl1: wgpu::BindGroupLayout,
    // One buffer per pass; writes land before the single submit.
    pub(crate) uniforms: [wgpu::Buffer; 4],
    pub(crate) bright_pipeline: wgpu::RenderPipeline,
    pub(crate) blur_pipeline: wgpu::RenderPipeline,
    pub(crate) composite_pipeline: wgpu::RenderPipeline,
}

pub(crate) struct PostBindGroups {
    pub(crate) bright: wgpu::BindGroup,
    pub(crate) blur_h: wgpu::BindGroup,
    pub(crate) blur_v: wgpu::BindGroup,
    pub(crate) composite: wgpu::BindGroup,
    pub(crate) bloom: wgpu::BindGroup,
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    shader: &wgpu::ShaderModule,
    surface_format: wgpu::TextureFormat,
) -> PostResources {
    let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl0"),
        entries: &[
            texture_entry(0),
            sampler_entry(1),
            uniform_entry(2, wgpu::ShaderStages::FRAGMENT),
        ],
    });
    let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl1"),
        entries: &[texture_entry(0), sampler_entry(1)],
    });
    let single = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("post_layout_single"),
        bind_group_layouts: &[&bgl0],
        push_constant_ranges: &[],
    });
    let dual = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("post_layout_dual"),
        bind_group_layouts: &[&bgl0, &bgl1],
        push_constant_ranges: &[],
    });
    let size = std::mem::size_of::<PostUniforms>() as u64;
    let uniforms = [
        create_uniform_buffer(device, "post_uniforms_bright", size),
        create_uniform_buffer(device, "post_uniforms_blur_h", size),
        create_uniform_buffer(device, "post_uniforms_blur_v", size),
        create_uniform_buffer(device, "post_uniforms_composite", size),
    ];
    PostResources {
        bright_pipeline: make_fullscreen_pipeline(device, "bright_pipeline", &single, shader, "fs_bright", HDR_FORMAT),
        blur_pipeline: make_fullscreen_pipeline(device, "blur_pipeline", &single, shader, "fs_blur", HDR_FORMAT),
        composite_pipeline: make_fullscreen_pipeline(
            device,
            "composite_pipeline",
            &dual,
            shader,
            "fs_composite",
            surface_format,
        ),
        bgl0,
        bgl1,
        uniforms,
    }
}

fn source_group(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::BindGroupLayout,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
    uniforms: Option<&wgpu::Buffer>,
) -> wgpu::BindGroup {
    let mut entries = vec![
        wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::TextureView(view),
        },
        wgpu::BindGroupEntry {
            binding: 1,
            resource: wgpu::BindingResource::Sampler(sampler),
        },
    ];
    if let Some(buf) = uniforms {
        entries.push(wgpu::BindGroupEntry {
            binding: 2,
            resource: buf.as_entire_binding(),
        });
    }
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &entries,
    })
}

/// Bind groups reference target views, so they are rebuilt on resize.
pub(crate) fn build_bind_groups(
    device: &wgpu::Device,
    post: &PostResources,
    sampler: &wgpu::Sampler,
    targets: &RenderTargets,
) -> PostBindGroups {
    let u = &post.uniforms;
    PostBindGroups {
        bright: source_group(device, "bg_bright", &post.bgl0, &targets.hdr.view, sampler, Some(&u[PostPass::Bright as usize])),
        blur_h: source_group(device, "bg_blur_h", &post.bgl0, &targets.bloom[0].view, sampler, Some(&u[PostPass::BlurH as usize])),
        blur_v: source_group(device, "bg_blur_v", &post.bgl0, &targets.bloom[1].view, sampler, Some(&u[PostPass::BlurV as usize])),
        composite: source_group(
            device,
            "bg_composite",
            &post.bgl0,
            &targets.hdr.view,
            sampler,
            Some(&u[PostPass::Composite as usize]),
        ),
        bloom: source_group(device, "bg_bloom", &post.bgl1, &targets.bloom[0].view, sampler, None),
    }
}

pub(crate) fn write_post_uniforms(
    queue: &wgpu::Queue,
    post: &PostResources,
    pass: PostPass,
    uniforms: PostUniforms,
) {
    queue.write_buffer(&post.uniforms[pass as usize], 0, bytemuck::bytes_of(&uniforms));
}

pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    clear: wgpu::Color,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: Option<&wgpu::BindGroup>,
) {
    let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    rpass.set_pipeline(pipeline);
    rpass.set_bind_group(0, bg0, &[]);
    if let Some(bg) = bg1 {
        rpass.set_bind_group(1, bg, &[]);
    }
    rpass.draw(0..3, 0..1);
}
