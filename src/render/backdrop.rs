use super::helpers::{create_uniform_buffer, make_fullscreen_pipeline, uniform_entry};
use super::targets::HDR_FORMAT;

/// Fullscreen background: fog, caustic floor shimmer and the god-ray shaft.
#[repr(C)]
#[derive(Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct BackdropUniforms {
    /// Width, height, seconds, ray strength.
    pub(crate) resolution_time: [f32; 4],
    /// Spotlight and its target projected to NDC.
    pub(crate) light_ndc: [f32; 4],
    /// Environment rotation xyz, w unused.
    pub(crate) environment: [f32; 4],
}

pub(crate) struct BackdropResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_backdrop_resources(device: &wgpu::Device) -> BackdropResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("backdrop_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::shaders::BACKDROP_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("backdrop_bgl"),
        entries: &[uniform_entry(0, wgpu::ShaderStages::FRAGMENT)],
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("backdrop_layout"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let uniform_buffer = create_uniform_buffer(
        device,
        "backdrop_uniforms",
        std::mem::size_of::<BackdropUniforms>() as u64,
    );
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("backdrop_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    BackdropResources {
        pipeline: make_fullscreen_pipeline(device, "backdrop_pipeline", &layout, &shader, "fs_backdrop", HDR_FORMAT),
        uniform_buffer,
        bind_group,
    }
}
