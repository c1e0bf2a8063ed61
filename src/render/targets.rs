use super::helpers::create_color_texture;

pub(crate) const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

/// A texture kept alive alongside the view the passes render into.
pub(crate) struct ColorTarget {
    _texture: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
}

impl ColorTarget {
    fn new(device: &wgpu::Device, label: &str, size: [u32; 2]) -> Self {
        let usage = wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        let (texture, view) = create_color_texture(device, label, size[0], size[1], HDR_FORMAT, usage);
        Self {
            _texture: texture,
            view,
        }
    }
}

/// Full-resolution HDR scene plus the half-resolution bloom ping-pong pair.
pub(crate) struct RenderTargets {
    pub(crate) hdr: ColorTarget,
    /// `bloom[0]` holds the bright pass and the final blur; `bloom[1]` the
    /// horizontal blur.
    pub(crate) bloom: [ColorTarget; 2],
    pub(crate) bloom_size: [u32; 2],
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let full = [width.max(1), height.max(1)];
        let half = [(full[0] / 2).max(1), (full[1] / 2).max(1)];
        Self {
            hdr: ColorTarget::new(device, "hdr_scene", full),
            bloom: [
                ColorTarget::new(device, "bloom_ping", half),
                ColorTarget::new(device, "bloom_pong", half),
            ],
            bloom_size: half,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height);
    }
}
