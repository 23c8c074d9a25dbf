use coinpulse_core::{
    BoxInstance, Camera, FittedGrid, BLOOM_STRENGTH, BLOOM_THRESHOLD, EXPOSURE, LIGHT_INTENSITIES,
    SCENE_CLEAR_COLOR,
};
use web_sys as web;
use wgpu;

mod helpers;
mod post;
mod scene;
mod targets;

use post::{PostBindGroups, PostResources};
use scene::ScenePass;
use targets::RenderTargets;

const VAULT_WGSL: &str = include_str!("../shaders/vault.wgsl");
const POST_WGSL: &str = include_str!("../shaders/post.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    grid: [f32; 4],
    lights: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    pub(crate) resolution: [f32; 2],
    pub(crate) blur_dir: [f32; 2],
    pub(crate) bloom_strength: f32,
    pub(crate) threshold: f32,
    pub(crate) exposure: f32,
    pub(crate) _pad: f32,
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceRaw {
    position: [f32; 3],
    scale: [f32; 3],
    color: [f32; 4],
}

impl From<&BoxInstance> for InstanceRaw {
    fn from(b: &BoxInstance) -> Self {
        Self {
            position: b.position.to_array(),
            scale: b.scale.to_array(),
            color: b.color.to_array(),
        }
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    scene: ScenePass,
    post: PostResources,
    post_groups: PostBindGroups,
    instances: Vec<InstanceRaw>,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
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
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!("request_device error: {:?}", e))?;
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
            .ok_or_else(|| anyhow::anyhow!("surface reports no texture formats"))?;
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

        let vault_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("vault_shader"),
            source: wgpu::ShaderSource::Wgsl(VAULT_WGSL.into()),
        });
        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(POST_WGSL.into()),
        });

        let targets = RenderTargets::new(&device, width, height);
        let scene = ScenePass::new(&device, &vault_shader);
        let post = post::create_post_resources(&device, &post_shader, format);
        let post_groups = post.bind_groups(&device, &targets);

        let [r, g, b, a] = SCENE_CLEAR_COLOR;
        log::info!("[gpu] ready {}x{} format {:?}", width, height, format);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            scene,
            post,
            post_groups,
            instances: Vec::new(),
            width,
            height,
            clear_color: wgpu::Color { r, g, b, a },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 || (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.targets = RenderTargets::new(&self.device, width, height);
        self.post_groups = self.post.bind_groups(&self.device, &self.targets);
        log::debug!("[gpu] resized to {:?}", self.targets.size());
    }

    /// Re-applies the current surface configuration, used after a lost or
    /// outdated swapchain.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(
        &mut self,
        camera: &Camera,
        boxes: &[BoxInstance],
        grid: FittedGrid,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let uniforms = SceneUniforms {
            view_proj: camera.view_proj().to_cols_array_2d(),
            eye: camera.eye.extend(1.0).to_array(),
            grid: [grid.width, grid.height, grid.y, grid.z],
            lights: LIGHT_INTENSITIES,
        };
        self.instances.clear();
        self.instances.extend(boxes.iter().map(InstanceRaw::from));
        self.scene
            .upload(&self.device, &self.queue, &uniforms, &self.instances);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("scene_encoder"),
            });
        self.scene.draw(&mut encoder, &self.targets, self.clear_color);
        self.queue.submit(Some(encoder.finish()));

        let post_uniforms = PostUniforms {
            resolution: self.targets.bloom_size(),
            blur_dir: [0.0, 0.0],
            bloom_strength: BLOOM_STRENGTH,
            threshold: BLOOM_THRESHOLD,
            exposure: EXPOSURE,
            _pad: 0.0,
        };
        self.post.run(
            &self.queue,
            &self.device,
            &self.targets,
            &self.post_groups,
            &view,
            post_uniforms,
        );
        frame.present();
        Ok(())
    }
}
