use super::helpers::{self, HDR_FORMAT};
use super::targets::RenderTargets;
use super::PostUniforms;
use wgpu;

pub(crate) struct PostResources {
    pub(crate) bgl0: wgpu::BindGroupLayout, // tex+sampler+uniform
    pub(crate) bgl1: wgpu::BindGroupLayout, // tex+sampler
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) sampler: wgpu::Sampler,
    pub(crate) bright_pipeline: wgpu::RenderPipeline,
    pub(crate) blur_pipeline: wgpu::RenderPipeline,
    pub(crate) composite_pipeline: wgpu::RenderPipeline,
}

/// Bind groups that reference the current render targets; rebuilt on resize.
pub(crate) struct PostBindGroups {
    pub(crate) hdr: wgpu::BindGroup,
    pub(crate) from_bloom_a: wgpu::BindGroup,
    pub(crate) from_bloom_b: wgpu::BindGroup,
    pub(crate) bloom_a_only: wgpu::BindGroup,
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    post_shader: &wgpu::ShaderModule,
    swap_format: wgpu::TextureFormat,
) -> PostResources {
    let [tex, samp] = helpers::sampled_texture_entries(0);
    let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl0"),
        entries: &[
            tex,
            samp,
            helpers::uniform_entry(2, wgpu::ShaderStages::FRAGMENT),
        ],
    });
    let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl1"),
        entries: &helpers::sampled_texture_entries(0),
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("post_uniforms"),
        size: std::mem::size_of::<PostUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("linear_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });
    let pl_bright_blur = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_0"),
        bind_group_layouts: &[&bgl0],
        push_constant_ranges: &[],
    });
    let pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_comp"),
        bind_group_layouts: &[&bgl0, &bgl1],
        push_constant_ranges: &[],
    });
    let bright_pipeline = helpers::make_post_pipeline(
        device,
        "bright_pipeline",
        &pl_bright_blur,
        post_shader,
        "fs_bright",
        HDR_FORMAT,
        None,
    );
    let blur_pipeline = helpers::make_post_pipeline(
        device,
        "blur_pipeline",
        &pl_bright_blur,
        post_shader,
        "fs_blur",
        HDR_FORMAT,
        None,
    );
    let composite_pipeline = helpers::make_post_pipeline(
        device,
        "composite_pipeline",
        &pl_composite,
        post_shader,
        "fs_composite",
        swap_format,
        Some(wgpu::BlendState::REPLACE),
    );

    PostResources {
        bgl0,
        bgl1,
        uniform_buffer,
        sampler,
        bright_pipeline,
        blur_pipeline,
        composite_pipeline,
    }
}

impl PostResources {
    pub(crate) fn bind_groups(&self, device: &wgpu::Device, t: &RenderTargets) -> PostBindGroups {
        let u = Some(&self.uniform_buffer);
        PostBindGroups {
            hdr: helpers::texture_bind_group(device, "bg_hdr", &self.bgl0, &t.hdr_view, &self.sampler, u),
            from_bloom_a: helpers::texture_bind_group(
                device,
                "bg_from_bloom_a",
                &self.bgl0,
                &t.bloom_a_view,
                &self.sampler,
                u,
            ),
            from_bloom_b: helpers::texture_bind_group(
                device,
                "bg_from_bloom_b",
                &self.bgl0,
                &t.bloom_b_view,
                &self.sampler,
                u,
            ),
            bloom_a_only: helpers::texture_bind_group(
                device,
                "bg_bloom_a_only",
                &self.bgl1,
                &t.bloom_a_view,
                &self.sampler,
                None,
            ),
        }
    }

    /// Bright pass into bloom A, horizontal blur into B, vertical blur back
    /// into A, then composite HDR + bloom A onto `swap_view`.
    ///
    /// Uniform writes are queued, so each pass gets its own encoder submit.
    pub(crate) fn run(
        &self,
        queue: &wgpu::Queue,
        device: &wgpu::Device,
        targets: &RenderTargets,
        groups: &PostBindGroups,
        swap_view: &wgpu::TextureView,
        mut uniforms: PostUniforms,
    ) {
        let passes: [(&str, [f32; 2], &wgpu::TextureView, &wgpu::RenderPipeline, &wgpu::BindGroup, Option<&wgpu::BindGroup>); 4] = [
            ("bright_pass", [0.0, 0.0], &targets.bloom_a_view, &self.bright_pipeline, &groups.hdr, None),
            ("blur_h", [1.0, 0.0], &targets.bloom_b_view, &self.blur_pipeline, &groups.from_bloom_a, None),
            ("blur_v", [0.0, 1.0], &targets.bloom_a_view, &self.blur_pipeline, &groups.from_bloom_b, None),
            ("composite", [0.0, 0.0], swap_view, &self.composite_pipeline, &groups.hdr, Some(&groups.bloom_a_only)),
        ];
        for (label, dir, target, pipeline, bg0, bg1) in passes {
            uniforms.blur_dir = dir;
            queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
            let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some(label),
            });
            blit(&mut encoder, label, target, wgpu::Color::BLACK, pipeline, bg0, bg1);
            queue.submit(Some(encoder.finish()));
        }
    }
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
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
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
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    if let Some(g1) = bg1 {
        r.set_bind_group(1, g1, &[]);
    }
    r.draw(0..3, 0..1);
}
