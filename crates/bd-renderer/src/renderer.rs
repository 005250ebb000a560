//! Main renderer
//!
//! Owns the camera, the directional light with its shadow map, the ground
//! grid, and the GPU copies of the barrel parts. `set_barrel` replaces the
//! whole part list on every rebuild; `advance` spins the turntable;
//! `render` runs the shadow pass followed by the MSAA main pass.

use glam::Vec3;
use wgpu::util::DeviceExt;

use bd_core::BarrelMesh;

use crate::camera::Camera;
use crate::config::{
    CameraConfig, GridConfig, LightingConfig, RendererConfig, ShadowConfig, ViewportConfig,
};
use crate::constants::shadow::{SHADOW_MAP_FORMAT, SHADOW_MAP_SIZE};
use crate::constants::viewport::{CLEAR_COLOR, SAMPLE_COUNT};
use crate::light::DirectionalLight;
use crate::sub_renderers::{GridRenderer, MeshData, MeshRenderer};
use crate::turntable::Turntable;

/// Uploaded barrel part with its bind group
struct PartEntry {
    data: MeshData,
    bind_group: wgpu::BindGroup,
}

/// Main renderer for the 3D barrel view
pub struct Renderer {
    camera: Camera,
    camera_buffer: wgpu::Buffer,
    camera_bind_group_layout: wgpu::BindGroupLayout,
    depth_texture: wgpu::Texture,
    depth_view: wgpu::TextureView,
    msaa_texture: Option<wgpu::Texture>,
    msaa_view: Option<wgpu::TextureView>,

    light: DirectionalLight,
    light_buffer: wgpu::Buffer,
    #[allow(dead_code)] // Held for GPU resource lifetime
    shadow_texture: wgpu::Texture,
    shadow_view: wgpu::TextureView,
    #[allow(dead_code)] // Held for GPU resource lifetime
    shadow_sampler: wgpu::Sampler,
    /// Bind group for main pass (light uniform + shadow map + sampler)
    light_bind_group: wgpu::BindGroup,
    /// Bind group for shadow pass (light uniform only)
    shadow_light_bind_group: wgpu::BindGroup,

    grid_renderer: GridRenderer,
    mesh_renderer: MeshRenderer,

    parts: Vec<PartEntry>,
    turntable: Turntable,
    barrel_center: Vec3,
    barrel_radius: f32,

    show_grid: bool,
    clear_color: wgpu::Color,
    shadow_map_size: u32,

    format: wgpu::TextureFormat,
    width: u32,
    height: u32,
}

impl Renderer {
    /// Creates a new renderer for the given surface format and size.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let depth_format = wgpu::TextureFormat::Depth32Float;

        let camera = Camera::new(width as f32 / height as f32);
        let camera_uniform = camera.uniform();

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let (depth_texture, depth_view) = Self::create_depth_texture(device, width, height);
        let (msaa_texture, msaa_view) = match Self::create_msaa_texture(device, format, width, height)
        {
            Some((texture, view)) => (Some(texture), Some(view)),
            None => (None, None),
        };

        let light = DirectionalLight::new();
        let light_uniform = light.uniform(Vec3::ZERO);
        let light_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Light Buffer"),
            contents: bytemuck::cast_slice(&[light_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let (shadow_texture, shadow_view) = Self::create_shadow_texture(device, SHADOW_MAP_SIZE);
        let shadow_sampler = Self::create_shadow_sampler(device);

        let grid_renderer = GridRenderer::new(
            device,
            format,
            depth_format,
            &camera_bind_group_layout,
            &camera_buffer,
        );

        let mesh_renderer = MeshRenderer::new(
            device,
            format,
            depth_format,
            &camera_bind_group_layout,
            &camera_buffer,
        );

        let light_bind_group = Self::create_light_bind_group(
            device,
            mesh_renderer.light_bind_group_layout(),
            &light_buffer,
            &shadow_view,
            &shadow_sampler,
        );

        // Shadow pass bind group (light uniform only, shadow.wgsl group 0)
        let shadow_light_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Shadow Light Bind Group Layout"),
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

        let shadow_light_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Shadow Light Bind Group"),
            layout: &shadow_light_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: light_buffer.as_entire_binding(),
            }],
        });

        Self {
            camera,
            camera_buffer,
            camera_bind_group_layout,
            depth_texture,
            depth_view,
            msaa_texture,
            msaa_view,

            light,
            light_buffer,
            shadow_texture,
            shadow_view,
            shadow_sampler,
            light_bind_group,
            shadow_light_bind_group,

            grid_renderer,
            mesh_renderer,

            parts: Vec::new(),
            turntable: Turntable::new(),
            barrel_center: Vec3::ZERO,
            barrel_radius: 1.0,

            show_grid: false,
            clear_color: CLEAR_COLOR,
            shadow_map_size: SHADOW_MAP_SIZE,

            format,
            width,
            height,
        }
    }

    // ========== Camera accessors ==========

    /// Get a reference to the camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Get a mutable reference to the camera.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    // ========== Light accessors ==========

    /// Get a reference to the directional light.
    pub fn light(&self) -> &DirectionalLight {
        &self.light
    }

    /// Get a mutable reference to the directional light.
    pub fn light_mut(&mut self) -> &mut DirectionalLight {
        &mut self.light
    }

    /// Enable or disable shadows.
    pub fn set_shadows_enabled(&mut self, enabled: bool) {
        self.light.shadows_enabled = enabled;
    }

    /// Check if shadows are enabled.
    pub fn shadows_enabled(&self) -> bool {
        self.light.shadows_enabled
    }

    // ========== Display option accessors ==========

    /// Get whether the grid is visible.
    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    /// Set whether the grid is visible.
    pub fn set_show_grid(&mut self, show: bool) {
        self.show_grid = show;
    }

    // ========== Barrel management ==========

    /// Replace the barrel with a freshly built mesh.
    ///
    /// The previous GPU parts are dropped; there is no incremental update.
    pub fn set_barrel(&mut self, device: &wgpu::Device, barrel: &BarrelMesh) {
        self.parts.clear();
        for part in &barrel.parts {
            let data = MeshData::from_part(device, part);
            let bind_group = self.mesh_renderer.create_instance_bind_group(device, &data);
            self.parts.push(PartEntry { data, bind_group });
        }

        self.barrel_center = barrel.center();
        self.barrel_radius = barrel.bounding_radius();
        tracing::debug!("Rebuilt barrel: {} parts", self.parts.len());
    }

    /// Number of uploaded parts.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Center of the current barrel's bounding box.
    pub fn barrel_center(&self) -> Vec3 {
        self.barrel_center
    }

    /// Bounding-sphere radius of the current barrel.
    pub fn barrel_radius(&self) -> f32 {
        self.barrel_radius
    }

    /// Advance the idle turntable by one frame and push the rotated
    /// transforms to the GPU.
    pub fn advance(&mut self, queue: &wgpu::Queue, time_seconds: f64) {
        self.turntable.advance(time_seconds);
        let rotation = self.turntable.rotation();
        for entry in &mut self.parts {
            entry.data.update_rotation(queue, rotation);
        }
    }

    // ========== Render targets ==========

    fn create_depth_texture(
        device: &wgpu::Device,
        width: u32,
        height: u32,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: SAMPLE_COUNT,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        (texture, view)
    }

    fn create_msaa_texture(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Option<(wgpu::Texture, wgpu::TextureView)> {
        if SAMPLE_COUNT <= 1 {
            return None;
        }
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("MSAA Color Texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: SAMPLE_COUNT,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Some((texture, view))
    }

    fn create_shadow_texture(
        device: &wgpu::Device,
        size: u32,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        let size = size.clamp(256, 8192);
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Shadow Map Texture"),
            size: wgpu::Extent3d {
                width: size,
                height: size,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1, // No MSAA for the shadow map
            dimension: wgpu::TextureDimension::D2,
            format: SHADOW_MAP_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        (texture, view)
    }

    fn create_shadow_sampler(device: &wgpu::Device) -> wgpu::Sampler {
        device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Shadow Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            compare: Some(wgpu::CompareFunction::LessEqual),
            ..Default::default()
        })
    }

    fn create_light_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        light_buffer: &wgpu::Buffer,
        shadow_view: &wgpu::TextureView,
        shadow_sampler: &wgpu::Sampler,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Light Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: light_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(shadow_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(shadow_sampler),
                },
            ],
        })
    }

    /// Resizes the renderer's textures for a new viewport size.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.width = width;
        self.height = height;
        self.camera.update_aspect(width as f32 / height as f32);

        let (depth_texture, depth_view) = Self::create_depth_texture(device, width, height);
        self.depth_texture = depth_texture;
        self.depth_view = depth_view;

        let (msaa_texture, msaa_view) =
            match Self::create_msaa_texture(device, self.format, width, height) {
                Some((texture, view)) => (Some(texture), Some(view)),
                None => (None, None),
            };
        self.msaa_texture = msaa_texture;
        self.msaa_view = msaa_view;
    }

    /// Returns the texture format used by the renderer.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    fn update_camera(&self, queue: &wgpu::Queue) {
        let camera_uniform = self.camera.uniform();
        queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[camera_uniform]),
        );
    }

    fn update_light(&self, queue: &wgpu::Queue) {
        // Shadow projection follows the barrel, which sits at the origin
        let light_uniform = self.light.uniform(self.barrel_center);
        queue.write_buffer(
            &self.light_buffer,
            0,
            bytemuck::cast_slice(&[light_uniform]),
        );
    }

    /// Render the scene.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        queue: &wgpu::Queue,
    ) {
        self.update_camera(queue);
        self.update_light(queue);

        // === SHADOW PASS ===
        if self.light.shadows_enabled && !self.parts.is_empty() {
            let mut shadow_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Shadow Pass"),
                color_attachments: &[],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.shadow_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            shadow_pass.set_viewport(
                0.0,
                0.0,
                self.shadow_map_size as f32,
                self.shadow_map_size as f32,
                0.0,
                1.0,
            );

            for entry in &self.parts {
                self.mesh_renderer.render_shadow(
                    &mut shadow_pass,
                    &entry.data,
                    &entry.bind_group,
                    &self.shadow_light_bind_group,
                );
            }
        }

        // === MAIN PASS ===
        let color_attachment = if let Some(msaa_view) = &self.msaa_view {
            wgpu::RenderPassColorAttachment {
                view: msaa_view,
                resolve_target: Some(view),
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            }
        } else {
            wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            }
        };

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Main Render Pass"),
            color_attachments: &[Some(color_attachment)],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if self.show_grid {
            self.grid_renderer.render(&mut render_pass);
        }

        for entry in &self.parts {
            self.mesh_renderer.render(
                &mut render_pass,
                &entry.data,
                &entry.bind_group,
                &self.light_bind_group,
            );
        }
    }

    /// Get camera bind group layout for external use.
    pub fn camera_bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.camera_bind_group_layout
    }

    // ========== Configuration Methods ==========

    /// Apply a full renderer configuration.
    pub fn apply_config(&mut self, config: &RendererConfig, device: &wgpu::Device) {
        self.apply_grid_config(&config.grid, device);
        self.apply_viewport_config(&config.viewport);
        self.apply_shadow_config(&config.shadow, device);
        self.apply_lighting_config(&config.lighting);
        self.apply_camera_config(&config.camera);
    }

    /// Apply grid configuration.
    pub fn apply_grid_config(&mut self, config: &GridConfig, device: &wgpu::Device) {
        self.show_grid = config.enabled;
        self.grid_renderer.rebuild(
            device,
            config.size,
            config.spacing,
            config.line_color,
            config.x_axis_color,
            config.y_axis_color,
        );
    }

    /// Apply shadow configuration.
    pub fn apply_shadow_config(&mut self, config: &ShadowConfig, device: &wgpu::Device) {
        self.light.shadows_enabled = config.enabled;
        self.light.shadow_bias = config.bias;
        self.light.shadow_normal_bias = config.normal_bias;
        self.light.shadow_softness = config.softness;

        if config.map_size != self.shadow_map_size {
            self.resize_shadow_map(device, config.map_size);
        }
    }

    /// Resize shadow map texture.
    fn resize_shadow_map(&mut self, device: &wgpu::Device, size: u32) {
        let size = size.clamp(256, 8192);
        self.shadow_map_size = size;

        let (shadow_texture, shadow_view) = Self::create_shadow_texture(device, size);
        self.shadow_texture = shadow_texture;
        self.shadow_view = shadow_view;

        // Recreate light bind group with the new shadow view
        self.light_bind_group = Self::create_light_bind_group(
            device,
            self.mesh_renderer.light_bind_group_layout(),
            &self.light_buffer,
            &self.shadow_view,
            &self.shadow_sampler,
        );
    }

    /// Apply lighting configuration.
    pub fn apply_lighting_config(&mut self, config: &LightingConfig) {
        self.light.set_direction(Vec3::from_array(config.direction));
        self.light.color = Vec3::from_array(config.color);
        self.light.intensity = config.intensity;
        self.light.ambient_color = Vec3::from_array(config.ambient_color);
        self.light.ambient_strength = config.ambient_strength;
    }

    /// Apply camera configuration.
    pub fn apply_camera_config(&mut self, config: &CameraConfig) {
        self.camera.set_fov_degrees(config.fov_degrees);
        self.camera.set_near(config.near_plane);
        self.camera.set_far(config.far_plane);
        // Sensitivity values are consumed by the frontend input handling
    }

    /// Apply viewport configuration.
    pub fn apply_viewport_config(&mut self, config: &ViewportConfig) {
        self.clear_color = wgpu::Color {
            r: config.background_color[0] as f64,
            g: config.background_color[1] as f64,
            b: config.background_color[2] as f64,
            a: config.background_color[3] as f64,
        };
    }

    /// Get the current MSAA sample count.
    pub fn sample_count(&self) -> u32 {
        SAMPLE_COUNT
    }
}
