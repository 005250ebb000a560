//! Ground grid renderer

use wgpu::util::DeviceExt;

use crate::constants::grid as constants;
use crate::pipeline::{PipelineConfig, create_camera_bind_group};
use crate::vertex::PositionColorVertex;

/// Grid renderer
pub struct GridRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    bind_group: wgpu::BindGroup,
}

impl GridRenderer {
    /// Creates a grid renderer with the default extent and spacing.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
        camera_buffer: &wgpu::Buffer,
    ) -> Self {
        let bind_group =
            create_camera_bind_group(device, camera_bind_group_layout, camera_buffer, "Grid");

        let pipeline = PipelineConfig::new(
            "Grid",
            include_str!("../shaders/grid.wgsl"),
            format,
            depth_format,
            &[camera_bind_group_layout],
        )
        .with_vertex_layouts(vec![PositionColorVertex::layout()])
        .with_topology(wgpu::PrimitiveTopology::LineList)
        .build(device);

        let vertices = generate_grid_vertices(
            constants::DEFAULT_SIZE,
            constants::DEFAULT_SPACING,
            constants::LINE_COLOR,
            constants::X_AXIS_COLOR,
            constants::Y_AXIS_COLOR,
        );
        let vertex_count = vertices.len() as u32;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Grid Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            pipeline,
            vertex_buffer,
            vertex_count,
            bind_group,
        }
    }

    /// Rebuild the grid with new parameters.
    pub fn rebuild(
        &mut self,
        device: &wgpu::Device,
        size: f32,
        spacing: f32,
        line_color: [f32; 3],
        x_axis_color: [f32; 3],
        y_axis_color: [f32; 3],
    ) {
        let vertices =
            generate_grid_vertices(size, spacing, line_color, x_axis_color, y_axis_color);
        self.vertex_count = vertices.len() as u32;
        self.vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Grid Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
    }

    /// Draw the grid.
    pub fn render<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }
}

/// Generate grid line vertices in the XY plane, offset below the barrel
fn generate_grid_vertices(
    size: f32,
    spacing: f32,
    line_color: [f32; 3],
    x_axis_color: [f32; 3],
    y_axis_color: [f32; 3],
) -> Vec<PositionColorVertex> {
    let mut vertices = Vec::new();
    let half_size = size;
    let num_lines = (size / spacing) as i32;
    let z = constants::OFFSET_Z;

    // Lines parallel to X axis
    for i in -num_lines..=num_lines {
        let y = i as f32 * spacing;
        let color = if i == 0 { x_axis_color } else { line_color };

        vertices.push(PositionColorVertex {
            position: [-half_size, y, z],
            color,
        });
        vertices.push(PositionColorVertex {
            position: [half_size, y, z],
            color,
        });
    }

    // Lines parallel to Y axis
    for i in -num_lines..=num_lines {
        let x = i as f32 * spacing;
        let color = if i == 0 { y_axis_color } else { line_color };

        vertices.push(PositionColorVertex {
            position: [x, -half_size, z],
            color,
        });
        vertices.push(PositionColorVertex {
            position: [x, half_size, z],
            color,
        });
    }

    vertices
}
