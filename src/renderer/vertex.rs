//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// `0xRRGGBB` to a color the (non-sRGB) surface shows as authored
pub const fn hex(rgb: u32, alpha: f32) -> [f32; 4] {
    [
        ((rgb >> 16) & 0xFF) as f32 / 255.0,
        ((rgb >> 8) & 0xFF) as f32 / 255.0,
        (rgb & 0xFF) as f32 / 255.0,
        alpha,
    ]
}

/// Colors for game elements
pub mod colors {
    use super::hex;

    pub const BACKGROUND: [f32; 4] = hex(0xECFCCB, 1.0);
    /// Lighter strips along the top and bottom edges
    pub const FAIRWAY_BAND: [f32; 4] = hex(0xD1FAE5, 1.0);
    pub const OBSTACLE: [f32; 4] = hex(0x5B21B6, 1.0);
    pub const OBSTACLE_BORDER: [f32; 4] = hex(0x3B0F80, 1.0);
    pub const HOLE_RIM: [f32; 4] = hex(0x111827, 1.0);
    pub const HOLE_CUP: [f32; 4] = hex(0x65A30D, 1.0);
    pub const BALL: [f32; 4] = hex(0x4F46E5, 1.0);
    pub const BALL_OUTLINE: [f32; 4] = [0.0, 0.0, 0.0, 0.12];
    pub const AIM_LINE: [f32; 4] = hex(0x6366F1, 0.9);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_channels() {
        assert_eq!(hex(0xFF0000, 1.0), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(hex(0x00FF00, 0.5), [0.0, 1.0, 0.0, 0.5]);
        let c = hex(0x808080, 1.0);
        assert!((c[2] - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_vertex_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(Vertex::desc().array_stride, 24);
    }
}
