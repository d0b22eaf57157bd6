pub mod draw;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use crate::scene::Scene;
use resources::CourtBuffers;
use web_sys::HtmlCanvasElement;
use wgpu::*;

const CIRCLE_SEGMENTS: u16 = 32;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,
    pub buffers: CourtBuffers,
    pub meshes: (Mesh, Mesh), // rect, circle
}

impl Renderer {
    /// Attach to `canvas`. `court_size` is the logical area the camera covers;
    /// the backing store keeps the canvas element's own size
    pub async fn new(canvas: HtmlCanvasElement, court_size: (f32, f32)) -> Result<Self, String> {
        let (width, height) = (canvas.width(), canvas.height());

        let instance = Instance::new(&InstanceDescriptor {
            backends: Backends::BROWSER_WEBGPU,
            ..Default::default()
        });
        let surface = instance
            .create_surface(SurfaceTarget::Canvas(canvas))
            .map_err(|e| format!("Failed to create surface: {:?}", e))?;

        let adapter = instance
            .request_adapter(&RequestAdapterOptions {
                power_preference: PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| "WebGPU is not available in this browser".to_string())?;

        let (device, queue) = adapter
            .request_device(
                &DeviceDescriptor {
                    label: Some("Hoopshot Device"),
                    required_features: Features::empty(),
                    required_limits: Limits::downlevel_webgl2_defaults(),
                    memory_hints: MemoryHints::default(),
                },
                None,
            )
            .await
            .map_err(|e| format!("Failed to create device: {:?}", e))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| "No surface formats available".to_string())?;
        let surface_config = surface
            .get_default_config(&adapter, width, height)
            .ok_or_else(|| "Surface is not supported by the adapter".to_string())?;
        surface.configure(
            &device,
            &SurfaceConfiguration {
                format,
                present_mode: PresentMode::Fifo,
                ..surface_config
            },
        );
        log::info!("WebGPU ready: {}x{} {:?}", width, height, format);

        let camera = Camera::screen(court_size.0, court_size.1);
        let buffers = resources::create_buffers(&device, &camera);
        let court = pipeline::create_court_pipeline(&device, format);

        let camera_bind_group = device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &court.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        let meshes = (
            create_rectangle(&device),
            create_circle(&device, CIRCLE_SEGMENTS),
        );

        Ok(Self {
            device,
            queue,
            surface,
            pipeline: court.pipeline,
            camera_bind_group,
            buffers,
            meshes,
        })
    }

    pub fn draw(&mut self, scene: &Scene) -> Result<(), String> {
        draw::draw_frame(self, scene)
    }
}
