use super::resources::{MAX_CIRCLES, MAX_RECTS};
use super::Renderer;
use crate::scene::{Scene, BACKGROUND};
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, scene: &Scene) -> Result<(), String> {
    let output = renderer
        .surface
        .get_current_texture()
        .map_err(|e| format!("Failed to get current texture: {:?}", e))?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let (rect_count, circle_count) = update_buffers(renderer, scene);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color {
                        r: BACKGROUND[0],
                        g: BACKGROUND[1],
                        b: BACKGROUND[2],
                        a: BACKGROUND[3],
                    }),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass, rect_count, circle_count);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Upload this frame's instances, returning how many of each were written
fn update_buffers(renderer: &Renderer, scene: &Scene) -> (u32, u32) {
    let rects = &scene.rects[..scene.rects.len().min(MAX_RECTS)];
    let circles = &scene.circles[..scene.circles.len().min(MAX_CIRCLES)];

    if !rects.is_empty() {
        renderer
            .queue
            .write_buffer(&renderer.buffers.rects, 0, bytemuck::cast_slice(rects));
    }
    if !circles.is_empty() {
        renderer
            .queue
            .write_buffer(&renderer.buffers.circles, 0, bytemuck::cast_slice(circles));
    }

    (rects.len() as u32, circles.len() as u32)
}

fn draw_objects<'a>(
    renderer: &'a Renderer,
    pass: &mut RenderPass<'a>,
    rect_count: u32,
    circle_count: u32,
) {
    pass.set_pipeline(&renderer.pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    let (rect, circle) = &renderer.meshes;

    // Rects (court)
    if rect_count > 0 {
        pass.set_vertex_buffer(0, rect.vertex_buffer.slice(..));
        pass.set_index_buffer(rect.index_buffer.slice(..), IndexFormat::Uint16);
        pass.set_vertex_buffer(1, renderer.buffers.rects.slice(..));
        pass.draw_indexed(0..rect.index_count, 0, 0..rect_count);
    }

    // Circles (aim guide, ball)
    if circle_count > 0 {
        pass.set_vertex_buffer(0, circle.vertex_buffer.slice(..));
        pass.set_index_buffer(circle.index_buffer.slice(..), IndexFormat::Uint16);
        pass.set_vertex_buffer(1, renderer.buffers.circles.slice(..));
        pass.draw_indexed(0..circle.index_count, 0, 0..circle_count);
    }
}
