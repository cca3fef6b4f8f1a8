use kurbo::{Circle, CircleSegment, PathEl, Point, Rect, Shape as _};

use crate::{
    foundation::core::Vec3,
    foundation::error::{SupernovaError, SupernovaResult},
    render::{FrameRGBA, RenderAdapter},
    scene::SceneSnapshot,
};

const NEAR: f64 = 0.1;
const MIN_DOT_PX: f64 = 1.0;
const TOLERANCE: f64 = 0.1;

const STARFIELD_DOT: f64 = 1.3;
const PARTICLE_DOT: f64 = 2.5;

type Rgba = [u8; 4];
const BACKGROUND: Rgba = [0, 0, 0, 255];
const STARFIELD: Rgba = [255, 255, 255, 255];
const STAR: Rgba = [255, 170, 0, 255];
const SUPERNOVA: Rgba = [255, 165, 0, 255];
const RING: Rgba = [255, 165, 0, 255];
const CORE: Rgba = [0, 0, 0, 255];

/// Headless preview of a snapshot: a pinhole projection rasterized with `vello_cpu`.
///
/// Spheres become discs, the accretion ring an annulus seen face-on, and point clouds
/// small squares whose size shrinks with depth. Anything at or behind the near plane is
/// culled. Narrative captions are not rasterized.
pub struct CpuPreview {
    width: u16,
    height: u16,
    camera_z: f64,
    focal_px: f64,
    pixmap: vello_cpu::Pixmap,
    frame: Option<FrameRGBA>,
}

impl CpuPreview {
    pub const DEFAULT_CAMERA_Z: f64 = 15.0;
    pub const DEFAULT_FOV_DEG: f64 = 60.0;

    pub fn new(width: u32, height: u32) -> SupernovaResult<Self> {
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| SupernovaError::render("preview width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| SupernovaError::render("preview height exceeds u16"))?;
        if width_u16 == 0 || height_u16 == 0 {
            return Err(SupernovaError::render("preview size must be non-zero"));
        }

        let mut preview = Self {
            width: width_u16,
            height: height_u16,
            camera_z: Self::DEFAULT_CAMERA_Z,
            focal_px: 0.0,
            pixmap: vello_cpu::Pixmap::new(width_u16, height_u16),
            frame: None,
        };
        preview.set_fov(Self::DEFAULT_FOV_DEG);
        Ok(preview)
    }

    pub fn with_camera(mut self, camera_z: f64, fov_deg: f64) -> Self {
        self.camera_z = camera_z;
        self.set_fov(fov_deg);
        self
    }

    fn set_fov(&mut self, fov_deg: f64) {
        let half = (fov_deg.clamp(1.0, 179.0) / 2.0).to_radians();
        self.focal_px = (f64::from(self.height) / 2.0) / half.tan();
    }

    /// Last frame drawn, if any.
    pub fn frame(&self) -> Option<&FrameRGBA> {
        self.frame.as_ref()
    }

    pub fn into_frame(self) -> Option<FrameRGBA> {
        self.frame
    }

    #[tracing::instrument(skip(self, snap), fields(tick = snap.tick, phase = ?snap.timeline.phase))]
    pub fn render(&mut self, snap: &SceneSnapshot<'_>) -> SupernovaResult<FrameRGBA> {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        let cam = Camera {
            z: self.camera_z,
            focal: self.focal_px,
            center: Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0),
            bounds: Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height)),
            group_z: snap.timeline.group.position_z,
        };

        set_color(&mut ctx, BACKGROUND);
        ctx.fill_rect(&rect_to_cpu(cam.bounds));

        if snap.starfield.visible {
            set_color(&mut ctx, STARFIELD);
            for p in snap.starfield.points {
                draw_dot(&mut ctx, &cam, *p, STARFIELD_DOT);
            }
        }

        if snap.star.visible {
            set_color(&mut ctx, STAR);
            draw_disc(
                &mut ctx,
                &cam,
                Vec3::new(0.0, 0.0, snap.star.depth),
                snap.star.radius,
            );
        }

        let sn = &snap.supernova;
        if sn.visible {
            let centre = Vec3::new(0.0, 0.0, sn.depth);
            with_opacity(&mut ctx, sn.opacity, |ctx| {
                set_color(ctx, SUPERNOVA);
                draw_disc(ctx, &cam, centre, sn.scale);
            });
            with_opacity(&mut ctx, 0.8, |ctx| {
                set_color(ctx, SUPERNOVA);
                for p in sn.particles {
                    draw_dot(ctx, &cam, centre + p.position, PARTICLE_DOT);
                }
            });
        }

        let bh = &snap.black_hole;
        if bh.visible {
            let centre = Vec3::new(0.0, 0.0, bh.depth);
            if let Some((c, d)) = cam.project(centre) {
                let outer = cam.radius(bh.scale * (bh.ring_radius + bh.ring_tube), d);
                let inner = cam.radius(bh.scale * (bh.ring_radius - bh.ring_tube), d);
                with_opacity(&mut ctx, 0.9, |ctx| {
                    set_color(ctx, RING);
                    let ring = CircleSegment::new(c, outer, inner, 0.0, std::f64::consts::TAU);
                    ctx.fill_path(&bezpath_to_cpu(&ring.to_path(TOLERANCE)));
                });
                set_color(&mut ctx, CORE);
                let core = Circle::new(c, cam.radius(bh.scale * bh.core_radius, d));
                ctx.fill_path(&bezpath_to_cpu(&core.to_path(TOLERANCE)));
            }
        }

        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);

        let frame = FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        };
        self.frame = Some(frame.clone());
        Ok(frame)
    }
}

impl RenderAdapter for CpuPreview {
    fn draw(&mut self, frame: &SceneSnapshot<'_>) -> SupernovaResult<()> {
        self.render(frame).map(|_| ())
    }
}

struct Camera {
    z: f64,
    focal: f64,
    center: Point,
    bounds: Rect,
    group_z: f64,
}

impl Camera {
    /// Screen position and view depth of a group-space point.
    fn project(&self, p: Vec3) -> Option<(Point, f64)> {
        let d = self.z - (p.z + self.group_z);
        if d <= NEAR {
            return None;
        }
        let s = self.focal / d;
        Some((
            Point::new(self.center.x + p.x * s, self.center.y - p.y * s),
            d,
        ))
    }

    fn radius(&self, world: f64, d: f64) -> f64 {
        (world * self.focal / d).max(0.0)
    }
}

fn draw_dot(ctx: &mut vello_cpu::RenderContext, cam: &Camera, p: Vec3, world_size: f64) {
    let Some((c, d)) = cam.project(p) else {
        return;
    };
    let size = (world_size * cam.center.y / d).max(MIN_DOT_PX);
    let dot = Rect::from_center_size(c, (size, size));
    if dot.intersect(cam.bounds).is_zero_area() {
        return;
    }
    ctx.fill_rect(&rect_to_cpu(dot));
}

fn draw_disc(ctx: &mut vello_cpu::RenderContext, cam: &Camera, centre: Vec3, world_radius: f64) {
    let Some((c, d)) = cam.project(centre) else {
        return;
    };
    let r = cam.radius(world_radius, d).max(MIN_DOT_PX / 2.0);
    ctx.fill_path(&bezpath_to_cpu(&Circle::new(c, r).to_path(TOLERANCE)));
}

fn with_opacity(
    ctx: &mut vello_cpu::RenderContext,
    opacity: f64,
    draw: impl FnOnce(&mut vello_cpu::RenderContext),
) {
    let opacity = opacity.clamp(0.0, 1.0) as f32;
    if opacity < 1.0 {
        ctx.push_opacity_layer(opacity);
        draw(ctx);
        ctx.pop_layer();
    } else {
        draw(ctx);
    }
}

fn set_color(ctx: &mut vello_cpu::RenderContext, [r, g, b, a]: Rgba) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
