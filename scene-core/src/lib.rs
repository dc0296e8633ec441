use rand::Rng;

pub mod portfolio;
pub mod typer;

/// A 2D vector used for positions and velocities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance(&self, other: &Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl core::ops::Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl core::ops::Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl core::ops::Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl core::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

/// A small drifting point rendered as a solid dot
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub hue: f32,
}

impl Particle {
    pub fn random(width: f32, height: f32) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            pos: Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)),
            vel: Vec2::new(rng.gen_range(-0.1..0.1), rng.gen_range(-0.1..0.1)),
            radius: rng.gen_range(0.5..2.5),
            hue: rng.gen_range(330.0..360.0),
        }
    }

    /// Near-point-sized, so the wrap band is a fixed margin rather than the
    /// element's own radius.
    fn wrap(&mut self, width: f32, height: f32, margin: f32) {
        if self.pos.x > width + margin {
            self.pos.x = -margin;
        } else if self.pos.x < -margin {
            self.pos.x = width + margin;
        }

        if self.pos.y > height + margin {
            self.pos.y = -margin;
        } else if self.pos.y < -margin {
            self.pos.y = height + margin;
        }
    }
}

/// A large translucent point rendered as a soft radial gradient
#[derive(Debug, Clone)]
pub struct Blob {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub hue: f32,
    pub alpha: f32,
}

impl Blob {
    pub fn random(width: f32, height: f32) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            pos: Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)),
            vel: Vec2::new(rng.gen_range(-0.2..0.2), rng.gen_range(-0.2..0.2)),
            radius: rng.gen_range(60.0..180.0),
            hue: rng.gen_range(340.0..370.0),
            alpha: rng.gen_range(0.05..0.10),
        }
    }

    /// Wraps only once the bounding circle has fully left the viewport, and
    /// re-enters offset by the radius so the gradient never pops in.
    fn wrap(&mut self, width: f32, height: f32) {
        if self.pos.x - self.radius > width {
            self.pos.x = -self.radius;
        } else if self.pos.x + self.radius < 0.0 {
            self.pos.x = width + self.radius;
        }

        if self.pos.y - self.radius > height {
            self.pos.y = -self.radius;
        } else if self.pos.y + self.radius < 0.0 {
            self.pos.y = height + self.radius;
        }
    }
}

/// Tuning constants for the particle field
#[derive(Debug, Clone, Copy)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub blob_count: usize,
    /// Pointer-attraction gain applied to particles each frame.
    pub particle_pull: f32,
    /// Pointer-attraction gain applied to blobs each frame.
    pub blob_pull: f32,
    /// Off-canvas band a particle may occupy before wrapping.
    pub particle_margin: f32,
    /// Pair distance below which a connecting line is drawn.
    pub link_distance: f32,
    /// Divisor for line opacity. Wider than `link_distance`, so opacity
    /// never reaches zero at the draw threshold.
    pub link_fade: f32,
    /// Velocity span handed out when the page becomes visible again.
    pub particle_wake_drift: f32,
    pub blob_wake_drift: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 90,
            blob_count: 6,
            particle_pull: 0.0005,
            blob_pull: 0.012,
            particle_margin: 10.0,
            link_distance: 120.0,
            link_fade: 140.0,
            particle_wake_drift: 0.3,
            blob_wake_drift: 0.6,
        }
    }
}

/// A connecting line between two nearby particles
#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub from: Vec2,
    pub to: Vec2,
    pub opacity: f32,
}

/// The decorative background: a fixed population of particles and blobs
/// drifting over the viewport, steered toward the pointer.
pub struct Field {
    pub particles: Vec<Particle>,
    pub blobs: Vec<Blob>,
    pub pointer: Vec2,
    pub width: f32,
    pub height: f32,
    pub config: FieldConfig,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self::new_with_config(width, height, FieldConfig::default())
    }

    pub fn new_with_config(width: f32, height: f32, config: FieldConfig) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| Particle::random(width, height))
            .collect();
        let blobs = (0..config.blob_count)
            .map(|_| Blob::random(width, height))
            .collect();

        Self {
            particles,
            blobs,
            pointer: Vec2::new(width / 2.0, height / 2.0),
            width,
            height,
            config,
        }
    }

    /// Advance every element by one frame: pointer pull plus base drift,
    /// then wraparound against the current viewport.
    pub fn step(&mut self) {
        let pointer = self.pointer;

        for blob in &mut self.blobs {
            let pull = (pointer - blob.pos) * self.config.blob_pull;
            blob.pos += blob.vel + pull;
            blob.wrap(self.width, self.height);
        }

        for particle in &mut self.particles {
            let pull = (pointer - particle.pos) * self.config.particle_pull;
            particle.pos += particle.vel + pull;
            particle.wrap(self.width, self.height, self.config.particle_margin);
        }
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// New dimensions take effect on the next wrap check; elements already
    /// out of the new bounds wrap on their next step.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Zero every velocity while the page is hidden. Positions are left
    /// untouched.
    pub fn freeze(&mut self) {
        for particle in &mut self.particles {
            particle.vel = Vec2::zero();
        }
        for blob in &mut self.blobs {
            blob.vel = Vec2::zero();
        }
    }

    /// Hand out fresh random velocities when the page becomes visible again.
    /// These are new vectors, not the pre-freeze ones, and drawn from a wider
    /// band than the initial allocation.
    pub fn wake(&mut self) {
        let mut rng = rand::thread_rng();
        let p = self.config.particle_wake_drift / 2.0;
        let b = self.config.blob_wake_drift / 2.0;

        for particle in &mut self.particles {
            particle.vel = Vec2::new(rng.gen_range(-p..p), rng.gen_range(-p..p));
        }
        for blob in &mut self.blobs {
            blob.vel = Vec2::new(rng.gen_range(-b..b), rng.gen_range(-b..b));
        }
    }

    /// Every unordered pair of particles closer than `link_distance`, with
    /// opacity falling off over `link_fade`. Visits every qualifying pair;
    /// the iterator is the seam where a spatial index could slot in.
    pub fn links(&self) -> Links<'_> {
        Links {
            particles: &self.particles,
            distance: self.config.link_distance,
            fade: self.config.link_fade,
            i: 0,
            j: 1,
        }
    }
}

/// Iterator over qualifying particle pairs
pub struct Links<'a> {
    particles: &'a [Particle],
    distance: f32,
    fade: f32,
    i: usize,
    j: usize,
}

impl Iterator for Links<'_> {
    type Item = Link;

    fn next(&mut self) -> Option<Link> {
        while self.i < self.particles.len() {
            while self.j < self.particles.len() {
                let a = &self.particles[self.i];
                let b = &self.particles[self.j];
                self.j += 1;

                let d = a.pos.distance(&b.pos);
                if d < self.distance {
                    return Some(Link {
                        from: a.pos,
                        to: b.pos,
                        opacity: 1.0 - d / self.fade,
                    });
                }
            }
            self.i += 1;
            self.j = self.i + 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle_at(x: f32, y: f32) -> Particle {
        Particle {
            pos: Vec2::new(x, y),
            vel: Vec2::zero(),
            radius: 1.0,
            hue: 330.0,
        }
    }

    #[test]
    fn test_vec2_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_vec2_operations() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);

        let sum = a + b;
        assert_eq!(sum.x, 4.0);
        assert_eq!(sum.y, 6.0);

        let diff = b - a;
        assert_eq!(diff.x, 2.0);
        assert_eq!(diff.y, 2.0);

        let scaled = a * 2.0;
        assert_eq!(scaled.x, 2.0);
        assert_eq!(scaled.y, 4.0);

        let mut acc = a;
        acc += b;
        assert_eq!(acc.x, 4.0);
        assert_eq!(acc.y, 6.0);
    }

    #[test]
    fn test_particle_random_bands() {
        for _ in 0..50 {
            let p = Particle::random(800.0, 600.0);
            assert!(p.pos.x >= 0.0 && p.pos.x < 800.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 600.0);
            assert!(p.radius >= 0.5 && p.radius < 2.5);
            assert!(p.hue >= 330.0 && p.hue < 360.0);
            assert!(p.vel.x.abs() <= 0.1 && p.vel.y.abs() <= 0.1);
        }
    }

    #[test]
    fn test_blob_random_bands() {
        for _ in 0..50 {
            let b = Blob::random(800.0, 600.0);
            assert!(b.radius >= 60.0 && b.radius < 180.0);
            assert!(b.hue >= 340.0 && b.hue < 370.0);
            assert!(b.alpha >= 0.05 && b.alpha < 0.10);
            assert!(b.vel.x.abs() <= 0.2 && b.vel.y.abs() <= 0.2);
        }
    }

    #[test]
    fn test_particle_wrap_uses_fixed_margin() {
        let mut p = particle_at(115.0, 50.0);
        p.wrap(100.0, 100.0, 10.0);
        assert_eq!(p.pos.x, -10.0);

        let mut p = particle_at(-11.0, 50.0);
        p.wrap(100.0, 100.0, 10.0);
        assert_eq!(p.pos.x, 110.0);
    }

    #[test]
    fn test_blob_wrap_offsets_by_radius() {
        let mut b = Blob {
            pos: Vec2::new(161.0, 50.0),
            vel: Vec2::zero(),
            radius: 60.0,
            hue: 340.0,
            alpha: 0.05,
        };
        // 161 - 60 > 100, so the circle has fully left the right edge.
        b.wrap(100.0, 100.0);
        assert_eq!(b.pos.x, -60.0);

        b.pos = Vec2::new(-61.0, 50.0);
        b.wrap(100.0, 100.0);
        assert_eq!(b.pos.x, 160.0);

        // Still partially visible: no wrap.
        b.pos = Vec2::new(130.0, 50.0);
        b.wrap(100.0, 100.0);
        assert_eq!(b.pos.x, 130.0);
    }

    #[test]
    fn test_field_population() {
        let field = Field::new(800.0, 600.0);
        assert_eq!(field.particles.len(), 90);
        assert_eq!(field.blobs.len(), 6);
        assert_eq!(field.pointer, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_population_constant_across_lifecycle() {
        let mut field = Field::new(800.0, 600.0);
        for _ in 0..100 {
            field.step();
        }
        field.resize(400.0, 300.0);
        field.step();
        field.freeze();
        field.wake();
        field.step();

        assert_eq!(field.particles.len(), 90);
        assert_eq!(field.blobs.len(), 6);
    }

    #[test]
    fn test_containment_after_every_step() {
        let mut field = Field::new(200.0, 150.0);
        for _ in 0..500 {
            field.step();
            let margin = field.config.particle_margin;
            for p in &field.particles {
                assert!(p.pos.x >= -margin && p.pos.x <= field.width + margin);
                assert!(p.pos.y >= -margin && p.pos.y <= field.height + margin);
            }
            for b in &field.blobs {
                assert!(b.pos.x >= -b.radius && b.pos.x <= field.width + b.radius);
                assert!(b.pos.y >= -b.radius && b.pos.y <= field.height + b.radius);
            }
        }
    }

    #[test]
    fn test_pointer_pull_direction() {
        let mut field = Field::new(400.0, 400.0);
        field.particles = vec![particle_at(0.0, 0.0)];
        field.blobs.clear();
        field.set_pointer(100.0, 0.0);

        field.step();

        let p = &field.particles[0];
        assert!((p.pos.x - 0.05).abs() < 1e-6);
        assert_eq!(p.pos.y, 0.0);
    }

    #[test]
    fn test_blob_pull_is_stronger() {
        let mut field = Field::new(400.0, 400.0);
        field.particles.clear();
        field.blobs = vec![Blob {
            pos: Vec2::new(0.0, 0.0),
            vel: Vec2::zero(),
            radius: 60.0,
            hue: 340.0,
            alpha: 0.05,
        }];
        field.set_pointer(100.0, 0.0);

        field.step();

        let b = &field.blobs[0];
        assert!((b.pos.x - 1.2).abs() < 1e-5);
        assert_eq!(b.pos.y, 0.0);
    }

    #[test]
    fn test_freeze_zeroes_velocity_and_keeps_positions() {
        let mut field = Field::new(800.0, 600.0);
        let positions: Vec<Vec2> = field.particles.iter().map(|p| p.pos).collect();

        field.freeze();

        for (p, before) in field.particles.iter().zip(&positions) {
            assert_eq!(p.vel, Vec2::zero());
            assert_eq!(p.pos, *before);
        }
        for b in &field.blobs {
            assert_eq!(b.vel, Vec2::zero());
        }
    }

    #[test]
    fn test_wake_assigns_fresh_velocities_within_band() {
        let mut field = Field::new(800.0, 600.0);
        field.freeze();
        field.wake();

        for p in &field.particles {
            assert!(p.vel.x.abs() <= 0.15 && p.vel.y.abs() <= 0.15);
        }
        for b in &field.blobs {
            assert!(b.vel.x.abs() <= 0.3 && b.vel.y.abs() <= 0.3);
        }

        let moving = field
            .particles
            .iter()
            .any(|p| p.vel.x != 0.0 || p.vel.y != 0.0);
        assert!(moving);
    }

    #[test]
    fn test_resize_rewraps_against_new_bounds() {
        let mut field = Field::new(300.0, 300.0);
        field.resize(100.0, 100.0);

        field.particles = vec![particle_at(140.0, 50.0)];
        field.blobs.clear();
        // Pin the pointer on the particle so only the wrap moves it.
        field.set_pointer(140.0, 50.0);

        field.step();

        assert_eq!(field.particles[0].pos.x, -10.0);
    }

    #[test]
    fn test_links_threshold_and_opacity() {
        let mut field = Field::new(500.0, 500.0);
        field.particles = vec![
            particle_at(0.0, 0.0),
            particle_at(70.0, 0.0),
            particle_at(300.0, 300.0),
        ];
        field.blobs.clear();

        let links: Vec<Link> = field.links().collect();
        assert_eq!(links.len(), 1);
        assert!((links[0].opacity - 0.5).abs() < 1e-6);

        // The draw threshold is 120 while the fade divisor stays 140, so a
        // pair just inside the threshold keeps a visible line.
        field.particles = vec![particle_at(0.0, 0.0), particle_at(119.0, 0.0)];
        let links: Vec<Link> = field.links().collect();
        assert_eq!(links.len(), 1);
        assert!((links[0].opacity - (1.0 - 119.0 / 140.0)).abs() < 1e-6);

        field.particles = vec![particle_at(0.0, 0.0), particle_at(120.0, 0.0)];
        assert_eq!(field.links().count(), 0);
    }

    #[test]
    fn test_links_symmetric_under_reordering() {
        let mut field = Field::new(500.0, 500.0);
        field.particles = vec![
            particle_at(0.0, 0.0),
            particle_at(50.0, 0.0),
            particle_at(50.0, 50.0),
        ];
        field.blobs.clear();

        let forward: Vec<Link> = field.links().collect();
        field.particles.reverse();
        let backward: Vec<Link> = field.links().collect();

        assert_eq!(forward.len(), backward.len());
        let mut fwd: Vec<i32> = forward.iter().map(|l| (l.opacity * 1e6) as i32).collect();
        let mut bwd: Vec<i32> = backward.iter().map(|l| (l.opacity * 1e6) as i32).collect();
        fwd.sort();
        bwd.sort();
        assert_eq!(fwd, bwd);
    }
}
