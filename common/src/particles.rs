//! 背景パーティクルのシミュレーション
//!
//! 描画はフロントエンド側。ここでは位置更新と接続線の計算だけを行う。

/// パーティクル数
pub const PARTICLE_COUNT: usize = 50;

/// この距離未満のペアを線で結ぶ
pub const LINK_DISTANCE: f64 = 100.0;

pub const PARTICLE_FILL: &str = "rgba(139, 92, 246, 0.3)";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

impl Particle {
    /// `random` は [0, 1) の乱数
    fn spawn(width: f64, height: f64, random: &mut impl FnMut() -> f64) -> Self {
        Self {
            x: random() * width,
            y: random() * height,
            vx: (random() - 0.5) * 0.5,
            vy: (random() - 0.5) * 0.5,
            radius: random() * 2.0 + 1.0,
        }
    }

    fn update(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }
}

/// 接続線
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub alpha: f64,
}

impl Link {
    pub fn stroke_style(&self) -> String {
        format!("rgba(139, 92, 246, {})", self.alpha)
    }
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(count: usize, width: f64, height: f64, mut random: impl FnMut() -> f64) -> Self {
        let particles = (0..count)
            .map(|_| Particle::spawn(width, height, &mut random))
            .collect();
        Self {
            width,
            height,
            particles,
        }
    }

    pub fn from_particles(width: f64, height: f64, particles: Vec<Particle>) -> Self {
        Self {
            width,
            height,
            particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// ウィンドウサイズ変更
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// 1フレーム進める
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.update(width, height);
        }
    }

    /// 近いペアの接続線
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if distance < LINK_DISTANCE {
                    links.push(Link {
                        from: (a.x, a.y),
                        to: (b.x, b.y),
                        alpha: 0.2 * (1.0 - distance / LINK_DISTANCE),
                    });
                }
            }
        }
        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle {
            x,
            y,
            vx,
            vy,
            radius: 1.0,
        }
    }

    #[test]
    fn test_spawn_ranges() {
        let mut seq = [0.0, 0.5, 0.999].iter().copied().cycle();
        let field = ParticleField::new(PARTICLE_COUNT, 800.0, 600.0, move || seq.next().unwrap_or(0.0));

        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for p in field.particles() {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!((-0.25..0.25).contains(&p.vx));
            assert!((-0.25..0.25).contains(&p.vy));
            assert!((1.0..3.0).contains(&p.radius));
        }
    }

    #[test]
    fn test_step_moves_by_velocity() {
        let mut field = ParticleField::from_particles(100.0, 100.0, vec![particle(10.0, 20.0, 0.25, -0.25)]);
        field.step();

        let p = field.particles()[0];
        assert_eq!((p.x, p.y), (10.25, 19.75));
    }

    #[test]
    fn test_bounce_off_edges() {
        let mut field = ParticleField::from_particles(
            100.0,
            100.0,
            vec![particle(99.9, 0.1, 0.2, -0.2)],
        );
        field.step();

        let p = field.particles()[0];
        assert!(p.vx < 0.0);
        assert!(p.vy > 0.0);
    }

    #[test]
    fn test_links_only_within_distance() {
        let field = ParticleField::from_particles(
            500.0,
            500.0,
            vec![
                particle(0.0, 0.0, 0.0, 0.0),
                particle(30.0, 40.0, 0.0, 0.0),
                particle(400.0, 400.0, 0.0, 0.0),
            ],
        );

        let links = field.links();
        assert_eq!(links.len(), 1);
        assert!((links[0].alpha - 0.2 * 0.5).abs() < 1e-9);
        assert_eq!(links[0].to, (30.0, 40.0));
    }

    #[test]
    fn test_resize() {
        let mut field = ParticleField::new(3, 100.0, 100.0, || 0.5);
        field.resize(1920.0, 1080.0);
        assert_eq!(field.size(), (1920.0, 1080.0));
    }
}
