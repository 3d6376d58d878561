//! Decorative particle field behind the hero.
//!
//! Positions come from a seeded generator so the server render and the
//! hydrated client produce the same markup.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const HERO_PARTICLE_SEED: u64 = 0x00E1_6A5A;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleTone {
    White,
    Purple,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Percent of the container width
    pub left: f64,
    /// Percent of the container height
    pub top: f64,
    /// Pixels
    pub size: f64,
    pub opacity: f64,
    /// Seconds before the float animation starts
    pub delay: f64,
    /// Seconds per float cycle
    pub duration: f64,
    pub tone: ParticleTone,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; opacity: {:.2}; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left, self.top, self.size, self.size, self.opacity, self.delay, self.duration
        )
    }
}

/// `white` small white dots followed by `purple` larger purple ones
pub fn particle_field(seed: u64, white: usize, purple: usize) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut particles = Vec::with_capacity(white + purple);

    for _ in 0..white {
        particles.push(Particle {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            size: rng.gen_range(1.0..3.0),
            opacity: rng.gen_range(0.2..0.7),
            delay: rng.gen_range(0.0..5.0),
            duration: rng.gen_range(3.0..7.0),
            tone: ParticleTone::White,
        });
    }
    for _ in 0..purple {
        particles.push(Particle {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            size: rng.gen_range(2.0..5.0),
            opacity: rng.gen_range(0.3..0.8),
            delay: rng.gen_range(0.0..4.0),
            duration: rng.gen_range(4.0..8.0),
            tone: ParticleTone::Purple,
        });
    }
    particles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_field() {
        let a = particle_field(HERO_PARTICLE_SEED, 50, 30);
        let b = particle_field(HERO_PARTICLE_SEED, 50, 30);
        assert_eq!(a, b);
        assert_ne!(a, particle_field(HERO_PARTICLE_SEED + 1, 50, 30));
    }

    #[test]
    fn test_counts_and_tones() {
        let field = particle_field(HERO_PARTICLE_SEED, 50, 30);
        assert_eq!(field.len(), 80);
        assert!(field[..50].iter().all(|p| p.tone == ParticleTone::White));
        assert!(field[50..].iter().all(|p| p.tone == ParticleTone::Purple));
    }

    #[test]
    fn test_particles_stay_inside_container() {
        for p in particle_field(HERO_PARTICLE_SEED, 50, 30) {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!(p.size > 0.0);
            assert!(p.duration > 0.0);
        }
    }

    #[test]
    fn test_style_is_stable_text() {
        let p = Particle {
            left: 12.3456,
            top: 50.0,
            size: 2.0,
            opacity: 0.5,
            delay: 1.0,
            duration: 4.0,
            tone: ParticleTone::White,
        };
        assert_eq!(
            p.style(),
            "left: 12.35%; top: 50.00%; width: 2.00px; height: 2.00px; opacity: 0.50; animation-delay: 1.00s; animation-duration: 4.00s;"
        );
    }
}
