//! Decorative leaves and flowers drifting behind the hero section

use rand::Rng;
use serde::Serialize;
use std::f64::consts::TAU;

use super::Lighting;
use crate::types::{Rgb, Vec3};

const LEAF_COUNT: usize = 20;
const FLOWER_COUNT: usize = 10;
const FLOWER_ORBIT_RADIUS: f32 = 3.0;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FloatingKind {
    Leaf,
    Flower,
}

impl FloatingKind {
    pub fn color(&self) -> Rgb {
        match self {
            FloatingKind::Leaf => Rgb::from_hex(0x228B22),
            FloatingKind::Flower => Rgb::from_hex(0xFFB6C1),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FloatingElement {
    pub kind: FloatingKind,
    pub origin: Vec3,
    pub speed: f64,
    pub amplitude: f32,
    pub spin: Vec3,
    pub phase: f64,
    pub position: Vec3,
    pub rotation: Vec3,
}

impl FloatingElement {
    fn scatter<R: Rng + ?Sized>(kind: FloatingKind, rng: &mut R) -> Self {
        let origin = Vec3::new(
            rng.gen_range(-20.0..20.0),
            rng.gen_range(-5.0..15.0),
            rng.gen_range(-20.0..20.0),
        );
        Self {
            kind,
            origin,
            speed: rng.gen_range(0.01..0.03),
            amplitude: rng.gen_range(1.0..4.0),
            spin: Vec3::new(
                rng.gen_range(-0.01..0.01),
                rng.gen_range(-0.01..0.01),
                rng.gen_range(-0.01..0.01),
            ),
            phase: rng.gen_range(0.0..TAU),
            position: origin,
            rotation: Vec3::ZERO,
        }
    }

    fn update(&mut self, t: f64) {
        match self.kind {
            FloatingKind::Leaf => {
                self.position.y = self.origin.y + (t * self.speed).sin() as f32 * self.amplitude;
                self.position.x = self.origin.x + (t * self.speed * 0.5).cos() as f32 * 2.0;
                self.rotation.z += self.spin.z * 2.0;
            }
            FloatingKind::Flower => {
                let angle = t * self.speed + self.phase;
                self.position.x = self.origin.x + angle.cos() as f32 * FLOWER_ORBIT_RADIUS;
                self.position.z = self.origin.z + angle.sin() as f32 * FLOWER_ORBIT_RADIUS;
                self.position.y =
                    self.origin.y + (t * self.speed * 2.0).sin() as f32 * self.amplitude * 0.3;
            }
        }
    }
}

/// The background field and its slowly breathing sun
#[derive(Debug, Clone)]
pub struct AmbientField {
    elements: Vec<FloatingElement>,
    sun: Lighting,
}

impl AmbientField {
    pub fn scatter<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let elements = std::iter::repeat(FloatingKind::Leaf)
            .take(LEAF_COUNT)
            .chain(std::iter::repeat(FloatingKind::Flower).take(FLOWER_COUNT))
            .map(|kind| FloatingElement::scatter(kind, &mut *rng))
            .collect();
        Self {
            elements,
            sun: Lighting::default(),
        }
    }

    pub fn update(&mut self, t: f64) {
        for element in &mut self.elements {
            element.update(t);
        }
        let breath = (t * 0.1).sin() as f32;
        self.sun.intensity = 0.8 + breath * 0.3;
        self.sun.color = Rgb::from_hsl(0.1, 0.2, 0.5 + breath * 0.2);
    }

    pub fn elements(&self) -> &[FloatingElement] {
        &self.elements
    }

    pub fn sun(&self) -> &Lighting {
        &self.sun
    }
}
