use std::fmt;
use std::ops::{Index, IndexMut};

use anyhow::{anyhow, Result};
use string_builder::Builder;

/// Three-component column vector carrying a color triple through the
/// conversion pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Vector {
    fn default() -> Vector {
        Vector {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

impl Vector {
    pub fn new(x: f64, y: f64, z: f64) -> Vector {
        Vector { x, y, z }
    }

    pub fn from_vec(v: &[f64]) -> Result<Vector> {
        if v.len() != 3 {
            Err(anyhow!("Expected three components, got {}", v.len()))
        } else {
            Ok(Vector {
                x: v[0],
                y: v[1],
                z: v[2],
            })
        }
    }

    pub fn to_vec(&self) -> Vec<f64> {
        vec![self.x, self.y, self.z]
    }

    pub fn scale(&self, scalar: f64) -> Vector {
        Vector {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }

    pub fn add(&self, other: &Vector) -> Vector {
        Vector {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    pub fn subtract(&self, other: &Vector) -> Vector {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }

    pub fn multiply(&self, other: &Vector) -> Vector {
        Vector::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    pub fn divide(&self, other: &Vector) -> Vector {
        Vector::new(self.x / other.x, self.y / other.y, self.z / other.z)
    }

    pub fn dot_product(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Invalid vector index"),
        }
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Invalid vector index"),
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut b = Builder::default();
        self.to_vec().into_iter().for_each(|component| {
            b.append(format!("{},", component));
        });

        let mut s = b.string().map_err(|_| fmt::Error)?;
        if !s.is_empty() {
            s.remove(s.len() - 1);
        }

        write!(f, "({})", s)
    }
}
