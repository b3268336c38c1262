/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for shared functionality of all solid shapes on the lattice
pub trait Shape {
    /// Number of unit cells enclosed by the shape
    fn volume(&self) -> u64;
}
