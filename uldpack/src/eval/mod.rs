mod fitness;
mod stability;

#[doc(inline)]
pub use fitness::FitnessBreakdown;
#[doc(inline)]
pub use fitness::PenaltyWeights;
#[doc(inline)]
pub use fitness::evaluate_fitness;
#[doc(inline)]
pub use fitness::evaluate_fitness_with;
#[doc(inline)]
pub use stability::is_placed_item_stable;
#[doc(inline)]
pub use stability::is_stable;
