pub mod numeric;

pub use numeric::NeuronScalar;
