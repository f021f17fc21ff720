pub mod softmax;

pub use softmax::softmax;
