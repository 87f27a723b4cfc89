pub mod engine;
pub mod export;
pub mod io;
pub mod mutator;
pub mod name;
pub mod report;

pub mod prelude {
    pub use crate::engine::Generator;
    pub use crate::mutator::Rule;
    pub use crate::name::{SplitName, split_name};
}
