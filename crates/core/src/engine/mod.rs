pub mod accumulator;
pub mod blur_engine;
pub mod exposure;
pub mod history;
pub mod reset;
