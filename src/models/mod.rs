// Domain models shared by the sampling loop, sink and presenters

mod sample;
mod tick;

pub use sample::{Metric, Rates, Sample};
pub use tick::TickUpdate;
