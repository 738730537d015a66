pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

pub use {
    builder::Builder,
    descriptor::{MetricDescriptor, MetricOptions},
    unit::{Statistic, Unit},
};

pub mod cognito;
pub mod sqs;

mod builder;
mod descriptor;
mod unit;
#[cfg(test)]
mod test;
