use super::{Error, MetricDescriptor, MetricOptions, Statistic, Unit};
use metrics::SharedString;
use std::time::Duration;

/// Builder for a [MetricDescriptor] outside the per-service catalogs
///
/// # Example
/// ```
///  let descriptor = cloudwatch_service_metrics::Builder::new()
///      .namespace("MyApplication")
///      .metric_name("Requests")
///      .build()
///      .unwrap();
/// ```
pub struct Builder {
    namespace: Option<SharedString>,
    metric_name: Option<SharedString>,
    options: MetricOptions,
}

impl Builder {
    pub fn new() -> Self {
        Builder {
            namespace: Default::default(),
            metric_name: Default::default(),
            options: Default::default(),
        }
    }

    /// Sets the CloudWatch namespace
    /// * Must be set or build() will return Err("namespace missing")
    pub fn namespace(self, namespace: impl Into<SharedString>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            ..self
        }
    }

    /// Sets the metric name within the namespace
    /// * Must be set or build() will return Err("metric_name missing")
    pub fn metric_name(self, name: impl Into<SharedString>) -> Self {
        Self {
            metric_name: Some(name.into()),
            ..self
        }
    }

    /// Adds a dimension (name, value)
    /// * This method can be called multiple times with distinct names
    /// * Metrics can have no more than 30 dimensions
    pub fn with_dimension(mut self, name: impl Into<SharedString>, value: impl Into<SharedString>) -> Self {
        self.options = self.options.with_dimension(name, value);
        self
    }

    pub fn unit(mut self, unit: Unit) -> Self {
        self.options = self.options.unit(unit);
        self
    }

    pub fn statistic(mut self, statistic: Statistic) -> Self {
        self.options = self.options.statistic(statistic);
        self
    }

    pub fn period(mut self, period: Duration) -> Self {
        self.options = self.options.period(period);
        self
    }

    /// Consumes the builder into an immutable descriptor
    pub fn build(self) -> Result<MetricDescriptor, Error> {
        Ok(MetricDescriptor::build(
            self.namespace.ok_or("namespace missing")?,
            self.metric_name.ok_or("metric_name missing")?,
            std::iter::empty(),
            self.options,
        ))
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
