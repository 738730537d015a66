//! # Descriptor
//!
//! Metric descriptor values and the merge rules that build them
//!
//! <https://docs.aws.amazon.com/AmazonCloudWatch/latest/APIReference/API_Metric.html>

use super::{Statistic, Unit};
use metrics::SharedString;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::warn;

/// CloudWatch supports a maximum of 30 dimensions per metric
const MAX_DIMENSIONS: usize = 30;

/// An immutable description of a single CloudWatch metric: what to measure,
/// how to aggregate it, and which resource it is scoped to
///
/// Constructed by the per-service catalogs ([sqs](crate::sqs),
/// [cognito](crate::cognito)) or by [Builder](crate::Builder); consumed by
/// alarm and dashboard provisioning code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricDescriptor {
    #[serde(rename = "Namespace")]
    #[serde(serialize_with = "str_view")]
    pub namespace: SharedString,
    #[serde(rename = "MetricName")]
    #[serde(serialize_with = "str_view")]
    pub name: SharedString,
    #[serde(rename = "Dimensions")]
    #[serde(serialize_with = "dimension_map")]
    pub dimensions: BTreeMap<SharedString, SharedString>,
    #[serde(rename = "Unit")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
    #[serde(rename = "Statistic")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistic: Option<Statistic>,
    #[serde(rename = "Period")]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(serialize_with = "period_seconds")]
    pub period: Option<Duration>,
}

/// Caller overrides merged into a descriptor ahead of its fixed fields
///
/// # Example
/// ```
/// use cloudwatch_service_metrics::{MetricOptions, Statistic};
/// use std::time::Duration;
///
/// let options = MetricOptions::new()
///     .statistic(Statistic::Maximum)
///     .period(Duration::from_secs(300));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricOptions {
    pub unit: Option<Unit>,
    pub statistic: Option<Statistic>,
    pub period: Option<Duration>,
    pub dimensions: BTreeMap<SharedString, SharedString>,
}

impl MetricOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the unit a helper would otherwise default
    pub fn unit(self, unit: Unit) -> Self {
        Self {
            unit: Some(unit),
            ..self
        }
    }

    pub fn statistic(self, statistic: Statistic) -> Self {
        Self {
            statistic: Some(statistic),
            ..self
        }
    }

    /// Sets the aggregation period, rounded down to whole seconds on output
    pub fn period(self, period: Duration) -> Self {
        Self {
            period: Some(period),
            ..self
        }
    }

    /// Adds a dimension (name, value)
    /// * This method can be called multiple times with distinct names
    /// * A dimension derived by a catalog helper wins over one added here
    ///   under the same name
    pub fn with_dimension(mut self, name: impl Into<SharedString>, value: impl Into<SharedString>) -> Self {
        self.dimensions.insert(name.into(), value.into());
        self
    }

    // Fills the unit only when the caller supplied none
    pub(crate) fn or_unit(self, unit: Unit) -> Self {
        Self {
            unit: self.unit.or(Some(unit)),
            ..self
        }
    }
}

impl MetricDescriptor {
    /// Merge `namespace`/`name`, `options`, and finally `dimensions` into a
    /// descriptor
    ///
    /// `dimensions` are applied last so they win over any same-named entry
    /// carried by `options`. Cannot fail; an over-large dimension map is
    /// logged and left for the backend to reject.
    pub fn build(
        namespace: impl Into<SharedString>,
        name: impl Into<SharedString>,
        dimensions: impl IntoIterator<Item = (SharedString, SharedString)>,
        options: MetricOptions,
    ) -> Self {
        let MetricOptions {
            unit,
            statistic,
            period,
            dimensions: mut merged,
        } = options;

        for (key, value) in dimensions {
            merged.insert(key, value);
        }

        let name = name.into();
        if merged.len() > MAX_DIMENSIONS {
            warn!("Metric {name} has more than {MAX_DIMENSIONS} dimensions, CloudWatch will reject it");
        }

        Self {
            namespace: namespace.into(),
            name,
            dimensions: merged,
            unit,
            statistic,
            period,
        }
    }

    /// Value of the dimension `name`, if present
    pub fn dimension(&self, name: &str) -> Option<&str> {
        self.dimensions
            .iter()
            .find(|(key, _)| &***key == name)
            .map(|(_, value)| &**value)
    }
}

/// Serialize a period as whole seconds, the granularity CloudWatch accepts
fn period_seconds<S: Serializer>(period: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
    match period {
        Some(period) => serializer.serialize_u64(period.as_secs()),
        None => serializer.serialize_none(),
    }
}

// SharedString is the metrics crate's own copy-on-write string and carries
// no Serialize impl; serialize the str views it derefs to
fn str_view<S: Serializer>(value: &SharedString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value)
}

fn dimension_map<S: Serializer>(
    dimensions: &BTreeMap<SharedString, SharedString>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(dimensions.iter().map(|(name, value)| (&**name, &**value)))
}

#[allow(unused_imports)]
mod tests {
    use super::*;

    #[test]
    fn serialized_field_names() {
        let descriptor = MetricDescriptor::build(
            "GameServerMetrics",
            "FrameTime",
            [
                (SharedString::from("Address"), SharedString::from("10.172.207.225")),
                (SharedString::from("Port"), SharedString::from("7779")),
            ],
            MetricOptions::new()
                .unit(Unit::Milliseconds)
                .statistic(Statistic::Average)
                .period(Duration::from_secs(60)),
        );

        assert_eq!(
            serde_json::to_string(&descriptor).unwrap(),
            r#"{"Namespace":"GameServerMetrics","MetricName":"FrameTime","Dimensions":{"Address":"10.172.207.225","Port":"7779"},"Unit":"Milliseconds","Statistic":"Average","Period":60}"#
        );
    }

    #[test]
    fn unset_fields_are_skipped() {
        let descriptor = MetricDescriptor::build(
            "GameServerMetrics",
            "FrameTime",
            std::iter::empty(),
            MetricOptions::new(),
        );

        assert_eq!(
            serde_json::to_string(&descriptor).unwrap(),
            r#"{"Namespace":"GameServerMetrics","MetricName":"FrameTime","Dimensions":{}}"#
        );
    }

    #[test]
    fn derived_dimensions_win_over_options() {
        let descriptor = MetricDescriptor::build(
            "GameServerMetrics",
            "FrameTime",
            [(SharedString::from("Port"), SharedString::from("7779"))],
            MetricOptions::new()
                .with_dimension("Port", "1234")
                .with_dimension("Address", "10.172.207.225"),
        );

        assert_eq!(descriptor.dimension("Port"), Some("7779"));
        assert_eq!(descriptor.dimension("Address"), Some("10.172.207.225"));
    }

    #[test]
    fn oversized_dimension_maps_still_build() {
        let dimensions = (0..31).map(|i| {
            (
                SharedString::from(format!("Dimension{i}")),
                SharedString::from("value"),
            )
        });
        let descriptor =
            MetricDescriptor::build("GameServerMetrics", "FrameTime", dimensions, MetricOptions::new());

        assert_eq!(descriptor.dimensions.len(), 31);
        assert_eq!(descriptor.dimension("Dimension30"), Some("value"));
    }
}
