//! # SQS
//!
//! Metric catalog for Amazon SQS queues
//!
//! <https://docs.aws.amazon.com/AWSSimpleQueueService/latest/SQSDeveloperGuide/sqs-available-cloudwatch-metrics.html>
//!
//! # Example
//! ```
//! use cloudwatch_service_metrics::{sqs, MetricOptions};
//!
//! let queue = sqs::Queue::from_name("orders");
//! let descriptor = sqs::approximate_age_of_oldest_message(&queue, MetricOptions::new());
//!
//! assert_eq!(&*descriptor.namespace, "AWS/SQS");
//! assert_eq!(descriptor.dimension("QueueName"), Some("orders"));
//! ```

use super::{MetricDescriptor, MetricOptions, Unit};
use metrics::SharedString;

/// CloudWatch namespace for all SQS metrics
pub const NAMESPACE: &str = "AWS/SQS";

/// Dimension that scopes a metric to a single queue
const QUEUE_NAME: &str = "QueueName";

/// Reference to a provisioned queue, identified by its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue {
    queue_name: SharedString,
}

impl Queue {
    pub fn from_name(queue_name: impl Into<SharedString>) -> Self {
        Self {
            queue_name: queue_name.into(),
        }
    }

    pub fn queue_name(&self) -> &SharedString {
        &self.queue_name
    }
}

/// The closed set of metric names SQS publishes under [NAMESPACE]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueMetric {
    ApproximateAgeOfOldestMessage,
    ApproximateNumberOfMessagesDelayed,
    ApproximateNumberOfMessagesNotVisible,
    ApproximateNumberOfMessagesVisible,
    NumberOfEmptyReceives,
    NumberOfMessagesDeleted,
    NumberOfMessagesReceived,
    NumberOfMessagesSent,
    SentMessageSize,
}

impl QueueMetric {
    pub fn name(&self) -> &'static str {
        match self {
            QueueMetric::ApproximateAgeOfOldestMessage => "ApproximateAgeOfOldestMessage",
            QueueMetric::ApproximateNumberOfMessagesDelayed => "ApproximateNumberOfMessagesDelayed",
            QueueMetric::ApproximateNumberOfMessagesNotVisible => "ApproximateNumberOfMessagesNotVisible",
            QueueMetric::ApproximateNumberOfMessagesVisible => "ApproximateNumberOfMessagesVisible",
            QueueMetric::NumberOfEmptyReceives => "NumberOfEmptyReceives",
            QueueMetric::NumberOfMessagesDeleted => "NumberOfMessagesDeleted",
            QueueMetric::NumberOfMessagesReceived => "NumberOfMessagesReceived",
            QueueMetric::NumberOfMessagesSent => "NumberOfMessagesSent",
            QueueMetric::SentMessageSize => "SentMessageSize",
        }
    }

    /// Unit SQS publishes this metric in
    pub fn default_unit(&self) -> Unit {
        match self {
            QueueMetric::ApproximateAgeOfOldestMessage => Unit::Seconds,
            QueueMetric::SentMessageSize => Unit::Bytes,
            _ => Unit::Count,
        }
    }
}

/// Descriptor for `metric` scoped to `queue`, or aggregated across all
/// queues when `queue` is `None`
pub fn metric<'a>(
    queue: impl Into<Option<&'a Queue>>,
    metric: QueueMetric,
    options: MetricOptions,
) -> MetricDescriptor {
    let dimension = queue
        .into()
        .map(|queue| (SharedString::from(QUEUE_NAME), queue.queue_name().clone()));

    MetricDescriptor::build(NAMESPACE, metric.name(), dimension, options.or_unit(metric.default_unit()))
}

pub fn approximate_age_of_oldest_message<'a>(
    queue: impl Into<Option<&'a Queue>>,
    options: MetricOptions,
) -> MetricDescriptor {
    metric(queue, QueueMetric::ApproximateAgeOfOldestMessage, options)
}

pub fn approximate_number_of_messages_delayed<'a>(
    queue: impl Into<Option<&'a Queue>>,
    options: MetricOptions,
) -> MetricDescriptor {
    metric(queue, QueueMetric::ApproximateNumberOfMessagesDelayed, options)
}

pub fn approximate_number_of_messages_not_visible<'a>(
    queue: impl Into<Option<&'a Queue>>,
    options: MetricOptions,
) -> MetricDescriptor {
    metric(queue, QueueMetric::ApproximateNumberOfMessagesNotVisible, options)
}

pub fn approximate_number_of_messages_visible<'a>(
    queue: impl Into<Option<&'a Queue>>,
    options: MetricOptions,
) -> MetricDescriptor {
    metric(queue, QueueMetric::ApproximateNumberOfMessagesVisible, options)
}

pub fn number_of_empty_receives<'a>(
    queue: impl Into<Option<&'a Queue>>,
    options: MetricOptions,
) -> MetricDescriptor {
    metric(queue, QueueMetric::NumberOfEmptyReceives, options)
}

pub fn number_of_messages_deleted<'a>(
    queue: impl Into<Option<&'a Queue>>,
    options: MetricOptions,
) -> MetricDescriptor {
    metric(queue, QueueMetric::NumberOfMessagesDeleted, options)
}

pub fn number_of_messages_received<'a>(
    queue: impl Into<Option<&'a Queue>>,
    options: MetricOptions,
) -> MetricDescriptor {
    metric(queue, QueueMetric::NumberOfMessagesReceived, options)
}

pub fn number_of_messages_sent<'a>(
    queue: impl Into<Option<&'a Queue>>,
    options: MetricOptions,
) -> MetricDescriptor {
    metric(queue, QueueMetric::NumberOfMessagesSent, options)
}

pub fn sent_message_size<'a>(
    queue: impl Into<Option<&'a Queue>>,
    options: MetricOptions,
) -> MetricDescriptor {
    metric(queue, QueueMetric::SentMessageSize, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [QueueMetric; 9] = [
        QueueMetric::ApproximateAgeOfOldestMessage,
        QueueMetric::ApproximateNumberOfMessagesDelayed,
        QueueMetric::ApproximateNumberOfMessagesNotVisible,
        QueueMetric::ApproximateNumberOfMessagesVisible,
        QueueMetric::NumberOfEmptyReceives,
        QueueMetric::NumberOfMessagesDeleted,
        QueueMetric::NumberOfMessagesReceived,
        QueueMetric::NumberOfMessagesSent,
        QueueMetric::SentMessageSize,
    ];

    #[test]
    fn no_queue_aggregates_over_all_queues() {
        for which in ALL {
            let descriptor = metric(None, which, MetricOptions::new());
            assert_eq!(&*descriptor.namespace, NAMESPACE);
            assert_eq!(&*descriptor.name, which.name());
            assert!(descriptor.dimensions.is_empty());
            assert_eq!(descriptor.unit, Some(which.default_unit()));
        }
    }

    #[test]
    fn queue_reference_derives_a_single_dimension() {
        let queue = Queue::from_name("orders");
        for which in ALL {
            let descriptor = metric(&queue, which, MetricOptions::new());
            assert_eq!(descriptor.dimensions.len(), 1);
            assert_eq!(descriptor.dimension("QueueName"), Some("orders"));
        }
    }

    #[test]
    fn documented_units() {
        let age = approximate_age_of_oldest_message(None, MetricOptions::new());
        assert_eq!(&*age.name, "ApproximateAgeOfOldestMessage");
        assert_eq!(age.unit, Some(Unit::Seconds));

        let size = sent_message_size(None, MetricOptions::new());
        assert_eq!(&*size.name, "SentMessageSize");
        assert_eq!(size.unit, Some(Unit::Bytes));

        let sent = number_of_messages_sent(None, MetricOptions::new());
        assert_eq!(&*sent.name, "NumberOfMessagesSent");
        assert_eq!(sent.unit, Some(Unit::Count));
    }
}
