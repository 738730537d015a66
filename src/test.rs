use super::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn options_and_derived_dimension_both_survive_the_merge() {
        let queue = sqs::Queue::from_name("orders");
        let descriptor =
            sqs::number_of_messages_sent(&queue, MetricOptions::new().unit(Unit::Count));

        assert_eq!(descriptor.unit, Some(Unit::Count));
        assert_eq!(descriptor.dimension("QueueName"), Some("orders"));
    }

    #[test]
    fn options_unit_overrides_the_documented_default() {
        let descriptor =
            sqs::sent_message_size(None, MetricOptions::new().unit(Unit::Kilobytes));
        assert_eq!(descriptor.unit, Some(Unit::Kilobytes));
    }

    #[test]
    fn equal_inputs_build_equal_descriptors() {
        let pool = cognito::UserPool::from_id("us-east-1_EXAMPLE");
        let options = MetricOptions::new()
            .statistic(Statistic::Sum)
            .period(Duration::from_secs(300));

        let first = cognito::sign_up_throttles(&pool, options.clone());
        let second = cognito::sign_up_throttles(&pool, options);
        assert_eq!(first, second);
    }

    #[test]
    fn statistic_and_period_pass_through() {
        let descriptor = sqs::approximate_number_of_messages_visible(
            None,
            MetricOptions::new()
                .statistic(Statistic::Maximum)
                .period(Duration::from_secs(60)),
        );

        assert_eq!(descriptor.statistic, Some(Statistic::Maximum));
        assert_eq!(descriptor.period, Some(Duration::from_secs(60)));
    }

    #[test]
    fn builder_round_trip() {
        let descriptor = Builder::new()
            .namespace("AWS/SQS")
            .metric_name("ApproximateAgeOfOldestMessage")
            .with_dimension("QueueName", "orders")
            .unit(Unit::Seconds)
            .statistic(Statistic::Maximum)
            .period(Duration::from_secs(300))
            .build()
            .unwrap();

        assert_eq!(
            descriptor,
            sqs::approximate_age_of_oldest_message(
                &sqs::Queue::from_name("orders"),
                MetricOptions::new()
                    .statistic(Statistic::Maximum)
                    .period(Duration::from_secs(300)),
            )
        );
    }

    #[test]
    fn builder_requires_namespace_and_name() {
        let err = Builder::new().metric_name("Requests").build().unwrap_err();
        assert_eq!(err.to_string(), "namespace missing");

        let err = Builder::new().namespace("MyApplication").build().unwrap_err();
        assert_eq!(err.to_string(), "metric_name missing");
    }

    #[test]
    fn serialized_catalog_descriptor() {
        let queue = sqs::Queue::from_name("orders");
        let descriptor = sqs::approximate_age_of_oldest_message(
            &queue,
            MetricOptions::new()
                .statistic(Statistic::Maximum)
                .period(Duration::from_secs(300)),
        );

        assert_eq!(
            serde_json::to_string(&descriptor).unwrap(),
            r#"{"Namespace":"AWS/SQS","MetricName":"ApproximateAgeOfOldestMessage","Dimensions":{"QueueName":"orders"},"Unit":"Seconds","Statistic":"Maximum","Period":300}"#
        );
    }
}
