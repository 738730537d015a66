//! # Cognito
//!
//! Metric catalog for Amazon Cognito user pools
//!
//! <https://docs.aws.amazon.com/cognito/latest/developerguide/metrics-for-cognito-user-pools.html>
//!
//! # Example
//! ```
//! use cloudwatch_service_metrics::{cognito, MetricOptions};
//!
//! let pool = cognito::UserPool::from_id("us-east-1_EXAMPLE");
//! let descriptor = cognito::sign_in_successes(&pool, MetricOptions::new());
//!
//! assert_eq!(&*descriptor.namespace, "AWS/Cognito");
//! assert_eq!(descriptor.dimension("UserPool"), Some("us-east-1_EXAMPLE"));
//! ```

use super::{MetricDescriptor, MetricOptions, Unit};
use metrics::SharedString;

/// CloudWatch namespace for all Cognito user pool metrics
pub const NAMESPACE: &str = "AWS/Cognito";

/// Dimension that scopes a metric to a single user pool
const USER_POOL: &str = "UserPool";

/// Reference to a provisioned user pool, identified by its pool id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPool {
    user_pool_id: SharedString,
}

impl UserPool {
    pub fn from_id(user_pool_id: impl Into<SharedString>) -> Self {
        Self {
            user_pool_id: user_pool_id.into(),
        }
    }

    pub fn user_pool_id(&self) -> &SharedString {
        &self.user_pool_id
    }
}

/// The closed set of metric names Cognito publishes under [NAMESPACE]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserPoolMetric {
    SignUpSuccesses,
    SignUpThrottles,
    SignInSuccesses,
    SignInThrottles,
    TokenRefreshSuccesses,
    TokenRefreshThrottles,
    FederationSuccesses,
    FederationThrottles,
}

impl UserPoolMetric {
    pub fn name(&self) -> &'static str {
        match self {
            UserPoolMetric::SignUpSuccesses => "SignUpSuccesses",
            UserPoolMetric::SignUpThrottles => "SignUpThrottles",
            UserPoolMetric::SignInSuccesses => "SignInSuccesses",
            UserPoolMetric::SignInThrottles => "SignInThrottles",
            UserPoolMetric::TokenRefreshSuccesses => "TokenRefreshSuccesses",
            UserPoolMetric::TokenRefreshThrottles => "TokenRefreshThrottles",
            UserPoolMetric::FederationSuccesses => "FederationSuccesses",
            UserPoolMetric::FederationThrottles => "FederationThrottles",
        }
    }

    // Cognito publishes every user pool metric as a count
    pub fn default_unit(&self) -> Unit {
        Unit::Count
    }
}

/// Descriptor for `metric` scoped to `user_pool`, or aggregated across all
/// user pools when `user_pool` is `None`
pub fn metric<'a>(
    user_pool: impl Into<Option<&'a UserPool>>,
    metric: UserPoolMetric,
    options: MetricOptions,
) -> MetricDescriptor {
    let dimension = user_pool
        .into()
        .map(|pool| (SharedString::from(USER_POOL), pool.user_pool_id().clone()));

    MetricDescriptor::build(NAMESPACE, metric.name(), dimension, options.or_unit(metric.default_unit()))
}

pub fn sign_up_successes<'a>(
    user_pool: impl Into<Option<&'a UserPool>>,
    options: MetricOptions,
) -> MetricDescriptor {
    metric(user_pool, UserPoolMetric::SignUpSuccesses, options)
}

pub fn sign_up_throttles<'a>(
    user_pool: impl Into<Option<&'a UserPool>>,
    options: MetricOptions,
) -> MetricDescriptor {
    metric(user_pool, UserPoolMetric::SignUpThrottles, options)
}

pub fn sign_in_successes<'a>(
    user_pool: impl Into<Option<&'a UserPool>>,
    options: MetricOptions,
) -> MetricDescriptor {
    metric(user_pool, UserPoolMetric::SignInSuccesses, options)
}

pub fn sign_in_throttles<'a>(
    user_pool: impl Into<Option<&'a UserPool>>,
    options: MetricOptions,
) -> MetricDescriptor {
    metric(user_pool, UserPoolMetric::SignInThrottles, options)
}

pub fn token_refresh_successes<'a>(
    user_pool: impl Into<Option<&'a UserPool>>,
    options: MetricOptions,
) -> MetricDescriptor {
    metric(user_pool, UserPoolMetric::TokenRefreshSuccesses, options)
}

pub fn token_refresh_throttles<'a>(
    user_pool: impl Into<Option<&'a UserPool>>,
    options: MetricOptions,
) -> MetricDescriptor {
    metric(user_pool, UserPoolMetric::TokenRefreshThrottles, options)
}

pub fn federation_successes<'a>(
    user_pool: impl Into<Option<&'a UserPool>>,
    options: MetricOptions,
) -> MetricDescriptor {
    metric(user_pool, UserPoolMetric::FederationSuccesses, options)
}

pub fn federation_throttles<'a>(
    user_pool: impl Into<Option<&'a UserPool>>,
    options: MetricOptions,
) -> MetricDescriptor {
    metric(user_pool, UserPoolMetric::FederationThrottles, options)
}
