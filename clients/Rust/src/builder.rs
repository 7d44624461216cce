use crate::error::Result;
use crate::types::OptimizationRequest;

/// Builder for [`OptimizationRequest`]
///
/// Unset fields stay at zero and are rejected by [`build`](Self::build).
#[derive(Debug, Default, Clone)]
pub struct OptimizationRequestBuilder {
    min_rate: f64,
    max_power: f64,
    max_bandwidth: f64,
    coeff_a: f64,
    coeff_b: f64,
    coeff_c: f64,
}

impl OptimizationRequestBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower bound on the transmission rate
    pub fn min_rate(mut self, min_rate: f64) -> Self {
        self.min_rate = min_rate;
        self
    }

    /// Upper bound on the transmission power
    pub fn max_power(mut self, max_power: f64) -> Self {
        self.max_power = max_power;
        self
    }

    /// Upper bound on the bandwidth
    pub fn max_bandwidth(mut self, max_bandwidth: f64) -> Self {
        self.max_bandwidth = max_bandwidth;
        self
    }

    /// Set the three objective weights in one go
    ///
    /// # Example
    ///
    /// ```
    /// use latency_opt_sdk::OptimizationRequestBuilder;
    ///
    /// let builder = OptimizationRequestBuilder::new()
    ///     .coefficients(1.2, 0.8, 0.5);
    /// ```
    pub fn coefficients(mut self, a: f64, b: f64, c: f64) -> Self {
        self.coeff_a = a;
        self.coeff_b = b;
        self.coeff_c = c;
        self
    }

    /// Build the request
    ///
    /// # Errors
    ///
    /// Returns [`OptimizerError::InvalidRequest`](crate::OptimizerError::InvalidRequest)
    /// with the same message the service would send: the first field that is
    /// not finite and positive, or the unrealistic-constraint message.
    pub fn build(self) -> Result<OptimizationRequest> {
        let request = OptimizationRequest::new(
            self.min_rate,
            self.max_power,
            self.max_bandwidth,
            self.coeff_a,
            self.coeff_b,
            self.coeff_c,
        );
        Ok(request.validate()?)
    }
}
