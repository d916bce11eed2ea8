//! Module `market::underlying`.
//!
//! The security an option is written on. An [`Underlying`] carries the spot and
//! volatility that positions feed into the pricing model when they derive a
//! default premium. It is immutable once built and shared between positions
//! through `Arc`.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::core::{PayoffResult, PricingError, ensure_positive};

/// Annualized volatility assumed when none is supplied.
pub const DEFAULT_VOL: f64 = 0.15;

/// Underlying security snapshot.
///
/// # Examples
/// ```
/// use ferric_payoffs::market::Underlying;
///
/// let luv = Underlying::builder("Southwest Airlines")
///     .ticker("LUV")
///     .price(100.0)
///     .vol(0.2)
///     .build()
///     .unwrap();
/// assert_eq!(luv.to_string(), "LUV");
/// assert_eq!(luv.spot(), Some(100.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Underlying {
    name: String,
    ticker: Option<String>,
    price: Option<f64>,
    vol: f64,
}

impl Underlying {
    /// Starts a builder with the default volatility and no spot.
    pub fn builder<S: Into<String>>(name: S) -> UnderlyingBuilder {
        UnderlyingBuilder::new(name)
    }

    /// Security name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exchange ticker, when known.
    pub fn ticker(&self) -> Option<&str> {
        self.ticker.as_deref()
    }

    /// Current spot price, when known.
    #[inline]
    pub fn spot(&self) -> Option<f64> {
        self.price
    }

    /// Annualized volatility.
    #[inline]
    pub fn vol(&self) -> f64 {
        self.vol
    }

    /// Spot price, or an error naming the security when it is unset.
    pub fn require_spot(&self) -> PayoffResult<f64> {
        self.price.ok_or_else(|| {
            PricingError::invalid(format!("underlying '{}' has no spot price", self.name))
        })
    }

    /// Wraps the snapshot for sharing between positions.
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl fmt::Display for Underlying {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ticker.as_deref().unwrap_or(&self.name))
    }
}

/// Builder for [`Underlying`].
#[derive(Debug, Clone)]
pub struct UnderlyingBuilder {
    name: String,
    ticker: Option<String>,
    price: Option<f64>,
    vol: Option<f64>,
}

impl UnderlyingBuilder {
    /// Creates a builder for the named security.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ticker: None,
            price: None,
            vol: None,
        }
    }

    /// Sets the ticker.
    pub fn ticker<S: Into<String>>(mut self, ticker: S) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    /// Sets the spot price.
    #[inline]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the annualized volatility.
    #[inline]
    pub fn vol(mut self, vol: f64) -> Self {
        self.vol = Some(vol);
        self
    }

    /// Validates and builds an [`Underlying`].
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidParameter`] when the spot (if set) or the
    /// volatility is non-positive or non-finite.
    pub fn build(self) -> PayoffResult<Underlying> {
        if let Some(price) = self.price {
            ensure_positive("underlying spot", price)?;
        }
        let vol = self.vol.unwrap_or(DEFAULT_VOL);
        ensure_positive("underlying vol", vol)?;

        Ok(Underlying {
            name: self.name,
            ticker: self.ticker.filter(|t| !t.is_empty()),
            price: self.price,
            vol,
        })
    }
}
