use crate::domain::errors::ValuationError;
use crate::domain::valuation::analysis::{
    AnalyzedResult, ConfidenceTier, MarketDelta, PriceRange, RELIABLE_CONFIDENCE,
};
use crate::domain::valuation::estimate::Estimate;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal_macros::dec;
use tracing::debug;

/// Derives display analytics from an estimate against a fixed market average.
#[derive(Debug, Clone)]
pub struct ResultAnalyzer {
    market_average: Decimal,
}

impl ResultAnalyzer {
    pub fn new(market_average: Decimal) -> Result<Self, ValuationError> {
        ensure_market_average(market_average)?;
        Ok(Self { market_average })
    }

    /// Band of `price ± price * (1 - confidence/100) / 2`.
    ///
    /// Confidence is clamped to `[0, 100]` (NaN counts as 0), so the band
    /// always contains the price and never widens as confidence rises.
    pub fn price_range(price: Decimal, confidence: f64) -> PriceRange {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 100.0)
        };
        let confidence = Decimal::from_f64(confidence).unwrap_or(Decimal::ZERO);

        let margin = (price * (Decimal::ONE - confidence / dec!(100)) * dec!(0.5)).abs();
        PriceRange {
            low: price - margin,
            high: price + margin,
        }
    }

    pub fn confidence_tier(confidence: f64) -> ConfidenceTier {
        ConfidenceTier::from_confidence(confidence)
    }

    /// Signed difference from the market average, in currency and percent.
    ///
    /// An average so small that the percentage leaves the decimal range is
    /// reported as degenerate, like zero.
    pub fn market_delta(
        price: Decimal,
        market_average: Decimal,
    ) -> Result<MarketDelta, ValuationError> {
        ensure_market_average(market_average)?;

        let degenerate = || ValuationError::DegenerateMarketAverage {
            value: market_average.to_string(),
        };
        let amount = price.checked_sub(market_average).ok_or_else(degenerate)?;
        let percent = amount
            .checked_div(market_average)
            .and_then(|ratio| ratio.checked_mul(dec!(100)))
            .ok_or_else(degenerate)?
            .to_f64()
            .unwrap_or(0.0);
        Ok(MarketDelta {
            amount,
            percent,
            market_average,
        })
    }

    pub fn analyze(&self, estimate: &Estimate) -> Result<AnalyzedResult, ValuationError> {
        analyze(estimate, self.market_average)
    }
}

/// Stateless form of [`ResultAnalyzer::analyze`].
pub fn analyze(estimate: &Estimate, market_average: Decimal) -> Result<AnalyzedResult, ValuationError> {
    let market_delta = ResultAnalyzer::market_delta(estimate.price, market_average)?;
    let result = AnalyzedResult {
        price_range: ResultAnalyzer::price_range(estimate.price, estimate.confidence),
        confidence_tier: ResultAnalyzer::confidence_tier(estimate.confidence),
        market_delta,
        reliable: estimate.confidence >= RELIABLE_CONFIDENCE,
    };

    debug!(
        "ResultAnalyzer: price={} range=[{}, {}] tier={} delta={} ({:.1}%)",
        estimate.price,
        result.price_range.low,
        result.price_range.high,
        result.confidence_tier,
        result.market_delta.amount,
        result.market_delta.percent
    );
    Ok(result)
}

fn ensure_market_average(market_average: Decimal) -> Result<(), ValuationError> {
    if market_average <= Decimal::ZERO {
        return Err(ValuationError::DegenerateMarketAverage {
            value: market_average.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::valuation::features::Features;

    fn estimate(price: Decimal, confidence: f64) -> Estimate {
        Estimate {
            price,
            confidence,
            model_name: "XGBoost Regressor".to_string(),
            features: Features::default(),
        }
    }

    #[test]
    fn test_price_range_margin() {
        let range = ResultAnalyzer::price_range(dec!(625000), 90.0);
        assert_eq!(range.low, dec!(593750));
        assert_eq!(range.high, dec!(656250));
    }

    #[test]
    fn test_price_range_collapses_at_full_confidence() {
        let range = ResultAnalyzer::price_range(dec!(500000), 100.0);
        assert_eq!(range.low, dec!(500000));
        assert_eq!(range.high, dec!(500000));
    }

    #[test]
    fn test_price_range_widest_at_zero_confidence() {
        let range = ResultAnalyzer::price_range(dec!(500000), 0.0);
        assert_eq!(range.low, dec!(250000));
        assert_eq!(range.high, dec!(750000));

        let nan_range = ResultAnalyzer::price_range(dec!(500000), f64::NAN);
        assert_eq!(nan_range, range);
    }

    #[test]
    fn test_price_range_clamps_excess_confidence() {
        let range = ResultAnalyzer::price_range(dec!(500000), 140.0);
        assert!(range.contains(dec!(500000)));
        assert_eq!(range.width(), Decimal::ZERO);
    }

    #[test]
    fn test_price_range_contains_price() {
        for price in [dec!(0), dec!(1), dec!(425000), dec!(9999999)] {
            for confidence in [0.1, 12.5, 50.0, 85.0, 94.9, 100.0] {
                let range = ResultAnalyzer::price_range(price, confidence);
                assert!(range.low <= price && price <= range.high);
            }
        }
    }

    #[test]
    fn test_price_range_width_monotonic_in_confidence() {
        let price = dec!(625000);
        let mut previous = ResultAnalyzer::price_range(price, 0.1).width();
        let mut confidence = 0.1;
        while confidence <= 100.0 {
            let width = ResultAnalyzer::price_range(price, confidence).width();
            assert!(width <= previous, "width grew at confidence {}", confidence);
            previous = width;
            confidence += 0.7;
        }
    }

    #[test]
    fn test_confidence_tier_boundaries() {
        assert_eq!(ResultAnalyzer::confidence_tier(90.0), ConfidenceTier::High);
        assert_eq!(ResultAnalyzer::confidence_tier(89.9), ConfidenceTier::Good);
        assert_eq!(ResultAnalyzer::confidence_tier(70.0), ConfidenceTier::Moderate);
        assert_eq!(ResultAnalyzer::confidence_tier(69.9), ConfidenceTier::Low);
    }

    #[test]
    fn test_market_delta_above_average() {
        let delta = ResultAnalyzer::market_delta(dec!(500000), dec!(425000)).unwrap();
        assert_eq!(delta.amount, dec!(75000));
        assert!((delta.percent - 17.647).abs() < 0.01);
        assert!(delta.is_above_market());
    }

    #[test]
    fn test_market_delta_below_average() {
        let delta = ResultAnalyzer::market_delta(dec!(340000), dec!(425000)).unwrap();
        assert_eq!(delta.amount, dec!(-85000));
        assert!((delta.percent + 20.0).abs() < 1e-9);
        assert!(!delta.is_above_market());
    }

    #[test]
    fn test_zero_market_average_rejected() {
        let err = ResultAnalyzer::market_delta(dec!(500000), Decimal::ZERO).unwrap_err();
        assert!(matches!(err, ValuationError::DegenerateMarketAverage { .. }));
        assert!(ResultAnalyzer::new(Decimal::ZERO).is_err());
        assert!(ResultAnalyzer::new(dec!(-1)).is_err());
    }

    #[test]
    fn test_tiny_market_average_rejected_without_overflow() {
        let result = ResultAnalyzer::market_delta(dec!(625000), dec!(0.0000000000000000000001));
        assert!(matches!(
            result,
            Err(ValuationError::DegenerateMarketAverage { .. })
        ));

        // Smallest average the configuration accepts still works
        let delta = ResultAnalyzer::market_delta(dec!(625000), dec!(1)).unwrap();
        assert_eq!(delta.amount, dec!(624999));
    }

    #[test]
    fn test_analyze_combines_derivations() {
        let analyzer = ResultAnalyzer::new(dec!(425000)).unwrap();
        let result = analyzer.analyze(&estimate(dec!(500000), 92.4)).unwrap();

        assert_eq!(result.confidence_tier, ConfidenceTier::High);
        assert!(result.reliable);
        assert_eq!(result.market_delta.amount, dec!(75000));
        assert_eq!(result.market_delta.market_average, dec!(425000));
        assert!(result.price_range.contains(dec!(500000)));
    }

    #[test]
    fn test_analyze_flags_unreliable_confidence() {
        let result = analyze(&estimate(dec!(400000), 84.9), dec!(425000)).unwrap();
        assert!(!result.reliable);
        assert_eq!(result.confidence_tier, ConfidenceTier::Good);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let analyzer = ResultAnalyzer::new(dec!(425000)).unwrap();
        let e = estimate(dec!(612345), 88.8);
        assert_eq!(analyzer.analyze(&e).unwrap(), analyzer.analyze(&e).unwrap());
    }
}
