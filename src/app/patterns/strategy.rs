//! Strategy: the discount rule is chosen once, when the calculator is
//! built, instead of by an if/else chain at every call.

pub trait DiscountStrategy {
    fn apply(&self, amount: f64) -> f64;
}

impl<F: Fn(f64) -> f64> DiscountStrategy for F {
    fn apply(&self, amount: f64) -> f64 {
        self(amount)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VipDiscount;

impl DiscountStrategy for VipDiscount {
    fn apply(&self, amount: f64) -> f64 {
        amount * 0.8
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RegularDiscount;

impl DiscountStrategy for RegularDiscount {
    fn apply(&self, amount: f64) -> f64 {
        amount * 0.9
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiscount;

impl DiscountStrategy for NoDiscount {
    fn apply(&self, amount: f64) -> f64 {
        amount
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerTier {
    Vip,
    Regular,
    Guest,
}

impl CustomerTier {
    pub fn strategy(self) -> Box<dyn DiscountStrategy> {
        match self {
            CustomerTier::Vip => Box::new(VipDiscount),
            CustomerTier::Regular => Box::new(RegularDiscount),
            CustomerTier::Guest => Box::new(NoDiscount),
        }
    }
}

/// Context object: holds whichever strategy it was built with.
pub struct DiscountCalculator {
    strategy: Box<dyn DiscountStrategy>,
}

impl DiscountCalculator {
    pub fn new(strategy: impl DiscountStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    pub fn for_tier(tier: CustomerTier) -> Self {
        Self {
            strategy: tier.strategy(),
        }
    }

    pub fn calculate(&self, amount: f64) -> f64 {
        self.strategy.apply(amount)
    }
}
