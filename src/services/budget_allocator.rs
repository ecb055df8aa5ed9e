use crate::models::{
    itinerary::{BudgetBreakdown, BudgetCategory},
    trip::TravelStyle,
};

/// Share of the total budget given to each category, in `BudgetCategory::ALL` order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryWeights {
    pub flights: f64,
    pub accommodation: f64,
    pub food: f64,
    pub activities: f64,
    pub transportation: f64,
}

impl CategoryWeights {
    pub fn for_style(style: TravelStyle) -> Self {
        match style {
            TravelStyle::Budget => Self {
                flights: 0.25,
                accommodation: 0.20,
                food: 0.20,
                activities: 0.20,
                transportation: 0.15,
            },
            TravelStyle::Balanced => Self {
                flights: 0.30,
                accommodation: 0.25,
                food: 0.25,
                activities: 0.15,
                transportation: 0.05,
            },
            TravelStyle::Luxury => Self {
                flights: 0.20,
                accommodation: 0.40,
                food: 0.25,
                activities: 0.10,
                transportation: 0.05,
            },
        }
    }

    pub fn weight(&self, category: BudgetCategory) -> f64 {
        match category {
            BudgetCategory::Flights => self.flights,
            BudgetCategory::Accommodation => self.accommodation,
            BudgetCategory::Food => self.food,
            BudgetCategory::Activities => self.activities,
            BudgetCategory::Transportation => self.transportation,
        }
    }
}

pub struct BudgetAllocator;

impl BudgetAllocator {
    /// Split `total_budget` across categories. Each amount is rounded on its own,
    /// so the parts may drift from the total by a unit or two.
    pub fn allocate(total_budget: f64, style: TravelStyle) -> BudgetBreakdown {
        let weights = CategoryWeights::for_style(style);
        BudgetCategory::ALL
            .iter()
            .map(|category| {
                let amount = (total_budget * weights.weight(*category)).round() as i64;
                (*category, amount)
            })
            .collect()
    }
}
