pub mod itinerary;
pub mod pricing;
pub mod trip;
