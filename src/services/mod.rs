pub mod budget_allocator;
pub mod destination_catalog;
pub mod itinerary_generation_service;
pub mod itinerary_service;
pub mod pricing_service;
pub mod random_source;
