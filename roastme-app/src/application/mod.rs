mod generate_roast;
mod roast_provider;

pub use generate_roast::GenerateRoast;
pub use roast_provider::RoastProvider;
