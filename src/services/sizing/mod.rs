// Responsive sizing
// Picks a size tier and profile from the physical widget size

mod resolver;

pub use resolver::SizingResolver;
