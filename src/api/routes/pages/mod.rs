mod router;
pub mod templates;

pub use router::router;
