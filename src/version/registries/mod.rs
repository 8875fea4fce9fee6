//! Registry implementations supplying documentation versions

pub mod docusaurus;
pub mod memory;

pub use docusaurus::DocusaurusSite;
pub use memory::InMemoryRegistry;
