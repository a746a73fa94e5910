pub mod context;
pub mod domains;

pub use context::StoreContext;
