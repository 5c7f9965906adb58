//! Generation services: identity resolution, property propagation, and the
//! pipeline that runs them in order.

pub mod pipeline;
pub mod propagate;
pub mod resolve;
