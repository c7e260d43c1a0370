//! Service Module
//!
//! Course lookup logic sitting between the HTTP layer and the gateways.

mod resolver;


pub use resolver::CourseResolver;
