//! Minimal CloudFormation template model for lambdakit
//!
//! Provides the surface that service decorators mutate: a template holding
//! a resource map, typed resource properties, and symbolic intrinsic values
//! (`Fn::GetAtt`, `Ref`) that the deploying engine resolves later.

pub mod intrinsics;
pub mod naming;
pub mod resources;
pub mod template;

pub use intrinsics::{get_att, reference};
pub use naming::resource_name;
pub use template::{ResourceNode, ResourceProperties, Template, TemplateError};
