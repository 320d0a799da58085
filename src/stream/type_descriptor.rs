use crate::bytes_serializable::BytesSerializable;
use crate::error::SystemError;

/// Declared type metadata, the explicit replacement for reflection-driven
/// reconstruction. Descriptors are `'static` and chained through `ancestor`.
#[derive(Debug)]
pub struct TypeDescriptor {
    pub name: &'static str,
    pub serializable: bool,
    pub has_no_arg_constructor: bool,
    pub ancestor: Option<&'static TypeDescriptor>,
}

pub trait Serializable: BytesSerializable {
    fn descriptor() -> &'static TypeDescriptor;
}

/// Deserialization materializes ancestor state starting at the nearest
/// non-serializable type in the chain, which therefore must offer a
/// zero-argument constructor. Serializable ancestors get their state from the
/// stream and are skipped.
pub fn validate_ancestor_chain(descriptor: &'static TypeDescriptor) -> Result<(), SystemError> {
    let mut ancestor = descriptor.ancestor;
    while let Some(current) = ancestor {
        if !current.serializable {
            if current.has_no_arg_constructor {
                return Ok(());
            }
            return Err(SystemError::ClassInstantiation(
                descriptor.name.to_string(),
                current.name.to_string(),
            ));
        }
        ancestor = current.ancestor;
    }
    Ok(())
}
